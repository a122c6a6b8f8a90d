// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event-sourced migration store
//!
//! `commit` folds the migration onto the prior state and publishes two
//! records on the resource's partition: the fresh `ResourceCommit` to the
//! state topic and the full `Migration` to the history topic. Reads
//! assign a dedicated consumer to that single partition (never a consumer
//! group), seek to the beginning and scan; the state topic is a plain
//! log, not a compacted index, so the last record matching the key wins.
//!
//! A scan cannot tell "nothing for this key yet" from "broker is slow"
//! by looking at one empty batch, so it only gives up after a fixed run
//! of consecutive empty polls. That bounds the worst-case wait instead
//! of hanging, and an empty result is a normal outcome, not an error.
//!
//! There is no retry here. A failed publish surfaces to the caller; the
//! re-run is safe because committing the same version folds to the same
//! state.

use crate::partitioner::partition_for;
use crate::topics::{ensure_internal_topics, BootstrapError, HISTORY_TOPIC, STATE_TOPIC};
use std::time::Duration;
use strata_broker::{
    ClientError, Cluster, Consumer, ConsumerOptions, Producer, ProducerOptions, Record,
};
use strata_core::{resource_key, Migration, Resource, ResourceCommit, ResourceType};
use thiserror::Error;

/// Blocking wait per poll on the read side.
const POLL_TIMEOUT: Duration = Duration::from_millis(700);

/// Consecutive empty polls before a scan concludes there is no data.
const EMPTY_POLL_BUDGET: u32 = 5;

/// Errors from the migration store
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("connecting to cluster failed: {0}")]
    Connect(#[source] ClientError),
    #[error("publishing {record} for '{key}' failed: {source}")]
    Publish {
        record: &'static str,
        key: String,
        #[source]
        source: ClientError,
    },
    #[error("reading {topic} for '{key}' failed: {source}")]
    Read {
        topic: &'static str,
        key: String,
        #[source]
        source: ClientError,
    },
    #[error("decoding stored record for '{key}' failed: {source}")]
    Codec {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),
}

/// The store consumed by the orchestrator and the read-side commands.
pub trait Backend {
    /// Idempotently provision the store.
    fn init(&self) -> Result<(), BackendError>;

    /// Append the migration to the resource's history and publish the
    /// new folded state. Returns the freshly folded resource.
    fn commit(&self, migration: &Migration) -> Result<Resource, BackendError>;

    /// Latest folded state, or `None` if the resource was never
    /// committed.
    fn current(
        &self,
        resource_type: ResourceType,
        resource_name: &str,
    ) -> Result<Option<Resource>, BackendError>;

    /// All applied migrations for the resource, in application order.
    fn history(
        &self,
        resource_type: ResourceType,
        resource_name: &str,
    ) -> Result<Vec<Migration>, BackendError>;
}

/// Event-sourced store over the cluster's two internal topics.
pub struct TopicBackend<C> {
    cluster: C,
}

impl<C: Cluster> TopicBackend<C> {
    pub fn new(cluster: C) -> Self {
        Self { cluster }
    }

    /// Open a consumer pinned to one partition, rewound to the start.
    fn scan_consumer(
        &self,
        topic: &'static str,
        key: &str,
        partition: i32,
    ) -> Result<C::Consumer, BackendError> {
        let read_err = |source: ClientError| BackendError::Read {
            topic,
            key: key.to_string(),
            source,
        };
        let mut consumer = self
            .cluster
            .consumer(&ConsumerOptions::default())
            .map_err(BackendError::Connect)?;
        consumer.assign(topic, partition).map_err(read_err)?;
        consumer.seek_to_beginning().map_err(read_err)?;
        Ok(consumer)
    }

    /// Last state record for the key, scanning its single partition.
    fn scan_state(&self, key: &str, partition: i32) -> Result<Option<ResourceCommit>, BackendError> {
        let mut consumer = self.scan_consumer(STATE_TOPIC, key, partition)?;
        let mut last = None;
        let mut empty_polls = 0;

        while empty_polls < EMPTY_POLL_BUDGET {
            let batch = consumer.poll(POLL_TIMEOUT).map_err(|source| BackendError::Read {
                topic: STATE_TOPIC,
                key: key.to_string(),
                source,
            })?;
            if batch.is_empty() {
                empty_polls += 1;
                continue;
            }
            empty_polls = 0;

            let mut matched = false;
            for record in &batch {
                if record.key == key {
                    last = Some(decode(key, &record.value)?);
                    matched = true;
                }
            }
            // offsets only move forward, so a batch containing the key
            // means the scan has caught up past the last write for it
            if matched {
                break;
            }
        }
        Ok(last)
    }

    /// Every history record for the key, in offset order.
    fn scan_history(&self, key: &str, partition: i32) -> Result<Vec<Migration>, BackendError> {
        let mut consumer = self.scan_consumer(HISTORY_TOPIC, key, partition)?;
        let mut migrations = Vec::new();
        let mut empty_polls = 0;

        while empty_polls < EMPTY_POLL_BUDGET {
            let batch = consumer.poll(POLL_TIMEOUT).map_err(|source| BackendError::Read {
                topic: HISTORY_TOPIC,
                key: key.to_string(),
                source,
            })?;
            if batch.is_empty() {
                empty_polls += 1;
                continue;
            }
            empty_polls = 0;
            for record in &batch {
                if record.key == key {
                    migrations.push(decode(key, &record.value)?);
                }
            }
        }
        Ok(migrations)
    }
}

fn decode<T: serde::de::DeserializeOwned>(key: &str, value: &str) -> Result<T, BackendError> {
    serde_json::from_str(value).map_err(|source| BackendError::Codec {
        key: key.to_string(),
        source,
    })
}

impl<C: Cluster> Backend for TopicBackend<C> {
    fn init(&self) -> Result<(), BackendError> {
        let admin = self.cluster.admin().map_err(BackendError::Connect)?;
        ensure_internal_topics(&admin)?;
        Ok(())
    }

    fn commit(&self, migration: &Migration) -> Result<Resource, BackendError> {
        let key = migration.key();
        let partition = partition_for(migration.resource_type, &migration.resource_name);

        let prior = self.current(migration.resource_type, &migration.resource_name)?;
        let resource = Resource::fold(prior.as_ref(), migration);

        let mut history = self.history(migration.resource_type, &migration.resource_name)?;
        history.push(migration.clone());
        let commit = ResourceCommit::new(&resource, migration, history);

        let state_value = serde_json::to_string(&commit).map_err(|source| BackendError::Codec {
            key: key.clone(),
            source,
        })?;
        let history_value =
            serde_json::to_string(migration).map_err(|source| BackendError::Codec {
                key: key.clone(),
                source,
            })?;

        let mut producer = self
            .cluster
            .producer(&ProducerOptions::default())
            .map_err(BackendError::Connect)?;
        producer
            .send(Record {
                topic: STATE_TOPIC.to_string(),
                partition,
                key: key.clone(),
                value: state_value,
            })
            .map_err(|source| BackendError::Publish {
                record: "state",
                key: key.clone(),
                source,
            })?;
        producer
            .send(Record {
                topic: HISTORY_TOPIC.to_string(),
                partition,
                key: key.clone(),
                value: history_value,
            })
            .map_err(|source| BackendError::Publish {
                record: "history",
                key: key.clone(),
                source,
            })?;

        tracing::info!(
            key = %key,
            version = %migration.version,
            operation = %migration.operation,
            partition,
            "committed migration"
        );
        Ok(resource)
    }

    fn current(
        &self,
        resource_type: ResourceType,
        resource_name: &str,
    ) -> Result<Option<Resource>, BackendError> {
        let key = resource_key(resource_type, resource_name);
        let partition = partition_for(resource_type, resource_name);
        Ok(self
            .scan_state(&key, partition)?
            .map(ResourceCommit::into_resource))
    }

    fn history(
        &self,
        resource_type: ResourceType,
        resource_name: &str,
    ) -> Result<Vec<Migration>, BackendError> {
        let key = resource_key(resource_type, resource_name);
        let partition = partition_for(resource_type, resource_name);
        self.scan_history(&key, partition)
    }
}

#[cfg(test)]
#[path = "event_sourced_tests.rs"]
mod tests;
