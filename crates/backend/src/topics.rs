// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Internal topic bootstrap
//!
//! First run against a cluster provisions the two internal topics; every
//! later run describes them and moves on, so bootstrap is idempotent.

use crate::partitioner::INTERNAL_PARTITIONS;
use std::collections::BTreeMap;
use strata_broker::{Admin, AdminError, NewTopic};
use thiserror::Error;

/// Latest folded resource snapshot per key.
pub const STATE_TOPIC: &str = "__strata_state";

/// Append-only applied-migration log.
pub const HISTORY_TOPIC: &str = "__strata_history";

/// Replication wanted for the internal topics; clusters with fewer
/// brokers get one replica per broker instead.
const TARGET_REPLICATION: u16 = 3;

/// Errors from internal topic bootstrap
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("describing internal topic '{topic}' failed: {source}")]
    Describe {
        topic: &'static str,
        #[source]
        source: AdminError,
    },
    #[error("creating internal topic '{topic}' failed: {source}")]
    Create {
        topic: &'static str,
        #[source]
        source: AdminError,
    },
}

/// Ensure both internal topics exist.
pub fn ensure_internal_topics<A: Admin>(admin: &A) -> Result<(), BootstrapError> {
    let factor = replication_factor(admin)?;
    for topic in [STATE_TOPIC, HISTORY_TOPIC] {
        let existing = admin
            .describe_topic(topic)
            .map_err(|source| BootstrapError::Describe { topic, source })?;
        if existing.is_some() {
            tracing::debug!(topic, "internal topic present");
            continue;
        }

        admin
            .create_topic(&NewTopic {
                name: topic.to_string(),
                partitions: Some(INTERNAL_PARTITIONS),
                replication_factor: Some(factor),
                config: BTreeMap::new(),
            })
            .map_err(|source| BootstrapError::Create { topic, source })?;
        tracing::info!(
            topic,
            partitions = INTERNAL_PARTITIONS,
            replication = factor,
            "created internal topic"
        );
    }
    Ok(())
}

/// Target replication, capped at the cluster's broker count.
fn replication_factor<A: Admin>(admin: &A) -> Result<u16, BootstrapError> {
    let cluster = admin
        .describe_cluster()
        .map_err(|source| BootstrapError::Describe {
            topic: STATE_TOPIC,
            source,
        })?;
    Ok(TARGET_REPLICATION.min(cluster.broker_count().max(1) as u16))
}

#[cfg(test)]
#[path = "topics_tests.rs"]
mod tests;
