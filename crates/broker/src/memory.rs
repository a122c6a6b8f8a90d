// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-process cluster
//!
//! A single-process broker implementing all three client capabilities
//! over shared in-memory partition logs. Backs the unit tests and the
//! CLI's embedded cluster mode; `snapshot`/`restore` let the embedded
//! mode persist cluster state between invocations.

use crate::admin::{
    Admin, AdminError, BrokerId, ClusterDescription, NewTopic, PartitionInfo, TopicDescription,
};
use crate::client::{ClientError, Cluster, Consumer, Producer, Record};
use crate::config::{ConsumerOptions, ProducerOptions};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredRecord {
    key: String,
    value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct MemoryPartition {
    replicas: Vec<BrokerId>,
    records: Vec<StoredRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct MemoryTopic {
    partitions: Vec<MemoryPartition>,
    config: BTreeMap<String, String>,
}

/// Serializable image of the whole cluster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterSnapshot {
    broker_ids: Vec<BrokerId>,
    topics: BTreeMap<String, MemoryTopic>,
}

#[derive(Debug, Default)]
struct State {
    broker_ids: Vec<BrokerId>,
    topics: BTreeMap<String, MemoryTopic>,
}

impl State {
    /// Round-robin replica placement starting at the partition index.
    fn place_replicas(&self, partition: usize, factor: u16) -> Vec<BrokerId> {
        let count = self.broker_ids.len();
        (0..factor as usize)
            .map(|i| self.broker_ids[(partition + i) % count])
            .collect()
    }
}

/// An in-process cluster shared by all clients cloned from it.
#[derive(Clone)]
pub struct MemoryCluster {
    state: Arc<Mutex<State>>,
}

impl MemoryCluster {
    pub fn new(broker_count: usize) -> Self {
        let broker_ids = (0..broker_count as BrokerId).collect();
        Self {
            state: Arc::new(Mutex::new(State {
                broker_ids,
                topics: BTreeMap::new(),
            })),
        }
    }

    /// Clone the full cluster state for persistence.
    pub fn snapshot(&self) -> ClusterSnapshot {
        let state = self.state.lock();
        ClusterSnapshot {
            broker_ids: state.broker_ids.clone(),
            topics: state.topics.clone(),
        }
    }

    /// Rebuild a cluster from a persisted snapshot.
    pub fn restore(snapshot: ClusterSnapshot) -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                broker_ids: snapshot.broker_ids,
                topics: snapshot.topics,
            })),
        }
    }
}

impl Default for MemoryCluster {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Admin for MemoryCluster {
    fn create_topic(&self, topic: &NewTopic) -> Result<(), AdminError> {
        let mut state = self.state.lock();
        if topic.name.is_empty() {
            return Err(AdminError::InvalidRequest("empty topic name".to_string()));
        }
        if state.topics.contains_key(&topic.name) {
            return Err(AdminError::TopicExists(topic.name.clone()));
        }

        let partitions = topic.partitions.unwrap_or(1);
        let factor = topic.replication_factor.unwrap_or(1);
        if partitions == 0 || factor == 0 {
            return Err(AdminError::InvalidRequest(
                "partitions and replication factor must be at least 1".to_string(),
            ));
        }
        if factor as usize > state.broker_ids.len() {
            return Err(AdminError::InvalidRequest(format!(
                "replication factor {factor} greater than broker count {}",
                state.broker_ids.len()
            )));
        }

        let partitions = (0..partitions as usize)
            .map(|p| MemoryPartition {
                replicas: state.place_replicas(p, factor),
                records: Vec::new(),
            })
            .collect();
        state.topics.insert(
            topic.name.clone(),
            MemoryTopic {
                partitions,
                config: topic.config.clone(),
            },
        );
        tracing::debug!(topic = %topic.name, "created topic");
        Ok(())
    }

    fn create_partitions(&self, topic: &str, total: u32) -> Result<(), AdminError> {
        let mut state = self.state.lock();
        let current = state
            .topics
            .get(topic)
            .ok_or_else(|| AdminError::UnknownTopic(topic.to_string()))?
            .partitions
            .len();
        if total as usize <= current {
            return Err(AdminError::InvalidRequest(format!(
                "partition count can only be increased: topic '{topic}' has {current}, requested {total}"
            )));
        }

        let factor = state.topics[topic].partitions[0].replicas.len() as u16;
        let grown: Vec<MemoryPartition> = (current..total as usize)
            .map(|p| MemoryPartition {
                replicas: state.place_replicas(p, factor),
                records: Vec::new(),
            })
            .collect();
        if let Some(entry) = state.topics.get_mut(topic) {
            entry.partitions.extend(grown);
        }
        Ok(())
    }

    fn alter_partition_assignments(
        &self,
        topic: &str,
        assignments: &[(i32, Vec<BrokerId>)],
    ) -> Result<(), AdminError> {
        let mut state = self.state.lock();
        let broker_ids = state.broker_ids.clone();
        let entry = state
            .topics
            .get_mut(topic)
            .ok_or_else(|| AdminError::UnknownTopic(topic.to_string()))?;

        for (partition, replicas) in assignments {
            if *partition < 0 || *partition as usize >= entry.partitions.len() {
                return Err(AdminError::InvalidRequest(format!(
                    "unknown partition {partition} of topic '{topic}'"
                )));
            }
            if replicas.is_empty() {
                return Err(AdminError::InvalidRequest(format!(
                    "empty replica list for partition {partition}"
                )));
            }
            if let Some(unknown) = replicas.iter().find(|id| !broker_ids.contains(id)) {
                return Err(AdminError::InvalidRequest(format!(
                    "unknown broker {unknown} in replica list"
                )));
            }
        }
        for (partition, replicas) in assignments {
            entry.partitions[*partition as usize].replicas = replicas.clone();
        }
        Ok(())
    }

    fn alter_topic_config(
        &self,
        topic: &str,
        entries: &BTreeMap<String, String>,
    ) -> Result<(), AdminError> {
        let mut state = self.state.lock();
        let entry = state
            .topics
            .get_mut(topic)
            .ok_or_else(|| AdminError::UnknownTopic(topic.to_string()))?;
        for (key, value) in entries {
            entry.config.insert(key.clone(), value.clone());
        }
        Ok(())
    }

    fn delete_topic(&self, name: &str) -> Result<(), AdminError> {
        let mut state = self.state.lock();
        state
            .topics
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| AdminError::UnknownTopic(name.to_string()))
    }

    fn describe_topic(&self, name: &str) -> Result<Option<TopicDescription>, AdminError> {
        let state = self.state.lock();
        Ok(state.topics.get(name).map(|topic| TopicDescription {
            name: name.to_string(),
            partitions: topic
                .partitions
                .iter()
                .enumerate()
                .map(|(id, p)| PartitionInfo {
                    id: id as i32,
                    replicas: p.replicas.clone(),
                })
                .collect(),
            config: topic.config.clone(),
        }))
    }

    fn describe_cluster(&self) -> Result<ClusterDescription, AdminError> {
        let state = self.state.lock();
        Ok(ClusterDescription {
            broker_ids: state.broker_ids.clone(),
        })
    }
}

/// Producer handle over the shared state.
pub struct MemoryProducer {
    state: Arc<Mutex<State>>,
}

impl Producer for MemoryProducer {
    fn send(&mut self, record: Record) -> Result<(), ClientError> {
        let mut state = self.state.lock();
        let topic = state
            .topics
            .get_mut(&record.topic)
            .ok_or_else(|| ClientError::UnknownTopic(record.topic.clone()))?;
        let partition = topic
            .partitions
            .get_mut(record.partition as usize)
            .filter(|_| record.partition >= 0)
            .ok_or(ClientError::UnknownPartition {
                topic: record.topic.clone(),
                partition: record.partition,
            })?;
        partition.records.push(StoredRecord {
            key: record.key,
            value: record.value,
        });
        Ok(())
    }
}

/// Consumer handle over the shared state, manually assigned.
pub struct MemoryConsumer {
    state: Arc<Mutex<State>>,
    assignment: Option<(String, i32)>,
    offset: usize,
}

impl Consumer for MemoryConsumer {
    fn assign(&mut self, topic: &str, partition: i32) -> Result<(), ClientError> {
        let state = self.state.lock();
        let known = state
            .topics
            .get(topic)
            .ok_or_else(|| ClientError::UnknownTopic(topic.to_string()))?;
        let log = known
            .partitions
            .get(partition as usize)
            .filter(|_| partition >= 0)
            .ok_or(ClientError::UnknownPartition {
                topic: topic.to_string(),
                partition,
            })?;
        // assignment alone starts at the log end, like a fresh consumer
        self.offset = log.records.len();
        self.assignment = Some((topic.to_string(), partition));
        Ok(())
    }

    fn seek_to_beginning(&mut self) -> Result<(), ClientError> {
        if self.assignment.is_none() {
            return Err(ClientError::Unassigned);
        }
        self.offset = 0;
        Ok(())
    }

    fn poll(&mut self, _timeout: Duration) -> Result<Vec<Record>, ClientError> {
        let (topic, partition) = self.assignment.clone().ok_or(ClientError::Unassigned)?;
        let state = self.state.lock();
        let log = state
            .topics
            .get(&topic)
            .and_then(|t| t.partitions.get(partition as usize))
            .ok_or(ClientError::UnknownPartition {
                topic: topic.clone(),
                partition,
            })?;

        let batch: Vec<Record> = log.records[self.offset.min(log.records.len())..]
            .iter()
            .map(|r| Record {
                topic: topic.clone(),
                partition,
                key: r.key.clone(),
                value: r.value.clone(),
            })
            .collect();
        self.offset = log.records.len();
        Ok(batch)
    }
}

impl Cluster for MemoryCluster {
    type Admin = MemoryCluster;
    type Producer = MemoryProducer;
    type Consumer = MemoryConsumer;

    fn admin(&self) -> Result<Self::Admin, ClientError> {
        Ok(self.clone())
    }

    fn producer(&self, options: &ProducerOptions) -> Result<Self::Producer, ClientError> {
        tracing::debug!(client_id = %options.client_id, "opening producer");
        Ok(MemoryProducer {
            state: Arc::clone(&self.state),
        })
    }

    fn consumer(&self, options: &ConsumerOptions) -> Result<Self::Consumer, ClientError> {
        tracing::debug!(client_id = %options.client_id, "opening consumer");
        Ok(MemoryConsumer {
            state: Arc::clone(&self.state),
            assignment: None,
            offset: 0,
        })
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
