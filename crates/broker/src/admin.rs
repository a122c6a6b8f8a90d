// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Administrative capability
//!
//! The exact surface the migration engine needs from a broker's admin
//! protocol, nothing more: topic lifecycle, partition growth, replica
//! reassignment, config patching, and cluster description.

use std::collections::BTreeMap;
use thiserror::Error;

/// Numeric broker node id.
pub type BrokerId = i32;

/// Errors from administrative calls
#[derive(Debug, Error)]
pub enum AdminError {
    #[error("topic already exists: {0}")]
    TopicExists(String),
    #[error("unknown topic: {0}")]
    UnknownTopic(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("transport error: {0}")]
    Transport(String),
}

/// Request to create a topic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTopic {
    pub name: String,
    /// Broker default when unset.
    pub partitions: Option<u32>,
    /// Broker default when unset.
    pub replication_factor: Option<u16>,
    pub config: BTreeMap<String, String>,
}

/// Replica placement of one partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionInfo {
    pub id: i32,
    pub replicas: Vec<BrokerId>,
}

/// Description of an existing topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicDescription {
    pub name: String,
    pub partitions: Vec<PartitionInfo>,
    pub config: BTreeMap<String, String>,
}

impl TopicDescription {
    pub fn partition_count(&self) -> u32 {
        self.partitions.len() as u32
    }
}

/// Description of the cluster itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterDescription {
    pub broker_ids: Vec<BrokerId>,
}

impl ClusterDescription {
    pub fn broker_count(&self) -> usize {
        self.broker_ids.len()
    }
}

/// Administrative calls against the target cluster.
pub trait Admin {
    /// Create a topic. Fails if it already exists.
    fn create_topic(&self, topic: &NewTopic) -> Result<(), AdminError>;

    /// Grow a topic to `total` partitions. Brokers reject a decrease.
    fn create_partitions(&self, topic: &str, total: u32) -> Result<(), AdminError>;

    /// Replace the replica lists of the given partitions.
    fn alter_partition_assignments(
        &self,
        topic: &str,
        assignments: &[(i32, Vec<BrokerId>)],
    ) -> Result<(), AdminError>;

    /// Merge the given config entries into the topic config. Entries not
    /// mentioned are left untouched.
    fn alter_topic_config(
        &self,
        topic: &str,
        entries: &BTreeMap<String, String>,
    ) -> Result<(), AdminError>;

    /// Delete a topic.
    fn delete_topic(&self, name: &str) -> Result<(), AdminError>;

    /// Describe a topic, or `None` if it does not exist.
    fn describe_topic(&self, name: &str) -> Result<Option<TopicDescription>, AdminError>;

    /// Describe the cluster's broker membership.
    fn describe_cluster(&self) -> Result<ClusterDescription, AdminError>;
}
