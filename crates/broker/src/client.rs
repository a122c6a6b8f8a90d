// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Record produce/consume capability
//!
//! The backend opens one producer or consumer per operation, uses it,
//! and drops it: no pooling, no shared client state. Consumers are
//! always manually assigned to a single partition; they never join a
//! consumer group.

use crate::admin::Admin;
use crate::config::{ConsumerOptions, ProducerOptions};
use std::time::Duration;
use thiserror::Error;

/// Errors from produce/consume calls
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("unknown topic: {0}")]
    UnknownTopic(String),
    #[error("unknown partition {partition} of topic {topic}")]
    UnknownPartition { topic: String, partition: i32 },
    #[error("no partition assigned")]
    Unassigned,
    #[error("transport error: {0}")]
    Transport(String),
}

/// One record on a topic partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub topic: String,
    pub partition: i32,
    pub key: String,
    pub value: String,
}

/// Produces records to explicit partitions.
pub trait Producer {
    fn send(&mut self, record: Record) -> Result<(), ClientError>;
}

/// Consumes records from one manually assigned partition.
pub trait Consumer {
    /// Assign this consumer exclusively to a topic partition.
    fn assign(&mut self, topic: &str, partition: i32) -> Result<(), ClientError>;

    /// Rewind the assigned partition to its beginning.
    fn seek_to_beginning(&mut self) -> Result<(), ClientError>;

    /// Fetch the next batch, blocking up to `timeout`. An empty batch
    /// means nothing new was available within the timeout.
    fn poll(&mut self, timeout: Duration) -> Result<Vec<Record>, ClientError>;
}

/// A connectable cluster: the factory for the three capabilities.
pub trait Cluster {
    type Admin: Admin;
    type Producer: Producer;
    type Consumer: Consumer;

    fn admin(&self) -> Result<Self::Admin, ClientError>;
    fn producer(&self, options: &ProducerOptions) -> Result<Self::Producer, ClientError>;
    fn consumer(&self, options: &ConsumerOptions) -> Result<Self::Consumer, ClientError>;
}
