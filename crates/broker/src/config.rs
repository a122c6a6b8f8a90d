// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Client configuration contracts
//!
//! These defaults are the delivery contract of the migration store, not
//! tuning knobs: the producer must keep per-partition order under retry
//! (idempotent, acks from all replicas, one in-flight request) and the
//! read side must only ever observe committed records.

use serde::{Deserialize, Serialize};

/// Producer acknowledgement level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Acks {
    One,
    All,
}

/// Payload compression codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    None,
    Snappy,
    Lz4,
    Zstd,
}

/// Consumer isolation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IsolationLevel {
    ReadUncommitted,
    ReadCommitted,
}

/// Producer contract for the migration store's internal topics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProducerOptions {
    pub client_id: String,
    pub enable_idempotence: bool,
    pub acks: Acks,
    /// Kept at 1 so retries cannot reorder writes within a partition.
    pub max_in_flight: u32,
    pub compression: Compression,
}

impl Default for ProducerOptions {
    fn default() -> Self {
        Self {
            client_id: "strata-producer".to_string(),
            enable_idempotence: true,
            acks: Acks::All,
            max_in_flight: 1,
            compression: Compression::Lz4,
        }
    }
}

/// Consumer contract for the migration store's internal topics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumerOptions {
    pub client_id: String,
    pub enable_auto_commit: bool,
    pub allow_auto_create_topics: bool,
    pub isolation: IsolationLevel,
}

impl Default for ConsumerOptions {
    fn default() -> Self {
        Self {
            client_id: "strata-consumer".to_string(),
            enable_auto_commit: false,
            allow_auto_create_topics: false,
            isolation: IsolationLevel::ReadCommitted,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
