// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Patch strategy
//!
//! Applies up to three independent sub-operations, each driven by which
//! declaration fields are set: partition growth, replication factor
//! change via replica reassignment, and config patching. Partition
//! decreases are not validated here: the admin layer rejects them with
//! its own message.

use super::config_entries;
use crate::error::ExecuteError;
use strata_broker::{Admin, BrokerId, ClusterDescription};
use strata_declaration::MigrationDeclaration;

pub(super) fn execute<A: Admin>(
    declaration: &MigrationDeclaration,
    admin: &A,
) -> Result<(), ExecuteError> {
    let topic = &declaration.resource_name;
    let patch_err = |message: String| ExecuteError::Patch {
        topic: topic.clone(),
        message,
    };

    if let Some(partitions) = declaration.partitions {
        admin
            .create_partitions(topic, partitions)
            .map_err(|e| patch_err(e.to_string()))?;
        tracing::info!(topic = %topic, partitions, "increased partitions");
    }

    if let Some(factor) = declaration.replication_factor {
        change_replication(topic, factor, admin)?;
    }

    if !declaration.config.is_empty() {
        admin
            .alter_topic_config(topic, &config_entries(declaration))
            .map_err(|e| patch_err(e.to_string()))?;
        tracing::info!(topic = %topic, entries = declaration.config.len(), "patched config");
    }

    Ok(())
}

/// Change the replication factor by reassigning every partition's
/// replica list to the new size.
///
/// The broker count check must come first: the reassignment call itself
/// does not distinguish "factor larger than the cluster" from other
/// invalid assignments, and failing before any admin call keeps the
/// patch all-or-nothing.
fn change_replication<A: Admin>(
    topic: &str,
    factor: u16,
    admin: &A,
) -> Result<(), ExecuteError> {
    let patch_err = |message: String| ExecuteError::Patch {
        topic: topic.to_string(),
        message,
    };

    let cluster = admin
        .describe_cluster()
        .map_err(|e| patch_err(e.to_string()))?;
    if factor as usize > cluster.broker_count() {
        return Err(patch_err(format!(
            "replication factor {factor} exceeds broker count {}",
            cluster.broker_count()
        )));
    }

    let description = admin
        .describe_topic(topic)
        .map_err(|e| patch_err(e.to_string()))?
        .ok_or_else(|| patch_err(format!("topic '{topic}' does not exist")))?;

    let assignments: Vec<(i32, Vec<BrokerId>)> = description
        .partitions
        .iter()
        .map(|p| (p.id, resize_replicas(&p.replicas, factor, &cluster)))
        .collect();

    admin
        .alter_partition_assignments(topic, &assignments)
        .map_err(|e| patch_err(e.to_string()))?;
    tracing::info!(topic = %topic, factor, "reassigned replicas");
    Ok(())
}

/// Extend or shrink one replica list to the requested size.
///
/// Shrinking truncates from the tail so the current leader (first
/// replica) survives. Growth appends brokers not yet in the list, in
/// cluster order.
fn resize_replicas(current: &[BrokerId], factor: u16, cluster: &ClusterDescription) -> Vec<BrokerId> {
    let target = factor as usize;
    let mut replicas: Vec<BrokerId> = current.iter().copied().take(target).collect();
    for id in &cluster.broker_ids {
        if replicas.len() >= target {
            break;
        }
        if !replicas.contains(id) {
            replicas.push(*id);
        }
    }
    replicas
}
