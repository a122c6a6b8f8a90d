// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use indexmap::IndexMap;
use std::path::PathBuf;
use strata_broker::MemoryCluster;
use strata_core::{Value, Version};

fn declaration(operation: OperationKind, topic: &str) -> MigrationDeclaration {
    MigrationDeclaration {
        version: Version::new(1).unwrap(),
        operation,
        notes: None,
        resource_name: topic.to_string(),
        partitions: None,
        replication_factor: None,
        config: IndexMap::new(),
        source_path: PathBuf::from("v0001_test.yaml"),
    }
}

fn create_topic(cluster: &MemoryCluster, name: &str, partitions: u32, factor: u16) {
    let mut decl = declaration(OperationKind::Create, name);
    decl.partitions = Some(partitions);
    decl.replication_factor = Some(factor);
    Strategy::of(&decl).execute(&decl, cluster).unwrap();
}

#[test]
fn of_maps_operation_kinds() {
    assert_eq!(
        Strategy::of(&declaration(OperationKind::Create, "t")),
        Strategy::Create
    );
    assert_eq!(
        Strategy::of(&declaration(OperationKind::Patch, "t")),
        Strategy::Patch
    );
    assert_eq!(
        Strategy::of(&declaration(OperationKind::Remove, "t")),
        Strategy::Remove
    );
}

#[test]
fn create_builds_topic_with_declared_shape() {
    let cluster = MemoryCluster::new(1);
    let mut decl = declaration(OperationKind::Create, "orders");
    decl.partitions = Some(2);
    decl.replication_factor = Some(1);
    decl.config
        .insert("compression.type".to_string(), Value::plain("snappy"));

    Strategy::of(&decl).execute(&decl, &cluster).unwrap();

    let description = cluster.describe_topic("orders").unwrap().unwrap();
    assert_eq!(description.partition_count(), 2);
    assert_eq!(description.config["compression.type"], "snappy");
}

#[test]
fn create_converts_config_to_machine_strings() {
    let cluster = MemoryCluster::new(1);
    let mut decl = declaration(OperationKind::Create, "orders");
    decl.config
        .insert("retention.ms".to_string(), Value::converted("1day", 86_400_000i64));

    Strategy::of(&decl).execute(&decl, &cluster).unwrap();

    let description = cluster.describe_topic("orders").unwrap().unwrap();
    assert_eq!(description.config["retention.ms"], "86400000");
}

#[test]
fn create_of_existing_topic_fails() {
    let cluster = MemoryCluster::new(1);
    create_topic(&cluster, "orders", 1, 1);

    let decl = declaration(OperationKind::Create, "orders");
    let err = Strategy::of(&decl).execute(&decl, &cluster).unwrap_err();
    assert!(matches!(err, ExecuteError::Create { .. }));
    assert!(err.to_string().contains("already exists"));
}

#[test]
fn patch_increases_partitions() {
    let cluster = MemoryCluster::new(1);
    create_topic(&cluster, "orders", 2, 1);

    let mut decl = declaration(OperationKind::Patch, "orders");
    decl.partitions = Some(4);
    Strategy::of(&decl).execute(&decl, &cluster).unwrap();

    let description = cluster.describe_topic("orders").unwrap().unwrap();
    assert_eq!(description.partition_count(), 4);
}

#[test]
fn patch_partition_decrease_is_rejected_by_admin_layer() {
    let cluster = MemoryCluster::new(1);
    create_topic(&cluster, "orders", 4, 1);

    let mut decl = declaration(OperationKind::Patch, "orders");
    decl.partitions = Some(2);
    let err = Strategy::of(&decl).execute(&decl, &cluster).unwrap_err();
    assert!(matches!(err, ExecuteError::Patch { .. }));
    assert!(err.to_string().contains("increased"));
}

#[test]
fn patch_replication_factor_over_broker_count_fails_before_reassigning() {
    let cluster = MemoryCluster::new(2);
    create_topic(&cluster, "orders", 2, 1);
    let before = cluster.describe_topic("orders").unwrap().unwrap();

    let mut decl = declaration(OperationKind::Patch, "orders");
    decl.replication_factor = Some(3);
    let err = Strategy::of(&decl).execute(&decl, &cluster).unwrap_err();

    assert!(matches!(err, ExecuteError::Patch { .. }));
    assert!(err.to_string().contains("replication factor"));
    // no reassignment was issued
    let after = cluster.describe_topic("orders").unwrap().unwrap();
    assert_eq!(before.partitions, after.partitions);
}

#[test]
fn patch_grows_replication_factor() {
    let cluster = MemoryCluster::new(3);
    create_topic(&cluster, "orders", 2, 1);

    let mut decl = declaration(OperationKind::Patch, "orders");
    decl.replication_factor = Some(3);
    Strategy::of(&decl).execute(&decl, &cluster).unwrap();

    let description = cluster.describe_topic("orders").unwrap().unwrap();
    assert!(description.partitions.iter().all(|p| p.replicas.len() == 3));
}

#[test]
fn patch_shrinks_replication_factor_keeping_leader() {
    let cluster = MemoryCluster::new(3);
    create_topic(&cluster, "orders", 2, 3);
    let before = cluster.describe_topic("orders").unwrap().unwrap();

    let mut decl = declaration(OperationKind::Patch, "orders");
    decl.replication_factor = Some(1);
    Strategy::of(&decl).execute(&decl, &cluster).unwrap();

    let after = cluster.describe_topic("orders").unwrap().unwrap();
    for (prior, shrunk) in before.partitions.iter().zip(after.partitions.iter()) {
        assert_eq!(shrunk.replicas, vec![prior.replicas[0]]);
    }
}

#[test]
fn patch_replication_of_missing_topic_fails() {
    let cluster = MemoryCluster::new(3);
    let mut decl = declaration(OperationKind::Patch, "ghost");
    decl.replication_factor = Some(2);
    let err = Strategy::of(&decl).execute(&decl, &cluster).unwrap_err();
    assert!(err.to_string().contains("does not exist"));
}

#[test]
fn patch_merges_config_entries() {
    let cluster = MemoryCluster::new(1);
    let mut create = declaration(OperationKind::Create, "orders");
    create
        .config
        .insert("compression.type".to_string(), Value::plain("lz4"));
    Strategy::of(&create).execute(&create, &cluster).unwrap();

    let mut patch = declaration(OperationKind::Patch, "orders");
    patch
        .config
        .insert("retention.bytes".to_string(), Value::plain(1024));
    Strategy::of(&patch).execute(&patch, &cluster).unwrap();

    let description = cluster.describe_topic("orders").unwrap().unwrap();
    assert_eq!(description.config.len(), 2);
    assert_eq!(description.config["compression.type"], "lz4");
    assert_eq!(description.config["retention.bytes"], "1024");
}

#[test]
fn patch_with_no_fields_is_a_no_op() {
    let cluster = MemoryCluster::new(1);
    create_topic(&cluster, "orders", 2, 1);
    let before = cluster.describe_topic("orders").unwrap().unwrap();

    let decl = declaration(OperationKind::Patch, "orders");
    Strategy::of(&decl).execute(&decl, &cluster).unwrap();

    let after = cluster.describe_topic("orders").unwrap().unwrap();
    assert_eq!(before, after);
}

#[test]
fn remove_deletes_existing_topic() {
    let cluster = MemoryCluster::new(1);
    create_topic(&cluster, "orders", 1, 1);

    let decl = declaration(OperationKind::Remove, "orders");
    Strategy::of(&decl).execute(&decl, &cluster).unwrap();

    assert!(cluster.describe_topic("orders").unwrap().is_none());
}

#[test]
fn remove_of_missing_topic_fails_without_deleting() {
    let cluster = MemoryCluster::new(1);
    let decl = declaration(OperationKind::Remove, "ghost");
    let err = Strategy::of(&decl).execute(&decl, &cluster).unwrap_err();
    assert!(matches!(err, ExecuteError::Remove { .. }));
    assert!(err.to_string().contains("does not exist"));
}
