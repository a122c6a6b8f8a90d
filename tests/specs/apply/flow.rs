//! End-to-end apply / read-back flow against the embedded cluster

use crate::prelude::*;
use tempfile::tempdir;

const CREATE_ORDERS: &str = "\
operation: create
notes: first topic
topic: orders
partitions: 2
replicationFactor: 1
config:
  compression.type: snappy
";

#[test]
fn apply_then_read_back_across_invocations() {
    let dir = tempdir().unwrap();
    init_project(dir.path());
    write_migration(dir.path(), "v0001_create_orders.yaml", CREATE_ORDERS);

    let assert = strata(dir.path()).arg("apply").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("applied 1 migration"));
    assert!(stdout.contains("v0001"));

    // state survives into the next process
    assert!(dir.path().join(".strata/cluster.json").exists());

    let assert = strata(dir.path()).args(["current", "orders"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("v0001"));
    assert!(stdout.contains("Available"));
    assert!(stdout.contains("compression.type"));

    let assert = strata(dir.path()).args(["history", "orders"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("v0001"));
    assert!(stdout.contains("create"));
}

#[test]
fn persisted_cluster_state_carries_internal_topics() {
    let dir = tempdir().unwrap();
    init_project(dir.path());
    write_migration(dir.path(), "v0001_create_orders.yaml", CREATE_ORDERS);
    strata(dir.path()).arg("apply").assert().success();

    let raw = std::fs::read_to_string(dir.path().join(".strata/cluster.json")).unwrap();
    let state: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let topics = state["topics"].as_object().unwrap();
    assert!(topics.contains_key("__strata_state"));
    assert!(topics.contains_key("__strata_history"));
    assert_eq!(topics["__strata_state"]["partitions"].as_array().unwrap().len(), 50);
}

#[test]
fn second_apply_has_nothing_to_do() {
    let dir = tempdir().unwrap();
    init_project(dir.path());
    write_migration(dir.path(), "v0001_create_orders.yaml", CREATE_ORDERS);

    strata(dir.path()).arg("apply").assert().success();
    let assert = strata(dir.path()).arg("apply").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("up to date"));
}

#[test]
fn later_migrations_fold_into_current_state() {
    let dir = tempdir().unwrap();
    init_project(dir.path());
    write_migration(dir.path(), "v0001_create_orders.yaml", CREATE_ORDERS);
    strata(dir.path()).arg("apply").assert().success();

    write_migration(
        dir.path(),
        "v0002_retention.yaml",
        "operation: patch\ntopic: orders\nconfig:\n  retention.ms: 1day\n",
    );
    strata(dir.path()).arg("apply").assert().success();

    let assert = strata(dir.path()).args(["current", "orders"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("v0002"));
    assert!(stdout.contains("86400000"));
    assert!(stdout.contains("compression.type"));
}

#[test]
fn current_of_unknown_topic_reports_no_state() {
    let dir = tempdir().unwrap();
    init_project(dir.path());

    let assert = strata(dir.path()).args(["current", "ghost"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("no state recorded"));
}
