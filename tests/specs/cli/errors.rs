//! Error reporting at the CLI boundary

use crate::prelude::*;
use tempfile::tempdir;

#[test]
fn unknown_subcommand_fails() {
    let dir = tempdir().unwrap();
    strata(dir.path()).arg("rollback").assert().failure();
}

#[test]
fn apply_without_config_points_at_init() {
    let dir = tempdir().unwrap();
    let assert = strata(dir.path()).arg("apply").assert().failure();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("strata init"));
}

#[test]
fn apply_rejects_malformed_file_names() {
    let dir = tempdir().unwrap();
    init_project(dir.path());
    write_migration(dir.path(), "create_orders.yaml", "operation: create\ntopic: orders\n");

    let assert = strata(dir.path()).arg("apply").assert().failure();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("create_orders.yaml"));
}

#[test]
fn apply_reports_failing_version_and_file() {
    let dir = tempdir().unwrap();
    init_project(dir.path());
    // the embedded cluster has one broker; factor 5 cannot be satisfied
    write_migration(
        dir.path(),
        "v0001_create.yaml",
        "operation: create\ntopic: orders\npartitions: 1\n",
    );
    write_migration(
        dir.path(),
        "v0002_grow.yaml",
        "operation: patch\ntopic: orders\nreplicationFactor: 5\n",
    );

    let assert = strata(dir.path()).arg("apply").assert().failure();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("v0002"));
    assert!(stderr.contains("replication factor"));
}
