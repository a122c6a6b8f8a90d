//! `strata init` and `strata gen` project scaffolding

use crate::prelude::*;
use tempfile::tempdir;

#[test]
fn init_writes_config_and_migrations_dir() {
    let dir = tempdir().unwrap();
    strata(dir.path()).arg("init").assert().success();

    assert!(dir.path().join("strata.yaml").exists());
    assert!(dir.path().join("migrations").is_dir());

    let config = std::fs::read_to_string(dir.path().join("strata.yaml")).unwrap();
    assert!(config.contains("cluster: embedded"));
}

#[test]
fn init_twice_preserves_existing_config() {
    let dir = tempdir().unwrap();
    strata(dir.path()).arg("init").assert().success();
    std::fs::write(dir.path().join("strata.yaml"), "cluster: embedded\n# edited\n").unwrap();

    strata(dir.path()).arg("init").assert().success();
    let config = std::fs::read_to_string(dir.path().join("strata.yaml")).unwrap();
    assert!(config.contains("# edited"));
}

#[test]
fn gen_writes_sequential_versions() {
    let dir = tempdir().unwrap();
    init_project(dir.path());

    strata(dir.path()).args(["gen", "orders"]).assert().success();
    strata(dir.path())
        .args(["gen", "orders", "--description", "grow"])
        .assert()
        .success();

    assert!(dir.path().join("migrations/v0001_orders.yaml").exists());
    assert!(dir.path().join("migrations/v0002_grow.yaml").exists());
}

#[test]
fn generated_migration_is_applyable() {
    let dir = tempdir().unwrap();
    init_project(dir.path());
    strata(dir.path()).args(["gen", "orders"]).assert().success();
    strata(dir.path()).arg("apply").assert().success();
}
