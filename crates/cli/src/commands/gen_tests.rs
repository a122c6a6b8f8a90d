// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tempfile::tempdir;

fn setup() -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("strata.yaml");
    std::fs::write(&config_path, "cluster: embedded\nmigrations: migrations\n").unwrap();
    (dir, config_path)
}

#[test]
fn first_gen_writes_v0001_create_skeleton() {
    let (dir, config_path) = setup();
    let args = GenArgs {
        topic: "orders".to_string(),
        description: None,
    };
    run(&config_path, &args).unwrap();

    let path = dir.path().join("migrations/v0001_orders.yaml");
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("operation: create"));
    assert!(content.contains("topic: orders"));
}

#[test]
fn second_gen_advances_version_and_switches_to_patch() {
    let (dir, config_path) = setup();
    let first = GenArgs {
        topic: "orders".to_string(),
        description: None,
    };
    run(&config_path, &first).unwrap();

    let second = GenArgs {
        topic: "orders".to_string(),
        description: Some("grow partitions".to_string()),
    };
    run(&config_path, &second).unwrap();

    let path = dir.path().join("migrations/v0002_grow_partitions.yaml");
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("operation: patch"));
}

#[test]
fn generated_file_names_match_the_grammar() {
    let (dir, config_path) = setup();
    let args = GenArgs {
        topic: "orders".to_string(),
        description: Some("add retention! (1 day)".to_string()),
    };
    run(&config_path, &args).unwrap();

    let entries: Vec<String> = std::fs::read_dir(dir.path().join("migrations"))
        .unwrap()
        .flatten()
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries.len(), 1);
    assert!(strata_declaration::version_of(Path::new(&entries[0])).is_some());
}

#[test]
fn sanitize_replaces_invalid_characters() {
    assert_eq!(sanitize("add retention!"), "add_retention_");
    assert_eq!(sanitize("already_ok-42"), "already_ok-42");
}
