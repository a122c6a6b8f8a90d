//! Help and version output

use crate::prelude::*;
use tempfile::tempdir;

#[test]
fn help_lists_subcommands() {
    let dir = tempdir().unwrap();
    let assert = strata(dir.path()).arg("--help").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    for subcommand in ["init", "gen", "apply", "current", "history"] {
        assert!(stdout.contains(subcommand), "missing '{subcommand}' in help");
    }
}

#[test]
fn version_prints_tool_version() {
    let dir = tempdir().unwrap();
    let assert = strata(dir.path()).arg("--version").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("strata"));
}
