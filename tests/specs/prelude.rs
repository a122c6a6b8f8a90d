//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use assert_cmd::Command;
use std::path::Path;

/// A `strata` invocation rooted in the given project directory.
pub fn strata(project: &Path) -> Command {
    let mut cmd = Command::cargo_bin("strata").unwrap();
    cmd.current_dir(project);
    cmd
}

/// Write one migration file into `<project>/migrations/`.
pub fn write_migration(project: &Path, name: &str, content: &str) {
    let dir = project.join("migrations");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(name), content).unwrap();
}

/// A ready-to-use project: config written, migrations dir present.
pub fn init_project(project: &Path) {
    strata(project).arg("init").assert().success();
}
