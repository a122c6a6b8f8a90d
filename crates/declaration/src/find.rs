// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Migration file discovery
//!
//! File names follow `v####_description.yaml` where the description is
//! `[a-zA-Z0-9_-]{0,246}` and the extension is `yaml` or `yml`. Files
//! with other extensions are ignored; a yaml file that breaks the
//! grammar is an error, not a skip.

use crate::declaration::{DeclarationError, MigrationDeclaration};
use regex::Regex;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use strata_core::Version;
use thiserror::Error;

// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static FILE_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v(\d{4})_([a-zA-Z0-9_-]{0,246})\.(yaml|yml)$")
        .expect("migration file name pattern is valid")
});

/// Errors from migration file scanning
#[derive(Debug, Error)]
pub enum FindError {
    #[error("invalid migration file name '{0}': expected v####_description.yaml")]
    InvalidFileName(String),
    #[error("duplicate version {version} in {dir}")]
    DuplicateVersion { version: Version, dir: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A migration file with its version extracted from the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationFile {
    pub path: PathBuf,
    pub version: Version,
}

/// Extract the version from a migration file name.
///
/// Returns `None` when the name does not match the grammar.
pub fn version_of(path: &Path) -> Option<Version> {
    let name = path.file_name()?.to_str()?;
    let captures = FILE_NAME_PATTERN.captures(name)?;
    captures.get(1)?.as_str().parse().ok()
}

/// List the migration files in a directory, ascending by version.
///
/// A missing directory or one with no yaml files yields an empty list.
/// Yaml files that break the naming grammar fail the listing, and so do
/// two files carrying the same version.
pub fn list(dir: &Path) -> Result<Vec<MigrationFile>, FindError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );
        if !is_yaml {
            continue;
        }
        let Some(version) = version_of(&path) else {
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string();
            return Err(FindError::InvalidFileName(name));
        };
        files.push(MigrationFile { path, version });
    }

    files.sort_by_key(|f| f.version);
    for pair in files.windows(2) {
        if pair[0].version == pair[1].version {
            return Err(FindError::DuplicateVersion {
                version: pair[0].version,
                dir: dir.display().to_string(),
            });
        }
    }
    Ok(files)
}

/// Parse every migration file in a directory and collect the distinct
/// resource names they declare, in name order.
pub fn declared_resources(dir: &Path) -> Result<BTreeSet<String>, DeclarationError> {
    let mut names = BTreeSet::new();
    for file in list(dir)? {
        let declaration = MigrationDeclaration::load(&file.path)?;
        names.insert(declaration.resource_name);
    }
    Ok(names)
}

/// Declarations for `resource_name` strictly newer than `current`,
/// ascending by version.
pub fn newer_than(
    current: Version,
    dir: &Path,
    resource_name: &str,
) -> Result<Vec<MigrationDeclaration>, DeclarationError> {
    let mut declarations = Vec::new();
    for file in list(dir)? {
        if file.version <= current {
            continue;
        }
        let declaration = MigrationDeclaration::load(&file.path)?;
        if declaration.resource_name == resource_name {
            declarations.push(declaration);
        }
    }
    tracing::debug!(
        resource = resource_name,
        current = %current,
        pending = declarations.len(),
        "selected newer migrations"
    );
    Ok(declarations)
}

#[cfg(test)]
#[path = "find_tests.rs"]
mod tests;
