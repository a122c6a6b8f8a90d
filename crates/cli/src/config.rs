// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tool configuration
//!
//! Loaded once at startup from `strata.yaml` and passed by reference to
//! the commands that need it. Paths are resolved relative to the
//! configuration file, so running from a subdirectory behaves the same.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found: {0} (run `strata init` first)")]
    Missing(String),
    #[error("{path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn default_cluster() -> String {
    "embedded".to_string()
}

fn default_cluster_state() -> PathBuf {
    PathBuf::from(".strata/cluster.json")
}

fn default_migrations() -> PathBuf {
    PathBuf::from("migrations")
}

/// Tool configuration as stored in `strata.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Cluster to run against. `embedded` is the in-process cluster
    /// persisted under `cluster_state`.
    #[serde(default = "default_cluster")]
    pub cluster: String,
    #[serde(default = "default_cluster_state")]
    pub cluster_state: PathBuf,
    /// Directory holding the migration files.
    #[serde(default = "default_migrations")]
    pub migrations: PathBuf,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            cluster: default_cluster(),
            cluster_state: default_cluster_state(),
            migrations: default_migrations(),
        }
    }
}

impl ToolConfig {
    /// Load the configuration, resolving relative paths against the
    /// file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::Missing(path.display().to_string()));
        }
        let contents = std::fs::read_to_string(path)?;
        let mut config: ToolConfig =
            serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        let base = path.parent().unwrap_or(Path::new("."));
        config.cluster_state = base.join(&config.cluster_state);
        config.migrations = base.join(&config.migrations);
        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
