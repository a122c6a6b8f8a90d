// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cluster connection
//!
//! The embedded mode runs the in-process cluster and persists its state
//! between invocations with an atomic write-to-tmp-then-rename, so
//! `apply` in one process is visible to `current` in the next. Any other
//! cluster value names an integration this build does not ship; wiring a
//! network client means implementing the `strata_broker::Cluster` traits
//! and adding a connect arm here.

use crate::config::ToolConfig;
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use strata_broker::{ClusterSnapshot, MemoryCluster};

const EMBEDDED: &str = "embedded";

/// A connected cluster plus how to persist it at the end of the run.
pub struct Connection {
    cluster: MemoryCluster,
    state_path: PathBuf,
}

impl Connection {
    /// Connect according to the configuration.
    pub fn open(config: &ToolConfig) -> Result<Self> {
        if config.cluster != EMBEDDED {
            bail!(
                "unsupported cluster '{}': this build supports '{EMBEDDED}'",
                config.cluster
            );
        }

        let cluster = match load_snapshot(&config.cluster_state)? {
            Some(snapshot) => MemoryCluster::restore(snapshot),
            None => MemoryCluster::new(1),
        };
        Ok(Self {
            cluster,
            state_path: config.cluster_state.clone(),
        })
    }

    pub fn cluster(&self) -> &MemoryCluster {
        &self.cluster
    }

    /// Persist the cluster state atomically.
    pub fn persist(&self) -> Result<()> {
        if let Some(parent) = self.state_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp_path = self.state_path.with_extension("tmp");
        let json = serde_json::to_vec_pretty(&self.cluster.snapshot())?;
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.state_path)
            .with_context(|| format!("persisting {}", self.state_path.display()))?;
        Ok(())
    }
}

fn load_snapshot(path: &Path) -> Result<Option<ClusterSnapshot>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path)?;
    let snapshot = serde_json::from_str(&contents)
        .with_context(|| format!("reading cluster state {}", path.display()))?;
    Ok(Some(snapshot))
}
