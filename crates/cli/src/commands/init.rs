// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `strata init` - project bootstrap

use anyhow::Result;
use std::path::Path;

const STARTER_CONFIG: &str = "\
# strata configuration
cluster: embedded
cluster_state: .strata/cluster.json
migrations: migrations
";

/// Write a starter configuration and create the migrations directory.
/// Idempotent: an existing configuration is left alone.
pub fn run(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        println!("{} already exists, leaving it alone", config_path.display());
    } else {
        std::fs::write(config_path, STARTER_CONFIG)?;
        println!("wrote {}", config_path.display());
    }

    let base = config_path.parent().unwrap_or(Path::new("."));
    let migrations = base.join("migrations");
    if !migrations.exists() {
        std::fs::create_dir_all(&migrations)?;
        println!("created {}", migrations.display());
    }

    println!("next: `strata gen <topic>` to write your first migration");
    Ok(())
}
