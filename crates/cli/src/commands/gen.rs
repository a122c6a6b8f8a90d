// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `strata gen` - migration file generation

use crate::config::ToolConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::path::Path;
use strata_core::Version;
use strata_declaration::list;

#[derive(Debug, Args)]
pub struct GenArgs {
    /// Topic the migration targets
    pub topic: String,

    /// Description used in the file name (defaults to the topic)
    #[arg(long)]
    pub description: Option<String>,
}

/// Write the next `vNNNN_description.yaml` skeleton into the migrations
/// directory.
pub fn run(config_path: &Path, args: &GenArgs) -> Result<()> {
    let config = ToolConfig::load(config_path)?;
    std::fs::create_dir_all(&config.migrations)?;

    let files = list(&config.migrations)?;
    let next = match files.last() {
        Some(file) => file.version.next().context("migration version space")?,
        None => Version::new(1).context("first migration version")?,
    };

    let description = sanitize(args.description.as_deref().unwrap_or(&args.topic));
    let file_name = format!("{next}_{description}.yaml");
    let path = config.migrations.join(&file_name);

    // the very first migration for a directory is usually a create
    let operation = if files.is_empty() { "create" } else { "patch" };
    let skeleton = format!(
        "operation: {operation}\n\
         notes: describe this change\n\
         topic: {}\n\
         partitions: 1\n\
         replicationFactor: 1\n\
         config:\n\
           compression.type: producer\n",
        args.topic
    );
    std::fs::write(&path, skeleton)?;

    println!("wrote {}", path.display());
    Ok(())
}

/// Force a description into the file-name grammar `[a-zA-Z0-9_-]{0,246}`.
fn sanitize(description: &str) -> String {
    let mut out: String = description
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    out.truncate(246);
    out
}

#[cfg(test)]
#[path = "gen_tests.rs"]
mod tests;
