// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `strata apply` - run pending migrations

use crate::cluster::Connection;
use crate::config::ToolConfig;
use crate::output;
use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};
use strata_backend::{Backend, TopicBackend};
use strata_engine::Orchestrator;

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Migrations directory (defaults to the configured one)
    #[arg(long)]
    pub migrations: Option<PathBuf>,
}

pub fn run(config_path: &Path, args: &ApplyArgs) -> Result<()> {
    let config = ToolConfig::load(config_path)?;
    let dir = args.migrations.clone().unwrap_or(config.migrations.clone());

    let connection = Connection::open(&config)?;
    let backend = TopicBackend::new(connection.cluster().clone());
    backend.init()?;

    let result = Orchestrator::new(connection.cluster(), &backend).migrate_all(&dir);

    // commits made before a failure are durable; persist them either way
    connection.persist()?;

    let applied = result?;
    output::print_applied(&applied);
    Ok(())
}
