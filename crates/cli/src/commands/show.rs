// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `strata current` / `strata history` - read-side queries

use crate::cluster::Connection;
use crate::config::ToolConfig;
use crate::output;
use anyhow::Result;
use clap::Args;
use std::path::Path;
use strata_backend::{Backend, TopicBackend};
use strata_core::ResourceType;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Topic name
    pub topic: String,
}

pub fn current(config_path: &Path, args: &ShowArgs) -> Result<()> {
    let backend = open_backend(config_path)?;
    match backend.current(ResourceType::Topic, &args.topic)? {
        Some(resource) => output::print_resource(&resource),
        None => println!("no state recorded for topic '{}'", args.topic),
    }
    Ok(())
}

pub fn history(config_path: &Path, args: &ShowArgs) -> Result<()> {
    let backend = open_backend(config_path)?;
    let history = backend.history(ResourceType::Topic, &args.topic)?;
    if history.is_empty() {
        println!("no migrations recorded for topic '{}'", args.topic);
        return Ok(());
    }
    output::print_history(&args.topic, &history);
    Ok(())
}

fn open_backend(config_path: &Path) -> Result<TopicBackend<strata_broker::MemoryCluster>> {
    let config = ToolConfig::load(config_path)?;
    let connection = Connection::open(&config)?;
    let backend = TopicBackend::new(connection.cluster().clone());
    backend.init()?;
    Ok(backend)
}
