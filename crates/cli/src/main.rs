// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! strata - declarative migrations for cluster resources

mod cluster;
mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{apply, gen, init, show};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "strata",
    version,
    about = "Declarative, versioned migrations for cluster resources"
)]
struct Cli {
    /// Path to the tool configuration file
    #[arg(short = 'c', long = "config", global = true, default_value = "strata.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter configuration and migrations directory
    Init,
    /// Generate the next migration file for a topic
    Gen(gen::GenArgs),
    /// Apply pending migrations
    Apply(apply::ApplyArgs),
    /// Show the current state of a topic
    Current(show::ShowArgs),
    /// Show the applied-migration history of a topic
    History(show::ShowArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", format_error(&e));
        std::process::exit(1);
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// Typed errors here usually embed their cause in their own message, so
/// printing the whole chain would repeat it. The chain is only rendered
/// when it adds information.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();
    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));
    if chain_redundant {
        return top;
    }

    let mut out = top;
    for cause in err.chain().skip(1) {
        out.push_str(&format!("\n  caused by: {cause}"));
    }
    out
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Init => init::run(&cli.config),
        Commands::Gen(args) => gen::run(&cli.config, &args),
        Commands::Apply(args) => apply::run(&cli.config, &args),
        Commands::Current(args) => show::current(&cli.config, &args),
        Commands::History(args) => show::history(&cli.config, &args),
    }
}
