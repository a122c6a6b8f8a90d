// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! strata-engine: strategy execution and the migration loop
//!
//! One strategy per operation kind, selected by a pure dispatch on the
//! declaration; the orchestrator walks each resource's pending
//! declarations in ascending version order, executes the strategy
//! against the cluster's admin capability and commits the result to the
//! store. Any failure stops that resource's run: versions already
//! committed stay committed, and re-running resumes from the next
//! version.

mod error;
mod orchestrator;
mod strategy;

pub use error::{ExecuteError, MigrateError};
pub use orchestrator::Orchestrator;
pub use strategy::Strategy;
