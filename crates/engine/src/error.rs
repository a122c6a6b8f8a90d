// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for strategy execution and orchestration

use strata_backend::BackendError;
use strata_core::Version;
use strata_declaration::DeclarationError;
use thiserror::Error;

/// A strategy execution failure, by operation kind.
///
/// Messages keep the underlying admin failure verbatim so a run report
/// tells the operator what the cluster actually said.
#[derive(Debug, Error)]
pub enum ExecuteError {
    #[error("create failed for topic '{topic}': {message}")]
    Create { topic: String, message: String },
    #[error("patch failed for topic '{topic}': {message}")]
    Patch { topic: String, message: String },
    #[error("remove failed for topic '{topic}': {message}")]
    Remove { topic: String, message: String },
}

impl ExecuteError {
    pub fn topic(&self) -> &str {
        match self {
            ExecuteError::Create { topic, .. }
            | ExecuteError::Patch { topic, .. }
            | ExecuteError::Remove { topic, .. } => topic,
        }
    }
}

/// Errors from a migration run
#[derive(Debug, Error)]
pub enum MigrateError {
    #[error(transparent)]
    Declaration(#[from] DeclarationError),
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("migration {version} ({file}) failed: {source}")]
    Execute {
        file: String,
        version: Version,
        #[source]
        source: ExecuteError,
    },
    #[error("migration {version} ({file}) applied but could not be committed: {source}")]
    Commit {
        file: String,
        version: Version,
        #[source]
        source: BackendError,
    },
}
