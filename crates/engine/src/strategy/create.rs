// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Create strategy

use super::config_entries;
use crate::error::ExecuteError;
use strata_broker::{Admin, NewTopic};
use strata_declaration::MigrationDeclaration;

/// Create the topic with the declared partitions, replication factor and
/// config. An existing topic is a failure: creation is not idempotent.
pub(super) fn execute<A: Admin>(
    declaration: &MigrationDeclaration,
    admin: &A,
) -> Result<(), ExecuteError> {
    let topic = NewTopic {
        name: declaration.resource_name.clone(),
        partitions: declaration.partitions,
        replication_factor: declaration.replication_factor,
        config: config_entries(declaration),
    };

    admin
        .create_topic(&topic)
        .map_err(|e| ExecuteError::Create {
            topic: declaration.resource_name.clone(),
            message: e.to_string(),
        })?;

    tracing::info!(
        topic = %declaration.resource_name,
        partitions = ?declaration.partitions,
        replication = ?declaration.replication_factor,
        "created topic"
    );
    Ok(())
}
