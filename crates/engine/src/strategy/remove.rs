// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Remove strategy

use crate::error::ExecuteError;
use strata_broker::Admin;
use strata_declaration::MigrationDeclaration;

/// Delete the topic. The existence check comes first: removing a topic
/// that is not there is a declaration mistake worth surfacing, not a
/// no-op.
pub(super) fn execute<A: Admin>(
    declaration: &MigrationDeclaration,
    admin: &A,
) -> Result<(), ExecuteError> {
    let topic = &declaration.resource_name;
    let remove_err = |message: String| ExecuteError::Remove {
        topic: topic.clone(),
        message,
    };

    let description = admin
        .describe_topic(topic)
        .map_err(|e| remove_err(e.to_string()))?;
    if description.is_none() {
        return Err(remove_err(format!("topic '{topic}' does not exist")));
    }

    admin
        .delete_topic(topic)
        .map_err(|e| remove_err(e.to_string()))?;
    tracing::info!(topic = %topic, "removed topic");
    Ok(())
}
