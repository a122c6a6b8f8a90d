// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operation strategies
//!
//! Each migration file selects exactly one terminal action; there is no
//! shared transition between the three kinds. Unknown kinds never reach
//! this module: declaration parsing already rejected them.

mod create;
mod patch;
mod remove;

use crate::error::ExecuteError;
use strata_broker::Admin;
use strata_core::OperationKind;
use strata_declaration::MigrationDeclaration;

/// The strategy for one operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Create,
    Patch,
    Remove,
}

impl Strategy {
    /// Pure dispatch from the declaration's operation kind.
    pub fn of(declaration: &MigrationDeclaration) -> Strategy {
        match declaration.operation {
            OperationKind::Create => Strategy::Create,
            OperationKind::Patch => Strategy::Patch,
            OperationKind::Remove => Strategy::Remove,
        }
    }

    /// Apply the declaration to the cluster.
    pub fn execute<A: Admin>(
        &self,
        declaration: &MigrationDeclaration,
        admin: &A,
    ) -> Result<(), ExecuteError> {
        match self {
            Strategy::Create => create::execute(declaration, admin),
            Strategy::Patch => patch::execute(declaration, admin),
            Strategy::Remove => remove::execute(declaration, admin),
        }
    }
}

/// Render the declaration's config entries the way the admin API wants
/// them.
fn config_entries(declaration: &MigrationDeclaration) -> std::collections::BTreeMap<String, String> {
    declaration
        .config
        .iter()
        .map(|(key, value)| (key.clone(), value.machine_string()))
        .collect()
}

#[cfg(test)]
#[path = "strategy_tests.rs"]
mod tests;
