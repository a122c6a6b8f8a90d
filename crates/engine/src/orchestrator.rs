// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-resource migration loop
//!
//! For each resource declared in a migrations directory: ask the store
//! for the latest applied version (`v0000` if none), select the local
//! declarations newer than that, and drive them through strategy
//! execution and commit in ascending version order. The loop is
//! fail-fast: on the first failure the resource's run stops, with the
//! failing file and version in the error. Versions committed before the
//! failure stay committed, so a re-run picks up exactly where this one
//! stopped.
//!
//! There is no ordering between different resources; runs over disjoint
//! resources never interfere because their storage is disjoint.

use crate::error::MigrateError;
use crate::strategy::Strategy;
use std::path::Path;
use strata_backend::Backend;
use strata_broker::Admin;
use strata_core::{Resource, ResourceType, Version};
use strata_declaration::{declared_resources, newer_than};

/// Drives migrations against one cluster and one store.
pub struct Orchestrator<'a, A, B> {
    admin: &'a A,
    backend: &'a B,
}

impl<'a, A: Admin, B: Backend> Orchestrator<'a, A, B> {
    pub fn new(admin: &'a A, backend: &'a B) -> Self {
        Self { admin, backend }
    }

    /// Apply every pending migration for one resource, in version order.
    ///
    /// Returns the folded state after each applied migration; an empty
    /// vec means the resource was already up to date.
    pub fn migrate_resource(
        &self,
        dir: &Path,
        resource_name: &str,
    ) -> Result<Vec<Resource>, MigrateError> {
        let latest = self
            .backend
            .current(ResourceType::Topic, resource_name)?
            .map(|resource| resource.version)
            .unwrap_or(Version::ZERO);

        let pending = newer_than(latest, dir, resource_name)?;
        if pending.is_empty() {
            tracing::info!(resource = resource_name, latest = %latest, "up to date");
            return Ok(Vec::new());
        }

        let mut applied = Vec::new();
        for declaration in pending {
            let file = declaration.source_path.display().to_string();
            let version = declaration.version;

            Strategy::of(&declaration)
                .execute(&declaration, self.admin)
                .map_err(|source| MigrateError::Execute {
                    file: file.clone(),
                    version,
                    source,
                })?;

            let migration = declaration.to_migration()?;
            let resource = self
                .backend
                .commit(&migration)
                .map_err(|source| MigrateError::Commit {
                    file,
                    version,
                    source,
                })?;

            tracing::info!(
                resource = resource_name,
                version = %version,
                operation = %migration.operation,
                "applied migration"
            );
            applied.push(resource);
        }
        Ok(applied)
    }

    /// Apply pending migrations for every resource declared in the
    /// directory.
    pub fn migrate_all(&self, dir: &Path) -> Result<Vec<Resource>, MigrateError> {
        let mut applied = Vec::new();
        for resource_name in declared_resources(dir)? {
            applied.extend(self.migrate_resource(dir, &resource_name)?);
        }
        Ok(applied)
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
