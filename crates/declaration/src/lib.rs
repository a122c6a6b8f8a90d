// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! strata-declaration: migration file discovery and parsing
//!
//! Migration files are named `vNNNN_description.yaml` and live in a
//! per-project migrations directory. This crate owns the file-name
//! grammar, directory listing, the typed declaration model, and the
//! conversion of human-readable values ("1GiB", "2hours") into the
//! machine form the broker expects.

mod declaration;
mod find;
mod units;

pub use declaration::{DeclarationError, MigrationDeclaration};
pub use find::{declared_resources, list, newer_than, version_of, FindError, MigrationFile};
pub use units::{to_machine, UnitError};
