// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! strata-core: data model for the Strata migration engine

pub mod migration;
pub mod resource;
pub mod value;
pub mod version;

pub use migration::{Migration, OperationKind, OriginalFile, ResourceCommit};
pub use resource::{resource_key, Attributes, Resource, ResourceStatus, ResourceType};
pub use value::Value;
pub use version::{Version, VersionError};

/// Tool version stamped into every applied-migration record.
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");
