// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Applied-migration records
//!
//! A `Migration` is one immutable, versioned, applied change to a
//! resource: the atomic unit appended to the history log. The
//! `ResourceCommit` is the wire record written to the state log: the
//! freshly folded resource fields plus a convenience copy of the history
//! (the authoritative history lives in the history log itself).

use crate::resource::{resource_key, Attributes, Resource, ResourceType};
use crate::version::Version;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three operations a migration file can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Create,
    Patch,
    Remove,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::Create => write!(f, "create"),
            OperationKind::Patch => write!(f, "patch"),
            OperationKind::Remove => write!(f, "remove"),
        }
    }
}

/// The migration file exactly as applied, embedded for audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OriginalFile {
    pub path: String,
    pub content_type: String,
    /// Base64 of the file bytes at application time.
    pub content: String,
}

impl OriginalFile {
    pub fn from_bytes(
        path: impl Into<String>,
        content_type: impl Into<String>,
        bytes: &[u8],
    ) -> Self {
        Self {
            path: path.into(),
            content_type: content_type.into(),
            content: BASE64.encode(bytes),
        }
    }

    /// Decode the embedded file bytes.
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        BASE64.decode(&self.content)
    }
}

/// One applied migration. Immutable once committed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Migration {
    pub version: Version,
    pub operation: OperationKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub resource_type: ResourceType,
    pub resource_name: String,
    pub timestamp: DateTime<Utc>,
    pub attributes: Attributes,
    pub original: OriginalFile,
    pub tool_version: String,
}

impl Migration {
    /// Storage key of the resource stream this migration belongs to.
    pub fn key(&self) -> String {
        resource_key(self.resource_type, &self.resource_name)
    }
}

/// Wire record written to the state log on commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceCommit {
    pub version: Version,
    pub operation: OperationKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub resource_type: ResourceType,
    pub resource_name: String,
    pub timestamp: DateTime<Utc>,
    pub attributes: Attributes,
    /// Convenience copy; the history log is authoritative.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<Migration>,
}

impl ResourceCommit {
    /// Build the commit record from the folded state and the migration
    /// that produced it.
    pub fn new(resource: &Resource, migration: &Migration, history: Vec<Migration>) -> Self {
        Self {
            version: resource.version,
            operation: migration.operation,
            notes: migration.notes.clone(),
            resource_type: resource.resource_type,
            resource_name: resource.resource_name.clone(),
            timestamp: resource.timestamp,
            attributes: resource.attributes.clone(),
            history,
        }
    }

    /// The folded resource view of this commit.
    pub fn into_resource(self) -> Resource {
        let status = match self.operation {
            OperationKind::Remove => crate::resource::ResourceStatus::Deleted,
            _ => crate::resource::ResourceStatus::Available,
        };
        Resource {
            version: self.version,
            status,
            resource_type: self.resource_type,
            resource_name: self.resource_name,
            timestamp: self.timestamp,
            attributes: self.attributes,
        }
    }

    pub fn key(&self) -> String {
        resource_key(self.resource_type, &self.resource_name)
    }
}

#[cfg(test)]
#[path = "migration_tests.rs"]
mod tests;
