// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resource records and attribute folding
//!
//! A `Resource` is the current state of one managed entity, derived by
//! folding all of its applied migrations in version order. Attributes
//! accumulate: each migration's attributes merge on top of the prior
//! state, and the `config` sub-map merges key-by-key so entries a
//! migration does not mention persist.

use crate::migration::{Migration, OperationKind};
use crate::version::Version;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Accumulated resource attributes (machine form).
pub type Attributes = serde_json::Map<String, serde_json::Value>;

/// Attribute key whose value is merged key-by-key instead of replaced.
const CONFIG_KEY: &str = "config";

/// Kind of entity a migration manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResourceType {
    Topic,
    Acl,
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceType::Topic => write!(f, "TOPIC"),
            ResourceType::Acl => write!(f, "ACL"),
        }
    }
}

impl FromStr for ResourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "TOPIC" => Ok(ResourceType::Topic),
            "ACL" => Ok(ResourceType::Acl),
            other => Err(format!("unknown resource type: {other}")),
        }
    }
}

/// Lifecycle status of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResourceStatus {
    Available,
    Deleted,
}

/// Storage key identifying one logical resource stream.
///
/// All reads and writes for a resource use this key, so everything about
/// the resource lands on a single storage partition.
pub fn resource_key(resource_type: ResourceType, resource_name: &str) -> String {
    format!("{resource_type}_{resource_name}")
}

/// Current folded state of one resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub version: Version,
    pub status: ResourceStatus,
    pub resource_type: ResourceType,
    pub resource_name: String,
    pub timestamp: DateTime<Utc>,
    pub attributes: Attributes,
}

impl Resource {
    /// Fold a newly applied migration on top of the prior state.
    ///
    /// The first CREATE migration originates the resource; every later
    /// migration mutates it. A REMOVE migration flips the status to
    /// DELETED but keeps the accumulated attributes for audit.
    pub fn fold(prior: Option<&Resource>, migration: &Migration) -> Resource {
        let mut attributes = prior.map(|r| r.attributes.clone()).unwrap_or_default();
        merge_attributes(&mut attributes, &migration.attributes);

        let status = match migration.operation {
            OperationKind::Remove => ResourceStatus::Deleted,
            OperationKind::Create | OperationKind::Patch => ResourceStatus::Available,
        };

        Resource {
            version: migration.version,
            status,
            resource_type: migration.resource_type,
            resource_name: migration.resource_name.clone(),
            timestamp: migration.timestamp,
            attributes,
        }
    }

    pub fn key(&self) -> String {
        resource_key(self.resource_type, &self.resource_name)
    }
}

/// Merge `next` on top of `base` per the accumulation rule.
fn merge_attributes(base: &mut Attributes, next: &Attributes) {
    for (key, value) in next {
        if key == CONFIG_KEY {
            if let (Some(serde_json::Value::Object(base_config)), serde_json::Value::Object(next_config)) =
                (base.get_mut(CONFIG_KEY), value)
            {
                for (config_key, config_value) in next_config {
                    base_config.insert(config_key.clone(), config_value.clone());
                }
                continue;
            }
        }
        base.insert(key.clone(), value.clone());
    }
}

#[cfg(test)]
#[path = "resource_tests.rs"]
mod tests;
