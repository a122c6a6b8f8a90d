// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed migration declarations
//!
//! One declaration is the in-memory form of one migration file: the
//! operation, the target topic, and the attributes to apply. Parsing
//! validates shape (unknown fields, unknown operations) and bounds
//! (partitions and replication factor are at least 1), and converts
//! human-readable config values to machine form.

use crate::find::{version_of, FindError};
use crate::units::{to_machine, UnitError};
use chrono::Utc;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use strata_core::{
    Attributes, Migration, OperationKind, OriginalFile, ResourceType, Value, Version, TOOL_VERSION,
};
use thiserror::Error;

const CONTENT_TYPE_YAML: &str = "text/yaml";

/// Errors from loading a migration declaration
#[derive(Debug, Error)]
pub enum DeclarationError {
    #[error(transparent)]
    Find(#[from] FindError),
    #[error("{path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("{path}: {message}")]
    Invalid { path: String, message: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Raw file shape as written by users.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDeclaration {
    operation: OperationKind,
    #[serde(default)]
    notes: Option<String>,
    topic: String,
    #[serde(default)]
    partitions: Option<u32>,
    #[serde(default, rename = "replicationFactor")]
    replication_factor: Option<u16>,
    #[serde(default)]
    config: IndexMap<String, serde_yaml::Value>,
}

/// One parsed, validated migration file.
#[derive(Debug, Clone, PartialEq)]
pub struct MigrationDeclaration {
    pub version: Version,
    pub operation: OperationKind,
    pub notes: Option<String>,
    pub resource_name: String,
    pub partitions: Option<u32>,
    pub replication_factor: Option<u16>,
    pub config: IndexMap<String, Value>,
    pub source_path: PathBuf,
}

impl MigrationDeclaration {
    /// Load and validate one migration file.
    pub fn load(path: &Path) -> Result<Self, DeclarationError> {
        let version = version_of(path).ok_or_else(|| {
            FindError::InvalidFileName(path.display().to_string())
        })?;

        let bytes = std::fs::read(path)?;
        let raw: RawDeclaration =
            serde_yaml::from_slice(&bytes).map_err(|source| DeclarationError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        let invalid = |message: String| DeclarationError::Invalid {
            path: path.display().to_string(),
            message,
        };

        if raw.topic.trim().is_empty() {
            return Err(invalid("topic must not be empty".to_string()));
        }
        if raw.partitions == Some(0) {
            return Err(invalid("partitions must be at least 1".to_string()));
        }
        if raw.replication_factor == Some(0) {
            return Err(invalid("replicationFactor must be at least 1".to_string()));
        }

        let mut config = IndexMap::with_capacity(raw.config.len());
        for (key, value) in raw.config {
            let converted = convert_config_value(&value)
                .map_err(|e| invalid(format!("config entry '{key}': {e}")))?;
            config.insert(key, converted);
        }

        Ok(Self {
            version,
            operation: raw.operation,
            notes: raw.notes,
            resource_name: raw.topic,
            partitions: raw.partitions,
            replication_factor: raw.replication_factor,
            config,
            source_path: path.to_path_buf(),
        })
    }

    /// Build the applied-migration record for this declaration.
    ///
    /// Re-reads the source file so the embedded original is the bytes as
    /// applied.
    pub fn to_migration(&self) -> Result<Migration, DeclarationError> {
        let bytes = std::fs::read(&self.source_path)?;

        let mut attributes = Attributes::new();
        if let Some(partitions) = self.partitions {
            attributes.insert("partitions".to_string(), partitions.to_string().into());
        }
        if let Some(factor) = self.replication_factor {
            attributes.insert("replicationFactor".to_string(), factor.to_string().into());
        }
        if !self.config.is_empty() {
            let mut config = serde_json::Map::with_capacity(self.config.len());
            for (key, value) in &self.config {
                config.insert(key.clone(), value.machine().clone());
            }
            attributes.insert("config".to_string(), serde_json::Value::Object(config));
        }

        Ok(Migration {
            version: self.version,
            operation: self.operation,
            notes: self.notes.clone(),
            resource_type: ResourceType::Topic,
            resource_name: self.resource_name.clone(),
            timestamp: Utc::now(),
            attributes,
            original: OriginalFile::from_bytes(
                self.source_path.display().to_string(),
                CONTENT_TYPE_YAML,
                &bytes,
            ),
            tool_version: TOOL_VERSION.to_string(),
        })
    }
}

/// Convert one yaml config value to its machine form.
fn convert_config_value(value: &serde_yaml::Value) -> Result<Value, ConvertError> {
    match value {
        serde_yaml::Value::String(s) => match to_machine(s)? {
            Some(machine) => Ok(Value::converted(s.clone(), machine)),
            None => Ok(Value::plain(s.clone())),
        },
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::plain(i))
            } else if let Some(f) = n.as_f64() {
                Ok(Value::plain(f))
            } else {
                Err(ConvertError::NotScalar)
            }
        }
        serde_yaml::Value::Bool(b) => Ok(Value::plain(*b)),
        _ => Err(ConvertError::NotScalar),
    }
}

#[derive(Debug, Error)]
enum ConvertError {
    #[error(transparent)]
    Unit(#[from] UnitError),
    #[error("value must be a scalar")]
    NotScalar,
}

#[cfg(test)]
#[path = "declaration_tests.rs"]
mod tests;
