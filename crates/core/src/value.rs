// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration values with an optional human-readable original.
//!
//! A declaration may write `retention.ms: "1day"`; the engine works with
//! the machine form (`86400000`) but keeps the original string for
//! reporting. Only the machine form goes over the wire: the full original
//! file is embedded in the applied-migration record for audit.

use serde::{Deserialize, Serialize};

/// A single configuration value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Value {
    machine: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    human: Option<String>,
}

impl Value {
    /// A value that was already in machine form.
    pub fn plain(machine: impl Into<serde_json::Value>) -> Self {
        Self {
            machine: machine.into(),
            human: None,
        }
    }

    /// A machine value converted from a human-readable original.
    pub fn converted(human: impl Into<String>, machine: impl Into<serde_json::Value>) -> Self {
        Self {
            machine: machine.into(),
            human: Some(human.into()),
        }
    }

    pub fn machine(&self) -> &serde_json::Value {
        &self.machine
    }

    pub fn human(&self) -> Option<&str> {
        self.human.as_deref()
    }

    pub fn into_machine(self) -> serde_json::Value {
        self.machine
    }

    /// Machine form rendered as the string the admin layer expects.
    pub fn machine_string(&self) -> String {
        match &self.machine {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
