// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Migration version numbers
//!
//! A version is a 4-digit zero-padded integer embedded in a migration file
//! name (`v0001_create_topic.yaml`). Because the width is fixed, numeric
//! order and lexicographic order of the rendered form agree.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Highest version the 4-digit rendering can carry.
const MAX_VERSION: u16 = 9999;

/// Errors from parsing or advancing versions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("malformed version '{0}': expected v followed by 1-4 digits")]
    Malformed(String),
    #[error("version space exhausted: cannot go past v{MAX_VERSION}")]
    Exhausted,
}

/// A migration version, rendered as `v0001`.
///
/// `Version::ZERO` (`v0000`) is the sentinel for "nothing applied yet";
/// real migrations start at `v0001`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u16);

impl Version {
    /// Sentinel for a resource with no applied migrations.
    pub const ZERO: Version = Version(0);

    /// Build a version from its numeric form.
    pub fn new(number: u16) -> Result<Self, VersionError> {
        if number > MAX_VERSION {
            return Err(VersionError::Exhausted);
        }
        Ok(Version(number))
    }

    pub fn number(&self) -> u16 {
        self.0
    }

    /// The next version in sequence.
    pub fn next(&self) -> Result<Self, VersionError> {
        if self.0 >= MAX_VERSION {
            return Err(VersionError::Exhausted);
        }
        Ok(Version(self.0 + 1))
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{:04}", self.0)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    /// Parse `v0001` (the leading `v` is optional so bare `0001` from
    /// user input also works).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('v').unwrap_or(s);
        if digits.is_empty() || digits.len() > 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(VersionError::Malformed(s.to_string()));
        }
        let number: u16 = digits
            .parse()
            .map_err(|_| VersionError::Malformed(s.to_string()))?;
        Version::new(number)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
