// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable value conversion
//!
//! Declarations may write broker config values the way humans read them:
//! `retention.ms: 1day`, `segment.bytes: 1GiB`. The broker only accepts
//! machine values, so sizes convert to bytes and durations to
//! milliseconds. A string without a `<number><unit>` shape passes through
//! untouched; a number with an unrecognized unit is an error.

use thiserror::Error;

/// Errors from unit conversion
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnitError {
    #[error("unknown unit '{unit}' in value '{value}'")]
    Unknown { value: String, unit: String },
    #[error("value '{0}' overflows a 64-bit machine value")]
    Overflow(String),
}

/// Multiplier for a unit suffix, or None if the suffix is not a unit.
fn multiplier(unit: &str) -> Option<i64> {
    let m = match unit.to_ascii_lowercase().as_str() {
        // sizes, to bytes
        "b" => 1,
        "kb" => 1_000,
        "mb" => 1_000_000,
        "gb" => 1_000_000_000,
        "tb" => 1_000_000_000_000,
        "kib" => 1_024,
        "mib" => 1_048_576,
        "gib" => 1_073_741_824,
        "tib" => 1_099_511_627_776,
        // durations, to milliseconds
        "ms" | "milli" | "millis" => 1,
        "second" | "seconds" => 1_000,
        "minute" | "minutes" => 60_000,
        "hour" | "hours" => 3_600_000,
        "day" | "days" => 86_400_000,
        "week" | "weeks" => 604_800_000,
        "month" | "months" => 2_592_000_000,
        "year" | "years" => 31_536_000_000,
        _ => return None,
    };
    Some(m)
}

/// Convert a human-readable value to its machine form.
///
/// Returns `Ok(Some(n))` for a `<number><unit>` value, `Ok(None)` for a
/// string that is not shaped like one (it should pass through as-is),
/// and an error for an unrecognized or overflowing unit value.
pub fn to_machine(value: &str) -> Result<Option<i64>, UnitError> {
    let trimmed = value.trim();
    let digits_end = trimmed
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(trimmed.len());
    if digits_end == 0 || digits_end == trimmed.len() {
        // no leading number, or no unit suffix
        return Ok(None);
    }

    let (number, unit) = trimmed.split_at(digits_end);
    let unit = unit.trim();
    if !unit.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Ok(None);
    }

    let Some(factor) = multiplier(unit) else {
        return Err(UnitError::Unknown {
            value: value.to_string(),
            unit: unit.to_string(),
        });
    };

    let number: i64 = number
        .parse()
        .map_err(|_| UnitError::Overflow(value.to_string()))?;
    number
        .checked_mul(factor)
        .ok_or_else(|| UnitError::Overflow(value.to_string()))
        .map(Some)
}

#[cfg(test)]
#[path = "units_tests.rs"]
mod tests;
