//! Retention policies.
//!
//! This module defines the [`RetentionPolicy`] selected for a cleanup run.
//! Exactly one policy is active per run.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entry::{TimestampWidth, VersionEntry};
use crate::error::{Error, Result};
use crate::plan::DeletionPlan;
use crate::retention;

/// Rule deciding which versions of an artifact survive a cleanup run.
///
/// # Examples
///
/// ```rust
/// use reaper_core::{RetentionPolicy, TimestampWidth};
///
/// let policy = RetentionPolicy::keep_newest(3);
/// assert_eq!(policy.timestamp_width(), TimestampWidth::DateTime);
///
/// let policy = RetentionPolicy::older_than(RetentionPolicy::parse_cutoff("20140501")?);
/// assert_eq!(policy.timestamp_width(), TimestampWidth::Date);
/// # Ok::<(), reaper_core::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RetentionPolicy {
    /// Remove every version last modified before the start of `cutoff`.
    OlderThan {
        /// First day whose versions are kept.
        cutoff: NaiveDate,
    },

    /// Keep the `count` most recently modified versions, remove the rest.
    KeepNewest {
        /// Number of versions to keep.
        count: usize,
    },
}

impl RetentionPolicy {
    /// Creates an age-cutoff policy.
    #[must_use]
    pub const fn older_than(cutoff: NaiveDate) -> Self {
        Self::OlderThan { cutoff }
    }

    /// Creates a keep-newest policy.
    #[must_use]
    pub const fn keep_newest(count: usize) -> Self {
        Self::KeepNewest { count }
    }

    /// Parses a compact `YYYYMMDD` cutoff date.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCutoffDate`] if the value is not a valid
    /// calendar date in that layout.
    pub fn parse_cutoff(value: &str) -> Result<NaiveDate> {
        let value = value.trim();
        if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidCutoffDate {
                value: value.to_string(),
            });
        }
        NaiveDate::parse_from_str(value, "%Y%m%d").map_err(|_| Error::InvalidCutoffDate {
            value: value.to_string(),
        })
    }

    /// Parses a keep-newest count, which must be at least one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKeepCount`] if the value is not a positive
    /// integer.
    pub fn parse_keep_count(value: &str) -> Result<usize> {
        match value.trim().parse::<usize>() {
            Ok(count) if count > 0 => Ok(count),
            _ => Err(Error::InvalidKeepCount {
                value: value.to_string(),
            }),
        }
    }

    /// Returns the precision listing timestamps are read with under this
    /// policy.
    #[must_use]
    pub const fn timestamp_width(&self) -> TimestampWidth {
        match self {
            Self::OlderThan { .. } => TimestampWidth::Date,
            Self::KeepNewest { .. } => TimestampWidth::DateTime,
        }
    }

    /// Computes the deletion plan for the given entries.
    #[must_use]
    pub fn evaluate(&self, entries: &[VersionEntry]) -> DeletionPlan {
        match *self {
            Self::OlderThan { cutoff } => retention::select_older_than(entries, cutoff),
            Self::KeepNewest { count } => retention::select_keep_newest(entries, count),
        }
    }
}

impl fmt::Display for RetentionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OlderThan { cutoff } => write!(f, "older than {cutoff}"),
            Self::KeepNewest { count } => write!(f, "keep newest {count}"),
        }
    }
}
