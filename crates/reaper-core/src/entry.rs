//! Version entries and `lastModified` parsing.
//!
//! A repository listing returns `lastModified` values such as
//! `2014-01-01 10:20:30.0 UTC`. Only a fixed-width prefix of the value is
//! read, and which prefix depends on the retention policy in use:
//!
//! | Width                        | Prefix | Layout                |
//! |------------------------------|--------|-----------------------|
//! | [`TimestampWidth::Date`]     | 10     | `YYYY-MM-DD`          |
//! | [`TimestampWidth::DateTime`] | 19     | `YYYY-MM-DD HH:MM:SS` |

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Precision a listing's `lastModified` values are read with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampWidth {
    /// Date only, used by the age-cutoff policy.
    Date,
    /// Date and time to the second, used by the keep-newest policy.
    DateTime,
}

impl TimestampWidth {
    /// Number of leading characters of the raw value that are read.
    #[must_use]
    pub const fn prefix_len(self) -> usize {
        match self {
            Self::Date => 10,
            Self::DateTime => 19,
        }
    }

    /// Human-readable layout, used in error messages.
    #[must_use]
    pub const fn layout(self) -> &'static str {
        match self {
            Self::Date => "YYYY-MM-DD",
            Self::DateTime => "YYYY-MM-DD HH:MM:SS",
        }
    }

    /// Parses the fixed-width prefix of a raw `lastModified` value.
    ///
    /// Date-only values resolve to midnight of that day.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTimestamp`] if the value is shorter than the
    /// prefix or the prefix does not match the layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use reaper_core::TimestampWidth;
    ///
    /// let ts = TimestampWidth::DateTime.parse("2014-01-01 10:20:30.0 UTC")?;
    /// assert_eq!(ts.to_string(), "2014-01-01 10:20:30");
    ///
    /// assert!(TimestampWidth::Date.parse("01/01/2014").is_err());
    /// # Ok::<(), reaper_core::Error>(())
    /// ```
    pub fn parse(self, raw: &str) -> Result<NaiveDateTime> {
        let invalid = || Error::InvalidTimestamp {
            value: raw.to_string(),
            layout: self.layout(),
        };

        let prefix = raw.get(..self.prefix_len()).ok_or_else(invalid)?;

        match self {
            Self::Date => NaiveDate::parse_from_str(prefix, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .ok_or_else(invalid),
            Self::DateTime => {
                NaiveDateTime::parse_from_str(prefix, "%Y-%m-%d %H:%M:%S").map_err(|_| invalid())
            }
        }
    }
}

/// One child node of a repository listing.
///
/// Non-leaf entries are version directories and are the only candidates for
/// deletion. Leaf entries are files sitting next to them (for example
/// `maven-metadata.xml`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    /// Resource URI the entry is deleted through.
    pub resource_uri: String,

    /// Whether the node is a terminal file rather than a version directory.
    pub is_leaf: bool,

    /// Last modification time, at the precision it was parsed with.
    pub last_modified: NaiveDateTime,
}

impl VersionEntry {
    /// Creates a new entry.
    #[must_use]
    pub fn new(resource_uri: impl Into<String>, is_leaf: bool, last_modified: NaiveDateTime) -> Self {
        Self {
            resource_uri: resource_uri.into(),
            is_leaf,
            last_modified,
        }
    }

    /// Returns true if this entry is a version directory.
    #[must_use]
    pub const fn is_version(&self) -> bool {
        !self.is_leaf
    }
}
