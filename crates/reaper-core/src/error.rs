//! Error types for Reaper core operations.
//!
//! This module defines the error types used throughout the `reaper-core` crate.

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Reaper core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A `lastModified` value did not match the expected layout.
    #[error("Invalid timestamp '{value}': expected {layout}")]
    InvalidTimestamp {
        /// The raw value as received.
        value: String,
        /// The layout the value was read with.
        layout: &'static str,
    },

    /// A retention cutoff date could not be parsed.
    #[error("Invalid cutoff date '{value}': expected YYYYMMDD")]
    InvalidCutoffDate {
        /// The raw value as received.
        value: String,
    },

    /// A keep-newest count was not a positive integer.
    #[error("Invalid version count '{value}': expected a positive integer")]
    InvalidKeepCount {
        /// The raw value as received.
        value: String,
    },
}
