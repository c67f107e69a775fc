//! # Reaper Core
//!
//! Core types and the retention-decision engine for the Reaper artifact
//! cleaner.
//!
//! This crate has no I/O. It provides:
//!
//! - [`VersionEntry`] - One child node of a repository listing
//! - [`TimestampWidth`] - The two `lastModified` precisions a listing is read with
//! - [`RetentionPolicy`] - Age cutoff or keep-newest-N
//! - [`DeletionPlan`] - Locators selected for removal
//! - [`RunReport`] - Per-artifact outcome of a cleanup run
//! - [`retention`] - The pure selection functions behind each policy
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use reaper_core::{RetentionPolicy, TimestampWidth, VersionEntry};
//!
//! let width = TimestampWidth::Date;
//! let entries = vec![
//!     VersionEntry::new("A", false, width.parse("2014-01-01 10:00:00.0 UTC")?),
//!     VersionEntry::new("B", false, width.parse("2014-06-01 10:00:00.0 UTC")?),
//! ];
//!
//! let cutoff = NaiveDate::from_ymd_opt(2014, 3, 1).unwrap();
//! let plan = RetentionPolicy::older_than(cutoff).evaluate(&entries);
//! assert_eq!(plan.locators(), ["A"]);
//! # Ok::<(), reaper_core::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod entry;
pub mod error;
pub mod plan;
pub mod policy;
pub mod report;
pub mod retention;


// Re-export main types at crate root
pub use entry::{TimestampWidth, VersionEntry};
pub use error::{Error, Result};
pub use plan::DeletionPlan;
pub use policy::RetentionPolicy;
pub use report::{DeleteOutcome, MetadataRebuild, ResourceOutcome, RunReport};
