//! Retention evaluation.
//!
//! Pure functions turning a sequence of [`VersionEntry`] into a
//! [`DeletionPlan`]. Leaf entries are never selected.

use chrono::NaiveDate;

use crate::entry::VersionEntry;
use crate::plan::DeletionPlan;

/// Selects every version last modified strictly before the start of `cutoff`.
///
/// Locators are returned in input order.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use reaper_core::{retention, TimestampWidth, VersionEntry};
///
/// let ts = |raw| TimestampWidth::Date.parse(raw).unwrap();
/// let entries = [
///     VersionEntry::new("A", false, ts("2014-01-01")),
///     VersionEntry::new("B", false, ts("2014-06-01")),
///     VersionEntry::new("C", true, ts("2014-01-01")),
/// ];
///
/// let plan = retention::select_older_than(&entries, NaiveDate::from_ymd_opt(2014, 3, 1).unwrap());
/// assert_eq!(plan.locators(), ["A"]);
/// ```
#[must_use]
pub fn select_older_than(entries: &[VersionEntry], cutoff: NaiveDate) -> DeletionPlan {
    entries
        .iter()
        .filter(|entry| entry.is_version() && entry.last_modified.date() < cutoff)
        .map(|entry| entry.resource_uri.clone())
        .collect()
}

/// Selects every version except the `keep` most recently modified ones.
///
/// Versions are stable-sorted by `last_modified` ascending and the oldest
/// `count - keep` are returned, oldest first. Versions sharing a timestamp
/// keep their listing order, so among equal timestamps the one listed first
/// is removed first.
#[must_use]
pub fn select_keep_newest(entries: &[VersionEntry], keep: usize) -> DeletionPlan {
    let mut versions: Vec<&VersionEntry> = entries.iter().filter(|e| e.is_version()).collect();
    versions.sort_by_key(|entry| entry.last_modified);

    let excess = versions.len().saturating_sub(keep);
    versions
        .into_iter()
        .take(excess)
        .map(|entry| entry.resource_uri.clone())
        .collect()
}
