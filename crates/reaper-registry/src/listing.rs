//! Nexus content listings.
//!
//! A `GET` on a content URL with `Accept: application/json` returns:
//!
//! ```json
//! {
//!   "data": [
//!     {
//!       "resourceURI": "http://host/nexus/service/local/repositories/r/content/g/a/1.0/",
//!       "text": "1.0",
//!       "leaf": false,
//!       "lastModified": "2014-01-01 10:20:30.0 UTC"
//!     }
//!   ]
//! }
//! ```
//!
//! Items are decoded one at a time so that a single odd item does not hide
//! the rest of the listing.

use reaper_core::{TimestampWidth, VersionEntry};
use serde::Deserialize;

use crate::error::RegistryError;

/// One raw child node of a listing. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingItem {
    /// Resource URI of the node.
    #[serde(rename = "resourceURI")]
    pub resource_uri: Option<String>,

    /// Display name of the node.
    pub text: Option<String>,

    /// Whether the node is a file.
    pub leaf: Option<bool>,

    /// Raw last-modified value.
    pub last_modified: Option<String>,
}

#[derive(Deserialize)]
struct RawListing {
    data: Vec<serde_json::Value>,
}

/// A decoded listing response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    items: Vec<ListingItem>,
}

impl Listing {
    /// Creates a listing from already decoded items.
    #[must_use]
    pub const fn new(items: Vec<ListingItem>) -> Self {
        Self { items }
    }

    /// Returns an empty listing.
    #[must_use]
    pub const fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// Decodes a listing body.
    ///
    /// Items that are not objects of the expected shape are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::MalformedListing`] if the body is not JSON or
    /// has no `data` array.
    pub fn from_json(body: &[u8]) -> Result<Self, RegistryError> {
        let raw: RawListing = serde_json::from_slice(body)?;

        let items = raw
            .data
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<ListingItem>(value) {
                Ok(item) => Some(item),
                Err(e) => {
                    tracing::debug!(error = %e, "Skipping undecodable listing item");
                    None
                }
            })
            .collect();

        Ok(Self { items })
    }

    /// Returns the decoded items.
    #[must_use]
    pub fn items(&self) -> &[ListingItem] {
        &self.items
    }

    /// Returns true if the listing has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Turns a listing into version entries, reading every `lastModified` with
/// the same `width`.
///
/// Items without a resource URI or leaf flag, and items whose timestamp is
/// missing or does not parse at `width`, are left out.
#[must_use]
pub fn parse_listing(listing: &Listing, width: TimestampWidth) -> Vec<VersionEntry> {
    listing
        .items()
        .iter()
        .filter_map(|item| parse_item(item, width))
        .collect()
}

fn parse_item(item: &ListingItem, width: TimestampWidth) -> Option<VersionEntry> {
    let name = item.text.as_deref().unwrap_or("?");

    let (Some(uri), Some(leaf)) = (item.resource_uri.as_deref(), item.leaf) else {
        tracing::debug!(name, "Skipping listing item without resourceURI or leaf flag");
        return None;
    };

    let Some(raw) = item.last_modified.as_deref() else {
        tracing::debug!(uri, "Skipping listing item without lastModified");
        return None;
    };

    match width.parse(raw) {
        Ok(last_modified) => Some(VersionEntry::new(uri, leaf, last_modified)),
        Err(e) => {
            tracing::debug!(uri, error = %e, "Skipping listing item with unparsable lastModified");
            None
        }
    }
}
