//! Metadata rebuild URLs.
//!
//! Nexus regenerates an artifact's `maven-metadata.xml` when the cached copy
//! is deleted through the metadata endpoint. That endpoint mirrors the
//! content path with `metadata/` inserted right after the API root:
//!
//! ```text
//! http://host/nexus/service/local/repositories/r/content/g/a
//! http://host/nexus/service/local/metadata/repositories/r/content/g/a
//! ```

use crate::error::RegistryError;

const MARKER: &str = "/service/local/";

/// Derives the metadata rebuild URL for an artifact content URL.
///
/// The first occurrence of `/service/local/` (ASCII case-insensitive) is the
/// API root; `metadata/` is inserted right after it and everything else is
/// kept verbatim.
///
/// # Errors
///
/// Returns [`RegistryError::MissingApiRoot`] if the URL does not contain the
/// API root.
///
/// # Examples
///
/// ```
/// use reaper_registry::metadata_url_for;
///
/// let url = metadata_url_for("http://host/service/local/repositories/r/content/g/a/1.0/")?;
/// assert_eq!(url, "http://host/service/local/metadata/repositories/r/content/g/a/1.0/");
///
/// assert!(metadata_url_for("http://host/content/g/a").is_err());
/// # Ok::<(), reaper_registry::RegistryError>(())
/// ```
pub fn metadata_url_for(artifact_url: &str) -> Result<String, RegistryError> {
    // ASCII lowercasing keeps byte offsets intact.
    let start = artifact_url
        .to_ascii_lowercase()
        .find(MARKER)
        .ok_or_else(|| RegistryError::MissingApiRoot {
            url: artifact_url.to_string(),
            marker: MARKER,
        })?;

    let (root, rest) = artifact_url.split_at(start + MARKER.len());
    Ok(format!("{root}metadata/{rest}"))
}
