//! Repository coordinates and content URLs.

use std::fmt;

/// Path segment where the Nexus management API starts.
pub const API_ROOT: &str = "/service/local";

/// Location of one artifact in a Nexus repository.
///
/// # Examples
///
/// ```
/// use reaper_registry::RepositoryCoordinate;
///
/// let coordinate = RepositoryCoordinate::new("http://nexus//", "releases", "org.acme.tools", "cli");
/// assert_eq!(
///     coordinate.content_url(),
///     "http://nexus/service/local/repositories/releases/content/org/acme/tools/cli"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryCoordinate {
    base_url: String,
    repository_id: String,
    group_id: String,
    artifact_id: String,
}

impl RepositoryCoordinate {
    /// Creates a new coordinate.
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        repository_id: impl Into<String>,
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            repository_id: repository_id.into(),
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
        }
    }

    /// Returns the Nexus base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the repository id.
    #[must_use]
    pub fn repository_id(&self) -> &str {
        &self.repository_id
    }

    /// Returns the group id in dotted form.
    #[must_use]
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// Returns the artifact id.
    #[must_use]
    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    /// Returns the content URL listing this artifact's versions.
    ///
    /// `<base>/service/local/repositories/<repo>/content/<group as path>/<artifact>`,
    /// with trailing slashes trimmed from the base URL.
    #[must_use]
    pub fn content_url(&self) -> String {
        format!(
            "{}{API_ROOT}/repositories/{}/content/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.repository_id,
            self.group_id.replace('.', "/"),
            self.artifact_id
        )
    }
}

impl fmt::Display for RepositoryCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.repository_id, self.group_id, self.artifact_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_url() {
        let coordinate =
            RepositoryCoordinate::new("http://localhost:8080/nexus", "snapshots", "com.test", "test-api");
        assert_eq!(
            coordinate.content_url(),
            "http://localhost:8080/nexus/service/local/repositories/snapshots/content/com/test/test-api"
        );
    }

    #[test]
    fn test_content_url_trims_trailing_slashes() {
        let coordinate = RepositoryCoordinate::new("http://nexus///", "r", "g", "a");
        assert_eq!(
            coordinate.content_url(),
            "http://nexus/service/local/repositories/r/content/g/a"
        );
    }

    #[test]
    fn test_group_without_dots() {
        let coordinate = RepositoryCoordinate::new("http://nexus", "r", "acme", "a");
        assert!(coordinate.content_url().ends_with("/content/acme/a"));
    }

    #[test]
    fn test_display() {
        let coordinate = RepositoryCoordinate::new("http://nexus", "releases", "com.test", "api");
        assert_eq!(coordinate.to_string(), "releases:com.test:api");
    }
}
