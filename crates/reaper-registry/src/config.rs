//! Configuration types for the repository client.

use std::time::Duration;

use crate::coordinate::RepositoryCoordinate;

/// Configuration for the repository client.
///
/// Built once at startup and handed to [`RepositoryClient`](crate::RepositoryClient);
/// it is never modified afterwards.
#[derive(Debug, Clone)]
pub struct RepositoryConfig {
    /// Nexus base URL (e.g., "<http://localhost:8081/nexus>").
    pub url: String,

    /// Authentication configuration.
    pub auth: RepositoryAuth,

    /// Request timeout, applied to every call.
    pub timeout: Duration,

    /// User agent string.
    pub user_agent: String,

    /// When set, deletes are logged and reported but never sent.
    pub dry_run: bool,
}

impl RepositoryConfig {
    /// Creates a new configuration with the given base URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use reaper_registry::RepositoryConfig;
    ///
    /// let config = RepositoryConfig::new("http://localhost:8081/nexus");
    /// assert_eq!(config.url, "http://localhost:8081/nexus");
    /// assert!(!config.dry_run);
    /// ```
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            auth: RepositoryAuth::None,
            timeout: Duration::from_secs(30),
            user_agent: format!("reaper/{}", env!("CARGO_PKG_VERSION")),
            dry_run: false,
        }
    }

    /// Sets the authentication method.
    #[must_use]
    pub fn with_auth(mut self, auth: RepositoryAuth) -> Self {
        self.auth = auth;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Enables or disables dry-run mode.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Returns the coordinate of an artifact in a repository of this Nexus.
    ///
    /// # Examples
    ///
    /// ```
    /// use reaper_registry::RepositoryConfig;
    ///
    /// let config = RepositoryConfig::new("http://localhost:8081/nexus/");
    /// let coordinate = config.coordinate("snapshots", "com.test", "test-api");
    /// assert_eq!(
    ///     coordinate.content_url(),
    ///     "http://localhost:8081/nexus/service/local/repositories/snapshots/content/com/test/test-api"
    /// );
    /// ```
    #[must_use]
    pub fn coordinate(
        &self,
        repository_id: impl Into<String>,
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
    ) -> RepositoryCoordinate {
        RepositoryCoordinate::new(&self.url, repository_id, group_id, artifact_id)
    }
}

/// Authentication methods for repository access.
#[derive(Clone)]
pub enum RepositoryAuth {
    /// No authentication (anonymous access, local development).
    None,

    /// Basic authentication.
    Basic {
        /// Username.
        username: String,
        /// Password.
        password: String,
    },
}

impl RepositoryAuth {
    /// Creates basic authentication.
    ///
    /// # Examples
    ///
    /// ```
    /// use reaper_registry::RepositoryAuth;
    ///
    /// let auth = RepositoryAuth::basic("admin", "admin123");
    /// ```
    #[must_use]
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for RepositoryAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}
