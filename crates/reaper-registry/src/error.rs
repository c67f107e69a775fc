//! Error types for registry operations.

use thiserror::Error;

/// Errors that can occur during registry operations.
///
/// These never escape a cleanup run: the client turns them into empty
/// listings or failed delete outcomes, and the cleaner records them in the
/// run report. They surface directly only when building a client.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Failed to connect to the repository.
    #[error("Failed to connect to repository at {url}: {source}")]
    ConnectionFailed {
        /// Repository URL.
        url: String,
        /// Underlying error.
        #[source]
        source: reqwest::Error,
    },

    /// Credentials could not be turned into a request header.
    #[error("Authentication failed: {message}")]
    AuthenticationFailed {
        /// Error message.
        message: String,
    },

    /// HTTP error from the repository.
    #[error("HTTP error from repository: {status} - {message}")]
    HttpError {
        /// HTTP status code (0 if no response was received).
        status: u16,
        /// Error message.
        message: String,
    },

    /// A listing body was not the expected JSON document.
    #[error("Malformed listing: {source}")]
    MalformedListing {
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// Invalid URL.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// URL string.
        url: String,
        /// Why the URL was rejected.
        reason: String,
    },

    /// An artifact URL does not contain the management API root, so no
    /// metadata URL can be derived from it.
    #[error("URL '{url}' does not contain the API root '{marker}'")]
    MissingApiRoot {
        /// URL string.
        url: String,
        /// The marker segment that was looked for.
        marker: &'static str,
    },
}

impl RegistryError {
    /// Returns the HTTP status carried by this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::HttpError { status, .. } if *status != 0 => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RegistryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            Self::ConnectionFailed {
                url: err
                    .url()
                    .map_or_else(|| "unknown".to_string(), ToString::to_string),
                source: err,
            }
        } else if err.is_status() {
            let status = err.status().map_or(0, |s| s.as_u16());
            Self::HttpError {
                status,
                message: err.to_string(),
            }
        } else {
            Self::HttpError {
                status: 0,
                message: err.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedListing { source: err }
    }
}
