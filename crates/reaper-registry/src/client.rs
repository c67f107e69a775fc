//! HTTP client for the Nexus management API.
//!
//! This module provides the [`RepositoryApi`] seam the cleaner works
//! against and its HTTP implementation, [`RepositoryClient`].

use async_trait::async_trait;
use reaper_core::DeleteOutcome;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};

use crate::config::{RepositoryAuth, RepositoryConfig};
use crate::error::RegistryError;
use crate::listing::Listing;

/// Read and delete operations against repository resources.
///
/// Implementations never fail: listing problems yield an empty listing and
/// delete problems yield a failed [`DeleteOutcome`].
#[async_trait]
pub trait RepositoryApi: Send + Sync {
    /// Lists the children of a resource.
    async fn list(&self, url: &str) -> Listing;

    /// Deletes a resource.
    async fn delete(&self, url: &str) -> DeleteOutcome;
}

/// Client for the Nexus management API.
#[derive(Debug)]
pub struct RepositoryClient {
    config: RepositoryConfig,
    http: reqwest::Client,
}

impl RepositoryClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an absolute http(s) URL or
    /// the HTTP client cannot be created.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use reaper_registry::{RepositoryClient, RepositoryConfig};
    ///
    /// let config = RepositoryConfig::new("http://localhost:8081/nexus");
    /// let client = RepositoryClient::new(config)?;
    /// # Ok::<(), reaper_registry::RegistryError>(())
    /// ```
    pub fn new(config: RepositoryConfig) -> Result<Self, RegistryError> {
        Self::validate_url(&config.url)?;
        let http = Self::build_http_client(&config)?;

        Ok(Self { config, http })
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    /// Fetches and decodes a listing.
    async fn fetch_listing(&self, url: &str) -> Result<Listing, RegistryError> {
        let response = self
            .http
            .get(url)
            .headers(self.auth_headers()?)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RegistryError::HttpError {
                status: response.status().as_u16(),
                message: response
                    .status()
                    .canonical_reason()
                    .unwrap_or_default()
                    .to_string(),
            });
        }

        let body = response.bytes().await?;
        Listing::from_json(&body)
    }

    /// Sends a delete and returns the status of a successful response.
    async fn send_delete(&self, url: &str) -> Result<u16, RegistryError> {
        let response = self
            .http
            .delete(url)
            .headers(self.auth_headers()?)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RegistryError::HttpError {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        Ok(status.as_u16())
    }

    fn validate_url(url: &str) -> Result<(), RegistryError> {
        let parsed = url::Url::parse(url).map_err(|e| RegistryError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => Err(RegistryError::InvalidUrl {
                url: url.to_string(),
                reason: format!("unsupported scheme '{other}'"),
            }),
        }
    }

    /// Builds the HTTP client with proper configuration.
    fn build_http_client(config: &RepositoryConfig) -> Result<reqwest::Client, RegistryError> {
        reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| RegistryError::ConnectionFailed {
                url: config.url.clone(),
                source: e,
            })
    }

    /// Creates authentication headers based on configuration.
    fn auth_headers(&self) -> Result<HeaderMap, RegistryError> {
        let mut headers = HeaderMap::new();

        match &self.config.auth {
            RepositoryAuth::None => {}
            RepositoryAuth::Basic { username, password } => {
                let credentials = base64::Engine::encode(
                    &base64::engine::general_purpose::STANDARD,
                    format!("{username}:{password}"),
                );
                let mut value = HeaderValue::from_str(&format!("Basic {credentials}")).map_err(
                    |_| RegistryError::AuthenticationFailed {
                        message: "Invalid credentials".to_string(),
                    },
                )?;
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
        }

        Ok(headers)
    }
}

#[async_trait]
impl RepositoryApi for RepositoryClient {
    async fn list(&self, url: &str) -> Listing {
        match self.fetch_listing(url).await {
            Ok(listing) => {
                tracing::debug!(url, items = listing.items().len(), "Fetched listing");
                listing
            }
            Err(e) => {
                tracing::warn!(url, error = %e, "Listing unavailable, treating as empty");
                Listing::empty()
            }
        }
    }

    async fn delete(&self, url: &str) -> DeleteOutcome {
        if self.config.dry_run {
            tracing::info!(url, "Dry run: would delete");
            return DeleteOutcome::DryRun;
        }

        match self.send_delete(url).await {
            Ok(status) => DeleteOutcome::Deleted { status },
            Err(e) => {
                tracing::warn!(url, error = %e, "Delete failed");
                DeleteOutcome::Failed {
                    status: e.status(),
                    error: e.to_string(),
                }
            }
        }
    }
}
