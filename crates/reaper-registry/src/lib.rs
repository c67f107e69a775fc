//! # Reaper Registry
//!
//! Nexus repository client and cleanup orchestration for Reaper.
//!
//! This crate talks to the Nexus management API (`/service/local/...`): it
//! lists the versions stored under an artifact, deletes the ones a
//! [`RetentionPolicy`](reaper_core::RetentionPolicy) selects, and asks the
//! repository to rebuild the artifact's metadata afterwards.
//!
//! ## Features
//!
//! - **Fail-open listing**: unreachable, failing or malformed listings are
//!   treated as empty, so bad data never leads to deletions
//! - **Isolated deletes**: a failed delete is recorded and the run continues
//! - **Dry run**: plans are computed and reported with zero mutating calls
//! - **Bounded calls**: every request carries an explicit timeout
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use reaper_core::RetentionPolicy;
//! use reaper_registry::{Cleaner, RepositoryAuth, RepositoryClient, RepositoryConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RepositoryConfig::new("http://localhost:8081/nexus")
//!         .with_auth(RepositoryAuth::basic("admin", "admin123"))
//!         .with_dry_run(true);
//!     let coordinate = config.coordinate("snapshots", "com.example", "service-api");
//!
//!     let cleaner = Cleaner::new(RepositoryClient::new(config)?);
//!     let report = cleaner.run(&coordinate, RetentionPolicy::keep_newest(5)).await;
//!     println!("{} versions would be removed", report.dry_run_count());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Cleaner                             │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────────────┐  │
//! │  │  listing    │  │  retention  │  │  metadata locator   │  │
//! │  │  (parser)   │  │  (core)     │  │  (URL rewrite)      │  │
//! │  └─────────────┘  └─────────────┘  └─────────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//!                          │ RepositoryApi
//!                          ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  RepositoryClient (HTTP)                    │
//! │        GET listing · DELETE version · DELETE metadata       │
//! └─────────────────────────────────────────────────────────────┘
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod cleaner;
mod client;
mod config;
mod coordinate;
mod error;
mod listing;
mod metadata;

pub use cleaner::Cleaner;
pub use client::{RepositoryApi, RepositoryClient};
pub use config::{RepositoryAuth, RepositoryConfig};
pub use coordinate::{RepositoryCoordinate, API_ROOT};
pub use error::RegistryError;
pub use listing::{parse_listing, Listing, ListingItem};
pub use metadata::metadata_url_for;
