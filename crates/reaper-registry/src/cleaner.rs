//! Cleanup orchestration.
//!
//! For each artifact the [`Cleaner`]:
//! 1. Derives the content URL and the metadata rebuild URL
//! 2. Lists the artifact's children and parses them at the policy's width
//! 3. Evaluates the retention policy into a deletion plan
//! 4. Deletes every planned version, continuing past failures
//! 5. Requests a metadata rebuild if anything was planned
//!
//! Nothing is rolled back; every planned delete gets exactly one attempt.

use reaper_core::{DeleteOutcome, MetadataRebuild, RetentionPolicy, RunReport};
use tracing::{debug, info, warn};

use crate::client::RepositoryApi;
use crate::coordinate::RepositoryCoordinate;
use crate::listing::parse_listing;
use crate::metadata::metadata_url_for;

/// Applies a retention policy to artifacts through a [`RepositoryApi`].
#[derive(Debug)]
pub struct Cleaner<A> {
    api: A,
}

impl<A: RepositoryApi> Cleaner<A> {
    /// Creates a new cleaner.
    #[must_use]
    pub const fn new(api: A) -> Self {
        Self { api }
    }

    /// Returns the underlying API.
    #[must_use]
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Cleans a single artifact.
    ///
    /// Never fails: every problem is logged and recorded in the returned
    /// report.
    pub async fn run(&self, coordinate: &RepositoryCoordinate, policy: RetentionPolicy) -> RunReport {
        debug!(artifact = %coordinate, %policy, "Cleaning artifact");
        self.run_url(&coordinate.content_url(), policy).await
    }

    /// Cleans the artifact listed at `artifact_url`.
    ///
    /// If no metadata URL can be derived from `artifact_url`, the artifact is
    /// skipped before any request is made and the reason is recorded in the
    /// report.
    pub async fn run_url(&self, artifact_url: &str, policy: RetentionPolicy) -> RunReport {
        let mut report = RunReport::new(artifact_url, policy);

        let metadata_url = match metadata_url_for(artifact_url) {
            Ok(url) => url,
            Err(e) => {
                warn!(url = artifact_url, error = %e, "Skipping artifact");
                report.metadata = MetadataRebuild::Unresolved {
                    reason: e.to_string(),
                };
                return report;
            }
        };

        let listing = self.api.list(artifact_url).await;
        let entries = parse_listing(&listing, policy.timestamp_width());
        report.versions_scanned = entries.iter().filter(|e| e.is_version()).count();

        let plan = policy.evaluate(&entries);
        debug!(url = artifact_url, plan = ?plan.locators(), "Computed deletion plan");

        for locator in &plan {
            info!(url = %locator, "Deleting version");
            let outcome = self.api.delete(locator).await;
            log_outcome("Deleting result", locator, &outcome);
            report.record(locator, outcome);
        }

        if !plan.is_empty() {
            info!(url = %metadata_url, "Rebuilding metadata");
            let outcome = self.api.delete(&metadata_url).await;
            log_outcome("Rebuilding metadata result", &metadata_url, &outcome);
            report.metadata = MetadataRebuild::Attempted {
                url: metadata_url,
                outcome,
            };
        }
        report.plan = plan;

        info!(
            url = artifact_url,
            scanned = report.versions_scanned,
            planned = report.plan.len(),
            deleted = report.deleted_count(),
            failed = report.failed_count(),
            "Artifact cleaned"
        );

        report
    }

    /// Cleans several artifacts one after another, in order.
    pub async fn run_all(
        &self,
        coordinates: &[RepositoryCoordinate],
        policy: RetentionPolicy,
    ) -> Vec<RunReport> {
        let mut reports = Vec::with_capacity(coordinates.len());
        for coordinate in coordinates {
            reports.push(self.run(coordinate, policy).await);
        }
        reports
    }
}

fn log_outcome(message: &str, url: &str, outcome: &DeleteOutcome) {
    match outcome {
        DeleteOutcome::Deleted { status } => info!(url, status, "{message}"),
        DeleteOutcome::Failed { status, error } => {
            warn!(url, status = ?status, error = %error, "{message}");
        }
        DeleteOutcome::DryRun => debug!(url, "{message}: skipped (dry run)"),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::NaiveDate;

    use super::*;
    use crate::listing::{Listing, ListingItem};

    const BASE: &str = "http://nexus";
    const ARTIFACT: &str = "http://nexus/service/local/repositories/r/content/g/a";
    const METADATA: &str = "http://nexus/service/local/metadata/repositories/r/content/g/a";

    /// In-memory repository recording every call.
    #[derive(Default)]
    struct FakeApi {
        listings: HashMap<String, Listing>,
        failing: Vec<String>,
        lists: Mutex<Vec<String>>,
        deletes: Mutex<Vec<String>>,
    }

    impl FakeApi {
        fn with_listing(mut self, url: &str, items: &[(&str, bool, &str)]) -> Self {
            let items = items
                .iter()
                .map(|(uri, leaf, ts)| ListingItem {
                    resource_uri: Some((*uri).to_string()),
                    text: None,
                    leaf: Some(*leaf),
                    last_modified: Some((*ts).to_string()),
                })
                .collect();
            self.listings.insert(url.to_string(), Listing::new(items));
            self
        }

        fn failing(mut self, url: &str) -> Self {
            self.failing.push(url.to_string());
            self
        }

        fn deletes(&self) -> Vec<String> {
            self.deletes.lock().unwrap().clone()
        }

        fn lists(&self) -> Vec<String> {
            self.lists.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RepositoryApi for FakeApi {
        async fn list(&self, url: &str) -> Listing {
            self.lists.lock().unwrap().push(url.to_string());
            self.listings.get(url).cloned().unwrap_or_default()
        }

        async fn delete(&self, url: &str) -> DeleteOutcome {
            self.deletes.lock().unwrap().push(url.to_string());
            if self.failing.iter().any(|f| f == url) {
                DeleteOutcome::transport_failure("connection reset")
            } else {
                DeleteOutcome::Deleted { status: 204 }
            }
        }
    }

    fn coordinate() -> RepositoryCoordinate {
        RepositoryCoordinate::new(BASE, "r", "g", "a")
    }

    fn sample_api() -> FakeApi {
        FakeApi::default().with_listing(
            ARTIFACT,
            &[
                ("A", false, "2014-01-01 00:00:00.0 UTC"),
                ("B", false, "2014-06-01 00:00:00.0 UTC"),
                ("C", true, "2014-01-01 00:00:00.0 UTC"),
            ],
        )
    }

    #[tokio::test]
    async fn test_older_than_deletes_and_rebuilds() {
        let cleaner = Cleaner::new(sample_api());
        let cutoff = NaiveDate::from_ymd_opt(2014, 3, 1).unwrap();

        let report = cleaner.run(&coordinate(), RetentionPolicy::older_than(cutoff)).await;

        assert_eq!(report.artifact_url, ARTIFACT);
        assert_eq!(report.versions_scanned, 2);
        assert_eq!(report.plan.locators(), ["A"]);
        assert_eq!(report.deleted_count(), 1);
        assert_eq!(cleaner.api().lists(), [ARTIFACT]);
        assert_eq!(cleaner.api().deletes(), ["A", METADATA]);
        assert_eq!(
            report.metadata,
            MetadataRebuild::Attempted {
                url: METADATA.to_string(),
                outcome: DeleteOutcome::Deleted { status: 204 },
            }
        );
    }

    #[tokio::test]
    async fn test_keep_newest_deletes_oldest() {
        let cleaner = Cleaner::new(sample_api());

        let report = cleaner.run(&coordinate(), RetentionPolicy::keep_newest(1)).await;

        assert_eq!(report.plan.locators(), ["A"]);
        assert_eq!(cleaner.api().deletes(), ["A", METADATA]);
    }

    #[tokio::test]
    async fn test_empty_plan_skips_rebuild() {
        let cleaner = Cleaner::new(sample_api());

        let report = cleaner.run(&coordinate(), RetentionPolicy::keep_newest(5)).await;

        assert!(report.plan.is_empty());
        assert!(!report.rebuild_attempted());
        assert_eq!(report.metadata, MetadataRebuild::NotAttempted);
        assert!(cleaner.api().deletes().is_empty());
    }

    #[tokio::test]
    async fn test_failed_delete_does_not_stop_the_run() {
        let api = FakeApi::default()
            .with_listing(
                ARTIFACT,
                &[
                    ("v1", false, "2014-01-01 00:00:00"),
                    ("v2", false, "2014-02-01 00:00:00"),
                    ("v3", false, "2014-03-01 00:00:00"),
                    ("v4", false, "2014-04-01 00:00:00"),
                ],
            )
            .failing("v1");
        let cleaner = Cleaner::new(api);

        let report = cleaner.run(&coordinate(), RetentionPolicy::keep_newest(1)).await;

        assert_eq!(cleaner.api().deletes(), ["v1", "v2", "v3", METADATA]);
        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.deleted_count(), 2);
        assert!(report.outcomes[0].outcome.is_failed());
        assert!(report.rebuild_attempted());
        assert!(report.has_failures());
    }

    #[tokio::test]
    async fn test_failed_rebuild_is_recorded() {
        let cleaner = Cleaner::new(sample_api().failing(METADATA));

        let report = cleaner.run(&coordinate(), RetentionPolicy::keep_newest(1)).await;

        assert_eq!(report.deleted_count(), 1);
        match report.metadata {
            MetadataRebuild::Attempted { outcome, .. } => assert!(outcome.is_failed()),
            other => panic!("Expected attempted rebuild, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unparsable_timestamps_are_never_deleted() {
        let api = FakeApi::default().with_listing(
            ARTIFACT,
            &[
                ("old-but-garbled", false, "01/01/2010"),
                ("old", false, "2010-01-01 00:00:00.0 UTC"),
                ("new", false, "2020-01-01 00:00:00.0 UTC"),
            ],
        );
        let cleaner = Cleaner::new(api);
        let cutoff = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();

        let report = cleaner.run(&coordinate(), RetentionPolicy::older_than(cutoff)).await;

        assert_eq!(report.versions_scanned, 2);
        assert_eq!(report.plan.locators(), ["old"]);
    }

    #[tokio::test]
    async fn test_missing_listing_means_nothing_to_do() {
        let cleaner = Cleaner::new(FakeApi::default());

        let report = cleaner.run(&coordinate(), RetentionPolicy::keep_newest(1)).await;

        assert_eq!(report.versions_scanned, 0);
        assert!(report.plan.is_empty());
        assert!(cleaner.api().deletes().is_empty());
        assert!(!report.has_failures());
    }

    #[tokio::test]
    async fn test_url_without_api_root_is_skipped() {
        let cleaner = Cleaner::new(sample_api());

        let report = cleaner
            .run_url("http://nexus/content/repositories/r/g/a", RetentionPolicy::keep_newest(0))
            .await;

        assert!(matches!(report.metadata, MetadataRebuild::Unresolved { .. }));
        assert!(report.has_failures());
        assert!(report.plan.is_empty());
        assert!(cleaner.api().lists().is_empty());
        assert!(cleaner.api().deletes().is_empty());
    }

    #[tokio::test]
    async fn test_run_all_processes_in_order() {
        let other = "http://nexus/service/local/repositories/r/content/g/b";
        let api = sample_api().with_listing(other, &[("b1", false, "2014-01-01 00:00:00")]);
        let cleaner = Cleaner::new(api);
        let coordinates = [coordinate(), RepositoryCoordinate::new(BASE, "r", "g", "b")];

        let reports = cleaner
            .run_all(&coordinates, RetentionPolicy::keep_newest(1))
            .await;

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].artifact_url, ARTIFACT);
        assert_eq!(reports[1].artifact_url, other);
        assert!(reports[1].plan.is_empty());
        assert_eq!(cleaner.api().lists(), [ARTIFACT, other]);
    }
}
