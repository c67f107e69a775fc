//! Cleanup run reports.
//!
//! A [`RunReport`] is produced once per artifact processed. It records what
//! was planned, what happened to each planned locator, and whether the
//! metadata rebuild was requested. Reports are not persisted; the caller is
//! responsible for surfacing them.

use serde::Serialize;

use crate::plan::DeletionPlan;
use crate::policy::RetentionPolicy;

/// Outcome of a single delete call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum DeleteOutcome {
    /// The repository accepted the delete.
    Deleted {
        /// HTTP status returned.
        status: u16,
    },

    /// The delete was rejected or never reached the repository.
    Failed {
        /// HTTP status, if a response was received.
        status: Option<u16>,
        /// Error description.
        error: String,
    },

    /// Dry-run mode was active; no request was sent.
    DryRun,
}

impl DeleteOutcome {
    /// Creates a failed outcome for a request that got no response.
    #[must_use]
    pub fn transport_failure(error: impl Into<String>) -> Self {
        Self::Failed {
            status: None,
            error: error.into(),
        }
    }

    /// Returns true if the repository accepted the delete.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted { .. })
    }

    /// Returns true if the delete failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Returns true if the delete was skipped by dry-run mode.
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        matches!(self, Self::DryRun)
    }

    /// Returns the HTTP status, if one was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Deleted { status } => Some(*status),
            Self::Failed { status, .. } => *status,
            Self::DryRun => None,
        }
    }
}

/// Outcome of deleting one planned locator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceOutcome {
    /// Resource URI the delete was issued against.
    pub locator: String,

    /// What happened.
    #[serde(flatten)]
    pub outcome: DeleteOutcome,
}

/// State of the metadata rebuild step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum MetadataRebuild {
    /// Nothing was deleted, so no rebuild was requested.
    NotAttempted,

    /// A rebuild was requested.
    Attempted {
        /// Metadata URL the delete was issued against.
        url: String,
        /// Outcome of that delete.
        outcome: DeleteOutcome,
    },

    /// The metadata URL could not be derived from the artifact URL; the
    /// artifact was not processed.
    Unresolved {
        /// Why the URL could not be derived.
        reason: String,
    },
}

/// Report for one artifact processed by a cleanup run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Content URL of the artifact that was scanned.
    pub artifact_url: String,

    /// Policy the plan was computed with.
    pub policy: RetentionPolicy,

    /// Number of version entries considered by the policy.
    pub versions_scanned: usize,

    /// Locators selected for removal.
    pub plan: DeletionPlan,

    /// Outcome per planned locator, in the order the deletes were issued.
    pub outcomes: Vec<ResourceOutcome>,

    /// Metadata rebuild state.
    pub metadata: MetadataRebuild,
}

impl RunReport {
    /// Creates an empty report for an artifact.
    #[must_use]
    pub fn new(artifact_url: impl Into<String>, policy: RetentionPolicy) -> Self {
        Self {
            artifact_url: artifact_url.into(),
            policy,
            versions_scanned: 0,
            plan: DeletionPlan::default(),
            outcomes: Vec::new(),
            metadata: MetadataRebuild::NotAttempted,
        }
    }

    /// Records the outcome of one delete.
    pub fn record(&mut self, locator: impl Into<String>, outcome: DeleteOutcome) {
        self.outcomes.push(ResourceOutcome {
            locator: locator.into(),
            outcome,
        });
    }

    /// Number of versions the repository confirmed as deleted.
    #[must_use]
    pub fn deleted_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.outcome.is_deleted()).count()
    }

    /// Number of deletes that failed.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.outcome.is_failed()).count()
    }

    /// Number of deletes skipped by dry-run mode.
    #[must_use]
    pub fn dry_run_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.outcome.is_dry_run()).count()
    }

    /// Returns true if a metadata rebuild was requested.
    #[must_use]
    pub const fn rebuild_attempted(&self) -> bool {
        matches!(self.metadata, MetadataRebuild::Attempted { .. })
    }

    /// Returns true if any delete, including the metadata rebuild, failed or
    /// the artifact could not be processed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
            || match &self.metadata {
                MetadataRebuild::Attempted { outcome, .. } => outcome.is_failed(),
                MetadataRebuild::Unresolved { .. } => true,
                MetadataRebuild::NotAttempted => false,
            }
    }
}
