//! Cleanup run and summary output.

use std::time::Duration;

use anyhow::{Context, Result};
use reaper_core::{DeleteOutcome, MetadataRebuild, RunReport};
use reaper_registry::{Cleaner, RepositoryAuth, RepositoryClient, RepositoryConfig};
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::{Cli, OutputFormat};

/// Totals across every artifact of a run.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct CleanupSummary {
    pub artifacts: usize,
    pub versions_scanned: usize,
    pub planned: usize,
    pub deleted: usize,
    pub failed: usize,
    pub dry_run: usize,
    pub rebuilds_requested: usize,
}

impl CleanupSummary {
    /// Sums the counters of each report.
    pub fn from_reports(reports: &[RunReport]) -> Self {
        reports.iter().fold(Self::default(), |mut summary, report| {
            summary.artifacts += 1;
            summary.versions_scanned += report.versions_scanned;
            summary.planned += report.plan.len();
            summary.deleted += report.deleted_count();
            summary.failed += report.failed_count();
            summary.dry_run += report.dry_run_count();
            if report.rebuild_attempted() {
                summary.rebuilds_requested += 1;
            }
            summary
        })
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: CleanupSummary,
    reports: &'a [RunReport],
}

/// Runs the cleanup for every artifact on the command line.
///
/// Individual delete failures are part of the reports and do not make the
/// run fail.
///
/// # Errors
///
/// Returns an error if:
/// - A retention policy was not selected
/// - The repository client cannot be created
/// - JSON output cannot be written
pub async fn run(cli: &Cli) -> Result<()> {
    let policy = cli
        .policy
        .policy()
        .context("Either --keepLast or --keepDate is required")?;

    let config = RepositoryConfig::new(&cli.nexus_url)
        .with_auth(RepositoryAuth::basic(&cli.username, &cli.password))
        .with_timeout(Duration::from_secs(cli.timeout))
        .with_dry_run(cli.dry_run);

    let coordinates: Vec<_> = cli
        .artifact_ids
        .iter()
        .map(|artifact| config.coordinate(&cli.repository_id, &cli.group_id, artifact))
        .collect();

    if cli.dry_run {
        info!("Dry run enabled");
    }
    info!(policy = %policy, "Will clean the following artifacts");
    for coordinate in &coordinates {
        info!(url = %coordinate.content_url(), "  {coordinate}");
    }

    let client = RepositoryClient::new(config).context("Failed to create repository client")?;
    let reports = Cleaner::new(client).run_all(&coordinates, policy).await;
    debug!(artifacts = reports.len(), "Cleanup finished");

    match cli.format {
        OutputFormat::Text => print_text_summary(&reports),
        OutputFormat::Json => print_json_summary(&reports)?,
    }

    Ok(())
}

fn print_text_summary(reports: &[RunReport]) {
    let summary = CleanupSummary::from_reports(reports);

    println!("Reaper Cleanup Summary");
    println!("======================");
    println!();
    println!(
        "Total: {} artifacts, {} versions scanned, {} planned ({} deleted, {} failed, {} dry run)",
        summary.artifacts,
        summary.versions_scanned,
        summary.planned,
        summary.deleted,
        summary.failed,
        summary.dry_run
    );
    println!();

    for report in reports {
        let icon = if report.has_failures() { "✗" } else { "✓" };
        println!("{icon} {} [{}]", report.artifact_url, report.policy);
        println!(
            "  Versions: {} scanned, {} planned",
            report.versions_scanned,
            report.plan.len()
        );
        for outcome in &report.outcomes {
            println!("    {} {}", outcome_label(&outcome.outcome), outcome.locator);
        }
        println!("  Metadata: {}", metadata_label(&report.metadata));
        println!();
    }
}

fn print_json_summary(reports: &[RunReport]) -> Result<()> {
    let output = JsonOutput {
        summary: CleanupSummary::from_reports(reports),
        reports,
    };
    let json = serde_json::to_string_pretty(&output)?;
    println!("{json}");
    Ok(())
}

fn outcome_label(outcome: &DeleteOutcome) -> String {
    match outcome {
        DeleteOutcome::Deleted { status } => format!("deleted ({status})"),
        DeleteOutcome::Failed {
            status: Some(status),
            ..
        } => format!("failed ({status})"),
        DeleteOutcome::Failed { status: None, error } => format!("failed ({error})"),
        DeleteOutcome::DryRun => "would delete".to_string(),
    }
}

fn metadata_label(metadata: &MetadataRebuild) -> String {
    match metadata {
        MetadataRebuild::NotAttempted => "not requested".to_string(),
        MetadataRebuild::Attempted {
            outcome: DeleteOutcome::DryRun,
            ..
        } => "would rebuild".to_string(),
        MetadataRebuild::Attempted { outcome, .. } => {
            format!("rebuild {}", outcome_label(outcome))
        }
        MetadataRebuild::Unresolved { reason } => format!("skipped ({reason})"),
    }
}
