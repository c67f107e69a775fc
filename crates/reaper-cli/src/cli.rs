//! Command-line arguments.

use chrono::NaiveDate;
use clap::{Args, Parser};
use reaper_core::RetentionPolicy;

/// Reaper - retention policy enforcement for Nexus repositories
#[derive(Parser, Debug)]
#[command(name = "reaper")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Username for the repository
    #[arg(short, long, env = "REAPER_USERNAME")]
    pub username: String,

    /// Password for the repository
    #[arg(short, long, env = "REAPER_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Nexus base URL (e.g., `<http://localhost:8081/nexus>`)
    #[arg(short = 'n', long = "nexusUrl", env = "REAPER_NEXUS_URL", value_parser = parse_nexus_url)]
    pub nexus_url: String,

    /// Repository id (e.g., snapshots)
    #[arg(short = 'r', long = "repositoryId")]
    pub repository_id: String,

    /// Maven group id (e.g., com.example)
    #[arg(short = 'g', long = "groupId")]
    pub group_id: String,

    /// Artifact id to clean; repeat the flag for several artifacts
    #[arg(short = 'a', long = "artifactId", required = true)]
    pub artifact_ids: Vec<String>,

    #[command(flatten)]
    pub policy: PolicyArgs,

    /// Compute and report the plan without deleting anything
    #[arg(short = 'y', long = "dryRun")]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout: u64,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Retention policy selection. Exactly one flag must be given.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct PolicyArgs {
    /// Keep the newest N versions
    #[arg(short = 'l', long = "keepLast", value_name = "N", value_parser = parse_keep_last)]
    pub keep_last: Option<usize>,

    /// Delete versions last modified before this date
    #[arg(short = 'd', long = "keepDate", value_name = "YYYYMMDD", value_parser = parse_keep_date)]
    pub keep_date: Option<NaiveDate>,
}

impl PolicyArgs {
    /// Returns the selected policy.
    pub fn policy(&self) -> Option<RetentionPolicy> {
        match (self.keep_last, self.keep_date) {
            (Some(count), _) => Some(RetentionPolicy::keep_newest(count)),
            (None, Some(cutoff)) => Some(RetentionPolicy::older_than(cutoff)),
            (None, None) => None,
        }
    }
}

/// Output format for the run summary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn parse_keep_last(value: &str) -> Result<usize, reaper_core::Error> {
    RetentionPolicy::parse_keep_count(value)
}

fn parse_keep_date(value: &str) -> Result<NaiveDate, reaper_core::Error> {
    RetentionPolicy::parse_cutoff(value)
}

fn parse_nexus_url(value: &str) -> Result<String, String> {
    let url = url::Url::parse(value).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => Ok(value.to_string()),
        other => Err(format!("unsupported scheme '{other}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: [&str; 11] = [
        "reaper",
        "-u",
        "admin",
        "-p",
        "admin123",
        "-n",
        "http://localhost:8081/nexus",
        "-r",
        "snapshots",
        "-g",
        "com.test",
    ];

    fn parse(extra: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(BASE.iter().chain(extra))
    }

    #[test]
    fn test_keep_last() {
        let cli = parse(&["-a", "test-api", "-l", "2"]).unwrap();

        assert_eq!(cli.artifact_ids, ["test-api"]);
        assert_eq!(cli.policy.policy(), Some(RetentionPolicy::keep_newest(2)));
        assert!(!cli.dry_run);
        assert!(!cli.debug);
        assert_eq!(cli.timeout, 30);
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_keep_date() {
        let cli = parse(&["-a", "test-api", "-d", "20140301"]).unwrap();

        let cutoff = NaiveDate::from_ymd_opt(2014, 3, 1).unwrap();
        assert_eq!(cli.policy.policy(), Some(RetentionPolicy::older_than(cutoff)));
    }

    #[test]
    fn test_long_flags() {
        let cli = Cli::try_parse_from([
            "reaper",
            "--username",
            "admin",
            "--password",
            "admin123",
            "--nexusUrl",
            "https://nexus.example.com/nexus/",
            "--repositoryId",
            "releases",
            "--groupId",
            "com.example",
            "--artifactId",
            "api",
            "--keepLast",
            "3",
            "--dryRun",
            "--debug",
            "--timeout",
            "10",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.nexus_url, "https://nexus.example.com/nexus/");
        assert_eq!(cli.repository_id, "releases");
        assert_eq!(cli.group_id, "com.example");
        assert!(cli.dry_run);
        assert!(cli.debug);
        assert_eq!(cli.timeout, 10);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_repeated_artifacts() {
        let cli = parse(&["-a", "api", "-a", "web", "--artifactId", "worker", "-l", "1"]).unwrap();
        assert_eq!(cli.artifact_ids, ["api", "web", "worker"]);
    }

    #[test]
    fn test_policy_required() {
        let err = parse(&["-a", "api"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_policies_are_exclusive() {
        let err = parse(&["-a", "api", "-l", "2", "-d", "20140301"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_artifact_required() {
        let err = parse(&["-l", "2"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_missing_repository() {
        let err = Cli::try_parse_from([
            "reaper",
            "-u",
            "admin",
            "-p",
            "admin123",
            "-n",
            "http://localhost:8081/nexus",
            "-g",
            "com.test",
            "-a",
            "api",
            "-l",
            "2",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_invalid_keep_last() {
        for value in ["0", "two", "1.5"] {
            let err = parse(&["-a", "api", "-l", value]).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation, "{value}");
        }
    }

    #[test]
    fn test_invalid_keep_date() {
        for value in ["2014-03-01", "20141301", "2014"] {
            let err = parse(&["-a", "api", "-d", value]).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation, "{value}");
        }
    }

    #[test]
    fn test_invalid_nexus_url() {
        for value in ["localhost:8081/nexus", "not a url", "ftp://nexus"] {
            let err = Cli::try_parse_from([
                "reaper", "-u", "admin", "-p", "admin123", "-n", value, "-r", "snapshots", "-g",
                "com.test", "-a", "api", "-l", "2",
            ])
            .unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation, "{value}");
        }
    }
}
