//! Implementation of the `lingua check` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use lingua_ru::fixtures::{parse_fixtures, run_fixtures, FixtureError, FixtureKind, FixtureOutcome};
use lingua_ru::Case;
use miette::{miette, IntoDiagnostic};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::output::table::format_failure_table;
use crate::output::FixtureDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Fixture files, one `input;expected` record per line
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Expected values are names declined into this case
    #[arg(long, conflicts_with = "gender", required_unless_present = "gender")]
    pub case: Option<String>,

    /// Expected values are genders (male, female, unknown)
    #[arg(long)]
    pub gender: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked file.
#[derive(Serialize)]
struct FileReport {
    file: String,
    total: usize,
    passed: usize,
    failures: Vec<FixtureOutcome>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let kind = match &args.case {
        Some(value) => FixtureKind::Inflect(value.parse::<Case>().map_err(|e| miette!("{}", e))?),
        None => FixtureKind::Gender,
    };

    let mut reports = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let content = read_to_string(path)
            .into_diagnostic()
            .map_err(|e| miette!("Failed to read fixture file {}: {}", path.display(), e))?;

        let records = match parse_fixtures(&content) {
            Ok(records) => records,
            Err(FixtureError::Syntax {
                line,
                column,
                message,
            }) => {
                let diagnostic =
                    FixtureDiagnostic::from_position(path, &content, line, column, message);
                return Err(diagnostic.into());
            }
            Err(e) => return Err(miette!("{}", e)),
        };

        let outcomes = run_fixtures(&records, kind);
        let total = outcomes.len();
        let failures: Vec<FixtureOutcome> = outcomes
            .into_iter()
            .filter(|outcome| !outcome.passed())
            .collect();
        log::info!(
            "{}: {} of {} records failed",
            path.display(),
            failures.len(),
            total
        );
        reports.push(FileReport {
            file: path.display().to_string(),
            total,
            passed: total - failures.len(),
            failures,
        });
    }

    let any_failed = reports.iter().any(|report| !report.failures.is_empty());

    if args.json {
        let json = serde_json::to_string_pretty(&reports)
            .map_err(|e| miette!("JSON serialization failed: {}", e))?;
        println!("{}", json);
    } else {
        for report in &reports {
            if report.failures.is_empty() {
                println!(
                    "{} {}: {}/{} passed",
                    "✓".green(),
                    report.file,
                    report.passed,
                    report.total
                );
            } else {
                println!(
                    "{} {}: {}/{} passed",
                    "✗".red(),
                    report.file,
                    report.passed,
                    report.total
                );
                println!("{}", format_failure_table(&report.failures));
            }
        }
    }

    if any_failed {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
