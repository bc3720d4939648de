//! Semicolon-delimited fixture files.
//!
//! Each non-blank line holds one record, `input;expected`. Lines starting
//! with `#` are comments. Records are checked either against name
//! declension in one case or against gender inference.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::name::{gender, inflect};
use crate::types::Case;

/// Errors that occur while reading a fixture file.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// File I/O error when reading the fixture file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A malformed record.
    #[error("{line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },
}

/// One `input;expected` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureRecord {
    /// 1-based line number in the source text.
    pub line: usize,
    pub input: String,
    pub expected: String,
}

/// What a fixture file checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureKind {
    /// Expected column is the name declined into the case.
    Inflect(Case),
    /// Expected column is "male", "female" or "unknown".
    Gender,
}

/// The result of checking one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureOutcome {
    #[serde(flatten)]
    pub record: FixtureRecord,
    pub actual: String,
}

impl FixtureOutcome {
    pub fn passed(&self) -> bool {
        self.record.expected == self.actual
    }
}

/// Parse fixture records from text.
///
/// # Errors
///
/// Returns [`FixtureError::Syntax`] for a line without exactly one `;` or
/// with an empty input column.
///
/// ```
/// use lingua_ru::fixtures::parse_fixtures;
///
/// let records = parse_fixtures("# genitive\nИванов Иван;Иванова Ивана\n").unwrap();
/// assert_eq!(records[0].line, 2);
/// assert_eq!(records[0].expected, "Иванова Ивана");
/// ```
pub fn parse_fixtures(content: &str) -> Result<Vec<FixtureRecord>, FixtureError> {
    let mut records = Vec::new();
    for (index, raw) in content.lines().enumerate() {
        let line = index + 1;
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        let leading = raw.chars().count() - raw.trim_start().chars().count();
        let Some((input, expected)) = text.split_once(';') else {
            return Err(FixtureError::Syntax {
                line,
                column: leading + text.chars().count() + 1,
                message: "expected ';' between input and expected value".to_string(),
            });
        };
        if let Some(extra) = expected.find(';') {
            return Err(FixtureError::Syntax {
                line,
                column: leading + input.chars().count() + 2 + expected[..extra].chars().count(),
                message: "unexpected second ';'".to_string(),
            });
        }
        if input.trim().is_empty() {
            return Err(FixtureError::Syntax {
                line,
                column: leading + 1,
                message: "empty input column".to_string(),
            });
        }
        records.push(FixtureRecord {
            line,
            input: input.trim().to_string(),
            expected: expected.trim().to_string(),
        });
    }
    Ok(records)
}

/// Read and parse a fixture file.
pub fn load_fixtures(path: &Path) -> Result<Vec<FixtureRecord>, FixtureError> {
    let content = fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_fixtures(&content)
}

/// Check every record, in order.
///
/// A declension error is reported as the actual value `error: <message>`.
pub fn run_fixtures(records: &[FixtureRecord], kind: FixtureKind) -> Vec<FixtureOutcome> {
    records
        .iter()
        .map(|record| {
            let actual = match kind {
                FixtureKind::Inflect(case) => inflect(&record.input, case)
                    .unwrap_or_else(|error| format!("error: {error}")),
                FixtureKind::Gender => gender(&record.input).to_string(),
            };
            FixtureOutcome {
                record: record.clone(),
                actual,
            }
        })
        .collect()
}
