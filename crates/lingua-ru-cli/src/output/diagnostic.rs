//! Miette diagnostic wrapper for fixture syntax errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::Path;
use thiserror::Error;

/// A miette-compatible diagnostic for malformed fixture records.
#[derive(Debug, Error, Diagnostic)]
#[error("syntax error: {message}")]
#[diagnostic(
    code(lingua::fixture),
    help("each record is `input;expected`, lines starting with # are comments")
)]
pub struct FixtureDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,
}

impl FixtureDiagnostic {
    /// Create a diagnostic pointing at a 1-based line and character column.
    pub fn from_position(
        path: &Path,
        content: &str,
        line: usize,
        column: usize,
        message: String,
    ) -> Self {
        let line_start = content
            .split_inclusive('\n')
            .take(line.saturating_sub(1))
            .map(str::len)
            .sum::<usize>();
        let line_text = content[line_start..].lines().next().unwrap_or_default();

        // Columns count characters; spans are byte offsets.
        let within = line_text
            .char_indices()
            .nth(column.saturating_sub(1))
            .map_or(line_text.len(), |(offset, _)| offset);
        let offset = (line_start + within).min(content.len());

        FixtureDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message,
        }
    }
}
