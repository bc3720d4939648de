//! Error types for name declension and number spelling.

use strsim::levenshtein;
use thiserror::Error;

/// An error returned by the public lingua operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinguaError {
    /// The full name was empty or contained only whitespace.
    #[error("name is empty")]
    EmptyInput,

    /// The full name has more parts than "Surname GivenName Patronymic".
    #[error("expected at most 3 name parts (surname, given name, patronymic), got {tokens}")]
    MalformedName { tokens: usize },

    /// Case index out of range or unknown case name.
    #[error("unknown grammatical case '{value}'{}", format_suggestions(suggestions))]
    InvalidCase {
        value: String,
        suggestions: Vec<String>,
    },

    /// Numeric input that cannot be spelled.
    #[error("invalid number '{input}': {reason}")]
    InvalidNumber { input: String, reason: String },
}

impl LinguaError {
    pub(crate) fn invalid_number(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidNumber {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Compute "did you mean" suggestions for an unknown key.
///
/// Returns up to 3 candidates within an edit distance of 2 (or 1 for keys of
/// 3 characters or fewer), closest first.
pub fn compute_suggestions(key: &str, candidates: &[&str]) -> Vec<String> {
    let max_distance = if key.chars().count() <= 3 { 1 } else { 2 };
    let mut scored: Vec<(usize, &str)> = candidates
        .iter()
        .map(|candidate| (levenshtein(key, candidate), *candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort_unstable();
    scored.dedup_by(|a, b| a.1 == b.1);
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
