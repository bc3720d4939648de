use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LinguaError, compute_suggestions};

/// A Russian grammatical case used as a declension target.
///
/// The nominative is the form names are given in and is never a target.
/// Discriminants match the numeric case indices accepted by
/// [`Lingua::name_inflect`](crate::Lingua::name_inflect).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    /// Родительный: "нет кого?"
    Genitive = 0,
    /// Дательный: "дать кому?"
    Dative = 1,
    /// Винительный: "вижу кого?"
    Accusative = 2,
    /// Творительный: "доволен кем?"
    Instrumental = 3,
    /// Предложный: "думаю о ком?"
    Prepositional = 4,
}

/// Short and long names accepted by `Case::from_str`, in index order.
const CASE_NAMES: &[(&str, &str)] = &[
    ("gen", "genitive"),
    ("dat", "dative"),
    ("acc", "accusative"),
    ("ins", "instrumental"),
    ("prep", "prepositional"),
];

impl Case {
    /// All cases in index order.
    pub const ALL: [Case; 5] = [
        Case::Genitive,
        Case::Dative,
        Case::Accusative,
        Case::Instrumental,
        Case::Prepositional,
    ];

    /// Position of this case in every 5-element ending table.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a case by its numeric index (0 = genitive .. 4 = prepositional).
    pub fn from_index(index: usize) -> Result<Case, LinguaError> {
        Case::ALL
            .get(index)
            .copied()
            .ok_or_else(|| LinguaError::InvalidCase {
                value: index.to_string(),
                suggestions: Vec::new(),
            })
    }

    /// Short name used on the command line (e.g. "gen").
    pub fn short_name(self) -> &'static str {
        CASE_NAMES[self.index()].0
    }

    /// Full English name (e.g. "genitive").
    pub fn name(self) -> &'static str {
        CASE_NAMES[self.index()].1
    }
}

impl Display for Case {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

impl FromStr for Case {
    type Err = LinguaError;

    /// Parse a case from an index ("0".."4") or a short or full name,
    /// ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        if let Ok(index) = key.parse::<usize>() {
            return Case::from_index(index);
        }
        if let Some(position) = CASE_NAMES
            .iter()
            .position(|(short, long)| *short == key || *long == key)
        {
            return Ok(Case::ALL[position]);
        }
        let candidates: Vec<&str> = CASE_NAMES
            .iter()
            .flat_map(|(short, long)| [*short, *long])
            .collect();
        Err(LinguaError::InvalidCase {
            suggestions: compute_suggestions(&key, &candidates),
            value: s.to_string(),
        })
    }
}

/// Conversion into a [`Case`] for the facade entry points.
///
/// Implemented for `Case` itself, numeric indices and case names, so callers
/// can write `name_inflect(name, Case::Dative)`, `name_inflect(name, 1)` or
/// `name_inflect(name, "dat")`.
pub trait IntoCase {
    fn into_case(self) -> Result<Case, LinguaError>;
}

impl IntoCase for Case {
    fn into_case(self) -> Result<Case, LinguaError> {
        Ok(self)
    }
}

impl IntoCase for usize {
    fn into_case(self) -> Result<Case, LinguaError> {
        Case::from_index(self)
    }
}

impl IntoCase for i32 {
    fn into_case(self) -> Result<Case, LinguaError> {
        usize::try_from(self)
            .map_err(|_| LinguaError::InvalidCase {
                value: self.to_string(),
                suggestions: Vec::new(),
            })
            .and_then(Case::from_index)
    }
}

impl IntoCase for &str {
    fn into_case(self) -> Result<Case, LinguaError> {
        self.parse()
    }
}
