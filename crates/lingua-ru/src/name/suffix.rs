//! End-anchored suffix patterns and case-ending rewrite rules.
//!
//! A pattern is a fixed `tail` optionally preceded by a constraint on the
//! text just before it (one of several stems, a letter class, or any letter
//! outside a class). Rewriting keeps everything before `tail` and appends
//! the ending for the requested case, so the constrained part survives as the
//! stem.

use crate::types::Case;

/// Constraint on the text immediately before a pattern's tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Before {
    /// No constraint.
    Anything,
    /// One of the listed stems.
    Stem(&'static [&'static str]),
    /// A single letter from the class.
    Letter(&'static str),
}

/// An end-anchored match on a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suffix {
    /// `tail` at the end of the word, preceded by `before`.
    Ends { before: Before, tail: &'static str },
    /// The last letter is not in the class.
    LastNotIn(&'static str),
}

impl Suffix {
    /// A plain literal ending.
    pub const fn literal(tail: &'static str) -> Self {
        Suffix::Ends {
            before: Before::Anything,
            tail,
        }
    }

    /// One of `stems` directly followed by `tail`.
    pub const fn stem(stems: &'static [&'static str], tail: &'static str) -> Self {
        Suffix::Ends {
            before: Before::Stem(stems),
            tail,
        }
    }

    /// A letter from `class` directly followed by `tail`.
    pub const fn letter(class: &'static str, tail: &'static str) -> Self {
        Suffix::Ends {
            before: Before::Letter(class),
            tail,
        }
    }

    /// Check whether `word` ends with this pattern.
    pub fn matches(&self, word: &str) -> bool {
        self.stem_of(word).is_some()
    }

    /// Return `word` with the tail removed, if the pattern matches.
    pub fn stem_of<'w>(&self, word: &'w str) -> Option<&'w str> {
        match *self {
            Suffix::Ends { before, tail } => {
                let head = word.strip_suffix(tail)?;
                let accepted = match before {
                    Before::Anything => true,
                    Before::Stem(stems) => stems.iter().any(|stem| head.ends_with(*stem)),
                    Before::Letter(class) => head
                        .chars()
                        .next_back()
                        .is_some_and(|c| class.contains(c)),
                };
                accepted.then_some(head)
            }
            Suffix::LastNotIn(class) => word
                .chars()
                .next_back()
                .filter(|c| !class.contains(*c))
                .map(|_| word),
        }
    }
}

/// A suffix pattern with one replacement ending per grammatical case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRule {
    pub suffix: Suffix,
    /// Endings indexed by [`Case::index`].
    pub endings: [&'static str; 5],
}

impl SuffixRule {
    pub const fn new(suffix: Suffix, endings: [&'static str; 5]) -> Self {
        Self { suffix, endings }
    }

    /// Rewrite `word` for `case` if the rule matches.
    pub fn apply(&self, word: &str, case: Case) -> Option<String> {
        self.suffix
            .stem_of(word)
            .map(|stem| format!("{stem}{}", self.endings[case.index()]))
    }
}

/// Apply the first matching rule of an ordered group.
///
/// Returns the index of the matching rule together with the rewritten word.
pub fn apply_first(rules: &[SuffixRule], word: &str, case: Case) -> Option<(usize, String)> {
    rules
        .iter()
        .enumerate()
        .find_map(|(position, rule)| rule.apply(word, case).map(|result| (position, result)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_matches_only_at_end() {
        let suffix = Suffix::literal("ич");
        assert!(suffix.matches("Иванович"));
        assert!(!suffix.matches("Ичков"));
    }

    #[test]
    fn stem_is_preserved() {
        let rule = SuffixRule::new(
            Suffix::stem(&["ин", "ов"], "а"),
            ["ой", "ой", "у", "ой", "ой"],
        );
        assert_eq!(rule.apply("Петрова", Case::Accusative).as_deref(), Some("Петрову"));
        assert_eq!(rule.apply("Пушкина", Case::Genitive).as_deref(), Some("Пушкиной"));
        assert_eq!(rule.apply("Смирнова", Case::Genitive).as_deref(), Some("Смирновой"));
        assert_eq!(rule.apply("Дюма", Case::Genitive), None);
    }

    #[test]
    fn letter_class_requires_a_preceding_letter() {
        let suffix = Suffix::letter("аеёиоуыэюя", "а");
        assert!(suffix.matches("Лиа"));
        assert!(!suffix.matches("а"));
        assert!(!suffix.matches("Анна"));
    }

    #[test]
    fn last_not_in_rejects_empty_and_vowels() {
        let suffix = Suffix::LastNotIn("аеёиоуыэюя");
        assert!(suffix.matches("Иван"));
        assert!(!suffix.matches("Илья"));
        assert!(!suffix.matches(""));
    }

    #[test]
    fn apply_first_stops_at_first_match() {
        let rules = [
            SuffixRule::new(Suffix::literal("кий"), ["кого", "кому", "кого", "ким", "ком"]),
            SuffixRule::new(Suffix::literal("ий"), ["его", "ему", "его", "им", "ем"]),
        ];
        assert_eq!(
            apply_first(&rules, "Горький", Case::Genitive),
            Some((0, "Горького".to_string()))
        );
        assert_eq!(
            apply_first(&rules, "Берий", Case::Dative),
            Some((1, "Берему".to_string()))
        );
    }
}
