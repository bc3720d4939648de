use std::fmt::{Display, Formatter, Result as FmtResult};

use icu_casemap::CaseMapper;
use icu_locale_core::langid;
use unicode_segmentation::UnicodeSegmentation;

use crate::error::LinguaError;

/// A full name split into its parts.
///
/// Parts are taken in the fixed order surname, given name, patronymic. Given
/// name and patronymic are optional; a name with more than three parts is
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName {
    pub surname: String,
    pub given_name: Option<String>,
    pub patronymic: Option<String>,
}

impl PersonName {
    /// Split a whitespace-separated full name, capitalizing every part.
    ///
    /// # Errors
    ///
    /// Returns [`LinguaError::EmptyInput`] for blank input and
    /// [`LinguaError::MalformedName`] for more than three parts.
    pub fn parse(full_name: &str) -> Result<Self, LinguaError> {
        let parts: Vec<&str> = full_name.split_whitespace().collect();
        match parts.as_slice() {
            [] => Err(LinguaError::EmptyInput),
            [surname] => Ok(Self::from_parts(surname, None, None)),
            [surname, given] => Ok(Self::from_parts(surname, Some(given), None)),
            [surname, given, patronymic] => {
                Ok(Self::from_parts(surname, Some(given), Some(patronymic)))
            }
            _ => Err(LinguaError::MalformedName {
                tokens: parts.len(),
            }),
        }
    }

    fn from_parts(surname: &str, given: Option<&str>, patronymic: Option<&str>) -> Self {
        Self {
            surname: capitalize(surname),
            given_name: given.map(capitalize),
            patronymic: patronymic.map(capitalize),
        }
    }
}

impl Display for PersonName {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.surname)?;
        for part in [&self.given_name, &self.patronymic].into_iter().flatten() {
            if !part.is_empty() {
                write!(f, " {part}")?;
            }
        }
        Ok(())
    }
}

/// Capitalize a name part: the first letter of every hyphen-separated
/// segment upper case, everything else lower case.
///
/// ```
/// use lingua_ru::name::capitalize;
///
/// assert_eq!(capitalize("иВАНОВ"), "Иванов");
/// assert_eq!(capitalize("петрова-водкина"), "Петрова-Водкина");
/// ```
pub fn capitalize(part: &str) -> String {
    let mapper = CaseMapper::new();
    let ru = langid!("ru");
    part.split('-')
        .map(|segment| {
            let mut graphemes = segment.graphemes(true);
            match graphemes.next() {
                Some(first) => {
                    let head = mapper.uppercase_to_string(first, &ru);
                    let tail = mapper.lowercase_to_string(graphemes.as_str(), &ru);
                    format!("{head}{tail}")
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}
