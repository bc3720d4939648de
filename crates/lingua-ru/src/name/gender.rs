//! Gender inference from name morphology.

use log::debug;

use crate::name::person::PersonName;
use crate::name::rules::{FEMININE_PATRONYMIC, GENDER_BY_GIVEN_NAME, GENDER_BY_SURNAME};
use crate::name::suffix::Suffix;
use crate::types::Gender;

/// Infer the gender of a parsed name.
///
/// Signals are checked in tiers: the patronymic decides alone when present,
/// then the surname, then the given name. Within a tier the first matching
/// ending wins.
pub fn infer_gender(name: &PersonName) -> Gender {
    if let Some(patronymic) = &name.patronymic {
        return if FEMININE_PATRONYMIC.matches(patronymic) {
            Gender::Female
        } else {
            Gender::Male
        };
    }

    let by_surname = first_signal(GENDER_BY_SURNAME, &name.surname);
    let gender = by_surname
        .or_else(|| {
            name.given_name
                .as_deref()
                .and_then(|given| first_signal(GENDER_BY_GIVEN_NAME, given))
        })
        .unwrap_or(Gender::Unknown);
    debug!("inferred gender {gender} for {name}");
    gender
}

/// Infer the gender of a full name string.
///
/// Blank or malformed input yields [`Gender::Unknown`] rather than an error.
///
/// ```
/// use lingua_ru::Gender;
/// use lingua_ru::name::gender;
///
/// assert_eq!(gender("Кац Саша Ивановна"), Gender::Female);
/// assert_eq!(gender(""), Gender::Unknown);
/// ```
pub fn gender(full_name: &str) -> Gender {
    PersonName::parse(full_name)
        .map(|name| infer_gender(&name))
        .unwrap_or_default()
}

fn first_signal(signals: &[(Suffix, Gender)], word: &str) -> Option<Gender> {
    signals
        .iter()
        .find(|(suffix, _)| suffix.matches(word))
        .map(|(_, gender)| *gender)
}
