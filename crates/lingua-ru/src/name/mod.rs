//! Declension of Russian personal names.
//!
//! A full name is parsed into surname, given name and patronymic, its gender
//! is inferred from the endings of those parts, and each part is then
//! rewritten by an ordered table of suffix rules.

mod gender;
mod inflect;
mod person;
pub mod rules;
pub mod suffix;

pub use gender::{gender, infer_gender};
pub use inflect::{
    DeclensionContext, inflect, inflect_given_name, inflect_name, inflect_patronymic,
    inflect_surname,
};
pub use person::{PersonName, capitalize};
