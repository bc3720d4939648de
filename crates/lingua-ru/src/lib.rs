//! Russian name declension and number spelling.
//!
//! - [`name`] declines "Surname GivenName Patronymic" into the genitive,
//!   dative, accusative, instrumental and prepositional cases and infers
//!   gender from name endings.
//! - [`number`] spells integers and prices in words with correct noun
//!   agreement.
//! - [`Lingua`] bundles both behind a small facade.
//!
//! Every operation is a pure function of its arguments.

mod error;
pub mod fixtures;
mod lingua;
pub mod name;
pub mod number;
pub mod types;

pub use error::{LinguaError, compute_suggestions};
pub use lingua::Lingua;
pub use types::{Case, Gender, IntoCase};
