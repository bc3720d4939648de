//! The `Lingua` facade.

use crate::error::LinguaError;
use crate::name;
use crate::number::{IntoAmount, PriceSpeller, plural, spell_number};
use crate::types::{Gender, IntoCase};

/// Entry points for name declension and number spelling.
///
/// `Lingua` holds no state; every call is independent and the type can be
/// shared freely between threads.
///
/// # Example
///
/// ```
/// use lingua_ru::{Case, Gender, Lingua};
///
/// let lingua = Lingua::new();
/// assert_eq!(lingua.name_gender("Кац Саша Иванович"), Gender::Male);
/// assert_eq!(
///     lingua.name_inflect("Иванова Мария Ивановна", Case::Genitive).unwrap(),
///     "Ивановой Марии Ивановны"
/// );
/// assert_eq!(lingua.num_spell("244").unwrap(), "двести сорок четыре");
/// assert_eq!(
///     lingua.price_spell(12.44, false).unwrap(),
///     "двенадцать рублей 44 копейки"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Lingua;

impl Lingua {
    pub fn new() -> Self {
        Self
    }

    /// Infer the gender of "Surname GivenName Patronymic".
    ///
    /// Never fails: blank or malformed names are [`Gender::Unknown`].
    pub fn name_gender(&self, full_name: &str) -> Gender {
        name::gender(full_name)
    }

    /// Decline "Surname GivenName Patronymic" into `case`, given as a
    /// [`Case`](crate::Case), an index 0..=4 or a case name.
    pub fn name_inflect(
        &self,
        full_name: &str,
        case: impl IntoCase,
    ) -> Result<String, LinguaError> {
        name::inflect(full_name, case.into_case()?)
    }

    /// Pick the noun form from `[one, few, many]` agreeing with `n`.
    pub fn num_plural(&self, forms: &[&str; 3], n: i64, with_number: bool) -> String {
        plural(forms, n, with_number)
    }

    /// Spell a non-negative integer (or integral numeric string) in words.
    pub fn num_spell(&self, n: impl IntoAmount) -> Result<String, LinguaError> {
        let n = n.into_amount()?.require_integral()?;
        Ok(spell_number(n, false))
    }

    /// Spell a price in rubles and kopecks.
    pub fn price_spell(
        &self,
        value: impl IntoAmount,
        spell_fractional: bool,
    ) -> Result<String, LinguaError> {
        PriceSpeller::rubles(spell_fractional).spell(value)
    }
}
