//! Monetary amounts in words.

use bon::Builder;

use crate::error::LinguaError;
use crate::number::amount::IntoAmount;
use crate::number::plural::{KOPECK_FORMS, PluralForm, PluralForms, RUBLE_FORMS};
use crate::number::spell::spell_number;

/// Formats an amount as "<major words> <major noun> <minor> <minor noun>".
///
/// Defaults to rubles and kopecks with kopecks written as two digits. The
/// unit nouns and their grammatical gender are configurable, which covers
/// any currency split into hundredths.
///
/// # Example
///
/// ```
/// use lingua_ru::number::PriceSpeller;
///
/// let speller = PriceSpeller::builder().spell_fractional(true).build();
/// assert_eq!(
///     speller.spell("7069.77").unwrap(),
///     "семь тысяч шестьдесят девять рублей семьдесят семь копеек"
/// );
///
/// let hryvnias = PriceSpeller::builder()
///     .major(["гривна", "гривны", "гривен"])
///     .major_feminine(true)
///     .build();
/// assert_eq!(hryvnias.spell(21).unwrap(), "двадцать одна гривна 00 копеек");
/// ```
#[derive(Debug, Clone, Builder)]
pub struct PriceSpeller {
    /// Spell the minor units in words instead of two digits.
    #[builder(default)]
    spell_fractional: bool,

    /// Noun forms for the major unit.
    #[builder(default = RUBLE_FORMS)]
    major: PluralForms<'static>,

    /// Whether the major unit noun is feminine.
    #[builder(default)]
    major_feminine: bool,

    /// Noun forms for the minor unit.
    #[builder(default = KOPECK_FORMS)]
    minor: PluralForms<'static>,

    /// Whether the minor unit noun is feminine ("копейка" is).
    #[builder(default = true)]
    minor_feminine: bool,
}

impl Default for PriceSpeller {
    fn default() -> Self {
        PriceSpeller::builder().build()
    }
}

impl PriceSpeller {
    /// Rubles and kopecks, kopecks as digits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rubles and kopecks, optionally spelling the kopecks.
    pub fn rubles(spell_fractional: bool) -> Self {
        PriceSpeller::builder()
            .spell_fractional(spell_fractional)
            .build()
    }

    /// Spell `value` as a price.
    ///
    /// # Errors
    ///
    /// Returns [`LinguaError::InvalidNumber`] when `value` is negative,
    /// non-numeric or out of range.
    pub fn spell(&self, value: impl IntoAmount) -> Result<String, LinguaError> {
        let amount = value.into_amount()?;
        let minor = u64::from(amount.hundredths);
        let minor_text = if self.spell_fractional {
            spell_number(minor, self.minor_feminine)
        } else {
            format!("{minor:02}")
        };
        Ok(format!(
            "{} {} {} {}",
            spell_number(amount.whole, self.major_feminine),
            self.major[PluralForm::of_unsigned(amount.whole).index()],
            minor_text,
            self.minor[PluralForm::of_unsigned(minor).index()],
        ))
    }
}
