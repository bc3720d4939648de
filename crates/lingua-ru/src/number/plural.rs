//! Noun agreement after numerals.
//!
//! Russian nouns take one of three forms after a number: "один час",
//! "два часа", "пять часов". The form depends on the last one or two digits.

use serde::{Deserialize, Serialize};

/// Which of the three noun forms a number requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralForm {
    /// 1, 21, 101 (but not 11): "час".
    One,
    /// 2-4, 22-24 (but not 12-14): "часа".
    Few,
    /// Everything else: "часов".
    Many,
}

impl PluralForm {
    /// Select the form for `n`. Only the magnitude matters.
    ///
    /// ```
    /// use lingua_ru::number::PluralForm;
    ///
    /// assert_eq!(PluralForm::of(21), PluralForm::One);
    /// assert_eq!(PluralForm::of(12), PluralForm::Many);
    /// assert_eq!(PluralForm::of(-3), PluralForm::Few);
    /// ```
    pub fn of(n: i64) -> Self {
        Self::of_unsigned(n.unsigned_abs())
    }

    pub fn of_unsigned(n: u64) -> Self {
        let last = n % 10;
        let last_two = n % 100;
        if last == 1 && last_two != 11 {
            PluralForm::One
        } else if (2..=4).contains(&last) && !(10..=19).contains(&last_two) {
            PluralForm::Few
        } else {
            PluralForm::Many
        }
    }

    /// Position in a `[one, few, many]` triple.
    pub const fn index(self) -> usize {
        match self {
            PluralForm::One => 0,
            PluralForm::Few => 1,
            PluralForm::Many => 2,
        }
    }
}

/// Three noun forms: after 1, after 2-4, after 5+ ("час", "часа", "часов").
pub type PluralForms<'a> = [&'a str; 3];

pub const BILLION_FORMS: PluralForms<'static> = ["миллиард", "миллиарда", "миллиардов"];
pub const MILLION_FORMS: PluralForms<'static> = ["миллион", "миллиона", "миллионов"];
pub const THOUSAND_FORMS: PluralForms<'static> = ["тысяча", "тысячи", "тысяч"];
pub const RUBLE_FORMS: PluralForms<'static> = ["рубль", "рубля", "рублей"];
pub const KOPECK_FORMS: PluralForms<'static> = ["копейка", "копейки", "копеек"];

/// Pick the noun form agreeing with `n`, optionally prefixed by the number.
///
/// ```
/// use lingua_ru::number::plural;
///
/// let hours = ["час", "часа", "часов"];
/// assert_eq!(plural(&hours, 21, true), "21 час");
/// assert_eq!(plural(&hours, 22, false), "часа");
/// assert_eq!(plural(&hours, 26, false), "часов");
/// ```
pub fn plural(forms: &[&str; 3], n: i64, with_number: bool) -> String {
    let form = forms[PluralForm::of(n).index()];
    if with_number {
        format!("{n} {form}")
    } else {
        form.to_string()
    }
}
