//! Spelling integers out in Russian words.

use log::trace;

use crate::number::plural::{
    BILLION_FORMS, MILLION_FORMS, PluralForm, PluralForms, THOUSAND_FORMS,
};

const ZERO: &str = "ноль";

const FEMININE_UNITS: [&str; 2] = ["одна", "две"];

const UNITS: [&str; 19] = [
    "один",
    "два",
    "три",
    "четыре",
    "пять",
    "шесть",
    "семь",
    "восемь",
    "девять",
    "десять",
    "одиннацать",
    "двенадцать",
    "тринадцать",
    "четырнадцать",
    "пятнадцать",
    "шестнадцать",
    "семнадцать",
    "восемнадцать",
    "девятнадцать",
];

/// Tens from 20 to 90.
const TENS: [&str; 8] = [
    "двадцать",
    "тридцать",
    "сорок",
    "пятьдесят",
    "шестьдесят",
    "семьдесят",
    "восемдесят",
    "девяносто",
];

const HUNDREDS: [&str; 9] = [
    "сто",
    "двести",
    "триста",
    "четыреста",
    "пятьсот",
    "шестьсот",
    "семьсот",
    "восемьсот",
    "девятьсот",
];

/// A power-of-1000 band: its size, noun forms and whether the noun is
/// feminine (so its count says "одна"/"две").
struct Band {
    scale: u64,
    forms: PluralForms<'static>,
    feminine: bool,
}

const BANDS: [Band; 3] = [
    Band {
        scale: 1_000_000_000,
        forms: BILLION_FORMS,
        feminine: false,
    },
    Band {
        scale: 1_000_000,
        forms: MILLION_FORMS,
        feminine: false,
    },
    Band {
        scale: 1_000,
        forms: THOUSAND_FORMS,
        feminine: true,
    },
];

/// Spell `n` in words.
///
/// With `feminine_units`, a trailing 1 or 2 agrees with a feminine noun
/// ("одна", "две"). Zero is spelled "ноль".
///
/// ```
/// use lingua_ru::number::spell_number;
///
/// assert_eq!(spell_number(1244, false), "одна тысяча двести сорок четыре");
/// assert_eq!(spell_number(3000, false), "три тысячи");
/// assert_eq!(spell_number(22, true), "двадцать две");
/// ```
pub fn spell_number(n: u64, feminine_units: bool) -> String {
    if n == 0 {
        return ZERO.to_string();
    }
    let mut words = Vec::new();
    push_words(n, feminine_units, &mut words);
    words.join(" ")
}

/// Append the words for `n` (non-zero parts only) to `words`.
///
/// Bands are stripped from the largest down; the count in front of each band
/// noun is spelled recursively.
fn push_words(mut n: u64, feminine_units: bool, words: &mut Vec<&'static str>) {
    for band in &BANDS {
        if n >= band.scale {
            let count = n.div_euclid(band.scale);
            trace!("band {}: {count}", band.forms[0]);
            push_words(count, band.feminine, words);
            words.push(band.forms[PluralForm::of_unsigned(count).index()]);
            n %= band.scale;
        }
    }

    // Below 1000 once the bands are stripped, so the low two bytes hold it.
    let [.., high, low] = n.to_be_bytes();
    push_hundreds(usize::from(u16::from_be_bytes([high, low])), feminine_units, words);
}

/// Append the words for `n` below 1000.
fn push_hundreds(mut n: usize, feminine_units: bool, words: &mut Vec<&'static str>) {
    if n >= 100 {
        words.push(HUNDREDS[n.div_euclid(100) - 1]);
        n %= 100;
    }

    if n >= 20 {
        words.push(TENS[n.div_euclid(10) - 2]);
        n %= 10;
    }

    if n > 0 {
        match FEMININE_UNITS.get(n - 1) {
            Some(word) if feminine_units => words.push(*word),
            _ => words.push(UNITS[n - 1]),
        }
    }
}
