//! Integration tests for noun agreement after numerals.

use icu_locale_core::locale;
use icu_plurals::{PluralCategory, PluralRuleType, PluralRules};
use lingua_ru::number::{PluralForm, plural};

const HOURS: [&str; 3] = ["час", "часа", "часов"];

#[test]
fn hours_with_and_without_number() {
    assert_eq!(plural(&HOURS, 21, true), "21 час");
    assert_eq!(plural(&HOURS, 22, false), "часа");
    assert_eq!(plural(&HOURS, 26, false), "часов");
}

#[test]
fn teens_take_the_many_form() {
    for n in 10..=20 {
        assert_eq!(plural(&HOURS, n, false), "часов", "n = {n}");
    }
    assert_eq!(plural(&HOURS, 111, false), "часов");
    assert_eq!(plural(&HOURS, 112, false), "часов");
}

#[test]
fn last_digit_decides_above_the_teens() {
    assert_eq!(plural(&HOURS, 101, false), "час");
    assert_eq!(plural(&HOURS, 1_000_001, false), "час");
    assert_eq!(plural(&HOURS, 34, false), "часа");
    assert_eq!(plural(&HOURS, 0, true), "0 часов");
}

#[test]
fn negative_numbers_use_their_magnitude() {
    assert_eq!(plural(&HOURS, -1, true), "-1 час");
    assert_eq!(plural(&HOURS, -23, false), "часа");
}

/// The agreement rule is the CLDR Russian cardinal rule for integers.
#[test]
fn agrees_with_cldr_for_integers() {
    let rules = PluralRules::try_new(locale!("ru").into(), PluralRuleType::Cardinal.into())
        .expect("ru plural rules");
    for n in 0..=2_000_i64 {
        let expected = match rules.category_for(n) {
            PluralCategory::One => PluralForm::One,
            PluralCategory::Few => PluralForm::Few,
            _ => PluralForm::Many,
        };
        assert_eq!(PluralForm::of(n), expected, "n = {n}");
    }
}
