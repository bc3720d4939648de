//! Integration tests for spelling integers.

use lingua_ru::number::spell_number;

#[test]
fn documented_examples() {
    assert_eq!(spell_number(1244, false), "одна тысяча двести сорок четыре");
    assert_eq!(spell_number(244, false), "двести сорок четыре");
    assert_eq!(spell_number(3000, false), "три тысячи");
}

#[test]
fn units_and_teens() {
    assert_eq!(spell_number(1, false), "один");
    assert_eq!(spell_number(2, false), "два");
    assert_eq!(spell_number(10, false), "десять");
    assert_eq!(spell_number(12, false), "двенадцать");
    assert_eq!(spell_number(19, false), "девятнадцать");
}

#[test]
fn tens_and_hundreds() {
    assert_eq!(spell_number(20, false), "двадцать");
    assert_eq!(spell_number(40, false), "сорок");
    assert_eq!(spell_number(99, false), "девяносто девять");
    assert_eq!(spell_number(100, false), "сто");
    assert_eq!(spell_number(105, false), "сто пять");
    assert_eq!(spell_number(117, false), "сто семнадцать");
    assert_eq!(spell_number(900, false), "девятьсот");
}

#[test]
fn zero_is_spelled() {
    assert_eq!(spell_number(0, false), "ноль");
    assert_eq!(spell_number(0, true), "ноль");
}

#[test]
fn feminine_units() {
    assert_eq!(spell_number(1, true), "одна");
    assert_eq!(spell_number(2, true), "две");
    assert_eq!(spell_number(3, true), "три");
    assert_eq!(spell_number(12, true), "двенадцать");
    assert_eq!(spell_number(41, true), "сорок одна");
}

#[test]
fn thousands_are_feminine() {
    assert_eq!(spell_number(1000, false), "одна тысяча");
    assert_eq!(spell_number(2000, false), "две тысячи");
    assert_eq!(spell_number(5000, false), "пять тысяч");
    assert_eq!(spell_number(11_000, false), "одиннацать тысяч");
    assert_eq!(spell_number(21_000, false), "двадцать одна тысяча");
    assert_eq!(spell_number(522_000, false), "пятьсот двадцать две тысячи");
}

#[test]
fn millions_and_billions_are_masculine() {
    assert_eq!(spell_number(1_000_000, false), "один миллион");
    assert_eq!(spell_number(2_000_000, false), "два миллиона");
    assert_eq!(spell_number(5_000_000, false), "пять миллионов");
    assert_eq!(spell_number(1_000_000_000, false), "один миллиард");
    assert_eq!(spell_number(22_000_000_000, false), "двадцать два миллиарда");
}

#[test]
fn empty_bands_are_skipped() {
    assert_eq!(spell_number(1_000_001, false), "один миллион один");
    assert_eq!(
        spell_number(2_070_154_768, false),
        "два миллиарда семьдесят миллионов сто пятьдесят четыре тысячи семьсот шестьдесят восемь"
    );
}

#[test]
fn counts_above_a_thousand_billions_recurse() {
    assert_eq!(
        spell_number(1_500_000_000_000, false),
        "одна тысяча пятьсот миллиардов"
    );
}

#[test]
fn words_are_single_spaced() {
    for n in [1, 20, 101, 1_001, 1_000_020, 3_000_000_300] {
        let words = spell_number(n, false);
        assert!(!words.contains("  "), "{n}: {words:?}");
        assert_eq!(words.trim(), words);
    }
}

#[test]
fn every_value_below_a_thousand_is_spelled() {
    for n in 1..1000 {
        assert!(!spell_number(n, false).is_empty(), "{n}");
        assert!(!spell_number(n, true).is_empty(), "{n}");
    }
    assert_eq!(spell_number(999, false), "девятьсот девяносто девять");
    assert_eq!(spell_number(1_999, true), "одна тысяча девятьсот девяносто девять");
}

#[test]
fn largest_value_is_spelled() {
    let words = spell_number(u64::MAX, false);
    assert!(words.starts_with("восемнадцать миллиардов четыреста сорок шесть миллионов"));
    assert!(words.contains("семьдесят три миллиарда семьсот девять миллионов"));
    assert!(words.ends_with("пятьсот пятьдесят одна тысяча шестьсот пятнадцать"));
}
