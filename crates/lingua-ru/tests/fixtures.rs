//! Integration tests for fixture files, including the bundled name data.

use std::io::Write;
use std::path::{Path, PathBuf};

use lingua_ru::Case;
use lingua_ru::fixtures::{
    FixtureError, FixtureKind, FixtureOutcome, FixtureRecord, load_fixtures, parse_fixtures,
    run_fixtures,
};
use tempfile::NamedTempFile;

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn assert_all_pass(name: &str, kind: FixtureKind) {
    let records = load_fixtures(&fixture_path(name)).unwrap();
    assert!(!records.is_empty(), "{name} has no records");
    let failures: Vec<String> = run_fixtures(&records, kind)
        .into_iter()
        .filter(|outcome| !outcome.passed())
        .map(|outcome| {
            format!(
                "line {}: {} => {} (expected {})",
                outcome.record.line, outcome.record.input, outcome.actual, outcome.record.expected
            )
        })
        .collect();
    assert!(failures.is_empty(), "{name}:\n{}", failures.join("\n"));
}

// =============================================================================
// Bundled Data
// =============================================================================

#[test]
fn genitive_names() {
    assert_all_pass("case.csv", FixtureKind::Inflect(Case::Genitive));
}

#[test]
fn male_names() {
    assert_all_pass("m_gender.csv", FixtureKind::Gender);
}

#[test]
fn female_names() {
    assert_all_pass("f_gender.csv", FixtureKind::Gender);
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn parse_skips_blank_lines_and_comments() {
    let records = parse_fixtures("\n# comment\n  Иванов Иван ; Иванова Ивана \n\n").unwrap();
    assert_eq!(
        records,
        vec![FixtureRecord {
            line: 3,
            input: "Иванов Иван".to_string(),
            expected: "Иванова Ивана".to_string(),
        }]
    );
}

#[test]
fn missing_separator_reports_end_of_line() {
    let err = parse_fixtures("Иванов;Иванова\nПетров\n").unwrap_err();
    match err {
        FixtureError::Syntax { line, column, .. } => {
            assert_eq!(line, 2);
            assert_eq!(column, 7);
        }
        FixtureError::Io { .. } => panic!("unexpected I/O error"),
    }
}

#[test]
fn second_separator_is_rejected() {
    let err = parse_fixtures("Иванов;Иванова;лишнее\n").unwrap_err();
    assert_eq!(err.to_string(), "1:15: unexpected second ';'");
}

#[test]
fn empty_input_column_is_rejected() {
    let err = parse_fixtures(";Иванова\n").unwrap_err();
    assert_eq!(err.to_string(), "1:1: empty input column");
}

#[test]
fn load_reports_missing_file() {
    let err = load_fixtures(Path::new("does/not/exist.csv")).unwrap_err();
    assert!(matches!(err, FixtureError::Io { .. }));
}

// =============================================================================
// Running
// =============================================================================

#[test]
fn failures_carry_the_actual_value() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Петров Пётр Петрович;Петрова Петра Петровича").unwrap();
    writeln!(file, "Петров Пётр Петрович;Петрова Пётра Петровича").unwrap();
    writeln!(file, "Петров Пётр Петрович Младший;Петрова").unwrap();

    let records = load_fixtures(file.path()).unwrap();
    let outcomes = run_fixtures(&records, FixtureKind::Inflect(Case::Genitive));
    assert!(outcomes[0].passed());
    assert!(!outcomes[1].passed());
    assert_eq!(outcomes[1].actual, "Петрова Петра Петровича");
    assert!(outcomes[2].actual.starts_with("error: "));
}

#[test]
fn gender_outcomes() {
    let records = parse_fixtures("Ли Лу;unknown\nКац Саша Ивановна;female\n").unwrap();
    let outcomes = run_fixtures(&records, FixtureKind::Gender);
    assert!(outcomes.iter().all(FixtureOutcome::passed));
}
