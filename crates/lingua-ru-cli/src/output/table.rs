//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use lingua_ru::fixtures::FixtureOutcome;
use lingua_ru::Case;

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

/// Format a name declined into several cases.
pub fn format_declension_table(forms: &[(Case, String)]) -> Table {
    let mut table = new_table(vec!["#", "Case", "Form"]);
    for (case, form) in forms {
        table.add_row(vec![
            case.index().to_string(),
            case.name().to_string(),
            form.clone(),
        ]);
    }
    table
}

/// Format failed fixture records.
pub fn format_failure_table(failures: &[FixtureOutcome]) -> Table {
    let mut table = new_table(vec!["Line", "Input", "Expected", "Actual"]);
    for failure in failures {
        table.add_row(vec![
            failure.record.line.to_string(),
            failure.record.input.clone(),
            failure.record.expected.clone(),
            failure.actual.clone(),
        ]);
    }
    table
}
