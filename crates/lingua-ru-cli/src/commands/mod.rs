//! CLI command implementations.

mod check;
mod gender;
mod inflect;
mod numbers;

pub use check::{run_check, CheckArgs};
pub use gender::{run_gender, GenderArgs};
pub use inflect::{run_inflect, InflectArgs};
pub use numbers::{run_plural, run_price, run_spell, PluralArgs, PriceArgs, SpellArgs};

use lingua_ru::LinguaError;

/// Join positional name words, so both `Кац Саша` and `"Кац Саша"` work.
fn full_name(words: &[String]) -> String {
    words.join(" ")
}

/// Print a library error in the requested format and return the exit code.
fn report_error(error: &LinguaError, json: bool) -> i32 {
    if json {
        let output = serde_json::json!({
            "error": error.to_string()
        });
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_else(|_| error.to_string())
        );
    } else {
        eprintln!("error: {}", error);
    }
    exitcode::DATAERR
}

/// Print `value` as pretty JSON.
fn print_json<T: serde::Serialize>(value: &T) -> miette::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| miette::miette!("JSON serialization failed: {}", e))?;
    println!("{}", json);
    Ok(())
}
