//! Implementations of the `lingua plural`, `lingua spell` and `lingua price`
//! commands.

use lingua_ru::number::{spell_number, Amount, PriceSpeller};
use lingua_ru::{Lingua, LinguaError};
use serde::Serialize;

use super::{print_json, report_error};

/// Arguments for the plural command.
#[derive(Debug, clap::Args)]
pub struct PluralArgs {
    /// The number to agree with
    #[arg(allow_negative_numbers = true)]
    pub n: i64,

    /// Noun forms for one, few and many (comma-separated), e.g. рубль,рубля,рублей
    #[arg(long, required = true, value_delimiter = ',')]
    pub forms: Vec<String>,

    /// Prefix the result with the number
    #[arg(long)]
    pub with_number: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the spell command.
#[derive(Debug, clap::Args)]
pub struct SpellArgs {
    /// Non-negative integer to spell
    pub number: String,

    /// Use feminine forms of one and two (одна, две)
    #[arg(long)]
    pub feminine: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the price command.
#[derive(Debug, clap::Args)]
pub struct PriceArgs {
    /// Amount in rubles, e.g. 12.44
    pub amount: String,

    /// Spell the kopecks in words instead of two digits
    #[arg(long)]
    pub spell_kopecks: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for number commands.
#[derive(Serialize)]
struct NumberResult<'a> {
    input: &'a str,
    result: String,
}

fn emit(input: &str, result: String, json: bool) -> miette::Result<i32> {
    if json {
        print_json(&NumberResult { input, result })?;
    } else {
        println!("{}", result);
    }
    Ok(exitcode::OK)
}

/// Run the plural command.
pub fn run_plural(args: PluralArgs) -> miette::Result<i32> {
    let [one, few, many] = args.forms.as_slice() else {
        let error = LinguaError::InvalidNumber {
            input: args.forms.join(","),
            reason: format!("expected 3 noun forms, got {}", args.forms.len()),
        };
        return Ok(report_error(&error, args.json));
    };
    let forms = [one.as_str(), few.as_str(), many.as_str()];
    let result = Lingua::new().num_plural(&forms, args.n, args.with_number);
    emit(&args.n.to_string(), result, args.json)
}

/// Run the spell command.
pub fn run_spell(args: SpellArgs) -> miette::Result<i32> {
    let spelled = Amount::parse(&args.number)
        .and_then(|amount| amount.require_integral())
        .map(|n| spell_number(n, args.feminine));
    match spelled {
        Ok(result) => emit(&args.number, result, args.json),
        Err(e) => Ok(report_error(&e, args.json)),
    }
}

/// Run the price command.
pub fn run_price(args: PriceArgs) -> miette::Result<i32> {
    log::debug!("spelling price {:?}", args.amount);
    match PriceSpeller::rubles(args.spell_kopecks).spell(args.amount.as_str()) {
        Ok(result) => emit(&args.amount, result, args.json),
        Err(e) => Ok(report_error(&e, args.json)),
    }
}
