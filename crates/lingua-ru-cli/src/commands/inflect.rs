//! Implementation of the `lingua inflect` command.

use lingua_ru::{Case, Lingua};
use serde::Serialize;

use super::{full_name, print_json, report_error};
use crate::output::table::format_declension_table;

/// Arguments for the inflect command.
#[derive(Debug, clap::Args)]
pub struct InflectArgs {
    /// Full name: surname, given name, patronymic
    #[arg(required = true)]
    pub name: Vec<String>,

    /// Target case: index 0-4, short (gen, dat, acc, ins, prep) or long name.
    /// All cases are printed when omitted.
    #[arg(long, short)]
    pub case: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one declined form.
#[derive(Serialize)]
struct InflectResult {
    case: Case,
    result: String,
}

/// Run the inflect command.
pub fn run_inflect(args: InflectArgs) -> miette::Result<i32> {
    let lingua = Lingua::new();
    let name = full_name(&args.name);

    let cases = match &args.case {
        Some(value) => match value.parse::<Case>() {
            Ok(case) => vec![case],
            Err(e) => return Ok(report_error(&e, args.json)),
        },
        None => Case::ALL.to_vec(),
    };

    let mut results = Vec::with_capacity(cases.len());
    for case in cases {
        match lingua.name_inflect(&name, case) {
            Ok(result) => results.push(InflectResult { case, result }),
            Err(e) => return Ok(report_error(&e, args.json)),
        }
    }

    if args.json {
        print_json(&results)?;
    } else if args.case.is_some() {
        for item in &results {
            println!("{}", item.result);
        }
    } else {
        let rows: Vec<(Case, String)> = results
            .into_iter()
            .map(|item| (item.case, item.result))
            .collect();
        println!("{}", format_declension_table(&rows));
    }
    Ok(exitcode::OK)
}
