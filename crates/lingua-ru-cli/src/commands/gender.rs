//! Implementation of the `lingua gender` command.

use lingua_ru::{Gender, Lingua};
use serde::Serialize;

use super::{full_name, print_json};

/// Arguments for the gender command.
#[derive(Debug, clap::Args)]
pub struct GenderArgs {
    /// Full name: surname, given name, patronymic
    #[arg(required = true)]
    pub name: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for gender results.
#[derive(Serialize)]
struct GenderResult {
    name: String,
    gender: Gender,
}

/// Run the gender command.
pub fn run_gender(args: GenderArgs) -> miette::Result<i32> {
    let name = full_name(&args.name);
    let gender = Lingua::new().name_gender(&name);
    log::info!("{} -> {}", name, gender);

    if args.json {
        print_json(&GenderResult { name, gender })?;
    } else {
        println!("{}", gender);
    }
    Ok(exitcode::OK)
}
