//! Lingua CLI entry point.
//!
//! Provides command-line access to the lingua-ru library:
//! - `lingua gender` - Infer the gender of a full name
//! - `lingua inflect` - Decline a full name
//! - `lingua plural` - Pick the noun form agreeing with a number
//! - `lingua spell` - Spell an integer in words
//! - `lingua price` - Spell a price in rubles and kopecks
//! - `lingua check` - Run fixture files against the rule tables

mod commands;
mod output;

use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_gender, run_inflect, run_plural, run_price, run_spell, CheckArgs, GenderArgs,
    InflectArgs, PluralArgs, PriceArgs, SpellArgs,
};

/// Russian name declension and number spelling.
#[derive(Debug, Parser)]
#[command(name = "lingua")]
#[command(about = "Russian name declension and number spelling", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Infer the gender of a full name
    Gender(GenderArgs),
    /// Decline a full name into one or all cases
    Inflect(InflectArgs),
    /// Pick the noun form agreeing with a number
    Plural(PluralArgs),
    /// Spell an integer in words
    Spell(SpellArgs),
    /// Spell a price in rubles and kopecks
    Price(PriceArgs),
    /// Check fixture files of expected results
    Check(CheckArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Initialize logging from the verbosity count; `RUST_LOG` takes precedence.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    init_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    log::debug!("arguments: {:?}", cli.command);
    let result = match cli.command {
        Commands::Gender(args) => run_gender(args),
        Commands::Inflect(args) => run_inflect(args),
        Commands::Plural(args) => run_plural(args),
        Commands::Spell(args) => run_spell(args),
        Commands::Price(args) => run_price(args),
        Commands::Check(args) => run_check(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
