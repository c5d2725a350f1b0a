//! calcfx CLI - expression calculator and currency converter shell
//!
//! Thin adapter over the library's pure operations. State (calculator
//! buffer, rate table, converter selections) lives for the session and is
//! never persisted.
//!
//! ## Example Usage
//!
//! ```bash
//! # Evaluate an expression
//! calcfx eval "2+3*4"
//!
//! # Convert an amount at the seeded rates
//! calcfx convert 100 USD INR
//!
//! # List the seeded rates
//! calcfx rates
//!
//! # Interactive session
//! calcfx
//! ```

use anyhow::Result;
use calcfx::prelude::*;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// calcfx: expression calculator and manual-rate currency converter
#[derive(Parser)]
#[command(name = "calcfx")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Expression calculator and manual-rate currency converter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an expression and print the result
    Eval {
        /// Expression (supports √ for square root, ^ for power, N% for N/100)
        expression: String,
    },

    /// Convert an amount between currencies at the seeded rates
    Convert {
        /// Amount to convert
        amount: String,
        /// Source currency code
        from: String,
        /// Target currency code
        to: String,
    },

    /// List the seeded rates (per 1 USD)
    Rates,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Eval { expression }) => {
            let mut calc = Calculator::new();
            calc.push(&expression);
            let display = calc.evaluate();
            if display == ERROR_MARKER {
                println!("{}", display.red());
            } else {
                println!("{}", display);
            }
        }
        Some(Commands::Convert { amount, from, to }) => {
            let table = RateTable::new();
            let mut converter = Converter::new();
            converter.select_source(CurrencyCode::parse(&from)?);
            converter.select_target(CurrencyCode::parse(&to)?);
            match converter.convert(&table, &amount) {
                Ok(conversion) => println!("{}", conversion),
                Err(err) => println!("{}", err.to_string().red()),
            }
        }
        Some(Commands::Rates) => print_rates(&RateTable::new()),
        None => run_session()?,
    }

    Ok(())
}

/// Interactive session: expressions evaluate in place, `:` commands drive
/// the converter
fn run_session() -> Result<()> {
    let mut calc = Calculator::new();
    let mut table = RateTable::new();
    let mut converter = Converter::new();

    println!(
        "{}",
        "calcfx - type an expression, or :help for converter commands".bold()
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(command) = line.strip_prefix(':') {
            if !run_command(command, &mut table, &mut converter) {
                break;
            }
        } else {
            calc.clear();
            calc.push(line);
            let display = calc.evaluate();
            if display == ERROR_MARKER {
                println!("{}", display.red());
            } else {
                println!("{}", display);
            }
        }
    }

    Ok(())
}

/// Execute one `:` command; returns false when the session should end
fn run_command(command: &str, table: &mut RateTable, converter: &mut Converter) -> bool {
    let parts: Vec<&str> = command.split_whitespace().collect();
    match parts.as_slice() {
        ["quit"] | ["q"] => return false,
        ["rates"] => print_rates(table),
        ["swap"] => {
            converter.swap();
            println!("{} -> {}", converter.source(), converter.target());
        }
        ["convert", amount] => match converter.convert(table, amount) {
            Ok(conversion) => println!("{}", conversion),
            Err(err) => println!("{}", err.to_string().red()),
        },
        ["convert", amount, from, to] => {
            match select(converter, from, to).and_then(|_| converter.convert(table, amount)) {
                Ok(conversion) => println!("{}", conversion),
                Err(err) => println!("{}", err.to_string().red()),
            }
        }
        ["rate", code, rate] => match edit_rate(table, code, rate) {
            Ok(update) => println!("{}", update.to_string().green()),
            Err(err) => println!("{}", err.to_string().red()),
        },
        ["help"] => print_help(),
        _ => println!("{}", "unknown command; try :help".red()),
    }
    true
}

fn select(converter: &mut Converter, from: &str, to: &str) -> ValidationResult<()> {
    converter.select_source(CurrencyCode::parse(from)?);
    converter.select_target(CurrencyCode::parse(to)?);
    Ok(())
}

fn print_rates(table: &RateTable) {
    println!("{}", format!("Rates (per 1 {})", BASE_CURRENCY).bold());
    for (code, rate) in table.entries() {
        println!("  {:<5} {}", code, rate);
    }
}

fn print_help() {
    println!("  <expression>            evaluate (√, ^, % notations supported)");
    println!("  :convert AMT            convert with current selections");
    println!("  :convert AMT FROM TO    select currencies and convert");
    println!("  :swap                   exchange source and target");
    println!("  :rate CODE RATE         add or overwrite a rate (per 1 USD)");
    println!("  :rates                  list known rates");
    println!("  :quit                   exit");
}
