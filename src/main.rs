//! Tally CLI - a TODO tracker backed by a single JSON file.

use clap::Parser;
use std::process;
use tally::cli::{Cli, Commands};
use tally::commands::{self, Output};
use tally::models::ListFilter;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(e) = run_command(cli) {
        if json {
            eprintln!(r#"{{"error": "{}"}}"#, e);
        } else {
            eprintln!("Error: {}", e);
        }
        process::exit(1);
    }
}

fn run_command(cli: Cli) -> Result<(), tally::Error> {
    let file = cli.file;
    let json = cli.json;

    match cli.command {
        Commands::Add { task } => {
            let result = commands::add(&file, &task)?;
            output(&result, json);
        }

        Commands::List { all, done } => {
            let result = commands::list(&file, ListFilter::from_flags(all, done))?;
            output(&result, json);
        }

        Commands::Done { id } => {
            let result = commands::set_done(&file, id, true)?;
            output(&result, json);
        }

        Commands::Undone { id } => {
            let result = commands::set_done(&file, id, false)?;
            output(&result, json);
        }

        Commands::Delete { id } => {
            let result = commands::delete(&file, id)?;
            output(&result, json);
        }
    }

    Ok(())
}

/// Print output in JSON or human-readable format.
fn output<T: Output>(result: &T, json: bool) {
    if json {
        println!("{}", result.to_json());
    } else {
        println!("{}", result.to_human());
    }
}
