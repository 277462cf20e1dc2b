//! elgglp - Elgg language pack tool
//!
//! Command line front end for validating, listing, synchronizing, exporting
//! and importing Elgg language packs.

use clap::Parser;
use miette::Diagnostic;

mod cli;
mod commands;

use cli::{Cli, Commands};
use elgglp::error::ElggLpError;

fn report_error(e: &ElggLpError) {
    eprintln!("Error: {e}");
    if let Some(status) = e.import_status() {
        eprintln!("  status: {status} ({})", status.code());
    }
    if let Some(help) = e.help() {
        eprintln!("  help: {help}");
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = elgglp::logging::init(cli.verbose) {
        eprintln!("Warning: could not initialize logging: {e}");
    }

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Check(args) => commands::check::run(args),
        Commands::List(args) => commands::list::run(config, cli.verbose, args),
        Commands::Sync(args) => commands::sync::run(config, cli.verbose, args),
        Commands::Export(args) => commands::export::run(config, cli.verbose, args),
        Commands::Import(args) => commands::import::run(config, cli.verbose, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        report_error(&e);
        std::process::exit(1);
    }
}
