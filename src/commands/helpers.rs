//! Command helper utilities

use std::path::Path;

use console::Style;

use crate::cli::FilterArgs;
use elgglp::config::Settings;
use elgglp::copier::FileOutcome;
use elgglp::error::{ElggLpError, Result};
use elgglp::filters::Filters;
use elgglp::operations::SyncReport;
use elgglp::walker::WalkReport;

/// Load settings from the explicit config file or from the current directory
pub fn load_settings(config: Option<&Path>) -> Result<Settings> {
    let cwd = std::env::current_dir().map_err(|e| ElggLpError::IoError {
        message: format!("Failed to get current directory: {e}"),
    })?;
    Settings::load(config, &cwd)
}

/// Merge command-line filter flags over configuration defaults.
///
/// Non-empty lists on the command line replace the configured ones.
pub fn build_filters(args: &FilterArgs, settings: &Settings) -> Filters {
    let projects = if args.projects.is_empty() {
        &settings.projects
    } else {
        &args.projects
    };
    let locales = if args.locales.is_empty() {
        &settings.locales
    } else {
        &args.locales
    };
    Filters::new()
        .with_projects(projects.iter().cloned())
        .with_locales(locales.iter().cloned())
        .overwrite(args.overwrite || settings.overwrite)
        .skip_english(args.skip_english || settings.skip_english)
}

/// Explicit host release from the command line, else from configuration
pub fn release_override<'a>(flag: Option<&'a str>, settings: &'a Settings) -> Option<&'a str> {
    flag.or(settings.elgg_version.as_deref())
}

/// Print skipped modules and swallowed visitor errors
pub fn print_walk_details(report: &WalkReport, verbose: bool) {
    let dim = Style::new().dim();
    if verbose {
        for (slug, reason) in report.skipped() {
            println!("  {} {} ({})", dim.apply_to("skipped"), slug, reason);
        }
    }
    for (slug, error) in report.visit_errors() {
        println!(
            "  {} {}: {}",
            Style::new().yellow().bold().apply_to("warning"),
            slug,
            error
        );
    }
}

/// Print what a copying operation did
pub fn print_sync_report(report: &SyncReport, verbose: bool) {
    let bold = Style::new().bold();
    for copy in &report.copies {
        let copied = copy.copied().len();
        if copied == 0 && !verbose {
            continue;
        }
        println!(
            "  {} {} file(s)",
            Style::new().bold().yellow().apply_to(&copy.module),
            copied
        );
        for (file, outcome) in &copy.files {
            match outcome {
                FileOutcome::Copied if verbose => println!("    {file}"),
                FileOutcome::Failed(reason) => println!(
                    "    {} {file}: {reason}",
                    Style::new().red().apply_to("failed")
                ),
                FileOutcome::Copied => {}
                other if verbose => println!("    {file} ({other:?})"),
                _ => {}
            }
        }
    }
    print_walk_details(&report.walk, verbose);
    println!(
        "{} {} file(s) from {} module(s)",
        bold.apply_to("Copied"),
        report.copied_count(),
        report.walk.visited().len()
    );
}
