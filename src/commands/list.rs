//! List command implementation
//!
//! Prints every module a walk would visit, with its name and version.

use std::path::Path;

use console::Style;

use crate::cli::ListArgs;
use crate::commands::helpers::{load_settings, print_walk_details, release_override};
use elgglp::error::Result;
use elgglp::filters::Filters;
use elgglp::operations;

/// Run list command
pub fn run(config: Option<&Path>, verbose: bool, args: ListArgs) -> Result<()> {
    let settings = load_settings(config)?;
    let release = release_override(args.elgg_version.as_deref(), &settings);
    let filters = Filters::new()
        .needs_meta_sidecar(!args.install)
        .with_projects(settings.projects.iter().cloned());

    let report = operations::list(&args.root, &filters, release)?;
    let descriptors = report.descriptors.as_deref().unwrap_or_default();

    println!("Modules ({}):", descriptors.len());
    println!();
    for descriptor in descriptors {
        println!(
            "  {} {}",
            Style::new().bold().yellow().apply_to(&descriptor.unique),
            Style::new().dim().apply_to(&descriptor.version)
        );
        if !descriptor.name.is_empty() {
            println!("    {} {}", Style::new().bold().apply_to("Name:"), descriptor.name);
        }
        if verbose && !descriptor.description.is_empty() {
            println!(
                "    {} {}",
                Style::new().bold().apply_to("Description:"),
                descriptor.description
            );
        }
    }
    print_walk_details(&report, verbose);
    Ok(())
}
