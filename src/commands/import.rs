//! Import command implementation

use std::path::Path;

use console::Style;

use crate::cli::ImportArgs;
use crate::commands::helpers::{build_filters, load_settings, print_sync_report, release_override};
use elgglp::error::Result;
use elgglp::operations::{self, host_release};

/// Run import command
pub fn run(config: Option<&Path>, verbose: bool, args: ImportArgs) -> Result<()> {
    let settings = load_settings(config)?;
    let filters = build_filters(&args.filters, &settings);
    let release = host_release(
        release_override(args.filters.elgg_version.as_deref(), &settings),
        &[args.install_root.as_path()],
    )?;

    let report = operations::import(&args.archive, &args.install_root, &filters, &release)?;
    print_sync_report(&report, verbose);
    println!(
        "{} {} into {}",
        Style::new().green().bold().apply_to("Imported"),
        args.archive.display(),
        args.install_root.display()
    );
    Ok(())
}
