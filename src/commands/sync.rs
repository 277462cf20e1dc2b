//! Sync command implementation

use std::path::Path;

use crate::cli::SyncArgs;
use crate::commands::helpers::{build_filters, load_settings, print_sync_report, release_override};
use elgglp::error::Result;
use elgglp::operations::{self, host_release};

/// Run sync command
pub fn run(config: Option<&Path>, verbose: bool, args: SyncArgs) -> Result<()> {
    let settings = load_settings(config)?;
    let filters = build_filters(&args.filters, &settings)
        .needs_meta_sidecar(args.require_sidecar)
        .needs_manifest(args.require_manifest);
    let release = host_release(
        release_override(args.filters.elgg_version.as_deref(), &settings),
        &[args.dest.as_path(), args.src.as_path()],
    )?;

    let report = operations::sync(&args.src, &args.dest, &filters, &release)?;
    print_sync_report(&report, verbose);
    Ok(())
}
