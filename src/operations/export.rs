//! Export operation: Elgg install to zip language pack

use std::fs;
use std::path::Path;

use crate::archive;
use crate::deltree::deltree;
use crate::error::Result;
use crate::filters::Filters;
use crate::pack::{ENGINE_VERSION, INSTALL_DIR, LANGUAGES_DIR, MOD_DIR, PackMeta, write_pack_meta};
use crate::temp::{STAGING_PREFIX, staging_dir};

use super::{SyncReport, sync};

fn build_pack(
    install_root: &Path,
    staging: &Path,
    archive_path: &Path,
    filters: &Filters,
    host_release: &str,
) -> Result<SyncReport> {
    for dir in [
        staging.join(LANGUAGES_DIR),
        staging.join(INSTALL_DIR).join(LANGUAGES_DIR),
        staging.join(MOD_DIR),
    ] {
        fs::create_dir_all(dir)?;
    }

    let report = sync(install_root, staging, filters, host_release)?;
    write_pack_meta(&PackMeta::new(host_release, ENGINE_VERSION), staging)?;
    archive::archive(staging, archive_path)?;
    Ok(report)
}

/// Export the locale files of the Elgg install at `install_root` as a zip
/// language pack at `archive_path`.
///
/// Only modules with a `manifest.xml` are exported, each with a generated
/// `languagemod.meta`. The staging directory is removed whatever the outcome.
pub fn export(
    install_root: &Path,
    archive_path: &Path,
    filters: &Filters,
    host_release: &str,
) -> Result<SyncReport> {
    let filters = filters
        .clone()
        .needs_meta_sidecar(false)
        .needs_manifest(true);

    let staging = staging_dir(STAGING_PREFIX)?;
    tracing::debug!(staging = %staging.display(), "export staging directory");
    let result = build_pack(install_root, &staging, archive_path, &filters, host_release);
    if let Err(e) = deltree(&staging) {
        tracing::warn!(staging = %staging.display(), error = %e, "could not remove staging directory");
    }

    let report = result?;
    tracing::info!(
        archive = %archive_path.display(),
        modules = report.walk.visited().len(),
        files = report.copied_count(),
        "language pack exported"
    );
    Ok(report)
}
