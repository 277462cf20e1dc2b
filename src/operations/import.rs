//! Import operation: zip language pack into an Elgg install

use std::path::Path;

use crate::archive;
use crate::deltree::deltree;
use crate::error::{ElggLpError, Result};
use crate::filters::Filters;
use crate::temp::{STAGING_PREFIX, staging_dir};

use super::{SyncReport, sync};

/// Import the zip language pack at `archive_path` into the Elgg install at
/// `install_root`.
///
/// The pack must carry sidecar metadata and target `host_release`.
pub fn import(
    archive_path: &Path,
    install_root: &Path,
    filters: &Filters,
    host_release: &str,
) -> Result<SyncReport> {
    if !archive_path.is_file() {
        return Err(ElggLpError::FileNotFound {
            path: archive_path.display().to_string(),
        });
    }
    let filters = filters
        .clone()
        .needs_meta_sidecar(true)
        .needs_manifest(false);

    let staging = staging_dir(STAGING_PREFIX)?;
    tracing::debug!(staging = %staging.display(), "import staging directory");
    let result = archive::extract(archive_path, &staging)
        .and_then(|_| sync(&staging, install_root, &filters, host_release));
    if let Err(e) = deltree(&staging) {
        tracing::warn!(staging = %staging.display(), error = %e, "could not remove staging directory");
    }

    let report = result?;
    tracing::info!(
        archive = %archive_path.display(),
        modules = report.walk.visited().len(),
        files = report.copied_count(),
        "language pack imported"
    );
    Ok(report)
}
