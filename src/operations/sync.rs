//! Sync operation

use std::path::Path;

use crate::copier::FileCopier;
use crate::error::Result;
use crate::filters::Filters;
use crate::walker;

use super::SyncReport;

/// Copy the locale files of the pack at `src` into the tree at `dest`.
pub fn sync(src: &Path, dest: &Path, filters: &Filters, host_release: &str) -> Result<SyncReport> {
    let filters = filters.clone().with_dest_root(dest);
    let mut copier = FileCopier::new();
    let walk = walker::walk(src, &filters, host_release, Some(&mut copier))?;

    tracing::info!(
        src = %src.display(),
        dest = %dest.display(),
        copied = copier.copied_count(),
        "sync finished"
    );
    Ok(SyncReport {
        walk,
        copies: copier.reports,
    })
}
