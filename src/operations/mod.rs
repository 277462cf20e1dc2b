//! High-level language pack operations
//!
//! Each operation drives one [`walk`](crate::walker::walk):
//! - [`check`]: validation only
//! - [`list`]: collect descriptors without visiting
//! - [`sync`]: directory to directory copy
//! - [`export`]: Elgg install to zip pack
//! - [`import`]: zip pack to Elgg install

pub mod check;
pub mod export;
pub mod import;
pub mod list;
pub mod sync;

pub use check::check;
pub use export::export;
pub use import::import;
pub use list::list;
pub use sync::sync;

use std::path::Path;

use crate::copier::CopyReport;
use crate::error::{ElggLpError, Result};
use crate::pack::{VERSION_FILE, read_release};
use crate::walker::WalkReport;

/// Result of an operation that copied locale files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub walk: WalkReport,
    pub copies: Vec<CopyReport>,
}

impl SyncReport {
    pub fn copied_count(&self) -> usize {
        self.copies.iter().map(|r| r.copied().len()).sum()
    }

    pub fn failed_count(&self) -> usize {
        self.copies.iter().map(|r| r.failed().len()).sum()
    }
}

/// Release of the host Elgg install.
///
/// An explicit `release` wins. Otherwise the first candidate root holding a
/// readable `version.php` decides.
pub fn host_release(release: Option<&str>, candidates: &[&Path]) -> Result<String> {
    if let Some(release) = release {
        return Ok(release.to_string());
    }
    for root in candidates {
        let version_file = root.join(VERSION_FILE);
        if !version_file.is_file() {
            continue;
        }
        match read_release(&version_file) {
            Ok(release) => return Ok(release),
            Err(e) => {
                tracing::debug!(file = %version_file.display(), error = %e, "no release found");
            }
        }
    }
    Err(ElggLpError::HostVersionUnknown {
        path: candidates
            .first()
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
    })
}
