//! Recursive removal of directory trees

use std::fs;
use std::path::Path;

use crate::error::{ElggLpError, Result};

/// Completely and recursively delete `path`.
///
/// Returns `Ok(false)` if nothing exists at `path`. Files and symbolic links
/// are removed without following them. In a directory, failures on
/// individual children are logged and the final directory removal decides
/// the result.
pub fn deltree(path: &Path) -> Result<bool> {
    let Ok(metadata) = fs::symlink_metadata(path) else {
        return Ok(false);
    };

    let remove_failed = |e: std::io::Error| ElggLpError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    };

    if !metadata.is_dir() {
        fs::remove_file(path).map_err(remove_failed)?;
        return Ok(true);
    }

    for entry in fs::read_dir(path).map_err(remove_failed)? {
        let child = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                tracing::debug!(dir = %path.display(), error = %e, "unreadable directory entry");
                continue;
            }
        };
        if let Err(e) = deltree(&child) {
            tracing::debug!(path = %child.display(), error = %e, "could not delete");
        }
    }

    fs::remove_dir(path).map_err(remove_failed)?;
    Ok(true)
}
