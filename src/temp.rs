//! Staging directories for export and import.
//!
//! Staging dirs are never created under the current working directory
//! (e.g. when TMPDIR=tmp or TMPDIR=./tmp).

use std::env;
use std::path::PathBuf;

use crate::error::{ElggLpError, Result};

/// Prefix used for every staging directory name
pub const STAGING_PREFIX: &str = "elgglp";

/// Returns a directory path suitable for creating temporary directories.
/// Never returns a relative path.
pub fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        #[cfg(windows)]
        {
            env::var("TEMP")
                .or_else(|_| env::var("TMP"))
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
        }
        #[cfg(not(windows))]
        {
            PathBuf::from("/tmp")
        }
    }
}

/// Create a uniquely named directory under [`temp_dir_base`].
///
/// The directory is not removed automatically; the caller cleans it up
/// with [`crate::deltree::deltree`].
pub fn staging_dir(prefix: &str) -> Result<PathBuf> {
    let base = temp_dir_base();
    let dir = tempfile::Builder::new()
        .prefix(prefix)
        .tempdir_in(&base)
        .map_err(|e| ElggLpError::FileWriteFailed {
            path: base.display().to_string(),
            reason: e.to_string(),
        })?;
    Ok(dir.keep())
}
