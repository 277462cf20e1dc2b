//! Cross-platform path utilities for elgglp
//!
//! This module provides utilities for handling paths across different platforms
//! (Windows, macOS, Linux) with consistent behavior.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Convert a path to a string with forward slashes.
///
/// Archive entry names are always stored this way regardless of host convention.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use elgglp::path_utils::to_forward_slashes;
///
/// assert_eq!(to_forward_slashes(Path::new("mod\\blog\\languages")), "mod/blog/languages");
/// ```
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Strip trailing path separators, keeping a bare root intact.
///
/// The path is rebuilt from its components without decoding it, so repeated
/// separators and interior `.` segments are dropped as well.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use elgglp::path_utils::strip_trailing_separators;
///
/// assert_eq!(strip_trailing_separators(Path::new("/srv/pack///")), PathBuf::from("/srv/pack"));
/// assert_eq!(strip_trailing_separators(Path::new("/")), PathBuf::from("/"));
/// assert_eq!(strip_trailing_separators(Path::new("/srv//./pack")), PathBuf::from("/srv/pack"));
/// ```
pub fn strip_trailing_separators(path: &Path) -> PathBuf {
    path.components().collect()
}

/// Whether a file name is hidden (starts with `.`)
pub fn is_hidden_name(name: &OsStr) -> bool {
    name.as_encoded_bytes().starts_with(b".")
}

/// Base name of a path, if it has one and it is valid UTF-8
pub fn base_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(OsStr::to_str)
}
