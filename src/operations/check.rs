//! Check operation

use std::path::Path;

use crate::error::{ElggLpError, Result};
use crate::pack::{self, PackVersions};
use crate::path_utils::strip_trailing_separators;

/// Validate the structure of `root` and resolve its versions.
///
/// With `require_sidecar` the versions come from `languagepack.meta`,
/// otherwise from the `version.php` of an Elgg install.
pub fn check(root: &Path, require_sidecar: bool) -> Result<PackVersions> {
    let root = strip_trailing_separators(root);
    pack::validate(&root, require_sidecar).map_err(|e| ElggLpError::StructureInvalid {
        path: root.display().to_string(),
        reason: e.to_string(),
    })
}
