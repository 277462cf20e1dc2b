//! `languages/languagemod.meta` reader

use std::fs;
use std::path::Path;

use super::{MetadataError, MetadataSource, ModuleDescriptor};
use crate::pack::MODULE_META_FILE;
use crate::path_utils::base_name;

/// Read the sidecar descriptor of a module.
///
/// The record's `unique` must match the module directory name, so metadata
/// copied from another module is rejected.
pub fn read(module_dir: &Path) -> std::result::Result<ModuleDescriptor, MetadataError> {
    let path = MetadataSource::Sidecar.file_path(module_dir);
    if !path.exists() {
        return Err(MetadataError::NotFound(MODULE_META_FILE.to_string()));
    }
    let invalid = |reason: String| MetadataError::Invalid {
        file: MODULE_META_FILE.to_string(),
        reason,
    };
    let content = fs::read_to_string(&path).map_err(|e| invalid(e.to_string()))?;
    let descriptor: ModuleDescriptor =
        serde_json::from_str(&content).map_err(|e| invalid(e.to_string()))?;

    let slug = base_name(module_dir).ok_or(MetadataError::UndecodableName)?;
    if descriptor.unique != slug {
        return Err(MetadataError::SlugMismatch {
            expected: slug.to_string(),
            found: descriptor.unique,
        });
    }
    Ok(descriptor)
}
