//! JSON sidecar files
//!
//! - `languagepack.meta` at the pack root records which Elgg release and
//!   pack format a pack was built for.
//! - `languages/languagemod.meta` inside a module records its descriptor.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{LANGUAGES_DIR, MODULE_META_FILE, PACK_META_FILE};
use crate::error::{ElggLpError, Result};
use crate::module::ModuleDescriptor;

/// Contents of `languagepack.meta`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackMeta {
    pub elgg_version: String,
    pub languagepack_version: String,
}

impl PackMeta {
    pub fn new(elgg_version: impl Into<String>, languagepack_version: impl Into<String>) -> Self {
        Self {
            elgg_version: elgg_version.into(),
            languagepack_version: languagepack_version.into(),
        }
    }

    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn write_json(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| ElggLpError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Write `dir/languagepack.meta`
pub fn write_pack_meta(meta: &PackMeta, dir: &Path) -> Result<()> {
    write_json(&dir.join(PACK_META_FILE), &meta.to_json()?)
}

/// Write `dir/languages/languagemod.meta`
///
/// The `languages/` directory must already exist.
pub fn write_module_meta(descriptor: &ModuleDescriptor, dir: &Path) -> Result<()> {
    let contents = serde_json::to_string(descriptor)?;
    write_json(&dir.join(LANGUAGES_DIR).join(MODULE_META_FILE), &contents)
}
