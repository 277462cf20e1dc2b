//! Language pack layout, version constants and pack-level status
//!
//! This module is organized into:
//! - [`structure`]: validating a pack root and resolving its versions
//! - [`meta`]: reading and writing the JSON sidecar files

pub mod meta;
pub mod structure;

pub use meta::{PackMeta, write_module_meta, write_pack_meta};
pub use structure::{PackVersions, StructureError, is_valid_pack, read_release, validate};

/// Version of the language pack format produced and accepted by this engine
pub const ENGINE_VERSION: &str = "1.0.0";

/// Directory holding locale files, relative to a module root
pub const LANGUAGES_DIR: &str = "languages";

/// Directory of the install pseudo-module, relative to the pack root
pub const INSTALL_DIR: &str = "install";

/// Directory holding plugin modules, relative to the pack root
pub const MOD_DIR: &str = "mod";

/// Pack-level sidecar, relative to the pack root
pub const PACK_META_FILE: &str = "languagepack.meta";

/// Module-level sidecar, relative to the module's `languages/` directory
pub const MODULE_META_FILE: &str = "languagemod.meta";

/// Plugin manifest, relative to the module root
pub const MANIFEST_FILE: &str = "manifest.xml";

/// Release declaration of an Elgg installation, relative to its root
pub const VERSION_FILE: &str = "version.php";

/// Extension of locale files
pub const LOCALE_EXT: &str = "php";

/// Terminal status of a walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportStatus {
    Ok,
    StructureError,
    VersionMismatch,
}

impl ImportStatus {
    /// Numeric code understood by existing host integrations
    pub fn code(self) -> i32 {
        match self {
            ImportStatus::Ok => -1,
            ImportStatus::StructureError => 1,
            ImportStatus::VersionMismatch => 2,
        }
    }
}

impl std::fmt::Display for ImportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ImportStatus::Ok => "ok",
            ImportStatus::StructureError => "structure error",
            ImportStatus::VersionMismatch => "version mismatch",
        };
        f.write_str(s)
    }
}
