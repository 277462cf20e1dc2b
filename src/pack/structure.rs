//! Language pack structure validation
//!
//! A valid pack has `install/languages/`, `languages/` and `mod/`, plus one
//! version source:
//! - `languagepack.meta` for a pack proper
//! - `version.php` for an Elgg installation
//!
//! `version.php` is never executed. Only a literal `$release = '...';`
//! assignment is recognized.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::meta::PackMeta;
use super::{ENGINE_VERSION, INSTALL_DIR, LANGUAGES_DIR, MOD_DIR, PACK_META_FILE, VERSION_FILE};

#[allow(clippy::unwrap_used)]
static RELEASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\$release\s*=\s*(?:'([^']*)'|"([^"]*)")\s*;"#).unwrap());

/// Versions resolved from a valid pack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackVersions {
    /// Elgg release the pack targets
    pub elgg_version: String,
    /// Pack format version
    pub pack_version: String,
}

/// Why a directory is not a valid pack
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    #[error("missing directory {0}/")]
    MissingDirectory(String),

    #[error("missing {0}")]
    MissingVersionSource(String),

    #[error("unreadable {file}: {reason}")]
    UnreadableVersionSource { file: String, reason: String },

    #[error("no $release declaration in {0}")]
    NoRelease(String),
}

/// Validate a pack root and resolve its versions.
///
/// With `require_sidecar_meta` the versions come from `languagepack.meta`;
/// otherwise the Elgg release comes from `version.php` and the pack version
/// is [`ENGINE_VERSION`].
pub fn validate(
    root: &Path,
    require_sidecar_meta: bool,
) -> std::result::Result<PackVersions, StructureError> {
    let install_languages = Path::new(INSTALL_DIR).join(LANGUAGES_DIR);
    for required in [install_languages.as_path(), Path::new(LANGUAGES_DIR), Path::new(MOD_DIR)] {
        if !root.join(required).is_dir() {
            return Err(StructureError::MissingDirectory(
                crate::path_utils::to_forward_slashes(required),
            ));
        }
    }

    if require_sidecar_meta {
        read_pack_meta(root)
    } else {
        let release = read_release(&root.join(VERSION_FILE))?;
        Ok(PackVersions {
            elgg_version: release,
            pack_version: ENGINE_VERSION.to_string(),
        })
    }
}

/// Boolean view of [`validate`]
pub fn is_valid_pack(root: &Path, require_sidecar_meta: bool) -> bool {
    validate(root, require_sidecar_meta).is_ok()
}

fn read_pack_meta(root: &Path) -> std::result::Result<PackVersions, StructureError> {
    let path = root.join(PACK_META_FILE);
    if !path.is_file() {
        return Err(StructureError::MissingVersionSource(PACK_META_FILE.to_string()));
    }
    let unreadable = |reason: String| StructureError::UnreadableVersionSource {
        file: PACK_META_FILE.to_string(),
        reason,
    };
    let content = fs::read_to_string(&path).map_err(|e| unreadable(e.to_string()))?;
    let meta = PackMeta::from_json(&content).map_err(|e| unreadable(e.to_string()))?;
    Ok(PackVersions {
        elgg_version: meta.elgg_version,
        pack_version: meta.languagepack_version,
    })
}

/// Read the Elgg release declared in a `version.php` file
pub fn read_release(version_file: &Path) -> std::result::Result<String, StructureError> {
    if !version_file.is_file() {
        return Err(StructureError::MissingVersionSource(VERSION_FILE.to_string()));
    }
    let content =
        fs::read_to_string(version_file).map_err(|e| StructureError::UnreadableVersionSource {
            file: VERSION_FILE.to_string(),
            reason: e.to_string(),
        })?;
    parse_release(&content).ok_or_else(|| StructureError::NoRelease(VERSION_FILE.to_string()))
}

/// Extract the first `$release = '...';` assignment outside of comment lines
pub fn parse_release(content: &str) -> Option<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !is_comment_line(line))
        .find_map(|line| {
            let caps = RELEASE_RE.captures(line)?;
            caps.get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str().to_string())
        })
}

fn is_comment_line(line: &str) -> bool {
    line.starts_with("//") || line.starts_with('#') || line.starts_with("/*") || line.starts_with('*')
}
