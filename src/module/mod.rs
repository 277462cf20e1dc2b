//! Module descriptors and the metadata sources they are read from
//!
//! A module's descriptor comes from one of two places:
//! - [`sidecar`]: `languages/languagemod.meta`, written by a previous export
//! - [`manifest`]: the plugin's own `manifest.xml`
//!
//! [`MetadataSource`] selects between them; [`MetadataSource::FALLBACK_ORDER`]
//! is the order the walker tries them in.

pub mod manifest;
pub mod sidecar;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pack::{LANGUAGES_DIR, MANIFEST_FILE, MODULE_META_FILE};

/// Slug of the core pseudo-module
pub const CORE_SLUG: &str = "core";

/// Slug of the install pseudo-module
pub const INSTALL_SLUG: &str = "install";

/// Description of one localizable unit: core, install or a plugin
///
/// Apart from `unique`, fields read from JSON accept numbers, booleans and
/// `null`, converted the way PHP casts them to strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    pub unique: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub version: String,
}

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Number(serde_json::Number),
        Flag(bool),
    }

    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Text(text)) => text,
        Some(Scalar::Number(number)) => number.to_string(),
        Some(Scalar::Flag(true)) => "1".to_string(),
        Some(Scalar::Flag(false)) | None => String::new(),
    })
}

impl ModuleDescriptor {
    pub fn new(
        unique: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            unique: unique.into(),
            name: name.into(),
            description: description.into(),
            version: version.into(),
        }
    }

    /// Descriptor of the core language files
    pub fn core(release: &str) -> Self {
        Self::new(
            CORE_SLUG,
            "Elgg Core",
            "The core elements of the social networking engine",
            release,
        )
    }

    /// Descriptor of the install wizard language files
    pub fn install(release: &str) -> Self {
        Self::new(
            INSTALL_SLUG,
            "Elgg Install",
            "Install wizard for setting up and configuring a new Elgg instance, or upgrading an existing one",
            release,
        )
    }
}

/// Why a metadata source produced no descriptor
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetadataError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("module has no languages/ directory")]
    NoLanguagesDir,

    #[error("metadata is for '{found}', not '{expected}'")]
    SlugMismatch { expected: String, found: String },

    #[error("{file} is not valid: {reason}")]
    Invalid { file: String, reason: String },

    #[error("module directory name is not valid UTF-8")]
    UndecodableName,
}

/// One of the two on-disk descriptor sources of a module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataSource {
    Sidecar,
    Manifest,
}

impl MetadataSource {
    /// Order in which sources are tried when resolving a module
    pub const FALLBACK_ORDER: [MetadataSource; 2] = [MetadataSource::Sidecar, MetadataSource::Manifest];

    /// Path of this source's file inside a module directory
    pub fn file_path(self, module_dir: &Path) -> PathBuf {
        match self {
            MetadataSource::Sidecar => module_dir.join(LANGUAGES_DIR).join(MODULE_META_FILE),
            MetadataSource::Manifest => module_dir.join(MANIFEST_FILE),
        }
    }

    /// Whether this source's file exists in a module directory
    pub fn is_present(self, module_dir: &Path) -> bool {
        self.file_path(module_dir).exists()
    }

    /// Read a descriptor from this source
    pub fn read(self, module_dir: &Path) -> std::result::Result<ModuleDescriptor, MetadataError> {
        match self {
            MetadataSource::Sidecar => sidecar::read(module_dir),
            MetadataSource::Manifest => manifest::read(module_dir),
        }
    }
}

impl std::fmt::Display for MetadataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetadataSource::Sidecar => f.write_str(MODULE_META_FILE),
            MetadataSource::Manifest => f.write_str(MANIFEST_FILE),
        }
    }
}

/// Failures of every source tried during [`resolve`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveFailure {
    pub sidecar: Option<MetadataError>,
    pub manifest: Option<MetadataError>,
}

impl std::fmt::Display for ResolveFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = [
            self.sidecar.as_ref().map(|e| format!("sidecar: {e}")),
            self.manifest.as_ref().map(|e| format!("manifest: {e}")),
        ]
        .into_iter()
        .flatten()
        .collect();
        if parts.is_empty() {
            f.write_str("no metadata source present")
        } else {
            f.write_str(&parts.join("; "))
        }
    }
}

/// Resolve a module's descriptor, trying present sources in fallback order
pub fn resolve(module_dir: &Path) -> std::result::Result<ModuleDescriptor, ResolveFailure> {
    let mut failure = ResolveFailure::default();
    for source in MetadataSource::FALLBACK_ORDER {
        if !source.is_present(module_dir) {
            continue;
        }
        match source.read(module_dir) {
            Ok(descriptor) => return Ok(descriptor),
            Err(e) => {
                tracing::debug!(module = %module_dir.display(), %source, error = %e, "metadata source rejected");
                match source {
                    MetadataSource::Sidecar => failure.sidecar = Some(e),
                    MetadataSource::Manifest => failure.manifest = Some(e),
                }
            }
        }
    }
    Err(failure)
}
