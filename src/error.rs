//! Error types and handling for elgglp
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Only pack-level failures (structure, version) and outer I/O failures are
//! represented here. Per-module and per-file problems are non-fatal and are
//! reported as outcomes by the walker and the copier instead.

use miette::Diagnostic;
use thiserror::Error;

use crate::pack::ImportStatus;

/// Main error type for elgglp operations
#[derive(Error, Diagnostic, Debug)]
pub enum ElggLpError {
    // Pack errors
    #[error("Not a valid language pack: {path}: {reason}")]
    #[diagnostic(
        code(elgglp::pack::structure),
        help("A pack needs languages/, install/languages/ and mod/ plus languagepack.meta (or version.php for an Elgg install)")
    )]
    StructureInvalid { path: String, reason: String },

    #[error(
        "Version mismatch: pack is for Elgg {found_elgg} (pack format {found_pack}), expected Elgg {expected_elgg} (pack format {expected_pack})"
    )]
    #[diagnostic(
        code(elgglp::pack::version_mismatch),
        help("Language packs are pinned to one Elgg release; use a pack built for this installation")
    )]
    VersionMismatch {
        expected_elgg: String,
        found_elgg: String,
        expected_pack: String,
        found_pack: String,
    },

    #[error("Could not determine the Elgg release for: {path}")]
    #[diagnostic(
        code(elgglp::pack::host_version_unknown),
        help("Point at an Elgg installation with a version.php, or pass --elgg-version")
    )]
    HostVersionUnknown { path: String },

    #[error("No destination directory configured")]
    #[diagnostic(code(elgglp::copy::no_destination))]
    NoDestination,

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(elgglp::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(elgglp::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // Archive errors
    #[error("Failed to create archive: {path}: {reason}")]
    #[diagnostic(
        code(elgglp::archive::create_failed),
        help("Check that the parent directory exists and is writable")
    )]
    ArchiveCreateFailed { path: String, reason: String },

    #[error("Archive operation failed: {message}")]
    #[diagnostic(code(elgglp::archive::failed))]
    ArchiveFailed { message: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(elgglp::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(elgglp::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(elgglp::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(elgglp::fs::io_error))]
    IoError { message: String },
}

impl ElggLpError {
    /// The walk status this error corresponds to, if it is a pack-level failure
    pub fn import_status(&self) -> Option<ImportStatus> {
        match self {
            ElggLpError::StructureInvalid { .. } => Some(ImportStatus::StructureError),
            ElggLpError::VersionMismatch { .. } => Some(ImportStatus::VersionMismatch),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ElggLpError {
    fn from(err: std::io::Error) -> Self {
        ElggLpError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ElggLpError {
    fn from(err: serde_yaml::Error) -> Self {
        ElggLpError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ElggLpError {
    fn from(err: serde_json::Error) -> Self {
        ElggLpError::IoError {
            message: format!("JSON error: {err}"),
        }
    }
}

impl From<zip::result::ZipError> for ElggLpError {
    fn from(err: zip::result::ZipError) -> Self {
        ElggLpError::ArchiveFailed {
            message: err.to_string(),
        }
    }
}

impl From<walkdir::Error> for ElggLpError {
    fn from(err: walkdir::Error) -> Self {
        ElggLpError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ElggLpError>;
