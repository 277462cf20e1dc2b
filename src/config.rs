//! Configuration file support
//!
//! An optional `elgglp.yaml` provides defaults for the command-line flags:
//!
//! ```yaml
//! elgg_version: "1.8.16"
//! locales: [fr, de]
//! projects: []
//! overwrite: false
//! skip_english: true
//! ```
//!
//! Lookup: explicit path (`--config` / `ELGGLP_CONFIG`), then `./elgglp.yaml`,
//! then built-in defaults. Command-line flags always win.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ElggLpError, Result};

/// Config filename looked up in the current directory
pub const CONFIG_FILE: &str = "elgglp.yaml";

/// Defaults loaded from `elgglp.yaml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Elgg release to assume for the host instead of reading `version.php`
    pub elgg_version: Option<String>,
    pub locales: Vec<String>,
    pub projects: Vec<String>,
    pub overwrite: bool,
    pub skip_english: bool,
}

impl Settings {
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load settings from an explicit file, which must exist
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(ElggLpError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        let content = fs::read_to_string(path).map_err(|e| ElggLpError::FileReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        serde_yaml::from_str(&content).map_err(|e| ElggLpError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Load settings from `explicit`, else from `dir/elgglp.yaml`, else defaults
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let implicit: PathBuf = dir.join(CONFIG_FILE);
        if implicit.is_file() {
            tracing::debug!(config = %implicit.display(), "using configuration file");
            return Self::from_file(&implicit);
        }
        Ok(Self::default())
    }
}
