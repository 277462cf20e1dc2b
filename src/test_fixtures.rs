//! Test fixtures for building Elgg installs and language packs on disk.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_install, create_pack};
//!
//! #[test]
//! fn my_test() {
//!     // Elgg install declaring $release = '1.8.16'
//!     let (temp, install) = create_install("1.8.16");
//!
//!     // Language pack with a languagepack.meta sidecar
//!     let (temp, pack) = create_pack("1.8.16");
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(crate::temp::temp_dir_base()).expect("Failed to create temp directory")
}

fn create_layout(root: &Path) {
    for dir in ["languages", "install/languages", "mod"] {
        fs::create_dir_all(root.join(dir)).expect("Failed to create pack directory");
    }
}

/// Create an Elgg install root with a `version.php` and the three
/// language directories.
#[must_use]
pub fn create_install(release: &str) -> (TempDir, PathBuf) {
    let temp = create_temp_dir();
    let root = temp.path().join("elgg");
    create_layout(&root);
    fs::write(
        root.join("version.php"),
        format!("<?php\n// Elgg version\n$version = 2013031500;\n$release = '{release}';\n"),
    )
    .expect("Failed to write version.php");
    (temp, root)
}

/// Create a language pack root with a `languagepack.meta` sidecar.
#[must_use]
pub fn create_pack(release: &str) -> (TempDir, PathBuf) {
    let temp = create_temp_dir();
    let root = temp.path().join("pack");
    create_layout(&root);
    fs::write(
        root.join("languagepack.meta"),
        format!(r#"{{"elgg_version":"{release}","languagepack_version":"1.0.0"}}"#),
    )
    .expect("Failed to write languagepack.meta");
    (temp, root)
}

/// Write a locale file into `module_dir/languages`.
pub fn write_locale(module_dir: &Path, file_name: &str, content: &str) {
    let languages = module_dir.join("languages");
    fs::create_dir_all(&languages).expect("Failed to create languages directory");
    fs::write(languages.join(file_name), content).expect("Failed to write locale file");
}

/// Add `mod/<slug>` with a `manifest.xml` and an empty `languages/`.
pub fn add_manifest_module(root: &Path, slug: &str, name: &str) -> PathBuf {
    let dir = root.join("mod").join(slug);
    fs::create_dir_all(dir.join("languages")).expect("Failed to create module directory");
    fs::write(
        dir.join("manifest.xml"),
        format!(
            "<?xml version=\"1.0\"?>\n<plugin_manifest>\n  <name>{name}</name>\n  \
             <version>1.0</version>\n  <description>{name} plugin</description>\n</plugin_manifest>\n"
        ),
    )
    .expect("Failed to write manifest.xml");
    dir
}

/// Add `mod/<slug>` with a `languagemod.meta` sidecar naming `unique`.
pub fn add_sidecar_module(root: &Path, slug: &str, unique: &str) -> PathBuf {
    let dir = root.join("mod").join(slug);
    let languages = dir.join("languages");
    fs::create_dir_all(&languages).expect("Failed to create module directory");
    fs::write(
        languages.join("languagemod.meta"),
        format!(r#"{{"unique":"{unique}","name":"{unique}","description":"","version":"1.0"}}"#),
    )
    .expect("Failed to write languagemod.meta");
    dir
}
