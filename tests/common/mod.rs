//! Common test utilities for elgglp integration tests

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A language pack or Elgg install tree on disk
#[allow(dead_code)]
pub struct TestTree {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the tree root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestTree {
    fn with_layout() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("root");
        for dir in ["languages", "install/languages", "mod"] {
            std::fs::create_dir_all(path.join(dir)).expect("Failed to create directory");
        }
        Self { temp, path }
    }

    /// Create a pack declaring `elgg_version` and `languagepack_version`
    pub fn pack(elgg_version: &str, pack_version: &str) -> Self {
        let tree = Self::with_layout();
        tree.write_file(
            "languagepack.meta",
            &format!(
                r#"{{"elgg_version":"{elgg_version}","languagepack_version":"{pack_version}"}}"#
            ),
        );
        tree
    }

    /// Create an Elgg install declaring `release` in version.php
    pub fn install(release: &str) -> Self {
        let tree = Self::with_layout();
        tree.write_file(
            "version.php",
            &format!("<?php\n/* release info */\n$version = 2013031500;\n$release = '{release}';\n"),
        );
        tree
    }

    /// Add `mod/<slug>` with a languagemod.meta naming `unique`
    pub fn sidecar_module(&self, slug: &str, unique: &str) {
        self.write_file(
            &format!("mod/{slug}/languages/languagemod.meta"),
            &format!(r#"{{"unique":"{unique}","name":"{unique} plugin","version":"1.2"}}"#),
        );
    }

    /// Add `mod/<slug>` with a manifest.xml and an empty languages/
    pub fn manifest_module(&self, slug: &str, name: &str) {
        self.write_file(
            &format!("mod/{slug}/manifest.xml"),
            &format!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<plugin_manifest xmlns=\"http://www.elgg.org/plugin_manifest/1.8\">\n\
                 \t<name>{name}</name>\n\t<version>1.8</version>\n\t<description>{name} &amp; more</description>\n</plugin_manifest>\n"
            ),
        );
        std::fs::create_dir_all(self.path.join(format!("mod/{slug}/languages")))
            .expect("Failed to create languages directory");
    }

    /// Write a file in the tree
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the tree
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the tree
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// A path next to the tree, inside the same temp directory
    pub fn sibling(&self, name: &str) -> PathBuf {
        self.temp.path().join(name)
    }

    pub fn root(&self) -> &Path {
        &self.path
    }
}
