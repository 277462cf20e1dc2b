//! Walk and copy policy
//!
//! A [`Filters`] value is built once and threaded unchanged through a walk
//! and every visitor call it makes.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::path_utils::strip_trailing_separators;

/// Selection and copy options for one walk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    /// Module slugs to process; empty means all
    pub projects: BTreeSet<String>,
    /// Source must carry sidecar metadata (pack proper rather than install)
    pub needs_meta_sidecar: bool,
    /// Modules must carry a manifest; also makes the copier write sidecars
    pub needs_manifest: bool,
    /// Collect visited descriptors into the walk report
    pub return_descriptors: bool,
    /// Root of the destination tree, for copying visitors
    pub dest_root: Option<PathBuf>,
    /// Locale codes to copy; empty means all
    pub locales: BTreeSet<String>,
    /// Replace destination files that already exist
    pub overwrite: bool,
    /// Leave `en` files out
    pub skip_english: bool,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_projects<I, S>(mut self, projects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.projects = projects.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_locales<I, S>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locales = locales.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_dest_root(mut self, dest_root: impl AsRef<Path>) -> Self {
        self.dest_root = Some(dest_root.as_ref().to_path_buf());
        self
    }

    pub fn needs_meta_sidecar(mut self, value: bool) -> Self {
        self.needs_meta_sidecar = value;
        self
    }

    pub fn needs_manifest(mut self, value: bool) -> Self {
        self.needs_manifest = value;
        self
    }

    pub fn return_descriptors(mut self, value: bool) -> Self {
        self.return_descriptors = value;
        self
    }

    pub fn overwrite(mut self, value: bool) -> Self {
        self.overwrite = value;
        self
    }

    pub fn skip_english(mut self, value: bool) -> Self {
        self.skip_english = value;
        self
    }

    /// Whether a module slug passes the project filter
    pub fn includes_project(&self, slug: &str) -> bool {
        self.projects.is_empty() || self.projects.contains(slug)
    }

    /// Whether a locale code passes the locale filter
    pub fn includes_locale(&self, locale: &str) -> bool {
        self.locales.is_empty() || self.locales.contains(locale)
    }

    /// Copy with trailing separators stripped from the destination root
    pub fn normalized(&self) -> Self {
        let mut filters = self.clone();
        filters.dest_root = self
            .dest_root
            .as_deref()
            .map(strip_trailing_separators);
        filters
    }
}
