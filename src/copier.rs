//! Locale file copier
//!
//! Copies the locale files of one module from a source tree into the
//! matching place in a destination tree:
//! - `core` → `<dest>`
//! - `install` → `<dest>/install`
//! - anything else → `<dest>/mod/<unique>`
//!
//! Individual file failures are recorded in the [`CopyReport`] and never
//! abort the module.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ElggLpError, Result};
use crate::filters::Filters;
use crate::module::{CORE_SLUG, INSTALL_SLUG, ModuleDescriptor};
use crate::pack::{INSTALL_DIR, LANGUAGES_DIR, LOCALE_EXT, MOD_DIR, write_module_meta};
use crate::walker::ModuleVisitor;

/// Locale code of English, the source language of every module
pub const ENGLISH: &str = "en";

#[allow(clippy::unwrap_used)]
static LOCALE_FILE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^([A-Za-z]{{2}}(?:_[A-Za-z]{{2}})?)\.{}$",
        regex::escape(LOCALE_EXT)
    ))
    .unwrap()
});

/// Locale code of a locale file name (`fr.php` → `fr`, `pt_br.php` → `pt_br`)
pub fn locale_of(file_name: &str) -> Option<&str> {
    LOCALE_FILE_RE
        .captures(file_name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Destination directory of a module under `dest_root`
pub fn module_dest_dir(descriptor: &ModuleDescriptor, dest_root: &Path) -> PathBuf {
    match descriptor.unique.as_str() {
        CORE_SLUG => dest_root.to_path_buf(),
        INSTALL_SLUG => dest_root.join(INSTALL_DIR),
        slug => dest_root.join(MOD_DIR).join(slug),
    }
}

/// What happened to one locale file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Copied,
    LocaleFiltered,
    EnglishSkipped,
    AlreadyExists,
    Failed(String),
}

/// Per-module copy result
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    pub module: String,
    /// Locale file name and its outcome, in name order
    pub files: Vec<(String, FileOutcome)>,
    /// Whether `languagemod.meta` was written into the destination
    pub wrote_meta: bool,
}

impl CopyReport {
    pub fn copied(&self) -> Vec<&str> {
        self.files_with(|o| *o == FileOutcome::Copied)
    }

    pub fn failed(&self) -> Vec<&str> {
        self.files_with(|o| matches!(o, FileOutcome::Failed(_)))
    }

    fn files_with(&self, pred: impl Fn(&FileOutcome) -> bool) -> Vec<&str> {
        self.files
            .iter()
            .filter(|(_, o)| pred(o))
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// Locale files directly under `dir/languages`, sorted by name
fn locale_files(module_dir: &Path) -> Vec<(String, String, PathBuf)> {
    let languages = module_dir.join(LANGUAGES_DIR);
    let Ok(entries) = fs::read_dir(&languages) else {
        return Vec::new();
    };
    let mut files: Vec<(String, String, PathBuf)> = entries
        .filter_map(std::result::Result::ok)
        .filter_map(|entry| {
            let name = entry.file_name().to_str()?.to_string();
            let locale = locale_of(&name)?.to_string();
            let path = entry.path();
            path.is_file().then_some((name, locale, path))
        })
        .collect();
    files.sort_by(|a, b| a.0.cmp(&b.0));
    files
}

fn copy_one(source: &Path, dest_languages: &Path, file_name: &str) -> FileOutcome {
    if !dest_languages.exists() {
        if let Err(e) = fs::create_dir_all(dest_languages) {
            return FileOutcome::Failed(format!(
                "cannot create {}: {e}",
                dest_languages.display()
            ));
        }
    }
    match fs::copy(source, dest_languages.join(file_name)) {
        Ok(_) => FileOutcome::Copied,
        Err(e) => FileOutcome::Failed(e.to_string()),
    }
}

/// Copy one module's locale files into the destination tree.
///
/// Fails only when `filters.dest_root` is not set.
pub fn copy_module(
    descriptor: &ModuleDescriptor,
    src_module_dir: &Path,
    filters: &Filters,
) -> Result<CopyReport> {
    let dest_root = filters.dest_root.as_deref().ok_or(ElggLpError::NoDestination)?;
    let dest_dir = module_dest_dir(descriptor, dest_root);
    let dest_languages = dest_dir.join(LANGUAGES_DIR);

    let mut report = CopyReport {
        module: descriptor.unique.clone(),
        ..CopyReport::default()
    };

    for (file_name, locale, source) in locale_files(src_module_dir) {
        let outcome = if !filters.includes_locale(&locale) {
            FileOutcome::LocaleFiltered
        } else if filters.skip_english && locale == ENGLISH {
            FileOutcome::EnglishSkipped
        } else if !filters.overwrite && dest_languages.join(&file_name).exists() {
            FileOutcome::AlreadyExists
        } else {
            copy_one(&source, &dest_languages, &file_name)
        };

        match &outcome {
            FileOutcome::Failed(reason) => {
                tracing::warn!(module = %descriptor.unique, file = %file_name, %reason, "locale file copy failed");
            }
            other => {
                tracing::debug!(module = %descriptor.unique, file = %file_name, outcome = ?other, "locale file");
            }
        }
        report.files.push((file_name, outcome));
    }

    if filters.needs_manifest && !report.copied().is_empty() {
        match write_module_meta(descriptor, &dest_dir) {
            Ok(()) => report.wrote_meta = true,
            Err(e) => {
                tracing::warn!(module = %descriptor.unique, error = %e, "could not write module metadata");
            }
        }
    }

    Ok(report)
}

/// [`ModuleVisitor`] that runs [`copy_module`] and keeps every report
#[derive(Debug, Default)]
pub struct FileCopier {
    pub reports: Vec<CopyReport>,
}

impl FileCopier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of files copied across all modules
    pub fn copied_count(&self) -> usize {
        self.reports.iter().map(|r| r.copied().len()).sum()
    }

    pub fn report_for(&self, module: &str) -> Option<&CopyReport> {
        self.reports.iter().find(|r| r.module == module)
    }
}

impl ModuleVisitor for FileCopier {
    fn visit(
        &mut self,
        descriptor: &ModuleDescriptor,
        source_dir: &Path,
        filters: &Filters,
    ) -> Result<()> {
        let report = copy_module(descriptor, source_dir, filters)?;
        self.reports.push(report);
        Ok(())
    }
}
