//! Language pack tree walker
//!
//! The walk:
//! 1. Validates the pack structure and resolves its versions
//! 2. Gates on exact version equality with the host and the engine
//! 3. Visits core, install and every usable module under `mod/`
//!
//! Steps 1 and 2 are fatal. Everything after is best-effort: a module that
//! cannot be resolved, or whose visitor fails, is recorded in the report and
//! the walk continues.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ElggLpError, Result};
use crate::filters::Filters;
use crate::module::{self, CORE_SLUG, INSTALL_SLUG, MetadataSource, ModuleDescriptor, ResolveFailure};
use crate::pack::{self, ENGINE_VERSION, INSTALL_DIR, ImportStatus, MOD_DIR, PackVersions};
use crate::path_utils::{is_hidden_name, strip_trailing_separators};

/// Callback run for every module the walker discovers
pub trait ModuleVisitor {
    fn visit(
        &mut self,
        descriptor: &ModuleDescriptor,
        source_dir: &Path,
        filters: &Filters,
    ) -> Result<()>;
}

impl<F> ModuleVisitor for F
where
    F: FnMut(&ModuleDescriptor, &Path, &Filters) -> Result<()>,
{
    fn visit(
        &mut self,
        descriptor: &ModuleDescriptor,
        source_dir: &Path,
        filters: &Filters,
    ) -> Result<()> {
        self(descriptor, source_dir, filters)
    }
}

/// Why a `mod/` entry was not visited
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Excluded by the project filter
    FilteredOut,
    /// Neither sidecar nor manifest present
    NoMetadata,
    /// `needs_meta_sidecar` set but no sidecar present
    MissingRequiredSidecar,
    /// `needs_manifest` set but no manifest present
    MissingRequiredManifest,
    /// Every present source was rejected
    Unresolvable(ResolveFailure),
    /// Directory name is not valid UTF-8, so it cannot be a slug
    UndecodableName,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::FilteredOut => f.write_str("filtered out"),
            SkipReason::NoMetadata => f.write_str("no languagemod.meta or manifest.xml"),
            SkipReason::MissingRequiredSidecar => f.write_str("required languagemod.meta missing"),
            SkipReason::MissingRequiredManifest => f.write_str("required manifest.xml missing"),
            SkipReason::Unresolvable(failure) => write!(f, "unresolvable metadata ({failure})"),
            SkipReason::UndecodableName => f.write_str("directory name is not valid UTF-8"),
        }
    }
}

/// What happened to one module during a walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleOutcome {
    Visited {
        descriptor: ModuleDescriptor,
        source_dir: PathBuf,
        /// Error returned by the visitor, swallowed by the walk
        visit_error: Option<String>,
    },
    Skipped {
        slug: String,
        reason: SkipReason,
    },
}

impl ModuleOutcome {
    pub fn slug(&self) -> &str {
        match self {
            ModuleOutcome::Visited { descriptor, .. } => &descriptor.unique,
            ModuleOutcome::Skipped { slug, .. } => slug,
        }
    }
}

/// Result of a walk that passed validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkReport {
    /// One entry per core/install/mod module considered, in walk order
    pub outcomes: Vec<ModuleOutcome>,
    /// Visited descriptors, only when `return_descriptors` was set
    pub descriptors: Option<Vec<ModuleDescriptor>>,
}

impl WalkReport {
    pub fn status(&self) -> ImportStatus {
        ImportStatus::Ok
    }

    /// Slugs of every visited module, in walk order
    pub fn visited(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ModuleOutcome::Visited { .. }))
            .map(ModuleOutcome::slug)
            .collect()
    }

    /// Skipped modules with their reasons
    pub fn skipped(&self) -> Vec<(&str, &SkipReason)> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                ModuleOutcome::Skipped { slug, reason } => Some((slug.as_str(), reason)),
                ModuleOutcome::Visited { .. } => None,
            })
            .collect()
    }

    /// Visited modules whose visitor returned an error
    pub fn visit_errors(&self) -> Vec<(&str, &str)> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                ModuleOutcome::Visited {
                    descriptor,
                    visit_error: Some(e),
                    ..
                } => Some((descriptor.unique.as_str(), e.as_str())),
                _ => None,
            })
            .collect()
    }
}

/// Validate a pack and check it targets this host and engine
pub fn check_pack(src_root: &Path, filters: &Filters, host_release: &str) -> Result<PackVersions> {
    let versions = pack::validate(src_root, filters.needs_meta_sidecar).map_err(|e| {
        ElggLpError::StructureInvalid {
            path: src_root.display().to_string(),
            reason: e.to_string(),
        }
    })?;

    if versions.elgg_version != host_release || versions.pack_version != ENGINE_VERSION {
        return Err(ElggLpError::VersionMismatch {
            expected_elgg: host_release.to_string(),
            found_elgg: versions.elgg_version,
            expected_pack: ENGINE_VERSION.to_string(),
            found_pack: versions.pack_version,
        });
    }
    Ok(versions)
}

struct Walk<'a> {
    filters: Filters,
    visitor: Option<&'a mut dyn ModuleVisitor>,
    report: WalkReport,
}

impl Walk<'_> {
    fn visit(&mut self, descriptor: ModuleDescriptor, source_dir: PathBuf) {
        tracing::debug!(module = %descriptor.unique, source = %source_dir.display(), "visiting module");
        let visit_error = self.visitor.as_mut().and_then(|visitor| {
            visitor
                .visit(&descriptor, &source_dir, &self.filters)
                .err()
                .map(|e| {
                    tracing::warn!(module = %descriptor.unique, error = %e, "module visitor failed");
                    e.to_string()
                })
        });
        if let Some(descriptors) = self.report.descriptors.as_mut() {
            descriptors.push(descriptor.clone());
        }
        self.report.outcomes.push(ModuleOutcome::Visited {
            descriptor,
            source_dir,
            visit_error,
        });
    }

    fn skip(&mut self, slug: String, reason: SkipReason) {
        tracing::debug!(module = %slug, %reason, "skipping module");
        self.report
            .outcomes
            .push(ModuleOutcome::Skipped { slug, reason });
    }

    fn walk_mod_entry(&mut self, module_dir: PathBuf, slug: String) {
        if !self.filters.includes_project(&slug) {
            self.skip(slug, SkipReason::FilteredOut);
            return;
        }

        let has_sidecar = MetadataSource::Sidecar.is_present(&module_dir);
        let has_manifest = MetadataSource::Manifest.is_present(&module_dir);
        if !has_sidecar && !has_manifest {
            self.skip(slug, SkipReason::NoMetadata);
            return;
        }
        if self.filters.needs_meta_sidecar && !has_sidecar {
            self.skip(slug, SkipReason::MissingRequiredSidecar);
            return;
        }
        if self.filters.needs_manifest && !has_manifest {
            self.skip(slug, SkipReason::MissingRequiredManifest);
            return;
        }

        match module::resolve(&module_dir) {
            Ok(descriptor) => self.visit(descriptor, module_dir),
            Err(failure) => self.skip(slug, SkipReason::Unresolvable(failure)),
        }
    }
}

/// Walk a language pack, visiting each module.
///
/// `host_release` is the Elgg release of the running host; the pack must
/// declare exactly that release and [`ENGINE_VERSION`]. Pass `None` as the
/// visitor to only collect outcomes and descriptors.
///
/// Entries under `mod/` are visited in filesystem enumeration order.
pub fn walk(
    src_root: &Path,
    filters: &Filters,
    host_release: &str,
    visitor: Option<&mut dyn ModuleVisitor>,
) -> Result<WalkReport> {
    let src_root = strip_trailing_separators(src_root);
    let filters = filters.normalized();

    check_pack(&src_root, &filters, host_release)?;
    tracing::info!(pack = %src_root.display(), release = host_release, "walking language pack");

    let mut walk = Walk {
        report: WalkReport {
            outcomes: Vec::new(),
            descriptors: filters.return_descriptors.then(Vec::new),
        },
        filters,
        visitor,
    };

    if walk.filters.includes_project(CORE_SLUG) {
        walk.visit(ModuleDescriptor::core(host_release), src_root.clone());
    }
    if walk.filters.includes_project(INSTALL_SLUG) {
        walk.visit(ModuleDescriptor::install(host_release), src_root.join(INSTALL_DIR));
    }

    let mod_dir = src_root.join(MOD_DIR);
    let entries = fs::read_dir(&mod_dir).map_err(|e| ElggLpError::FileReadFailed {
        path: mod_dir.display().to_string(),
        reason: e.to_string(),
    })?;
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name();
        let path = entry.path();
        if is_hidden_name(&name) || !path.is_dir() {
            continue;
        }
        match name.to_str() {
            Some(slug) => walk.walk_mod_entry(path, slug.to_string()),
            None => walk.skip(name.to_string_lossy().into_owned(), SkipReason::UndecodableName),
        }
    }

    let report = walk.report;
    tracing::info!(
        visited = report.visited().len(),
        skipped = report.skipped().len(),
        "walk finished"
    );
    Ok(report)
}
