//! List operation

use std::path::Path;

use crate::error::Result;
use crate::filters::Filters;
use crate::walker::{self, WalkReport};

use super::check;

/// Collect the descriptors of every module a walk of `root` would visit.
///
/// Without `host_release` the pack is gated against its own declared
/// release, so only the structure and the engine version are checked.
pub fn list(root: &Path, filters: &Filters, host_release: Option<&str>) -> Result<WalkReport> {
    let filters = filters.clone().return_descriptors(true);
    let release = match host_release {
        Some(release) => release.to_string(),
        None => check(root, filters.needs_meta_sidecar)?.elgg_version,
    };
    walker::walk(root, &filters, &release, None)
}
