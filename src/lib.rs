//! elgglp - Elgg language pack engine
//!
//! Validates language pack trees, walks their modules, copies locale files
//! between trees and packs them into zip archives.
//!
//! ```no_run
//! use std::path::Path;
//! use elgglp::filters::Filters;
//!
//! let filters = Filters::new().needs_meta_sidecar(true).with_locales(["fr"]);
//! let report = elgglp::operations::sync(
//!     Path::new("./pack"),
//!     Path::new("/var/www/elgg"),
//!     &filters,
//!     "1.8.16",
//! )?;
//! println!("{} files copied", report.copied_count());
//! # Ok::<(), elgglp::error::ElggLpError>(())
//! ```

pub mod archive;
pub mod config;
pub mod copier;
pub mod deltree;
pub mod error;
pub mod filters;
pub mod logging;
pub mod module;
pub mod operations;
pub mod pack;
pub mod path_utils;
pub mod temp;
pub mod walker;

#[cfg(test)]
mod test_fixtures;

pub use error::{ElggLpError, Result};
pub use filters::Filters;
pub use module::ModuleDescriptor;
pub use pack::ImportStatus;
pub use walker::{ModuleVisitor, WalkReport, walk};
