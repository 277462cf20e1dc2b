//! Zip archives of language pack trees
//!
//! Hidden entries (names starting with `.`) are never archived, and hidden
//! directories are not descended into. Entry names are relative to the
//! archived directory and always use `/`.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use walkdir::{DirEntry, WalkDir};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::error::{ElggLpError, Result};
use crate::path_utils::{is_hidden_name, to_forward_slashes};

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && is_hidden_name(entry.file_name())
}

fn read_error(path: &Path, e: impl std::fmt::Display) -> ElggLpError {
    ElggLpError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Archive a directory tree, or a single file, into `destination`.
///
/// A directory is walked parents-first in file name order. A single file is
/// stored under its base name. An existing `destination` is replaced, and a
/// partially written one is removed on failure.
pub fn archive(source: &Path, destination: &Path) -> Result<()> {
    let source = dunce::canonicalize(source).map_err(|e| read_error(source, e))?;

    let file = File::create(destination).map_err(|e| ElggLpError::ArchiveCreateFailed {
        path: destination.display().to_string(),
        reason: e.to_string(),
    })?;

    let result = write_archive(&source, destination, file);
    if result.is_err() {
        if let Err(e) = fs::remove_file(destination) {
            tracing::debug!(archive = %destination.display(), error = %e, "could not remove partial archive");
        }
    }
    result
}

fn write_archive(source: &Path, destination: &Path, file: File) -> Result<()> {
    // the archive may live inside the tree being archived
    let destination = dunce::canonicalize(destination).ok();

    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    if source.is_dir() {
        let walker = WalkDir::new(source)
            .min_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_hidden(e));

        for entry in walker {
            let entry = entry?;
            let path = entry.path();
            if destination.as_deref() == Some(path) {
                continue;
            }
            let relative = path
                .strip_prefix(source)
                .map_err(|e| read_error(path, e))?;
            let name = to_forward_slashes(relative);

            if entry.file_type().is_dir() {
                zip.add_directory(name, options)?;
            } else if entry.file_type().is_file() {
                let bytes = fs::read(path).map_err(|e| read_error(path, e))?;
                zip.start_file(name, options)?;
                zip.write_all(&bytes)?;
            }
        }
    } else if source.is_file() {
        let bytes = fs::read(source).map_err(|e| read_error(source, e))?;
        let name = source.file_name().map(Path::new).map(to_forward_slashes).unwrap_or_default();
        zip.start_file(name, options)?;
        zip.write_all(&bytes)?;
    }

    zip.finish()?;
    Ok(())
}

/// Extract every safely named entry of `archive_file` into `dest_dir`.
///
/// Returns the number of files written. Entries whose names would escape
/// `dest_dir` are skipped.
pub fn extract(archive_file: &Path, dest_dir: &Path) -> Result<usize> {
    let file = File::open(archive_file).map_err(|e| read_error(archive_file, e))?;
    let mut zip = ZipArchive::new(file)?;
    fs::create_dir_all(dest_dir)?;

    let mut written = 0;
    for index in 0..zip.len() {
        let mut entry = zip.by_index(index)?;
        let Some(relative) = entry.enclosed_name().map(|p| p.to_path_buf()) else {
            tracing::warn!(entry = entry.name(), "skipping archive entry with unsafe name");
            continue;
        };
        let target = dest_dir.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&target)?;
            continue;
        }
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = File::create(&target).map_err(|e| ElggLpError::FileWriteFailed {
            path: target.display().to_string(),
            reason: e.to_string(),
        })?;
        io::copy(&mut entry, &mut out)?;
        written += 1;
    }

    tracing::debug!(archive = %archive_file.display(), files = written, "archive extracted");
    Ok(written)
}
