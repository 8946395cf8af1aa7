//! Directory scanning for tablet descriptor files.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, instrument, trace};

/// File name suffix of tablet descriptors.
pub const TABLET_SUFFIX: &str = ".tablet";

/// Errors that can occur during directory scanning.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The specified directory does not exist.
    #[error("directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    /// The specified path is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Failed to read the directory.
    #[error("failed to read directory {0}: {1}")]
    ReadError(PathBuf, #[source] io::Error),

    /// Failed to read a directory entry.
    #[error("failed to read directory entry: {0}")]
    EntryError(#[source] io::Error),
}

/// Returns true for names of descriptor files the database loads.
///
/// Hidden files are ignored, and the name must be longer than the suffix so
/// a bare `.tablet` never matches.
pub fn is_descriptor_name(name: &str) -> bool {
    !name.starts_with('.') && name.len() > TABLET_SUFFIX.len() && name.ends_with(TABLET_SUFFIX)
}

/// Lists the descriptor files in `dir`, sorted by file name.
///
/// The order is the load order: when two files share a match key, the one
/// sorting later wins.
#[instrument(skip_all, fields(dir = %dir.display()))]
pub fn scan_descriptor_dir(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !dir.exists() {
        return Err(ScanError::DirectoryNotFound(dir.to_path_buf()));
    }

    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let dir_entries =
        std::fs::read_dir(dir).map_err(|e| ScanError::ReadError(dir.to_path_buf(), e))?;

    let mut entries: Vec<_> = dir_entries
        .collect::<Result<Vec<_>, io::Error>>()
        .map_err(ScanError::EntryError)?;

    entries.sort_by_key(std::fs::DirEntry::file_name);

    let mut files = Vec::new();
    for entry in entries {
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            trace!(name = ?entry.file_name(), "Skipping non UTF-8 file name");
            continue;
        };

        if !is_descriptor_name(name) {
            trace!(name, "Skipping non-descriptor entry");
            continue;
        }

        files.push(entry.path());
    }

    debug!(matched = files.len(), "Directory scan complete");
    Ok(files)
}
