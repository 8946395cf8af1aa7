//! Path resolution for the tablet data directory.
//!
//! Supports absolute paths, paths relative to the config file, and "~" home
//! directory expansion.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{Result, WdbError};

/// Resolve a data directory named in a config file.
///
/// Resolution rules:
/// 1. Paths starting with `~`: expanded to home directory
/// 2. Absolute paths: used as-is
/// 3. Relative paths: resolved relative to the config file's directory
pub fn resolve_data_dir(path: &Path, config_dir: &Path) -> Result<PathBuf> {
    trace!(
        path = %path.display(),
        config_dir = %config_dir.display(),
        "Resolving data directory"
    );

    let path_str = path.to_string_lossy();

    if path_str == "~" || path_str.starts_with("~/") {
        let home = home_dir()?;
        let rest = path_str.strip_prefix("~/").unwrap_or("");
        let resolved = if rest.is_empty() { home } else { home.join(rest) };
        debug!(
            original = %path.display(),
            resolved = %resolved.display(),
            "Expanded home directory path"
        );
        return Ok(resolved);
    }

    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    let resolved = config_dir.join(path);
    debug!(
        original = %path.display(),
        resolved = %resolved.display(),
        "Resolved relative data directory"
    );
    Ok(resolved)
}

/// Resolve the user's home directory (cross-platform).
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .ok_or_else(|| WdbError::Other("Could not determine home directory".to_string()))
}

/// Check that `dir` exists and is a directory.
///
/// Loading itself tolerates a missing directory (the database is just
/// empty); this check is for front ends that want to report it.
pub fn validate_data_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return Err(WdbError::InvalidDb {
            message: format!("data directory {} does not exist", dir.display()),
        });
    }
    if !dir.is_dir() {
        return Err(WdbError::InvalidDb {
            message: format!("{} is not a directory", dir.display()),
        });
    }
    Ok(())
}
