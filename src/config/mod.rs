//! Configuration for loading the tablet database.
//!
//! [`LoadOptions`] is what [`crate::database::Database::load`] consumes. The
//! CLI builds it through [`Settings::resolve`], which layers, from highest
//! to lowest precedence: the `--datadir` flag, the `WDB_DATADIR` environment
//! variable, the optional TOML config file and the built-in defaults.

mod datadir;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Result, WdbError};

pub use datadir::{home_dir, resolve_data_dir, validate_data_dir};

/// Directory the tablet data files are installed to.
pub const DEFAULT_DATA_DIR: &str = "/usr/share/libwacom";

/// File name of the stylus catalog inside the data directory.
pub const STYLUS_DATA_FILE: &str = "libwacom.stylus";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "WDB_DATADIR";

/// Switches for long-standing quirks of the data format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Compat {
    /// Key serial tablets as `bluetooth:` instead of `serial:`.
    ///
    /// Existing data files and consumers expect this, so it is on by default.
    pub serial_keys_as_bluetooth: bool,
    /// Warn when a later `.tablet` file replaces a device with the same
    /// match key. Stylus duplicates always warn.
    pub warn_duplicate_devices: bool,
}

impl Default for Compat {
    fn default() -> Self {
        Self {
            serial_keys_as_bluetooth: true,
            warn_duplicate_devices: false,
        }
    }
}

/// Where and how to load the database from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Directory scanned for `*.tablet` files.
    pub data_dir: PathBuf,
    /// Stylus catalog file name, relative to `data_dir`.
    pub stylus_file: String,
    pub compat: Compat,
}

impl LoadOptions {
    /// Options for `data_dir` with the default catalog name and quirks.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            stylus_file: STYLUS_DATA_FILE.to_string(),
            compat: Compat::default(),
        }
    }

    #[must_use]
    pub fn with_compat(mut self, compat: Compat) -> Self {
        self.compat = compat;
        self
    }

    #[must_use]
    pub fn with_stylus_file(mut self, name: impl Into<String>) -> Self {
        self.stylus_file = name.into();
        self
    }

    /// Full path of the stylus catalog.
    pub fn stylus_path(&self) -> PathBuf {
        self.data_dir.join(&self.stylus_file)
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

/// Contents of the optional `config.toml`.
///
/// ```toml
/// data_dir = "~/src/libwacom/data"
/// stylus_file = "libwacom.stylus"
/// fallback = true
///
/// [compat]
/// serial_keys_as_bluetooth = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub data_dir: Option<PathBuf>,
    pub stylus_file: Option<String>,
    pub fallback: Option<bool>,
    pub compat: Option<Compat>,
}

impl FileConfig {
    /// Parse config file text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| WdbError::ConfigParse(e.to_string()))
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            WdbError::ConfigParse(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml(&text)
    }
}

/// Default location of the config file (`$XDG_CONFIG_HOME/wdb/config.toml`).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wdb").join("config.toml"))
}

/// Fully resolved settings for one CLI invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub load: LoadOptions,
    /// Fall back to the generic descriptor on path lookups.
    pub fallback: bool,
    /// Config file that was read, if any.
    pub config_path: Option<PathBuf>,
}

impl Settings {
    /// Resolve settings from the command line, environment and config file.
    ///
    /// An explicit `config_path` must exist; the default config file is read
    /// only if present.
    pub fn resolve(data_dir_flag: Option<&Path>, config_path: Option<&Path>) -> Result<Self> {
        let (file, config_path) = match config_path {
            Some(path) => (FileConfig::load(path)?, Some(path.to_path_buf())),
            None => match default_config_path().filter(|p| p.is_file()) {
                Some(path) => (FileConfig::load(&path)?, Some(path)),
                None => (FileConfig::default(), None),
            },
        };
        trace!(?file, ?config_path, "Loaded config file");

        let env_dir = std::env::var_os(DATA_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let data_dir = if let Some(dir) = data_dir_flag {
            dir.to_path_buf()
        } else if let Some(dir) = env_dir {
            dir
        } else if let Some(dir) = &file.data_dir {
            let base = config_path
                .as_deref()
                .and_then(Path::parent)
                .unwrap_or_else(|| Path::new("."));
            resolve_data_dir(dir, base)?
        } else {
            PathBuf::from(DEFAULT_DATA_DIR)
        };

        let mut load = LoadOptions::new(data_dir).with_compat(file.compat.unwrap_or_default());
        if let Some(name) = file.stylus_file {
            load = load.with_stylus_file(name);
        }

        debug!(data_dir = %load.data_dir.display(), "Resolved settings");

        Ok(Self {
            load,
            fallback: file.fallback.unwrap_or(false),
            config_path,
        })
    }
}
