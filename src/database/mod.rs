//! The tablet database: device and stylus tables loaded from a data directory.
//!
//! Loading never fails. Unreadable descriptor files are skipped, a missing
//! directory or stylus catalog just leaves the matching table empty. After
//! [`Database::load`] the database is read-only.
//!
//! # Example
//!
//! ```rust,no_run
//! use wdb::database::Database;
//!
//! let db = Database::load_from("/usr/share/libwacom");
//! let tablet = db.resolve_by_usb_id(0x056a, 0x00b9)?;
//! println!("{:?} has {} buttons", tablet.product(), tablet.num_buttons());
//! # Ok::<(), wdb::error::WdbError>(())
//! ```

mod resolve;
pub mod scanner;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, trace, warn};

use crate::config::{Compat, LoadOptions};
use crate::model::{Device, Stylus};
use crate::parser::{parse_stylus_catalog, parse_tablet_descriptor};

pub use resolve::DeviceIdentity;
pub use scanner::{ScanError, TABLET_SUFFIX, scan_descriptor_dir};

/// Device and stylus tables.
///
/// Devices are keyed by match key and styli by id. Both tables iterate in
/// ascending key order, which is also the order [`Database::resolve_by_name`]
/// searches in.
#[derive(Debug, Clone)]
pub struct Database {
    data_dir: PathBuf,
    compat: Compat,
    devices: BTreeMap<String, Device>,
    styli: BTreeMap<u32, Stylus>,
}

impl Database {
    fn empty(options: &LoadOptions) -> Self {
        Self {
            data_dir: options.data_dir.clone(),
            compat: options.compat,
            devices: BTreeMap::new(),
            styli: BTreeMap::new(),
        }
    }

    /// Loads every `*.tablet` file and the stylus catalog from the data directory.
    #[instrument(skip_all, fields(data_dir = %options.data_dir.display()))]
    pub fn load(options: &LoadOptions) -> Self {
        let mut db = Self::empty(options);

        match scan_descriptor_dir(&options.data_dir) {
            Ok(files) => {
                for path in files {
                    if let Some(device) = parse_tablet_descriptor(&path, &options.compat) {
                        db.insert_device(device, &path);
                    }
                }
            }
            Err(e) => debug!(error = %e, "No tablet descriptors loaded"),
        }

        let stylus_path = options.stylus_path();
        match parse_stylus_catalog(&stylus_path) {
            Ok(styli) => {
                for stylus in styli {
                    db.insert_stylus(stylus);
                }
            }
            Err(e) => warn!(
                path = %stylus_path.display(),
                error = %e,
                "Failed to load stylus catalog"
            ),
        }

        info!(
            devices = db.devices.len(),
            styli = db.styli.len(),
            "Tablet database loaded"
        );
        db
    }

    /// Loads from `dir` with the default catalog name and quirks.
    pub fn load_from(dir: impl Into<PathBuf>) -> Self {
        Self::load(&LoadOptions::new(dir))
    }

    fn insert_device(&mut self, device: Device, path: &Path) {
        let Some(key) = device.match_key.clone() else {
            trace!(path = %path.display(), "Device has no match key, not stored");
            return;
        };

        if self.devices.contains_key(&key) && self.compat.warn_duplicate_devices {
            warn!(
                match_key = %key,
                path = %path.display(),
                "Duplicate device match key - using later file"
            );
        }
        self.devices.insert(key, device);
    }

    fn insert_stylus(&mut self, stylus: Stylus) {
        if self.styli.contains_key(&stylus.id) {
            warn!("Duplicate definition for stylus ID '{:#x}'", stylus.id);
        }
        self.styli.insert(stylus.id, stylus);
    }

    /// Directory this database was loaded from.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Quirk switches the database was loaded with.
    pub const fn compat(&self) -> &Compat {
        &self.compat
    }

    /// All devices, in ascending match-key order.
    pub fn devices(&self) -> impl Iterator<Item = &Device> {
        self.devices.values()
    }

    /// All styli, in ascending id order.
    pub fn styli(&self) -> impl Iterator<Item = &Stylus> {
        self.styli.values()
    }

    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    pub fn stylus_count(&self) -> usize {
        self.styli.len()
    }

    /// True if neither table has any entry.
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty() && self.styli.is_empty()
    }
}
