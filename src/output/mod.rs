//! Output mode abstraction for robot and human output.

use serde::Serialize;

use crate::cli::Cli;
use crate::database::Database;
use crate::error::WdbError;
use crate::model::{BusType, DEFAULT_STYLUS_BUTTONS, Device, DeviceClass, Stylus, StylusType};

pub mod human;
pub mod robot;

pub use human::HumanOutput;
pub use robot::RobotOutput;

// === Views ===

/// A stylus id listed by a device, with its catalog name when known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StylusRef {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Everything known about one tablet, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceSummary {
    pub match_key: Option<String>,
    pub vendor: Option<String>,
    pub product: Option<String>,
    pub bus: BusType,
    pub vendor_id: String,
    pub product_id: String,
    pub class: DeviceClass,
    pub width: i32,
    pub height: i32,
    pub num_buttons: i32,
    pub features: Vec<&'static str>,
    pub styli: Vec<StylusRef>,
}

impl DeviceSummary {
    /// Builds the view of `device`, naming its styli from `db`.
    #[must_use]
    pub fn new(device: &Device, db: &Database) -> Self {
        let styli = device
            .supported_styli()
            .iter()
            .map(|&id| StylusRef {
                id: format!("{id:#x}"),
                name: db.stylus(id).and_then(Stylus::name).map(str::to_string),
            })
            .collect();

        Self {
            match_key: device.match_key().map(str::to_string),
            vendor: device.vendor().map(str::to_string),
            product: device.product().map(str::to_string),
            bus: device.bus(),
            vendor_id: format!("{:04x}", device.vendor_id()),
            product_id: format!("{:04x}", device.product_id()),
            class: device.class(),
            width: device.width(),
            height: device.height(),
            num_buttons: device.num_buttons(),
            features: device.features().key_names(),
            styli,
        }
    }
}

/// One stylus, with defaults applied to undefined fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StylusSummary {
    pub id: String,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub stylus_type: StylusType,
    pub is_eraser: bool,
    pub has_eraser: bool,
    pub num_buttons: u32,
}

impl From<&Stylus> for StylusSummary {
    fn from(stylus: &Stylus) -> Self {
        Self {
            id: format!("{:#x}", stylus.id()),
            name: stylus.name().map(str::to_string),
            stylus_type: match stylus.declared_type() {
                StylusType::Unknown => StylusType::General,
                declared => declared,
            },
            is_eraser: stylus.is_eraser(),
            has_eraser: stylus.has_eraser(),
            num_buttons: stylus
                .declared_buttons()
                .unwrap_or(DEFAULT_STYLUS_BUTTONS),
        }
    }
}

/// Where a database came from and how much it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseSummary {
    pub data_dir: String,
    pub devices: usize,
    pub styli: usize,
}

impl From<&Database> for DatabaseSummary {
    fn from(db: &Database) -> Self {
        Self {
            data_dir: db.data_dir().display().to_string(),
            devices: db.device_count(),
            styli: db.stylus_count(),
        }
    }
}

/// Build metadata shown by `wdb version`.
#[derive(Debug, Clone, Serialize)]
pub struct VersionInfo {
    pub version: &'static str,
    pub git_sha: &'static str,
    pub git_dirty: bool,
    pub build_timestamp: &'static str,
    pub rustc_version: &'static str,
    pub target: &'static str,
    pub udev: bool,
}

// === Modes ===

/// JSON formatting options for robot mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RobotFormat {
    /// Pretty-printed JSON (default for --robot).
    Json,
    /// Single-line JSON (--format=json-compact).
    JsonCompact,
}

/// Determines how command output is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// JSON output for scripts.
    Robot(RobotFormat),
    /// Styled terminal output for human users.
    Human,
}

impl OutputMode {
    /// Create OutputMode from CLI arguments.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.use_json() {
            let format = if cli.use_compact_json() {
                RobotFormat::JsonCompact
            } else {
                RobotFormat::Json
            };
            Self::Robot(format)
        } else {
            Self::Human
        }
    }

    /// Returns true if output should be JSON.
    #[must_use]
    pub const fn is_robot(&self) -> bool {
        matches!(self, Self::Robot(_))
    }

    /// Convert into the appropriate Output implementation.
    #[must_use]
    pub fn into_output(self) -> Box<dyn Output> {
        match self {
            Self::Robot(format) => Box::new(RobotOutput::new(format)),
            Self::Human => Box::new(HumanOutput::new()),
        }
    }
}

/// Trait for all output operations.
///
/// Commands call these methods without knowing the output mode.
pub trait Output {
    fn error(&self, error: &WdbError);
    fn warning(&self, message: &str);

    fn device_list(&self, db: &DatabaseSummary, devices: &[DeviceSummary], long: bool);
    fn device_info(&self, device: &DeviceSummary);

    fn stylus_list(&self, styli: &[StylusSummary]);
    fn stylus_info(&self, stylus: &StylusSummary);

    fn version_info(&self, info: &VersionInfo);
}
