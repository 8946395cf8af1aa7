//! Human-friendly terminal output.

use console::style;
use tracing::{debug, instrument};

use crate::error::WdbError;

use super::{DatabaseSummary, DeviceSummary, Output, StylusSummary, VersionInfo};

/// Styled terminal output implementation for human users.
///
/// Colors follow the `console` crate's global setting, so `--no-color` and
/// non-TTY output are handled by disabling colors once at startup.
#[derive(Debug, Default)]
pub struct HumanOutput;

impl HumanOutput {
    pub const fn new() -> Self {
        Self
    }
}

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

/// One-line description of a device, as printed by `wdb list`.
pub fn device_line(device: &DeviceSummary) -> String {
    format!(
        "{}:{} {}",
        device.vendor_id,
        device.product_id,
        or_dash(device.product.as_deref())
    )
}

/// Lines of the detailed device view, unstyled.
pub fn device_lines(device: &DeviceSummary) -> Vec<(&'static str, String)> {
    let styli = if device.styli.is_empty() {
        "-".to_string()
    } else {
        device
            .styli
            .iter()
            .map(|s| match &s.name {
                Some(name) => format!("{} ({name})", s.id),
                None => s.id.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ")
    };
    let features = if device.features.is_empty() {
        "-".to_string()
    } else {
        device.features.join(", ")
    };

    vec![
        ("Product", or_dash(device.product.as_deref()).to_string()),
        ("Vendor", or_dash(device.vendor.as_deref()).to_string()),
        ("Match", or_dash(device.match_key.as_deref()).to_string()),
        ("Bus", device.bus.to_string()),
        ("IDs", format!("{}:{}", device.vendor_id, device.product_id)),
        ("Class", format!("{:?}", device.class)),
        ("Size", format!("{} x {} in", device.width, device.height)),
        ("Buttons", device.num_buttons.to_string()),
        ("Features", features),
        ("Styli", styli),
    ]
}

impl Output for HumanOutput {
    #[instrument(skip(self))]
    fn error(&self, error: &WdbError) {
        debug!(
            error = %error,
            recoverable = error.is_user_recoverable(),
            "Outputting error"
        );
        eprintln!("{}: {}", style("Error").red().bold(), error);
        if let Some(suggestion) = error.suggestion() {
            eprintln!("{}: {}", style("Hint").yellow(), suggestion);
        }
    }

    #[instrument(skip(self))]
    fn warning(&self, message: &str) {
        eprintln!("{} {}", style("[WARN]").yellow().bold(), message);
    }

    #[instrument(skip(self, db, devices), fields(count = devices.len()))]
    fn device_list(&self, db: &DatabaseSummary, devices: &[DeviceSummary], long: bool) {
        if devices.is_empty() {
            println!(
                "{}",
                style(format!("No tablet descriptors in {}", db.data_dir)).yellow()
            );
            println!("Use --datadir or WDB_DATADIR to point at the data files");
            return;
        }

        for device in devices {
            if long {
                println!(
                    "{}  {} ({}, {} buttons)",
                    style(or_dash(device.match_key.as_deref())).green(),
                    or_dash(device.product.as_deref()),
                    device.bus,
                    device.num_buttons
                );
            } else {
                println!("{}", device_line(device));
            }
        }

        if long {
            println!();
            println!(
                "{} tablets, {} styli from {}",
                db.devices,
                db.styli,
                style(&db.data_dir).dim()
            );
        }
    }

    #[instrument(skip(self, device))]
    fn device_info(&self, device: &DeviceSummary) {
        for (label, value) in device_lines(device) {
            println!("{}: {}", style(label).bold(), value);
        }
    }

    #[instrument(skip(self, styli), fields(count = styli.len()))]
    fn stylus_list(&self, styli: &[StylusSummary]) {
        if styli.is_empty() {
            println!("{}", style("No styli in the stylus catalog").yellow());
            return;
        }
        for stylus in styli {
            let kind = if stylus.is_eraser { "eraser" } else { "pen" };
            println!(
                "{:>8}  {} ({:?}, {})",
                style(&stylus.id).green(),
                or_dash(stylus.name.as_deref()),
                stylus.stylus_type,
                kind
            );
        }
    }

    #[instrument(skip(self, stylus))]
    fn stylus_info(&self, stylus: &StylusSummary) {
        println!("{}: {}", style("Name").bold(), or_dash(stylus.name.as_deref()));
        println!("{}: {}", style("ID").bold(), stylus.id);
        println!("{}: {:?}", style("Type").bold(), stylus.stylus_type);
        println!("{}: {}", style("Buttons").bold(), stylus.num_buttons);
        println!("{}: {}", style("Eraser").bold(), stylus.is_eraser);
        println!("{}: {}", style("Has eraser").bold(), stylus.has_eraser);
    }

    #[instrument(skip(self, info))]
    fn version_info(&self, info: &VersionInfo) {
        println!("wdb {}", info.version);
        println!(
            "git: {}{}",
            info.git_sha,
            if info.git_dirty { " (dirty)" } else { "" }
        );
        println!("built: {}", info.build_timestamp);
        println!("rustc: {}", info.rustc_version);
        println!("target: {}", info.target);
        println!("udev: {}", if info.udev { "enabled" } else { "disabled" });
    }
}
