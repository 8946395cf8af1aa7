//! `.tablet` descriptor parsing.

use std::path::Path;

use tracing::{debug, trace};

use crate::config::Compat;
use crate::keyfile::KeyFile;
use crate::model::scan::strtol;
use crate::model::{Device, DeviceClass, Features, GENERIC_MATCH, match_key};

use super::{DEVICE_GROUP, FEATURES_GROUP};

/// Parses the tablet descriptor at `path`.
///
/// Returns `None` only if the file cannot be loaded as a key file. Missing or
/// malformed fields fall back to their defaults; a `DeviceMatch` that does
/// not parse leaves the match key unset, so the device cannot be looked up.
pub fn parse_tablet_descriptor(path: &Path, compat: &Compat) -> Option<Device> {
    let keyfile = match KeyFile::load(path) {
        Ok(kf) => kf,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "Skipping unreadable tablet file");
            return None;
        }
    };

    let mut device = device_from_keyfile(&keyfile, compat);
    if device.match_key.is_none() {
        debug!(
            path = %path.display(),
            "Failed to match DeviceMatch for product/vendor IDs"
        );
    }
    device.supported_styli.shrink_to_fit();

    trace!(
        path = %path.display(),
        match_key = ?device.match_key,
        product = ?device.product,
        "Parsed tablet descriptor"
    );
    Some(device)
}

/// Builds a device from an already parsed key file.
pub fn device_from_keyfile(keyfile: &KeyFile, compat: &Compat) -> Device {
    let mut device = Device {
        vendor: keyfile.get_string(DEVICE_GROUP, "Vendor").ok(),
        product: keyfile.get_string(DEVICE_GROUP, "Product").ok(),
        width: keyfile.get_integer(DEVICE_GROUP, "Width").unwrap_or(0),
        height: keyfile.get_integer(DEVICE_GROUP, "Height").unwrap_or(0),
        ..Device::default()
    };

    let class = keyfile.get_string(DEVICE_GROUP, "Class").ok();
    device.class = DeviceClass::from_model_str(class.as_deref());

    if let Ok(matchstr) = keyfile.get_string(DEVICE_GROUP, "DeviceMatch") {
        apply_match(&mut device, &matchstr, compat);
    }

    if let Ok(styli) = keyfile.get_string_list(DEVICE_GROUP, "Styli") {
        device.supported_styli = styli.iter().map(|s| stylus_ref(s)).collect();
    }

    for (name, flag) in Features::KEYS {
        if keyfile.get_boolean(FEATURES_GROUP, name).unwrap_or(false) {
            device.features |= flag;
        }
    }

    device.num_buttons = keyfile.get_integer(FEATURES_GROUP, "Buttons").unwrap_or(0);

    device
}

fn apply_match(device: &mut Device, matchstr: &str, compat: &Compat) {
    if matchstr == GENERIC_MATCH {
        device.match_key = Some(GENERIC_MATCH.to_string());
        return;
    }

    let Some(raw) = match_key::parse(matchstr) else {
        trace!(matchstr, "DeviceMatch does not parse");
        return;
    };

    let bus = raw.bus();
    // The stored key is always the canonical form, never the file's spelling.
    let Some(key) = match_key::format(bus, raw.vendor_id, raw.product_id, compat) else {
        trace!(matchstr, bus = %raw.bus_name, "DeviceMatch names an unknown bus");
        return;
    };

    device.bus = bus;
    device.vendor_id = raw.vendor_id;
    device.product_id = raw.product_id;
    device.match_key = Some(key);
}

fn stylus_ref(entry: &str) -> u32 {
    let value = strtol(entry, 0);
    u32::try_from(value).unwrap_or_else(|_| {
        debug!(entry, "Stylus id out of range, using 0");
        0
    })
}
