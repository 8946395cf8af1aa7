//! Lookups: from a match key, USB ids, a device node or a product name to a
//! device record.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, instrument};

use super::Database;
use crate::config::Compat;
use crate::device::{
    DeviceMetadata, DeviceNode, PROP_BUS, PROP_INPUT_TABLET, PROP_MODEL_ID, PROP_PRODUCT,
    PROP_VENDOR_ID,
};
use crate::error::{Result, WdbError};
use crate::model::scan::{scan_int, scan_u32, strtol};
use crate::model::{BusType, Device, GENERIC_MATCH, Stylus, match_key};

/// Bus and ids of a tablet, as reported by the device metadata service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeviceIdentity {
    pub bus: BusType,
    pub vendor_id: u32,
    pub product_id: u32,
}

impl DeviceIdentity {
    /// Reads the identity of the tablet behind the device file `path`.
    ///
    /// A node without a bus property is taken to be a bluetooth tablet, whose
    /// ids live in the `PRODUCT` property of its parent.
    pub fn from_metadata(metadata: &dyn DeviceMetadata, path: &Path) -> Result<Self> {
        if path.as_os_str().is_empty() {
            return Err(WdbError::invalid_path("Empty device path"));
        }

        let node = metadata.query(path).ok_or_else(|| {
            WdbError::invalid_path(format!("Could not find udev device for '{}'", path.display()))
        })?;

        if !node.property_as_bool(PROP_INPUT_TABLET) {
            return Err(WdbError::invalid_path(format!(
                "Device '{}' is not a tablet",
                path.display()
            )));
        }

        let (source, bus_name) = match node.property(PROP_BUS) {
            Some(bus) => (&node, bus),
            None => {
                let parent = node.parent().ok_or_else(|| {
                    WdbError::invalid_path(format!(
                        "Device '{}' has no bus and no parent device",
                        path.display()
                    ))
                })?;
                (parent, "bluetooth")
            }
        };

        let bus = BusType::from_bus_str(bus_name);
        let (vendor_id, product_id) = match bus {
            BusType::Usb => usb_ids(source)?,
            BusType::Bluetooth => source
                .property(PROP_PRODUCT)
                .and_then(parse_product_property)
                .ok_or_else(|| WdbError::unknown_model("Unimplemented serial bus"))?,
            BusType::Serial => return Err(WdbError::unknown_model("Unimplemented serial bus")),
            BusType::Unknown => {
                return Err(WdbError::unknown_model(format!("Unsupported bus '{bus_name}'")));
            }
        };

        Ok(Self {
            bus,
            vendor_id,
            product_id,
        })
    }

    /// Canonical match key for this identity.
    pub fn match_key(&self, compat: &Compat) -> Option<String> {
        match_key::format(self.bus, self.vendor_id, self.product_id, compat)
    }
}

fn usb_ids(node: &DeviceNode) -> Result<(u32, u32)> {
    let vendor = node
        .property(PROP_VENDOR_ID)
        .ok_or_else(|| WdbError::unknown_model("USB device has no vendor id"))?;
    let product = node
        .property(PROP_MODEL_ID)
        .ok_or_else(|| WdbError::unknown_model("USB device has no model id"))?;

    let hex = |s: &str| u32::try_from(strtol(s, 16)).unwrap_or(0);
    Ok((hex(vendor), hex(product)))
}

/// Reads vendor and product ids from a `PRODUCT` property.
///
/// The property is `<bustype>/<vendor>/<product>/<version>`, bus type and
/// version in decimal, the ids in hex, e.g. `5/56a/81/100`.
pub(crate) fn parse_product_property(value: &str) -> Option<(u32, u32)> {
    let (_, rest) = scan_int(value, 10)?;
    let rest = rest.strip_prefix('/')?;
    let (vendor_id, rest) = scan_u32(rest, 16)?;
    let rest = rest.strip_prefix('/')?;
    let (product_id, rest) = scan_u32(rest, 16)?;
    let rest = rest.strip_prefix('/')?;
    scan_int(rest, 10)?;
    Some((vendor_id, product_id))
}

impl Database {
    /// Returns the device stored under `key`, if any.
    pub fn lookup_by_match_key(&self, key: &str) -> Option<&Device> {
        self.devices.get(key)
    }

    /// Returns the stylus with the given id, if any.
    pub fn stylus(&self, id: u32) -> Option<&Stylus> {
        self.styli.get(&id)
    }

    /// Resolves a USB tablet by vendor and product id.
    ///
    /// The returned device is an independent copy of the table entry.
    pub fn resolve_by_usb_id(&self, vendor_id: u32, product_id: u32) -> Result<Device> {
        match_key::format(BusType::Usb, vendor_id, product_id, &self.compat)
            .and_then(|key| self.lookup_by_match_key(&key))
            .cloned()
            .ok_or(WdbError::UnknownModel { message: None })
    }

    /// Resolves the tablet behind the device node `path`.
    ///
    /// With `fallback` set, a tablet that is not in the database resolves to
    /// the generic descriptor when one is loaded.
    #[instrument(skip(self, metadata), fields(path = %path.display()))]
    pub fn resolve_by_path(
        &self,
        metadata: &dyn DeviceMetadata,
        path: &Path,
        fallback: bool,
    ) -> Result<Device> {
        let identity = DeviceIdentity::from_metadata(metadata, path)?;
        debug!(?identity, "Read device identity");

        let found = identity
            .match_key(&self.compat)
            .and_then(|key| self.lookup_by_match_key(&key));

        let found = match found {
            Some(device) => Some(device),
            None if fallback => {
                debug!("No descriptor for device, trying generic");
                self.lookup_by_match_key(GENERIC_MATCH)
            }
            None => None,
        };

        found.cloned().ok_or(WdbError::UnknownModel { message: None })
    }

    /// Resolves a tablet by its exact product name.
    ///
    /// If several devices share the name, the one with the smallest match
    /// key is returned.
    pub fn resolve_by_name(&self, name: &str) -> Result<Device> {
        self.devices()
            .find(|device| device.product() == Some(name))
            .cloned()
            .ok_or(WdbError::UnknownModel { message: None })
    }
}
