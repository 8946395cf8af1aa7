//! Device metadata abstraction.
//!
//! Resolving a device node needs a handful of properties the system's device
//! manager keeps about it. [`DeviceMetadata`] hides where they come from, so
//! lookups can run against udev on a live system or against a fixed table in
//! tests.

pub mod fixed;
#[cfg(feature = "udev")]
mod udev;

#[cfg(feature = "udev")]
pub use self::udev::UdevMetadata;

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Set to `1` on input devices classified as tablets.
pub const PROP_INPUT_TABLET: &str = "ID_INPUT_TABLET";
/// Bus the device is attached to, e.g. `usb`.
pub const PROP_BUS: &str = "ID_BUS";
/// Vendor id in hex.
pub const PROP_VENDOR_ID: &str = "ID_VENDOR_ID";
/// Model id in hex.
pub const PROP_MODEL_ID: &str = "ID_MODEL_ID";
/// `<bustype>/<vendor>/<product>/<version>` of an input device.
pub const PROP_PRODUCT: &str = "PRODUCT";

/// Properties of one device and, optionally, of its parent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceNode {
    properties: BTreeMap<String, String>,
    parent: Option<Box<DeviceNode>>,
}

impl DeviceNode {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_parent(mut self, parent: DeviceNode) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// True if the property is `1` or `true` (any case).
    pub fn property_as_bool(&self, name: &str) -> bool {
        self.property(name)
            .is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
    }

    pub fn parent(&self) -> Option<&DeviceNode> {
        self.parent.as_deref()
    }

    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Source of device properties.
pub trait DeviceMetadata {
    /// Looks up the device behind the device file `path`.
    ///
    /// Returns `None` if the device manager does not know the file.
    fn query(&self, path: &Path) -> Option<DeviceNode>;
}

/// The device manager of this system, if support for one is compiled in.
pub fn system_metadata() -> Option<Box<dyn DeviceMetadata>> {
    #[cfg(feature = "udev")]
    {
        Some(Box::new(UdevMetadata::new()))
    }
    #[cfg(not(feature = "udev"))]
    {
        None
    }
}
