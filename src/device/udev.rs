//! Device metadata from udev.

use std::os::unix::fs::MetadataExt;
use std::path::Path;

use tracing::{debug, trace};

use super::{DeviceMetadata, DeviceNode};

/// Queries the udev database for device nodes.
#[derive(Debug, Default, Clone, Copy)]
pub struct UdevMetadata;

impl UdevMetadata {
    pub const fn new() -> Self {
        Self
    }
}

fn snapshot(device: &::udev::Device) -> DeviceNode {
    let mut node = DeviceNode::new();
    for entry in device.properties() {
        node.set_property(
            entry.name().to_string_lossy(),
            entry.value().to_string_lossy(),
        );
    }
    node
}

impl DeviceMetadata for UdevMetadata {
    fn query(&self, path: &Path) -> Option<DeviceNode> {
        let rdev = match std::fs::metadata(path) {
            Ok(meta) => meta.rdev(),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Cannot stat device file");
                return None;
            }
        };

        let device = match ::udev::Device::from_devnum(::udev::DeviceType::Character, rdev) {
            Ok(device) => device,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "No udev device for file");
                return None;
            }
        };

        let mut node = snapshot(&device);
        if let Some(parent) = device.parent() {
            node = node.with_parent(snapshot(&parent));
        }

        trace!(path = %path.display(), syspath = %device.syspath().display(), "Read udev properties");
        Some(node)
    }
}
