//! Device metadata from a fixed table, for tests and offline lookups.
//!
//! [`FixedMetadata`] answers queries from a table of device nodes and records
//! every path it was asked about.
//!
//! # Example
//!
//! ```rust
//! use std::path::Path;
//! use wdb::device::DeviceMetadata;
//! use wdb::device::fixed::FixedMetadata;
//!
//! let metadata = FixedMetadata::new().usb_tablet("/dev/input/event5", "056a", "00b9");
//! let node = metadata.query(Path::new("/dev/input/event5")).unwrap();
//! assert_eq!(node.property("ID_BUS"), Some("usb"));
//! assert_eq!(metadata.query_count(), 1);
//! ```
//!
//! The same table can be read from JSON, keyed by device path:
//!
//! ```json
//! {
//!   "/dev/input/event7": {
//!     "properties": { "ID_INPUT_TABLET": "1" },
//!     "parent": { "properties": { "PRODUCT": "5/56a/81/100" } }
//!   }
//! }
//! ```

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::trace;

use super::{
    DeviceMetadata, DeviceNode, PROP_BUS, PROP_INPUT_TABLET, PROP_MODEL_ID, PROP_PRODUCT,
    PROP_VENDOR_ID,
};
use crate::error::{Result, ResultExt, WdbError};

/// Device metadata served from a fixed table.
#[derive(Debug, Default)]
pub struct FixedMetadata {
    nodes: BTreeMap<PathBuf, DeviceNode>,
    queries: RefCell<Vec<PathBuf>>,
}

impl FixedMetadata {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a table of device nodes keyed by path from JSON.
    pub fn from_json(text: &str) -> Result<Self> {
        let nodes: BTreeMap<PathBuf, DeviceNode> = serde_json::from_str(text)
            .map_err(|e| WdbError::ConfigParse(format!("device properties: {e}")))?;
        Ok(Self {
            nodes,
            ..Self::default()
        })
    }

    /// Loads a JSON table from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read device properties {}", path.display()))?;
        Self::from_json(&text)
    }

    /// Adds or replaces the node for `path`.
    #[must_use]
    pub fn with_node(mut self, path: impl Into<PathBuf>, node: DeviceNode) -> Self {
        self.nodes.insert(path.into(), node);
        self
    }

    /// A USB tablet with hex vendor and model ids.
    #[must_use]
    pub fn usb_tablet(self, path: impl Into<PathBuf>, vendor_id: &str, model_id: &str) -> Self {
        self.with_node(
            path,
            DeviceNode::new()
                .with_property(PROP_INPUT_TABLET, "1")
                .with_property(PROP_BUS, "usb")
                .with_property(PROP_VENDOR_ID, vendor_id)
                .with_property(PROP_MODEL_ID, model_id),
        )
    }

    /// A bluetooth tablet: no bus property, ids in the parent's `PRODUCT`.
    #[must_use]
    pub fn bluetooth_tablet(self, path: impl Into<PathBuf>, product: &str) -> Self {
        self.with_node(
            path,
            DeviceNode::new()
                .with_property(PROP_INPUT_TABLET, "1")
                .with_parent(DeviceNode::new().with_property(PROP_PRODUCT, product)),
        )
    }

    #[must_use]
    pub fn serial_tablet(self, path: impl Into<PathBuf>) -> Self {
        self.with_node(
            path,
            DeviceNode::new()
                .with_property(PROP_INPUT_TABLET, "1")
                .with_property(PROP_BUS, "serial"),
        )
    }

    /// An input device that is not a tablet.
    #[must_use]
    pub fn non_tablet(self, path: impl Into<PathBuf>) -> Self {
        self.with_node(
            path,
            DeviceNode::new()
                .with_property("ID_INPUT_MOUSE", "1")
                .with_property(PROP_BUS, "usb"),
        )
    }

    // === Assertions ===

    /// Paths queried so far, in order.
    #[must_use]
    pub fn queries(&self) -> Vec<PathBuf> {
        self.queries.borrow().clone()
    }

    #[must_use]
    pub fn query_count(&self) -> usize {
        self.queries.borrow().len()
    }

    pub fn clear_queries(&self) {
        self.queries.borrow_mut().clear();
    }
}

impl DeviceMetadata for FixedMetadata {
    fn query(&self, path: &Path) -> Option<DeviceNode> {
        self.queries.borrow_mut().push(path.to_path_buf());
        let node = self.nodes.get(path).cloned();
        trace!(path = %path.display(), found = node.is_some(), "Fixed metadata query");
        node
    }
}
