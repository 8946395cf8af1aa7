//! Descriptor parsing: key files into [`Device`](crate::model::Device) and
//! [`Stylus`](crate::model::Stylus) records.

mod stylus;
mod tablet;

pub use stylus::{parse_stylus_catalog, styli_from_keyfile, stylus_from_group};
pub use tablet::{device_from_keyfile, parse_tablet_descriptor};

/// Group holding identity, size and stylus list of a tablet.
pub const DEVICE_GROUP: &str = "Device";

/// Group holding the boolean capabilities and the button count.
pub const FEATURES_GROUP: &str = "Features";
