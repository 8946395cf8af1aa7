//! Typed descriptor records and the string vocabularies they are parsed from.

mod bus;
mod class;
mod device;
pub mod match_key;
pub(crate) mod scan;
mod stylus;

pub use bus::BusType;
pub use class::{DeviceClass, StylusType};
pub use device::{Device, Features};
pub use match_key::{GENERIC_MATCH, RawMatch};
pub use stylus::{DEFAULT_STYLUS_BUTTONS, Stylus};
