//! Match keys: the string identity of a tablet in the device table.
//!
//! A match key is either the literal [`GENERIC_MATCH`] or
//! `<bus>:0x<vendor>:0x<product>` with lowercase, unpadded hex ids, e.g.
//! `usb:0x56a:0x81`.

use super::BusType;
use super::scan::scan_u32;
use crate::config::Compat;

/// Match key of the catch-all descriptor used for fallback lookups.
pub const GENERIC_MATCH: &str = "generic";

/// Longest bus name accepted in a match string.
const MAX_BUS_NAME: usize = 63;

/// The three fields of a `<bus>:<vendor>:<product>` match string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch {
    pub bus_name: String,
    pub vendor_id: u32,
    pub product_id: u32,
}

impl RawMatch {
    /// Bus type named by the match string.
    pub fn bus(&self) -> BusType {
        BusType::from_bus_str(&self.bus_name)
    }
}

/// Splits a `<bus>:<hex-vendor>:<hex-product>` string.
///
/// The bus name is 1 to 63 characters without `:`. Each id is hex with an
/// optional `0x` prefix; scanning of the product id stops at the first
/// non-hex character and the remainder is ignored. Returns `None` unless all
/// three fields were read.
pub fn parse(s: &str) -> Option<RawMatch> {
    let (bus_name, rest) = s.split_once(':')?;
    if bus_name.is_empty() || bus_name.chars().count() > MAX_BUS_NAME {
        return None;
    }

    let (vendor_id, rest) = scan_u32(rest, 16)?;
    let rest = rest.strip_prefix(':')?;
    let (product_id, _) = scan_u32(rest, 16)?;

    Some(RawMatch {
        bus_name: bus_name.to_string(),
        vendor_id,
        product_id,
    })
}

/// Formats the canonical match key for a bus and id pair.
///
/// Returns `None` for [`BusType::Unknown`], which has no match form.
pub fn format(bus: BusType, vendor_id: u32, product_id: u32, compat: &Compat) -> Option<String> {
    bus.match_str(compat)
        .map(|name| format!("{name}:0x{vendor_id:x}:0x{product_id:x}"))
}
