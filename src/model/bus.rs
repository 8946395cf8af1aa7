//! Bus types and their string forms.

use serde::Serialize;

use crate::config::Compat;

/// Hardware transport a tablet is connected through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BusType {
    #[default]
    Unknown,
    Usb,
    Serial,
    Bluetooth,
}

impl BusType {
    /// Maps a bus name (`usb`, `serial`, `bluetooth`) to a bus type.
    ///
    /// Matching is exact and case-sensitive; anything else is `Unknown`.
    pub fn from_bus_str(s: &str) -> Self {
        match s {
            "usb" => Self::Usb,
            "serial" => Self::Serial,
            "bluetooth" => Self::Bluetooth,
            _ => Self::Unknown,
        }
    }

    /// The bus name used inside match keys.
    ///
    /// Serial devices are keyed as `bluetooth` while
    /// [`Compat::serial_keys_as_bluetooth`] is set. `Unknown` has no match
    /// form and yields `None`.
    pub const fn match_str(self, compat: &Compat) -> Option<&'static str> {
        match self {
            Self::Unknown => None,
            Self::Usb => Some("usb"),
            Self::Serial if compat.serial_keys_as_bluetooth => Some("bluetooth"),
            Self::Serial => Some("serial"),
            Self::Bluetooth => Some("bluetooth"),
        }
    }
}

impl std::fmt::Display for BusType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Unknown => "unknown",
            Self::Usb => "usb",
            Self::Serial => "serial",
            Self::Bluetooth => "bluetooth",
        })
    }
}
