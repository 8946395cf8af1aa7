//! Tablet descriptors.

use bitflags::bitflags;

use super::{BusType, DeviceClass};

bitflags! {
    /// Hardware capabilities of a tablet.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Features: u32 {
        const STYLUS = 1 << 0;
        const TOUCH = 1 << 1;
        const RING = 1 << 2;
        const RING2 = 1 << 3;
        const VSTRIP = 1 << 4;
        const HSTRIP = 1 << 5;
        const BUILTIN = 1 << 6;
        const REVERSIBLE = 1 << 7;
    }
}

impl Features {
    /// Flag names as they appear in the `[Features]` group of a descriptor.
    pub const KEYS: [(&'static str, Self); 8] = [
        ("Stylus", Self::STYLUS),
        ("Touch", Self::TOUCH),
        ("Ring", Self::RING),
        ("Ring2", Self::RING2),
        ("VStrip", Self::VSTRIP),
        ("HStrip", Self::HSTRIP),
        ("BuiltIn", Self::BUILTIN),
        ("Reversible", Self::REVERSIBLE),
    ];

    /// Descriptor names of the flags that are set, in descriptor order.
    pub fn key_names(self) -> Vec<&'static str> {
        Self::KEYS
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(name, _)| *name)
            .collect()
    }
}

/// Static description of one tablet model.
///
/// Values handed out by the resolver are owned copies: dropping or changing
/// one never touches the database's own entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Device {
    pub(crate) vendor: Option<String>,
    pub(crate) product: Option<String>,
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) class: DeviceClass,
    pub(crate) match_key: Option<String>,
    pub(crate) vendor_id: u32,
    pub(crate) product_id: u32,
    pub(crate) bus: BusType,
    pub(crate) features: Features,
    pub(crate) num_buttons: i32,
    pub(crate) supported_styli: Vec<u32>,
}

impl Device {
    pub fn vendor(&self) -> Option<&str> {
        self.vendor.as_deref()
    }

    pub const fn vendor_id(&self) -> u32 {
        self.vendor_id
    }

    pub fn product(&self) -> Option<&str> {
        self.product.as_deref()
    }

    pub const fn product_id(&self) -> u32 {
        self.product_id
    }

    /// Key under which this descriptor is stored, if its `DeviceMatch` parsed.
    pub fn match_key(&self) -> Option<&str> {
        self.match_key.as_deref()
    }

    /// Physical width in device units.
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Physical height in device units.
    pub const fn height(&self) -> i32 {
        self.height
    }

    pub const fn class(&self) -> DeviceClass {
        self.class
    }

    pub const fn bus(&self) -> BusType {
        self.bus
    }

    /// Number of pad buttons, 0 when the descriptor does not say.
    pub const fn num_buttons(&self) -> i32 {
        self.num_buttons
    }

    /// Ids of the styli this tablet supports, in descriptor order.
    pub fn supported_styli(&self) -> &[u32] {
        &self.supported_styli
    }

    pub fn num_styli(&self) -> usize {
        self.supported_styli.len()
    }

    pub const fn features(&self) -> Features {
        self.features
    }

    pub const fn has_stylus(&self) -> bool {
        self.features.contains(Features::STYLUS)
    }

    pub const fn has_touch(&self) -> bool {
        self.features.contains(Features::TOUCH)
    }

    pub const fn has_ring(&self) -> bool {
        self.features.contains(Features::RING)
    }

    pub const fn has_ring2(&self) -> bool {
        self.features.contains(Features::RING2)
    }

    pub const fn has_vstrip(&self) -> bool {
        self.features.contains(Features::VSTRIP)
    }

    pub const fn has_hstrip(&self) -> bool {
        self.features.contains(Features::HSTRIP)
    }

    /// Screen tablets and tablets integrated into a laptop.
    pub const fn is_builtin(&self) -> bool {
        self.features.contains(Features::BUILTIN)
    }

    /// Tablets that can be used rotated by 180 degrees for left-handed use.
    pub const fn is_reversible(&self) -> bool {
        self.features.contains(Features::REVERSIBLE)
    }
}
