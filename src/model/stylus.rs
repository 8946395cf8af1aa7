//! Stylus descriptors.

use tracing::warn;

use super::StylusType;

/// Button count reported for styli whose catalog entry does not define one.
pub const DEFAULT_STYLUS_BUTTONS: u32 = 2;

/// One entry of the stylus catalog.
///
/// Styli are owned by the database and only ever handed out by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylus {
    pub(crate) id: u32,
    pub(crate) name: Option<String>,
    pub(crate) is_eraser: bool,
    pub(crate) has_eraser: bool,
    pub(crate) num_buttons: Option<u32>,
    pub(crate) stylus_type: StylusType,
}

impl Stylus {
    pub const fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// True if this tool is the eraser end of a stylus.
    pub const fn is_eraser(&self) -> bool {
        self.is_eraser
    }

    /// True if the stylus has an eraser end. Always false for erasers.
    pub const fn has_eraser(&self) -> bool {
        self.has_eraser
    }

    /// Number of buttons on the stylus.
    ///
    /// Falls back to [`DEFAULT_STYLUS_BUTTONS`] with a warning when the
    /// catalog does not define a count.
    pub fn num_buttons(&self) -> u32 {
        self.num_buttons.unwrap_or_else(|| {
            warn!(
                "Stylus '{:#x}' has no number of buttons defined, falling back to {DEFAULT_STYLUS_BUTTONS}",
                self.id
            );
            DEFAULT_STYLUS_BUTTONS
        })
    }

    /// Button count as written in the catalog, without the fallback.
    pub const fn declared_buttons(&self) -> Option<u32> {
        self.num_buttons
    }

    /// Kind of stylus; `General` with a warning when the catalog has none.
    pub fn stylus_type(&self) -> StylusType {
        if self.stylus_type == StylusType::Unknown {
            warn!(
                "Stylus '{:#x}' has no type defined, falling back to 'General'",
                self.id
            );
            return StylusType::General;
        }
        self.stylus_type
    }

    /// Type as written in the catalog, without the fallback.
    pub const fn declared_type(&self) -> StylusType {
        self.stylus_type
    }
}
