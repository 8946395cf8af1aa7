//! Tablet classes and stylus types.

use serde::Serialize;

/// Product family of a tablet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum DeviceClass {
    #[default]
    Unknown,
    Intuos3,
    Intuos4,
    Cintiq,
    Bamboo,
    Graphire,
}

impl DeviceClass {
    /// Maps the `Class` field of a descriptor.
    ///
    /// Exact, case-sensitive match; absent, empty and unrecognized values all
    /// map to `Unknown`.
    pub fn from_model_str(model: Option<&str>) -> Self {
        match model {
            Some("Intuos3") => Self::Intuos3,
            Some("Intuos4") => Self::Intuos4,
            Some("Cintiq") => Self::Cintiq,
            Some("Bamboo") => Self::Bamboo,
            Some("Graphire") => Self::Graphire,
            _ => Self::Unknown,
        }
    }

    /// Name as written in descriptor files.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Intuos3 => "Intuos3",
            Self::Intuos4 => "Intuos4",
            Self::Cintiq => "Cintiq",
            Self::Bamboo => "Bamboo",
            Self::Graphire => "Graphire",
        }
    }
}

/// Kind of stylus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum StylusType {
    #[default]
    Unknown,
    General,
    Inking,
    Airbrush,
    Classic,
    Marker,
}

impl StylusType {
    /// Maps the `Type` field of a stylus entry; unrecognized values are `Unknown`.
    pub fn from_type_str(s: Option<&str>) -> Self {
        match s {
            Some("General") => Self::General,
            Some("Inking") => Self::Inking,
            Some("Airbrush") => Self::Airbrush,
            Some("Classic") => Self::Classic,
            Some("Marker") => Self::Marker,
            _ => Self::Unknown,
        }
    }

    /// Name as written in the stylus catalog.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::General => "General",
            Self::Inking => "Inking",
            Self::Airbrush => "Airbrush",
            Self::Classic => "Classic",
            Self::Marker => "Marker",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_string_to_class() {
        assert_eq!(DeviceClass::from_model_str(Some("Intuos3")), DeviceClass::Intuos3);
        assert_eq!(DeviceClass::from_model_str(Some("Intuos4")), DeviceClass::Intuos4);
        assert_eq!(DeviceClass::from_model_str(Some("Cintiq")), DeviceClass::Cintiq);
        assert_eq!(DeviceClass::from_model_str(Some("Bamboo")), DeviceClass::Bamboo);
        assert_eq!(DeviceClass::from_model_str(Some("Graphire")), DeviceClass::Graphire);
    }

    #[test]
    fn test_model_string_fallbacks() {
        assert_eq!(DeviceClass::from_model_str(None), DeviceClass::Unknown);
        assert_eq!(DeviceClass::from_model_str(Some("")), DeviceClass::Unknown);
        assert_eq!(DeviceClass::from_model_str(Some("cintiq")), DeviceClass::Unknown);
        assert_eq!(DeviceClass::from_model_str(Some("Intuos5")), DeviceClass::Unknown);
    }

    #[test]
    fn test_stylus_type_mapping() {
        for ty in [
            StylusType::General,
            StylusType::Inking,
            StylusType::Airbrush,
            StylusType::Classic,
            StylusType::Marker,
        ] {
            assert_eq!(StylusType::from_type_str(Some(ty.as_str())), ty);
        }
        assert_eq!(StylusType::from_type_str(None), StylusType::Unknown);
        assert_eq!(StylusType::from_type_str(Some("Puck")), StylusType::Unknown);
    }
}
