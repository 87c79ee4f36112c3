//! Selectable product options and their display catalog.
//!
//! Each option enum has:
//! - Custom Serialize (as its catalog key string)
//! - Custom Deserialize (known variants + catch-all Custom(String))
//! - `as_str()`, `Display` impl
//!
//! Unknown keys are carried through as `Custom` rather than rejected: the
//! quotation wizard must never block on an option the rate table does not
//! know about -- pricing degrades to neutral defaults instead.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ---------------------------------------------------------------------------
// Macro: defines an option enum with known keys + a Custom(String) fallback.
// ---------------------------------------------------------------------------
macro_rules! option_enum {
    (
        $(#[$meta:meta])*
        $name:ident, default = $default:ident,
        variants: [
            $( ($variant:ident, $str:expr) ),+ $(,)?
        ]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant, )+
            Custom(String),
        }

        impl $name {
            /// Returns the catalog key string.
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $str, )+
                    Self::Custom(s) => s.as_str(),
                }
            }

            /// Returns `true` if this is a known catalog entry (not custom).
            pub fn is_builtin(&self) -> bool {
                !matches!(self, Self::Custom(_))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                Ok(Self::from(s.as_str()))
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $( $str => Self::$variant, )+
                    other => Self::Custom(other.to_owned()),
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                // Check known variants first to avoid allocation in common case.
                match s.as_str() {
                    $( $str => Self::$variant, )+
                    _ => Self::Custom(s),
                }
            }
        }
    };
}

// ===========================================================================
// ElevatorCategory
// ===========================================================================

option_enum! {
    /// Product category of the elevator being quoted.
    ElevatorCategory, default = Home,
    variants: [
        (Home, "home"),
        (Commercial, "commercial"),
        (WithShaft, "shaft-with"),
        (Shaftless, "shaft-without"),
    ]
}

// ===========================================================================
// DoorConfig
// ===========================================================================

option_enum! {
    /// Cabin door arrangement.
    DoorConfig, default = OneFront,
    variants: [
        (OneFront, "1-front"),
        (TwoFrontRear, "2-front-rear"),
        (ThreeDoors, "3-doors"),
    ]
}

// ===========================================================================
// DriveType
// ===========================================================================

option_enum! {
    /// Hoisting drive technology.
    DriveType, default = Vfd,
    variants: [
        (Vfd, "vfd"),
        (Geared, "geared"),
        (Gearless, "gearless"),
    ]
}

// ===========================================================================
// ControlSystem
// ===========================================================================

option_enum! {
    /// Cabin control electronics.
    ControlSystem, default = Microprocessor,
    variants: [
        (Microprocessor, "microprocessor"),
        (Plc, "plc"),
        (Iot, "iot"),
    ]
}

// ---------------------------------------------------------------------------
// Display catalog
// ---------------------------------------------------------------------------

/// A selectable option key with its human-readable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub key: &'static str,
    pub label: &'static str,
}

/// An elevator category with its marketing description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// The four product categories offered.
pub const CATEGORIES: &[CategoryInfo] = &[
    CategoryInfo {
        key: "home",
        name: "Home Lift",
        description: "Compact elevator for private homes",
    },
    CategoryInfo {
        key: "commercial",
        name: "Commercial Elevator",
        description: "High-traffic elevators for commercial spaces",
    },
    CategoryInfo {
        key: "shaft-with",
        name: "Elevator with Shaft",
        description: "Traditional elevator requiring shaft construction",
    },
    CategoryInfo {
        key: "shaft-without",
        name: "Shaftless Elevator",
        description: "Modern elevator without traditional shaft requirements",
    },
];

/// Rated speed choices, keyed by meters per second.
pub const SPEED_OPTIONS: &[CatalogEntry] = &[
    CatalogEntry { key: "1.0", label: "1.0 m/s" },
    CatalogEntry { key: "1.5", label: "1.5 m/s" },
    CatalogEntry { key: "2.0", label: "2.0 m/s" },
    CatalogEntry { key: "2.5", label: "2.5 m/s" },
];

/// Rated capacity choices, keyed by kilograms.
pub const CAPACITY_OPTIONS: &[CatalogEntry] = &[
    CatalogEntry { key: "630", label: "8 Persons (630 kg)" },
    CatalogEntry { key: "800", label: "10 Persons (800 kg)" },
    CatalogEntry { key: "1000", label: "13 Persons (1000 kg)" },
    CatalogEntry { key: "1250", label: "16 Persons (1250 kg)" },
];

/// Drive type choices.
pub const DRIVE_OPTIONS: &[CatalogEntry] = &[
    CatalogEntry { key: "vfd", label: "VFD (Variable Frequency Drive)" },
    CatalogEntry { key: "geared", label: "Geared Drive" },
    CatalogEntry { key: "gearless", label: "Gearless Drive" },
];

/// Door configuration choices.
pub const DOOR_OPTIONS: &[CatalogEntry] = &[
    CatalogEntry { key: "1-front", label: "1 Door (Front Only)" },
    CatalogEntry { key: "2-front-rear", label: "2 Doors (Front & Rear)" },
    CatalogEntry { key: "3-doors", label: "3 Doors" },
];

/// Control system choices.
pub const CONTROL_OPTIONS: &[CatalogEntry] = &[
    CatalogEntry { key: "microprocessor", label: "Microprocessor Based" },
    CatalogEntry { key: "plc", label: "PLC Based" },
    CatalogEntry { key: "iot", label: "IoT Enabled" },
];

/// Looks up a known catalog label for a key, falling back to the key itself.
pub fn label_for(entries: &[CatalogEntry], key: &str) -> String {
    entries
        .iter()
        .find(|e| e.key == key)
        .map(|e| e.label.to_owned())
        .unwrap_or_else(|| key.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_roundtrip_serde() {
        let c = ElevatorCategory::Commercial;
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#""commercial""#);
        let back: ElevatorCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn category_unknown_becomes_custom() {
        let c = ElevatorCategory::from("hospital");
        assert_eq!(c, ElevatorCategory::Custom("hospital".into()));
        assert!(!c.is_builtin());
        assert_eq!(c.as_str(), "hospital");
    }

    #[test]
    fn door_config_keys() {
        assert_eq!(DoorConfig::TwoFrontRear.as_str(), "2-front-rear");
        assert_eq!(DoorConfig::from("3-doors"), DoorConfig::ThreeDoors);
    }

    #[test]
    fn drive_default_is_vfd() {
        assert_eq!(DriveType::default(), DriveType::Vfd);
    }

    #[test]
    fn label_for_known_and_unknown_keys() {
        assert_eq!(label_for(SPEED_OPTIONS, "1.5"), "1.5 m/s");
        assert_eq!(label_for(CAPACITY_OPTIONS, "9999"), "9999");
    }
}
