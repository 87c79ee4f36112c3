//! Configuration input and priced output of the quotation engine.

use serde::{Deserialize, Serialize};

use crate::catalog::{ControlSystem, DoorConfig, DriveType, ElevatorCategory};

/// A product specification as captured by the quotation wizard.
///
/// `category` and `floors` are the two fields pricing cannot proceed
/// without; they stay optional because the wizard builds the configuration
/// incrementally. Everything else has a neutral default. A configuration is
/// never mutated after pricing -- a changed field is a new configuration
/// producing a new breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ElevatorCategory>,

    /// Served floor count; must be at least 2 to price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floors: Option<u32>,

    #[serde(default)]
    pub doors: DoorConfig,

    /// Rated-speed catalog key, e.g. `"1.5"`. Empty means unselected.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub speed: String,

    /// Rated-capacity catalog key, e.g. `"800"`. Empty means unselected.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub capacity: String,

    #[serde(default)]
    pub drive: DriveType,

    #[serde(default)]
    pub control: ControlSystem,

    #[serde(default = "default_true", rename = "installation-included")]
    pub installation_included: bool,

    /// Maintenance-contract length in years; 0 disables the contract.
    #[serde(default = "default_one_year", rename = "maintenance-years")]
    pub maintenance_years: u32,
}

fn default_true() -> bool {
    true
}

fn default_one_year() -> u32 {
    1
}

impl Default for ProductConfiguration {
    fn default() -> Self {
        Self {
            category: None,
            floors: None,
            doors: DoorConfig::default(),
            speed: String::new(),
            capacity: String::new(),
            drive: DriveType::default(),
            control: ControlSystem::default(),
            installation_included: true,
            maintenance_years: 1,
        }
    }
}

/// The itemized output of a successful price computation.
///
/// All amounts are integer currency units. Invariants maintained by the
/// engine: `subtotal == equipment_amount + installation_amount +
/// maintenance_amount` and `grand_total == subtotal + tax1 + tax2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Flat base price before any adjustment.
    pub base_amount: i64,

    /// floors x per-floor rate.
    pub floor_amount: i64,

    /// The category multiplier that was applied (1.0 when none configured).
    pub category_multiplier: f64,

    pub speed_adder: i64,

    pub capacity_adder: i64,

    /// round((base + floor) x multiplier) + speed + capacity.
    pub equipment_amount: i64,

    pub installation_amount: i64,

    pub maintenance_amount: i64,

    pub subtotal: i64,

    pub tax1: i64,

    pub tax2: i64,

    pub grand_total: i64,
}

/// Why a configuration could not be priced.
///
/// These are the only refusal paths; every other irregularity (unknown
/// category, unlisted speed or capacity key) degrades to neutral defaults.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    /// Required fields are absent -- the configuration is not yet computable.
    #[error("not yet computable: missing {}", .missing.join(", "))]
    Incomplete { missing: Vec<&'static str> },

    /// Floor count below the 2-floor minimum.
    #[error("floor count must be at least 2 (got {0})")]
    FloorCountTooLow(u32),
}

impl PricingError {
    /// Returns `true` when the configuration is merely unfinished, as
    /// opposed to invalid.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, Self::Incomplete { .. })
    }
}
