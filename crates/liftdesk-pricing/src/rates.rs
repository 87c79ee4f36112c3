//! Rate tables: the configurable inputs of the pricing engine.
//!
//! Every lookup has an explicit neutral default (multiplier 1, adder 0) so
//! that an option key absent from the table prices gracefully instead of
//! failing the quotation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::ElevatorCategory;

/// All amounts are integer currency units; tax rates are fractions of 1.
///
/// Fields use serde defaults so a partially-specified YAML rates section
/// deserializes with the standard price list filled in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTable {
    /// Flat base price of any unit.
    #[serde(default = "default_base_amount", rename = "base-amount")]
    pub base_amount: i64,

    /// Added per served floor.
    #[serde(default = "default_per_floor_amount", rename = "per-floor-amount")]
    pub per_floor_amount: i64,

    /// Category key -> price multiplier. Missing keys multiply by 1.
    #[serde(default = "default_category_multipliers", rename = "category-multipliers")]
    pub category_multipliers: BTreeMap<String, f64>,

    /// Rated-speed key -> flat adder. Missing keys add 0.
    #[serde(default = "default_speed_adders", rename = "speed-adders")]
    pub speed_adders: BTreeMap<String, i64>,

    /// Rated-capacity key -> flat adder. Missing keys add 0.
    #[serde(default = "default_capacity_adders", rename = "capacity-adders")]
    pub capacity_adders: BTreeMap<String, i64>,

    /// Per-floor installation charge when installation is included.
    #[serde(default = "default_installation_per_floor", rename = "installation-per-floor")]
    pub installation_per_floor: i64,

    /// Annual maintenance-contract charge.
    #[serde(default = "default_maintenance_annual_rate", rename = "maintenance-annual-rate")]
    pub maintenance_annual_rate: i64,

    /// First tax component, as a fraction of the subtotal.
    #[serde(default = "default_tax_rate", rename = "tax1-rate")]
    pub tax1_rate: f64,

    /// Second tax component, as a fraction of the subtotal.
    #[serde(default = "default_tax_rate", rename = "tax2-rate")]
    pub tax2_rate: f64,
}

fn default_base_amount() -> i64 {
    1_000_000
}

fn default_per_floor_amount() -> i64 {
    150_000
}

fn default_category_multipliers() -> BTreeMap<String, f64> {
    BTreeMap::from([
        ("home".to_owned(), 0.8),
        ("commercial".to_owned(), 1.2),
        ("shaft-with".to_owned(), 1.0),
        ("shaft-without".to_owned(), 1.0),
    ])
}

fn default_speed_adders() -> BTreeMap<String, i64> {
    BTreeMap::from([
        ("1.0".to_owned(), 0),
        ("1.5".to_owned(), 150_000),
        ("2.0".to_owned(), 300_000),
        ("2.5".to_owned(), 450_000),
    ])
}

fn default_capacity_adders() -> BTreeMap<String, i64> {
    BTreeMap::from([
        ("630".to_owned(), 0),
        ("800".to_owned(), 100_000),
        ("1000".to_owned(), 200_000),
        ("1250".to_owned(), 350_000),
    ])
}

fn default_installation_per_floor() -> i64 {
    25_000
}

fn default_maintenance_annual_rate() -> i64 {
    50_000
}

fn default_tax_rate() -> f64 {
    0.09
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            base_amount: default_base_amount(),
            per_floor_amount: default_per_floor_amount(),
            category_multipliers: default_category_multipliers(),
            speed_adders: default_speed_adders(),
            capacity_adders: default_capacity_adders(),
            installation_per_floor: default_installation_per_floor(),
            maintenance_annual_rate: default_maintenance_annual_rate(),
            tax1_rate: default_tax_rate(),
            tax2_rate: default_tax_rate(),
        }
    }
}

impl RateTable {
    /// Multiplier for a category; unknown categories price at x1.
    pub fn multiplier_for(&self, category: &ElevatorCategory) -> f64 {
        self.category_multipliers
            .get(category.as_str())
            .copied()
            .unwrap_or(1.0)
    }

    /// Flat adder for a rated-speed key; unknown keys add 0.
    pub fn speed_adder(&self, speed: &str) -> i64 {
        self.speed_adders.get(speed).copied().unwrap_or(0)
    }

    /// Flat adder for a rated-capacity key; unknown keys add 0.
    pub fn capacity_adder(&self, capacity: &str) -> i64 {
        self.capacity_adders.get(capacity).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_matches_standard_price_list() {
        let rates = RateTable::default();
        assert_eq!(rates.base_amount, 1_000_000);
        assert_eq!(rates.per_floor_amount, 150_000);
        assert_eq!(rates.installation_per_floor, 25_000);
        assert_eq!(rates.maintenance_annual_rate, 50_000);
        assert_eq!(rates.tax1_rate, 0.09);
        assert_eq!(rates.tax2_rate, 0.09);
    }

    #[test]
    fn unknown_category_multiplies_by_one() {
        let rates = RateTable::default();
        let unknown = ElevatorCategory::Custom("hospital".into());
        assert_eq!(rates.multiplier_for(&unknown), 1.0);
    }

    #[test]
    fn unknown_speed_and_capacity_add_zero() {
        let rates = RateTable::default();
        assert_eq!(rates.speed_adder("3.5"), 0);
        assert_eq!(rates.capacity_adder("2000"), 0);
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let yaml = "base-amount: 500000\n";
        let rates: RateTable = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rates.base_amount, 500_000);
        // Untouched fields keep the standard price list.
        assert_eq!(rates.per_floor_amount, 150_000);
        assert_eq!(rates.speed_adder("2.0"), 300_000);
    }
}
