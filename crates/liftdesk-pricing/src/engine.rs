//! The pricing computation: configuration -> itemized breakdown.

use crate::rates::RateTable;
use crate::types::{PriceBreakdown, PricingError, ProductConfiguration};

/// Computes the full price breakdown for a product configuration.
///
/// Pure and deterministic: the same configuration and rate table always
/// produce the identical breakdown. Multiplier and tax products are each
/// rounded to whole currency units exactly once, so the summation
/// invariants on [`PriceBreakdown`] hold without drift.
///
/// # Errors
///
/// - [`PricingError::Incomplete`] when `category` or `floors` is absent.
///   Callers must not render a partial or zero total in this case.
/// - [`PricingError::FloorCountTooLow`] when `floors < 2`.
pub fn compute_price(
    config: &ProductConfiguration,
    rates: &RateTable,
) -> Result<PriceBreakdown, PricingError> {
    let (category, floors) = match (&config.category, config.floors) {
        (Some(category), Some(floors)) => (category, floors),
        (category, floors) => {
            let mut missing = Vec::new();
            if category.is_none() {
                missing.push("category");
            }
            if floors.is_none() {
                missing.push("floors");
            }
            return Err(PricingError::Incomplete { missing });
        }
    };

    if floors < 2 {
        return Err(PricingError::FloorCountTooLow(floors));
    }

    let base_amount = rates.base_amount;
    let floor_amount = i64::from(floors) * rates.per_floor_amount;
    let category_multiplier = rates.multiplier_for(category);
    let speed_adder = rates.speed_adder(&config.speed);
    let capacity_adder = rates.capacity_adder(&config.capacity);

    let equipment_amount = ((base_amount + floor_amount) as f64 * category_multiplier).round()
        as i64
        + speed_adder
        + capacity_adder;

    let installation_amount = if config.installation_included {
        i64::from(floors) * rates.installation_per_floor
    } else {
        0
    };
    let maintenance_amount = i64::from(config.maintenance_years) * rates.maintenance_annual_rate;

    let subtotal = equipment_amount + installation_amount + maintenance_amount;
    let tax1 = (subtotal as f64 * rates.tax1_rate).round() as i64;
    let tax2 = (subtotal as f64 * rates.tax2_rate).round() as i64;

    Ok(PriceBreakdown {
        base_amount,
        floor_amount,
        category_multiplier,
        speed_adder,
        capacity_adder,
        equipment_amount,
        installation_amount,
        maintenance_amount,
        subtotal,
        tax1,
        tax2,
        grand_total: subtotal + tax1 + tax2,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ElevatorCategory;
    use pretty_assertions::assert_eq;

    fn commercial_8_floor() -> ProductConfiguration {
        ProductConfiguration {
            category: Some(ElevatorCategory::Commercial),
            floors: Some(8),
            speed: "1.0".into(),
            capacity: "630".into(),
            installation_included: true,
            maintenance_years: 1,
            ..ProductConfiguration::default()
        }
    }

    #[test]
    fn worked_example_commercial_8_floors() {
        let rates = RateTable::default();
        let breakdown = compute_price(&commercial_8_floor(), &rates).unwrap();

        // Assert against the configured table rather than magic numbers.
        let pre_multiplier = rates.base_amount + 8 * rates.per_floor_amount;
        let expected_equipment = (pre_multiplier as f64
            * rates.multiplier_for(&ElevatorCategory::Commercial))
        .round() as i64;

        assert_eq!(breakdown.base_amount, rates.base_amount);
        assert_eq!(breakdown.floor_amount, 8 * rates.per_floor_amount);
        assert_eq!(breakdown.equipment_amount, expected_equipment);
        assert_eq!(breakdown.installation_amount, 8 * rates.installation_per_floor);
        assert_eq!(breakdown.maintenance_amount, rates.maintenance_annual_rate);

        let expected_subtotal = expected_equipment
            + 8 * rates.installation_per_floor
            + rates.maintenance_annual_rate;
        assert_eq!(breakdown.subtotal, expected_subtotal);
        assert_eq!(
            breakdown.grand_total,
            breakdown.subtotal + breakdown.tax1 + breakdown.tax2
        );

        // With the stock table this lands on known figures.
        assert_eq!(breakdown.equipment_amount, 2_640_000);
        assert_eq!(breakdown.subtotal, 2_890_000);
        assert_eq!(breakdown.tax1, 260_100);
        assert_eq!(breakdown.grand_total, 3_410_200);
    }

    #[test]
    fn deterministic_for_same_inputs() {
        let rates = RateTable::default();
        let config = commercial_8_floor();
        let first = compute_price(&config, &rates).unwrap();
        let second = compute_price(&config, &rates).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn equal_tax_rates_yield_equal_components() {
        let rates = RateTable::default();
        let breakdown = compute_price(&commercial_8_floor(), &rates).unwrap();
        assert_eq!(breakdown.tax1, breakdown.tax2);
    }

    #[test]
    fn breakdown_sums_are_consistent() {
        let rates = RateTable::default();
        for floors in [2, 5, 8, 30] {
            let config = ProductConfiguration {
                category: Some(ElevatorCategory::Home),
                floors: Some(floors),
                speed: "2.5".into(),
                capacity: "1250".into(),
                ..ProductConfiguration::default()
            };
            let b = compute_price(&config, &rates).unwrap();
            assert_eq!(
                b.subtotal,
                b.equipment_amount + b.installation_amount + b.maintenance_amount
            );
            assert_eq!(b.grand_total, b.subtotal + b.tax1 + b.tax2);
        }
    }

    #[test]
    fn missing_category_and_floors_not_computable() {
        let rates = RateTable::default();
        let config = ProductConfiguration::default();
        match compute_price(&config, &rates) {
            Err(PricingError::Incomplete { missing }) => {
                assert_eq!(missing, vec!["category", "floors"]);
            }
            other => panic!("expected Incomplete, got {:?}", other),
        }
    }

    #[test]
    fn missing_floors_only_reports_floors() {
        let rates = RateTable::default();
        let config = ProductConfiguration {
            category: Some(ElevatorCategory::Home),
            ..ProductConfiguration::default()
        };
        match compute_price(&config, &rates) {
            Err(PricingError::Incomplete { missing }) => assert_eq!(missing, vec!["floors"]),
            other => panic!("expected Incomplete, got {:?}", other),
        }
    }

    #[test]
    fn single_floor_rejected() {
        let rates = RateTable::default();
        let config = ProductConfiguration {
            category: Some(ElevatorCategory::Home),
            floors: Some(1),
            ..ProductConfiguration::default()
        };
        assert_eq!(
            compute_price(&config, &rates),
            Err(PricingError::FloorCountTooLow(1))
        );
    }

    #[test]
    fn unknown_category_prices_with_neutral_multiplier() {
        let rates = RateTable::default();
        let config = ProductConfiguration {
            category: Some(ElevatorCategory::Custom("hospital".into())),
            floors: Some(4),
            ..ProductConfiguration::default()
        };
        let b = compute_price(&config, &rates).unwrap();
        assert_eq!(b.category_multiplier, 1.0);
        assert_eq!(
            b.equipment_amount,
            rates.base_amount + 4 * rates.per_floor_amount
        );
    }

    #[test]
    fn unselected_speed_and_capacity_add_nothing() {
        let rates = RateTable::default();
        let config = ProductConfiguration {
            category: Some(ElevatorCategory::Shaftless),
            floors: Some(3),
            ..ProductConfiguration::default()
        };
        let b = compute_price(&config, &rates).unwrap();
        assert_eq!(b.speed_adder, 0);
        assert_eq!(b.capacity_adder, 0);
    }

    #[test]
    fn excluded_installation_and_zero_maintenance() {
        let rates = RateTable::default();
        let config = ProductConfiguration {
            category: Some(ElevatorCategory::WithShaft),
            floors: Some(6),
            installation_included: false,
            maintenance_years: 0,
            ..ProductConfiguration::default()
        };
        let b = compute_price(&config, &rates).unwrap();
        assert_eq!(b.installation_amount, 0);
        assert_eq!(b.maintenance_amount, 0);
        assert_eq!(b.subtotal, b.equipment_amount);
    }
}
