//! Quotation state: customer block + configuration + maintained pricing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::compute_price;
use crate::rates::RateTable;
use crate::types::{PriceBreakdown, PricingError, ProductConfiguration};

/// Customer contact details captured in the first wizard step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerInfo {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phone: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub company: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,
}

/// A quotation under construction or on file.
///
/// `pricing` is derived state: it is only ever written by [`Quotation::recompute`],
/// which callers invoke synchronously after each configuration change. While
/// the configuration is not computable the field stays `None` -- a missing
/// breakdown, never a zero one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quotation {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub customer: CustomerInfo,

    #[serde(default)]
    pub config: ProductConfiguration,

    #[serde(default, skip_serializing_if = "String::is_empty", rename = "special-requirements")]
    pub special_requirements: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<PriceBreakdown>,

    #[serde(default = "Utc::now", rename = "created-at")]
    pub created_at: DateTime<Utc>,

    #[serde(default = "Utc::now", rename = "updated-at")]
    pub updated_at: DateTime<Utc>,
}

impl Quotation {
    /// Creates an unpriced quotation for a customer.
    pub fn new(id: impl Into<String>, customer: CustomerInfo) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            customer,
            config: ProductConfiguration::default(),
            special_requirements: String::new(),
            notes: String::new(),
            pricing: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Re-derives `pricing` from the current configuration.
    ///
    /// Idempotent; safe to call after every field edit. On any pricing
    /// error the stored breakdown is cleared so stale totals can never be
    /// shown against a changed configuration.
    pub fn recompute(&mut self, rates: &RateTable) -> Result<(), PricingError> {
        match compute_price(&self.config, rates) {
            Ok(breakdown) => {
                self.pricing = Some(breakdown);
                self.updated_at = Utc::now();
                Ok(())
            }
            Err(e) => {
                self.pricing = None;
                self.updated_at = Utc::now();
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ElevatorCategory;

    fn priced_quotation() -> Quotation {
        let mut q = Quotation::new("qt-1", CustomerInfo::default());
        q.config.category = Some(ElevatorCategory::Home);
        q.config.floors = Some(3);
        q
    }

    #[test]
    fn recompute_sets_pricing_when_computable() {
        let rates = RateTable::default();
        let mut q = priced_quotation();
        q.recompute(&rates).unwrap();
        assert!(q.pricing.is_some());
    }

    #[test]
    fn recompute_is_idempotent() {
        let rates = RateTable::default();
        let mut q = priced_quotation();
        q.recompute(&rates).unwrap();
        let first = q.pricing.clone();
        q.recompute(&rates).unwrap();
        assert_eq!(q.pricing, first);
    }

    #[test]
    fn recompute_clears_pricing_when_field_removed() {
        let rates = RateTable::default();
        let mut q = priced_quotation();
        q.recompute(&rates).unwrap();
        assert!(q.pricing.is_some());

        q.config.floors = None;
        let err = q.recompute(&rates).unwrap_err();
        assert!(err.is_incomplete());
        assert!(q.pricing.is_none());
    }

    #[test]
    fn incomplete_quotation_never_holds_a_breakdown() {
        let rates = RateTable::default();
        let mut q = Quotation::new("qt-2", CustomerInfo::default());
        assert!(q.recompute(&rates).is_err());
        assert!(q.pricing.is_none());
    }
}
