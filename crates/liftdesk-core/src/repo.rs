//! Repository abstraction over the opportunity collection.
//!
//! The core depends on this trait rather than on a concrete store so the
//! in-process backends can be swapped for a real database later. The
//! collection behind the trait is the single source of truth; board views
//! and aggregates are always re-derived from `list()`.

use chrono::NaiveDate;

use crate::opportunity::Opportunity;

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The requested entity was not found.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// The kind of entity (e.g., "opportunity", "lead").
        entity: String,
        /// The identifier that was looked up.
        id: String,
    },

    /// A record failed a store-side constraint.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Reading or writing the backing file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Catch-all for unexpected internal errors.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Convenience alias used by stores and their consumers.
pub type Result<T> = std::result::Result<T, StoreError>;

impl StoreError {
    /// Creates a [`StoreError::NotFound`] for the given entity kind and id.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Creates a [`StoreError::Validation`] with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Returns `true` if this is a [`StoreError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Storage interface for the canonical opportunity collection.
///
/// The full record list is available at load time -- there is no partial
/// or paginated read. Implementations must keep each method atomic with
/// respect to concurrent readers.
pub trait OpportunityStore: Send + Sync {
    /// Returns every opportunity on record.
    fn list(&self) -> Result<Vec<Opportunity>>;

    /// Retrieves one opportunity by id.
    fn get(&self, id: &str) -> Result<Opportunity>;

    /// Inserts or replaces an opportunity keyed by its id.
    fn upsert(&self, opportunity: &Opportunity) -> Result<()>;

    /// Permanently removes an opportunity. Removal is an explicit
    /// destructive action; callers confirm before invoking this.
    fn remove(&self, id: &str) -> Result<()>;
}

/// Typed partial-update struct for opportunities.
///
/// Only `Some` fields are applied; `None` fields are left unchanged.
/// Double-`Option` fields distinguish "leave alone" from "clear".
#[derive(Debug, Clone, Default)]
pub struct OpportunityUpdates {
    pub title: Option<String>,
    pub company: Option<String>,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub amount: Option<i64>,
    pub product_summary: Option<String>,
    pub probability: Option<u8>,
    pub expected_close: Option<Option<NaiveDate>>,
    pub owner: Option<String>,
    pub notes: Option<String>,
}

impl OpportunityUpdates {
    /// Returns `true` when no field would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.company.is_none()
            && self.contact_person.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.amount.is_none()
            && self.product_summary.is_none()
            && self.probability.is_none()
            && self.expected_close.is_none()
            && self.owner.is_none()
            && self.notes.is_none()
    }

    /// Applies the set fields to an opportunity and bumps `updated_at`.
    pub fn apply_to(&self, opportunity: &mut Opportunity) {
        if let Some(ref title) = self.title {
            opportunity.title = title.clone();
        }
        if let Some(ref company) = self.company {
            opportunity.company = company.clone();
        }
        if let Some(ref contact) = self.contact_person {
            opportunity.contact_person = contact.clone();
        }
        if let Some(ref phone) = self.phone {
            opportunity.phone = phone.clone();
        }
        if let Some(ref email) = self.email {
            opportunity.email = email.clone();
        }
        if let Some(amount) = self.amount {
            opportunity.amount = amount;
        }
        if let Some(ref summary) = self.product_summary {
            opportunity.product_summary = summary.clone();
        }
        if let Some(probability) = self.probability {
            opportunity.probability = probability;
        }
        if let Some(expected_close) = self.expected_close {
            opportunity.expected_close = expected_close;
        }
        if let Some(ref owner) = self.owner {
            opportunity.owner = owner.clone();
        }
        if let Some(ref notes) = self.notes {
            opportunity.notes = notes.clone();
        }
        opportunity.updated_at = chrono::Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opportunity::OpportunityBuilder;

    #[test]
    fn not_found_predicate() {
        let err = StoreError::not_found("opportunity", "op-zzz");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "opportunity not found: op-zzz");

        let other = StoreError::validation("bad record");
        assert!(!other.is_not_found());
    }

    #[test]
    fn empty_updates_change_nothing_but_timestamp() {
        let mut opp = OpportunityBuilder::new("Deal").amount(10).build();
        let before = opp.clone();
        let updates = OpportunityUpdates::default();
        assert!(updates.is_empty());
        updates.apply_to(&mut opp);
        assert_eq!(opp.title, before.title);
        assert_eq!(opp.amount, before.amount);
    }

    #[test]
    fn updates_apply_selected_fields() {
        let mut opp = OpportunityBuilder::new("Deal").amount(10).owner("a").build();
        let updates = OpportunityUpdates {
            amount: Some(2_000_000),
            owner: Some("b".into()),
            expected_close: Some(None),
            ..OpportunityUpdates::default()
        };
        assert!(!updates.is_empty());
        updates.apply_to(&mut opp);
        assert_eq!(opp.amount, 2_000_000);
        assert_eq!(opp.owner, "b");
        assert_eq!(opp.expected_close, None);
        assert_eq!(opp.title, "Deal");
    }
}
