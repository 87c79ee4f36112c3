//! Opportunity struct -- the central domain model of the sales pipeline.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::Stage;

/// Helper for `skip_serializing_if` on `u8` probability (0 is valid, never skip).
fn never_skip(_p: &u8) -> bool {
    false
}

/// A tracked sales prospect progressing toward a won or lost outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub company: String,

    // ===== Contact =====
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub contact_person: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phone: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,

    // ===== Deal =====
    /// Deal value in integer currency units.
    #[serde(default)]
    pub amount: i64,

    /// Free-text product summary, e.g. "8-Floor Passenger Elevator".
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub product_summary: String,

    #[serde(default)]
    pub stage: Stage,

    /// Win probability 0-100. Locked to 100/0 in the won/lost stages,
    /// advisory everywhere else.
    #[serde(default, skip_serializing_if = "never_skip")]
    pub probability: u8,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_close: Option<NaiveDate>,

    /// Salesperson responsible for the deal.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub owner: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,

    // ===== Timestamps =====
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Default for Opportunity {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            title: String::new(),
            company: String::new(),
            contact_person: String::new(),
            phone: String::new(),
            email: String::new(),
            amount: 0,
            product_summary: String::new(),
            stage: Stage::Lead,
            probability: Stage::Lead.default_probability(),
            expected_close: None,
            owner: String::new(),
            notes: String::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Builder for constructing an [`Opportunity`] with a fluent API.
pub struct OpportunityBuilder {
    opportunity: Opportunity,
}

impl OpportunityBuilder {
    /// Creates a new builder with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        let mut opportunity = Opportunity::default();
        opportunity.title = title.into();
        Self { opportunity }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.opportunity.id = id.into();
        self
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.opportunity.company = company.into();
        self
    }

    pub fn contact_person(mut self, contact: impl Into<String>) -> Self {
        self.opportunity.contact_person = contact.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.opportunity.phone = phone.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.opportunity.email = email.into();
        self
    }

    pub fn amount(mut self, amount: i64) -> Self {
        self.opportunity.amount = amount;
        self
    }

    pub fn product_summary(mut self, summary: impl Into<String>) -> Self {
        self.opportunity.product_summary = summary.into();
        self
    }

    /// Sets the stage and its advisory default probability together.
    pub fn stage(mut self, stage: Stage) -> Self {
        self.opportunity.stage = stage;
        self.opportunity.probability = stage.default_probability();
        self
    }

    pub fn probability(mut self, probability: u8) -> Self {
        self.opportunity.probability = probability;
        self
    }

    pub fn expected_close(mut self, date: NaiveDate) -> Self {
        self.opportunity.expected_close = Some(date);
        self
    }

    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.opportunity.owner = owner.into();
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.opportunity.notes = notes.into();
        self
    }

    pub fn created_at(mut self, t: DateTime<Utc>) -> Self {
        self.opportunity.created_at = t;
        self
    }

    /// Consumes the builder and returns the constructed [`Opportunity`].
    pub fn build(self) -> Opportunity {
        self.opportunity
    }
}
