//! Lead capture and promotion into the pipeline.
//!
//! A lead is a raw inbound contact. It becomes part of the pipeline only
//! when promoted, which mints an [`Opportunity`] in the `lead` stage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{LeadSource, LeadStatus, Stage};
use crate::opportunity::{Opportunity, OpportunityBuilder};

/// An inbound sales contact awaiting qualification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phone: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub company: String,

    #[serde(default)]
    pub source: LeadSource,

    #[serde(default)]
    pub status: LeadStatus,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub assigned_to: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Default for Lead {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            company: String::new(),
            source: LeadSource::default(),
            status: LeadStatus::New,
            assigned_to: String::new(),
            notes: String::new(),
            created_at: Utc::now(),
        }
    }
}

impl Lead {
    /// Creates a lead with the required capture fields.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        source: LeadSource,
        assigned_to: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            source,
            assigned_to: assigned_to.into(),
            ..Self::default()
        }
    }

    /// Mints an opportunity from this lead.
    ///
    /// The new opportunity starts in the `lead` stage with the advisory
    /// default probability; contact details carry over. The lead itself is
    /// not consumed -- callers mark it [`LeadStatus::Qualified`] and keep
    /// it on file.
    pub fn promote(
        &self,
        opportunity_id: impl Into<String>,
        title: impl Into<String>,
        amount: i64,
        product_summary: impl Into<String>,
    ) -> Opportunity {
        OpportunityBuilder::new(title)
            .id(opportunity_id)
            .company(if self.company.is_empty() {
                self.name.clone()
            } else {
                self.company.clone()
            })
            .contact_person(self.name.clone())
            .phone(self.phone.clone())
            .email(self.email.clone())
            .amount(amount)
            .product_summary(product_summary)
            .stage(Stage::Lead)
            .owner(self.assigned_to.clone())
            .build()
    }
}
