//! Output formatting helpers for the `liftdesk` CLI.
//!
//! JSON view models plus human-readable detail rendering shared by the
//! opportunity commands.

use serde::Serialize;

use liftdesk_core::opportunity::Opportunity;
use liftdesk_ui::{money, styles};

/// Serializes a value as pretty JSON to stdout.
pub fn output_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("failed to serialize output: {e}"),
    }
}

/// A view model for JSON output of opportunities.
///
/// Field names follow the external adapter contract: timestamps are
/// ISO 8601 strings named `created`/`updated`, empty optional fields are
/// omitted.
#[derive(Serialize)]
pub struct OpportunityView {
    pub id: String,
    pub title: String,
    pub stage: String,
    pub amount: i64,
    pub probability: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_close: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    pub created: String,
    pub updated: String,
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() { None } else { Some(s.to_owned()) }
}

impl OpportunityView {
    /// Build a view from an [`Opportunity`].
    pub fn from_opportunity(opportunity: &Opportunity) -> Self {
        Self {
            id: opportunity.id.clone(),
            title: opportunity.title.clone(),
            stage: opportunity.stage.as_str().to_owned(),
            amount: opportunity.amount,
            probability: opportunity.probability,
            company: non_empty(&opportunity.company),
            contact_person: non_empty(&opportunity.contact_person),
            phone: non_empty(&opportunity.phone),
            email: non_empty(&opportunity.email),
            product: non_empty(&opportunity.product_summary),
            expected_close: opportunity.expected_close.map(|d| d.to_string()),
            owner: non_empty(&opportunity.owner),
            created: opportunity.created_at.to_rfc3339(),
            updated: opportunity.updated_at.to_rfc3339(),
        }
    }
}

/// Prints the multi-line detail view of an opportunity.
pub fn print_opportunity_detail(opportunity: &Opportunity) {
    println!("{}", styles::render_bold(&opportunity.title));
    println!("  ID:          {}", opportunity.id);
    println!("  Stage:       {}", styles::render_stage(opportunity.stage));
    println!("  Amount:      {}", money::format_inr(opportunity.amount));
    println!(
        "  Probability: {}",
        styles::render_probability(opportunity.probability)
    );
    if !opportunity.company.is_empty() {
        println!("  Company:     {}", opportunity.company);
    }
    if !opportunity.contact_person.is_empty() {
        println!("  Contact:     {}", opportunity.contact_person);
    }
    if !opportunity.phone.is_empty() {
        println!("  Phone:       {}", opportunity.phone);
    }
    if !opportunity.email.is_empty() {
        println!("  Email:       {}", opportunity.email);
    }
    if !opportunity.product_summary.is_empty() {
        println!("  Product:     {}", opportunity.product_summary);
    }
    if let Some(close) = opportunity.expected_close {
        println!("  Close date:  {close}");
    }
    if !opportunity.owner.is_empty() {
        println!("  Owner:       {}", opportunity.owner);
    }
    if !opportunity.notes.is_empty() {
        println!("  Notes:       {}", opportunity.notes);
    }
    println!(
        "  Updated:     {}",
        styles::render_muted(&opportunity.updated_at.to_rfc3339())
    );
}
