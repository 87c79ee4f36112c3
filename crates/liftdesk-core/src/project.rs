//! Conversion workflow: a won opportunity becomes a project draft.

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{ProjectStatus, Stage};
use crate::idgen;
use crate::opportunity::Opportunity;

/// Days between draft creation and the default installation start.
const DEFAULT_START_OFFSET_DAYS: u64 = 7;
/// Days between draft creation and the default target completion.
const DEFAULT_COMPLETION_OFFSET_DAYS: u64 = 60;

/// The staffing/scheduling record minted from a won opportunity.
///
/// Constructed only through [`ProjectDraft::from_opportunity`]; the
/// defaults are user-editable before the draft is committed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDraft {
    #[serde(default)]
    pub name: String,

    /// `PRJ-<year>-<3 digits>`; best-effort unique, no collision check.
    #[serde(default)]
    pub code: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub team_leader: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub team_members: Vec<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub site_address: String,

    // ===== Contact (inherited from the opportunity unless overridden) =====
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub contact_person: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub contact_phone: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub contact_email: String,

    // ===== Schedule =====
    pub start_date: NaiveDate,

    pub completion_date: NaiveDate,

    // ===== Free text =====
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub specifications: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub special_requirements: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub handover_notes: String,

    // ===== Provenance =====
    #[serde(default)]
    pub source_opportunity: String,

    /// Contract value inherited from the won deal.
    #[serde(default)]
    pub amount: i64,

    #[serde(default)]
    pub status: ProjectStatus,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

/// The conversion was refused outright.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Only won opportunities are eligible for conversion.
    #[error("opportunity is {stage}, only won opportunities can be converted")]
    NotWon { stage: Stage },
}

/// A single field-level problem blocking draft submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("project name is required")]
    NameRequired,

    #[error("a team leader must be assigned")]
    LeaderRequired,

    #[error("at least one team member must be selected")]
    MembersRequired,

    #[error("site address is required")]
    SiteAddressRequired,

    #[error("start date {start} is after completion date {completion}")]
    DatesReversed {
        start: NaiveDate,
        completion: NaiveDate,
    },
}

impl ProjectDraft {
    /// Drafts a project from a won opportunity.
    ///
    /// Fails with [`ConversionError::NotWon`] for any other stage and
    /// produces nothing partial. Each call mints an independent draft with
    /// its own code -- converting the same deal twice is permitted and NOT
    /// deduplicated.
    pub fn from_opportunity(
        opportunity: &Opportunity,
        today: NaiveDate,
    ) -> Result<Self, ConversionError> {
        if opportunity.stage != Stage::Won {
            return Err(ConversionError::NotWon {
                stage: opportunity.stage,
            });
        }

        let now = Utc::now();
        let product = if opportunity.product_summary.is_empty() {
            "Elevator".to_owned()
        } else {
            opportunity.product_summary.clone()
        };

        Ok(Self {
            name: format!("{} - {} Installation", opportunity.company, product),
            code: idgen::generate_project_code(&opportunity.company, now, 0),
            team_leader: String::new(),
            team_members: Vec::new(),
            site_address: String::new(),
            contact_person: opportunity.contact_person.clone(),
            contact_phone: opportunity.phone.clone(),
            contact_email: opportunity.email.clone(),
            start_date: today + Days::new(DEFAULT_START_OFFSET_DAYS),
            completion_date: today + Days::new(DEFAULT_COMPLETION_OFFSET_DAYS),
            specifications: String::new(),
            special_requirements: String::new(),
            handover_notes: String::new(),
            source_opportunity: opportunity.id.clone(),
            amount: opportunity.amount,
            status: ProjectStatus::Planning,
            created_at: now,
        })
    }

    /// Checks the draft against the submission rules.
    ///
    /// Returns EVERY violated rule, not just the first, so the caller can
    /// report all failing fields in one pass. An empty vec means the draft
    /// may be committed.
    pub fn validate(&self) -> Vec<DraftError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(DraftError::NameRequired);
        }
        if self.team_leader.trim().is_empty() {
            errors.push(DraftError::LeaderRequired);
        }
        if self.team_members.is_empty() {
            errors.push(DraftError::MembersRequired);
        }
        if self.site_address.trim().is_empty() {
            errors.push(DraftError::SiteAddressRequired);
        }
        if self.start_date > self.completion_date {
            errors.push(DraftError::DatesReversed {
                start: self.start_date,
                completion: self.completion_date,
            });
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opportunity::OpportunityBuilder;

    fn won_deal() -> Opportunity {
        OpportunityBuilder::new("Sunrise Mall")
            .id("op-sunr")
            .company("Sunrise Mall Pvt Ltd")
            .amount(4_500_000)
            .product_summary("15-Floor Passenger Elevator")
            .stage(Stage::Won)
            .contact_person("John Smith")
            .phone("+91 9876543215")
            .email("john@sunrisemall.com")
            .build()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 18).unwrap()
    }

    #[test]
    fn draft_inherits_and_defaults() {
        let draft = ProjectDraft::from_opportunity(&won_deal(), today()).unwrap();

        assert_eq!(
            draft.name,
            "Sunrise Mall Pvt Ltd - 15-Floor Passenger Elevator Installation"
        );
        assert_eq!(draft.contact_person, "John Smith");
        assert_eq!(draft.contact_email, "john@sunrisemall.com");
        assert_eq!(draft.amount, 4_500_000);
        assert_eq!(draft.source_opportunity, "op-sunr");
        assert_eq!(draft.status, ProjectStatus::Planning);
        assert_eq!(draft.start_date, NaiveDate::from_ymd_opt(2024, 10, 25).unwrap());
        assert_eq!(
            draft.completion_date,
            NaiveDate::from_ymd_opt(2024, 12, 17).unwrap()
        );
        assert!(draft.code.starts_with("PRJ-"));
    }

    #[test]
    fn non_won_stages_are_ineligible() {
        for stage in [Stage::Lead, Stage::Qualified, Stage::Proposal, Stage::Negotiation, Stage::Lost]
        {
            let mut opp = won_deal();
            opp.stage = stage;
            opp.probability = stage.default_probability();
            let err = ProjectDraft::from_opportunity(&opp, today()).unwrap_err();
            assert_eq!(err, ConversionError::NotWon { stage });
        }
    }

    #[test]
    fn double_conversion_yields_independent_drafts() {
        let opp = won_deal();
        let a = ProjectDraft::from_opportunity(&opp, today()).unwrap();
        let b = ProjectDraft::from_opportunity(&opp, today()).unwrap();
        // Same source, separate records; codes only differ when the clock
        // ticks between calls, which is not guaranteed here.
        assert_eq!(a.source_opportunity, b.source_opportunity);
        assert_eq!(a.name, b.name);
    }

    #[test]
    fn fresh_draft_reports_all_missing_fields() {
        let draft = ProjectDraft::from_opportunity(&won_deal(), today()).unwrap();
        let errors = draft.validate();
        assert_eq!(
            errors,
            vec![
                DraftError::LeaderRequired,
                DraftError::MembersRequired,
                DraftError::SiteAddressRequired,
            ]
        );
    }

    #[test]
    fn staffed_draft_validates_clean() {
        let mut draft = ProjectDraft::from_opportunity(&won_deal(), today()).unwrap();
        draft.team_leader = "Arun Kumar".into();
        draft.team_members = vec!["Ravi Krishnan".into(), "Manoj Kumar".into()];
        draft.site_address = "MG Road, Kochi".into();
        assert!(draft.validate().is_empty());
    }

    #[test]
    fn reversed_dates_are_reported() {
        let mut draft = ProjectDraft::from_opportunity(&won_deal(), today()).unwrap();
        draft.team_leader = "Arun Kumar".into();
        draft.team_members = vec!["Ravi Krishnan".into()];
        draft.site_address = "MG Road, Kochi".into();
        draft.completion_date = draft.start_date - Days::new(1);

        let errors = draft.validate();
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], DraftError::DatesReversed { .. }));
    }

    #[test]
    fn draft_serde_roundtrip() {
        let mut draft = ProjectDraft::from_opportunity(&won_deal(), today()).unwrap();
        draft.team_leader = "Deepak Singh".into();
        draft.team_members = vec!["Vinod Thomas".into()];
        draft.site_address = "Marine Drive".into();

        let json = serde_json::to_string(&draft).unwrap();
        let back: ProjectDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(back, draft);
    }
}
