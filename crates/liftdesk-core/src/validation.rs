//! Opportunity validation rules.

use crate::enums::Stage;
use crate::opportunity::Opportunity;

/// Error type for validation failures.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("title is required")]
    TitleRequired,

    #[error("title must be 200 characters or less (got {0})")]
    TitleTooLong(usize),

    #[error("amount cannot be negative (got {0})")]
    NegativeAmount(i64),

    #[error("probability must be between 0 and 100 (got {0})")]
    InvalidProbability(u8),

    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("won opportunities must have probability 100 (got {0})")]
    WonProbabilityMismatch(u8),

    #[error("lost opportunities must have probability 0 (got {0})")]
    LostProbabilityMismatch(u8),
}

/// Validates an opportunity record.
pub fn validate(opportunity: &Opportunity) -> Result<(), ValidationError> {
    if opportunity.title.is_empty() {
        return Err(ValidationError::TitleRequired);
    }
    if opportunity.title.len() > 200 {
        return Err(ValidationError::TitleTooLong(opportunity.title.len()));
    }
    if opportunity.amount < 0 {
        return Err(ValidationError::NegativeAmount(opportunity.amount));
    }
    if opportunity.probability > 100 {
        return Err(ValidationError::InvalidProbability(opportunity.probability));
    }
    // Light-touch email check; full address validation is not our business.
    if !opportunity.email.is_empty() && !opportunity.email.contains('@') {
        return Err(ValidationError::InvalidEmail(opportunity.email.clone()));
    }
    // Terminal-stage probability locks.
    if opportunity.stage == Stage::Won && opportunity.probability != 100 {
        return Err(ValidationError::WonProbabilityMismatch(
            opportunity.probability,
        ));
    }
    if opportunity.stage == Stage::Lost && opportunity.probability != 0 {
        return Err(ValidationError::LostProbabilityMismatch(
            opportunity.probability,
        ));
    }

    Ok(())
}
