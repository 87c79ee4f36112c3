//! Stage machine: the legal transitions of an opportunity.
//!
//! Any non-terminal stage may move to any other stage, including directly
//! to `won` or `lost` -- the board is free-form, not a linear gate. The
//! only rule enforced beyond that is the terminal lock: nothing moves out
//! of `won` or `lost`, and entering either pins the probability.

use serde::{Deserialize, Serialize};

use crate::enums::Stage;
use crate::opportunity::Opportunity;

/// Emitted on every applied transition; consumed by the board controller
/// to trigger re-partition and by conversion eligibility checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageChange {
    pub id: String,
    pub from: Stage,
    pub to: Stage,
    /// Probability after the transition.
    pub probability: u8,
}

/// Why a transition was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    /// The opportunity already reached a terminal outcome.
    #[error("opportunity is {from} and cannot change stage")]
    Terminal { from: Stage },
}

/// Applies a stage transition to an opportunity.
///
/// On entering `won` the probability is set to 100; on entering `lost` it
/// is set to 0; every other move leaves it untouched. A move to the
/// current stage is permitted and reported as a change event -- downstream
/// re-partitioning is idempotent.
pub fn transition(
    opportunity: &mut Opportunity,
    target: Stage,
) -> Result<StageChange, TransitionError> {
    let from = opportunity.stage;
    if from.is_terminal() {
        return Err(TransitionError::Terminal { from });
    }

    opportunity.stage = target;
    match target {
        Stage::Won => opportunity.probability = 100,
        Stage::Lost => opportunity.probability = 0,
        _ => {}
    }
    opportunity.updated_at = chrono::Utc::now();

    Ok(StageChange {
        id: opportunity.id.clone(),
        from,
        to: target,
        probability: opportunity.probability,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opportunity::OpportunityBuilder;

    fn proposal_deal() -> Opportunity {
        OpportunityBuilder::new("Shopping Mall Expansion")
            .id("op-m4ll")
            .stage(Stage::Proposal)
            .probability(50)
            .build()
    }

    #[test]
    fn forward_move_keeps_probability() {
        let mut opp = proposal_deal();
        let change = transition(&mut opp, Stage::Negotiation).unwrap();
        assert_eq!(opp.stage, Stage::Negotiation);
        assert_eq!(opp.probability, 50);
        assert_eq!(change.from, Stage::Proposal);
        assert_eq!(change.to, Stage::Negotiation);
    }

    #[test]
    fn backward_move_is_legal() {
        let mut opp = proposal_deal();
        transition(&mut opp, Stage::Lead).unwrap();
        assert_eq!(opp.stage, Stage::Lead);
        assert_eq!(opp.probability, 50);
    }

    #[test]
    fn entering_won_locks_probability_to_100() {
        let mut opp = proposal_deal();
        let change = transition(&mut opp, Stage::Won).unwrap();
        assert_eq!(opp.probability, 100);
        assert_eq!(change.probability, 100);
    }

    #[test]
    fn entering_lost_locks_probability_to_0() {
        let mut opp = proposal_deal();
        transition(&mut opp, Stage::Lost).unwrap();
        assert_eq!(opp.probability, 0);
    }

    #[test]
    fn direct_jump_from_lead_to_won_is_legal() {
        let mut opp = OpportunityBuilder::new("Walk-in order")
            .stage(Stage::Lead)
            .build();
        transition(&mut opp, Stage::Won).unwrap();
        assert_eq!(opp.stage, Stage::Won);
        assert_eq!(opp.probability, 100);
    }

    #[test]
    fn terminal_stages_refuse_transitions() {
        for terminal in [Stage::Won, Stage::Lost] {
            let mut opp = proposal_deal();
            transition(&mut opp, terminal).unwrap();
            let err = transition(&mut opp, Stage::Lead).unwrap_err();
            assert_eq!(err, TransitionError::Terminal { from: terminal });
            // State untouched by the refused move.
            assert_eq!(opp.stage, terminal);
        }
    }

    #[test]
    fn same_stage_move_is_reported_not_refused() {
        let mut opp = proposal_deal();
        let change = transition(&mut opp, Stage::Proposal).unwrap();
        assert_eq!(change.from, Stage::Proposal);
        assert_eq!(change.to, Stage::Proposal);
        assert_eq!(opp.probability, 50);
    }
}
