//! Pipeline board: the derived six-column view over the opportunity
//! collection, and the controller that owns the single mutation path.
//!
//! The board is never maintained incrementally. Every mutation goes back
//! to the store, and the column partition is rebuilt from the full record
//! list, so the view cannot drift from source truth.

use serde::Serialize;

use crate::enums::Stage;
use crate::opportunity::Opportunity;
use crate::repo::{OpportunityStore, StoreError};
use crate::stage::{self, StageChange, TransitionError};

/// One stage bucket of the board.
#[derive(Debug, Clone, Serialize)]
pub struct StageColumn {
    pub stage: Stage,
    pub opportunities: Vec<Opportunity>,
}

impl StageColumn {
    /// Number of opportunities in this column.
    pub fn count(&self) -> usize {
        self.opportunities.len()
    }

    /// Sum of deal amounts in this column.
    pub fn value(&self) -> i64 {
        self.opportunities.iter().map(|o| o.amount).sum()
    }
}

/// The six stage columns in fixed order.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineBoard {
    pub columns: Vec<StageColumn>,
}

impl PipelineBoard {
    /// Partitions a collection of opportunities into stage columns.
    ///
    /// Deterministic: columns follow [`Stage::ALL`] order and each column
    /// preserves the input order of its members. Total and disjoint by
    /// construction -- every opportunity lands in exactly the column
    /// matching its stage.
    pub fn organize(opportunities: &[Opportunity]) -> Self {
        let mut columns: Vec<StageColumn> = Stage::ALL
            .iter()
            .map(|&stage| StageColumn {
                stage,
                opportunities: Vec::new(),
            })
            .collect();

        for opportunity in opportunities {
            // Stage::ALL covers every enum value, so the find always hits.
            if let Some(column) = columns.iter_mut().find(|c| c.stage == opportunity.stage) {
                column.opportunities.push(opportunity.clone());
            }
        }

        Self { columns }
    }

    /// Returns the column for a stage.
    pub fn column(&self, stage: Stage) -> Option<&StageColumn> {
        self.columns.iter().find(|c| c.stage == stage)
    }

    /// Sum of open deal amounts: every stage except won and lost.
    pub fn total_pipeline_value(&self) -> i64 {
        self.columns
            .iter()
            .filter(|c| !c.stage.is_terminal())
            .map(StageColumn::value)
            .sum()
    }

    /// Sum of won deal amounts.
    pub fn won_value(&self) -> i64 {
        self.column(Stage::Won).map(StageColumn::value).unwrap_or(0)
    }

    /// Total number of opportunities on the board.
    pub fn total_count(&self) -> usize {
        self.columns.iter().map(StageColumn::count).sum()
    }
}

/// Why a board operation failed.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// The opportunity id is unknown; the board was left unchanged.
    #[error("opportunity not found: {0}")]
    NotFound(String),

    /// The stage machine refused the move.
    #[error(transparent)]
    Transition(#[from] TransitionError),

    /// The underlying store failed.
    #[error(transparent)]
    Store(StoreError),
}

/// Owns the canonical collection through an injected store and derives
/// the board view on demand.
pub struct BoardController<S: OpportunityStore> {
    store: S,
}

impl<S: OpportunityStore> BoardController<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access to the underlying store for non-board operations.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Rebuilds the board from the full record list.
    pub fn board(&self) -> Result<PipelineBoard, BoardError> {
        let opportunities = self.store.list().map_err(BoardError::Store)?;
        Ok(PipelineBoard::organize(&opportunities))
    }

    /// Moves one opportunity to a target stage.
    ///
    /// Lookup, transition and write-back form a single synchronous
    /// mutation path: either the store record reflects the new stage and
    /// the next `board()` call shows it, or nothing changed at all.
    pub fn move_stage(&self, id: &str, target: Stage) -> Result<StageChange, BoardError> {
        let mut opportunity = self.store.get(id).map_err(|e| {
            if e.is_not_found() {
                BoardError::NotFound(id.to_owned())
            } else {
                BoardError::Store(e)
            }
        })?;

        let change = stage::transition(&mut opportunity, target)?;
        self.store.upsert(&opportunity).map_err(BoardError::Store)?;

        tracing::debug!(
            id = %change.id,
            from = %change.from,
            to = %change.to,
            "stage moved"
        );
        Ok(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opportunity::OpportunityBuilder;
    use std::sync::RwLock;

    /// Minimal in-memory store for controller tests.
    struct VecStore {
        records: RwLock<Vec<Opportunity>>,
    }

    impl VecStore {
        fn new(records: Vec<Opportunity>) -> Self {
            Self {
                records: RwLock::new(records),
            }
        }
    }

    impl OpportunityStore for VecStore {
        fn list(&self) -> crate::repo::Result<Vec<Opportunity>> {
            Ok(self.records.read().expect("lock poisoned").clone())
        }

        fn get(&self, id: &str) -> crate::repo::Result<Opportunity> {
            self.records
                .read()
                .expect("lock poisoned")
                .iter()
                .find(|o| o.id == id)
                .cloned()
                .ok_or_else(|| StoreError::not_found("opportunity", id))
        }

        fn upsert(&self, opportunity: &Opportunity) -> crate::repo::Result<()> {
            let mut records = self.records.write().expect("lock poisoned");
            match records.iter_mut().find(|o| o.id == opportunity.id) {
                Some(existing) => *existing = opportunity.clone(),
                None => records.push(opportunity.clone()),
            }
            Ok(())
        }

        fn remove(&self, id: &str) -> crate::repo::Result<()> {
            let mut records = self.records.write().expect("lock poisoned");
            let before = records.len();
            records.retain(|o| o.id != id);
            if records.len() == before {
                return Err(StoreError::not_found("opportunity", id));
            }
            Ok(())
        }
    }

    fn one_per_stage() -> Vec<Opportunity> {
        Stage::ALL
            .iter()
            .enumerate()
            .map(|(i, &stage)| {
                OpportunityBuilder::new(format!("Deal {i}"))
                    .id(format!("op-{i}"))
                    .amount(1_000_000 + i as i64)
                    .stage(stage)
                    .build()
            })
            .collect()
    }

    #[test]
    fn organize_partitions_every_record_exactly_once() {
        let opportunities = one_per_stage();
        let board = PipelineBoard::organize(&opportunities);

        assert_eq!(board.columns.len(), 6);
        for column in &board.columns {
            assert_eq!(column.count(), 1, "stage {} should hold 1", column.stage);
        }
        assert_eq!(board.total_count(), opportunities.len());
    }

    #[test]
    fn organize_is_deterministic() {
        let opportunities = one_per_stage();
        let a = PipelineBoard::organize(&opportunities);
        let b = PipelineBoard::organize(&opportunities);
        for (ca, cb) in a.columns.iter().zip(&b.columns) {
            assert_eq!(ca.stage, cb.stage);
            let ids_a: Vec<_> = ca.opportunities.iter().map(|o| &o.id).collect();
            let ids_b: Vec<_> = cb.opportunities.iter().map(|o| &o.id).collect();
            assert_eq!(ids_a, ids_b);
        }
    }

    #[test]
    fn pipeline_value_excludes_terminal_stages() {
        let opportunities = one_per_stage();
        let board = PipelineBoard::organize(&opportunities);

        let open_sum: i64 = opportunities
            .iter()
            .filter(|o| !o.stage.is_terminal())
            .map(|o| o.amount)
            .sum();
        let won_sum: i64 = opportunities
            .iter()
            .filter(|o| o.stage == Stage::Won)
            .map(|o| o.amount)
            .sum();

        assert_eq!(board.total_pipeline_value(), open_sum);
        assert_eq!(board.won_value(), won_sum);
    }

    #[test]
    fn move_stage_repartitions_the_board() {
        let controller = BoardController::new(VecStore::new(one_per_stage()));

        let change = controller.move_stage("op-0", Stage::Proposal).unwrap();
        assert_eq!(change.from, Stage::Lead);
        assert_eq!(change.to, Stage::Proposal);

        let board = controller.board().unwrap();
        assert_eq!(board.column(Stage::Lead).unwrap().count(), 0);
        assert_eq!(board.column(Stage::Proposal).unwrap().count(), 2);
        assert_eq!(board.total_count(), 6);
    }

    #[test]
    fn move_stage_to_won_locks_probability() {
        let controller = BoardController::new(VecStore::new(one_per_stage()));
        let change = controller.move_stage("op-1", Stage::Won).unwrap();
        assert_eq!(change.probability, 100);

        let stored = controller.store().get("op-1").unwrap();
        assert_eq!(stored.stage, Stage::Won);
        assert_eq!(stored.probability, 100);
    }

    #[test]
    fn move_stage_unknown_id_is_not_found_and_board_unchanged() {
        let controller = BoardController::new(VecStore::new(one_per_stage()));
        let before = controller.board().unwrap();

        let err = controller.move_stage("op-missing", Stage::Won).unwrap_err();
        assert!(matches!(err, BoardError::NotFound(ref id) if id == "op-missing"));

        let after = controller.board().unwrap();
        for (ca, cb) in before.columns.iter().zip(&after.columns) {
            assert_eq!(ca.count(), cb.count());
            assert_eq!(ca.value(), cb.value());
        }
    }

    #[test]
    fn move_stage_out_of_terminal_is_refused() {
        let controller = BoardController::new(VecStore::new(one_per_stage()));
        // op-4 was built in the won stage.
        let err = controller.move_stage("op-4", Stage::Lead).unwrap_err();
        assert!(matches!(
            err,
            BoardError::Transition(TransitionError::Terminal { from: Stage::Won })
        ));
        let stored = controller.store().get("op-4").unwrap();
        assert_eq!(stored.stage, Stage::Won);
    }
}
