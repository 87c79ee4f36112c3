//! In-memory opportunity store.

use std::collections::BTreeMap;
use std::sync::RwLock;

use liftdesk_core::opportunity::Opportunity;
use liftdesk_core::repo::{OpportunityStore, Result, StoreError};

/// A store that keeps the collection in process memory.
///
/// Insertion order is not preserved; records come back in id order, which
/// keeps `list()` deterministic for the board partition.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<BTreeMap<String, Opportunity>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with an initial collection.
    pub fn with_records(records: impl IntoIterator<Item = Opportunity>) -> Self {
        let map = records.into_iter().map(|o| (o.id.clone(), o)).collect();
        Self {
            records: RwLock::new(map),
        }
    }

    fn read_guard(&self) -> Result<std::sync::RwLockReadGuard<'_, BTreeMap<String, Opportunity>>> {
        self.records
            .read()
            .map_err(|_| StoreError::Internal("store lock poisoned".into()))
    }

    fn write_guard(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, BTreeMap<String, Opportunity>>> {
        self.records
            .write()
            .map_err(|_| StoreError::Internal("store lock poisoned".into()))
    }
}

impl OpportunityStore for MemoryStore {
    fn list(&self) -> Result<Vec<Opportunity>> {
        Ok(self.read_guard()?.values().cloned().collect())
    }

    fn get(&self, id: &str) -> Result<Opportunity> {
        self.read_guard()?
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("opportunity", id))
    }

    fn upsert(&self, opportunity: &Opportunity) -> Result<()> {
        if opportunity.id.is_empty() {
            return Err(StoreError::validation("opportunity id must not be empty"));
        }
        self.write_guard()?
            .insert(opportunity.id.clone(), opportunity.clone());
        Ok(())
    }

    fn remove(&self, id: &str) -> Result<()> {
        match self.write_guard()?.remove(id) {
            Some(_) => Ok(()),
            None => Err(StoreError::not_found("opportunity", id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use liftdesk_core::enums::Stage;
    use liftdesk_core::opportunity::OpportunityBuilder;

    fn deal(id: &str, stage: Stage) -> Opportunity {
        OpportunityBuilder::new(format!("Deal {id}"))
            .id(id)
            .stage(stage)
            .amount(1_000_000)
            .build()
    }

    #[test]
    fn upsert_then_get() {
        let store = MemoryStore::new();
        store.upsert(&deal("op-a", Stage::Lead)).unwrap();

        let got = store.get("op-a").unwrap();
        assert_eq!(got.title, "Deal op-a");
    }

    #[test]
    fn get_unknown_is_not_found() {
        let store = MemoryStore::new();
        let err = store.get("op-x").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn upsert_replaces_existing() {
        let store = MemoryStore::new();
        store.upsert(&deal("op-a", Stage::Lead)).unwrap();

        let mut updated = deal("op-a", Stage::Won);
        updated.amount = 2_000_000;
        store.upsert(&updated).unwrap();

        assert_eq!(store.list().unwrap().len(), 1);
        assert_eq!(store.get("op-a").unwrap().amount, 2_000_000);
    }

    #[test]
    fn upsert_empty_id_rejected() {
        let store = MemoryStore::new();
        let mut opp = deal("op-a", Stage::Lead);
        opp.id = String::new();
        assert!(matches!(
            store.upsert(&opp),
            Err(StoreError::Validation { .. })
        ));
    }

    #[test]
    fn remove_unknown_is_not_found() {
        let store = MemoryStore::with_records([deal("op-a", Stage::Lead)]);
        assert!(store.remove("op-b").unwrap_err().is_not_found());
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn list_is_id_ordered() {
        let store =
            MemoryStore::with_records([deal("op-c", Stage::Lead), deal("op-a", Stage::Won)]);
        let ids: Vec<_> = store.list().unwrap().into_iter().map(|o| o.id).collect();
        assert_eq!(ids, vec!["op-a", "op-c"]);
    }
}
