//! JSONL-file-backed stores.
//!
//! [`JsonlStore`] is the opportunity backend used by the CLI: the full
//! record list is read once at open (board-load semantics, no pagination)
//! and the whole file is rewritten after each mutation. [`RecordFile`] is
//! the simpler list codec shared by leads and projects.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use liftdesk_core::jsonl;
use liftdesk_core::opportunity::Opportunity;
use liftdesk_core::repo::{OpportunityStore, Result, StoreError};

fn jsonl_to_store_error(e: jsonl::JsonlError) -> StoreError {
    match e {
        jsonl::JsonlError::Io(io) => StoreError::Io(io),
        jsonl::JsonlError::Json { source, .. } => StoreError::Serialization(source),
    }
}

/// Reads every record from a JSONL file; a missing file is an empty list.
fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let reader = BufReader::new(File::open(path)?);
    jsonl::read_jsonl(reader)
        .collect::<jsonl::Result<Vec<T>>>()
        .map_err(jsonl_to_store_error)
}

/// Writes the full record list, replacing the file contents.
fn save_records<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    jsonl::write_jsonl(&mut writer, records).map_err(jsonl_to_store_error)
}

// ---------------------------------------------------------------------------
// JsonlStore
// ---------------------------------------------------------------------------

/// Opportunity store persisted as one JSON object per line.
pub struct JsonlStore {
    path: PathBuf,
    records: RwLock<Vec<Opportunity>>,
}

impl JsonlStore {
    /// Opens the store, loading the full record list.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let records = load_records(&path)?;
        debug!(path = %path.display(), count = records.len(), "opened opportunity store");
        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    fn persist(&self, records: &[Opportunity]) -> Result<()> {
        save_records(&self.path, records)?;
        debug!(path = %self.path.display(), count = records.len(), "persisted opportunity store");
        Ok(())
    }

    fn read_guard(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<Opportunity>>> {
        self.records
            .read()
            .map_err(|_| StoreError::Internal("store lock poisoned".into()))
    }

    fn write_guard(&self) -> Result<std::sync::RwLockWriteGuard<'_, Vec<Opportunity>>> {
        self.records
            .write()
            .map_err(|_| StoreError::Internal("store lock poisoned".into()))
    }
}

impl OpportunityStore for JsonlStore {
    fn list(&self) -> Result<Vec<Opportunity>> {
        Ok(self.read_guard()?.clone())
    }

    fn get(&self, id: &str) -> Result<Opportunity> {
        self.read_guard()?
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("opportunity", id))
    }

    fn upsert(&self, opportunity: &Opportunity) -> Result<()> {
        if opportunity.id.is_empty() {
            return Err(StoreError::validation("opportunity id must not be empty"));
        }
        let mut records = self.write_guard()?;
        match records.iter_mut().find(|o| o.id == opportunity.id) {
            Some(existing) => *existing = opportunity.clone(),
            None => records.push(opportunity.clone()),
        }
        self.persist(&records)
    }

    fn remove(&self, id: &str) -> Result<()> {
        let mut records = self.write_guard()?;
        let before = records.len();
        records.retain(|o| o.id != id);
        if records.len() == before {
            return Err(StoreError::not_found("opportunity", id));
        }
        self.persist(&records)
    }
}

// ---------------------------------------------------------------------------
// RecordFile
// ---------------------------------------------------------------------------

/// A JSONL-backed list of records without store semantics, used for leads
/// and committed projects.
pub struct RecordFile<T> {
    path: PathBuf,
    _record: PhantomData<T>,
}

impl<T: Serialize + DeserializeOwned + Clone> RecordFile<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    /// Loads every record; a missing file yields an empty list.
    pub fn load(&self) -> Result<Vec<T>> {
        load_records(&self.path)
    }

    /// Replaces the file with the given record list.
    pub fn save(&self, records: &[T]) -> Result<()> {
        save_records(&self.path, records)
    }

    /// Appends a single record, preserving existing contents.
    pub fn append(&self, record: &T) -> Result<()> {
        let mut records = self.load()?;
        records.push(record.clone());
        self.save(&records)
    }
}
