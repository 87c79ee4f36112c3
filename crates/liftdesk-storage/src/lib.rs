//! Storage backends for the liftdesk system.
//!
//! Implementations of [`liftdesk_core::repo::OpportunityStore`] plus the
//! JSONL-backed record files for leads and projects. The JSONL files stand
//! in for an external store: the full record list is loaded at open time
//! and written back after each mutation.

pub mod file;
pub mod memory;

pub use file::{JsonlStore, RecordFile};
pub use memory::MemoryStore;
