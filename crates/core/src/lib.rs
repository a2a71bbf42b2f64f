#![forbid(unsafe_code)]

pub mod history;
pub mod model;

pub use history::{
    BULK_ENTITY_ID, EntityKind, EntryDraft, HistoryAction, HistoryEntry, HistoryError, HistoryLog,
    Snapshot,
};
pub use model::{CatalogStep, DataEntryRow, TestCase, TestStepMembership};
