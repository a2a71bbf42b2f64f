#![forbid(unsafe_code)]


use crate::model::{CatalogStep, DataEntryRow, TestCase, TestStepMembership};
use serde::{Deserialize, Serialize};

/// `entity_id` used by reorder and bulk entries that touch several entities.
pub const BULK_ENTITY_ID: &str = "bulk";

pub const DEFAULT_CAPACITY: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HistoryAction {
    Create,
    Update,
    Delete,
    Reorder,
    BulkUpdate,
    BulkDelete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    #[serde(rename = "catalog-step")]
    CatalogStep,
    #[serde(rename = "test-case")]
    TestCase,
    #[serde(rename = "test-membership")]
    Membership,
    #[serde(rename = "data-entry-row")]
    DataRow,
}

/// Full before/after payload of one entry. Interpreted only by the replay
/// adapter matching the entry's `entity` kind; a mismatched payload is
/// skipped, never an error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum Snapshot {
    CatalogStep(CatalogStep),
    TestCase(TestCase),
    Membership(TestStepMembership),
    Memberships(Vec<TestStepMembership>),
    DataRow(DataEntryRow),
    DataRows(Vec<DataEntryRow>),
}

/// One recorded change. `description` is fixed at creation time; `comment`
/// is the only field mutable after the fact.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub ts_ms: i64,
    pub action: HistoryAction,
    pub entity: EntityKind,
    pub entity_id: String,
    pub entity_name: Option<String>,
    pub description: String,
    pub comment: Option<String>,
    pub before: Option<Snapshot>,
    pub after: Option<Snapshot>,
}

/// Everything an entry carries except its log-assigned id and comment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryDraft {
    pub ts_ms: i64,
    pub action: HistoryAction,
    pub entity: EntityKind,
    pub entity_id: String,
    pub entity_name: Option<String>,
    pub description: String,
    pub before: Option<Snapshot>,
    pub after: Option<Snapshot>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HistoryError {
    InvalidPosition,
}

impl std::fmt::Display for HistoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPosition => write!(f, "invalid history position"),
        }
    }
}

impl std::error::Error for HistoryError {}

/// Bounded, branchable undo/redo log. Oldest entry first; `applied` counts
/// the entries at or before the cursor, so `applied == 0` is "before the
/// first entry" and `applied == entries.len()` is "everything applied".
///
/// The log never inspects entity semantics; it is a container of opaque
/// before/after pairs keyed by entity kind. Reverse-applying a returned
/// entry is the caller's job.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
    applied: usize,
    capacity: usize,
    next_seq: u64,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            applied: 0,
            capacity: capacity.max(1),
            next_seq: 1,
        }
    }

    /// Discards the redo branch, assigns the next entry id, appends, and
    /// evicts from the front while over capacity (sliding window: the log
    /// always keeps the most recent `capacity` entries). The cursor lands on
    /// the new entry.
    pub fn append(&mut self, draft: EntryDraft) -> &HistoryEntry {
        self.entries.truncate(self.applied);

        let EntryDraft {
            ts_ms,
            action,
            entity,
            entity_id,
            entity_name,
            description,
            before,
            after,
        } = draft;
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(HistoryEntry {
            id: format!("op_{seq:016}"),
            ts_ms,
            action,
            entity,
            entity_id,
            entity_name,
            description,
            comment: None,
            before,
            after,
        });

        if self.entries.len() > self.capacity {
            let excess = self.entries.len() - self.capacity;
            self.entries.drain(..excess);
        }
        self.applied = self.entries.len();
        &self.entries[self.applied - 1]
    }

    /// Steps the cursor back and returns the entry that was undone. `None`
    /// when there is nothing to undo. The cursor moves as soon as this is
    /// called; collections are untouched until the caller reverse-applies
    /// the returned entry.
    pub fn undo(&mut self) -> Option<HistoryEntry> {
        self.applied = self.applied.checked_sub(1)?;
        Some(self.entries[self.applied].clone())
    }

    /// Steps the cursor forward and returns the entry to re-apply. `None`
    /// when there is nothing to redo.
    pub fn redo(&mut self) -> Option<HistoryEntry> {
        if self.applied == self.entries.len() {
            return None;
        }
        let entry = self.entries[self.applied].clone();
        self.applied += 1;
        Some(entry)
    }

    /// The entry `undo` would return, cursor untouched.
    pub fn peek_undo(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.applied.checked_sub(1)?)
    }

    /// The entry `redo` would return, cursor untouched.
    pub fn peek_redo(&self) -> Option<&HistoryEntry> {
        if self.applied == self.entries.len() {
            return None;
        }
        self.entries.get(self.applied)
    }

    /// Repositions the cursor directly: `None` is "before the first entry",
    /// `Some(i)` puts the cursor on entry `i`. Moves the cursor only; no
    /// entry between the old and new position is replayed.
    pub fn jump_to(&mut self, position: Option<usize>) -> Result<(), HistoryError> {
        let applied = match position {
            None => 0,
            Some(index) if index < self.entries.len() => index + 1,
            Some(_) => return Err(HistoryError::InvalidPosition),
        };
        self.applied = applied;
        Ok(())
    }

    /// Empties the log. Capacity and the id sequence are kept, so entry ids
    /// stay unique across a clear.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.applied = 0;
    }

    /// Annotates an entry after the fact. Returns whether the id was found;
    /// the cursor never moves.
    pub fn set_comment(&mut self, entry_id: &str, comment: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|e| e.id == entry_id) {
            Some(entry) => {
                entry.comment = Some(comment.into());
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.applied > 0
    }

    pub fn can_redo(&self) -> bool {
        self.applied < self.entries.len()
    }

    /// Index of the last applied entry; `None` when the cursor sits before
    /// the first entry.
    pub fn current_index(&self) -> Option<usize> {
        self.applied.checked_sub(1)
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn entry(&self, entry_id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == entry_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
