#![forbid(unsafe_code)]

mod catalog_steps;
mod data_rows;
mod memberships;
mod test_cases;

use crate::TrackError;
use crate::replay;
use cb_core::{
    CatalogStep, DataEntryRow, EntityKind, EntryDraft, HistoryEntry, HistoryLog, TestCase,
    TestStepMembership,
};
use cb_storage::{KvStore, keys, load_or_default, store_json};

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct EntityState {
    pub(crate) catalog_steps: Vec<CatalogStep>,
    pub(crate) test_cases: Vec<TestCase>,
    pub(crate) memberships: Vec<TestStepMembership>,
    pub(crate) data_rows: Vec<DataEntryRow>,
}

/// The public surface over the four entity collections and their shared
/// history log. Facade methods are the only producers of history entries,
/// and `undo`/`redo` here are the only consumers of the log cursor: they
/// peek the next entry, apply it against exactly the one matching
/// collection, and only then advance the cursor.
///
/// Every mutation writes the affected collection key and the history key to
/// the persistence collaborator before returning. There is no commit
/// boundary: two logical mutations are two entries and two writes, and
/// undoing the second never undoes the first.
#[derive(Debug)]
pub struct Workbench<S: KvStore> {
    kv: S,
    history: HistoryLog,
    state: EntityState,
}

impl<S: KvStore> Workbench<S> {
    /// Loads the history log and all collections from the collaborator.
    /// Missing keys start empty.
    pub fn open(kv: S) -> Result<Self, TrackError> {
        let history = load_or_default(&kv, keys::APP_HISTORY)?;
        let state = EntityState {
            catalog_steps: load_or_default(&kv, keys::CATALOG_STEPS)?,
            test_cases: load_or_default(&kv, keys::TEST_CASES)?,
            memberships: load_or_default(&kv, keys::TEST_MEMBERSHIPS)?,
            data_rows: load_or_default(&kv, keys::DATA_ENTRY_ROWS)?,
        };
        Ok(Self { kv, history, state })
    }

    /// Reverse-applies the last applied entry. `Ok(None)` when there is
    /// nothing to undo; the cursor does not move in that case.
    pub fn undo(&mut self) -> Result<Option<HistoryEntry>, TrackError> {
        let Some(entry) = self.history.peek_undo().cloned() else {
            return Ok(None);
        };
        replay::apply_entry(&mut self.state, &entry, true);
        self.history.undo();
        self.persist_collection(entry.entity)?;
        self.persist_history()?;
        Ok(Some(entry))
    }

    /// Re-applies the next redoable entry. `Ok(None)` when there is nothing
    /// to redo.
    pub fn redo(&mut self) -> Result<Option<HistoryEntry>, TrackError> {
        let Some(entry) = self.history.peek_redo().cloned() else {
            return Ok(None);
        };
        replay::apply_entry(&mut self.state, &entry, false);
        self.history.redo();
        self.persist_collection(entry.entity)?;
        self.persist_history()?;
        Ok(Some(entry))
    }

    /// Repositions the cursor without replaying the entries in between.
    /// `None` is "before the first entry".
    pub fn jump_to(&mut self, position: Option<usize>) -> Result<(), TrackError> {
        self.history.jump_to(position)?;
        self.persist_history()?;
        Ok(())
    }

    pub fn clear_history(&mut self) -> Result<(), TrackError> {
        self.history.clear();
        self.persist_history()?;
        Ok(())
    }

    /// Annotates an entry post-hoc. Returns whether the id was found; the
    /// cursor never moves.
    pub fn add_comment(&mut self, entry_id: &str, comment: &str) -> Result<bool, TrackError> {
        if !self.history.set_comment(entry_id, comment) {
            return Ok(false);
        }
        self.persist_history()?;
        Ok(true)
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn catalog_steps(&self) -> &[CatalogStep] {
        &self.state.catalog_steps
    }

    pub fn test_cases(&self) -> &[TestCase] {
        &self.state.test_cases
    }

    pub fn memberships(&self) -> &[TestStepMembership] {
        &self.state.memberships
    }

    pub fn data_rows(&self) -> &[DataEntryRow] {
        &self.state.data_rows
    }

    pub fn kv(&self) -> &S {
        &self.kv
    }

    pub(crate) fn record(&mut self, draft: EntryDraft) -> Result<(), TrackError> {
        self.history.append(draft);
        self.persist_history()
    }

    pub(crate) fn persist_collection(&mut self, kind: EntityKind) -> Result<(), TrackError> {
        match kind {
            EntityKind::CatalogStep => {
                store_json(&mut self.kv, keys::CATALOG_STEPS, &self.state.catalog_steps)?
            }
            EntityKind::TestCase => {
                store_json(&mut self.kv, keys::TEST_CASES, &self.state.test_cases)?
            }
            EntityKind::Membership => {
                store_json(&mut self.kv, keys::TEST_MEMBERSHIPS, &self.state.memberships)?
            }
            EntityKind::DataRow => {
                store_json(&mut self.kv, keys::DATA_ENTRY_ROWS, &self.state.data_rows)?
            }
        }
        Ok(())
    }

    fn persist_history(&mut self) -> Result<(), TrackError> {
        store_json(&mut self.kv, keys::APP_HISTORY, &self.history)?;
        Ok(())
    }
}

pub(crate) fn now_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    let now = match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(duration) => duration,
        Err(_) => return 0,
    };

    i64::try_from(now.as_millis()).unwrap_or(i64::MAX)
}
