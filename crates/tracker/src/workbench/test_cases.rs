#![forbid(unsafe_code)]

use super::{Workbench, now_ms};
use crate::TrackError;
use crate::requests::TestCasePatch;
use cb_core::{EntityKind, EntryDraft, HistoryAction, Snapshot, TestCase};
use cb_storage::KvStore;

impl<S: KvStore> Workbench<S> {
    pub fn add_test_case(&mut self, case: TestCase) -> Result<(), TrackError> {
        self.state.test_cases.push(case.clone());
        self.persist_collection(EntityKind::TestCase)?;
        self.record(EntryDraft {
            ts_ms: now_ms(),
            action: HistoryAction::Create,
            entity: EntityKind::TestCase,
            entity_id: case.id.clone(),
            entity_name: Some(case.name.clone()),
            description: format!("Created test case \"{}\"", case.name),
            before: None,
            after: Some(Snapshot::TestCase(case)),
        })
    }

    pub fn update_test_case(
        &mut self,
        id: &str,
        patch: TestCasePatch,
    ) -> Result<Option<TestCase>, TrackError> {
        let Some(index) = self.state.test_cases.iter().position(|c| c.id == id) else {
            return Ok(None);
        };
        let before = self.state.test_cases[index].clone();

        let mut next = before.clone();
        if let Some(v) = patch.name {
            next.name = v;
        }
        if let Some(v) = patch.description {
            next.description = v;
        }
        let now = now_ms();
        next.updated_at_ms = now;

        self.state.test_cases[index] = next.clone();
        self.persist_collection(EntityKind::TestCase)?;
        self.record(EntryDraft {
            ts_ms: now,
            action: HistoryAction::Update,
            entity: EntityKind::TestCase,
            entity_id: id.to_string(),
            entity_name: Some(next.name.clone()),
            description: format!("Updated test case \"{}\"", next.name),
            before: Some(Snapshot::TestCase(before)),
            after: Some(Snapshot::TestCase(next.clone())),
        })?;
        Ok(Some(next))
    }

    pub fn delete_test_case(&mut self, id: &str) -> Result<Option<TestCase>, TrackError> {
        let Some(index) = self.state.test_cases.iter().position(|c| c.id == id) else {
            return Ok(None);
        };
        let removed = self.state.test_cases.remove(index);
        self.persist_collection(EntityKind::TestCase)?;
        self.record(EntryDraft {
            ts_ms: now_ms(),
            action: HistoryAction::Delete,
            entity: EntityKind::TestCase,
            entity_id: removed.id.clone(),
            entity_name: Some(removed.name.clone()),
            description: format!("Deleted test case \"{}\"", removed.name),
            before: Some(Snapshot::TestCase(removed.clone())),
            after: None,
        })?;
        Ok(Some(removed))
    }
}
