#![forbid(unsafe_code)]

use super::{Workbench, now_ms};
use crate::TrackError;
use crate::requests::CatalogStepPatch;
use cb_core::{CatalogStep, EntityKind, EntryDraft, HistoryAction, Snapshot};
use cb_storage::KvStore;

impl<S: KvStore> Workbench<S> {
    pub fn add_catalog_step(&mut self, step: CatalogStep) -> Result<(), TrackError> {
        self.state.catalog_steps.push(step.clone());
        self.persist_collection(EntityKind::CatalogStep)?;
        self.record(EntryDraft {
            ts_ms: now_ms(),
            action: HistoryAction::Create,
            entity: EntityKind::CatalogStep,
            entity_id: step.id.clone(),
            entity_name: Some(step.name.clone()),
            description: format!("Created catalog step \"{}\"", step.name),
            before: None,
            after: Some(Snapshot::CatalogStep(step)),
        })
    }

    /// Silent no-op on an unknown id: the collection stays unchanged and no
    /// entry is recorded.
    pub fn update_catalog_step(
        &mut self,
        id: &str,
        patch: CatalogStepPatch,
    ) -> Result<Option<CatalogStep>, TrackError> {
        let Some(index) = self.state.catalog_steps.iter().position(|s| s.id == id) else {
            return Ok(None);
        };
        let before = self.state.catalog_steps[index].clone();

        let mut next = before.clone();
        if let Some(v) = patch.name {
            next.name = v;
        }
        if let Some(v) = patch.description {
            next.description = v;
        }
        if let Some(v) = patch.java_class {
            next.java_class = v;
        }
        if let Some(v) = patch.java_method {
            next.java_method = v;
        }
        if let Some(v) = patch.sql_tables {
            next.sql_tables = v;
        }
        let now = now_ms();
        next.updated_at_ms = now;

        self.state.catalog_steps[index] = next.clone();
        self.persist_collection(EntityKind::CatalogStep)?;
        self.record(EntryDraft {
            ts_ms: now,
            action: HistoryAction::Update,
            entity: EntityKind::CatalogStep,
            entity_id: id.to_string(),
            entity_name: Some(next.name.clone()),
            description: format!("Updated catalog step \"{}\"", next.name),
            before: Some(Snapshot::CatalogStep(before)),
            after: Some(Snapshot::CatalogStep(next.clone())),
        })?;
        Ok(Some(next))
    }

    pub fn delete_catalog_step(&mut self, id: &str) -> Result<Option<CatalogStep>, TrackError> {
        let Some(index) = self.state.catalog_steps.iter().position(|s| s.id == id) else {
            return Ok(None);
        };
        let removed = self.state.catalog_steps.remove(index);
        self.persist_collection(EntityKind::CatalogStep)?;
        self.record(EntryDraft {
            ts_ms: now_ms(),
            action: HistoryAction::Delete,
            entity: EntityKind::CatalogStep,
            entity_id: removed.id.clone(),
            entity_name: Some(removed.name.clone()),
            description: format!("Deleted catalog step \"{}\"", removed.name),
            before: Some(Snapshot::CatalogStep(removed.clone())),
            after: None,
        })?;
        Ok(Some(removed))
    }
}
