#![forbid(unsafe_code)]

use super::{Workbench, now_ms};
use crate::TrackError;
use crate::requests::{DataRowCellsUpdate, DataRowPatch};
use cb_core::{BULK_ENTITY_ID, DataEntryRow, EntityKind, EntryDraft, HistoryAction, Snapshot};
use cb_storage::KvStore;

impl<S: KvStore> Workbench<S> {
    pub fn add_data_row(&mut self, row: DataEntryRow) -> Result<(), TrackError> {
        self.state.data_rows.push(row.clone());
        self.persist_collection(EntityKind::DataRow)?;
        self.record(EntryDraft {
            ts_ms: now_ms(),
            action: HistoryAction::Create,
            entity: EntityKind::DataRow,
            entity_id: row.id.clone(),
            entity_name: Some(row.table_name.clone()),
            description: format!("Added data row to {}", row.table_name),
            before: None,
            after: Some(Snapshot::DataRow(row)),
        })
    }

    pub fn update_data_row(
        &mut self,
        id: &str,
        patch: DataRowPatch,
    ) -> Result<Option<DataEntryRow>, TrackError> {
        let Some(index) = self.state.data_rows.iter().position(|r| r.id == id) else {
            return Ok(None);
        };
        let before = self.state.data_rows[index].clone();

        let mut next = before.clone();
        if let Some(v) = patch.table_name {
            next.table_name = v;
        }
        if let Some(v) = patch.cells {
            next.cells = v;
        }
        let now = now_ms();
        next.updated_at_ms = now;

        self.state.data_rows[index] = next.clone();
        self.persist_collection(EntityKind::DataRow)?;
        self.record(EntryDraft {
            ts_ms: now,
            action: HistoryAction::Update,
            entity: EntityKind::DataRow,
            entity_id: id.to_string(),
            entity_name: Some(next.table_name.clone()),
            description: format!("Updated data row in {}", next.table_name),
            before: Some(Snapshot::DataRow(before)),
            after: Some(Snapshot::DataRow(next.clone())),
        })?;
        Ok(Some(next))
    }

    pub fn delete_data_row(&mut self, id: &str) -> Result<Option<DataEntryRow>, TrackError> {
        let Some(index) = self.state.data_rows.iter().position(|r| r.id == id) else {
            return Ok(None);
        };
        let removed = self.state.data_rows.remove(index);
        self.persist_collection(EntityKind::DataRow)?;
        self.record(EntryDraft {
            ts_ms: now_ms(),
            action: HistoryAction::Delete,
            entity: EntityKind::DataRow,
            entity_id: removed.id.clone(),
            entity_name: Some(removed.table_name.clone()),
            description: format!("Deleted data row from {}", removed.table_name),
            before: Some(Snapshot::DataRow(removed.clone())),
            after: None,
        })?;
        Ok(Some(removed))
    }

    /// Replaces the cells of every row named in `updates` and records the
    /// batch as one bulk-update entry. Returns how many rows matched; an
    /// all-miss batch records nothing.
    pub fn bulk_update_data_rows(
        &mut self,
        updates: Vec<DataRowCellsUpdate>,
    ) -> Result<usize, TrackError> {
        let before: Vec<DataEntryRow> = self
            .state
            .data_rows
            .iter()
            .filter(|r| updates.iter().any(|u| u.id == r.id))
            .cloned()
            .collect();
        if before.is_empty() {
            return Ok(0);
        }

        let now = now_ms();
        for row in self.state.data_rows.iter_mut() {
            if let Some(update) = updates.iter().find(|u| u.id == row.id) {
                row.cells = update.cells.clone();
                row.updated_at_ms = now;
            }
        }

        let after: Vec<DataEntryRow> = self
            .state
            .data_rows
            .iter()
            .filter(|r| updates.iter().any(|u| u.id == r.id))
            .cloned()
            .collect();
        let matched = after.len();

        self.persist_collection(EntityKind::DataRow)?;
        self.record(EntryDraft {
            ts_ms: now,
            action: HistoryAction::BulkUpdate,
            entity: EntityKind::DataRow,
            entity_id: BULK_ENTITY_ID.to_string(),
            entity_name: None,
            description: format!("Updated {matched} data rows"),
            before: Some(Snapshot::DataRows(before)),
            after: Some(Snapshot::DataRows(after)),
        })?;
        Ok(matched)
    }

    /// Removes every row named in `ids` and records the batch as one
    /// bulk-delete entry carrying the removed snapshots.
    pub fn bulk_delete_data_rows(&mut self, ids: &[String]) -> Result<usize, TrackError> {
        let removed: Vec<DataEntryRow> = self
            .state
            .data_rows
            .iter()
            .filter(|r| ids.contains(&r.id))
            .cloned()
            .collect();
        if removed.is_empty() {
            return Ok(0);
        }

        self.state.data_rows.retain(|r| !ids.contains(&r.id));
        let count = removed.len();

        self.persist_collection(EntityKind::DataRow)?;
        self.record(EntryDraft {
            ts_ms: now_ms(),
            action: HistoryAction::BulkDelete,
            entity: EntityKind::DataRow,
            entity_id: BULK_ENTITY_ID.to_string(),
            entity_name: None,
            description: format!("Deleted {count} data rows"),
            before: Some(Snapshot::DataRows(removed)),
            after: None,
        })?;
        Ok(count)
    }
}
