#![forbid(unsafe_code)]

use cb_core::{DataEntryRow, HistoryAction, HistoryEntry, Snapshot};

pub(super) fn apply(rows: &mut Vec<DataEntryRow>, entry: &HistoryEntry, going_back: bool) {
    let target = if going_back {
        entry.before.as_ref()
    } else {
        entry.after.as_ref()
    };

    match entry.action {
        HistoryAction::Create => {
            if going_back {
                rows.retain(|row| row.id != entry.entity_id);
            } else if let Some(Snapshot::DataRow(row)) = target {
                rows.push(row.clone());
            }
        }
        HistoryAction::Delete => {
            if going_back {
                if let Some(Snapshot::DataRow(row)) = target {
                    rows.push(row.clone());
                }
            } else {
                rows.retain(|row| row.id != entry.entity_id);
            }
        }
        HistoryAction::Update => {
            if let Some(Snapshot::DataRow(snapshot)) = target {
                for row in rows.iter_mut() {
                    if row.id == entry.entity_id {
                        *row = snapshot.clone();
                    }
                }
            }
        }
        HistoryAction::BulkUpdate => {
            if let Some(Snapshot::DataRows(snapshots)) = target {
                for row in rows.iter_mut() {
                    if let Some(snapshot) = snapshots.iter().find(|s| s.id == row.id) {
                        *row = snapshot.clone();
                    }
                }
            }
        }
        HistoryAction::BulkDelete => {
            // `before` holds the removed rows; `after` is empty.
            if let Some(Snapshot::DataRows(snapshots)) = entry.before.as_ref() {
                if going_back {
                    for snapshot in snapshots {
                        rows.push(snapshot.clone());
                    }
                } else {
                    rows.retain(|row| !snapshots.iter().any(|s| s.id == row.id));
                }
            }
        }
        HistoryAction::Reorder => {}
    }
}
