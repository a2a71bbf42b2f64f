#![forbid(unsafe_code)]

use cb_core::{CatalogStep, HistoryAction, HistoryEntry, Snapshot};

pub(super) fn apply(steps: &mut Vec<CatalogStep>, entry: &HistoryEntry, going_back: bool) {
    let target = if going_back {
        entry.before.as_ref()
    } else {
        entry.after.as_ref()
    };

    match entry.action {
        HistoryAction::Create => {
            if going_back {
                steps.retain(|step| step.id != entry.entity_id);
            } else if let Some(Snapshot::CatalogStep(step)) = target {
                steps.push(step.clone());
            }
        }
        HistoryAction::Delete => {
            if going_back {
                if let Some(Snapshot::CatalogStep(step)) = target {
                    steps.push(step.clone());
                }
            } else {
                steps.retain(|step| step.id != entry.entity_id);
            }
        }
        HistoryAction::Update => {
            // Snapshot replaces the entity verbatim, no merge.
            if let Some(Snapshot::CatalogStep(snapshot)) = target {
                for step in steps.iter_mut() {
                    if step.id == entry.entity_id {
                        *step = snapshot.clone();
                    }
                }
            }
        }
        HistoryAction::Reorder | HistoryAction::BulkUpdate | HistoryAction::BulkDelete => {}
    }
}
