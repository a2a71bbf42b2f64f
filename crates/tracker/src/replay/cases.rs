#![forbid(unsafe_code)]

use cb_core::{HistoryAction, HistoryEntry, Snapshot, TestCase};

pub(super) fn apply(cases: &mut Vec<TestCase>, entry: &HistoryEntry, going_back: bool) {
    let target = if going_back {
        entry.before.as_ref()
    } else {
        entry.after.as_ref()
    };

    match entry.action {
        HistoryAction::Create => {
            if going_back {
                cases.retain(|case| case.id != entry.entity_id);
            } else if let Some(Snapshot::TestCase(case)) = target {
                cases.push(case.clone());
            }
        }
        HistoryAction::Delete => {
            if going_back {
                if let Some(Snapshot::TestCase(case)) = target {
                    cases.push(case.clone());
                }
            } else {
                cases.retain(|case| case.id != entry.entity_id);
            }
        }
        HistoryAction::Update => {
            if let Some(Snapshot::TestCase(snapshot)) = target {
                for case in cases.iter_mut() {
                    if case.id == entry.entity_id {
                        *case = snapshot.clone();
                    }
                }
            }
        }
        HistoryAction::Reorder | HistoryAction::BulkUpdate | HistoryAction::BulkDelete => {}
    }
}
