#![forbid(unsafe_code)]

use cb_core::{HistoryAction, HistoryEntry, Snapshot, TestStepMembership};

pub(super) fn apply(
    memberships: &mut Vec<TestStepMembership>,
    entry: &HistoryEntry,
    going_back: bool,
) {
    let target = if going_back {
        entry.before.as_ref()
    } else {
        entry.after.as_ref()
    };

    match entry.action {
        HistoryAction::Create => {
            if going_back {
                memberships.retain(|m| m.id != entry.entity_id);
            } else if let Some(Snapshot::Membership(membership)) = target {
                memberships.push(membership.clone());
            }
        }
        HistoryAction::Delete => {
            if going_back {
                if let Some(Snapshot::Membership(membership)) = target {
                    memberships.push(membership.clone());
                }
            } else {
                memberships.retain(|m| m.id != entry.entity_id);
            }
        }
        HistoryAction::Update => {
            if let Some(Snapshot::Membership(snapshot)) = target {
                for membership in memberships.iter_mut() {
                    if membership.id == entry.entity_id {
                        *membership = snapshot.clone();
                    }
                }
            }
        }
        HistoryAction::Reorder => {
            // Members named in the snapshot array are replaced; the rest are
            // untouched.
            if let Some(Snapshot::Memberships(snapshots)) = target {
                for membership in memberships.iter_mut() {
                    if let Some(snapshot) = snapshots.iter().find(|s| s.id == membership.id) {
                        *membership = snapshot.clone();
                    }
                }
            }
        }
        HistoryAction::BulkUpdate | HistoryAction::BulkDelete => {}
    }
}
