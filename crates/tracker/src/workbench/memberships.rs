#![forbid(unsafe_code)]

use super::{Workbench, now_ms};
use crate::TrackError;
use crate::requests::{MembershipOrderUpdate, MembershipPatch};
use cb_core::{BULK_ENTITY_ID, EntityKind, EntryDraft, HistoryAction, Snapshot, TestStepMembership};
use cb_storage::KvStore;

impl<S: KvStore> Workbench<S> {
    pub fn add_membership(&mut self, membership: TestStepMembership) -> Result<(), TrackError> {
        self.state.memberships.push(membership.clone());
        self.persist_collection(EntityKind::Membership)?;
        self.record(EntryDraft {
            ts_ms: now_ms(),
            action: HistoryAction::Create,
            entity: EntityKind::Membership,
            entity_id: membership.id.clone(),
            entity_name: None,
            description: format!(
                "Added catalog step {} to test case {}",
                membership.catalog_step_id, membership.test_case_id
            ),
            before: None,
            after: Some(Snapshot::Membership(membership)),
        })
    }

    pub fn update_membership(
        &mut self,
        id: &str,
        patch: MembershipPatch,
    ) -> Result<Option<TestStepMembership>, TrackError> {
        let Some(index) = self.state.memberships.iter().position(|m| m.id == id) else {
            return Ok(None);
        };
        let before = self.state.memberships[index].clone();

        let mut next = before.clone();
        if let Some(v) = patch.test_case_id {
            next.test_case_id = v;
        }
        if let Some(v) = patch.catalog_step_id {
            next.catalog_step_id = v;
        }
        if let Some(v) = patch.process_order {
            next.process_order = v;
        }

        self.state.memberships[index] = next.clone();
        self.persist_collection(EntityKind::Membership)?;
        self.record(EntryDraft {
            ts_ms: now_ms(),
            action: HistoryAction::Update,
            entity: EntityKind::Membership,
            entity_id: id.to_string(),
            entity_name: None,
            description: format!("Updated test step assignment {id}"),
            before: Some(Snapshot::Membership(before)),
            after: Some(Snapshot::Membership(next.clone())),
        })?;
        Ok(Some(next))
    }

    pub fn delete_membership(&mut self, id: &str) -> Result<Option<TestStepMembership>, TrackError> {
        let Some(index) = self.state.memberships.iter().position(|m| m.id == id) else {
            return Ok(None);
        };
        let removed = self.state.memberships.remove(index);
        self.persist_collection(EntityKind::Membership)?;
        self.record(EntryDraft {
            ts_ms: now_ms(),
            action: HistoryAction::Delete,
            entity: EntityKind::Membership,
            entity_id: removed.id.clone(),
            entity_name: None,
            description: format!(
                "Removed catalog step {} from test case {}",
                removed.catalog_step_id, removed.test_case_id
            ),
            before: Some(Snapshot::Membership(removed.clone())),
            after: None,
        })?;
        Ok(Some(removed))
    }

    /// Applies new positions to every membership named in `updates` and
    /// records the whole batch as one reorder entry: the matching pre-update
    /// subset as `before`, the post-update subset as `after`. Ids that match
    /// nothing are skipped; an all-miss batch records nothing.
    pub fn reorder_memberships(
        &mut self,
        updates: Vec<MembershipOrderUpdate>,
    ) -> Result<(), TrackError> {
        let before: Vec<TestStepMembership> = self
            .state
            .memberships
            .iter()
            .filter(|m| updates.iter().any(|u| u.id == m.id))
            .cloned()
            .collect();
        if before.is_empty() {
            return Ok(());
        }

        for membership in self.state.memberships.iter_mut() {
            if let Some(update) = updates.iter().find(|u| u.id == membership.id) {
                membership.process_order = update.process_order;
            }
        }

        let after: Vec<TestStepMembership> = self
            .state
            .memberships
            .iter()
            .filter(|m| updates.iter().any(|u| u.id == m.id))
            .cloned()
            .collect();

        self.persist_collection(EntityKind::Membership)?;
        self.record(EntryDraft {
            ts_ms: now_ms(),
            action: HistoryAction::Reorder,
            entity: EntityKind::Membership,
            entity_id: BULK_ENTITY_ID.to_string(),
            entity_name: None,
            description: format!("Reordered {} test steps", after.len()),
            before: Some(Snapshot::Memberships(before)),
            after: Some(Snapshot::Memberships(after)),
        })
    }
}
