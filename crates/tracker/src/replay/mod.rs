#![forbid(unsafe_code)]

mod cases;
mod data_rows;
mod memberships;
mod steps;

use crate::workbench::EntityState;
use cb_core::{EntityKind, HistoryEntry};

/// Reverse-applies (`going_back`) or re-applies one entry against exactly
/// the one collection matching its entity kind. Best-effort: ids that no
/// longer match anything are skipped, never an error.
pub(crate) fn apply_entry(state: &mut EntityState, entry: &HistoryEntry, going_back: bool) {
    match entry.entity {
        EntityKind::CatalogStep => steps::apply(&mut state.catalog_steps, entry, going_back),
        EntityKind::TestCase => cases::apply(&mut state.test_cases, entry, going_back),
        EntityKind::Membership => memberships::apply(&mut state.memberships, entry, going_back),
        EntityKind::DataRow => data_rows::apply(&mut state.data_rows, entry, going_back),
    }
}
