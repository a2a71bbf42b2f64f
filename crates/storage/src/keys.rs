#![forbid(unsafe_code)]

//! Logical keys the tracker reads and writes on its persistence
//! collaborator. Values under each key are JSON documents.

pub const APP_HISTORY: &str = "app-history";
pub const CATALOG_STEPS: &str = "catalog-steps";
pub const TEST_CASES: &str = "test-cases";
pub const TEST_MEMBERSHIPS: &str = "test-memberships";
pub const DATA_ENTRY_ROWS: &str = "data-entry-rows";
