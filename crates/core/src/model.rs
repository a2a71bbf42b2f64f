#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A reusable, named test action referencing a class/method and the data
/// tables it touches. Name uniqueness is enforced by collaborators, not here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStep {
    pub id: String,
    pub name: String,
    pub description: String,
    pub java_class: String,
    pub java_method: String,
    pub sql_tables: Vec<String>,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
}

/// A named scenario composed of an ordered sequence of catalog steps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
}

/// Join entity linking a test case to a catalog step at an explicit
/// execution position. `test_case_id` and `catalog_step_id` are soft foreign
/// keys: no cascade, a membership may outlive either side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestStepMembership {
    pub id: String,
    pub test_case_id: String,
    pub catalog_step_id: String,
    pub process_order: i64,
    pub created_at_ms: i64,
}

/// One row of a data-entry grid, keyed by column name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataEntryRow {
    pub id: String,
    pub table_name: String,
    pub cells: BTreeMap<String, String>,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
}
