#![forbid(unsafe_code)]

//! Field-wise patches and batch updates accepted by the facades. `None`
//! leaves a field as it is, `Some` replaces it.

use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogStepPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub java_class: Option<String>,
    pub java_method: Option<String>,
    pub sql_tables: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TestCasePatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MembershipPatch {
    pub test_case_id: Option<String>,
    pub catalog_step_id: Option<String>,
    pub process_order: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataRowPatch {
    pub table_name: Option<String>,
    pub cells: Option<BTreeMap<String, String>>,
}

/// One position assignment within a reorder batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MembershipOrderUpdate {
    pub id: String,
    pub process_order: i64,
}

/// One row's replacement cells within a bulk update batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataRowCellsUpdate {
    pub id: String,
    pub cells: BTreeMap<String, String>,
}
