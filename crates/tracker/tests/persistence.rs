#![forbid(unsafe_code)]

use cb_core::{CatalogStep, TestCase};
use cb_storage::{KvStore, MemoryKv, SqliteKv, keys};
use cb_tracker::{TrackError, Workbench};
use std::path::PathBuf;

fn temp_dir(test_name: &str) -> PathBuf {
    let base = std::env::temp_dir();
    let pid = std::process::id();
    let nonce = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    let dir = base.join(format!("cb_tracker_{test_name}_{pid}_{nonce}"));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn sample_step() -> CatalogStep {
    CatalogStep {
        id: "step-001".to_string(),
        name: "Init DB".to_string(),
        description: "Creates the base schema".to_string(),
        java_class: "com.example.steps.DbSteps".to_string(),
        java_method: "initDb".to_string(),
        sql_tables: vec!["CUSTOMER".to_string()],
        created_at_ms: 1_700_000_000_001,
        updated_at_ms: 1_700_000_000_001,
    }
}

fn sample_case() -> TestCase {
    TestCase {
        id: "test-001".to_string(),
        name: "Basic Test".to_string(),
        description: "Smoke scenario".to_string(),
        created_at_ms: 1_700_000_000_002,
        updated_at_ms: 1_700_000_000_002,
    }
}

#[test]
fn every_mutation_writes_through_to_the_collaborator() {
    let mut bench = Workbench::open(MemoryKv::new()).expect("open workbench");
    bench.add_catalog_step(sample_step()).expect("add step");

    let raw_steps = bench
        .kv()
        .get(keys::CATALOG_STEPS)
        .expect("get steps key")
        .expect("steps key written");
    let steps: serde_json::Value = serde_json::from_str(&raw_steps).expect("steps json");
    assert_eq!(steps.as_array().expect("array").len(), 1);
    assert_eq!(steps[0]["id"], "step-001");

    let raw_history = bench
        .kv()
        .get(keys::APP_HISTORY)
        .expect("get history key")
        .expect("history key written");
    let history: serde_json::Value = serde_json::from_str(&raw_history).expect("history json");
    assert_eq!(history["entries"].as_array().expect("entries").len(), 1);
    assert_eq!(history["entries"][0]["action"], "create");
    assert_eq!(history["entries"][0]["entity"], "catalog-step");
}

#[test]
fn workbench_state_survives_reopen_on_sqlite() {
    let storage_dir = temp_dir("workbench_state_survives_reopen_on_sqlite");

    {
        let kv = SqliteKv::open(&storage_dir).expect("open store");
        let mut bench = Workbench::open(kv).expect("open workbench");
        bench.add_catalog_step(sample_step()).expect("add step");
        bench.add_test_case(sample_case()).expect("add case");
        bench.undo().expect("undo").expect("entry");
    }

    let kv = SqliteKv::open(&storage_dir).expect("reopen store");
    let mut bench = Workbench::open(kv).expect("reopen workbench");

    assert_eq!(bench.catalog_steps(), [sample_step()].as_slice());
    assert!(bench.test_cases().is_empty(), "the undone create stays undone");
    assert_eq!(bench.history().len(), 2);
    assert_eq!(bench.history().current_index(), Some(0));
    assert!(bench.history().can_redo());

    bench.redo().expect("redo after reopen").expect("entry");
    assert_eq!(bench.test_cases(), [sample_case()].as_slice());
}

#[test]
fn open_rejects_a_corrupt_collection_value() {
    let mut kv = MemoryKv::new();
    kv.set(keys::CATALOG_STEPS, "not json").expect("seed corrupt value");

    let err = Workbench::open(kv).expect_err("expected corrupt value to fail open");
    match err {
        TrackError::Store(store_err) => {
            assert_eq!(store_err.to_string(), "invalid value: malformed stored value");
        }
        other => panic!("expected Store error, got {other:?}"),
    }
}

#[test]
fn undo_and_jump_write_the_history_key_back() {
    let mut bench = Workbench::open(MemoryKv::new()).expect("open workbench");
    bench.add_catalog_step(sample_step()).expect("add step");
    bench.add_test_case(sample_case()).expect("add case");

    bench.undo().expect("undo").expect("entry");
    let raw = bench
        .kv()
        .get(keys::APP_HISTORY)
        .expect("get history")
        .expect("history written");
    let history: serde_json::Value = serde_json::from_str(&raw).expect("history json");
    assert_eq!(history["applied"], 1);

    bench.jump_to(None).expect("jump");
    let raw = bench
        .kv()
        .get(keys::APP_HISTORY)
        .expect("get history")
        .expect("history written");
    let history: serde_json::Value = serde_json::from_str(&raw).expect("history json");
    assert_eq!(history["applied"], 0);
    assert_eq!(history["entries"].as_array().expect("entries").len(), 2);
}
