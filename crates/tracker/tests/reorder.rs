#![forbid(unsafe_code)]

use cb_core::{BULK_ENTITY_ID, HistoryAction, TestStepMembership};
use cb_storage::MemoryKv;
use cb_tracker::{MembershipOrderUpdate, Workbench};

fn membership(id: &str, process_order: i64) -> TestStepMembership {
    TestStepMembership {
        id: id.to_string(),
        test_case_id: "test-001".to_string(),
        catalog_step_id: format!("step-{id}"),
        process_order,
        created_at_ms: 1_700_000_000_000,
    }
}

fn order_of(bench: &Workbench<MemoryKv>, id: &str) -> i64 {
    bench
        .memberships()
        .iter()
        .find(|m| m.id == id)
        .expect("membership by id")
        .process_order
}

#[test]
fn reorder_round_trips_through_undo_and_redo() {
    let mut bench = Workbench::open(MemoryKv::new()).expect("open workbench");
    bench.add_membership(membership("a", 1)).expect("add a");
    bench.add_membership(membership("b", 2)).expect("add b");
    let original = bench.memberships().to_vec();

    bench
        .reorder_memberships(vec![
            MembershipOrderUpdate {
                id: "a".to_string(),
                process_order: 2,
            },
            MembershipOrderUpdate {
                id: "b".to_string(),
                process_order: 1,
            },
        ])
        .expect("reorder");
    let swapped = bench.memberships().to_vec();
    assert_eq!(order_of(&bench, "a"), 2);
    assert_eq!(order_of(&bench, "b"), 1);

    let entry = bench.history().entries().last().expect("reorder entry").clone();
    assert_eq!(entry.action, HistoryAction::Reorder);
    assert_eq!(entry.entity_id, BULK_ENTITY_ID);

    bench.undo().expect("undo").expect("entry");
    assert_eq!(bench.memberships(), original.as_slice());

    bench.redo().expect("redo").expect("entry");
    assert_eq!(bench.memberships(), swapped.as_slice());
}

#[test]
fn reorder_is_one_entry_for_the_whole_batch() {
    let mut bench = Workbench::open(MemoryKv::new()).expect("open workbench");
    bench.add_membership(membership("a", 1)).expect("add a");
    bench.add_membership(membership("b", 2)).expect("add b");
    bench.add_membership(membership("c", 3)).expect("add c");
    let entries_before = bench.history().len();

    bench
        .reorder_memberships(vec![
            MembershipOrderUpdate {
                id: "a".to_string(),
                process_order: 3,
            },
            MembershipOrderUpdate {
                id: "b".to_string(),
                process_order: 1,
            },
            MembershipOrderUpdate {
                id: "c".to_string(),
                process_order: 2,
            },
        ])
        .expect("reorder");

    assert_eq!(bench.history().len(), entries_before + 1);
    bench.undo().expect("undo").expect("entry");
    assert_eq!(order_of(&bench, "a"), 1);
    assert_eq!(order_of(&bench, "b"), 2);
    assert_eq!(order_of(&bench, "c"), 3);
}

#[test]
fn reorder_skips_unknown_ids_and_all_miss_records_nothing() {
    let mut bench = Workbench::open(MemoryKv::new()).expect("open workbench");
    bench.add_membership(membership("a", 1)).expect("add a");
    let entries_before = bench.history().len();

    bench
        .reorder_memberships(vec![
            MembershipOrderUpdate {
                id: "a".to_string(),
                process_order: 5,
            },
            MembershipOrderUpdate {
                id: "ghost".to_string(),
                process_order: 9,
            },
        ])
        .expect("reorder with unknown id");
    assert_eq!(order_of(&bench, "a"), 5);
    assert_eq!(bench.history().len(), entries_before + 1);

    bench
        .reorder_memberships(vec![MembershipOrderUpdate {
            id: "ghost".to_string(),
            process_order: 9,
        }])
        .expect("all-miss reorder");
    assert_eq!(bench.history().len(), entries_before + 1, "all-miss batch records nothing");
}

#[test]
fn undo_walks_back_across_mixed_membership_actions() {
    let mut bench = Workbench::open(MemoryKv::new()).expect("open workbench");
    bench.add_membership(membership("a", 1)).expect("add a");
    bench.add_membership(membership("b", 2)).expect("add b");
    bench
        .reorder_memberships(vec![
            MembershipOrderUpdate {
                id: "a".to_string(),
                process_order: 2,
            },
            MembershipOrderUpdate {
                id: "b".to_string(),
                process_order: 1,
            },
        ])
        .expect("reorder");
    bench.delete_membership("b").expect("delete").expect("known id");
    assert_eq!(bench.memberships().len(), 1);

    bench.undo().expect("undo delete").expect("entry");
    assert_eq!(bench.memberships().len(), 2);
    assert_eq!(order_of(&bench, "b"), 1, "delete snapshot kept the reordered position");

    bench.undo().expect("undo reorder").expect("entry");
    assert_eq!(order_of(&bench, "a"), 1);
    assert_eq!(order_of(&bench, "b"), 2);
}
