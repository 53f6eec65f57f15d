//! End-to-end behavior of the task list store.

#![allow(clippy::expect_used)] // Test code can use expect

use std::sync::Arc;
use tasklist::{TaskAction, TaskId, TaskInput, TaskListEnvironment, TaskListState, TaskListStore};
use tasklist_testing::{test_clock, SequentialIdGenerator};

fn store() -> TaskListStore {
    TaskListStore::new(TaskListEnvironment::new(
        Arc::new(test_clock()),
        Arc::new(SequentialIdGenerator::new()),
    ))
}

fn store_with(texts: &[&str]) -> (TaskListStore, Vec<TaskId>) {
    let mut store = store();
    let ids = texts
        .iter()
        .map(|text| store.add_task(*text).expect("non-blank text"))
        .collect();
    (store, ids)
}

fn texts(store: &TaskListStore) -> Vec<&str> {
    store.tasks().iter().map(|t| t.text.as_str()).collect()
}

#[test]
fn test_add_blank_never_changes_length() {
    let mut store = store();

    store.add_task(" ");
    store.add_task("");
    assert_eq!(store.state().len(), 0);

    store.add_task("buy milk");
    assert_eq!(store.state().len(), 1);
    assert!(!store.tasks()[0].completed);
}

#[test]
fn test_toggle_twice_restores_completion() {
    let (mut store, ids) = store_with(&["a", "b"]);
    store.toggle_complete(&ids[1]);
    let before: Vec<bool> = store.tasks().iter().map(|t| t.completed).collect();

    for id in &ids {
        store.toggle_complete(id);
        store.toggle_complete(id);
    }

    let after: Vec<bool> = store.tasks().iter().map(|t| t.completed).collect();
    assert_eq!(before, after);
}

#[test]
fn test_delete_present_and_absent() {
    let (mut store, ids) = store_with(&["a", "b", "c"]);

    assert!(store.delete_task(&ids[1]));
    assert_eq!(texts(&store), ["a", "c"]);

    assert!(!store.delete_task(&ids[1]));
    assert_eq!(store.state().len(), 2);
}

#[test]
fn test_cancel_leaves_text_unchanged() {
    let (mut store, ids) = store_with(&["original"]);

    store.start_edit(&ids[0]);
    store.update_draft("scratch").expect("session active");
    store.cancel_edit();

    assert_eq!(texts(&store), ["original"]);
    assert!(store.edit_session().is_none());
}

#[test]
fn test_commit_writes_draft_exactly() {
    let (mut store, ids) = store_with(&["original"]);

    store.start_edit(&ids[0]);
    store.update_draft("x").expect("session active");
    store.commit_edit();

    assert_eq!(texts(&store), ["x"]);
}

#[test]
fn test_delete_edited_task_clears_session() {
    let (mut store, ids) = store_with(&["a", "b"]);

    store.start_edit(&ids[0]);
    store.update_draft("stale").expect("session active");
    store.delete_task(&ids[0]);

    assert!(store.edit_session().is_none());
    assert!(!store.commit_edit());
    assert_eq!(texts(&store), ["b"]);
    assert!(store.update_draft("again").is_err());
}

#[test]
fn test_move_first_to_index_two() {
    let (mut store, _) = store_with(&["A", "B", "C", "D"]);

    store.move_task(0, Some(2));

    assert_eq!(texts(&store), ["B", "C", "A", "D"]);
}

#[test]
fn test_move_out_of_range_is_ignored() {
    let (mut store, _) = store_with(&["A", "B", "C", "D"]);

    store.move_task(1, Some(4));
    store.move_task(9, Some(0));
    store.move_task(0, None);

    assert_eq!(texts(&store), ["A", "B", "C", "D"]);
}

#[test]
fn test_end_to_end_scenario() {
    let mut store = store();
    let mut input = TaskInput::new();

    input.set("a");
    let a = input.submit(&mut store).expect("added");
    assert_eq!(input.text(), "");
    input.set("b");
    input.submit(&mut store).expect("added");

    store.toggle_complete(&a);
    store.move_task(0, Some(1));

    assert_eq!(texts(&store), ["b", "a"]);
    assert!(!store.tasks()[0].completed);
    assert!(store.tasks()[1].completed);
    assert_eq!(store.tasks()[1].id, a);
}

#[test]
fn test_replaying_events_rebuilds_state() {
    let (mut live, ids) = store_with(&["a", "b", "c"]);
    let mut journal: Vec<TaskAction> = Vec::new();

    // Seed the journal with the adds, then record every later command's events.
    for task in live.tasks() {
        journal.push(TaskAction::TaskAdded {
            id: task.id,
            text: task.text.clone(),
            created_at: task.created_at,
        });
    }
    let commands = [
        TaskAction::ToggleComplete { id: ids[2] },
        TaskAction::StartEdit { id: ids[0] },
        TaskAction::UpdateDraft {
            text: "A".to_string(),
        },
        TaskAction::CommitEdit,
        TaskAction::MoveTask {
            source: 2,
            destination: Some(0),
        },
        TaskAction::DeleteTask { id: ids[1] },
    ];
    for command in commands {
        journal.extend(live.send(command).expect("valid command"));
    }

    let mut replica = TaskListStore::with_state(
        TaskListState::new(),
        TaskListEnvironment::new(Arc::new(test_clock()), Arc::new(SequentialIdGenerator::new())),
    );
    for event in journal {
        replica.send(event).expect("events always apply");
    }

    assert_eq!(replica.state(), live.state());
    assert_eq!(texts(&replica), ["c", "A"]);
}

#[test]
fn test_state_serializes_for_rendering() {
    let (mut store, ids) = store_with(&["a"]);
    store.start_edit(&ids[0]);

    let json = serde_json::to_value(store.state()).expect("state serializes");

    assert_eq!(json["tasks"][0]["text"], "a");
    assert_eq!(json["tasks"][0]["completed"], false);
    assert_eq!(json["edit"]["draft"], "a");

    let back: TaskListState = serde_json::from_value(json).expect("state deserializes");
    assert_eq!(&back, store.state());
}
