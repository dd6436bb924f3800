//! Contract checks for `MemoryRepository`, driven through `dyn Repository`.
//!
//! Going through the trait object keeps these tests valid for any future
//! backend that implements the same contract.

use todo_core::{MemoryRepository, Repository, Todo, TodoId};

fn seeded() -> Box<dyn Repository> {
    Box::new(MemoryRepository::seeded())
}

#[test]
fn seeded_collection_has_ids_one_to_four() {
    let repo = seeded();
    let ids: Vec<TodoId> = repo.all_todos().iter().filter_map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn get_returns_entry_with_queried_id() {
    let repo = seeded();
    for id in 1..=4 {
        let todo = repo.todo(id).expect("seeded id should exist");
        assert_eq!(todo.id, Some(id));
    }
}

#[test]
fn get_absent_id_returns_none() {
    let repo = seeded();
    for id in [0, 5, 999, -1, TodoId::MAX] {
        assert!(repo.todo(id).is_none(), "id {id} should be absent");
    }
}

#[test]
fn add_is_not_idempotent() {
    let mut repo = seeded();
    let draft = Todo::draft("same", false);
    let first = repo.add_todo(draft.clone());
    let second = repo.add_todo(draft);

    assert_ne!(first.id, second.id);
    assert_eq!(first.title, second.title);
    assert_eq!(repo.all_todos().len(), 6);
}

#[test]
fn add_appends_in_insertion_order() {
    let mut repo = seeded();
    let stored = repo.add_todo(Todo::draft("last", true));
    let all = repo.all_todos();
    assert_eq!(all.last(), Some(&stored));
}

#[test]
fn update_then_get_reflects_draft() {
    let mut repo = seeded();
    assert!(repo.update_todo(2, Todo::draft("lunch moved", true)));

    let todo = repo.todo(2).unwrap();
    assert_eq!(todo.id, Some(2));
    assert_eq!(todo.title, "lunch moved");
    assert!(todo.done);
}

#[test]
fn update_absent_returns_false() {
    let mut repo = seeded();
    assert!(!repo.update_todo(999, Todo::draft("nope", false)));
}

#[test]
fn delete_then_get_is_absent_and_second_delete_fails() {
    let mut repo = seeded();
    assert!(repo.delete_todo(3));
    assert!(repo.todo(3).is_none());
    assert!(!repo.delete_todo(3));
    assert_eq!(repo.all_todos().len(), 3);
}

#[test]
fn ids_stay_unique_across_deletes_and_adds() {
    let mut repo = seeded();
    repo.delete_todo(2);
    repo.add_todo(Todo::draft("a", false));
    repo.delete_todo(1);
    repo.add_todo(Todo::draft("b", false));

    let mut ids: Vec<TodoId> = repo.all_todos().iter().filter_map(|t| t.id).collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
}
