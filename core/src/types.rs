//! Domain types for the todo service.
//!
//! # Design
//! A single `Todo` struct doubles as the stored entry and the client draft.
//! Drafts arrive with `id` absent (or with an id the repository ignores); the
//! repository fills it in on insertion. The wire shape is
//! `{"id": integer|null, "title": string, "done": boolean}`.

use serde::{Deserialize, Serialize};

/// Identifier assigned to a todo by the repository.
pub type TodoId = i32;

/// A single todo item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    #[serde(default)]
    pub id: Option<TodoId>,
    pub title: String,
    pub done: bool,
}

impl Todo {
    /// Build a draft with no id, ready to hand to `Repository::add_todo`.
    pub fn draft(title: impl Into<String>, done: bool) -> Self {
        Self {
            id: None,
            title: title.into(),
            done,
        }
    }

    pub(crate) fn stored(id: TodoId, title: &str, done: bool) -> Self {
        Self {
            id: Some(id),
            title: title.to_string(),
            done,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_todo_serializes_to_json() {
        let todo = Todo::stored(7, "Test", false);
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["title"], "Test");
        assert_eq!(json["done"], false);
    }

    #[test]
    fn draft_serializes_id_as_null() {
        let json = serde_json::to_value(Todo::draft("Test", true)).unwrap();
        assert!(json["id"].is_null());
        assert_eq!(json["done"], true);
    }

    #[test]
    fn draft_without_id_field_deserializes() {
        let draft: Todo = serde_json::from_str(r#"{"title":"test","done":false}"#).unwrap();
        assert_eq!(draft, Todo::draft("test", false));
    }

    #[test]
    fn draft_accepts_explicit_null_id() {
        let draft: Todo =
            serde_json::from_str(r#"{"id":null,"title":"test","done":true}"#).unwrap();
        assert!(draft.id.is_none());
        assert!(draft.done);
    }

    #[test]
    fn draft_rejects_missing_title() {
        let result: Result<Todo, _> = serde_json::from_str(r#"{"done":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn draft_rejects_missing_done() {
        let result: Result<Todo, _> = serde_json::from_str(r#"{"title":"no flag"}"#);
        assert!(result.is_err());
    }
}
