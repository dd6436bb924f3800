//! The storage contract consumed by the HTTP layer.
//!
//! # Design
//! Reads take `&self` and hand back owned clones so nothing borrowed from the
//! store outlives the call. Writes take `&mut self`; sharing a repository
//! between concurrent requests is the caller's job (the server puts it behind
//! a single `RwLock`). The trait is object safe so the server can hold a
//! `Box<dyn Repository>` and swap backends without touching its handlers.

use crate::types::{Todo, TodoId};

/// CRUD operations over a single todo collection.
pub trait Repository: Send + Sync {
    /// Every entry, in insertion order.
    fn all_todos(&self) -> Vec<Todo>;

    /// The entry whose id matches, or `None`.
    fn todo(&self, id: TodoId) -> Option<Todo>;

    /// Assign a fresh id to `draft`, append it, and return the stored entry.
    /// Any id already present on the draft is ignored.
    fn add_todo(&mut self, draft: Todo) -> Todo;

    /// Remove the matching entry. Returns whether anything was removed.
    fn delete_todo(&mut self, id: TodoId) -> bool;

    /// Overwrite `title` and `done` of the matching entry from `draft`; the
    /// stored id is left alone. Returns whether the entry was found.
    fn update_todo(&mut self, id: TodoId, draft: Todo) -> bool;
}
