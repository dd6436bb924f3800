//! In-process `Repository` backed by a `Vec`.
//!
//! # Design
//! Entries live in insertion order and lookups are a linear scan; the
//! collection is expected to stay small. `next_id` only ever grows, so after
//! `{1, 2, 3, 4}` loses id 2 the next insert still gets 5 rather than
//! colliding with the existing 4.
//!
//! Once the counter passes `TodoId::MAX` it is exhausted and new entries take
//! the smallest positive id not currently in use. From that point a deleted
//! id can come back, but two live entries never share one.

use tracing::{debug, warn};

use crate::repository::Repository;
use crate::types::{Todo, TodoId};

/// Starting contents of a freshly seeded repository.
const SEED: [(TodoId, &str); 4] = [(1, "출근"), (2, "점심식사"), (3, "회의"), (4, "퇴근")];

/// Todo storage held entirely in memory. Nothing survives a restart.
#[derive(Debug, Clone)]
pub struct MemoryRepository {
    todos: Vec<Todo>,
    /// `None` once the counter has run past `TodoId::MAX`.
    next_id: Option<TodoId>,
}

impl MemoryRepository {
    /// An empty repository whose first insert receives id 1.
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: Some(1),
        }
    }

    /// A repository holding the four seed entries, ids 1 through 4.
    pub fn seeded() -> Self {
        Self::with_todos(SEED.iter().map(|&(id, title)| Todo::stored(id, title, false)))
    }

    /// A repository starting from `todos`. Entries without an id are given
    /// one in order; the counter resumes after the largest id seen. An entry
    /// whose id is already taken is dropped, so the first occurrence wins.
    pub fn with_todos(todos: impl IntoIterator<Item = Todo>) -> Self {
        let mut repo = Self::new();
        for todo in todos {
            match todo.id {
                Some(id) if repo.contains(id) => {
                    warn!(id, "dropped todo with duplicate id");
                }
                Some(id) => {
                    repo.next_id = match (repo.next_id, id.checked_add(1)) {
                        (Some(next), Some(after)) => Some(next.max(after)),
                        _ => None,
                    };
                    repo.todos.push(todo);
                }
                None => {
                    repo.add_todo(todo);
                }
            }
        }
        repo
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Whether the repository holds no entries.
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    fn contains(&self, id: TodoId) -> bool {
        self.todos.iter().any(|t| t.id == Some(id))
    }

    fn allocate_id(&mut self) -> TodoId {
        let id = match self.next_id {
            Some(id) => {
                self.next_id = id.checked_add(1);
                id
            }
            None => self.lowest_free_id(),
        };
        debug!(id, "allocated todo id");
        id
    }

    /// Smallest positive id no live entry carries.
    fn lowest_free_id(&self) -> TodoId {
        let mut used: Vec<TodoId> = self
            .todos
            .iter()
            .filter_map(|t| t.id)
            .filter(|&id| id > 0)
            .collect();
        used.sort_unstable();
        used.dedup();

        let mut candidate = 1;
        for id in used {
            if id != candidate {
                break;
            }
            candidate += 1;
        }
        candidate
    }
}

impl Default for MemoryRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Repository for MemoryRepository {
    fn all_todos(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    fn todo(&self, id: TodoId) -> Option<Todo> {
        self.todos.iter().find(|t| t.id == Some(id)).cloned()
    }

    fn add_todo(&mut self, mut draft: Todo) -> Todo {
        draft.id = Some(self.allocate_id());
        self.todos.push(draft.clone());
        draft
    }

    fn delete_todo(&mut self, id: TodoId) -> bool {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != Some(id));
        self.todos.len() != before
    }

    fn update_todo(&mut self, id: TodoId, draft: Todo) -> bool {
        let Some(todo) = self.todos.iter_mut().find(|t| t.id == Some(id)) else {
            return false;
        };
        todo.title = draft.title;
        todo.done = draft.done;
        true
    }
}
