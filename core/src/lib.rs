//! Storage core for the todo service.
//!
//! # Overview
//! Defines the `Todo` entity and the `Repository` contract the HTTP layer
//! talks to, plus `MemoryRepository`, an in-process implementation seeded
//! with four entries.
//!
//! # Design
//! - The crate knows nothing about HTTP or async runtimes. Callers that share
//!   a repository across tasks wrap it in their own lock.
//! - "Not found" is an `Option::None` or a `false`, never an error. Every
//!   repository operation is total over its inputs.
//! - Ids come from a monotonic counter, so a deleted id is never handed out
//!   again.

pub mod memory;
pub mod repository;
pub mod types;

pub use memory::MemoryRepository;
pub use repository::Repository;
pub use types::{Todo, TodoId};
