//! HTTP surface for the todo service.
//!
//! | Method | Path          | Success                  | Failure            |
//! |--------|---------------|--------------------------|--------------------|
//! | GET    | `/`           | 200, `Todo List`         |                    |
//! | GET    | `/todos`      | 200, all todos           |                    |
//! | GET    | `/todos/{id}` | 200, the todo            | 400 bad id, 404    |
//! | POST   | `/todos`      | 200, stored todo with id | body rejection     |
//! | PUT    | `/todos/{id}` | 200, empty               | 400 bad id, 404    |
//! | DELETE | `/todos/{id}` | 200, empty               | 400 bad id, 404    |
//!
//! The repository sits behind one `RwLock`: reads share it, every mutation
//! (including id assignment on create) holds it exclusively.

pub mod config;
pub mod error;
pub mod telemetry;

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use todo_core::{MemoryRepository, Repository, Todo, TodoId};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info, warn};

pub use error::ApiError;

pub type SharedRepository = Arc<RwLock<Box<dyn Repository>>>;

/// Router over a freshly seeded in-memory repository.
pub fn app() -> Router {
    app_with(MemoryRepository::seeded())
}

/// Router over the given repository.
pub fn app_with(repository: impl Repository + 'static) -> Router {
    let repository: Box<dyn Repository> = Box::new(repository);
    let repo: SharedRepository = Arc::new(RwLock::new(repository));
    Router::new()
        .route("/", get(root))
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .with_state(repo)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Parse the `{id}` path segment, answering 400 with `on_invalid` if it is
/// not an `i32`.
fn parse_id(raw: &str, on_invalid: fn() -> ApiError) -> Result<TodoId, ApiError> {
    raw.parse().map_err(|_| {
        warn!(id = raw, "rejected malformed todo id");
        on_invalid()
    })
}

async fn root() -> &'static str {
    "Todo List"
}

async fn list_todos(State(repo): State<SharedRepository>) -> Json<Vec<Todo>> {
    let todos = repo.read().await.all_todos();
    debug!(count = todos.len(), "listed todos");
    Json(todos)
}

async fn get_todo(
    State(repo): State<SharedRepository>,
    Path(raw): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&raw, ApiError::invalid_id_on_get)?;
    let todo = repo.read().await.todo(id);
    debug!(id, found = todo.is_some(), "fetched todo");
    todo.map(Json).ok_or_else(ApiError::not_found_on_get)
}

async fn create_todo(
    State(repo): State<SharedRepository>,
    Json(draft): Json<Todo>,
) -> Json<Todo> {
    let todo = repo.write().await.add_todo(draft);
    info!(id = todo.id, "created todo");
    Json(todo)
}

async fn update_todo(
    State(repo): State<SharedRepository>,
    Path(raw): Path<String>,
    payload: Result<Json<Todo>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw, ApiError::invalid_id)?;
    let Json(draft) = payload?;
    if !repo.write().await.update_todo(id, draft) {
        return Err(ApiError::not_found(id));
    }
    info!(id, "updated todo");
    Ok(StatusCode::OK)
}

async fn delete_todo(
    State(repo): State<SharedRepository>,
    Path(raw): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw, ApiError::invalid_id)?;
    if !repo.write().await.delete_todo(id) {
        return Err(ApiError::not_found(id));
    }
    info!(id, "deleted todo");
    Ok(StatusCode::OK)
}
