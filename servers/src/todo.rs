//! Todo API: list, get and create over an in-memory `TodoStore`.
//!
//! | Method | Path          | Success                 |
//! |--------|---------------|-------------------------|
//! | GET    | `/tasks`      | 200, JSON array of todo |
//! | POST   | `/tasks`      | 201, created todo       |
//! | GET    | `/tasks/{id}` | 200, todo               |
//!
//! Anything else, including a known path with an unrouted method, is
//! `404 {"message":"Route not found"}`.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use todo_core::types::INVALID_TASK_ID;
use todo_core::{parse_task_id, CreateTask, StoreError, Todo, TodoStore};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::body::read_body;
use crate::config::{ServerConfig, DEFAULT_MAX_BODY_BYTES};
use crate::error::ApiError;
use crate::{shutdown_signal, ServeError};

/// Tasks loaded when `SEED_TASKS` is enabled. They get ids 1 and 2.
pub const SAMPLE_TASKS: [&str; 2] = ["Learn Node.js", "Build a Todo App"];

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TodoStore>,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(store: Arc<TodoStore>, max_body_bytes: usize) -> Self {
        Self {
            store,
            max_body_bytes,
        }
    }
}

/// Router over a fresh, empty store with default limits.
pub fn app() -> Router {
    router(AppState::new(
        Arc::new(TodoStore::new()),
        DEFAULT_MAX_BODY_BYTES,
    ))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/tasks",
            get(list_tasks).post(create_task).fallback(route_not_found),
        )
        .route("/tasks/{id}", get(get_task).fallback(route_not_found))
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the store for `config`, seeding it if requested.
pub fn store_for(config: &ServerConfig) -> Result<TodoStore, StoreError> {
    let store = TodoStore::new();
    if config.seed_tasks {
        for task in SAMPLE_TASKS {
            store.create(task)?;
        }
        tracing::info!(count = store.len(), "seeded sample tasks");
    }
    Ok(store)
}

pub async fn run(listener: TcpListener, config: &ServerConfig) -> Result<(), ServeError> {
    let store = Arc::new(store_for(config)?);
    let app = router(AppState::new(store, config.max_body_bytes));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn list_tasks(State(state): State<AppState>) -> Json<Vec<Todo>> {
    let todos = state.store.list();
    tracing::debug!(count = todos.len(), "listing tasks");
    Json(todos)
}

async fn get_task(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Todo>, ApiError> {
    // A segment that does not decode to UTF-8 can't be a valid id either.
    let Path(raw_id) = raw_id.map_err(|rejection| {
        tracing::debug!(%rejection, "undecodable task id");
        ApiError::InvalidInput(INVALID_TASK_ID.to_string())
    })?;
    let id = parse_task_id(&raw_id)?;
    let todo = state.store.get(id)?;
    Ok(Json(todo))
}

async fn create_task(
    State(state): State<AppState>,
    body: Body,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let bytes = read_body(body, state.max_body_bytes).await?;
    let task = parse_create_payload(&bytes)?;
    let todo = state.store.create(&task)?;
    tracing::info!(id = todo.id, "task created");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// Decode a create body into the task text. Content-Type is not consulted.
fn parse_create_payload(bytes: &[u8]) -> Result<String, ApiError> {
    let payload: CreateTask =
        serde_json::from_slice(bytes).map_err(|e| ApiError::MalformedPayload(e.to_string()))?;
    Ok(payload.into_task()?)
}
