//! Domain core for the todo service.
//!
//! # Overview
//! - `TodoStore`: the in-memory, race-free owner of the todo collection.
//! - `Todo` / `CreateTask`: wire DTOs, plus id and payload validation.
//! - `TodoClient`: builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network (host-does-IO pattern).
//!
//! # Design
//! Nothing in this crate performs I/O or depends on an async runtime. The
//! HTTP servers live in `mini-servers` and drive the store from handlers.

pub mod client;
pub mod error;
pub mod http;
pub mod store;
pub mod types;

pub use client::TodoClient;
pub use error::{ClientError, StoreError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use store::TodoStore;
pub use types::{parse_task_id, CreateTask, TaskId, Todo};
