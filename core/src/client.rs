//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. The caller executes the HTTP round-trip
//! in between.

use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTask, TaskId, Todo};

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_tasks(&self) -> HttpRequest {
        self.get(format!("{}/tasks", self.base_url))
    }

    pub fn build_get_task(&self, id: TaskId) -> HttpRequest {
        self.get(format!("{}/tasks/{id}", self.base_url))
    }

    pub fn build_create_task(&self, input: &CreateTask) -> Result<HttpRequest, ClientError> {
        let body =
            serde_json::to_string(input).map_err(|e| ClientError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/tasks", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn parse_list_tasks(&self, response: HttpResponse) -> Result<Vec<Todo>, ClientError> {
        parse_json(response, 200)
    }

    pub fn parse_get_task(&self, response: HttpResponse) -> Result<Todo, ClientError> {
        parse_json(response, 200)
    }

    pub fn parse_create_task(&self, response: HttpResponse) -> Result<Todo, ClientError> {
        parse_json(response, 201)
    }

    fn get(&self, url: String) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url,
            headers: Vec::new(),
            body: None,
        }
    }
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse, expected: u16) -> Result<T, ClientError> {
    check_status(&response, expected)?;
    serde_json::from_str(&response.body).map_err(|e| ClientError::Deserialization(e.to_string()))
}

/// Map non-success status codes to the appropriate `ClientError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ClientError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ClientError::NotFound);
    }
    Err(ClientError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:3000")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_tasks_produces_correct_request() {
        let req = client().build_list_tasks();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/tasks");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_task_produces_correct_request() {
        let req = client().build_get_task(7);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/tasks/7");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_task_produces_correct_request() {
        let req = client().build_create_task(&CreateTask::new("Buy milk")).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:3000/tasks");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "task": "Buy milk" }));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:3000/");
        assert_eq!(client.build_list_tasks().url, "http://localhost:3000/tasks");
    }

    #[test]
    fn parse_list_tasks_success() {
        let todos = client()
            .parse_list_tasks(response(200, r#"[{"id":1,"task":"Test","completed":false}]"#))
            .unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, 1);
        assert_eq!(todos[0].task, "Test");
    }

    #[test]
    fn parse_list_tasks_bad_json() {
        let err = client().parse_list_tasks(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ClientError::Deserialization(_)));
    }

    #[test]
    fn parse_get_task_not_found() {
        let err = client()
            .parse_get_task(response(404, r#"{"message":"Task not found"}"#))
            .unwrap_err();
        assert!(matches!(err, ClientError::NotFound));
    }

    #[test]
    fn parse_create_task_success() {
        let todo = client()
            .parse_create_task(response(201, r#"{"id":3,"task":"New","completed":false}"#))
            .unwrap();
        assert_eq!(todo.id, 3);
        assert!(!todo.completed);
    }

    #[test]
    fn parse_create_task_bad_request_keeps_body() {
        let err = client()
            .parse_create_task(response(400, r#"{"message":"task is required"}"#))
            .unwrap_err();
        match err {
            ClientError::HttpError { status, body } => {
                assert_eq!(status, 400);
                assert!(body.contains("task is required"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_create_task_expects_201() {
        let err = client()
            .parse_create_task(response(200, r#"{"id":3,"task":"New","completed":false}"#))
            .unwrap_err();
        assert!(matches!(err, ClientError::HttpError { status: 200, .. }));
    }
}
