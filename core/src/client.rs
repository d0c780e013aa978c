//! Stateless HTTP request builder and response parser for the Todo Service.
//!
//! # Design
//! `TodoClient` holds only the collection endpoint and carries no mutable
//! state between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. Bodies of mutating responses are ignored: the view always
//! reloads the whole collection afterwards.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, TodoId, TodoItem, UpdateTodo};

/// Synchronous, stateless client for the collection endpoint.
#[derive(Debug, Clone)]
pub struct TodoClient {
    endpoint: String,
}

impl TodoClient {
    /// `endpoint` is the collection path, absolute (`http://host/api/todos`)
    /// or page-relative (`/api/todos`).
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.endpoint.clone(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.endpoint.clone(),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_update_todo(&self, id: &TodoId, input: &UpdateTodo) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.item_path(id),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_delete_todo(&self, id: &TodoId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.item_path(id),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Items come back in server order, which is display order.
    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<TodoItem>, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// Accept any 2xx answer to a create/update/delete and drop the body.
    pub fn parse_ack(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    fn item_path(&self, id: &TodoId) -> String {
        format!("{}/{id}", self.endpoint)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

/// Any non-2xx status is a failure; the code itself is not interpreted.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}
