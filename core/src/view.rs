//! The render-and-reload controller.
//!
//! # Design
//! `TodoView` owns everything it touches: the request builder, the host's
//! `Transport`, and the host's `Surface`. Every mutation goes to the service
//! and is followed by a full reload; the displayed list is always the last
//! successfully fetched snapshot.
//!
//! Operations never return errors. Request failures are reported through
//! `tracing` and otherwise swallowed; validation failures go to
//! `Surface::prompt`. Overlapping operations are not coordinated, so when
//! two reloads are in flight the one that completes last owns the list.

use async_trait::async_trait;
use tracing::{debug, error};

use crate::client::TodoClient;
use crate::config::ViewConfig;
use crate::dispatch::{Action, ClickTarget};
use crate::error::{ApiError, ValidationError};
use crate::http::{HttpRequest, HttpResponse};
use crate::render::render;
use crate::types::{CreateTodo, TodoId, TodoItem, UpdateTodo};

/// Executes one HTTP round-trip. Any status is a response; only failures to
/// obtain a response at all are `Err`.
#[async_trait(?Send)]
pub trait Transport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// The parts of the page the view reads from and writes to.
pub trait Surface {
    /// Replace the list container's contents with `html`.
    fn replace_list(&self, html: &str);

    /// Current `(title, description)` input values, untrimmed.
    fn read_inputs(&self) -> (String, String);

    fn clear_inputs(&self);

    /// Blocking notice to the user.
    fn prompt(&self, message: &str);
}

pub struct TodoView<T, S> {
    client: TodoClient,
    transport: T,
    surface: S,
}

impl<T: Transport, S: Surface> TodoView<T, S> {
    pub fn new(config: &ViewConfig, transport: T, surface: S) -> Self {
        Self::with_client(TodoClient::new(&config.endpoint), transport, surface)
    }

    pub fn with_client(client: TodoClient, transport: T, surface: S) -> Self {
        Self {
            client,
            transport,
            surface,
        }
    }

    pub fn client(&self) -> &TodoClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Fetch the collection and redraw the list. On failure the previous
    /// rendering stays in place.
    pub async fn load(&self) {
        match self.fetch_todos().await {
            Ok(items) => {
                self.surface.replace_list(&render(&items));
                debug!(count = items.len(), "rendered todos");
            }
            Err(err) => report("list", &err),
        }
    }

    /// Create a to-do from raw input values. Inputs are cleared only after
    /// the service accepts the item.
    pub async fn add(&self, title: &str, description: &str) {
        let input = match validate(title, description) {
            Ok(input) => input,
            Err(err) => {
                self.surface.prompt(&err.to_string());
                return;
            }
        };
        match self.create(&input).await {
            Ok(()) => {
                debug!(title = %input.title, "created todo");
                self.surface.clear_inputs();
                self.load().await;
            }
            Err(err) => report("create", &err),
        }
    }

    /// `add` with whatever the input fields currently hold.
    pub async fn submit(&self) {
        let (title, description) = self.surface.read_inputs();
        self.add(&title, &description).await;
    }

    pub async fn toggle_complete(&self, id: &TodoId, currently_completed: bool) {
        let update = UpdateTodo {
            completed: !currently_completed,
        };
        match self.update(id, &update).await {
            Ok(()) => {
                debug!(%id, completed = update.completed, "updated todo");
                self.load().await;
            }
            Err(err) => report("update", &err),
        }
    }

    pub async fn remove(&self, id: &TodoId) {
        match self.delete(id).await {
            Ok(()) => {
                debug!(%id, "deleted todo");
                self.load().await;
            }
            Err(err) => report("delete", &err),
        }
    }

    pub async fn dispatch(&self, action: Action) {
        match action {
            Action::Toggle { id, completed } => self.toggle_complete(&id, completed).await,
            Action::Delete { id } => self.remove(&id).await,
        }
    }

    /// Entry point for the delegated listener on the list container.
    pub async fn handle_click(&self, target: &ClickTarget) {
        if let Some(action) = Action::from_target(target) {
            self.dispatch(action).await;
        }
    }

    async fn fetch_todos(&self) -> Result<Vec<TodoItem>, ApiError> {
        let response = self.transport.execute(self.client.build_list_todos()).await?;
        self.client.parse_list_todos(response)
    }

    async fn create(&self, input: &CreateTodo) -> Result<(), ApiError> {
        let request = self.client.build_create_todo(input)?;
        self.acknowledge(request).await
    }

    async fn update(&self, id: &TodoId, input: &UpdateTodo) -> Result<(), ApiError> {
        let request = self.client.build_update_todo(id, input)?;
        self.acknowledge(request).await
    }

    async fn delete(&self, id: &TodoId) -> Result<(), ApiError> {
        self.acknowledge(self.client.build_delete_todo(id)).await
    }

    async fn acknowledge(&self, request: HttpRequest) -> Result<(), ApiError> {
        let response = self.transport.execute(request).await?;
        self.client.parse_ack(response)
    }
}

/// Trim both fields and require a title.
fn validate(title: &str, description: &str) -> Result<CreateTodo, ValidationError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(CreateTodo {
        title: title.to_string(),
        description: description.trim().to_string(),
    })
}

fn report(operation: &'static str, err: &ApiError) {
    error!(operation, error = %err, "todo request failed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_trims_both_fields() {
        let input = validate("  Buy milk ", " two litres\n").unwrap();
        assert_eq!(input.title, "Buy milk");
        assert_eq!(input.description, "two litres");
    }

    #[test]
    fn validate_rejects_blank_title() {
        assert_eq!(validate("", "x"), Err(ValidationError::EmptyTitle));
        assert_eq!(validate(" \t ", ""), Err(ValidationError::EmptyTitle));
    }

    #[test]
    fn validate_allows_empty_description() {
        let input = validate("A", "").unwrap();
        assert_eq!(input.description, "");
    }
}
