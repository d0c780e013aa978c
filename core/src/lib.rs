//! View layer core for a remote to-do list.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), renders the fetched
//! collection to list markup, and maps clicks inside the list to actions.
//! `TodoView` ties these together over a host-provided `Transport` and
//! `Surface`.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only the collection endpoint.
//! - `render` is a pure function of the item list.
//! - One delegated listener on the list container feeds `ClickTarget`s to
//!   `TodoView::handle_click`; rows never carry their own handlers.
//! - Every mutation is followed by a full reload. Nothing is cached
//!   between reloads.

pub mod client;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod http;
pub mod render;
pub mod types;
pub mod view;

pub use client::TodoClient;
pub use config::ViewConfig;
pub use dispatch::{Action, ClickTarget};
pub use error::{ApiError, ValidationError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use render::render;
pub use types::{CreateTodo, TodoId, TodoItem, UpdateTodo};
pub use view::{Surface, TodoView, Transport};
