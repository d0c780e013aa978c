//! Domain DTOs for the Todo Service.
//!
//! # Design
//! These types mirror the service schema but are defined independently of
//! the mock-server crate; integration tests catch schema drift. The view
//! only ever holds a transient copy of `TodoItem` for one render.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Service-assigned identifier. The view never inspects it beyond carrying
/// it from a rendered control back into a request path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TodoId {
    Int(i64),
    Text(String),
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoId::Int(n) => write!(f, "{n}"),
            TodoId::Text(s) => f.write_str(s),
        }
    }
}

impl FromStr for TodoId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TodoId::from(s))
    }
}

/// Integer only when the text is exactly how that integer displays, so
/// `"007"`, `"+5"` or `"-0"` stay text and reach the service unchanged.
impl From<&str> for TodoId {
    fn from(s: &str) -> Self {
        match s.parse::<i64>() {
            Ok(n) if n.to_string() == s => TodoId::Int(n),
            _ => TodoId::Text(s.to_string()),
        }
    }
}

impl From<i64> for TodoId {
    fn from(n: i64) -> Self {
        TodoId::Int(n)
    }
}

/// A single to-do record as returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub id: TodoId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Request payload for creating a new to-do.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTodo {
    pub title: String,
    pub description: String,
}

/// Request payload for flipping the completed flag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateTodo {
    pub completed: bool,
}
