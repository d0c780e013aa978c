//! In-memory Todo Service.
//!
//! Serves the collection under `/api/todos` with integer ids handed out
//! from a counter, so list order is creation order. State lives for the
//! lifetime of the router.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{info, warn};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Default)]
pub struct Store {
    next_id: i64,
    todos: BTreeMap<i64, Todo>,
}

impl Store {
    fn insert(&mut self, input: CreateTodo) -> Todo {
        self.next_id += 1;
        let todo = Todo {
            id: self.next_id,
            title: input.title,
            description: input.description,
            completed: false,
        };
        self.todos.insert(todo.id, todo.clone());
        todo
    }
}

pub type Db = Arc<RwLock<Store>>;

/// Bind address taken from `HOST` / `PORT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unset or unparsable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn app() -> Router {
    app_with_store(Store::default())
}

/// Router over a pre-populated store.
pub fn app_with_store(store: Store) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/health", get(health))
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/{id}", put(update_todo).delete(delete_todo))
        .with_state(db)
}

/// Seed a store with titles, in order, ids starting at 1.
pub fn seeded(titles: &[&str]) -> Store {
    let mut store = Store::default();
    for title in titles {
        store.insert(CreateTodo {
            title: title.to_string(),
            description: None,
        });
    }
    store
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, app()).await
}

pub async fn serve(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "todo service listening");
    }
    axum::serve(listener, router).await
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy" }))
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let store = db.read().await;
    Json(store.todos.values().cloned().collect())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, Json<Todo>) {
    let todo = db.write().await.insert(input);
    info!(id = todo.id, title = %todo.title, "created todo");
    (StatusCode::CREATED, Json(todo))
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, StatusCode> {
    let mut store = db.write().await;
    let Some(todo) = store.todos.get_mut(&id) else {
        warn!(id, "update of unknown todo");
        return Err(StatusCode::NOT_FOUND);
    };
    if let Some(title) = input.title {
        todo.title = title;
    }
    if let Some(description) = input.description {
        todo.description = Some(description);
    }
    if let Some(completed) = input.completed {
        todo.completed = completed;
    }
    info!(id, completed = todo.completed, "updated todo");
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    match store.todos.remove(&id) {
        Some(_) => {
            info!(id, "deleted todo");
            Ok(StatusCode::NO_CONTENT)
        }
        None => {
            warn!(id, "delete of unknown todo");
            Err(StatusCode::NOT_FOUND)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_to_json() {
        let todo = Todo {
            id: 1,
            title: "Test".to_string(),
            description: None,
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Test");
        assert!(json["description"].is_null());
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn create_todo_description_is_optional() {
        let input: CreateTodo = serde_json::from_str(r#"{"title":"No description"}"#).unwrap();
        assert_eq!(input.title, "No description");
        assert!(input.description.is_none());
    }

    #[test]
    fn create_todo_rejects_missing_title() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"description":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_todo_all_fields_optional() {
        let input: UpdateTodo = serde_json::from_str(r#"{}"#).unwrap();
        assert!(input.title.is_none());
        assert!(input.description.is_none());
        assert!(input.completed.is_none());
    }

    #[test]
    fn store_assigns_increasing_ids() {
        let store = seeded(&["a", "b", "c"]);
        let ids: Vec<i64> = store.todos.keys().copied().collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(store.todos.values().all(|t| !t.completed));
    }

    #[test]
    fn config_reads_host_and_port() {
        let config = ServerConfig::from_lookup(|key| match key {
            "HOST" => Some("0.0.0.0".to_string()),
            "PORT" => Some("8080".to_string()),
            _ => None,
        });
        assert_eq!(config.addr(), "0.0.0.0:8080");
    }

    #[test]
    fn config_falls_back_on_bad_port() {
        let config = ServerConfig::from_lookup(|key| match key {
            "PORT" => Some("not-a-port".to_string()),
            _ => None,
        });
        assert_eq!(config, ServerConfig::default());
    }
}
