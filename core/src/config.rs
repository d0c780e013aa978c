//! Page wiring for the view: where the collection lives and which
//! elements the host binds to. Every field has a default, so a partial
//! JSON object (or none at all) is a valid configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewConfig {
    /// Collection endpoint; items live under `{endpoint}/{id}`.
    pub endpoint: String,
    pub list_id: String,
    pub title_input_id: String,
    pub description_input_id: String,
    pub add_button_id: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            endpoint: "/api/todos".to_string(),
            list_id: "todoList".to_string(),
            title_input_id: "todoTitle".to_string(),
            description_input_id: "todoDescription".to_string(),
            add_button_id: "addTodoBtn".to_string(),
        }
    }
}
