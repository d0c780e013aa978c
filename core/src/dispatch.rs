//! Delegated click handling for the list container.
//!
//! The host registers one listener on the container. For each click it
//! resolves the nearest control element and describes it as a
//! `ClickTarget`; `Action::from_target` decides what the click means.
//! Rows are redrawn on every load without rebinding anything.

use crate::render::{DELETE_CLASS, TOGGLE_CLASS, UNCOMPLETE_LABEL};
use crate::types::TodoId;

/// The control element a click landed on, as read from the DOM.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickTarget {
    pub class_name: String,
    pub data_id: Option<String>,
    pub data_completed: Option<String>,
    pub text: String,
}

impl ClickTarget {
    fn has_class(&self, class: &str) -> bool {
        self.class_name.split_whitespace().any(|c| c == class)
    }
}

/// What a click inside the list asks the view to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Toggle { id: TodoId, completed: bool },
    Delete { id: TodoId },
}

impl Action {
    /// `None` for clicks that are not on an item control.
    pub fn from_target(target: &ClickTarget) -> Option<Action> {
        let raw = target.data_id.as_deref().filter(|s| !s.is_empty())?;
        let id = TodoId::from(raw);

        if target.has_class(TOGGLE_CLASS) {
            let completed = match target.data_completed.as_deref() {
                Some("true") => true,
                Some("false") => false,
                _ => target.text.trim() == UNCOMPLETE_LABEL,
            };
            return Some(Action::Toggle { id, completed });
        }
        if target.has_class(DELETE_CLASS) {
            return Some(Action::Delete { id });
        }
        None
    }
}
