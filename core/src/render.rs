//! Markup for the to-do list container.
//!
//! `render` is a pure function of the item list: equal input yields
//! byte-identical output. The host replaces the container's contents with
//! the returned string; controls carry `data-id` so the delegated listener
//! can recover the target item.

use html_escaper::Escape;

use crate::types::TodoItem;

pub const EMPTY_PLACEHOLDER: &str = "No todos yet. Add one above!";
pub const COMPLETE_LABEL: &str = "Complete";
pub const UNCOMPLETE_LABEL: &str = "Uncomplete";
pub const DELETE_LABEL: &str = "Delete";

pub const TOGGLE_CLASS: &str = "complete-btn";
pub const DELETE_CLASS: &str = "delete-btn";

/// Matches either item control; the delegated listener resolves clicks
/// with `Element::closest` against this.
pub const CONTROL_SELECTOR: &str = ".complete-btn, .delete-btn";

/// Toggle label for an item's current state.
pub fn toggle_label(completed: bool) -> &'static str {
    if completed {
        UNCOMPLETE_LABEL
    } else {
        COMPLETE_LABEL
    }
}

pub fn render(items: &[TodoItem]) -> String {
    if items.is_empty() {
        return format!(r#"<li class="todo-item">{EMPTY_PLACEHOLDER}</li>"#);
    }
    items.iter().map(render_row).collect()
}

fn render_row(item: &TodoItem) -> String {
    let id = item.id.to_string();
    let id = Escape(&id);
    let class = if item.completed {
        "todo-item completed"
    } else {
        "todo-item"
    };
    let description = match item.description.as_deref() {
        Some(description) if !description.is_empty() => format!("<p>{}</p>", Escape(description)),
        _ => String::new(),
    };

    format!(
        concat!(
            r#"<li class="{class}"><div class="todo-content"><h3>{title}</h3>{description}</div>"#,
            r#"<div class="todo-actions"><button class="{toggle_class}" data-id="{id}" data-completed="{completed}">{label}</button>"#,
            r#"<button class="{delete_class}" data-id="{id}">{delete_label}</button></div></li>"#,
        ),
        class = class,
        title = Escape(&item.title),
        description = description,
        toggle_class = TOGGLE_CLASS,
        id = id,
        completed = item.completed,
        label = toggle_label(item.completed),
        delete_class = DELETE_CLASS,
        delete_label = DELETE_LABEL,
    )
}
