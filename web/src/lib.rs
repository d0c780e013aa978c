//! Browser host for `todo-view`.
//!
//! Wires a `TodoView` to the page: `DomSurface` for the list and inputs,
//! `FetchTransport` for HTTP, and the browser console as the log sink.
//! Two listeners are attached once at startup (the add button and the list
//! container) and never rebound.

mod console;
mod dom;
mod fetch;

use std::rc::Rc;

use todo_view::{TodoView, ViewConfig};
use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, Window};

pub use dom::DomSurface;
pub use fetch::FetchTransport;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// Global the page may set before the module loads to override defaults.
const CONFIG_GLOBAL: &str = "todoViewConfig";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console::init();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let config = read_config(&window);

    let surface = DomSurface::bind(&window, &document, &config)?;
    let list = surface.list().clone();
    let add_button = dom::element_by_id(&document, &config.add_button_id)?;
    let view = Rc::new(TodoView::new(&config, FetchTransport::new(), surface));

    let on_add = {
        let view = view.clone();
        Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            let view = view.clone();
            spawn_local(async move { view.submit().await });
        })
    };
    add_button.add_event_listener_with_callback("click", on_add.as_ref().unchecked_ref())?;
    on_add.forget();

    let on_list_click = {
        let view = view.clone();
        Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(target) = dom::click_target(&event) else {
                return;
            };
            let view = view.clone();
            spawn_local(async move { view.handle_click(&target).await });
        })
    };
    list.add_event_listener_with_callback("click", on_list_click.as_ref().unchecked_ref())?;
    on_list_click.forget();

    info!(endpoint = %config.endpoint, "todo view started");
    spawn_local(async move { view.load().await });
    Ok(())
}

/// `window.todoViewConfig` if present and well-formed, defaults otherwise.
fn read_config(window: &Window) -> ViewConfig {
    let raw = js_sys::Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL)).unwrap_or(JsValue::UNDEFINED);
    if raw.is_undefined() || raw.is_null() {
        return ViewConfig::default();
    }
    match serde_wasm_bindgen::from_value(raw) {
        Ok(config) => config,
        Err(err) => {
            warn!(error = %err, "ignoring malformed todoViewConfig");
            ViewConfig::default()
        }
    }
}
