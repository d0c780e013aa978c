//! DOM side of the view: the list container, the two inputs, `alert`, and
//! reading a `ClickTarget` out of a click on the list.

use todo_view::render::CONTROL_SELECTOR;
use todo_view::{ClickTarget, Surface, ViewConfig};
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlInputElement, HtmlTextAreaElement, Window};

pub fn element_by_id(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))
}

/// The description field may be a single-line input or a textarea.
enum TextField {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl TextField {
    fn find(document: &Document, id: &str) -> Result<Self, JsValue> {
        let element = element_by_id(document, id)?;
        let element = match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => return Ok(TextField::Input(input)),
            Err(element) => element,
        };
        element
            .dyn_into::<HtmlTextAreaElement>()
            .map(TextField::TextArea)
            .map_err(|_| JsValue::from_str(&format!("#{id} is not a text field")))
    }

    fn value(&self) -> String {
        match self {
            TextField::Input(input) => input.value(),
            TextField::TextArea(area) => area.value(),
        }
    }

    fn set_value(&self, value: &str) {
        match self {
            TextField::Input(input) => input.set_value(value),
            TextField::TextArea(area) => area.set_value(value),
        }
    }
}

pub struct DomSurface {
    window: Window,
    list: Element,
    title: TextField,
    description: TextField,
}

impl DomSurface {
    pub fn bind(window: &Window, document: &Document, config: &ViewConfig) -> Result<Self, JsValue> {
        Ok(Self {
            window: window.clone(),
            list: element_by_id(document, &config.list_id)?,
            title: TextField::find(document, &config.title_input_id)?,
            description: TextField::find(document, &config.description_input_id)?,
        })
    }

    pub fn list(&self) -> &Element {
        &self.list
    }
}

impl Surface for DomSurface {
    fn replace_list(&self, html: &str) {
        self.list.set_inner_html(html);
    }

    fn read_inputs(&self) -> (String, String) {
        (self.title.value(), self.description.value())
    }

    fn clear_inputs(&self) {
        self.title.set_value("");
        self.description.set_value("");
    }

    fn prompt(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            warn!(error = ?err, "alert failed");
        }
    }
}

/// The item control enclosing the click origin, if any.
pub fn click_target(event: &Event) -> Option<ClickTarget> {
    let origin = event.target()?.dyn_into::<Element>().ok()?;
    let control = origin.closest(CONTROL_SELECTOR).ok()??;
    Some(ClickTarget {
        class_name: control.class_name(),
        data_id: control.get_attribute("data-id"),
        data_completed: control.get_attribute("data-completed"),
        text: control.text_content().unwrap_or_default(),
    })
}
