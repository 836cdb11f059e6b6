use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, HtmlInputElement};

use crate::core::EngineError;
use crate::domain::gravity::gravity_label;
use crate::domain::SimSettings;

use super::{dom_err, SharedApp};

const CONTAINER_STYLE: [(&str, &str); 8] = [
    ("position", "absolute"),
    ("top", "10px"),
    ("left", "10px"),
    ("background", "rgba(0, 0, 0, 0.5)"),
    ("padding", "10px"),
    ("border-radius", "5px"),
    ("color", "white"),
    ("z-index", "1000"),
];

fn create<T: JsCast>(document: &Document, tag: &str) -> Result<T, EngineError> {
    document
        .create_element(tag)
        .map_err(dom_err)?
        .dyn_into::<T>()
        .map_err(|_| EngineError::Dom(format!("<{tag}> has unexpected type")))
}

/// Overlay with a `Gravity: x` label and a range input wired to the world
pub(super) fn mount(app: &SharedApp, document: &Document, settings: &SimSettings) -> Result<(), EngineError> {
    let control = &settings.gravity_control;

    let container: HtmlElement = create(document, "div")?;
    let style = container.style();
    for (name, value) in CONTAINER_STYLE {
        style.set_property(name, value).map_err(dom_err)?;
    }

    let label: HtmlElement = create(document, "div")?;
    label.set_inner_text(&gravity_label(settings.gravity));

    let input: HtmlInputElement = create(document, "input")?;
    input.set_type("range");
    input.set_min(&control.min.to_string());
    input.set_max(&control.max.to_string());
    input.set_step(&control.step.to_string());
    input.set_value(&settings.gravity.to_string());
    input.style().set_property("width", "200px").map_err(dom_err)?;

    container.append_child(&label).map_err(dom_err)?;
    container.append_child(&input).map_err(dom_err)?;
    document
        .body()
        .ok_or_else(|| EngineError::Dom("no <body>".into()))?
        .append_child(&container)
        .map_err(dom_err)?;

    let on_input = {
        let app = app.clone();
        let input = input.clone();
        Closure::<dyn FnMut(Event)>::new(move |_e: Event| {
            let mut app = app.borrow_mut();
            let applied = app.world.set_gravity_from_input(&input.value());
            match applied {
                Ok(_) => label.set_inner_text(&app.world.gravity_label()),
                Err(e) => console_warn!("{}", e),
            }
        })
    };
    input
        .add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())
        .map_err(dom_err)?;
    on_input.forget();

    Ok(())
}
