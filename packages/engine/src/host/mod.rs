//! Browser host - runs the whole toy on a page
//!
//! Owns the canvas, the two images, the input listeners, the gravity slider
//! and the animation frame loop. Everything shares one `HostApp` behind
//! `Rc<RefCell<_>>`; callbacks run one at a time on the JS thread, so the
//! borrows never overlap.
//!
//! ```js
//! import init, { start } from "appledrop-engine";
//! await init();
//! start("appleCanvas");
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, HtmlImageElement};

use crate::core::EngineError;
use crate::domain::{AssetGate, SimSettings};
use crate::simulation::SimulationCore;

mod assets;
mod canvas;
mod frame_loop;
mod listeners;
mod slider;

pub use canvas::CanvasSurface;

pub(crate) struct HostApp {
    world: SimulationCore,
    surface: CanvasSurface,
    background: HtmlImageElement,
    sprite: HtmlImageElement,
    gate: AssetGate,
}

pub(crate) type SharedApp = Rc<RefCell<HostApp>>;

pub(crate) fn dom_err(value: JsValue) -> EngineError {
    EngineError::Dom(format!("{value:?}"))
}

/// Start the toy on `<canvas id=canvas_id>` with default settings
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<(), JsValue> {
    start_with_settings(canvas_id, "{}")
}

/// Start the toy with a `SimSettings` JSON document
#[wasm_bindgen(js_name = startWithSettings)]
pub fn start_with_settings(canvas_id: &str, settings_json: &str) -> Result<(), JsValue> {
    crate::init();
    let settings = SimSettings::from_json(settings_json)?;
    mount(canvas_id, settings)?;
    Ok(())
}

fn mount(canvas_id: &str, settings: SimSettings) -> Result<(), EngineError> {
    let window = web_sys::window().ok_or_else(|| EngineError::Dom("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| EngineError::Dom("no document".into()))?;

    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| EngineError::Dom(format!("no element #{canvas_id}")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| EngineError::Dom(format!("#{canvas_id} is not a canvas")))?;

    let surface = CanvasSurface::new(canvas)?;
    let bounds = surface.fit_to_window(&window)?;

    let world = SimulationCore::with_settings(bounds.width, bounds.height, settings.clone())?;
    let background = HtmlImageElement::new().map_err(dom_err)?;
    let sprite = HtmlImageElement::new().map_err(dom_err)?;

    let app: SharedApp = Rc::new(RefCell::new(HostApp {
        world,
        surface,
        background: background.clone(),
        sprite: sprite.clone(),
        gate: AssetGate::new(settings.assets.required_count()),
    }));

    listeners::attach(&app, &window)?;
    slider::mount(&app, &document, &settings)?;

    // Handlers are in place before `src` is set, so no load event is missed.
    assets::load(&app, &background, &settings.assets.background);
    assets::load(&app, &sprite, &settings.assets.sprite);

    Ok(())
}
