use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::core::EngineError;

use super::{dom_err, HostApp, SharedApp};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(callback: &Closure<dyn FnMut()>) -> Result<i32, EngineError> {
    web_sys::window()
        .ok_or_else(|| EngineError::Dom("no window".into()))?
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map_err(dom_err)
}

/// Kick off the animation loop. Each callback renders one frame and requests
/// the next; the loop runs until the page goes away.
pub(super) fn start(app: SharedApp) -> Result<(), EngineError> {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let next = callback.clone();

    *callback.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
        {
            let mut app = app.borrow_mut();
            let HostApp { world, surface, background, sprite, .. } = &mut *app;
            world.render_frame(surface, &*background, &*sprite);
        }

        if let Some(cb) = next.borrow().as_ref() {
            if let Err(e) = request_frame(cb) {
                console_error!("animation frame request failed: {}", e);
            }
        }
    }));

    console_log!("🍎 frame loop started");
    if let Some(cb) = callback.borrow().as_ref() {
        request_frame(cb)?;
    }
    Ok(())
}
