use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

use crate::core::EngineError;

use super::{frame_loop, SharedApp};

/// Start loading `url` into `image`. The frame loop is requested by whichever
/// load completes the gate; a failed image is logged and the loop never starts.
pub(super) fn load(app: &SharedApp, image: &HtmlImageElement, url: &str) {
    let onload = {
        let app = app.clone();
        let url = url.to_string();
        Closure::<dyn FnMut()>::new(move || {
            let ready = app.borrow_mut().gate.mark_loaded();
            console_log!("asset loaded: {}", url);
            if ready {
                if let Err(e) = frame_loop::start(app.clone()) {
                    console_error!("failed to start frame loop: {}", e);
                }
            }
        })
    };

    let onerror = {
        let url = url.to_string();
        Closure::<dyn FnMut()>::new(move || {
            let err = EngineError::AssetLoad(url.clone());
            console_error!("{}; animation will not start", err);
        })
    };

    image.set_onload(Some(onload.as_ref().unchecked_ref()));
    image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onload.forget();
    onerror.forget();

    image.set_src(url);
}
