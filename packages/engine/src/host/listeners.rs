use wasm_bindgen::closure::WasmClosure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, MouseEvent, TouchEvent, Window};

use crate::core::{EngineError, Vec2};

use super::{dom_err, SharedApp};

fn listen<T>(target: &EventTarget, event: &str, closure: Closure<T>) -> Result<(), EngineError>
where
    T: ?Sized + WasmClosure,
{
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(dom_err)?;
    closure.forget();
    Ok(())
}

/// Surface-local coordinates of every active touch, in touch order
fn touch_points(app: &SharedApp, event: &TouchEvent) -> Vec<Vec2> {
    let touches = event.touches();
    let app = app.borrow();
    (0..touches.length())
        .filter_map(|i| touches.get(i))
        .map(|t| app.surface.local_point(t.client_x() as f64, t.client_y() as f64))
        .collect()
}

fn mouse_point(app: &SharedApp, event: &MouseEvent) -> Vec2 {
    app.borrow()
        .surface
        .local_point(event.client_x() as f64, event.client_y() as f64)
}

pub(super) fn attach(app: &SharedApp, window: &Window) -> Result<(), EngineError> {
    let canvas: EventTarget = app.borrow().surface.canvas().clone().into();

    // === MOUSE ===
    {
        let app = app.clone();
        listen(&canvas, "mousedown", Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
            let p = mouse_point(&app, &e);
            app.borrow_mut().world.pointer_down(p.x, p.y);
        }))?;
    }
    {
        let app = app.clone();
        listen(&canvas, "mousemove", Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
            let p = mouse_point(&app, &e);
            app.borrow_mut().world.pointer_move(p.x, p.y);
        }))?;
    }
    {
        let app = app.clone();
        listen(&canvas, "mouseup", Closure::<dyn FnMut(MouseEvent)>::new(move |_e: MouseEvent| {
            app.borrow_mut().world.pointer_up();
        }))?;
    }

    // === TOUCH ===
    {
        let app = app.clone();
        listen(&canvas, "touchstart", Closure::<dyn FnMut(TouchEvent)>::new(move |e: TouchEvent| {
            let points = touch_points(&app, &e);
            app.borrow_mut().world.touch_start(&points);
        }))?;
    }
    {
        let app = app.clone();
        listen(&canvas, "touchmove", Closure::<dyn FnMut(TouchEvent)>::new(move |e: TouchEvent| {
            let points = touch_points(&app, &e);
            app.borrow_mut().world.touch_move(&points);
        }))?;
    }
    {
        let app = app.clone();
        listen(&canvas, "touchend", Closure::<dyn FnMut(TouchEvent)>::new(move |_e: TouchEvent| {
            app.borrow_mut().world.touch_end();
        }))?;
    }

    // === RESIZE ===
    {
        let app = app.clone();
        let win = window.clone();
        let target: &EventTarget = window.as_ref();
        listen(target, "resize", Closure::<dyn FnMut()>::new(move || {
            let mut app = app.borrow_mut();
            let fitted = app.surface.fit_to_window(&win);
            match fitted {
                Ok(bounds) => app.world.resize(bounds.width, bounds.height),
                Err(e) => console_warn!("resize failed: {}", e),
            }
        }))?;
    }

    Ok(())
}
