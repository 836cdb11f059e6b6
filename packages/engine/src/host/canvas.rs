use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, Window};

use crate::core::{Bounds, DrawSurface, EngineError, Vec2};
use crate::systems::input::to_surface_local;

use super::dom_err;

/// `DrawSurface` over a 2D canvas context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, EngineError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(dom_err)?
            .ok_or_else(|| EngineError::Dom("2d context unavailable".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| EngineError::Dom("context is not 2d".into()))?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Match the canvas to the viewport
    pub fn fit_to_window(&self, window: &Window) -> Result<Bounds, EngineError> {
        let width = window.inner_width().map_err(dom_err)?.as_f64().unwrap_or(0.0);
        let height = window.inner_height().map_err(dom_err)?.as_f64().unwrap_or(0.0);
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
        Ok(self.bounds())
    }

    /// Client (viewport) coordinates to canvas pixels
    pub fn local_point(&self, client_x: f64, client_y: f64) -> Vec2 {
        let rect = self.canvas.get_bounding_client_rect();
        to_surface_local(client_x, client_y, rect.left(), rect.top())
    }
}

impl DrawSurface for CanvasSurface {
    type Image = HtmlImageElement;

    fn bounds(&self) -> Bounds {
        Bounds::new(self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn clear(&mut self) {
        let bounds = self.bounds();
        self.ctx.clear_rect(0.0, 0.0, bounds.width, bounds.height);
    }

    fn draw_image(&mut self, image: &HtmlImageElement, x: f64, y: f64, w: f64, h: f64) {
        // Broken or still-loading images throw; skipping the draw is the intended no-op.
        let _ = self
            .ctx
            .draw_image_with_html_image_element_and_dw_and_dh(image, x, y, w, h);
    }
}
