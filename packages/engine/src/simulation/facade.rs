use wasm_bindgen::prelude::*;

use crate::core::Vec2;
use crate::domain::SimSettings;
use crate::systems::input::DragTransition;

use super::perf_stats::PerfStats;
use super::SimulationCore;

/// Touch coordinates arrive from JS flattened as `[x0, y0, x1, y1, ...]`.
fn touch_points(flat: &[f64]) -> Vec<Vec2> {
    flat.chunks_exact(2).map(|p| Vec2::new(p[0], p[1])).collect()
}

/// `true` when the input changed drag state or moved an apple
fn handled(transition: DragTransition) -> bool {
    transition != DragTransition::Ignored
}

#[wasm_bindgen]
pub struct AppleWorld {
    core: SimulationCore,
}

#[wasm_bindgen]
impl AppleWorld {
    /// Create a new world for a surface of the given size
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            core: SimulationCore::new(width, height),
        }
    }

    #[wasm_bindgen(js_name = withSettings)]
    pub fn with_settings(width: f64, height: f64, settings_json: String) -> Result<AppleWorld, JsValue> {
        let settings = SimSettings::from_json(&settings_json).map_err(JsValue::from)?;
        let core = SimulationCore::with_settings(width, height, settings).map_err(JsValue::from)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    pub fn load_settings(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_settings_json(&json).map_err(JsValue::from)
    }

    pub fn settings_json(&self) -> Result<String, JsValue> {
        self.core.settings_json().map_err(JsValue::from)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === GRAVITY ===

    pub fn set_gravity(&mut self, gravity: f64) {
        self.core.set_gravity(gravity);
    }

    pub fn gravity(&self) -> f64 {
        self.core.gravity()
    }

    /// Apply raw slider text; returns the new gravity
    pub fn set_gravity_from_input(&mut self, raw: String) -> Result<f64, JsValue> {
        self.core.set_gravity_from_input(&raw).map_err(JsValue::from)
    }

    /// `Gravity: <value>`
    pub fn gravity_label(&self) -> String {
        self.core.gravity_label()
    }

    // === SIMULATION ===

    /// Advance one tick (integrate + collide). Drawing is up to the caller.
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Surface resized. Apples keep their positions.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.core.resize(width, height);
    }

    // === INPUT (surface-local coordinates) ===

    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        handled(self.core.pointer_down(x, y))
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        handled(self.core.pointer_move(x, y))
    }

    pub fn pointer_up(&mut self) -> bool {
        handled(self.core.pointer_up())
    }

    /// `points` = `[x0, y0, x1, y1, ...]`; only the first touch is used
    pub fn touch_start(&mut self, points: Vec<f64>) -> bool {
        handled(self.core.touch_start(&touch_points(&points)))
    }

    pub fn touch_move(&mut self, points: Vec<f64>) -> bool {
        handled(self.core.touch_move(&touch_points(&points)))
    }

    pub fn touch_end(&mut self) -> bool {
        handled(self.core.touch_end())
    }

    pub fn is_dragging(&self) -> bool {
        self.core.dragged_index().is_some()
    }

    /// Index of the held apple, or -1
    pub fn dragged_index(&self) -> i32 {
        self.core.dragged_index().map_or(-1, |i| i as i32)
    }

    // === RENDER API ===

    /// Refresh the render buffer; returns its length in f64s (3 per apple)
    pub fn extract_render_buffer(&mut self) -> usize {
        self.core.extract_render_buffer()
    }

    /// Pointer to the render buffer (for a Float64Array view over wasm memory)
    pub fn render_buffer_ptr(&self) -> *const f64 {
        self.core.render_buffer().as_ptr()
    }

    pub fn render_buffer_len(&self) -> usize {
        self.core.render_buffer().len()
    }

    /// Copying alternative to the pointer API
    pub fn render_snapshot(&mut self) -> Vec<f64> {
        self.core.extract_render_buffer();
        self.core.render_buffer().to_vec()
    }

    pub fn body_x(&self, index: usize) -> f64 {
        self.core.body(index).map(|b| b.pos.x).unwrap_or(0.0)
    }

    pub fn body_y(&self, index: usize) -> f64 {
        self.core.body(index).map(|b| b.pos.y).unwrap_or(0.0)
    }

    pub fn body_size(&self, index: usize) -> f64 {
        self.core.body(index).map(|b| b.size).unwrap_or(0.0)
    }

    pub fn body_dx(&self, index: usize) -> f64 {
        self.core.body(index).map(|b| b.velocity.x).unwrap_or(0.0)
    }

    pub fn body_dy(&self, index: usize) -> f64 {
        self.core.body(index).map(|b| b.velocity.y).unwrap_or(0.0)
    }
}
