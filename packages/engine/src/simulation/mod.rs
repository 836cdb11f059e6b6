//! Simulation - the apple population and everything that mutates it
//!
//! `SimulationCore` only orchestrates; the work is delegated:
//! - integration and hit-testing live on `Body` (systems/body)
//! - pair resolution in systems/collision
//! - the drag state machine in systems/input
//!
//! One tick per call, no delta time. The host decides how often to call.

use crate::core::{Bounds, DrawSurface, EngineError};
use crate::domain::SimSettings;
use crate::systems::body::Body;
use crate::systems::collision::CollisionParams;
use crate::systems::input::{DragController, DragTransition};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::AppleWorld;
pub use perf_stats::PerfStats;
pub use render_extract::RENDER_STRIDE;

use perf_timer::PerfTimer;

/// The simulation world
pub struct SimulationCore {
    settings: SimSettings,
    bodies: Vec<Body>,
    bounds: Bounds,
    drag: DragController,

    // Settings (live)
    gravity: f64,

    // State
    frame: u64,
    rng_state: u32,

    // Render extraction
    render_buffer: Vec<f64>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Create a world of the given surface size with default settings
    pub fn new(width: f64, height: f64) -> Self {
        init::create_simulation_core(width, height, SimSettings::default())
    }

    pub fn with_settings(width: f64, height: f64, settings: SimSettings) -> Result<Self, EngineError> {
        settings.validate()?;
        Ok(init::create_simulation_core(width, height, settings))
    }

    /// Build a world from explicit bodies (no random spawn)
    pub fn from_bodies(bounds: Bounds, settings: SimSettings, bodies: Vec<Body>) -> Self {
        init::create_from_bodies(bounds, settings, bodies)
    }

    /// Replace settings from JSON and respawn the population
    pub fn load_settings_json(&mut self, json: &str) -> Result<(), EngineError> {
        settings::load_settings_json(self, json)
    }

    pub fn settings_json(&self) -> Result<String, EngineError> {
        self.settings.to_json()
    }

    pub fn settings(&self) -> &SimSettings {
        &self.settings
    }

    pub fn bounds(&self) -> Bounds { self.bounds }

    pub fn width(&self) -> f64 { self.bounds.width }

    pub fn height(&self) -> f64 { self.bounds.height }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn gravity(&self) -> f64 {
        settings::gravity(self)
    }

    /// Overwrite gravity; picked up by every apple on the next tick.
    pub fn set_gravity(&mut self, gravity: f64) {
        settings::set_gravity(self, gravity);
    }

    /// Apply raw slider text. Malformed text leaves gravity unchanged.
    pub fn set_gravity_from_input(&mut self, raw: &str) -> Result<f64, EngineError> {
        settings::set_gravity_from_input(self, raw)
    }

    pub fn gravity_label(&self) -> String {
        settings::gravity_label(self)
    }

    pub fn damping(&self) -> f64 {
        self.settings.damping
    }

    pub fn collision_params(&self) -> CollisionParams {
        CollisionParams {
            restitution: self.settings.collision_restitution,
            separation_share: self.settings.separation_share,
        }
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }

    /// Advance one tick without drawing: integrate each apple, then resolve
    /// collisions.
    pub fn step(&mut self) {
        step::step(self, |_| {});
    }

    /// One full animation frame: clear, background, integrate+draw each
    /// apple, resolve collisions.
    pub fn render_frame<S: DrawSurface>(&mut self, surface: &mut S, background: &S::Image, sprite: &S::Image) {
        step::render_frame(self, surface, background, sprite);
    }

    /// Surface resized. Apples are not moved or re-clamped.
    pub fn resize(&mut self, width: f64, height: f64) {
        commands::resize(self, width, height);
    }

    // === INPUT API ===

    pub fn pointer_down(&mut self, x: f64, y: f64) -> DragTransition {
        commands::pointer_down(self, x, y)
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> DragTransition {
        commands::pointer_move(self, x, y)
    }

    pub fn pointer_up(&mut self) -> DragTransition {
        commands::pointer_up(self)
    }

    /// Touch start with all active touch points (surface coordinates); only the
    /// first is used.
    pub fn touch_start(&mut self, points: &[crate::core::Vec2]) -> DragTransition {
        commands::touch_start(self, points)
    }

    pub fn touch_move(&mut self, points: &[crate::core::Vec2]) -> DragTransition {
        commands::touch_move(self, points)
    }

    pub fn touch_end(&mut self) -> DragTransition {
        commands::touch_end(self)
    }

    pub fn dragged_index(&self) -> Option<usize> {
        self.drag.active().map(|d| d.index)
    }

    // === RENDER EXTRACTION ===

    /// Refresh the flat `[x, y, size]` buffer and return its length in f64s
    pub fn extract_render_buffer(&mut self) -> usize {
        render_extract::extract_render_buffer(self)
    }

    pub fn render_buffer(&self) -> &[f64] {
        &self.render_buffer
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
