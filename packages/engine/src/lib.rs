//! Apple Drop Engine - bouncing apple physics toy in WASM
//!
//! Apples fall, bounce off the floor and walls, knock into each other and can
//! be picked up with the mouse or a finger.
//!
//! Architecture:
//! - core/        - Math, drawing seam, logging macros, errors
//! - domain/      - Settings, gravity slider model, assets
//! - systems/     - Body integration, collisions, drag input
//! - simulation/  - Orchestration + wasm facade
//! - host/        - Browser host (canvas, listeners, frame loop), wasm32 only

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
#[cfg(target_arch = "wasm32")]
pub mod host;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("🍎 Apple Drop WASM Engine initialized!");
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{Bounds, EngineError, Vec2};
pub use domain::SimSettings;
pub use simulation::{AppleWorld, PerfStats, SimulationCore};
pub use systems::body::Body;
