//! Math primitives for the apple simulation
//!
//! Everything is `f64`: positions come straight from DOM coordinates and the
//! numbers handed back to JS should not pick up single-precision drift.

mod bounds;
mod vec2;

pub use bounds::Bounds;
pub use vec2::Vec2;
