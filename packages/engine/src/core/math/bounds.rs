use serde::{Deserialize, Serialize};

/// Size of the drawing surface in pixels.
///
/// Only the right wall and the floor are stored: the left wall is `x = 0` and
/// there is no ceiling.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}
