//! Gravity slider model
//!
//! The slider itself is DOM plumbing (see `host::slider`); its range, the label
//! text and how raw input is read live here so they can be tested natively.

use serde::{Deserialize, Serialize};

use crate::core::EngineError;

use super::settings::DEFAULT_GRAVITY;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GravityControlConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl Default for GravityControlConfig {
    fn default() -> Self {
        Self {
            min: 0.1,
            max: 2.0,
            step: 0.1,
            default: DEFAULT_GRAVITY,
        }
    }
}

impl GravityControlConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(self.min.is_finite() && self.max.is_finite() && self.min <= self.max) {
            return Err(EngineError::invalid(
                "gravity_control",
                format!("min {} / max {} do not form a range", self.min, self.max),
            ));
        }
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(EngineError::invalid("gravity_control.step", "must be positive"));
        }
        Ok(())
    }
}

/// Text shown above the slider, e.g. `Gravity: 0.7`
pub fn gravity_label(gravity: f64) -> String {
    format!("Gravity: {gravity}")
}

/// Read a slider value. Only the text → number step can fail; range is not
/// checked.
pub fn parse_gravity_input(raw: &str) -> Result<f64, EngineError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| EngineError::GravityInput(raw.to_string()))
}
