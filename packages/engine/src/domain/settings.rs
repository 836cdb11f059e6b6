//! SimSettings - tunables for a simulation run
//!
//! Loaded from JSON (every field optional, missing ones fall back to the
//! defaults below):
//!
//! ```json
//! {
//!   "apple_count": 25,
//!   "apple_size": 50.0,
//!   "gravity": 0.7,
//!   "damping": 0.8,
//!   "collision_restitution": 0.7,
//!   "separation_share": 0.5,
//!   "max_initial_speed_x": 3.0,
//!   "max_initial_lift": 3.0,
//!   "seed": 12345,
//!   "verbose": false,
//!   "gravity_control": { "min": 0.1, "max": 2.0, "step": 0.1, "default": 0.7 },
//!   "assets": { "background": "background3.jpg", "sprite": "apple.png" }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::core::EngineError;

use super::assets::AssetManifest;
use super::gravity::GravityControlConfig;

pub const DEFAULT_APPLE_COUNT: u32 = 25;
/// Upper bound on the population; collisions are an O(n²) pass every frame
pub const MAX_APPLE_COUNT: u32 = 2_000;
pub const DEFAULT_APPLE_SIZE: f64 = 50.0;
pub const DEFAULT_GRAVITY: f64 = 0.7;
/// Energy kept on a floor bounce
pub const DEFAULT_DAMPING: f64 = 0.8;
/// Velocity scale applied when two apples swap velocities
pub const DEFAULT_COLLISION_RESTITUTION: f64 = 0.7;
/// Fraction of the overlap each apple is pushed along the contact angle
pub const DEFAULT_SEPARATION_SHARE: f64 = 0.5;
pub const DEFAULT_SEED: u32 = 12345;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimSettings {
    pub apple_count: u32,
    pub apple_size: f64,
    pub gravity: f64,
    pub damping: f64,
    pub collision_restitution: f64,
    pub separation_share: f64,
    /// Initial dx is uniform in `[-max/2, max/2)`
    pub max_initial_speed_x: f64,
    /// Initial dy is uniform in `(-max, 0]` (always thrown upwards)
    pub max_initial_lift: f64,
    pub seed: u32,
    /// Log drag transitions and settings changes to the console
    pub verbose: bool,
    pub gravity_control: GravityControlConfig,
    pub assets: AssetManifest,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            apple_count: DEFAULT_APPLE_COUNT,
            apple_size: DEFAULT_APPLE_SIZE,
            gravity: DEFAULT_GRAVITY,
            damping: DEFAULT_DAMPING,
            collision_restitution: DEFAULT_COLLISION_RESTITUTION,
            separation_share: DEFAULT_SEPARATION_SHARE,
            max_initial_speed_x: 3.0,
            max_initial_lift: 3.0,
            seed: DEFAULT_SEED,
            verbose: false,
            gravity_control: GravityControlConfig::default(),
            assets: AssetManifest::default(),
        }
    }
}

impl SimSettings {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let settings: SimSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Structural checks only. Gravity is not range-checked: whatever number
    /// the slider or a caller hands over is applied as is.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.apple_count == 0 {
            return Err(EngineError::invalid("apple_count", "must be at least 1"));
        }
        if self.apple_count > MAX_APPLE_COUNT {
            return Err(EngineError::invalid(
                "apple_count",
                format!("must be at most {MAX_APPLE_COUNT}, got {}", self.apple_count),
            ));
        }
        if !(self.apple_size.is_finite() && self.apple_size > 0.0) {
            return Err(EngineError::invalid(
                "apple_size",
                format!("must be a positive number, got {}", self.apple_size),
            ));
        }
        for (field, value) in [
            ("damping", self.damping),
            ("collision_restitution", self.collision_restitution),
            ("separation_share", self.separation_share),
            ("max_initial_speed_x", self.max_initial_speed_x),
            ("max_initial_lift", self.max_initial_lift),
        ] {
            if !value.is_finite() {
                return Err(EngineError::invalid(field, format!("must be finite, got {value}")));
            }
        }
        self.gravity_control.validate()?;
        self.assets.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let settings = SimSettings::from_json("{}").expect("empty object should parse");
        assert_eq!(settings, SimSettings::default());
        assert_eq!(settings.apple_count, 25);
        assert_eq!(settings.apple_size, 50.0);
        assert_eq!(settings.gravity, 0.7);
        assert_eq!(settings.damping, 0.8);
    }

    #[test]
    fn partial_json_overrides_only_given_fields() {
        let settings = SimSettings::from_json(r#"{"apple_count": 3, "gravity": 5.5}"#).unwrap();
        assert_eq!(settings.apple_count, 3);
        // Out of slider range but accepted verbatim.
        assert_eq!(settings.gravity, 5.5);
        assert_eq!(settings.damping, DEFAULT_DAMPING);
        assert_eq!(settings.assets.sprite, "apple.png");
    }

    #[test]
    fn rejects_zero_apples_and_bad_size() {
        let err = SimSettings::from_json(r#"{"apple_count": 0}"#).unwrap_err();
        assert!(matches!(err, EngineError::InvalidSettings { field: "apple_count", .. }));

        let err = SimSettings::from_json(r#"{"apple_size": -4.0}"#).unwrap_err();
        assert!(matches!(err, EngineError::InvalidSettings { field: "apple_size", .. }));
    }

    #[test]
    fn rejects_oversized_population() {
        let err = SimSettings::from_json(r#"{"apple_count": 4294967295}"#).unwrap_err();
        assert!(matches!(err, EngineError::InvalidSettings { field: "apple_count", .. }));

        let at_limit = format!(r#"{{"apple_count": {MAX_APPLE_COUNT}}}"#);
        assert_eq!(SimSettings::from_json(&at_limit).unwrap().apple_count, MAX_APPLE_COUNT);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SimSettings::from_json("{ apple_count: ").unwrap_err();
        assert!(matches!(err, EngineError::SettingsParse(_)));
    }

    #[test]
    fn json_round_trip_keeps_custom_values() {
        let mut settings = SimSettings::default();
        settings.seed = 7;
        settings.verbose = true;
        let json = settings.to_json().unwrap();
        assert_eq!(SimSettings::from_json(&json).unwrap(), settings);
    }
}
