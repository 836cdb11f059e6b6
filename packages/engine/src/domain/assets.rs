//! Assets - what images the toy needs and when it may start drawing
//!
//! The frame loop must not be requested until every required image has
//! loaded. `AssetGate` is the completion counter; a failed image simply never
//! counts, so the loop never starts.

use serde::{Deserialize, Serialize};

use crate::core::EngineError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetManifest {
    pub background: String,
    pub sprite: String,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            background: "background3.jpg".to_string(),
            sprite: "apple.png".to_string(),
        }
    }
}

impl AssetManifest {
    /// Images gated before the first frame
    pub fn required_count(&self) -> u32 {
        2
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.background.trim().is_empty() {
            return Err(EngineError::invalid("assets.background", "url is empty"));
        }
        if self.sprite.trim().is_empty() {
            return Err(EngineError::invalid("assets.sprite", "url is empty"));
        }
        Ok(())
    }
}

/// Completion counter gating the first frame
#[derive(Debug)]
pub struct AssetGate {
    required: u32,
    loaded: u32,
}

impl AssetGate {
    pub fn new(required: u32) -> Self {
        Self { required, loaded: 0 }
    }

    /// Record one finished load. Returns `true` exactly once, on the load that
    /// completes the set.
    pub fn mark_loaded(&mut self) -> bool {
        if self.loaded >= self.required {
            return false;
        }
        self.loaded += 1;
        self.loaded == self.required
    }
}
