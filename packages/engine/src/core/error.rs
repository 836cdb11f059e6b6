use thiserror::Error;
use wasm_bindgen::JsValue;

/// Top-level error type for the engine.
///
/// The physics path (integration, collisions, hit-testing) is total and never
/// produces one of these; they come from configuration and host plumbing.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("settings parse error: {0}")]
    SettingsParse(#[from] serde_json::Error),

    #[error("invalid settings: {field}: {message}")]
    InvalidSettings { field: &'static str, message: String },

    #[error("gravity input is not a number: {0:?}")]
    GravityInput(String),

    #[error("asset failed to load: {0}")]
    AssetLoad(String),

    #[error("dom error: {0}")]
    Dom(String),
}

impl EngineError {
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidSettings {
            field,
            message: message.into(),
        }
    }
}

/// Errors cross into JS as plain message strings.
impl From<EngineError> for JsValue {
    fn from(e: EngineError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
