//! Domain - what the toy is made of: settings, the gravity slider, assets

pub mod assets;
pub mod gravity;
pub mod settings;

pub use assets::{AssetGate, AssetManifest};
pub use gravity::GravityControlConfig;
pub use settings::SimSettings;
