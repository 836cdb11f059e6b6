//! Browser-only checks for the JS-facing error paths.
//!
//! Run with `wasm-pack test --headless --firefox packages/engine`.
#![cfg(target_arch = "wasm32")]

use appledrop_engine::AppleWorld;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn bad_settings_json_is_rejected_as_js_error() {
    let err = AppleWorld::with_settings(800.0, 600.0, "{\"apple_count\": 0}".to_string())
        .err()
        .expect("zero apples must be rejected");
    let message = err.as_string().unwrap_or_default();
    assert!(message.contains("apple_count"));
}

#[wasm_bindgen_test]
fn malformed_slider_text_keeps_gravity() {
    let mut world = AppleWorld::new(800.0, 600.0);
    assert!(world.set_gravity_from_input("heavy".to_string()).is_err());
    assert_eq!(world.gravity(), 0.7);
}

#[wasm_bindgen_test]
fn custom_settings_round_trip_through_js() {
    let world = AppleWorld::with_settings(800.0, 600.0, "{\"apple_count\": 5}".to_string())
        .expect("valid settings");
    assert_eq!(world.body_count(), 5);
    let json = world.settings_json().expect("serializable");
    assert!(json.contains("\"apple_count\":5"));
}
