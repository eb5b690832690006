//! Floatfield Engine - per-frame physics for a field of floating shapes
//!
//! A handful of bodies breathe around their anchors, get shoved by the
//! pointer and push each other apart. Rendering stays on the JS side; the
//! engine hands over one packed transform buffer per frame.
//!
//! Architecture:
//! - core/        - Math, clock, logging macros
//! - domain/      - Settings, presets, layouts, mesh templates
//! - systems/     - Bodies, impulses, picking, collisions
//! - simulation/  - Tick driver, lifecycle, JS facade
//! - api/         - Browser glue (listeners, frame loop, render sink)

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod api;

use wasm_bindgen::prelude::*;

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

    log_info!("floatfield engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Names accepted by `Scene.fromPreset`
#[wasm_bindgen(js_name = presetNames)]
pub fn preset_names() -> Vec<JsValue> {
    domain::settings::PRESET_NAMES.iter().map(|n| JsValue::from_str(n)).collect()
}

// Re-export main types
pub use crate::core::Vec3;
pub use domain::{ImpulseMode, MeshTemplate, SceneSettings};
pub use simulation::{PerfStats, Scene, SceneCore, TRANSFORM_STRIDE};
