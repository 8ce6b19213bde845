//! WASM bindings for ply homogenization
//!
//! Runs the homogenization and angle sweep directly in the browser with the
//! same JSON contract as the HTTP server.

use wasm_bindgen::prelude::*;

use crate::api;

// Use wee_alloc for smaller WASM binary
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Homogenize a ply described by a JSON request, returning a JSON response
#[wasm_bindgen]
pub fn homogenize(request_json: &str) -> String {
    api::homogenize_json(request_json)
}

/// Render the SVG angle-sweep figure for a JSON request
#[wasm_bindgen]
pub fn sweep_svg(request_json: &str) -> Result<String, JsValue> {
    let request = serde_json::from_str::<api::HomogenizeRequest>(request_json)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse request: {}", e)))?;
    let results = api::run(request).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(crate::io::render_svg(&results.sweep))
}

#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
