//! Browser frontend (wasm32 only).

pub mod app;

use wasm_bindgen::prelude::*;

/// Called when the wasm module loads.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(app::App);
}
