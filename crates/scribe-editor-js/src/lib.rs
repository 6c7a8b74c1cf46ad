//! WASM bindings for the scribe markdown editor.
//!
//! Exposes the formatting engine to JavaScript/TypeScript apps: stateless
//! format functions, the action registry, and a `JsEditor` that owns the
//! document text and selection.

mod actions;
mod editor;
mod types;

pub use actions::*;
pub use editor::*;
pub use types::*;

use wasm_bindgen::prelude::*;

/// Initialize panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    #[cfg(all(target_family = "wasm", target_os = "unknown"))]
    tracing_wasm::set_as_global_default();
}
