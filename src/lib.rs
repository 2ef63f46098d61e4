pub mod errors;
pub mod models;
pub mod normalize;

pub use errors::{NormalizeError, Result};
pub use models::elements::VisualObject;
pub use models::presentation::Presentation;
pub use models::tree::Element;
pub use normalize::{
    normalize_color, normalize_coordinate, normalize_master_slide, normalize_presentation,
    normalize_presentation_json, normalize_slide, normalize_text, normalize_visual_node,
    Normalizer, NormalizerBuilder, NormalizerOptions,
};

use wasm_bindgen::prelude::*;

/// Normalizes a JSON element tree and returns the canonical presentation JSON.
#[wasm_bindgen(js_name = normalizePresentation)]
pub fn normalize_presentation_js(tree_json: &str) -> std::result::Result<String, JsError> {
    normalize_presentation_json(tree_json).map_err(|e| JsError::new(&e.to_string()))
}

/// Routes `log` output to the browser console and panics to `console.error`.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(target_arch = "wasm32")]
    {
        // A second call finds the logger already installed; nothing to do.
        let _ = console_log::init_with_level(log::Level::Info);
    }
}
