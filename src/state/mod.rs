use crate::models::Category;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

/// Host pages may embed the catalog as a JSON string under this global,
/// e.g. `window.CATALOG = '[{"id":"1","name":"Fiction"}]'`.
pub(crate) const CATALOG_GLOBAL: &str = "CATALOG";

#[derive(Clone)]
pub(crate) struct AppState {
    /// Supplied by the host shell at startup; the nav only reads it.
    pub categories: RwSignal<Vec<Category>>,
}

impl AppState {
    pub fn new() -> Self {
        let categories = load_catalog_from_window().unwrap_or_else(demo_catalog);
        Self {
            categories: RwSignal::new(categories),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);

/// Read `window.CATALOG` if the host page provided one.
///
/// Any failure (missing global, non-string value, malformed JSON) falls
/// through to `None`; the caller decides the fallback.
pub(crate) fn load_catalog_from_window() -> Option<Vec<Category>> {
    let window = web_sys::window()?;
    let raw = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str(CATALOG_GLOBAL)).ok()?;
    let json = raw.as_string()?;
    serde_json::from_str(&json).ok()
}

/// Built-in catalog used when the host page embeds nothing.
fn demo_catalog() -> Vec<Category> {
    let mk = |id: &str, name: &str| Category {
        id: id.to_string(),
        name: name.to_string(),
    };
    vec![
        mk("1", "Shirts"),
        mk("2", "Pants"),
        mk("3", "Shoes"),
        mk("4", "Hats"),
        mk("5", "Accessories"),
    ]
}
