/// Bookmark Exporter - simulated Twitter connection with local HTML export
/// Built with Rust + WASM + Yew

pub mod bookmark;
pub mod download;
pub mod export;
pub mod session;
pub mod timer;
pub mod ui;

use wasm_bindgen::prelude::*;

use crate::bookmark::BookmarkRecord;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Render bookmarks passed from JavaScript into the export document
#[wasm_bindgen]
pub fn render_bookmarks_html(records: JsValue) -> Result<String, JsValue> {
    let records: Vec<BookmarkRecord> = serde_wasm_bindgen::from_value(records)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse bookmarks: {:?}", e)))?;

    String::from_utf8(export::render_html(&records))
        .map_err(|e| JsValue::from_str(&format!("Rendered document is not UTF-8: {:?}", e)))
}

// Start the Yew app
#[wasm_bindgen]
pub fn start_app() {
    yew::Renderer::<ui::app::App>::new().render();
}
