/// Client-side file download through a temporary blob URL and anchor
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::bookmark::BookmarkRecord;
use crate::export::ExportFormat;

/// Object URL revoked on drop
struct ObjectUrl(String);

impl ObjectUrl {
    fn for_blob(blob: &Blob) -> Result<ObjectUrl, String> {
        Url::create_object_url_with_blob(blob)
            .map(ObjectUrl)
            .map_err(|e| format!("Failed to create object URL: {:?}", e))
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Err(e) = Url::revoke_object_url(&self.0) {
            log::warn!("Failed to revoke object URL: {:?}", e);
        }
    }
}

/// Anchor attached to the document body, detached on drop
struct AttachedAnchor(HtmlAnchorElement);

impl Drop for AttachedAnchor {
    fn drop(&mut self) {
        self.0.remove();
    }
}

/// Hand `bytes` to the browser as a download named `file_name`
pub fn save_file(bytes: &[u8], file_name: &str, mime_type: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "No window available".to_string())?;
    let document = window.document().ok_or_else(|| "No document available".to_string())?;
    let body = document.body().ok_or_else(|| "Document has no body".to_string())?;

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;

    // Declared before the anchor so the anchor is detached first, then the URL revoked
    let url = ObjectUrl::for_blob(&blob)?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Element is not an anchor: {:?}", e))?;
    anchor.set_href(&url.0);
    anchor.set_download(file_name);

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to attach anchor: {:?}", e))?;
    let anchor = AttachedAnchor(anchor);

    anchor.0.click();

    Ok(())
}

/// Render `records` in `format` and download the result under the format's file name
pub fn export_bookmarks(records: &[BookmarkRecord], format: ExportFormat) -> Result<(), String> {
    let bytes = format.render(records)?;
    save_file(&bytes, format.file_name(), format.mime_type())?;

    log::info!("Exported {} bookmarks to {}", records.len(), format.file_name());
    Ok(())
}
