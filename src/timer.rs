/// Promise-backed delay for async tasks running on the browser event loop
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Resolve after `ms` milliseconds
pub async fn sleep(ms: i32) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "No window available".to_string())?;

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms) {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("Timer failed: {:?}", e))
}
