//! Thin wrappers over browser APIs used by the article views
//!
//! All functions are no-ops during server rendering.

/// Write text to the system clipboard
#[cfg(not(feature = "ssr"))]
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window available")?;
    let promise = window.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("Clipboard write failed: {:?}", e))
}

#[cfg(feature = "ssr")]
pub async fn copy_to_clipboard(_text: &str) -> Result<(), String> {
    Err("Clipboard is not available during server rendering".to_string())
}

/// Offer `content` to the user as a file download
#[cfg(not(feature = "ssr"))]
pub fn download_file(filename: &str, content: &str, mime_type: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let blob_parts = js_sys::Array::new();
    blob_parts.push(&wasm_bindgen::JsValue::from_str(content));

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime_type);

    let blob = web_sys::Blob::new_with_str_sequence_and_options(&blob_parts, &options)
        .map_err(|_| "Failed to create file")?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Failed to create download link")?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document available")?;
    let anchor = document
        .create_element("a")
        .map_err(|_| "Failed to create download link")?;
    let _ = anchor.set_attribute("href", &url);
    let _ = anchor.set_attribute("download", filename);
    if let Some(el) = anchor.dyn_ref::<web_sys::HtmlElement>() {
        el.click();
    }
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

#[cfg(feature = "ssr")]
pub fn download_file(_filename: &str, _content: &str, _mime_type: &str) -> Result<(), String> {
    Err("Downloads are not available during server rendering".to_string())
}

pub const HTML_MIME: &str = "text/html;charset=utf-8";
pub const MARKDOWN_MIME: &str = "text/markdown;charset=utf-8";
