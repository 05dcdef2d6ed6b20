use crate::dom::{js_err, window_document};
use bubbles_core::ExportFile;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Offer `file` as a browser download through a temporary object URL.
pub fn trigger_download(file: &ExportFile) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(&file.contents));
    let opts = web::BlobPropertyBag::new();
    opts.set_type(file.mime);
    let blob = web::Blob::new_with_str_sequence_and_options(&parts, &opts).map_err(js_err)?;
    let url = web::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web::HtmlAnchorElement>()
        .map_err(|e| anyhow::anyhow!("not an anchor: {:?}", e))?;
    anchor.set_href(&url);
    anchor.set_download(&file.filename);
    body.append_child(&anchor).map_err(js_err)?;
    anchor.click();

    // Revoke after the click has been dispatched.
    let cleanup = Closure::once_into_js(move || {
        _ = web::Url::revoke_object_url(&url);
        anchor.remove();
    });
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cleanup.unchecked_ref(), 0)
        .map_err(js_err)?;
    Ok(())
}
