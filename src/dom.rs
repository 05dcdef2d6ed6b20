use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

pub fn create_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("not a canvas: {:?}", e))
}

/// Size the canvas in CSS pixels and match its backing store to the device
/// pixel ratio. Returns the ratio used.
pub fn size_canvas(canvas: &web::HtmlCanvasElement, width_css: f64, height_css: f64) -> f64 {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    _ = canvas.set_attribute(
        "style",
        &format!("width:{}px;height:{}px;display:block", width_css, height_css),
    );
    canvas.set_width(((width_css * dpr) as u32).max(1));
    canvas.set_height(((height_css * dpr) as u32).max(1));
    dpr
}
