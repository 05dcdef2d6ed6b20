use glam::Vec2;
use web_sys as web;

/// Pointer position in arena pixels (the canvas' CSS box mapped onto the
/// simulated arena).
#[inline]
pub fn pointer_arena_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement, arena: Vec2) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w > 0.0 && h > 0.0 {
        Vec2::new(x_css / w * arena.x, y_css / h * arena.y)
    } else {
        Vec2::new(x_css, y_css)
    }
}
