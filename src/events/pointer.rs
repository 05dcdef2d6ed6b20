use super::Listener;
use crate::input;
use crate::App;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Votes on pointer-down over a bubble and grabs it; misses are ignored.
pub fn wire_pointerdown(
    canvas: &web::HtmlCanvasElement,
    app: Rc<RefCell<App>>,
    arena: Vec2,
) -> anyhow::Result<Listener> {
    let canvas_for_listener = canvas.clone();
    Listener::new(canvas.as_ref(), "pointerdown", move |ev: web::Event| {
        let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let pos = input::pointer_arena_px(mouse, &canvas_for_listener, arena);
        let mut app = app.borrow_mut();
        if app.pointer_down(pos).is_none() {
            return;
        }
        ev.prevent_default();
        if app.drag_start(pos).is_some() {
            if let Some(p) = ev.dyn_ref::<web::PointerEvent>() {
                // keep move/up events coming after the pointer leaves the canvas
                _ = canvas_for_listener.set_pointer_capture(p.pointer_id());
            }
        }
    })
}

/// Moves the drag target while a bubble is held.
pub fn wire_pointermove(
    canvas: &web::HtmlCanvasElement,
    app: Rc<RefCell<App>>,
    arena: Vec2,
) -> anyhow::Result<Listener> {
    let canvas_for_listener = canvas.clone();
    Listener::new(canvas.as_ref(), "pointermove", move |ev: web::Event| {
        let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let mut app = app.borrow_mut();
        if app.dragged().is_none() {
            return;
        }
        app.drag_to(input::pointer_arena_px(mouse, &canvas_for_listener, arena));
    })
}

/// Releases the held bubble on `event` (pointerup or pointercancel).
pub fn wire_pointer_release(
    canvas: &web::HtmlCanvasElement,
    app: Rc<RefCell<App>>,
    event: &'static str,
) -> anyhow::Result<Listener> {
    Listener::new(canvas.as_ref(), event, move |_ev: web::Event| {
        app.borrow_mut().drag_end();
    })
}
