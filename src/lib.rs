#![cfg(target_arch = "wasm32")]
use bubbles_core::{BubbleApp, SimConfig, GENRES};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod download;
mod events;
mod frame;
mod input;
mod render;
mod storage;

use constants::{CANVAS_HEIGHT_PX, EXPORT_BUTTON_CLASS, EXPORT_BUTTON_TEXT, FALLBACK_WIDTH_PX};
use dom::js_err;
use storage::BrowserStore;

pub(crate) type App = BubbleApp<BrowserStore>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("bubbles-web starting");
    Ok(())
}

/// A mounted voting widget. Call `destroy` to tear it down.
#[wasm_bindgen]
pub struct BubbleWidget {
    app: Rc<RefCell<App>>,
    frame_loop: frame::LoopHandle,
    surface: Rc<render::CanvasSurface>,
    listeners: Vec<events::Listener>,
    button: web::Element,
}

#[wasm_bindgen]
impl BubbleWidget {
    #[wasm_bindgen(js_name = totalVotes)]
    pub fn total_votes(&self) -> f64 {
        self.app.borrow().tally().total() as f64
    }

    /// Stop ticking, clear the world, then release the canvas.
    pub fn destroy(self) {
        self.frame_loop.stop();
        self.app.borrow_mut().teardown();
        drop(self.listeners);
        self.surface.release();
        self.button.remove();
        log::info!("bubbles-web destroyed");
    }
}

/// Mount the widget into the element with id `container_id`.
#[wasm_bindgen]
pub fn mount(container_id: &str) -> Result<BubbleWidget, JsValue> {
    mount_inner(container_id).map_err(|e| {
        log::error!("mount error: {:?}", e);
        JsValue::from_str(&format!("{:#}", e))
    })
}

fn mount_inner(container_id: &str) -> anyhow::Result<BubbleWidget> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", container_id))?;

    let width = match container.client_width() {
        w if w > 0 => w as f64,
        _ => FALLBACK_WIDTH_PX,
    };
    let height = CANVAS_HEIGHT_PX;

    let canvas = dom::create_canvas(&document)?;
    let dpr = dom::size_canvas(&canvas, width, height);
    container.append_child(&canvas).map_err(js_err)?;
    let surface = Rc::new(render::CanvasSurface::new(canvas.clone(), width, height, dpr)?);

    let button = document.create_element("button").map_err(js_err)?;
    button.set_text_content(Some(EXPORT_BUTTON_TEXT));
    button.set_class_name(EXPORT_BUTTON_CLASS);
    container.append_child(&button).map_err(js_err)?;

    let config = SimConfig::default()
        .with_size(width as f32, height as f32)
        .with_seed(rand::random());
    let app = Rc::new(RefCell::new(BubbleApp::new(GENRES, BrowserStore::open(), config)));

    let arena = app.borrow().sim().arena();
    let listeners = vec![
        events::wire_pointerdown(&canvas, app.clone(), arena)?,
        events::wire_pointermove(&canvas, app.clone(), arena)?,
        events::wire_pointer_release(&canvas, app.clone(), "pointerup")?,
        events::wire_pointer_release(&canvas, app.clone(), "pointercancel")?,
        events::wire_export_button(&button, app.clone())?,
    ];

    let frame_loop = frame::start_loop(frame::FrameContext::new(app.clone(), surface.clone()));
    log::info!("[mount] #{} {}x{}", container_id, width, height);

    Ok(BubbleWidget {
        app,
        frame_loop,
        surface,
        listeners,
        button,
    })
}
