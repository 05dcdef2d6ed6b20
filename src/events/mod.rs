pub mod export;
pub mod pointer;

pub use export::wire_export_button;
pub use pointer::{wire_pointer_release, wire_pointerdown, wire_pointermove};

use crate::dom::js_err;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM event listener that unregisters itself when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(js_err)?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
