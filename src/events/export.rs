use super::Listener;
use crate::constants::{EXPORT_PASSPHRASE, EXPORT_PROMPT};
use crate::download;
use crate::App;
use bubbles_core::passphrase_accepts;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn ask_passphrase() -> Option<String> {
    web::window()?.prompt_with_message(EXPORT_PROMPT).ok().flatten()
}

/// Export CSV, download it and reset every tally on click.
pub fn wire_export_button(button: &web::Element, app: Rc<RefCell<App>>) -> anyhow::Result<Listener> {
    Listener::new(button.as_ref(), "click", move |_ev: web::Event| {
        if EXPORT_PASSPHRASE.is_some() {
            let entered = ask_passphrase();
            if !passphrase_accepts(EXPORT_PASSPHRASE, entered.as_deref()) {
                log::info!("[export] passphrase rejected");
                return;
            }
        }
        let now = chrono::Local::now().naive_local();
        app.borrow_mut()
            .export_and_reset(now, download::trigger_download);
    })
}
