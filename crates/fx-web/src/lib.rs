#![cfg(target_arch = "wasm32")]
//! Browser engine: intercepts the host page's media element, governs playback
//! speed and routes audio through a Dattorro reverb worklet.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

pub mod graph;
pub mod intercept;
pub mod ramp;
pub mod session;
pub mod speed;
pub mod storage;
pub mod ui;

use session::Session;
use storage::LocalPrefs;

pub(crate) fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!(format!("{:?}", e))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fx-web starting");

    let prefs = LocalPrefs::new();
    let session = Session::new(&prefs);

    // The interceptor must be live before the host page's scripts run; it is
    // the only way we ever see the hidden media element.
    if let Err(e) = intercept::install(session.clone(), prefs.clone()) {
        log::error!("[intercept] install failed: {:?}", e);
    }

    // Control surface and speed enforcement wait for the full page.
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    {
        let session = session.clone();
        let prefs = prefs.clone();
        let closure = Closure::wrap(Box::new(move || {
            ui::mount(session.clone(), prefs.clone());
            speed::start_enforcement(session.clone());
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("load", closure.as_ref().unchecked_ref())
            .ok();
        closure.forget();
    }

    Ok(())
}
