//! On-page control surface: a percent speed field and a preset selector,
//! mounted next to the host page's volume bar.

use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;

use fx_core::{Preset, MAX_SPEED, MIN_SPEED};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use crate::session::Session;
use crate::storage::LocalPrefs;
use crate::{ramp, speed};

pub const SPEED_INPUT_ID: &str = "fx-speed-input";
pub const PRESET_SELECT_ID: &str = "fx-preset-select";
pub const CONTAINER_ID: &str = "fx-container";

const VOLUME_BAR_CLASS: &str = "volume-bar";
const MOUNT_RETRY_MS: i32 = 1000;

pub fn mount(session: Rc<Session>, prefs: LocalPrefs) {
    let document = match web::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => {
            log::error!("[ui] no document, controls not mounted");
            return;
        }
    };
    match build_controls(&document, &session, &prefs) {
        Ok(container) => attach_when_ready(document, container),
        Err(e) => log::error!("[ui] failed to build controls: {:?}", e),
    }
}

fn build_controls(
    document: &web::Document,
    session: &Rc<Session>,
    prefs: &LocalPrefs,
) -> Result<web::Element, JsValue> {
    let input: web::HtmlInputElement = document.create_element("input")?.dyn_into()?;
    input.set_id(SPEED_INPUT_ID);
    input.set_type("number");
    input.set_min(&format!("{}", MIN_SPEED * 100.0));
    input.set_max(&format!("{}", MAX_SPEED * 100.0));
    input.set_value(&format!("{}", session.last_speed() * 100.0));
    {
        let session = session.clone();
        let prefs = prefs.clone();
        let input_cb = input.clone();
        let closure = Closure::wrap(Box::new(move || {
            speed::set_speed_from_text(&session, &prefs, &input_cb.value());
        }) as Box<dyn FnMut()>);
        input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    let select: web::HtmlSelectElement = document.create_element("select")?.dyn_into()?;
    select.set_id(PRESET_SELECT_ID);
    select.set_name("reverbInput");
    for preset in Preset::ALL {
        let option: web::HtmlOptionElement = document.create_element("option")?.dyn_into()?;
        option.set_value(preset.as_str());
        option.set_text_content(Some(preset.as_str()));
        select.append_child(&option)?;
    }
    select.set_value(session.active_preset().as_str());
    {
        let session = session.clone();
        let prefs = prefs.clone();
        let select_cb = select.clone();
        let closure = Closure::wrap(Box::new(move || {
            let value = select_cb.value();
            if value == session.active_preset().as_str() {
                return;
            }
            let preset = match Preset::from_str(&value) {
                Ok(p) => p,
                Err(e) => {
                    log::warn!("[ui] {e}");
                    return;
                }
            };
            let session = session.clone();
            let prefs = prefs.clone();
            spawn_local(async move {
                if let Err(e) = ramp::apply_preset(&session, &prefs, preset).await {
                    log::error!("[ramp] preset {} failed: {e:#}", preset.as_str());
                }
            });
        }) as Box<dyn FnMut()>);
        select.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    let container = document.create_element("div")?;
    container.set_id(CONTAINER_ID);
    container.append_child(&input)?;
    container.append_child(&select)?;
    Ok(container)
}

/// Append the controls next to the volume bar, retrying on a 1 s timeout
/// while the host page has not rendered it yet.
fn attach_when_ready(document: web::Document, container: web::Element) {
    if try_attach(&document, &container) {
        return;
    }
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !try_attach(&document, &container) {
            schedule_retry(&tick_clone);
        }
    }) as Box<dyn FnMut()>));
    schedule_retry(&tick);
}

fn try_attach(document: &web::Document, container: &web::Element) -> bool {
    match document.get_elements_by_class_name(VOLUME_BAR_CLASS).item(0) {
        Some(bar) => {
            if let Err(e) = bar.append_child(container) {
                log::error!("[ui] failed to attach controls: {:?}", e);
            } else {
                log::info!("[ui] controls mounted");
            }
            true
        }
        None => false,
    }
}

fn schedule_retry(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let Some(window) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                MOUNT_RETRY_MS,
            );
        }
    }
}
