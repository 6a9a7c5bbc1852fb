//! Speed governor.
//!
//! Applies a validated rate to every intercepted element and keeps
//! re-asserting it on a fixed cadence, because the host page resets
//! `playbackRate` to 1.0 during its own lifecycle events.

use std::cell::RefCell;
use std::rc::Rc;

use fx_core::{speed, store_speed};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::intercept::set_preserves_pitch;
use crate::session::Session;
use crate::storage::LocalPrefs;

const ENFORCE_INTERVAL_MS: i32 = 500;

/// Validate and apply an explicit multiplier. Returns whether it was applied.
pub fn set_speed(session: &Session, prefs: &LocalPrefs, candidate: f64) -> bool {
    if !speed::validate(candidate, session.last_speed()) {
        log::debug!("[speed] rejected {candidate}");
        return false;
    }
    store_speed(prefs, candidate);
    session.set_last_speed(candidate);
    apply_to_all(session, candidate);
    log::info!("[speed] applied {candidate}");
    true
}

/// Validate and apply the percent text of the speed field ("150" -> 1.5).
pub fn set_speed_from_text(session: &Session, prefs: &LocalPrefs, text: &str) -> bool {
    match speed::parse_percent_text(text) {
        Some(candidate) => set_speed(session, prefs, candidate),
        None => {
            log::debug!("[speed] unparseable input {text:?}");
            false
        }
    }
}

fn apply_to_all(session: &Session, value: f64) {
    session.for_each_media(|media| {
        if media.playback_rate() != value || media.default_playback_rate() != value {
            media.set_playback_rate(value);
            media.set_default_playback_rate(value);
        }
        set_preserves_pitch(media, false);
    });
}

/// Re-apply the last accepted speed every 500 ms for the rest of the page's
/// lifetime. A failing cycle must never cancel the loop, so the reschedule
/// happens unconditionally at the end of every invocation.
pub fn start_enforcement(session: Rc<Session>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        apply_to_all(&session, session.last_speed());
        schedule(&tick_clone);
    }) as Box<dyn FnMut()>));
    schedule(&tick);
    log::info!("[speed] enforcement loop started");
}

fn schedule(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let Some(window) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                ENFORCE_INTERVAL_MS,
            );
        }
    }
}
