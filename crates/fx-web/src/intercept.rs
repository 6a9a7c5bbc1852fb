//! Media element interception.
//!
//! The host page keeps its audio/video element hidden inside its own bundles;
//! the only reliable way to get a handle is to wrap `document.createElement`
//! before the page's scripts run. The wrapper always delegates to the
//! original, so non-media creation is untouched: its exceptions propagate to
//! the caller as-is, and any failure on our side is logged and swallowed so
//! the page's own construction always succeeds.

use std::rc::Rc;

use fx_core::{load_preset, load_speed, Preset};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use crate::ramp;
use crate::session::Session;
use crate::storage::LocalPrefs;

/// Replace `document.createElement` with a wrapper that registers every
/// audio/video element the page creates.
pub fn install(session: Rc<Session>, prefs: LocalPrefs) -> Result<(), JsValue> {
    let document = web::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let original: js_sys::Function =
        js_sys::Reflect::get(document.as_ref(), &JsValue::from_str("createElement"))?
            .dyn_into()?;
    let doc_this: JsValue = document.clone().into();

    let wrapper = Closure::wrap(Box::new(move |tag: JsValue, options: JsValue| -> JsValue {
        let element = match original.call2(&doc_this, &tag, &options) {
            Ok(el) => el,
            // createElement itself rejected the arguments; the caller gets
            // the exact exception it would have seen without the wrapper.
            Err(e) => wasm_bindgen::throw_val(e),
        };
        let kind = tag.as_string().unwrap_or_default();
        if kind == "audio" || kind == "video" {
            if let Err(e) = register_media(&session, &prefs, &element) {
                log::warn!("[intercept] media registration failed: {:?}", e);
            }
        }
        element
    }) as Box<dyn FnMut(JsValue, JsValue) -> JsValue>);

    js_sys::Reflect::set(
        document.as_ref(),
        &JsValue::from_str("createElement"),
        wrapper.as_ref(),
    )?;
    wrapper.forget();
    log::info!("[intercept] createElement wrapper installed");
    Ok(())
}

fn register_media(
    session: &Rc<Session>,
    prefs: &LocalPrefs,
    element: &JsValue,
) -> Result<(), JsValue> {
    let media: web::HtmlMediaElement = element.clone().dyn_into()?;

    // Pre-seed the persisted speed so playback starts at the user's rate
    // before any UI interaction.
    if let Some(speed) = load_speed(prefs) {
        media.set_playback_rate(speed);
        media.set_default_playback_rate(speed);
        set_preserves_pitch(&media, false);
        log::info!("[intercept] seeded stored speed {speed}");
    }

    wire_first_play(session, prefs, &media);
    session.register_media(media);
    Ok(())
}

fn wire_first_play(session: &Rc<Session>, prefs: &LocalPrefs, media: &web::HtmlMediaElement) {
    let session = session.clone();
    let prefs = prefs.clone();
    let media_cb = media.clone();
    let closure = Closure::wrap(Box::new(move || {
        // One-shot per page load, not per element.
        media_cb.set_onplaying(None);
        if !session.take_first_play() {
            return;
        }
        let stored = load_preset(&prefs);
        if stored == Preset::None {
            return;
        }
        log::info!("[intercept] first playback, restoring preset {}", stored.as_str());
        let session = session.clone();
        let prefs = prefs.clone();
        spawn_local(async move {
            if let Err(e) = ramp::apply_preset(&session, &prefs, stored).await {
                log::error!("[ramp] restoring persisted preset failed: {e:#}");
            }
        });
    }) as Box<dyn FnMut()>);
    media.set_onplaying(Some(closure.as_ref().unchecked_ref()));
    closure.forget();
}

/// `preservesPitch` is not exposed by web-sys, so it is set dynamically. The
/// host page flips it back on its own resets; the governor re-asserts it.
pub(crate) fn set_preserves_pitch(media: &web::HtmlMediaElement, value: bool) {
    let _ = js_sys::Reflect::set(
        media.as_ref(),
        &JsValue::from_str("preservesPitch"),
        &JsValue::from_bool(value),
    );
}
