//! Audio graph manager.
//!
//! Owns the lazily-constructed chain source -> gain -> reverb -> destination.
//! Every node is created at most once per page load and cached; rewiring
//! always disconnects the source first so no duplicate signal path can
//! accumulate. The reverb is an AudioWorklet whose module is loaded from a
//! bootstrap-provided URL.

use std::rc::Rc;

use anyhow::{anyhow, bail, Context};
use fx_core::{BypassAction, Preset};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

use crate::js_err;
use crate::session::Session;
use crate::storage::LocalPrefs;

/// Registered processor name inside the reverb worklet module.
const REVERB_PROCESSOR: &str = "DattorroReverb";
const REVERB_OUTPUT_CHANNELS: f64 = 2.0;

/// Cached audio nodes. `Option` fields enforce at-most-once construction.
#[derive(Default)]
pub struct AudioChain {
    pub context: Option<web::AudioContext>,
    pub gain: Option<web::GainNode>,
    pub source: Option<web::MediaElementAudioSourceNode>,
    pub reverb: Option<web::AudioWorkletNode>,
    pub module_loaded: bool,
}

/// Clears the in-progress flag even on early return.
struct BuildGuard<'a>(&'a Session);

impl Drop for BuildGuard<'_> {
    fn drop(&mut self) {
        self.0.set_building(false);
    }
}

/// Idempotently build (or reuse) the chain and route it through the reverb.
///
/// Fails with no side effects when no media element has been intercepted yet,
/// and without touching the current wiring when the worklet module cannot be
/// loaded; if rewiring itself fails the source is reconnected straight to the
/// destination so playback is never left silent. Returns the reverb node,
/// connected and ready for parameter ramps.
pub async fn ensure_routed(
    session: &Rc<Session>,
    prefs: &LocalPrefs,
    preset: Preset,
) -> anyhow::Result<web::AudioWorkletNode> {
    if session.is_building() {
        bail!("graph construction already in progress");
    }
    session.set_building(true);
    let _guard = BuildGuard(session);

    let media = session
        .first_media()
        .ok_or_else(|| anyhow!("no media element intercepted yet"))?;

    let context = {
        let mut chain = session.chain_mut();
        match &chain.context {
            Some(c) => c.clone(),
            None => {
                let c = web::AudioContext::new().map_err(js_err)?;
                chain.context = Some(c.clone());
                log::info!("[graph] audio context created");
                c
            }
        }
    };

    let gain = {
        let mut chain = session.chain_mut();
        match &chain.gain {
            Some(g) => g.clone(),
            None => {
                let g = web::GainNode::new(&context).map_err(js_err)?;
                chain.gain = Some(g.clone());
                g
            }
        }
    };

    // Load the worklet module once, and before the media element is bound:
    // creating the source node captures the element's output into the
    // context, so failing after that point would leave playback silent.
    // No RefCell borrow is held across the await; the building flag keeps a
    // second attempt out of this section.
    if !session.chain().module_loaded {
        let url = prefs
            .reverb_module_url()
            .ok_or_else(|| anyhow!("reverb worklet module URL missing from store"))?;
        let worklet = context.audio_worklet().map_err(js_err)?;
        JsFuture::from(worklet.add_module(&url).map_err(js_err)?)
            .await
            .map_err(js_err)
            .context("loading reverb worklet module")?;
        session.chain_mut().module_loaded = true;
        log::info!("[graph] reverb worklet module loaded");
    }

    let reverb = {
        let mut chain = session.chain_mut();
        match &chain.reverb {
            Some(r) => r.clone(),
            None => {
                let opts = web::AudioWorkletNodeOptions::new();
                opts.set_output_channel_count(&js_sys::Array::of1(&JsValue::from_f64(
                    REVERB_OUTPUT_CHANNELS,
                )));
                let r = web::AudioWorkletNode::new_with_options(&context, REVERB_PROCESSOR, &opts)
                    .map_err(js_err)?;
                chain.reverb = Some(r.clone());
                log::info!("[graph] reverb node created");
                r
            }
        }
    };

    let source = {
        let mut chain = session.chain_mut();
        match &chain.source {
            Some(s) => s.clone(),
            None => {
                let s = context
                    .create_media_element_source(&media)
                    .map_err(js_err)?;
                chain.source = Some(s.clone());
                log::info!("[graph] media element source bound");
                s
            }
        }
    };

    if let Err(e) = wire_through_reverb(&source, &gain, &reverb, &context) {
        // Never leave the element silent: fall back to the direct path.
        let _ = source.disconnect();
        let _ = source.connect_with_audio_node(&context.destination());
        session.routing_mut().note_bypassed();
        log::error!("[graph] rewire failed, reverted to direct wiring: {e:#}");
        return Err(e);
    }

    session.routing_mut().note_routed(preset);
    log::info!("[graph] routed through reverb ({})", preset.as_str());
    Ok(reverb)
}

fn wire_through_reverb(
    source: &web::MediaElementAudioSourceNode,
    gain: &web::GainNode,
    reverb: &web::AudioWorkletNode,
    context: &web::AudioContext,
) -> anyhow::Result<()> {
    // Disconnect before rewiring so exactly one path exists at any time.
    let _ = source.disconnect();
    source.connect_with_audio_node(gain).map_err(js_err)?;
    gain.connect_with_audio_node(reverb).map_err(js_err)?;
    reverb
        .connect_with_audio_node(&context.destination())
        .map_err(js_err)?;
    Ok(())
}

/// Reconnect the source directly to the destination, leaving gain/reverb
/// allocated but disconnected for reuse. No-op when nothing is routed.
pub fn bypass(session: &Session, prefs: &LocalPrefs) {
    match session.routing_mut().request_bypass() {
        BypassAction::Noop => {}
        BypassAction::Rewire => {
            let chain = session.chain();
            if let (Some(source), Some(context)) = (&chain.source, &chain.context) {
                let _ = source.disconnect();
                let _ = source.connect_with_audio_node(&context.destination());
            }
            fx_core::store_preset(prefs, Preset::None);
            log::info!("[graph] bypassed");
        }
    }
}
