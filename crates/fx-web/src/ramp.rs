//! Preset ramper.
//!
//! Maps a preset name to its 12-parameter vector and crossfades the live
//! reverb node to it with linear ramps. Ramps are fire-and-forget: the cached
//! targets move immediately and nobody awaits the audible transition.

use std::rc::Rc;

use anyhow::anyhow;
use fx_core::{store_preset, Preset, PARAM_COUNT, PARAM_NAMES};

use crate::session::Session;
use crate::storage::LocalPrefs;
use crate::{graph, js_err};

/// Apply `preset` to the live graph, building it first if needed.
///
/// `Preset::None` bypasses instead; there is nothing to ramp toward when the
/// reverb is out of the signal path.
pub async fn apply_preset(
    session: &Rc<Session>,
    prefs: &LocalPrefs,
    preset: Preset,
) -> anyhow::Result<()> {
    if preset == Preset::None {
        graph::bypass(session, prefs);
        return Ok(());
    }
    let params = preset
        .params()
        .ok_or_else(|| anyhow!("preset {} has no parameter table", preset.as_str()))?;

    let reverb = graph::ensure_routed(session, prefs, preset).await?;
    let context = session
        .chain()
        .context
        .clone()
        .ok_or_else(|| anyhow!("graph routed but context missing"))?;

    let param_map = reverb.parameters().map_err(js_err)?;
    session.ramp_mut().seed_if_needed(|| {
        let mut defaults = [0.0; PARAM_COUNT];
        for (i, name) in PARAM_NAMES.iter().enumerate() {
            if let Some(p) = param_map.get(name) {
                defaults[i] = p.value() as f64;
            }
        }
        defaults
    });

    let now = context.current_time();
    let plan = session.ramp_mut().retarget(&params, now);
    for segment in plan {
        match param_map.get(segment.name) {
            Some(param) => {
                let _ = param.linear_ramp_to_value_at_time(segment.target as f32, segment.end_time);
            }
            None => log::warn!("[ramp] worklet is missing parameter {}", segment.name),
        }
    }

    store_preset(prefs, preset);
    log::info!("[ramp] preset {} scheduled over {}s", preset.as_str(), fx_core::RAMP_SECONDS);
    Ok(())
}
