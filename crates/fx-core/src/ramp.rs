//! Parameter ramp planning for preset crossfades.
//!
//! The live values are captured once from the reverb node's defaults and then
//! overwritten on every preset application; ramps are fire-and-forget and the
//! last scheduled ramp for a parameter wins.

use crate::preset::{ReverbParams, PARAM_COUNT, PARAM_NAMES};

/// How long a preset crossfade takes, in seconds of audio-context time.
pub const RAMP_SECONDS: f64 = 0.19;

/// One scheduled linear ramp on a single worklet parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RampSegment {
    pub name: &'static str,
    pub target: f64,
    pub end_time: f64,
}

/// The parameter values the reverb node is currently heading towards.
#[derive(Clone, Debug, Default)]
pub struct RampState {
    values: Option<[f64; PARAM_COUNT]>,
}

impl RampState {
    pub fn is_seeded(&self) -> bool {
        self.values.is_some()
    }

    /// Capture the node's default values; only the first call has any effect.
    pub fn seed_if_needed(&mut self, defaults: impl FnOnce() -> [f64; PARAM_COUNT]) {
        if self.values.is_none() {
            self.values = Some(defaults());
        }
    }

    pub fn values(&self) -> Option<&[f64; PARAM_COUNT]> {
        self.values.as_ref()
    }

    /// Plan a crossfade to `params` ending `RAMP_SECONDS` after `now`.
    ///
    /// The cached values move to the targets immediately; callers never wait
    /// for the audible ramp to finish.
    pub fn retarget(&mut self, params: &ReverbParams, now: f64) -> [RampSegment; PARAM_COUNT] {
        let targets = params.to_array();
        let end_time = now + RAMP_SECONDS;
        let mut plan = [RampSegment {
            name: PARAM_NAMES[0],
            target: 0.0,
            end_time,
        }; PARAM_COUNT];
        for i in 0..PARAM_COUNT {
            plan[i] = RampSegment {
                name: PARAM_NAMES[i],
                target: targets[i],
                end_time,
            };
        }
        self.values = Some(targets);
        plan
    }
}
