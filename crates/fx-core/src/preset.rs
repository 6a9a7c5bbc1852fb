//! Named reverb presets.
//!
//! Each preset is an immutable vector of twelve parameters understood by the
//! Dattorro reverb worklet. The tables are derived from two base plates
//! (`BIGE_BASE` and `FREZ_BASE`) with small per-preset offsets; `Preset::None`
//! means "bypass" and carries no parameters.

use std::fmt;
use std::str::FromStr;

pub const PARAM_COUNT: usize = 12;

/// Worklet parameter names, in the order used by every parameter vector.
pub const PARAM_NAMES: [&str; PARAM_COUNT] = [
    "preDelay",
    "bandwidth",
    "inputDiffusion1",
    "inputDiffusion2",
    "decay",
    "decayDiffusion1",
    "decayDiffusion2",
    "damping",
    "excursionRate",
    "excursionDepth",
    "dry",
    "wet",
];

/// One full parameter vector for the reverb worklet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReverbParams {
    pub pre_delay: f64,
    pub bandwidth: f64,
    pub input_diffusion_1: f64,
    pub input_diffusion_2: f64,
    pub decay: f64,
    pub decay_diffusion_1: f64,
    pub decay_diffusion_2: f64,
    pub damping: f64,
    pub excursion_rate: f64,
    pub excursion_depth: f64,
    pub dry: f64,
    pub wet: f64,
}

impl ReverbParams {
    /// Values in `PARAM_NAMES` order.
    pub fn to_array(self) -> [f64; PARAM_COUNT] {
        [
            self.pre_delay,
            self.bandwidth,
            self.input_diffusion_1,
            self.input_diffusion_2,
            self.decay,
            self.decay_diffusion_1,
            self.decay_diffusion_2,
            self.damping,
            self.excursion_rate,
            self.excursion_depth,
            self.dry,
            self.wet,
        ]
    }
}

// Dense plate tuning, the base for the small-room family.
const BIGE_BASE: ReverbParams = ReverbParams {
    pre_delay: 0.0,
    bandwidth: 0.7011,
    input_diffusion_1: 0.7331,
    input_diffusion_2: 0.4534,
    decay: 0.8271,
    decay_diffusion_1: 0.7839,
    decay_diffusion_2: 0.1992,
    damping: 0.5975,
    excursion_rate: 0.0,
    excursion_depth: 0.0,
    dry: 0.7015,
    wet: 0.3012,
};

// Frozen-hall tuning, the base for the long-tail family.
const FREZ_BASE: ReverbParams = ReverbParams {
    pre_delay: 0.0,
    bandwidth: 0.9,
    input_diffusion_1: 0.75,
    input_diffusion_2: 0.625,
    decay: 1.0,
    decay_diffusion_1: 0.5,
    decay_diffusion_2: 0.711,
    damping: 0.05,
    excursion_rate: 0.3,
    excursion_depth: 1.4,
    dry: 0.7015,
    wet: 0.3012,
};

/// The fixed set of selectable presets. `None` denotes bypass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Preset {
    #[default]
    None,
    Smol,
    Norm,
    Bige,
    Swol,
    Bruh,
}

impl Preset {
    pub const ALL: [Preset; 6] = [
        Preset::None,
        Preset::Smol,
        Preset::Norm,
        Preset::Bige,
        Preset::Swol,
        Preset::Bruh,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Preset::None => "none",
            Preset::Smol => "smol",
            Preset::Norm => "norm",
            Preset::Bige => "bige",
            Preset::Swol => "swol",
            Preset::Bruh => "bruh",
        }
    }

    /// Parameter vector for this preset, or `None` when the preset is bypass.
    pub fn params(self) -> Option<ReverbParams> {
        match self {
            Preset::None => None,
            Preset::Smol => Some(BIGE_BASE),
            Preset::Norm => Some(ReverbParams {
                excursion_rate: BIGE_BASE.excursion_rate + 2.0,
                excursion_depth: BIGE_BASE.excursion_depth + 2.0,
                ..BIGE_BASE
            }),
            Preset::Bige => Some(ReverbParams {
                input_diffusion_2: BIGE_BASE.input_diffusion_2 + 0.1,
                decay_diffusion_1: BIGE_BASE.decay_diffusion_1 - 0.1,
                decay_diffusion_2: BIGE_BASE.decay_diffusion_2 + 0.5,
                damping: BIGE_BASE.damping - 0.2,
                excursion_rate: BIGE_BASE.excursion_rate + 2.0,
                excursion_depth: BIGE_BASE.excursion_depth + 2.0,
                ..BIGE_BASE
            }),
            Preset::Swol => Some(ReverbParams {
                decay: FREZ_BASE.decay - 0.12,
                damping: FREZ_BASE.damping + 0.155,
                ..FREZ_BASE
            }),
            Preset::Bruh => Some(ReverbParams {
                input_diffusion_1: FREZ_BASE.input_diffusion_1 - 0.4,
                decay: FREZ_BASE.decay - 0.28,
                damping: FREZ_BASE.damping + 0.175,
                dry: FREZ_BASE.dry - 0.2,
                wet: FREZ_BASE.wet + 0.2,
                ..FREZ_BASE
            }),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown reverb preset: {0}")]
pub struct UnknownPreset(pub String);

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Preset::None),
            "smol" => Ok(Preset::Smol),
            "norm" => Ok(Preset::Norm),
            "bige" => Ok(Preset::Bige),
            "swol" => Ok(Preset::Swol),
            "bruh" => Ok(Preset::Bruh),
            other => Err(UnknownPreset(other.to_owned())),
        }
    }
}
