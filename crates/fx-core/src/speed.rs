//! Playback-speed validation.
//!
//! Speed is a linear multiplier where 1.0 is the unmodified rate. The host
//! page's own UI never goes outside 1.0; we allow [0.6, 2.0].

pub const MIN_SPEED: f64 = 0.6;
pub const MAX_SPEED: f64 = 2.0;
pub const DEFAULT_SPEED: f64 = 1.0;

/// Parse the percent text of the speed input field ("150" means 1.5x).
pub fn parse_percent_text(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().map(|percent| percent / 100.0)
}

/// Whether `candidate` should be applied given the last accepted speed.
///
/// Rejects non-finite values, values outside [`MIN_SPEED`, `MAX_SPEED`] and
/// values equal to `last` (no redundant DOM writes or store churn).
pub fn validate(candidate: f64, last: f64) -> bool {
    candidate.is_finite()
        && candidate != last
        && (MIN_SPEED..=MAX_SPEED).contains(&candidate)
}
