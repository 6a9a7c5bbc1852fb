//! Persisted preference seam.
//!
//! The engine only sees an origin-scoped string key/value capability; the web
//! layer backs it with localStorage and tests back it with a HashMap. Codecs
//! tolerate garbage: a corrupted value decodes to "absent" rather than
//! breaking startup.

use std::str::FromStr;

use crate::preset::Preset;
use crate::speed;

pub const SPEED_KEY: &str = "fxSpeed";
pub const PRESET_KEY: &str = "fxPreset";
/// URL of the reverb worklet module, seeded by the injection bootstrap.
pub const REVERB_MODULE_KEY: &str = "fxReverbModule";

pub trait PrefStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Last persisted speed, if any finite value is stored.
pub fn load_speed(store: &impl PrefStore) -> Option<f64> {
    store
        .get(SPEED_KEY)?
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Last persisted speed, falling back to the unmodified rate.
pub fn load_speed_or_default(store: &impl PrefStore) -> f64 {
    load_speed(store).unwrap_or(speed::DEFAULT_SPEED)
}

pub fn store_speed(store: &impl PrefStore, value: f64) {
    store.set(SPEED_KEY, &value.to_string());
}

/// Last persisted preset; absent or unknown names decode to `Preset::None`.
pub fn load_preset(store: &impl PrefStore) -> Preset {
    store
        .get(PRESET_KEY)
        .and_then(|s| Preset::from_str(&s).ok())
        .unwrap_or_default()
}

pub fn store_preset(store: &impl PrefStore, preset: Preset) {
    store.set(PRESET_KEY, preset.as_str());
}
