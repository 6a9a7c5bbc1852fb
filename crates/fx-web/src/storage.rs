//! localStorage-backed preference store.

use fx_core::{PrefStore, REVERB_MODULE_KEY};
use web_sys as web;

/// Origin-scoped key/value store surviving navigation. When localStorage is
/// unavailable (e.g. blocked by the browser) every read is absent and writes
/// are dropped; the engine still works, it just forgets between loads.
#[derive(Clone)]
pub struct LocalPrefs {
    storage: Option<web::Storage>,
}

impl LocalPrefs {
    pub fn new() -> Self {
        let storage = web::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("[store] localStorage unavailable; preferences will not persist");
        }
        Self { storage }
    }

    /// URL of the reverb worklet module, placed here by the injection
    /// bootstrap before the engine runs.
    pub fn reverb_module_url(&self) -> Option<String> {
        self.get(REVERB_MODULE_KEY)
    }
}

impl PrefStore for LocalPrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.storage
            .as_ref()
            .and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(s) = &self.storage {
            if let Err(e) = s.set_item(key, value) {
                log::warn!("[store] failed to persist {key}: {:?}", e);
            }
        }
    }
}
