//! Page-lifetime session context.
//!
//! One `Session` is constructed at page load and shared by `Rc` with every
//! component; there are no module-level singletons. Interior mutability only,
//! since everything runs on the page's single-threaded event loop.

use std::cell::{Cell, Ref, RefCell, RefMut};
use std::rc::Rc;

use fx_core::{load_preset, load_speed_or_default, Preset, RampState, RoutingState};
use web_sys as web;

use crate::graph::AudioChain;
use crate::storage::LocalPrefs;

pub struct Session {
    /// Media elements in discovery order; the first one is "the" element for
    /// audio routing. The collection only grows.
    media: RefCell<Vec<web::HtmlMediaElement>>,
    /// Set once the first playback event of this page load has been handled.
    first_play_handled: Cell<bool>,
    last_speed: Cell<f64>,
    routing: RefCell<RoutingState>,
    ramp: RefCell<RampState>,
    chain: RefCell<AudioChain>,
    /// Serializes graph construction attempts.
    building: Cell<bool>,
}

impl Session {
    pub fn new(prefs: &LocalPrefs) -> Rc<Self> {
        let last_speed = load_speed_or_default(prefs);
        let stored_preset = load_preset(prefs);
        log::info!(
            "[session] restored speed={last_speed} preset={}",
            stored_preset.as_str()
        );
        Rc::new(Self {
            media: RefCell::new(Vec::new()),
            first_play_handled: Cell::new(false),
            last_speed: Cell::new(last_speed),
            routing: RefCell::new(RoutingState::new()),
            ramp: RefCell::new(RampState::default()),
            chain: RefCell::new(AudioChain::default()),
            building: Cell::new(false),
        })
    }

    pub fn register_media(&self, element: web::HtmlMediaElement) {
        self.media.borrow_mut().push(element);
        log::info!("[session] media element {} registered", self.media_count());
    }

    pub fn first_media(&self) -> Option<web::HtmlMediaElement> {
        self.media.borrow().first().cloned()
    }

    pub fn media_count(&self) -> usize {
        self.media.borrow().len()
    }

    pub fn for_each_media(&self, mut f: impl FnMut(&web::HtmlMediaElement)) {
        for media in self.media.borrow().iter() {
            f(media);
        }
    }

    /// True exactly once: the first call marks the flag handled.
    pub fn take_first_play(&self) -> bool {
        !self.first_play_handled.replace(true)
    }

    pub fn last_speed(&self) -> f64 {
        self.last_speed.get()
    }

    pub fn set_last_speed(&self, speed: f64) {
        self.last_speed.set(speed);
    }

    pub fn active_preset(&self) -> Preset {
        self.routing.borrow().active_preset()
    }

    pub fn routing_mut(&self) -> RefMut<'_, RoutingState> {
        self.routing.borrow_mut()
    }

    pub fn ramp_mut(&self) -> RefMut<'_, RampState> {
        self.ramp.borrow_mut()
    }

    pub fn chain(&self) -> Ref<'_, AudioChain> {
        self.chain.borrow()
    }

    pub fn chain_mut(&self) -> RefMut<'_, AudioChain> {
        self.chain.borrow_mut()
    }

    pub fn is_building(&self) -> bool {
        self.building.get()
    }

    pub fn set_building(&self, value: bool) {
        self.building.set(value);
    }
}
