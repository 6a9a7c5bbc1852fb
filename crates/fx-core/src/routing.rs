//! Audio graph topology state machine.
//!
//! The web layer owns the actual nodes; this tracks which of the two legal
//! wirings is live and which preset it carries. Once the graph has been
//! constructed it never returns to `Uninitialized` for the rest of the page's
//! lifetime.

use crate::preset::Preset;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Topology {
    /// No nodes built yet; the page's own output path is untouched.
    #[default]
    Uninitialized,
    /// source -> gain -> reverb -> destination
    Routed,
    /// source -> destination; gain/reverb stay allocated but disconnected.
    Bypassed,
}

impl Topology {
    pub fn is_built(self) -> bool {
        !matches!(self, Topology::Uninitialized)
    }
}

/// What a bypass request requires of the web layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BypassAction {
    /// Nothing to do (no graph yet, or already bypassed).
    Noop,
    /// Disconnect the source from the reverb chain and wire it straight to
    /// the destination.
    Rewire,
}

#[derive(Clone, Debug, Default)]
pub struct RoutingState {
    topology: Topology,
    active: Preset,
}

impl RoutingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn active_preset(&self) -> Preset {
        self.active
    }

    /// Record that the source now flows through the reverb with `preset`.
    pub fn note_routed(&mut self, preset: Preset) {
        self.topology = Topology::Routed;
        self.active = preset;
    }

    /// Record that the source now feeds the destination directly. Also the
    /// fallback wiring when routing through the reverb fails mid-rewire.
    pub fn note_bypassed(&mut self) {
        self.topology = Topology::Bypassed;
        self.active = Preset::None;
    }

    /// Decide whether a bypass request needs rewiring and update the state
    /// accordingly. A no-op leaves the state untouched.
    pub fn request_bypass(&mut self) -> BypassAction {
        if !self.topology.is_built() || self.active == Preset::None {
            log::debug!("[routing] bypass requested with nothing to tear down");
            return BypassAction::Noop;
        }
        self.note_bypassed();
        BypassAction::Rewire
    }
}
