use fx_core::{BypassAction, Preset, RoutingState, Topology};

#[test]
fn starts_uninitialized_with_no_preset() {
    let routing = RoutingState::new();
    assert_eq!(routing.topology(), Topology::Uninitialized);
    assert_eq!(routing.active_preset(), Preset::None);
    assert!(!routing.topology().is_built());
}

#[test]
fn bypass_before_any_graph_is_a_noop() {
    // Selecting "none" before any media element / graph exists must not
    // pretend a graph was built.
    let mut routing = RoutingState::new();
    assert_eq!(routing.request_bypass(), BypassAction::Noop);
    assert_eq!(routing.topology(), Topology::Uninitialized);
}

#[test]
fn route_then_bypass_then_route_again() {
    let mut routing = RoutingState::new();

    routing.note_routed(Preset::Smol);
    assert_eq!(routing.topology(), Topology::Routed);
    assert_eq!(routing.active_preset(), Preset::Smol);

    // User selects "none" right after "smol" (scenario D): rewire once,
    // second bypass has nothing to tear down.
    assert_eq!(routing.request_bypass(), BypassAction::Rewire);
    assert_eq!(routing.topology(), Topology::Bypassed);
    assert_eq!(routing.active_preset(), Preset::None);
    assert_eq!(routing.request_bypass(), BypassAction::Noop);

    // The graph never returns to Uninitialized once constructed.
    assert!(routing.topology().is_built());

    routing.note_routed(Preset::Bige);
    assert_eq!(routing.topology(), Topology::Routed);
    assert_eq!(routing.active_preset(), Preset::Bige);
}

#[test]
fn failed_rewire_fallback_reports_bypassed() {
    // When wiring through the reverb fails, the web layer falls back to the
    // direct path and records it; the state must line up so a later bypass
    // request does nothing and a retry can still route.
    let mut routing = RoutingState::new();
    routing.note_routed(Preset::Swol);

    routing.note_bypassed();
    assert_eq!(routing.topology(), Topology::Bypassed);
    assert_eq!(routing.active_preset(), Preset::None);
    assert_eq!(routing.request_bypass(), BypassAction::Noop);

    routing.note_routed(Preset::Norm);
    assert_eq!(routing.topology(), Topology::Routed);
    assert_eq!(routing.active_preset(), Preset::Norm);
}

#[test]
fn rerouting_with_a_new_preset_replaces_the_active_one() {
    // Two near-simultaneous preset applications settle on the last one.
    let mut routing = RoutingState::new();
    routing.note_routed(Preset::Smol);
    routing.note_routed(Preset::Bruh);
    assert_eq!(routing.topology(), Topology::Routed);
    assert_eq!(routing.active_preset(), Preset::Bruh);
}
