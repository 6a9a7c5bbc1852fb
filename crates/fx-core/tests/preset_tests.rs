use std::str::FromStr;

use fx_core::{Preset, PARAM_COUNT, PARAM_NAMES};

#[test]
fn preset_names_round_trip() {
    for preset in Preset::ALL {
        let parsed = Preset::from_str(preset.as_str()).expect("known name must parse");
        assert_eq!(parsed, preset);
    }
}

#[test]
fn unknown_preset_is_rejected() {
    for bad in ["", "NONE", "Smol", "huge", "bige "] {
        assert!(Preset::from_str(bad).is_err(), "{bad:?} should not parse");
    }
}

#[test]
fn none_is_bypass_and_default() {
    assert_eq!(Preset::default(), Preset::None);
    assert!(Preset::None.params().is_none());
}

#[test]
fn every_audible_preset_has_a_full_finite_vector() {
    for preset in Preset::ALL.into_iter().filter(|p| *p != Preset::None) {
        let params = preset.params().expect("audible preset needs parameters");
        let values = params.to_array();
        assert_eq!(values.len(), PARAM_COUNT);
        for (name, v) in PARAM_NAMES.iter().zip(values) {
            assert!(v.is_finite(), "{preset} {name} must be finite, got {v}");
        }
    }
}

#[test]
fn parameter_name_order_matches_struct_layout() {
    let params = Preset::Smol.params().unwrap();
    let values = params.to_array();
    assert_eq!(PARAM_NAMES[0], "preDelay");
    assert_eq!(values[0], params.pre_delay);
    assert_eq!(PARAM_NAMES[7], "damping");
    assert_eq!(values[7], params.damping);
    assert_eq!(PARAM_NAMES[11], "wet");
    assert_eq!(values[11], params.wet);
}

#[test]
fn derived_preset_offsets() {
    let smol = Preset::Smol.params().unwrap();
    let norm = Preset::Norm.params().unwrap();
    let bige = Preset::Bige.params().unwrap();

    // norm is smol with wider excursion
    assert_eq!(norm.excursion_rate, smol.excursion_rate + 2.0);
    assert_eq!(norm.excursion_depth, smol.excursion_depth + 2.0);
    assert_eq!(norm.decay, smol.decay);

    // bige diverges further from the same base
    assert!((bige.input_diffusion_2 - (smol.input_diffusion_2 + 0.1)).abs() < 1e-12);
    assert!((bige.damping - (smol.damping - 0.2)).abs() < 1e-12);

    let swol = Preset::Swol.params().unwrap();
    let bruh = Preset::Bruh.params().unwrap();
    // bruh trades dry for wet relative to the long-tail base swol shares
    assert!(bruh.wet > swol.wet);
    assert!(bruh.dry < swol.dry);
    assert!((bruh.dry - 0.5015).abs() < 1e-12);
    assert!((bruh.wet - 0.5012).abs() < 1e-12);
}
