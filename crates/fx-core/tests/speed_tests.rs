use fx_core::speed::{parse_percent_text, validate, DEFAULT_SPEED, MAX_SPEED, MIN_SPEED};

#[test]
fn accepts_changed_values_inside_range() {
    assert!(validate(0.8, DEFAULT_SPEED));
    assert!(validate(1.5, DEFAULT_SPEED));
    // bounds are inclusive
    assert!(validate(MIN_SPEED, DEFAULT_SPEED));
    assert!(validate(MAX_SPEED, DEFAULT_SPEED));
}

#[test]
fn rejects_out_of_range() {
    assert!(!validate(0.5999, DEFAULT_SPEED));
    assert!(!validate(2.0001, DEFAULT_SPEED));
    assert!(!validate(0.0, DEFAULT_SPEED));
    assert!(!validate(-1.0, DEFAULT_SPEED));
    assert!(!validate(16.0, DEFAULT_SPEED));
}

#[test]
fn rejects_unchanged_and_non_finite() {
    assert!(!validate(1.25, 1.25));
    assert!(!validate(f64::NAN, DEFAULT_SPEED));
    assert!(!validate(f64::INFINITY, DEFAULT_SPEED));
}

#[test]
fn percent_text_parses_to_multiplier() {
    assert_eq!(parse_percent_text("150"), Some(1.5));
    assert_eq!(parse_percent_text("60"), Some(0.6));
    assert_eq!(parse_percent_text(" 125 "), Some(1.25));
    assert_eq!(parse_percent_text("fast"), None);
    assert_eq!(parse_percent_text(""), None);
}

#[test]
fn acceptance_property_over_a_sweep() {
    // validate(v) holds iff v is in [0.6, 2.0] and differs from the last
    // accepted value.
    let last = 1.0;
    for i in 0..400 {
        let v = i as f64 / 100.0; // 0.00 .. 3.99
        let expected = (MIN_SPEED..=MAX_SPEED).contains(&v) && v != last;
        assert_eq!(validate(v, last), expected, "v={v}");
    }
}

#[test]
fn scenario_fresh_page_sets_150_percent() {
    // No persisted state; the user types "150" into the percent field.
    let parsed = parse_percent_text("150").unwrap();
    assert_eq!(parsed, 1.5);
    assert!(validate(parsed, DEFAULT_SPEED));
}
