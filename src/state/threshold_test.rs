use super::*;

// =============================================================
// format_threshold
// =============================================================

#[test]
fn format_threshold_pads_to_two_decimals() {
    assert_eq!(format_threshold(0.5), "0.50");
    assert_eq!(format_threshold(1.0), "1.00");
    assert_eq!(format_threshold(0.0), "0.00");
    assert_eq!(format_threshold(0.3), "0.30");
}

#[test]
fn format_threshold_rounds_extra_digits() {
    assert_eq!(format_threshold(0.753), "0.75");
    assert_eq!(format_threshold(0.756), "0.76");
    assert_eq!(format_threshold(0.999), "1.00");
}

#[test]
fn format_threshold_never_renders_negative_zero() {
    assert_eq!(format_threshold(-0.0), "0.00");
}

#[test]
fn format_threshold_non_finite_falls_back_to_zero() {
    assert_eq!(format_threshold(f64::NAN), "0.00");
    assert_eq!(format_threshold(f64::INFINITY), "0.00");
}

// =============================================================
// parse_threshold_param
// =============================================================

#[test]
fn parse_threshold_param_accepts_values_in_range() {
    assert_eq!(parse_threshold_param("0.75"), Some(0.75));
    assert_eq!(parse_threshold_param(" 0 "), Some(0.0));
    assert_eq!(parse_threshold_param("1"), Some(1.0));
}

#[test]
fn parse_threshold_param_rejects_invalid_values() {
    assert_eq!(parse_threshold_param("1.01"), None);
    assert_eq!(parse_threshold_param("-0.1"), None);
    assert_eq!(parse_threshold_param("NaN"), None);
    assert_eq!(parse_threshold_param("high"), None);
    assert_eq!(parse_threshold_param(""), None);
}

// =============================================================
// ThresholdState
// =============================================================

#[test]
fn new_clamps_initial_value() {
    let state = ThresholdState::new(3.0, ThresholdBounds::default());
    assert_eq!(state.value(), 1.0);
    assert_eq!(state.staged(), 1.0);
    assert!(!state.is_dirty());
}

#[test]
fn default_state_uses_configured_threshold() {
    let state = ThresholdState::default();
    assert_eq!(state.display(), "0.70");
}

#[test]
fn set_live_moves_value_and_label_together() {
    let mut state = ThresholdState::default();
    assert_eq!(state.set_live(0.3), "0.30");
    assert_eq!(state.value(), 0.3);
    assert_eq!(state.display(), "0.30");
    assert!(!state.is_dirty());
}

#[test]
fn stage_only_moves_label_until_applied() {
    let mut state = ThresholdState::new(0.1, ThresholdBounds::default());
    assert_eq!(state.stage(0.9), "0.90");
    assert_eq!(state.value(), 0.1);
    assert_eq!(state.display(), "0.90");
    assert!(state.is_dirty());

    assert_eq!(state.apply(), "0.90");
    assert_eq!(state.value(), 0.9);
    assert!(!state.is_dirty());
}

#[test]
fn stage_clamps_out_of_range_input() {
    let mut state = ThresholdState::default();
    assert_eq!(state.stage(-2.0), "0.00");
    assert_eq!(state.stage(f64::NAN), "0.00");
}

#[test]
fn bounds_follow_config_step() {
    let config = UiConfig { threshold_step: 0.05, ..UiConfig::default() };
    let bounds = ThresholdBounds::from_config(&config);
    assert_eq!(bounds.step, 0.05);
    assert_eq!(bounds.min, 0.0);
    assert_eq!(bounds.max, 1.0);
}
