//! Unit tests for emission calculations and constants.

use super::calculations::*;
use super::constants::*;

const TOTAL_WASTE: f64 = 200.0;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn assert_breakdown_close(actual: &EmissionBreakdown, expected: &EmissionBreakdown) {
    for (a, e) in actual.components().iter().zip(expected.components()) {
        assert_close(*a, e);
    }
}

// -------------------------------------------------------------------------
// Constants verification tests
// -------------------------------------------------------------------------

#[test]
fn test_emission_rate_constants() {
    assert!((PRODUCTION_EMISSION_RATE - 1.662).abs() < f64::EPSILON);
    assert!((LANDFILL_EMISSION_RATE - 0.374).abs() < f64::EPSILON);
}

#[test]
fn test_offset_rates_are_negative() {
    assert!((COMPOST_OFFSET_RATE + 0.19841).abs() < f64::EPSILON);
    assert!((ANAEROBIC_OFFSET_RATE + 0.110231).abs() < f64::EPSILON);
    assert!(COMPOST_OFFSET_RATE < 0.0);
    assert!(ANAEROBIC_OFFSET_RATE < 0.0);
}

// -------------------------------------------------------------------------
// PolicyShares helpers
// -------------------------------------------------------------------------

#[test]
fn test_default_policy_is_base_model() {
    let shares = PolicyShares::default();
    assert_close(shares.landfill_percent(), 100.0);
    assert_close(shares.max_anaerobic_percent(), 100.0);
}

#[test]
fn test_landfill_percent_is_remainder() {
    let shares = PolicyShares::new(30.0, 10.0, 25.0);
    assert_close(shares.landfill_percent(), 45.0);
}

#[test]
fn test_landfill_percent_can_go_negative() {
    let shares = PolicyShares::new(80.0, 0.0, 40.0);
    assert_close(shares.landfill_percent(), -20.0);
}

#[test]
fn test_max_anaerobic_tracks_compost() {
    assert_close(PolicyShares::new(35.0, 0.0, 0.0).max_anaerobic_percent(), 65.0);
    assert_close(PolicyShares::new(100.0, 0.0, 0.0).max_anaerobic_percent(), 0.0);
}

#[test]
fn test_coupled_clamps_anaerobic() {
    let coupled = PolicyShares::new(70.0, 20.0, 50.0).coupled();
    assert_close(coupled.anaerobic_percent, 30.0);
    assert_close(coupled.compost_percent, 70.0);
    assert_close(coupled.production_reduction_percent, 20.0);
    assert_close(coupled.landfill_percent(), 0.0);
}

#[test]
fn test_coupled_keeps_valid_shares() {
    let shares = PolicyShares::new(40.0, 20.0, 60.0);
    assert_eq!(shares.coupled(), shares);
}

// -------------------------------------------------------------------------
// compute_emissions
// -------------------------------------------------------------------------

#[test]
fn test_base_model_has_no_offsets() {
    let base = compute_emissions(TOTAL_WASTE, 0.0, 0.0, 0.0);
    assert_eq!(base.compost_offset, 0.0);
    assert_eq!(base.anaerobic_offset, 0.0);
}

#[test]
fn test_base_model_literal_values() {
    let base = compute_emissions(TOTAL_WASTE, 0.0, 0.0, 0.0);
    assert_close(base.production_emission, 332.4);
    assert_close(base.landfill_emission, 74.8);
    assert_close(base.net(), 407.2);
}

#[test]
fn test_full_compost_with_reduction() {
    let model = compute_emissions(TOTAL_WASTE, 100.0, 20.0, 0.0);
    assert_close(model.production_emission, 265.92);
    assert_close(model.compost_offset, -31.7456);
    assert_eq!(model.anaerobic_offset, 0.0);
    assert_close(model.landfill_emission, 0.0);
    assert_close(model.net(), 234.1744);
}

#[test]
fn test_mixed_disposal_routes() {
    // residual = 200 * 0.9 = 180 t
    let model = compute_emissions(TOTAL_WASTE, 30.0, 10.0, 20.0);
    assert_close(model.production_emission, 200.0 * 1.662 * 0.9);
    assert_close(model.compost_offset, 180.0 * -0.19841 * 0.3);
    assert_close(model.anaerobic_offset, 180.0 * -0.110231 * 0.2);
    assert_close(model.landfill_emission, 180.0 * 0.374 * 0.5);
}

#[test]
fn test_total_production_reduction_zeroes_everything() {
    let model = compute_emissions(TOTAL_WASTE, 40.0, 100.0, 25.0);
    for component in model.components() {
        assert_close(component, 0.0);
    }
}

#[test]
fn test_homogeneous_in_total_waste() {
    let cases = [
        (0.0, 0.0, 0.0),
        (100.0, 20.0, 0.0),
        (30.0, 45.0, 50.0),
        (90.0, 5.0, 60.0),
    ];
    for (c, p, a) in cases {
        let single = compute_emissions(TOTAL_WASTE, c, p, a);
        let double = compute_emissions(2.0 * TOTAL_WASTE, c, p, a);
        for (s, d) in single.components().iter().zip(double.components()) {
            assert_close(d, 2.0 * s);
        }
    }
}

#[test]
fn test_zero_waste_yields_zero_emissions() {
    let model = compute_emissions(0.0, 50.0, 20.0, 30.0);
    assert_eq!(model.net(), 0.0);
}

#[test]
fn test_over_allocated_shares_pass_through() {
    // compost + anaerobic = 150: landfill share is -50% and emits negatively
    let model = compute_emissions(TOTAL_WASTE, 100.0, 0.0, 50.0);
    assert_close(model.landfill_emission, 200.0 * 0.374 * -0.5);
    assert!(model.landfill_emission < 0.0);
}

#[test]
fn test_negative_shares_pass_through() {
    let model = compute_emissions(TOTAL_WASTE, -10.0, 0.0, 0.0);
    assert!(model.compost_offset > 0.0);
    assert_close(model.landfill_emission, 200.0 * 0.374 * 1.1);
}

#[test]
fn test_policy_shares_emissions_matches_free_function() {
    let shares = PolicyShares::new(25.0, 15.0, 35.0);
    assert_breakdown_close(
        &shares.emissions(TOTAL_WASTE),
        &compute_emissions(TOTAL_WASTE, 25.0, 15.0, 35.0),
    );
}

// -------------------------------------------------------------------------
// Breakdown helpers
// -------------------------------------------------------------------------

#[test]
fn test_components_order() {
    let breakdown = EmissionBreakdown {
        production_emission: 1.0,
        compost_offset: -2.0,
        anaerobic_offset: -3.0,
        landfill_emission: 4.0,
    };
    assert_eq!(breakdown.components(), [1.0, -2.0, -3.0, 4.0]);
    assert_close(breakdown.net(), 0.0);
}

#[test]
fn test_labeled_components() {
    let labeled = compute_emissions(TOTAL_WASTE, 0.0, 0.0, 0.0).labeled();
    assert_eq!(labeled[0].0, "Production Emission");
    assert_eq!(labeled[1].0, "Compost Offset");
    assert_eq!(labeled[2].0, "Anaerobic Offset");
    assert_eq!(labeled[3].0, "Landfill Emission");
    assert_close(labeled[3].1, 74.8);
}

// -------------------------------------------------------------------------
// Improvement and comparison
// -------------------------------------------------------------------------

#[test]
fn test_percent_improvement_reference_scenario() {
    let base = compute_emissions(TOTAL_WASTE, 0.0, 0.0, 0.0);
    let model = compute_emissions(TOTAL_WASTE, 100.0, 20.0, 0.0);
    let improvement = percent_improvement(base.net(), model.net()).unwrap();
    // (407.2 - 234.1744) / 407.2 * 100
    assert!((improvement - 42.4915520628).abs() < 1e-6);
    assert_eq!(format!("{improvement:.2}"), "42.49");
}

#[test]
fn test_percent_improvement_identity_is_zero() {
    assert_close(percent_improvement(407.2, 407.2).unwrap(), 0.0);
}

#[test]
fn test_percent_improvement_can_be_negative() {
    assert!(percent_improvement(100.0, 150.0).unwrap() < 0.0);
}

#[test]
fn test_percent_improvement_undefined_for_zero_base() {
    assert_eq!(percent_improvement(0.0, 0.0), None);
}

#[test]
fn test_compare_to_base() {
    let comparison = compare_to_base(TOTAL_WASTE, PolicyShares::new(100.0, 20.0, 0.0));
    assert_close(comparison.base_net(), 407.2);
    assert_close(comparison.model_net(), 234.1744);
    assert!((comparison.percent_improvement.unwrap() - 42.4915520628).abs() < 1e-6);
    assert_close(comparison.total_waste_tons, TOTAL_WASTE);
}

#[test]
fn test_compare_base_against_itself() {
    let comparison = compare_to_base(TOTAL_WASTE, PolicyShares::default());
    assert_eq!(comparison.base, comparison.model);
    assert_close(comparison.percent_improvement.unwrap(), 0.0);
}

#[test]
fn test_compare_with_zero_waste() {
    let comparison = compare_to_base(0.0, PolicyShares::new(50.0, 0.0, 0.0));
    assert_eq!(comparison.percent_improvement, None);
}
