//! Unit tests for the waste-estimate calculation and its constants.

use super::calculations::*;
use super::constants::*;

// -------------------------------------------------------------------------
// Constants verification tests
// -------------------------------------------------------------------------

#[test]
fn test_population_constants() {
    assert!((ENROLLED_STUDENTS - 1708.0).abs() < f64::EPSILON);
    assert!((MEALS_PER_STUDENT_PER_DAY - 1.2).abs() < f64::EPSILON);
}

#[test]
fn test_calendar_constants() {
    assert!((MEALS_PER_WEEK - 14.0).abs() < f64::EPSILON);
    assert!((WEEKS_PER_MONTH - 4.0).abs() < f64::EPSILON);
}

#[test]
fn test_energy_constants() {
    assert!((CALORIES_PER_MEAL - 2000.0).abs() < f64::EPSILON);
    assert!((WATT_HOURS_PER_CALORIE - 0.001162).abs() < f64::EPSILON);
    assert!((POUNDS_PER_TON - 2000.0).abs() < f64::EPSILON);
}

// -------------------------------------------------------------------------
// estimate_waste tests
// -------------------------------------------------------------------------

#[test]
fn test_estimate_zero_percent_is_zero() {
    let estimate = estimate_waste(0.0);
    assert_eq!(estimate.mass_tons, 0.0);
    assert_eq!(estimate.energy_watt_hours, 0.0);
}

#[test]
fn test_estimate_default_slider_value() {
    // 1708 * 1.2 * 0.2 * 56 / 2000 = 11.47776 tons
    // 1708 * 2000 * 0.2 * 56 * 0.001162 = 44457.1904 Wh
    let estimate = estimate_waste(20.0);
    assert!((estimate.mass_tons - 11.47776).abs() < 1e-9);
    assert!((estimate.energy_watt_hours - 44_457.1904).abs() < 1e-6);
}

#[test]
fn test_estimate_all_food_wasted() {
    let estimate = estimate_waste(100.0);
    assert!((estimate.mass_tons - 57.3888).abs() < 1e-9);
    assert!((estimate.energy_watt_hours - 222_285.952).abs() < 1e-6);
}

#[test]
fn test_estimate_is_linear() {
    let half = estimate_waste(50.0);
    let full = estimate_waste(100.0);
    assert!((full.mass_tons - 2.0 * half.mass_tons).abs() < 1e-9);
    assert!((full.energy_watt_hours - 2.0 * half.energy_watt_hours).abs() < 1e-6);
}

#[test]
fn test_estimate_monotonic_over_slider_domain() {
    let mut previous = estimate_waste(0.0);
    for step in 1..=100 {
        let current = estimate_waste(step as f64);
        assert!(
            current.mass_tons >= previous.mass_tons,
            "mass decreased at {step}%"
        );
        assert!(
            current.energy_watt_hours >= previous.energy_watt_hours,
            "energy decreased at {step}%"
        );
        previous = current;
    }
}

#[test]
fn test_estimate_fractional_percent() {
    let estimate = estimate_waste(0.5);
    let one = estimate_waste(1.0);
    assert!((estimate.mass_tons * 2.0 - one.mass_tons).abs() < 1e-12);
}

#[test]
fn test_estimate_negative_percent_passes_through() {
    let estimate = estimate_waste(-10.0);
    let positive = estimate_waste(10.0);
    assert!((estimate.mass_tons + positive.mass_tons).abs() < 1e-12);
    assert!(estimate.energy_watt_hours < 0.0);
}

#[test]
fn test_estimate_above_hundred_passes_through() {
    let estimate = estimate_waste(150.0);
    assert!(estimate.mass_tons > estimate_waste(100.0).mass_tons);
}
