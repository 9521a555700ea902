//! Pure waste-estimate calculation.

use serde::{Deserialize, Serialize};

use super::constants::*;

/// Estimated monthly waste for a given wasted percentage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WasteEstimate {
    /// Food wasted per month in tons.
    pub mass_tons: f64,
    /// Energy embodied in the wasted food per month in watt hours.
    pub energy_watt_hours: f64,
}

/// Estimate monthly waste mass and embodied energy from the percentage of
/// food thrown away.
///
/// Defined for every finite input. Callers keep `percent_wasted` within
/// 0..=100; values outside that range produce negative or over-100% results
/// and are passed through unchanged.
pub fn estimate_waste(percent_wasted: f64) -> WasteEstimate {
    let wasted_fraction = percent_wasted / 100.0;
    let meals_per_month = MEALS_PER_WEEK * WEEKS_PER_MONTH;

    let wasted_meal_units = ENROLLED_STUDENTS * MEALS_PER_STUDENT_PER_DAY * wasted_fraction;
    let mass_tons = wasted_meal_units * meals_per_month / POUNDS_PER_TON;

    let wasted_calories = ENROLLED_STUDENTS * CALORIES_PER_MEAL * wasted_fraction;
    let energy_watt_hours = wasted_calories * meals_per_month * WATT_HOURS_PER_CALORIE;

    WasteEstimate {
        mass_tons,
        energy_watt_hours,
    }
}
