//! ECS system keeping the waste estimate in step with its slider.

use bevy::prelude::*;

use super::calculations::estimate_waste;
use super::state::{WasteEstimateState, WastedSlider};

/// Recomputes the estimate when the slider changed since the last run.
///
/// A freshly inserted slider counts as changed, so the first update after
/// startup always produces an estimate.
pub fn update_waste_estimate(slider: Res<WastedSlider>, mut state: ResMut<WasteEstimateState>) {
    if !slider.is_changed() {
        return;
    }

    let estimate = estimate_waste(slider.percent_wasted);
    state.percent_wasted = slider.percent_wasted;
    state.estimate = estimate;
    state.revision += 1;

    debug!(
        "waste estimate r{}: {}% wasted -> {:.2} t/month, {:.2} Wh",
        state.revision, slider.percent_wasted, estimate.mass_tons, estimate.energy_watt_hours
    );
}
