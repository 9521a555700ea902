//! ECS systems for the emission model.

use bevy::prelude::*;

use super::calculations::compare_to_base;
use super::state::{EmissionComparisonState, PolicySliders};
use crate::params::DashboardParams;

/// Applies the slider-coupling rule whenever the compost share moves.
///
/// Recomputes the anaerobic slider maximum and pulls the anaerobic share
/// down to it when the two diverted shares would exceed 100%. Writes to the
/// sliders only when a clamp happens, so an in-range input does not mark
/// them changed a second time.
pub fn couple_policy_sliders(
    mut sliders: ResMut<PolicySliders>,
    mut state: ResMut<EmissionComparisonState>,
) {
    if !sliders.is_changed() {
        return;
    }

    let max = sliders.shares.max_anaerobic_percent();
    if state.anaerobic_max != max {
        state.anaerobic_max = max;
    }

    if sliders.shares.anaerobic_percent > max {
        warn!(
            "anaerobic share {}% exceeds the {}% left after composting, clamping",
            sliders.shares.anaerobic_percent, max
        );
        sliders.shares = sliders.shares.coupled();
    }
}

/// Recomputes the comparison when the sliders or the parameters changed.
pub fn update_emission_comparison(
    sliders: Res<PolicySliders>,
    params: Res<DashboardParams>,
    mut state: ResMut<EmissionComparisonState>,
) {
    if !sliders.is_changed() && !params.is_changed() {
        return;
    }

    let comparison = compare_to_base(params.total_waste_tons_per_year, sliders.shares);
    state.comparison = comparison;
    state.revision += 1;

    debug!(
        "emission comparison r{}: base {:.2} t, model {:.2} t",
        state.revision,
        comparison.base_net(),
        comparison.model_net()
    );
}
