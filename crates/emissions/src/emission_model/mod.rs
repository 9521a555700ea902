//! Yearly GHG emission model for dining food waste.
//!
//! A fixed yearly waste mass is split between food production and three
//! disposal routes. Production emits in proportion to the food that is still
//! produced; composting and anaerobic digestion offset emissions (negative
//! rates); whatever is not diverted goes to landfill.
//!
//! Rates are tons of CO2-equivalent per ton of waste:
//! - production 1.662
//! - landfill 0.374
//! - compost offset -0.19841
//! - anaerobic digestion offset -0.110231
//!
//! Production reduction shrinks every disposal route by the same residual
//! fraction. The calculation never validates policy shares; the slider
//! coupling (anaerobic share capped at `100 - compost`) is enforced by the
//! input system, not by [`compute_emissions`].

pub mod calculations;
pub mod constants;
pub mod state;
pub mod systems;

#[cfg(test)]
mod tests_calculations;

pub use calculations::*;
pub use constants::*;
pub use state::*;
pub use systems::*;

use bevy::prelude::*;

use crate::dashboard_sets::DashboardSet;

pub struct EmissionModelPlugin;

impl Plugin for EmissionModelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PolicySliders>()
            .init_resource::<EmissionComparisonState>()
            .add_systems(Update, couple_policy_sliders.in_set(DashboardSet::Input))
            .add_systems(
                Update,
                update_emission_comparison.in_set(DashboardSet::Model),
            );
    }
}
