//! Monthly food-waste estimate for the dining population.
//!
//! Converts "percent of food thrown away" into the mass of food wasted per
//! month and the embodied energy of that food. The estimate is a straight
//! linear scale of the enrolled dining population, so it is exactly zero at
//! 0% and doubles when the wasted percentage doubles.
//!
//! Key figures:
//! - 1,708 enrolled students eating 1.2 meal units per day
//! - 14 meals per week, 4 weeks per month
//! - 2,000 calories per meal, 1 calorie = 0.001162 watt hours
//! - mass is reported in short tons (2,000 lb)

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

pub struct WasteEstimatorPlugin;

impl Plugin for WasteEstimatorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WastedSlider>()
            .init_resource::<WasteEstimateState>()
            .add_systems(Update, update_waste_estimate.in_set(DashboardSet::Model));
    }
}
