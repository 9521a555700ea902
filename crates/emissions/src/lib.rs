use bevy::prelude::*;

pub mod dashboard_sets;
pub mod datasets;
pub mod emission_model;
pub mod error;
pub mod observation;
pub mod params;
pub mod protocol;
pub mod report;
pub mod waste_estimator;


pub use dashboard_sets::DashboardSet;
pub use datasets::DashboardData;
pub use error::{InputError, ParamsError};
pub use params::{DashboardParams, SliderParams};

/// Registers the dashboard resources and the systems that recompute the
/// model whenever an input changes.
///
/// Parameters inserted before this plugin is added are kept; otherwise the
/// defaults are used. Slider resources take their initial values from the
/// parameters.
pub struct EmissionsPlugin;

impl Plugin for EmissionsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DashboardParams>()
            .init_resource::<DashboardData>();

        app.add_plugins((
            dashboard_sets::DashboardSetsPlugin,
            waste_estimator::WasteEstimatorPlugin,
            emission_model::EmissionModelPlugin,
        ));
    }
}
