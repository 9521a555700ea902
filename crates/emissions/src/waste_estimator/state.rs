//! Slider input and computed estimate resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::calculations::WasteEstimate;
use crate::params::DashboardParams;

/// Current value of the "percent wasted" slider.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WastedSlider {
    pub percent_wasted: f64,
}

impl FromWorld for WastedSlider {
    fn from_world(world: &mut World) -> Self {
        let percent_wasted = world
            .get_resource::<DashboardParams>()
            .map(|p| p.wasted_slider.default)
            .unwrap_or_else(|| DashboardParams::default().wasted_slider.default);
        Self { percent_wasted }
    }
}

/// Last computed estimate, tagged with the input it was computed from.
#[derive(Resource, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WasteEstimateState {
    /// Slider value the estimate belongs to.
    pub percent_wasted: f64,
    pub estimate: WasteEstimate,
    /// Number of recomputations so far. Zero means nothing has been computed yet.
    pub revision: u64,
}
