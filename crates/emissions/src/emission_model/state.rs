//! Policy slider input and computed comparison resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::calculations::{EmissionComparison, PolicyShares};
use crate::params::DashboardParams;

/// Current values of the compost, production-reduction and anaerobic sliders.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolicySliders {
    pub shares: PolicyShares,
}

impl FromWorld for PolicySliders {
    fn from_world(world: &mut World) -> Self {
        let shares = match world.get_resource::<DashboardParams>() {
            Some(params) => params.default_policy(),
            None => DashboardParams::default().default_policy(),
        };
        Self { shares }
    }
}

/// Last computed comparison against the base model.
#[derive(Resource, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EmissionComparisonState {
    pub comparison: EmissionComparison,
    /// Current upper bound of the anaerobic slider (`100 - compost`).
    pub anaerobic_max: f64,
    /// Number of recomputations so far.
    pub revision: u64,
}
