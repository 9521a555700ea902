//! Snapshot of everything the presentation layer renders.

use bevy::prelude::*;
use serde::Serialize;

use crate::datasets::DashboardData;
use crate::emission_model::{EmissionComparison, EmissionComparisonState};
use crate::report::{self, ComparisonRow};
use crate::waste_estimator::{WasteEstimate, WasteEstimateState};

/// Estimate section of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WasteObservation {
    pub percent_wasted: f64,
    pub estimate: WasteEstimate,
    pub summary: [String; 3],
    /// Month span the estimate line is drawn across, when data is loaded.
    pub overlay_span: Option<(String, String)>,
}

/// Emission comparison section of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmissionObservation {
    pub comparison: EmissionComparison,
    pub base_net: f64,
    pub model_net: f64,
    pub anaerobic_max: f64,
    pub anaerobic_marks: Vec<(f64, String)>,
    pub compost_label: String,
    pub anaerobic_label: String,
    pub summary: String,
    pub series: Vec<ComparisonRow>,
}

/// Full dashboard snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardObservation {
    pub waste: WasteObservation,
    pub emissions: EmissionObservation,
    pub composition_dates: Vec<String>,
}

impl WasteObservation {
    pub fn new(state: &WasteEstimateState, data: Option<&DashboardData>) -> Self {
        Self {
            percent_wasted: state.percent_wasted,
            estimate: state.estimate,
            summary: report::wasted_summary(state.percent_wasted, &state.estimate),
            overlay_span: data
                .and_then(DashboardData::measured_span)
                .map(|(first, last)| (first.to_string(), last.to_string())),
        }
    }
}

impl EmissionObservation {
    pub fn new(state: &EmissionComparisonState) -> Self {
        let comparison = state.comparison;
        Self {
            comparison,
            base_net: comparison.base_net(),
            model_net: comparison.model_net(),
            anaerobic_max: state.anaerobic_max,
            anaerobic_marks: report::anaerobic_marks(state.anaerobic_max),
            compost_label: report::compost_label(comparison.shares.compost_percent),
            anaerobic_label: report::anaerobic_label(comparison.shares.anaerobic_percent),
            summary: report::comparison_summary(&comparison),
            series: report::comparison_series(&comparison),
        }
    }
}

impl DashboardObservation {
    /// Build a snapshot from the world. Missing resources read as defaults.
    pub fn from_world(world: &World) -> Self {
        let data = world.get_resource::<DashboardData>();
        let waste_state = world
            .get_resource::<WasteEstimateState>()
            .cloned()
            .unwrap_or_default();
        let emission_state = world
            .get_resource::<EmissionComparisonState>()
            .cloned()
            .unwrap_or_default();

        Self {
            waste: WasteObservation::new(&waste_state, data),
            emissions: EmissionObservation::new(&emission_state),
            composition_dates: data
                .map(|d| {
                    d.composition_dates()
                        .into_iter()
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}
