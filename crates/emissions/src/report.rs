//! Text shown next to the dashboard charts.
//!
//! Everything here is plain strings and chart rows; layout and rendering
//! belong to the presentation layer.

use serde::Serialize;

use crate::emission_model::{EmissionComparison, COMPONENT_LABELS};
use crate::waste_estimator::WasteEstimate;

/// The three lines under the wasted-food slider.
pub fn wasted_summary(percent_wasted: f64, estimate: &WasteEstimate) -> [String; 3] {
    [
        format!("If we throw away {percent_wasted} percent of the food,"),
        format!(
            "we are wasting {:.2} tons of food per month.",
            estimate.mass_tons
        ),
        format!(
            "That is {:.2} watt hour of energy!",
            estimate.energy_watt_hours
        ),
    ]
}

pub fn compost_label(compost_percent: f64) -> String {
    format!("{compost_percent:.1} percent of the waste going to Composting")
}

pub fn anaerobic_label(anaerobic_percent: f64) -> String {
    format!("{anaerobic_percent:.1} percent of the waste going to Anaerobic Digester")
}

/// Marks for the anaerobic slider: its floor and its coupled maximum.
pub fn anaerobic_marks(max: f64) -> Vec<(f64, String)> {
    vec![(0.0, "0%".to_string()), (max, format!("{max}%"))]
}

/// Sentence comparing the scenario with the base model.
pub fn comparison_summary(comparison: &EmissionComparison) -> String {
    let mut text = format!(
        "Base model total GHG emission is {:.2} ton. Your model total GHG emission is {:.2} ton.",
        comparison.base_net(),
        comparison.model_net()
    );
    if let Some(pct) = comparison.percent_improvement {
        text.push_str(&format!(
            " Your model reduce food waste GHG emission by {pct:.2} percent."
        ));
    }
    text
}

/// One group of the comparison bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub label: &'static str,
    pub base: f64,
    pub model: f64,
}

/// Rows of the grouped "base vs your model" bar chart, in breakdown order.
pub fn comparison_series(comparison: &EmissionComparison) -> Vec<ComparisonRow> {
    COMPONENT_LABELS
        .into_iter()
        .zip(comparison.base.components())
        .zip(comparison.model.components())
        .map(|((label, base), model)| ComparisonRow {
            label,
            base,
            model,
        })
        .collect()
}
