//! Read-only measurement tables shown on the dashboard.
//!
//! Three tables are handed over by an external loader: the measured monthly
//! waste series, the waste composition by category and date, and the GHG
//! composition by category and date. Field names follow the source CSV
//! headers through serde renames, so a CSV-to-JSON loader maps columns
//! one-to-one. The tables are never mutated after loading.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// One month of measured dining food waste.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyWasteRecord {
    /// Month identifier, e.g. `2009-1`.
    pub date: String,
    /// Measured food waste collected in tons.
    pub tons: f64,
    /// GHG estimate using 2015 composition, when available.
    #[serde(rename = "2015_GHG_est", default)]
    pub ghg_2015_est: Option<f64>,
    /// GHG estimate using 2020 composition, when available.
    #[serde(rename = "2020_GHG_est", default)]
    pub ghg_2020_est: Option<f64>,
}

/// Share of one food category in the waste stream on a given date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionRecord {
    #[serde(rename = "Date")]
    pub date: String,
    /// Food group, the inner ring of the sunburst.
    pub parent: String,
    /// Representative food of the group.
    pub food: String,
    #[serde(rename = "Percentage")]
    pub percentage: f64,
}

/// Estimated emission share of one food category on a given date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GhgCompositionRecord {
    #[serde(rename = "Date")]
    pub date: String,
    pub parent: String,
    pub food: String,
    #[serde(rename = "GHG_estimation")]
    pub ghg_estimation: f64,
}

/// All dashboard tables.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardData {
    pub monthly_waste: Vec<MonthlyWasteRecord>,
    pub waste_composition: Vec<CompositionRecord>,
    pub ghg_composition: Vec<GhgCompositionRecord>,
}

impl DashboardData {
    pub fn is_empty(&self) -> bool {
        self.monthly_waste.is_empty()
            && self.waste_composition.is_empty()
            && self.ghg_composition.is_empty()
    }

    /// Distinct composition dates in the order they first appear.
    ///
    /// Both composition dropdowns offer these dates.
    pub fn composition_dates(&self) -> Vec<&str> {
        let mut dates: Vec<&str> = Vec::new();
        for record in &self.waste_composition {
            if !dates.contains(&record.date.as_str()) {
                dates.push(&record.date);
            }
        }
        dates
    }

    /// Whether `date` has any waste-composition rows.
    pub fn has_composition_date(&self, date: &str) -> bool {
        self.waste_composition.iter().any(|r| r.date == date)
    }

    /// First and last month of the measured series.
    ///
    /// The estimate is drawn as a horizontal line across this span.
    pub fn measured_span(&self) -> Option<(&str, &str)> {
        let first = self.monthly_waste.first()?;
        let last = self.monthly_waste.last()?;
        Some((first.date.as_str(), last.date.as_str()))
    }
}
