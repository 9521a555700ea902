//! Data-driven dashboard parameters.
//!
//! The yearly waste mass fed to the emission model and the range and default
//! of every slider live in one [`DashboardParams`] resource, so a deployment
//! can tune them from a JSON file without recompiling. The emission rates and
//! population figures stay compile-time constants in their modules.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::emission_model::PolicyShares;
use crate::error::{InputError, ParamsError};

/// Range, step and initial value of one slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderParams {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl SliderParams {
    pub const fn new(min: f64, max: f64, default: f64) -> Self {
        Self {
            min,
            max,
            step: 1.0,
            default,
        }
    }

    /// Accept `value` if it is finite and inside `min..=max`.
    pub fn check(&self, field: &'static str, value: f64) -> Result<f64, InputError> {
        if !value.is_finite() {
            return Err(InputError::NotFinite { field });
        }
        if value < self.min || value > self.max {
            return Err(InputError::OutOfRange {
                field,
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(value)
    }

    fn is_consistent(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.min <= self.max
            && self.default >= self.min
            && self.default <= self.max
            && self.step > 0.0
    }
}

/// Tunables of the dashboard.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardParams {
    /// Yearly food waste fed to the emission model, in tons.
    pub total_waste_tons_per_year: f64,
    /// Percent of food thrown away.
    pub wasted_slider: SliderParams,
    /// Percent reduction in food production.
    pub production_reduction_slider: SliderParams,
    /// Percent of waste composted.
    pub compost_slider: SliderParams,
    /// Percent of waste sent to anaerobic digestion. Its effective maximum is
    /// further capped at `100 - compost`.
    pub anaerobic_slider: SliderParams,
    /// Composition date selected when the dashboard opens.
    pub default_composition_date: String,
}

impl Default for DashboardParams {
    fn default() -> Self {
        Self {
            total_waste_tons_per_year: 200.0,
            wasted_slider: SliderParams::new(0.0, 50.0, 20.0),
            production_reduction_slider: SliderParams::new(0.0, 90.0, 20.0),
            compost_slider: SliderParams::new(0.0, 100.0, 0.0),
            anaerobic_slider: SliderParams::new(0.0, 100.0, 0.0),
            default_composition_date: "2015-10".to_string(),
        }
    }
}

impl DashboardParams {
    /// Parse parameters from JSON. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ParamsError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Check that every slider range is well formed.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !self.total_waste_tons_per_year.is_finite() {
            return Err(ParamsError::Invalid(
                "total_waste_tons_per_year must be finite".to_string(),
            ));
        }
        let sliders = [
            ("wasted_slider", &self.wasted_slider),
            ("production_reduction_slider", &self.production_reduction_slider),
            ("compost_slider", &self.compost_slider),
            ("anaerobic_slider", &self.anaerobic_slider),
        ];
        for (name, slider) in sliders {
            if !slider.is_consistent() {
                return Err(ParamsError::Invalid(format!(
                    "{name}: need finite min <= default <= max and step > 0, got {slider:?}"
                )));
            }
            if slider.min < 0.0 || slider.max > 100.0 {
                return Err(ParamsError::Invalid(format!(
                    "{name}: percent range must stay within 0..=100, got {slider:?}"
                )));
            }
        }
        Ok(())
    }

    /// Policy shares the sliders start at.
    pub fn default_policy(&self) -> PolicyShares {
        PolicyShares::new(
            self.compost_slider.default,
            self.production_reduction_slider.default,
            self.anaerobic_slider.default,
        )
    }

    /// Validate a wasted-percent input against its slider.
    pub fn check_wasted(&self, percent: f64) -> Result<f64, InputError> {
        self.wasted_slider.check("percent", percent)
    }

    /// Validate policy inputs against their sliders.
    ///
    /// The anaerobic share is checked against its own slider range only; the
    /// `100 - compost` coupling is applied later by the input system, which
    /// clamps instead of rejecting.
    pub fn check_policy(&self, shares: PolicyShares) -> Result<PolicyShares, InputError> {
        Ok(PolicyShares::new(
            self.compost_slider
                .check("compost_percent", shares.compost_percent)?,
            self.production_reduction_slider.check(
                "production_reduction_percent",
                shares.production_reduction_percent,
            )?,
            self.anaerobic_slider
                .check("anaerobic_percent", shares.anaerobic_percent)?,
        ))
    }
}
