//! Pure emission calculations.

use serde::{Deserialize, Serialize};

use super::constants::*;

/// Policy percentages fed into the emission model, each nominally 0..=100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyShares {
    /// Share of residual waste sent to composting.
    pub compost_percent: f64,
    /// Reduction in food production, applied before disposal.
    pub production_reduction_percent: f64,
    /// Share of residual waste sent to anaerobic digestion.
    pub anaerobic_percent: f64,
}

impl PolicyShares {
    /// Shares in field order.
    pub fn new(
        compost_percent: f64,
        production_reduction_percent: f64,
        anaerobic_percent: f64,
    ) -> Self {
        Self {
            compost_percent,
            production_reduction_percent,
            anaerobic_percent,
        }
    }

    /// Share left for landfill. Negative when compost + anaerobic exceed 100.
    pub fn landfill_percent(&self) -> f64 {
        100.0 - self.compost_percent - self.anaerobic_percent
    }

    /// Upper bound of the anaerobic share given the current compost share.
    pub fn max_anaerobic_percent(&self) -> f64 {
        100.0 - self.compost_percent
    }

    /// Copy with the anaerobic share clamped to [`Self::max_anaerobic_percent`].
    pub fn coupled(&self) -> Self {
        Self {
            anaerobic_percent: self.anaerobic_percent.min(self.max_anaerobic_percent()),
            ..*self
        }
    }

    /// Emissions for `total_waste` tons under these shares.
    pub fn emissions(&self, total_waste: f64) -> EmissionBreakdown {
        compute_emissions(
            total_waste,
            self.compost_percent,
            self.production_reduction_percent,
            self.anaerobic_percent,
        )
    }
}

/// Yearly emission components in tons CO2e. Offsets are negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmissionBreakdown {
    pub production_emission: f64,
    pub compost_offset: f64,
    pub anaerobic_offset: f64,
    pub landfill_emission: f64,
}

impl EmissionBreakdown {
    /// Components in fixed order: production, compost, anaerobic, landfill.
    pub fn components(&self) -> [f64; 4] {
        [
            self.production_emission,
            self.compost_offset,
            self.anaerobic_offset,
            self.landfill_emission,
        ]
    }

    /// Net yearly emission, the sum of all four components.
    pub fn net(&self) -> f64 {
        self.components().iter().sum()
    }

    /// Components paired with their display labels.
    pub fn labeled(&self) -> [(&'static str, f64); 4] {
        let values = self.components();
        [
            (COMPONENT_LABELS[0], values[0]),
            (COMPONENT_LABELS[1], values[1]),
            (COMPONENT_LABELS[2], values[2]),
            (COMPONENT_LABELS[3], values[3]),
        ]
    }
}

/// Compute the four emission components for `total_waste` tons per year.
///
/// 1. landfill share = 100 - compost - anaerobic
/// 2. production emission scales with the food still produced
/// 3. every disposal route is scaled by the residual waste fraction
///    `1 - production_reduction / 100`
///
/// Total over finite inputs. Shares outside 0..=100 or a compost +
/// anaerobic sum above 100 are computed as given.
pub fn compute_emissions(
    total_waste: f64,
    compost_percent: f64,
    production_reduction_percent: f64,
    anaerobic_percent: f64,
) -> EmissionBreakdown {
    let landfill_percent = 100.0 - compost_percent - anaerobic_percent;
    let residual_fraction = 1.0 - production_reduction_percent / 100.0;
    let residual_waste = total_waste * residual_fraction;

    EmissionBreakdown {
        production_emission: total_waste
            * PRODUCTION_EMISSION_RATE
            * (100.0 - production_reduction_percent)
            / 100.0,
        compost_offset: residual_waste * COMPOST_OFFSET_RATE * compost_percent / 100.0,
        anaerobic_offset: residual_waste * ANAEROBIC_OFFSET_RATE * anaerobic_percent / 100.0,
        landfill_emission: residual_waste * LANDFILL_EMISSION_RATE * landfill_percent / 100.0,
    }
}

/// Percentage by which `model_net` improves on `base_net`.
///
/// `None` when the base emits nothing, since there is nothing to improve on.
pub fn percent_improvement(base_net: f64, model_net: f64) -> Option<f64> {
    if base_net == 0.0 {
        return None;
    }
    Some((base_net - model_net) / base_net * 100.0)
}

/// A policy scenario next to the all-landfill base model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmissionComparison {
    pub total_waste_tons: f64,
    pub shares: PolicyShares,
    /// No compost, no reduction, no anaerobic digestion.
    pub base: EmissionBreakdown,
    pub model: EmissionBreakdown,
    pub percent_improvement: Option<f64>,
}

impl EmissionComparison {
    /// Net yearly emission of the base model.
    pub fn base_net(&self) -> f64 {
        self.base.net()
    }

    /// Net yearly emission of the policy scenario.
    pub fn model_net(&self) -> f64 {
        self.model.net()
    }
}

/// Compare `shares` against the base model for the same waste mass.
pub fn compare_to_base(total_waste: f64, shares: PolicyShares) -> EmissionComparison {
    let base = PolicyShares::default().emissions(total_waste);
    let model = shares.emissions(total_waste);
    EmissionComparison {
        total_waste_tons: total_waste,
        shares,
        base,
        model,
        percent_improvement: percent_improvement(base.net(), model.net()),
    }
}
