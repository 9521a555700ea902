//! Mass-normalized emission and offset rates (tons CO2e per ton of waste).

/// Emissions from producing the food that ends up wasted.
pub const PRODUCTION_EMISSION_RATE: f64 = 1.662;

/// Emissions from landfilling waste.
pub const LANDFILL_EMISSION_RATE: f64 = 0.374;

/// Offset from composting waste instead of landfilling it.
pub const COMPOST_OFFSET_RATE: f64 = -0.19841;

/// Offset from dry anaerobic digestion of waste.
pub const ANAEROBIC_OFFSET_RATE: f64 = -0.110231;

/// Display labels of the breakdown components, in breakdown order.
pub const COMPONENT_LABELS: [&str; 4] = [
    "Production Emission",
    "Compost Offset",
    "Anaerobic Offset",
    "Landfill Emission",
];
