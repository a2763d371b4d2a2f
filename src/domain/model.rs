use serde::{Deserialize, Serialize};

/// Inputs for a single-room estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateRequest {
    pub length: f64,
    pub width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    pub price_per_unit: f64,
    pub usage_per_unit: f64,
    pub waste_percent: f64,
    pub vat_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub area: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    pub work_cost: f64,
    pub material_quantity: f64,
    pub vat: f64,
    pub gross: f64,
}
