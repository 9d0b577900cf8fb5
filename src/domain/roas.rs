use serde::{Deserialize, Serialize};

/// Inputs for the efficiency-metrics calculator. Spend and revenue values
/// are currency units; `incrementality` is the fraction of platform-reported
/// revenue that is truly causal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoasScenario {
    pub organic_revenue: f64,
    pub ad_spend: f64,
    pub platform_roas: f64,
    pub incrementality: f64,
    pub saturation_point: f64,
}

impl Default for RoasScenario {
    fn default() -> Self {
        Self {
            organic_revenue: 5000.0,
            ad_spend: 2000.0,
            platform_roas: 4.0,
            incrementality: 0.5,
            saturation_point: 10000.0,
        }
    }
}
