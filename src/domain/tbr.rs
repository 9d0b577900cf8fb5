use serde::{Deserialize, Serialize};

/// Inputs for the time-based-regression counterfactual simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TbrScenario {
    /// Daily revenue growth rate added per step on top of the 5000 base.
    pub trend_strength: f64,
    /// Amplitude of the sinusoidal seasonal component.
    pub seasonality: f64,
    /// Revenue bump added to the actual series after the intervention day.
    pub true_lift: f64,
    /// Inverse proxy for prediction noise, in (0, 1]. A fit of 1.0 makes the
    /// counterfactual noise-free.
    pub model_fit: f64,
}

impl Default for TbrScenario {
    fn default() -> Self {
        Self {
            trend_strength: 10.0,
            seasonality: 200.0,
            true_lift: 500.0,
            model_fit: 0.85,
        }
    }
}
