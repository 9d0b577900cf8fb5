use serde::{Deserialize, Serialize};

/// Inputs for the geo-test power analyzer.
///
/// `daily_revenue` does not enter the MDE formula; it is carried through to
/// the report so readers can translate relative effects into currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerScenario {
    pub daily_revenue: f64,
    /// Day-to-day revenue volatility as a fraction, in (0, 1].
    pub volatility: f64,
    /// Hypothesized relative lift, in (0, 1].
    pub expected_lift: f64,
    /// Planned test duration in days, at least 1.
    pub planned_duration: u32,
    /// Target statistical power, in (0, 1).
    pub power: f64,
    /// Two-sided significance level, in (0, 1).
    pub alpha: f64,
}

impl Default for PowerScenario {
    fn default() -> Self {
        Self {
            daily_revenue: 50000.0,
            volatility: 0.15,
            expected_lift: 0.10,
            planned_duration: 14,
            power: 0.80,
            alpha: 0.10,
        }
    }
}
