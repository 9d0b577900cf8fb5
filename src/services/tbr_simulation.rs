use std::fmt;

use chrono::{Duration, NaiveDate};
use rand::Rng;
use rand_distr::{Distribution, Uniform};
use serde::Serialize;
use thiserror::Error;

use crate::domain::tbr::TbrScenario;

const LAST_DAY: usize = 100;
const INTERVENTION_DAY: usize = 70;
const BASE_LEVEL: f64 = 5000.0;
const ACTUAL_NOISE_SCALE: f64 = 200.0;
const PREDICTION_NOISE_SCALE: f64 = 1000.0;

#[derive(Error, Debug)]
pub enum TbrError {
    #[error("model fit must be in (0, 1]")]
    InvalidModelFit,
    #[error("invalid start date: {0}")]
    InvalidStartDate(String),
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::Low => write!(f, "Low"),
            Confidence::Medium => write!(f, "Medium"),
            Confidence::High => write!(f, "High"),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct TbrDayRecord {
    pub day: usize,
    pub date: String,
    pub actual: f64,
    pub counterfactual: f64,
    pub is_intervention: bool,
}

#[derive(Serialize, Debug, Clone)]
pub struct TbrReport {
    pub r_squared: f64,
    pub estimated_lift: f64,
    pub confidence: Confidence,
}

#[derive(Serialize, Debug, Clone)]
pub struct TbrOutput {
    pub scenario: TbrScenario,
    pub report: TbrReport,
    pub days: Vec<TbrDayRecord>,
}

pub fn simulate_tbr(scenario: &TbrScenario, start_date: &str) -> Result<TbrOutput, TbrError> {
    let mut rng = rand::thread_rng();
    simulate_tbr_with_rng(scenario, start_date, &mut rng)
}

/// Generates the 101-day actual/counterfactual pair. Days up to 70 are the
/// training window used for the fit statistics; later days carry the true
/// lift on the actual series and feed the cumulative-lift estimate.
pub fn simulate_tbr_with_rng<R: Rng + ?Sized>(
    scenario: &TbrScenario,
    start_date: &str,
    rng: &mut R,
) -> Result<TbrOutput, TbrError> {
    if !(scenario.model_fit > 0.0 && scenario.model_fit <= 1.0) {
        return Err(TbrError::InvalidModelFit);
    }
    let start = NaiveDate::parse_from_str(start_date, "%Y-%m-%d")
        .map_err(|_| TbrError::InvalidStartDate(start_date.to_string()))?;

    let unit_noise = Uniform::new(-0.5, 0.5);
    let noise_base = PREDICTION_NOISE_SCALE * (1.0 - scenario.model_fit);
    // Fixed approximation of the training-window mean, not the sample mean.
    let mean_approx = BASE_LEVEL + scenario.trend_strength * 35.0;

    let mut sum_squared_total = 0.0;
    let mut sum_squared_residual = 0.0;
    let mut cumulative_actual = 0.0;
    let mut cumulative_predicted = 0.0;

    let mut days = Vec::with_capacity(LAST_DAY + 1);
    for day in 0..=LAST_DAY {
        let t = day as f64;
        let base_trend = BASE_LEVEL + t * scenario.trend_strength;
        let seasonal = (t / 5.0).sin() * scenario.seasonality;
        let predicted = base_trend + seasonal + unit_noise.sample(rng) * noise_base;
        let daily_randomness = unit_noise.sample(rng) * ACTUAL_NOISE_SCALE;

        let is_intervention = day > INTERVENTION_DAY;
        let impact = if is_intervention {
            scenario.true_lift
        } else {
            0.0
        };
        let actual = base_trend + seasonal + daily_randomness + impact;

        if is_intervention {
            cumulative_actual += actual;
            cumulative_predicted += predicted;
        } else {
            sum_squared_total += (actual - mean_approx) * (actual - mean_approx);
            sum_squared_residual += (actual - predicted) * (actual - predicted);
        }

        let date = start + Duration::days(day as i64);
        days.push(TbrDayRecord {
            day,
            date: date.format("%Y-%m-%d").to_string(),
            actual,
            counterfactual: predicted,
            is_intervention,
        });
    }

    let r_squared = fit_quality(sum_squared_residual, sum_squared_total);
    let report = TbrReport {
        r_squared,
        estimated_lift: cumulative_actual - cumulative_predicted,
        confidence: confidence_from_r_squared(r_squared),
    };

    Ok(TbrOutput {
        scenario: scenario.clone(),
        report,
        days,
    })
}

/// R² floored at zero. A degenerate training window with no variance reads
/// as zero explanatory power rather than NaN.
fn fit_quality(sum_squared_residual: f64, sum_squared_total: f64) -> f64 {
    if sum_squared_total > 0.0 {
        (1.0 - sum_squared_residual / sum_squared_total).max(0.0)
    } else {
        0.0
    }
}

fn confidence_from_r_squared(r_squared: f64) -> Confidence {
    if r_squared >= 0.8 {
        Confidence::High
    } else if r_squared >= 0.6 {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}
