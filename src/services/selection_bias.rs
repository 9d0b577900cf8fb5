use chrono::{Duration, NaiveDate};
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

const SERIES_DAYS: usize = 10;
const RETARGETING_SPEND: f64 = 40.0;
const PLATFORM_CLAIM_SHARE: f64 = 0.6;
const TRUE_LIFT_SHARE: f64 = 0.1;

#[derive(Error, Debug)]
pub enum BiasError {
    #[error("invalid start date: {0}")]
    InvalidStartDate(String),
}

#[derive(Serialize, Debug, Clone)]
pub struct BiasDayRecord {
    pub day: usize,
    pub date: String,
    pub organic: f64,
    pub incremental: f64,
    pub platform_claim: f64,
    pub total: f64,
}

#[derive(Serialize, Debug, Clone)]
pub struct BiasOutput {
    pub retargeting: bool,
    pub days: Vec<BiasDayRecord>,
}

pub fn simulate_selection_bias(
    retargeting: bool,
    start_date: &str,
) -> Result<BiasOutput, BiasError> {
    let mut rng = rand::thread_rng();
    simulate_selection_bias_with_rng(retargeting, start_date, &mut rng)
}

/// Generates ten days of synthetic sales. Retargeting credit is claimed as a
/// share of the organic baseline, while the true lift is a small fraction of
/// the retargeting spend, so the platform-attributed number always overstates
/// the causal effect.
pub fn simulate_selection_bias_with_rng<R: Rng + ?Sized>(
    retargeting: bool,
    start_date: &str,
    rng: &mut R,
) -> Result<BiasOutput, BiasError> {
    let start = NaiveDate::parse_from_str(start_date, "%Y-%m-%d")
        .map_err(|_| BiasError::InvalidStartDate(start_date.to_string()))?;

    let mut days = Vec::with_capacity(SERIES_DAYS);
    for day in 1..=SERIES_DAYS {
        let organic = 50.0 + rng.gen_range(0.0..10.0);
        let retargeting_spend = if retargeting { RETARGETING_SPEND } else { 0.0 };
        let platform_claim = if retargeting {
            organic * PLATFORM_CLAIM_SHARE
        } else {
            0.0
        };
        let incremental = retargeting_spend * TRUE_LIFT_SHARE;
        let date = start + Duration::days(day as i64 - 1);

        days.push(BiasDayRecord {
            day,
            date: date.format("%Y-%m-%d").to_string(),
            organic,
            incremental,
            platform_claim,
            total: organic + incremental,
        });
    }

    Ok(BiasOutput { retargeting, days })
}
