use serde::Serialize;
use thiserror::Error;

use crate::domain::roas::RoasScenario;

const CURVE_SPEND_STEP: f64 = 500.0;
const MARGINAL_SPEND_STEP: f64 = 100.0;
const EFFICIENCY_FLOOR: f64 = 0.1;

#[derive(Error, Debug)]
pub enum RoasError {
    #[error("ad spend must be greater than zero")]
    ZeroAdSpend,
    #[error("saturation point must be greater than zero")]
    InvalidSaturationPoint,
    #[error("incrementality must be between 0 and 1")]
    InvalidIncrementality,
    #[error("organic revenue must not be negative")]
    NegativeOrganicRevenue,
    #[error("platform roas must not be negative")]
    NegativePlatformRoas,
}

#[derive(Serialize, Debug, Clone)]
pub struct RoasReport {
    pub true_incremental: f64,
    pub total_revenue: f64,
    pub roas: f64,
    pub iroas: f64,
    pub mer: f64,
    pub marginal_roas: f64,
}

#[derive(Serialize, Debug, Clone)]
pub struct RevenueCurvePoint {
    pub spend: f64,
    pub organic: f64,
    pub incremental: f64,
    pub total: f64,
}

#[derive(Serialize, Debug, Clone)]
pub struct RoasOutput {
    pub scenario: RoasScenario,
    pub report: RoasReport,
    pub curve: Vec<RevenueCurvePoint>,
}

pub fn compute_roas_output(scenario: &RoasScenario) -> Result<RoasOutput, RoasError> {
    validate_scenario(scenario)?;

    let report = compute_metrics(scenario);
    let curve = revenue_curve(scenario, report.iroas);

    Ok(RoasOutput {
        scenario: scenario.clone(),
        report,
        curve,
    })
}

fn validate_scenario(scenario: &RoasScenario) -> Result<(), RoasError> {
    if scenario.ad_spend <= 0.0 {
        return Err(RoasError::ZeroAdSpend);
    }
    if scenario.saturation_point <= 0.0 {
        return Err(RoasError::InvalidSaturationPoint);
    }
    if !(0.0..=1.0).contains(&scenario.incrementality) {
        return Err(RoasError::InvalidIncrementality);
    }
    if scenario.organic_revenue < 0.0 {
        return Err(RoasError::NegativeOrganicRevenue);
    }
    if scenario.platform_roas < 0.0 {
        return Err(RoasError::NegativePlatformRoas);
    }
    Ok(())
}

fn compute_metrics(scenario: &RoasScenario) -> RoasReport {
    let true_incremental = scenario.ad_spend * scenario.platform_roas * scenario.incrementality;
    let total_revenue = scenario.organic_revenue + true_incremental;
    let iroas = true_incremental / scenario.ad_spend;
    let mer = total_revenue / scenario.ad_spend;

    // The next 100 currency units of spend earn iROAS discounted by the
    // saturation factor at the current spend level.
    let efficiency = saturation_factor(scenario.ad_spend, scenario.saturation_point);
    let next_incremental = true_incremental + MARGINAL_SPEND_STEP * iroas * efficiency;
    let marginal_roas = (next_incremental - true_incremental) / MARGINAL_SPEND_STEP;

    RoasReport {
        true_incremental,
        total_revenue,
        roas: scenario.platform_roas,
        iroas,
        mer,
        marginal_roas,
    }
}

fn revenue_curve(scenario: &RoasScenario, iroas: f64) -> Vec<RevenueCurvePoint> {
    let mut curve = Vec::new();
    let mut spend = 0.0;
    while spend <= scenario.saturation_point {
        let factor = saturation_factor(spend, scenario.saturation_point);
        let incremental = spend * iroas * factor;
        curve.push(RevenueCurvePoint {
            spend,
            organic: scenario.organic_revenue,
            incremental,
            total: scenario.organic_revenue + incremental,
        });
        spend += CURVE_SPEND_STEP;
    }
    curve
}

/// Quadratic decay modeling diminishing returns, floored so the revenue
/// curve never goes fully flat.
fn saturation_factor(spend: f64, saturation_point: f64) -> f64 {
    let ratio = spend / (saturation_point * 1.5);
    (1.0 - ratio * ratio).max(EFFICIENCY_FLOOR)
}
