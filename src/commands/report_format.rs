use crate::services::power_analysis::PowerReport;
use crate::services::roas_metrics::RoasReport;
use crate::services::selection_bias::BiasOutput;
use crate::services::tbr_simulation::TbrReport;

pub fn format_roas_report(report: &RoasReport) -> String {
    let mut lines = Vec::new();
    lines.push("Efficiency Report".to_string());
    lines.push(String::new());
    lines.push("Metric | Value".to_string());
    lines.push("-------|------".to_string());
    lines.push(format!("Total revenue | {:.2}", report.total_revenue));
    lines.push(format!("True incremental | {:.2}", report.true_incremental));
    lines.push(format!("ROAS (reported) | {:.2}", report.roas));
    lines.push(format!("iROAS | {:.2}", report.iroas));
    lines.push(format!("MER | {:.2}", report.mer));
    lines.push(format!("Marginal ROAS | {:.2}", report.marginal_roas));

    lines.join("\n")
}

pub fn format_power_report(report: &PowerReport) -> String {
    let mut lines = Vec::new();
    lines.push("Power Analysis Report".to_string());
    lines.push(format!("z(alpha): {:.4}", report.z_alpha));
    lines.push(format!("z(beta): {:.4}", report.z_beta));
    lines.push(format!(
        "Minimum detectable effect: {:.2}%",
        report.current_mde_pct
    ));
    lines.push(format!("Verdict: {}", report.verdict));

    lines.join("\n")
}

pub fn format_bias_summary(output: &BiasOutput) -> String {
    let claimed: f64 = output.days.iter().map(|record| record.platform_claim).sum();
    let incremental: f64 = output.days.iter().map(|record| record.incremental).sum();

    let mut lines = Vec::new();
    lines.push("Selection Bias Illustration".to_string());
    lines.push(format!(
        "Retargeting: {}",
        if output.retargeting { "on" } else { "off" }
    ));
    lines.push(format!(
        "Platform-claimed credit over {} days: {:.2}",
        output.days.len(),
        claimed
    ));
    lines.push(format!("True incremental lift: {:.2}", incremental));

    lines.join("\n")
}

pub fn format_tbr_report(report: &TbrReport) -> String {
    let mut lines = Vec::new();
    lines.push("TBR Counterfactual Report".to_string());
    lines.push(format!("R squared: {:.3}", report.r_squared));
    lines.push(format!("Estimated cumulative lift: {:.2}", report.estimated_lift));
    lines.push(format!("Confidence: {}", report.confidence));

    lines.join("\n")
}
