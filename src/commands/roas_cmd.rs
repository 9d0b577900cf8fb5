use plotters::style::RGBColor;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_roas_report;
use crate::domain::roas::RoasScenario;
use crate::services::line_chart::{ChartError, ChartSeries, write_line_chart_png};
use crate::services::roas_metrics::{RoasOutput, compute_roas_output};
use crate::services::scenario_yaml::load_scenario_from_yaml_file;

pub fn roas_command(cmd: Commands) {
    if let Commands::Roas {
        input,
        output,
        series_json,
    } = cmd
    {
        let scenario = match input {
            Some(path) => match load_scenario_from_yaml_file::<RoasScenario>(&path) {
                Ok(scenario) => scenario,
                Err(e) => {
                    eprintln!("Failed to load scenario: {e:?}");
                    return;
                }
            },
            None => RoasScenario::default(),
        };

        let result = match compute_roas_output(&scenario) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Failed to compute efficiency metrics: {e:?}");
                return;
            }
        };

        let yaml = match serde_yaml::to_string(&result) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize efficiency report: {e:?}");
                return;
            }
        };
        if let Err(e) = std::fs::write(&output, yaml) {
            eprintln!("Failed to write efficiency report: {e:?}");
            return;
        }

        let chart_path = format!("{output}.png");
        if let Err(e) = write_revenue_curve_png(&chart_path, &result) {
            eprintln!("Failed to render revenue curve: {e:?}");
        }

        if let Some(path) = series_json {
            match serde_json::to_string_pretty(&result.curve) {
                Ok(json) => {
                    if let Err(e) = std::fs::write(&path, json) {
                        eprintln!("Failed to write chart series: {e:?}");
                    } else {
                        println!("Chart series written to {path}");
                    }
                }
                Err(e) => eprintln!("Failed to serialize chart series: {e:?}"),
            }
        }

        println!("{}", format_roas_report(&result.report));
        println!("Efficiency report written to {output}");
        println!("Revenue curve written to {chart_path}");
    }
}

fn write_revenue_curve_png(path: &str, result: &RoasOutput) -> Result<(), ChartError> {
    let organic = result
        .curve
        .iter()
        .map(|point| (point.spend, point.organic))
        .collect();
    let incremental = result
        .curve
        .iter()
        .map(|point| (point.spend, point.incremental))
        .collect();
    let total = result
        .curve
        .iter()
        .map(|point| (point.spend, point.total))
        .collect();

    write_line_chart_png(
        path,
        "Revenue vs Spend",
        "Ad spend",
        "Revenue",
        &[
            ChartSeries::new("Organic", RGBColor(120, 120, 120), organic),
            ChartSeries::new("Incremental", RGBColor(204, 84, 30), incremental),
            ChartSeries::new("Total", RGBColor(30, 122, 204), total),
        ],
    )
}
