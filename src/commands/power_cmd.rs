use plotters::style::RGBColor;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_power_report;
use crate::domain::power::PowerScenario;
use crate::services::line_chart::{ChartError, ChartSeries, write_line_chart_png};
use crate::services::power_analysis::{PowerOutput, analyze_power};
use crate::services::scenario_yaml::load_scenario_from_yaml_file;

pub fn power_command(cmd: Commands) {
    if let Commands::Power {
        input,
        output,
        series_json,
    } = cmd
    {
        let scenario = match input {
            Some(path) => match load_scenario_from_yaml_file::<PowerScenario>(&path) {
                Ok(scenario) => scenario,
                Err(e) => {
                    eprintln!("Failed to load scenario: {e:?}");
                    return;
                }
            },
            None => PowerScenario::default(),
        };

        let result = match analyze_power(&scenario) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Failed to analyze test power: {e:?}");
                return;
            }
        };

        let yaml = match serde_yaml::to_string(&result) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize power report: {e:?}");
                return;
            }
        };
        if let Err(e) = std::fs::write(&output, yaml) {
            eprintln!("Failed to write power report: {e:?}");
            return;
        }

        let chart_path = format!("{output}.png");
        if let Err(e) = write_power_curve_png(&chart_path, &result) {
            eprintln!("Failed to render power curve: {e:?}");
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

        println!("{}", format_power_report(&result.report));
        println!("Power report written to {output}");
        println!("Power curve written to {chart_path}");
    }
}

fn write_power_curve_png(path: &str, result: &PowerOutput) -> Result<(), ChartError> {
    let mde = result
        .curve
        .iter()
        .map(|point| (point.days as f64, point.mde_pct))
        .collect();
    let target = result
        .curve
        .iter()
        .map(|point| (point.days as f64, point.target_lift))
        .collect();

    write_line_chart_png(
        path,
        "Minimum Detectable Effect by Duration",
        "Test duration in days",
        "Effect size in %",
        &[
            ChartSeries::new("MDE", RGBColor(30, 122, 204), mde),
            ChartSeries::new("Target lift", RGBColor(204, 84, 30), target),
        ],
    )
}
