use plotters::style::RGBColor;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_tbr_report;
use crate::domain::tbr::TbrScenario;
use crate::services::line_chart::{ChartError, ChartSeries, write_line_chart_png};
use crate::services::scenario_yaml::load_scenario_from_yaml_file;
use crate::services::tbr_simulation::{TbrOutput, simulate_tbr, simulate_tbr_with_rng};

pub fn tbr_command(cmd: Commands) {
    if let Commands::Tbr {
        input,
        output,
        start_date,
        seed,
        series_json,
    } = cmd
    {
        let scenario = match input {
            Some(path) => match load_scenario_from_yaml_file::<TbrScenario>(&path) {
                Ok(scenario) => scenario,
                Err(e) => {
                    eprintln!("Failed to load scenario: {e:?}");
                    return;
                }
            },
            None => TbrScenario::default(),
        };

        let result = match seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                simulate_tbr_with_rng(&scenario, &start_date, &mut rng)
            }
            None => simulate_tbr(&scenario, &start_date),
        };
        let result = match result {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Failed to simulate counterfactual: {e:?}");
                return;
            }
        };

        let yaml = match serde_yaml::to_string(&result) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize counterfactual report: {e:?}");
                return;
            }
        };
        if let Err(e) = std::fs::write(&output, yaml) {
            eprintln!("Failed to write counterfactual report: {e:?}");
            return;
        }

        let chart_path = format!("{output}.png");
        if let Err(e) = write_counterfactual_png(&chart_path, &result) {
            eprintln!("Failed to render counterfactual chart: {e:?}");
        }

        if let Some(path) = series_json {
            match serde_json::to_string_pretty(&result.days) {
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

        println!("{}", format_tbr_report(&result.report));
        println!("Counterfactual report written to {output}");
        println!("Counterfactual chart written to {chart_path}");
    }
}

fn write_counterfactual_png(path: &str, result: &TbrOutput) -> Result<(), ChartError> {
    let actual = result
        .days
        .iter()
        .map(|record| (record.day as f64, record.actual))
        .collect();
    let counterfactual = result
        .days
        .iter()
        .map(|record| (record.day as f64, record.counterfactual))
        .collect();

    write_line_chart_png(
        path,
        "Actual vs Counterfactual",
        "Day",
        "Daily revenue",
        &[
            ChartSeries::new("Actual", RGBColor(30, 122, 204), actual),
            ChartSeries::new("Counterfactual", RGBColor(204, 84, 30), counterfactual),
        ],
    )
}
