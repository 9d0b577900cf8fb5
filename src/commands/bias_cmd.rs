use plotters::style::RGBColor;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_bias_summary;
use crate::services::line_chart::{ChartError, ChartSeries, write_line_chart_png};
use crate::services::selection_bias::{
    BiasOutput, simulate_selection_bias, simulate_selection_bias_with_rng,
};

pub fn bias_command(cmd: Commands) {
    if let Commands::Bias {
        retargeting,
        output,
        start_date,
        seed,
        series_json,
    } = cmd
    {
        let result = match seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                simulate_selection_bias_with_rng(retargeting, &start_date, &mut rng)
            }
            None => simulate_selection_bias(retargeting, &start_date),
        };
        let result = match result {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Failed to simulate selection bias: {e:?}");
                return;
            }
        };

        let yaml = match serde_yaml::to_string(&result) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize bias report: {e:?}");
                return;
            }
        };
        if let Err(e) = std::fs::write(&output, yaml) {
            eprintln!("Failed to write bias report: {e:?}");
            return;
        }

        let chart_path = format!("{output}.png");
        if let Err(e) = write_bias_series_png(&chart_path, &result) {
            eprintln!("Failed to render bias series: {e:?}");
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

        println!("{}", format_bias_summary(&result));
        println!("Bias report written to {output}");
        println!("Daily series chart written to {chart_path}");
    }
}

fn write_bias_series_png(path: &str, result: &BiasOutput) -> Result<(), ChartError> {
    let organic = result
        .days
        .iter()
        .map(|record| (record.day as f64, record.organic))
        .collect();
    let total = result
        .days
        .iter()
        .map(|record| (record.day as f64, record.total))
        .collect();
    let claimed = result
        .days
        .iter()
        .map(|record| (record.day as f64, record.platform_claim))
        .collect();

    write_line_chart_png(
        path,
        "Attribution vs Reality",
        "Day",
        "Daily sales",
        &[
            ChartSeries::new("Organic baseline", RGBColor(120, 120, 120), organic),
            ChartSeries::new("Total sales", RGBColor(30, 122, 204), total),
            ChartSeries::new("Platform-claimed", RGBColor(204, 84, 30), claimed),
        ],
    )
}
