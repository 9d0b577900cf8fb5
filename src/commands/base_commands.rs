use chrono::Local;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute ROAS, iROAS, MER and marginal ROAS with a revenue-vs-spend curve
    Roas {
        /// Scenario YAML file; defaults are used when omitted
        #[arg(short, long)]
        input: Option<String>,
        /// Output YAML report file
        #[arg(short, long)]
        output: String,
        /// Optional path for the chart points as JSON
        #[arg(long)]
        series_json: Option<String>,
    },
    /// Illustrate selection bias in retargeting attribution
    Bias {
        /// Include the retargeting campaign in the simulated series
        #[arg(short, long)]
        retargeting: bool,
        /// Output YAML report file
        #[arg(short, long)]
        output: String,
        /// First day of the simulated series (YYYY-MM-DD)
        #[arg(short, long, default_value_t = default_start_date())]
        start_date: String,
        /// RNG seed for a reproducible series
        #[arg(long)]
        seed: Option<u64>,
        /// Optional path for the chart points as JSON
        #[arg(long)]
        series_json: Option<String>,
    },
    /// Analyze geo-test power and the minimum detectable effect
    Power {
        /// Scenario YAML file; defaults are used when omitted
        #[arg(short, long)]
        input: Option<String>,
        /// Output YAML report file
        #[arg(short, long)]
        output: String,
        /// Optional path for the chart points as JSON
        #[arg(long)]
        series_json: Option<String>,
    },
    /// Simulate a time-based-regression counterfactual
    Tbr {
        /// Scenario YAML file; defaults are used when omitted
        #[arg(short, long)]
        input: Option<String>,
        /// Output YAML report file
        #[arg(short, long)]
        output: String,
        /// First day of the simulated series (YYYY-MM-DD)
        #[arg(short, long, default_value_t = default_start_date())]
        start_date: String,
        /// RNG seed for a reproducible series
        #[arg(long)]
        seed: Option<u64>,
        /// Optional path for the chart points as JSON
        #[arg(long)]
        series_json: Option<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn default_start_date() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}
