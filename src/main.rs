mod commands;
mod domain;
mod services;

use clap::{CommandFactory, Parser};

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::bias_cmd::bias_command;
use crate::commands::power_cmd::power_command;
use crate::commands::roas_cmd::roas_command;
use crate::commands::tbr_cmd::tbr_command;

fn main() {
    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Roas { .. } => roas_command(cmd),
        cmd @ Commands::Bias { .. } => bias_command(cmd),
        cmd @ Commands::Power { .. } => power_command(cmd),
        cmd @ Commands::Tbr { .. } => tbr_command(cmd),
        Commands::Completions { shell } => {
            let mut cli = CliArgs::command();
            let name = cli.get_name().to_string();
            clap_complete::generate(shell, &mut cli, name, &mut std::io::stdout());
        }
    }
}
