mod commands;
mod domain;
mod services;
#[cfg(test)]
mod test_support;

use clap::{CommandFactory, Parser};

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::fetch_cmd::fetch_command;
use crate::commands::forecast_cmd::{how_many_command, when_command};
use crate::commands::plot_throughput_cmd::plot_throughput_command;

fn main() {
    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Fetch { .. } => fetch_command(cmd),
        cmd @ Commands::HowMany { .. } => how_many_command(cmd),
        cmd @ Commands::When { .. } => when_command(cmd),
        cmd @ Commands::PlotThroughput { .. } => plot_throughput_command(cmd),
        Commands::Completions { shell } => {
            let mut cli = CliArgs::command();
            let name = cli.get_name().to_string();
            clap_complete::generate(shell, &mut cli, name, &mut std::io::stdout());
        }
    }
}
