use chrono::Local;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::domain::forecast::DEFAULT_ITERATIONS;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch closed work items from Azure DevOps and serialize to YAML
    Fetch {
        /// Path to Azure DevOps config YAML
        #[arg(short, long)]
        config: String,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
    },
    /// Forecast how many items complete within a time frame
    HowMany {
        /// Work item records YAML file
        #[arg(short, long)]
        input: String,
        /// Team member whose completed items count towards throughput (repeatable)
        #[arg(short, long, required = true)]
        member: Vec<String>,
        /// Number of days of historical data used by forecasting
        #[arg(short, long)]
        last_days: usize,
        /// Length of the forecasted time frame in days
        #[arg(short = 'd', long)]
        days: usize,
        /// Number of simulation iterations
        #[arg(short = 'n', long, default_value_t = DEFAULT_ITERATIONS)]
        iterations: usize,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
    },
    /// Forecast when a number of items will be completed
    When {
        /// Work item records YAML file
        #[arg(short, long)]
        input: String,
        /// Team member whose completed items count towards throughput (repeatable)
        #[arg(short, long, required = true)]
        member: Vec<String>,
        /// Number of days of historical data used by forecasting
        #[arg(short, long)]
        last_days: usize,
        /// Number of work items to complete
        #[arg(short = 't', long)]
        items: usize,
        /// Simulation start date (YYYY-MM-DD)
        #[arg(short, long, default_value_t = default_start_date())]
        start_date: String,
        /// Number of simulation iterations
        #[arg(short = 'n', long, default_value_t = DEFAULT_ITERATIONS)]
        iterations: usize,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
    },
    /// Plot weekly throughput from work item records into a PNG chart
    PlotThroughput {
        /// Work item records YAML file
        #[arg(short, long)]
        input: String,
        /// Team member whose completed items count towards throughput (repeatable)
        #[arg(short, long, required = true)]
        member: Vec<String>,
        /// Output PNG file
        #[arg(short, long)]
        output: String,
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
