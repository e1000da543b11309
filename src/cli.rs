use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Tables for a terminal
    Terminal,
    /// Pretty-printed JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "growthmap")]
#[command(about = "Marketing-audit metrics and growth projections for an artist", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal", global = true)]
    pub format: OutputFormat,

    /// Configuration file (defaults to the nearest .growthmap.toml)
    #[arg(short, long, global = true, env = "GROWTHMAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colors and box-drawing characters
    #[arg(long, global = true)]
    pub plain: bool,

    /// Increase log verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Brand health score and headline metrics
    Summary,

    /// KPI dashboard with progress toward 90-day targets
    Kpis {
        /// Current Spotify monthly listeners
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=1000))]
        current_listeners: Option<u32>,

        /// Override a metric's current value (name=value, repeatable)
        #[arg(long = "set", value_parser = parse_key_val)]
        overrides: Vec<(String, f64)>,
    },

    /// Conversion funnel: percent of initial and stage-to-stage rates
    Funnel,

    /// Budget scenario projections with cost, revenue and ROI
    Scenarios {
        /// Override a metric's current value (name=value, repeatable)
        #[arg(long = "set", value_parser = parse_key_val)]
        overrides: Vec<(String, f64)>,
    },

    /// Classify a listener count into a success band and next strategy
    Assess {
        /// Monthly listeners at the end of the 90 days
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=1000))]
        listeners: Option<u32>,
    },

    /// Task completion and critical-issue remediation progress
    Tasks {
        /// Task status (task name=not_started|planning|in_progress|completed, repeatable)
        #[arg(long = "status", value_parser = parse_key_str)]
        statuses: Vec<(String, String)>,

        /// Fix progress for each of the 7 critical issues, 0-100; omitted issues count as 0
        #[arg(long, value_delimiter = ',', value_parser = clap::value_parser!(u32).range(0..=100))]
        issue_progress: Vec<u32>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

fn parse_key_str(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{}'", s))?;
    Ok((key.trim().to_string(), value.trim().to_string()))
}

fn parse_key_val(s: &str) -> Result<(String, f64), String> {
    let (key, value) = parse_key_str(s)?;
    let value = value
        .parse::<f64>()
        .map_err(|e| format!("invalid number for {}: {}", key, e))?;
    Ok((key, value))
}
