use anyhow::{Context, Result};
use clap::Parser;
use growthmap::cli::{Cli, Commands, GlobalArgs};
use growthmap::config::defaults::SPOTIFY_LISTENERS;
use growthmap::config::{load_config, load_config_from, GrowthmapConfig};
use growthmap::errors::MetricsError;
use growthmap::formatting::FormattingConfig;
use growthmap::session::{Section, SessionState};
use growthmap::tracker::TaskStatus;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.global.verbosity);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let cause = metrics_error(&err);
            if cause.is_some_and(MetricsError::is_user_fixable) {
                eprintln!("Check the command arguments or the config file and try again.");
            }
            ExitCode::from(cause.map_or(1, MetricsError::exit_code))
        }
    }
}

// Pure function to find the library error behind any added context
fn metrics_error(err: &anyhow::Error) -> Option<&MetricsError> {
    err.chain().find_map(|cause| cause.downcast_ref::<MetricsError>())
}

// Main orchestrator function
fn run(cli: Cli) -> Result<()> {
    if let Commands::Init { force } = cli.command {
        return growthmap::commands::init::init_config(force);
    }

    let session = build_session(cli.command)?;
    let config = resolve_config(&cli.global)?;
    let report = growthmap::commands::recompute(&config, &session)
        .with_context(|| format!("Failed to compute {:?} section", session.section))?;

    let rendered = growthmap::output::render(
        &report,
        cli.global.format,
        create_formatting_config(cli.global.plain),
    )?;
    println!("{rendered}");
    Ok(())
}

// Side effect function for logger setup (I/O at edges)
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn resolve_config(global: &GlobalArgs) -> Result<GrowthmapConfig> {
    match &global.config {
        Some(path) => load_config_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(load_config()),
    }
}

// Pure function to create formatting configuration
fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}

// Pure function to translate a subcommand into explicit session state
fn build_session(command: Commands) -> Result<SessionState> {
    let session = match command {
        Commands::Summary => SessionState::new(Section::Summary),
        Commands::Funnel => SessionState::new(Section::Funnel),
        Commands::Kpis {
            current_listeners,
            overrides,
        } => {
            let session = with_overrides(SessionState::new(Section::Kpis), overrides)?;
            match current_listeners {
                Some(n) => session.with_override(SPOTIFY_LISTENERS, f64::from(n))?,
                None => session,
            }
        }
        Commands::Scenarios { overrides } => {
            with_overrides(SessionState::new(Section::Scenarios), overrides)?
        }
        Commands::Assess { listeners } => {
            let session = SessionState::new(Section::Assessment);
            match listeners {
                Some(n) => session.with_override(SPOTIFY_LISTENERS, f64::from(n))?,
                None => session,
            }
        }
        Commands::Tasks {
            statuses,
            issue_progress,
        } => {
            let mut session =
                SessionState::new(Section::Tasks).with_issue_progress(&issue_progress)?;
            for (task, status) in statuses {
                let status: TaskStatus = status.parse().map_err(anyhow::Error::msg)?;
                session = session.with_task_status(task, status);
            }
            session
        }
        Commands::Init { .. } => anyhow::bail!("init does not compute a report"),
    };
    Ok(session)
}

fn with_overrides(session: SessionState, overrides: Vec<(String, f64)>) -> Result<SessionState> {
    overrides
        .into_iter()
        .try_fold(session, |session, (name, value)| {
            session.with_override(name, value).map_err(anyhow::Error::from)
        })
}
