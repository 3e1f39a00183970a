mod commands;
mod render;

use anyhow::Result;
use breakgenda_core::ScheduleIndex;
use breakgenda_core::config::BreakgendaConfig;
use breakgenda_core::dataset::Dataset;
use breakgenda_core::venue::VenueId;
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "breakgenda")]
#[command(about = "Browse the conference schedule by day and venue and build your agenda")]
struct Cli {
    /// Log what the loader and reducers are doing
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show sessions for a day, grouped by venue
    Sessions {
        /// Day to show (YYYY-MM-DD or epoch milliseconds, defaults to the first day)
        #[arg(short, long)]
        day: Option<String>,

        /// Only show these venues (repeatable)
        #[arg(long = "venue", conflicts_with = "hidden")]
        venues: Vec<VenueId>,

        /// Hide these venues (repeatable)
        #[arg(long = "hide-venue")]
        hidden: Vec<VenueId>,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
    /// Build an agenda from session ids and show it
    Agenda {
        /// Session ids in the order you pick them; repeating an id removes it again
        sessions: Vec<u64>,

        /// Print the agenda as iCalendar instead
        #[arg(long)]
        ics: bool,
    },
    /// List venues and how many sessions each hosts
    Venues,
    /// List conference days
    Days,
    /// Interactive schedule browser
    Browse,
    /// Show the config file location and effective settings
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = BreakgendaConfig::load()?;

    match cli.command {
        Commands::Config => commands::config::run(&config),
        Commands::Sessions {
            day,
            venues,
            hidden,
            json,
        } => {
            let (index, tz) = load_schedule(&config)?;
            commands::sessions::run(&index, tz, day.as_deref(), &venues, &hidden, json)
        }
        Commands::Agenda { sessions, ics } => {
            let (index, tz) = load_schedule(&config)?;
            commands::agenda::run(&index, tz, &sessions, ics)
        }
        Commands::Venues => {
            let (index, _) = load_schedule(&config)?;
            commands::venues::run(&index)
        }
        Commands::Days => {
            let (index, tz) = load_schedule(&config)?;
            commands::days::run(&index, tz)
        }
        Commands::Browse => {
            let (index, tz) = load_schedule(&config)?;
            commands::browse::run(&index, tz)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "breakgenda=debug,breakgenda_core=debug"
    } else {
        "breakgenda=warn,breakgenda_core=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load the configured dataset and build the index once for this run.
fn load_schedule(config: &BreakgendaConfig) -> Result<(ScheduleIndex, Tz)> {
    let tz = config.tz()?;
    let data_path = config.data_path();

    if let Some(path) = &data_path {
        if !path.is_dir() {
            anyhow::bail!(
                "Data directory '{}' not found.\n\n\
                Point data_dir in {} at a directory containing\n  \
                speakers.json and sessions.json\n\
                or remove it to use the bundled schedule.",
                path.display(),
                BreakgendaConfig::config_path()?.display()
            );
        }
    }

    let dataset = Dataset::load(data_path.as_deref())?;
    tracing::debug!(source = ?dataset.source, timezone = %tz, "schedule loaded");

    let index = ScheduleIndex::build(&dataset.speakers, &dataset.sessions, tz);

    Ok((index, tz))
}
