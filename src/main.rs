//! Streamdash CLI
//!
//! Command-line interface for the streaming analytics dashboard:
//! - Render the dashboard as HTML
//! - Dump a JSON snapshot
//! - Watch the live loops in the terminal
//! - Generate a default config file

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use streamdash::config::{generate_default_config, Config, LoggingConfig};
use streamdash::dashboard::{Dashboard, DashboardView};
use streamdash::live::{LiveDashboard, TokioScheduler};
use streamdash::render::{render_document, render_text_frame, write_output};

#[derive(Parser)]
#[command(name = "streamdash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Streaming analytics dashboard with simulated live telemetry")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Seed for reproducible data (overrides config and STREAMDASH_SEED)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the dashboard as a standalone HTML page
    Render {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Dump static data and live panels as JSON
    Snapshot {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run the live loops and print a frame on every clock tick
    Live {
        /// Stop after this many frames
        #[arg(long, conflicts_with = "duration_secs")]
        ticks: Option<u64>,
        /// Stop after this many seconds
        #[arg(long)]
        duration_secs: Option<u64>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::resolve(cli.config.as_deref(), cli.seed)?;

    init_logging(&config.logging);
    tracing::info!("Streamdash v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Render { output } => {
            let view = DashboardView::initial(&config, Utc::now());
            write_output(output.as_deref(), &render_document(&view))?;
        }
        Commands::Snapshot { output } => {
            let view = DashboardView::initial(&config, Utc::now());
            write_output(output.as_deref(), &view.to_json()?)?;
        }
        Commands::Live {
            ticks,
            duration_secs,
        } => {
            run_live(&config, ticks, duration_secs.map(Duration::from_secs)).await?;
        }
        Commands::Config { output } => {
            write_output(output.as_deref(), &generate_default_config())?;
        }
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("streamdash={}", logging.level).into());

    // Logs go to stderr so rendered output on stdout stays clean
    if logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn run_live(
    config: &Config,
    ticks: Option<u64>,
    duration: Option<Duration>,
) -> anyhow::Result<()> {
    let mut scheduler = TokioScheduler::try_current().context("no tokio runtime available")?;
    let dashboard = Dashboard::from_config(config, Utc::now());
    let mut live = LiveDashboard::mount(&mut scheduler, &config.live, config.generator.seed);
    let mut clock = live.clock_updates();
    let deadline = duration.map(|d| tokio::time::Instant::now() + d);

    let mut frames = 0u64;
    loop {
        let view = DashboardView::new(dashboard.clone(), live.snapshot());
        println!("{}", render_text_frame(&view));
        frames += 1;

        if ticks.is_some_and(|limit| frames >= limit) {
            break;
        }

        let next_tick = async {
            match deadline {
                Some(deadline) => tokio::time::timeout_at(deadline, clock.changed())
                    .await
                    .ok(),
                None => Some(clock.changed().await),
            }
        };

        tokio::select! {
            changed = next_tick => match changed {
                Some(Ok(())) => {}
                // Deadline reached or clock loop gone
                _ => break,
            },
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
                break;
            }
        }
    }

    tracing::info!(frames, "Live session finished");
    live.teardown();
    Ok(())
}
