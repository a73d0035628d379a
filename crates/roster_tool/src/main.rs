//! Roster Tool CLI
//!
//! Lists teams from a roster spreadsheet export and prints a team's court
//! for a given rotation.

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use tracing::info;
#[cfg(feature = "cli")]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "roster_tool")]
#[command(about = "Volleyball roster listing and rotation viewer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// List every team and its player ids
    Teams {
        /// Roster spreadsheet exported as CSV
        #[arg(long)]
        csv: PathBuf,
    },

    /// Print a team's court positions for a rotation
    Court {
        /// Roster spreadsheet exported as CSV
        #[arg(long)]
        csv: PathBuf,

        /// Team id as it appears in the `team` column
        #[arg(long)]
        team: String,

        /// Serving slot (1-6)
        #[arg(long, default_value_t = 1)]
        rotation: u8,

        /// YAML config file (serving marker, roles, output format)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Use the compact output preset (ignored with --config)
        #[arg(long, default_value = "false")]
        compact: bool,
    },
}

#[cfg(feature = "cli")]
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Teams { csv } => {
            info!(csv = %csv.display(), "listing teams");
            let (text, stats) = roster_tool::teams_report(&csv)?;
            print!("{text}");
            if stats.failed > 0 {
                eprintln!(
                    "{} of {} rows skipped (see warnings)",
                    stats.failed, stats.total_rows
                );
            }
        }

        Commands::Court {
            csv,
            team,
            rotation,
            config,
            compact,
        } => {
            let rotation = vb_core::RotationIndex::new(rotation).context("Invalid --rotation")?;
            let config = match config {
                Some(path) => roster_tool::ToolConfig::load(&path)?,
                None if compact => roster_tool::ToolConfig::compact(),
                None => roster_tool::ToolConfig::default(),
            };
            info!(team = %team, rotation = rotation.get(), "rendering court");
            let text = roster_tool::court_report(&csv, &team, rotation, &config)?;
            print!("{text}");
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("roster_tool CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
