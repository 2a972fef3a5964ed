//! Care CLI - command-line interface for care-instruction resolution
//!
//! This CLI lets staff check what a completed order's notification will say:
//! - Group an order's furniture by treatment
//! - Preview the care notification for an order
//! - Try out the furniture phrasing
//! - Inspect the effective configuration

use clap::{Parser, Subcommand};
use std::ffi::OsString;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

use commands::{describe, groups, notify, PipelineArgs};
pub use config::CliConfig;
pub use error::{CliError, CliResult};

/// Care CLI application
#[derive(Parser)]
#[command(name = "care")]
#[command(about = "Care - furniture care-instruction resolution CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "CARE_CONFIG")]
    config: Option<String>,

    /// Output format (table, json, yaml)
    #[arg(short, long, default_value = "table")]
    output: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Group an order's furniture by treatment
    Groups {
        #[command(flatten)]
        args: PipelineArgs,

        /// Include resolution events (skipped lookups, ambiguity, failures)
        #[arg(long)]
        explain: bool,
    },

    /// Preview the care notification for an order
    Notify {
        #[command(flatten)]
        args: PipelineArgs,
    },

    /// Phrase a list of furniture types
    Describe {
        /// Furniture types, in order
        #[arg(required = true)]
        furniture_types: Vec<String>,
    },

    /// Show configuration
    Config,
}

/// Run using the current process arguments.
pub async fn run() -> CliResult<()> {
    run_with_args(std::env::args_os()).await
}

/// Run using the provided argument iterator.
pub async fn run_with_args<I, T>(args: I) -> CliResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .init();

    // Load config
    let config = CliConfig::load(cli.config.as_deref())?;

    // Execute command
    match cli.command {
        Commands::Groups { args, explain } => {
            groups::execute(&args, &config, explain, cli.output).await
        }
        Commands::Notify { args } => notify::execute(&args, &config, cli.output).await,
        Commands::Describe { furniture_types } => describe::execute(&furniture_types, cli.output),
        Commands::Config => {
            if !output::print_structured(&config, cli.output)? {
                print!("{}", config.to_toml()?);
            }
            Ok(())
        }
    }
}
