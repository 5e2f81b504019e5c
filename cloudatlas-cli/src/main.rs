//! CloudAtlas CLI - Command-line interface
//!
//! This binary provides a command-line interface to the CloudAtlas library:
//! the grouped region list, resolved country colors, catalog statistics,
//! and configuration management.

mod commands;
mod error;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::colors::Theme;
use commands::config::ConfigCommands;
use error::CliError;
use runner::CliRunner;

#[derive(Parser)]
#[command(name = "cloudatlas")]
#[command(version = cloudatlas::VERSION)]
#[command(about = "Group cloud provider regions and resolve display colors", long_about = None)]
struct Cli {
    /// Load the catalog from a JSON snapshot instead of the built-in tables
    #[arg(long, global = true, value_name = "FILE")]
    snapshot: Option<PathBuf>,

    /// Comma-separated provider selection, replacing the configured one
    #[arg(long, global = true, value_name = "IDS")]
    select: Option<String>,

    /// Toggle one provider in the selection (repeatable, applied in order)
    #[arg(long, global = true, value_name = "ID")]
    toggle: Vec<String>,

    /// Write logs to the configured log file
    #[arg(long, global = true)]
    log: bool,

    /// Increase stderr log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the grouped region list for every provider
    List,

    /// Show the resolved per-country colors for the current selection
    Colors {
        /// Which theme's default colors to use
        #[arg(long, value_enum, default_value = "map")]
        theme: Theme,
    },

    /// Show aggregate catalog statistics
    Stats,

    /// Show the provider catalog with palette colors
    Providers,

    /// Resolve numeric topology ids to alpha-2 country codes
    Resolve {
        /// Decimal numeric ISO 3166-1 ids (e.g. 840)
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = dispatch(cli) {
        e.exit();
    }
}

fn dispatch(cli: Cli) -> Result<(), CliError> {
    let snapshot = cli.snapshot.as_deref();

    match cli.command {
        // Config management works without logging setup, so a broken
        // config file can still be inspected and repaired.
        Commands::Config { command } => commands::config::run(command),

        Commands::List => {
            let runner = CliRunner::new(cli.log, cli.verbose)?;
            commands::list::run(&runner, snapshot)
        }
        Commands::Colors { theme } => {
            let runner = CliRunner::new(cli.log, cli.verbose)?;
            let selection = runner.selection(cli.select.as_deref(), &cli.toggle);
            commands::colors::run(&runner, snapshot, &selection, theme)
        }
        Commands::Stats => {
            let runner = CliRunner::new(cli.log, cli.verbose)?;
            commands::stats::run(&runner, snapshot)
        }
        Commands::Providers => {
            let runner = CliRunner::new(cli.log, cli.verbose)?;
            commands::providers::run(&runner, snapshot)
        }
        Commands::Resolve { ids } => {
            let runner = CliRunner::new(cli.log, cli.verbose)?;
            commands::resolve::run(&runner, &ids)
        }
    }
}
