//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use cloudatlas::catalog::SnapshotError;
use cloudatlas::config::{ConfigFileError, ConfigKeyError};

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration file error
    Config(ConfigFileError),
    /// Configuration key error (unknown key or invalid value)
    ConfigKey(ConfigKeyError),
    /// Failed to load a catalog snapshot
    Snapshot(SnapshotError),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::ConfigKey(ConfigKeyError::UnknownKey(_)) => {
                eprintln!();
                eprintln!("Use 'cloudatlas config list' to see available keys.");
            }
            CliError::Snapshot(_) => {
                eprintln!();
                eprintln!("Snapshots are JSON files written by a CloudAtlas data refresh.");
                eprintln!("Omit --snapshot to use the built-in region tables.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::ConfigKey(e) => write!(f, "{}", e),
            CliError::Snapshot(e) => write!(f, "Failed to load snapshot: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::ConfigKey(e) => Some(e),
            CliError::Snapshot(e) => Some(e),
            CliError::LoggingInit(_) => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<ConfigKeyError> for CliError {
    fn from(e: ConfigKeyError) -> Self {
        CliError::ConfigKey(e)
    }
}

impl From<SnapshotError> for CliError {
    fn from(e: SnapshotError) -> Self {
        CliError::Snapshot(e)
    }
}
