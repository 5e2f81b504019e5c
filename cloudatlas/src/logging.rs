//! Logging infrastructure for cloudatlas.
//!
//! Provides structured logging with file output and console output:
//! - Writes to `<log_dir>/cloudatlas.log` (cleared on session start)
//! - Optionally mirrors to stderr so piped command output stays clean
//! - Multi-line pretty format for the file, compact for the terminal
//! - Configurable via RUST_LOG environment variable

use std::fs;
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard will flush and close the log file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize logging with file output plus a terminal mirror.
///
/// Creates the log directory if needed and clears the previous log
/// file.
///
/// # Arguments
///
/// * `log_dir` - Directory for log files (e.g., `~/.cloudatlas`)
/// * `log_file` - Log filename (e.g., `cloudatlas.log`)
///
/// # Returns
///
/// LoggingGuard that must be kept alive for logging to work
///
/// # Errors
///
/// Returns error if the log directory cannot be created or the log file
/// cannot be cleared
pub fn init_logging(log_dir: &Path, log_file: &str) -> Result<LoggingGuard, io::Error> {
    init_logging_full(log_dir, log_file, true, false)
}

/// Initialize logging with explicit terminal and debug control.
///
/// # Arguments
///
/// * `log_dir` - Directory for log files
/// * `log_file` - Log filename
/// * `terminal_enabled` - Also mirror log lines to stderr
/// * `debug_mode` - Default the filter to `debug` instead of `info`
///   (RUST_LOG still wins when set)
pub fn init_logging_full(
    log_dir: &Path,
    log_file: &str,
    terminal_enabled: bool,
    debug_mode: bool,
) -> Result<LoggingGuard, io::Error> {
    // Create the log directory if it doesn't exist
    fs::create_dir_all(log_dir)?;

    // Clear previous log file by writing empty content
    // This handles both existing and non-existing files
    let log_path = log_dir.join(log_file);
    fs::write(&log_path, "")?;

    // Create file appender with non-blocking writer
    let file_appender = tracing_appender::rolling::never(log_dir, log_file);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    // Create file layer with pretty multi-line format
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false) // No ANSI colors in file
        .with_span_events(FmtSpan::CLOSE)
        .pretty();

    // Terminal layer goes to stderr; stdout carries command output
    let terminal_layer = terminal_enabled.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_ansi(true)
            .compact()
    });

    let default_directive = if debug_mode { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(terminal_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Initialize terminal-only logging for one-shot commands.
///
/// No file is written and no guard is needed. The verbosity count maps
/// to the default filter: 0 → `warn`, 1 → `info`, 2 → `debug`,
/// 3+ → `trace`. RUST_LOG still wins when set.
pub fn init_terminal_logging(verbosity: u8) {
    let default_directive = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}
