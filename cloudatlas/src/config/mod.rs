//! User configuration
//!
//! INI-backed configuration under `~/.cloudatlas/config.ini`: startup
//! provider selection, palette and resolver color overrides, and the
//! logging destination. Settings structs live in [`settings`], defaults
//! in [`defaults`], parsing in [`parser`], serialization in [`writer`],
//! file I/O in [`file`], and keyed get/set access in [`keys`].

mod defaults;
mod file;
mod keys;
mod parser;
mod settings;
mod writer;

pub use defaults::{default_selected, DEFAULT_LOG_FILE};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use keys::{ConfigKey, ConfigKeyError};
pub use settings::{ColorSettings, ConfigFile, DisplaySettings, LoggingSettings};
