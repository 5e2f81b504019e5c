//! CLI runner for common setup and operations.
//!
//! Encapsulates logging initialization, configuration loading, and catalog
//! access to reduce duplication across command handlers.

use std::path::Path;

use tracing::info;

use cloudatlas::catalog::{builtin_catalog, Catalog};
use cloudatlas::color::ResolverDefaults;
use cloudatlas::config::ConfigFile;
use cloudatlas::logging::{init_logging_full, init_terminal_logging, LoggingGuard};
use cloudatlas::selection::Selection;

use crate::error::CliError;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps file logging active while the runner exists
    #[allow(dead_code)]
    logging_guard: Option<LoggingGuard>,
    /// Loaded configuration file
    config: ConfigFile,
}

impl CliRunner {
    /// Create a new CLI runner, loading config and initializing logging.
    ///
    /// With `file_logging` the log output goes to the configured log file
    /// and the terminal mirror follows `verbosity`; without it, logs go
    /// to stderr only so piped table output stays clean.
    ///
    /// # Arguments
    ///
    /// * `file_logging` - Write logs to the configured log file
    /// * `verbosity` - Occurrences of `-v` (0 = warn, 1 = info, 2+ = debug)
    pub fn new(file_logging: bool, verbosity: u8) -> Result<Self, CliError> {
        let config = ConfigFile::load()?;

        let logging_guard = if file_logging {
            let log_dir = config.log_directory();
            let guard = init_logging_full(
                &log_dir,
                &config.logging.file,
                verbosity > 0,
                verbosity >= 2,
            )
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;
            Some(guard)
        } else {
            init_terminal_logging(verbosity);
            None
        };

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("CloudAtlas v{}", cloudatlas::VERSION);
        info!("CloudAtlas CLI: {} command", command);
    }

    /// Load the catalog from a snapshot file, or fall back to the
    /// built-in region tables.
    ///
    /// Configured palette overrides are applied to the provider records,
    /// so every downstream view sees the effective colors.
    pub fn load_catalog(&self, snapshot: Option<&Path>) -> Result<Catalog, CliError> {
        let mut catalog = match snapshot {
            Some(path) => {
                info!(path = %path.display(), "Loading catalog snapshot");
                Catalog::load_from(path)?
            }
            None => builtin_catalog(),
        };

        let overrides = self.config.colors.palette_overrides();
        for provider in &mut catalog.providers {
            if let Some(color) = overrides.color_of(&provider.name) {
                provider.color = color.clone();
            }
        }

        Ok(catalog)
    }

    /// Compose the effective selection for this invocation.
    ///
    /// Starts from `--select` when given, otherwise the configured
    /// startup selection, then applies `--toggle` flags in order.
    pub fn selection(&self, select: Option<&str>, toggles: &[String]) -> Selection {
        let mut selection = match select {
            Some(ids) => {
                Selection::from_ids(ids.split(',').map(str::trim).filter(|id| !id.is_empty()))
            }
            None => Selection::from_ids(self.config.display.selected.iter().cloned()),
        };
        for id in toggles {
            let enabled = selection.toggle(id);
            info!(provider = %id, enabled, "Applied selection toggle");
        }
        selection
    }

    /// Map-theme resolver defaults with configured colors applied.
    pub fn map_defaults(&self) -> ResolverDefaults {
        self.config.colors.map_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudatlas::color::Color;

    fn runner_with(config: ConfigFile) -> CliRunner {
        CliRunner {
            logging_guard: None,
            config,
        }
    }

    #[test]
    fn test_selection_defaults_to_config() {
        let runner = runner_with(ConfigFile::default());
        let selection = runner.selection(None, &[]);
        assert_eq!(
            selection.ids(),
            ["linode", "digitalocean", "aliyun", "tencent"]
        );
    }

    #[test]
    fn test_select_flag_overrides_config() {
        let runner = runner_with(ConfigFile::default());
        let selection = runner.selection(Some("tencent, aliyun"), &[]);
        assert_eq!(selection.ids(), ["tencent", "aliyun"]);
    }

    #[test]
    fn test_toggles_apply_in_order() {
        let runner = runner_with(ConfigFile::default());
        let toggles = vec!["linode".to_string(), "linode".to_string()];
        let selection = runner.selection(Some("linode,tencent"), &toggles);
        // Off then back on appends at the end
        assert_eq!(selection.ids(), ["tencent", "linode"]);
    }

    #[test]
    fn test_load_catalog_applies_color_overrides() {
        let mut config = ConfigFile::default();
        config.colors.linode = Some(Color::new("#111111"));
        let runner = runner_with(config);

        let catalog = runner.load_catalog(None).unwrap();
        let linode = catalog.provider("linode").unwrap();
        assert_eq!(&linode.color, "#111111");
        assert_eq!(
            catalog.palette().color_of("linode").unwrap(),
            "#111111"
        );
        // Providers without an override keep their catalog color
        assert_eq!(catalog.provider("tencent").unwrap().color, "#2ecc71");
    }
}
