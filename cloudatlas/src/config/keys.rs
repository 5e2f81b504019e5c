//! Configuration key access and validation.
//!
//! This module provides a type-safe interface for getting and setting
//! configuration values by key name, with validation via the Specification
//! Pattern.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use super::parser::expand_tilde;
use super::settings::ConfigFile;
use crate::color::Color;

/// Errors that can occur when getting or setting configuration values.
#[derive(Debug, Error)]
pub enum ConfigKeyError {
    /// Unknown configuration key.
    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),

    /// Validation failed for the value.
    #[error("Invalid value for {key}: {reason}")]
    ValidationFailed { key: String, reason: String },
}

/// Supported configuration keys.
///
/// Each key maps to a specific field in [`ConfigFile`] and knows how to
/// get and set its value with proper validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    // Display settings
    DisplaySelected,

    // Color settings
    ColorsLinode,
    ColorsDigitalocean,
    ColorsAliyun,
    ColorsTencent,
    ColorsMultiLinode,
    ColorsNoService,
    ColorsFallback,

    // Logging settings
    LoggingDirectory,
    LoggingFile,
}

impl FromStr for ConfigKey {
    type Err = ConfigKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "display.selected" => Ok(ConfigKey::DisplaySelected),

            "colors.linode" => Ok(ConfigKey::ColorsLinode),
            "colors.digitalocean" => Ok(ConfigKey::ColorsDigitalocean),
            "colors.aliyun" => Ok(ConfigKey::ColorsAliyun),
            "colors.tencent" => Ok(ConfigKey::ColorsTencent),
            "colors.multi_linode" => Ok(ConfigKey::ColorsMultiLinode),
            "colors.no_service" => Ok(ConfigKey::ColorsNoService),
            "colors.fallback" => Ok(ConfigKey::ColorsFallback),

            "logging.directory" => Ok(ConfigKey::LoggingDirectory),
            "logging.file" => Ok(ConfigKey::LoggingFile),

            _ => Err(ConfigKeyError::UnknownKey(s.to_string())),
        }
    }
}

impl ConfigKey {
    /// Get the canonical key name (e.g., "colors.multi_linode").
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::DisplaySelected => "display.selected",
            ConfigKey::ColorsLinode => "colors.linode",
            ConfigKey::ColorsDigitalocean => "colors.digitalocean",
            ConfigKey::ColorsAliyun => "colors.aliyun",
            ConfigKey::ColorsTencent => "colors.tencent",
            ConfigKey::ColorsMultiLinode => "colors.multi_linode",
            ConfigKey::ColorsNoService => "colors.no_service",
            ConfigKey::ColorsFallback => "colors.fallback",
            ConfigKey::LoggingDirectory => "logging.directory",
            ConfigKey::LoggingFile => "logging.file",
        }
    }

    /// Get the section name (e.g., "colors").
    pub fn section(&self) -> &'static str {
        self.name().split('.').next().unwrap_or("")
    }

    /// Get the key name within the section (e.g., "multi_linode").
    pub fn key_name(&self) -> &'static str {
        self.name().split('.').nth(1).unwrap_or(self.name())
    }

    /// Get the value from a config file as a string.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::DisplaySelected => config.display.selected.join(", "),
            ConfigKey::ColorsLinode => optional_color_display(&config.colors.linode),
            ConfigKey::ColorsDigitalocean => optional_color_display(&config.colors.digitalocean),
            ConfigKey::ColorsAliyun => optional_color_display(&config.colors.aliyun),
            ConfigKey::ColorsTencent => optional_color_display(&config.colors.tencent),
            ConfigKey::ColorsMultiLinode => config.colors.multi_linode.to_string(),
            ConfigKey::ColorsNoService => config.colors.no_service.to_string(),
            ConfigKey::ColorsFallback => config.colors.fallback.to_string(),
            ConfigKey::LoggingDirectory => config
                .logging
                .directory
                .as_ref()
                .map(|p| path_to_display(p))
                .unwrap_or_default(),
            ConfigKey::LoggingFile => config.logging.file.clone(),
        }
    }

    /// Set the value in a config file.
    ///
    /// Validates the value according to the key's specification before
    /// setting.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigKeyError> {
        self.validate(value)?;
        self.set_unchecked(config, value);
        Ok(())
    }

    /// Set the value without validation. Use `set()` for validated setting.
    fn set_unchecked(&self, config: &mut ConfigFile, value: &str) {
        match self {
            ConfigKey::DisplaySelected => {
                config.display.selected = provider_list(value);
            }
            ConfigKey::ColorsLinode => {
                config.colors.linode = optional_color(value);
            }
            ConfigKey::ColorsDigitalocean => {
                config.colors.digitalocean = optional_color(value);
            }
            ConfigKey::ColorsAliyun => {
                config.colors.aliyun = optional_color(value);
            }
            ConfigKey::ColorsTencent => {
                config.colors.tencent = optional_color(value);
            }
            ConfigKey::ColorsMultiLinode => {
                // Validation ensures this won't panic
                config.colors.multi_linode = Color::parse_hex(value).unwrap();
            }
            ConfigKey::ColorsNoService => {
                config.colors.no_service = Color::parse_hex(value).unwrap();
            }
            ConfigKey::ColorsFallback => {
                config.colors.fallback = Color::parse_hex(value).unwrap();
            }
            ConfigKey::LoggingDirectory => {
                config.logging.directory = optional_dir(value);
            }
            ConfigKey::LoggingFile => {
                config.logging.file = value.trim().to_string();
            }
        }
    }

    /// Validate a value according to this key's specification.
    pub fn validate(&self, value: &str) -> Result<(), ConfigKeyError> {
        self.specification()
            .is_satisfied_by(value)
            .map_err(|reason| ConfigKeyError::ValidationFailed {
                key: self.name().to_string(),
                reason,
            })
    }

    /// Get the validation specification for this key.
    fn specification(&self) -> Box<dyn ValueSpecification> {
        match self {
            ConfigKey::DisplaySelected => Box::new(ProviderListSpec),
            ConfigKey::ColorsLinode => Box::new(OptionalColorSpec),
            ConfigKey::ColorsDigitalocean => Box::new(OptionalColorSpec),
            ConfigKey::ColorsAliyun => Box::new(OptionalColorSpec),
            ConfigKey::ColorsTencent => Box::new(OptionalColorSpec),
            ConfigKey::ColorsMultiLinode => Box::new(ColorSpec),
            ConfigKey::ColorsNoService => Box::new(ColorSpec),
            ConfigKey::ColorsFallback => Box::new(ColorSpec),
            ConfigKey::LoggingDirectory => Box::new(OptionalPathSpec),
            ConfigKey::LoggingFile => Box::new(FileNameSpec),
        }
    }

    /// Get all supported configuration keys.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::DisplaySelected,
            ConfigKey::ColorsLinode,
            ConfigKey::ColorsDigitalocean,
            ConfigKey::ColorsAliyun,
            ConfigKey::ColorsTencent,
            ConfigKey::ColorsMultiLinode,
            ConfigKey::ColorsNoService,
            ConfigKey::ColorsFallback,
            ConfigKey::LoggingDirectory,
            ConfigKey::LoggingFile,
        ]
    }
}

// ============================================================================
// Value Specifications (Specification Pattern)
// ============================================================================

/// Trait for value validation specifications.
trait ValueSpecification {
    /// Check if the value satisfies this specification.
    /// Returns Ok(()) if valid, Err(reason) if invalid.
    fn is_satisfied_by(&self, value: &str) -> Result<(), String>;
}

/// Specification for required hex colors.
struct ColorSpec;

impl ValueSpecification for ColorSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        Color::parse_hex(value)
            .map(|_| ())
            .ok_or_else(|| "must be a hex color like '#3498db'".to_string())
    }
}

/// Specification for optional hex colors (empty clears the override).
struct OptionalColorSpec;

impl ValueSpecification for OptionalColorSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            return Ok(());
        }
        ColorSpec.is_satisfied_by(value)
    }
}

/// Specification for the selected-provider list.
struct ProviderListSpec;

impl ValueSpecification for ProviderListSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        if provider_list(value).is_empty() {
            Err("must be a comma-separated list of provider ids".to_string())
        } else {
            Ok(())
        }
    }
}

/// Specification for optional path values (empty allowed).
struct OptionalPathSpec;

impl ValueSpecification for OptionalPathSpec {
    fn is_satisfied_by(&self, _value: &str) -> Result<(), String> {
        // Empty is allowed for optional paths
        Ok(())
    }
}

/// Specification for bare file names.
struct FileNameSpec;

impl ValueSpecification for FileNameSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.contains('/') {
            Err("must be a file name without directory separators".to_string())
        } else {
            Ok(())
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Convert path to display string, collapsing home dir to ~.
fn path_to_display(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

/// Split a comma-separated provider list, dropping empty entries.
fn provider_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

/// Convert empty string to None, non-empty to a parsed color.
fn optional_color(value: &str) -> Option<Color> {
    if value.trim().is_empty() {
        None
    } else {
        // Validation ensures this won't panic
        Some(Color::parse_hex(value).unwrap())
    }
}

/// Convert empty string to None, non-empty to Some path with tilde expansion.
fn optional_dir(value: &str) -> Option<PathBuf> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(expand_tilde(trimmed))
    }
}

/// Display an optional color override, empty when unset.
fn optional_color_display(color: &Option<Color>) -> String {
    color.as_ref().map(Color::to_string).unwrap_or_default()
}
