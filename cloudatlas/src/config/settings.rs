//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

use crate::color::{Color, Palette, ResolverDefaults};

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    /// Display settings
    pub display: DisplaySettings,
    /// Color settings
    pub colors: ColorSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Display configuration.
#[derive(Debug, Clone)]
pub struct DisplaySettings {
    /// Provider ids enabled at startup, in order.
    pub selected: Vec<String>,
}

/// Color configuration.
///
/// Per-provider entries override the palette carried by the catalog;
/// the remaining fields feed the map theme's [`ResolverDefaults`].
#[derive(Debug, Clone)]
pub struct ColorSettings {
    /// Palette override for linode (None = catalog color)
    pub linode: Option<Color>,
    /// Palette override for digitalocean (None = catalog color)
    pub digitalocean: Option<Color>,
    /// Palette override for aliyun (None = catalog color)
    pub aliyun: Option<Color>,
    /// Palette override for tencent (None = catalog color)
    pub tencent: Option<Color>,
    /// Highlight for multi-provider overlap including linode
    pub multi_linode: Color,
    /// Map fill for countries with no selected provider
    pub no_service: Color,
    /// Color for an active provider with no palette entry
    pub fallback: Color,
}

impl ColorSettings {
    /// The configured palette overrides, ready to merge over a
    /// catalog-derived palette.
    pub fn palette_overrides(&self) -> Palette {
        let mut palette = Palette::new();
        let entries = [
            ("linode", &self.linode),
            ("digitalocean", &self.digitalocean),
            ("aliyun", &self.aliyun),
            ("tencent", &self.tencent),
        ];
        for (provider, color) in entries {
            if let Some(color) = color {
                palette.set(provider, color.clone());
            }
        }
        palette
    }

    /// Map-theme resolver defaults with the configured colors applied.
    pub fn map_defaults(&self) -> ResolverDefaults {
        ResolverDefaults {
            no_service: self.no_service.clone(),
            multi_linode: self.multi_linode.clone(),
            fallback: self.fallback.clone(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingSettings {
    /// Directory for log files (None = config directory)
    pub directory: Option<PathBuf>,
    /// Log file name
    pub file: String,
}
