//! Default values and constants for all configuration settings.
//!
//! Contains the `DEFAULT_*` constants and the `ConfigFile::default()`
//! implementation.

use super::settings::*;
use crate::catalog::PROVIDER_DISPLAY_ORDER;
use crate::color::{Color, MAP_NO_SERVICE_COLOR, MULTI_LINODE_COLOR};

/// Default log file name.
pub const DEFAULT_LOG_FILE: &str = "cloudatlas.log";

/// Default startup selection: every known provider, in display order.
pub fn default_selected() -> Vec<String> {
    PROVIDER_DISPLAY_ORDER.iter().map(|id| id.to_string()).collect()
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            display: DisplaySettings::default(),
            colors: ColorSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            selected: default_selected(),
        }
    }
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            linode: None,
            digitalocean: None,
            aliyun: None,
            tencent: None,
            multi_linode: Color::new(MULTI_LINODE_COLOR),
            no_service: Color::new(MAP_NO_SERVICE_COLOR),
            fallback: Color::new(MAP_NO_SERVICE_COLOR),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            directory: None,
            file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}
