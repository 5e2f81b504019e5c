//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This module contains the `parse_ini()` function and its helpers.
//! It is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::ConfigFile;
use crate::color::Color;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in
/// the INI. Empty values leave the default in place.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [display] section
    if let Some(section) = ini.section(Some("display")) {
        if let Some(v) = section.get("selected") {
            let v = v.trim();
            if !v.is_empty() {
                config.display.selected = parse_id_list(v);
            }
        }
    }

    // [colors] section
    if let Some(section) = ini.section(Some("colors")) {
        if let Some(v) = section.get("linode") {
            config.colors.linode = parse_optional_color("linode", v)?;
        }
        if let Some(v) = section.get("digitalocean") {
            config.colors.digitalocean = parse_optional_color("digitalocean", v)?;
        }
        if let Some(v) = section.get("aliyun") {
            config.colors.aliyun = parse_optional_color("aliyun", v)?;
        }
        if let Some(v) = section.get("tencent") {
            config.colors.tencent = parse_optional_color("tencent", v)?;
        }
        if let Some(v) = section.get("multi_linode") {
            if let Some(color) = parse_optional_color("multi_linode", v)? {
                config.colors.multi_linode = color;
            }
        }
        if let Some(v) = section.get("no_service") {
            if let Some(color) = parse_optional_color("no_service", v)? {
                config.colors.no_service = color;
            }
        }
        if let Some(v) = section.get("fallback") {
            if let Some(color) = parse_optional_color("fallback", v)? {
                config.colors.fallback = color;
            }
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.directory = Some(expand_tilde(v));
            }
        }
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = v.to_string();
            }
        }
    }

    Ok(config)
}

/// Splits a comma-separated id list, trimming whitespace and dropping
/// empty segments.
fn parse_id_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses one color value. Empty means "not set".
fn parse_optional_color(key: &str, value: &str) -> Result<Option<Color>, ConfigFileError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    Color::parse_hex(value)
        .map(Some)
        .ok_or_else(|| ConfigFileError::InvalidValue {
            section: "colors".to_string(),
            key: key.to_string(),
            value: value.to_string(),
            reason: "must be a hex color like '#3498db'".to_string(),
        })
}

/// Expand `~` prefix to the user's home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
