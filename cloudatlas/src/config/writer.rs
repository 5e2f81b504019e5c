//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use super::settings::ConfigFile;
use crate::color::Color;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let selected = config.display.selected.join(", ");
    let linode = optional_color(&config.colors.linode);
    let digitalocean = optional_color(&config.colors.digitalocean);
    let aliyun = optional_color(&config.colors.aliyun);
    let tencent = optional_color(&config.colors.tencent);
    let directory = config
        .logging
        .directory
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default();

    format!(
        r#"[display]
; Providers enabled at startup (comma-separated ids)
; Known ids: linode, digitalocean, aliyun, tencent
; Only map coloring honors this; the grouped list always shows all providers
selected = {selected}

[colors]
; Per-provider palette overrides as hex colors (e.g. #3498db)
; Leave empty to use the color carried by the catalog
linode = {linode}
digitalocean = {digitalocean}
aliyun = {aliyun}
tencent = {tencent}
; Highlight for countries where linode overlaps another selected provider (default: #e74c3c)
multi_linode = {multi_linode}
; Map fill for countries without any selected provider (default: #4a5568)
no_service = {no_service}
; Color for a selected provider that has no palette entry (default: #4a5568)
fallback = {fallback}

[logging]
; Directory for log files
; If empty, defaults to ~/.cloudatlas
directory = {directory}
; Log file name (default: cloudatlas.log)
file = {file}
"#,
        selected = selected,
        linode = linode,
        digitalocean = digitalocean,
        aliyun = aliyun,
        tencent = tencent,
        multi_linode = config.colors.multi_linode,
        no_service = config.colors.no_service,
        fallback = config.colors.fallback,
        directory = directory,
        file = config.logging.file,
    )
}

fn optional_color(color: &Option<Color>) -> &str {
    color.as_ref().map(Color::as_str).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_string_contains_sections_and_defaults() {
        let content = to_config_string(&ConfigFile::default());

        assert!(content.contains("[display]"));
        assert!(content.contains("[colors]"));
        assert!(content.contains("[logging]"));
        assert!(content.contains("selected = linode, digitalocean, aliyun, tencent"));
        assert!(content.contains("multi_linode = #e74c3c"));
        assert!(content.contains("no_service = #4a5568"));
        assert!(content.contains("file = cloudatlas.log"));
    }

    #[test]
    fn test_overrides_are_written_back() {
        let mut config = ConfigFile::default();
        config.colors.linode = Some(Color::new("#112233"));
        config.display.selected = vec!["tencent".to_string()];

        let content = to_config_string(&config);
        assert!(content.contains("linode = #112233"));
        assert!(content.contains("selected = tencent"));
        // Unset overrides serialize as empty values.
        assert!(content.contains("digitalocean = \n"));
    }
}
