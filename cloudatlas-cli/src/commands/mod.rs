//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`colors`] - Per-country map colors for the current selection
//! - [`config`] - Configuration management (get, set, list, path)
//! - [`list`] - Grouped region list per provider
//! - [`providers`] - Provider catalog with palette colors
//! - [`resolve`] - Numeric topology id lookups
//! - [`stats`] - Aggregate catalog statistics

pub mod colors;
pub mod config;
pub mod list;
pub mod providers;
pub mod resolve;
pub mod stats;

use cloudatlas::pipeline::PipelineError;

/// Localized empty-state line for a degraded view, matching the web
/// front end's placeholders.
pub fn empty_state(error: PipelineError) -> &'static str {
    match error {
        PipelineError::NoRegions => "暂无区域数据",
        PipelineError::NoProviders => "暂无云服务商数据",
    }
}
