//! Country color table command.
//!
//! Resolves one display color per country for the current selection and
//! prints the table the map renderer would consume.

use std::path::Path;

use clap::ValueEnum;
use cloudatlas::color::ResolverDefaults;
use cloudatlas::pipeline::build_country_colors;
use cloudatlas::selection::Selection;
use tracing::info;

use crate::error::CliError;
use crate::runner::CliRunner;

use super::empty_state;

/// Which theme's default colors to resolve with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    /// Map shape fill colors
    Map,
    /// List swatch colors
    List,
}

/// Run the colors command.
pub fn run(
    runner: &CliRunner,
    snapshot: Option<&Path>,
    selection: &Selection,
    theme: Theme,
) -> Result<(), CliError> {
    runner.log_startup("colors");

    let catalog = runner.load_catalog(snapshot)?;
    let defaults = match theme {
        Theme::Map => runner.map_defaults(),
        Theme::List => ResolverDefaults {
            multi_linode: runner.config().colors.multi_linode.clone(),
            ..ResolverDefaults::list_theme()
        },
    };

    let map = match build_country_colors(&catalog, selection, &defaults) {
        Ok(map) => map,
        Err(e) => {
            println!("{}", empty_state(e));
            return Ok(());
        }
    };

    info!(countries = map.len(), "Resolved country colors");

    println!("Selection: {}", selection.ids().join(", "));
    println!();

    // Stable output: country code order
    let mut entries: Vec<(&str, &str)> = map
        .entries()
        .map(|(country, color)| (country, color.as_str()))
        .collect();
    entries.sort_unstable();

    for (country, color) in entries {
        println!("  {}  {}", country, color);
    }
    println!();
    println!("  (no service)  {}", map.no_service());

    Ok(())
}
