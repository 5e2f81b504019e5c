//! Aggregate statistics command.

use std::path::Path;

use cloudatlas::catalog::Statistics;
use cloudatlas::geo::group_name;
use cloudatlas::pipeline::PipelineError;
use tracing::info;

use crate::error::CliError;
use crate::runner::CliRunner;

use super::empty_state;

/// Run the stats command.
pub fn run(runner: &CliRunner, snapshot: Option<&Path>) -> Result<(), CliError> {
    runner.log_startup("stats");

    let catalog = runner.load_catalog(snapshot)?;

    // Same no-data sentinel the view commands show, regions first
    if catalog.regions.is_empty() {
        println!("{}", empty_state(PipelineError::NoRegions));
        return Ok(());
    }
    if catalog.providers.is_empty() {
        println!("{}", empty_state(PipelineError::NoProviders));
        return Ok(());
    }

    let stats = Statistics::collect(&catalog);
    info!(
        regions = stats.total_regions,
        countries = stats.total_countries,
        "Collected statistics"
    );

    println!("Catalog statistics");
    println!("  Regions:   {}", stats.total_regions);
    println!("  Countries: {}", stats.total_countries);
    println!("  Providers: {}", stats.total_providers);
    println!();

    println!("Regions by provider");
    for row in &stats.regions_by_provider {
        println!("  {:<14} {}", row.key, row.count);
    }
    println!();

    println!("Regions by group");
    for row in &stats.regions_by_group {
        println!("  {:<14} {:>3}  {}", row.key, row.count, group_name(&row.key));
    }

    Ok(())
}
