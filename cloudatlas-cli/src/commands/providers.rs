//! Provider catalog command.
//!
//! Prints the known providers with their effective palette colors and
//! the fallback country used for unmapped region ids.

use std::path::Path;

use cloudatlas::catalog::fallback_country;
use cloudatlas::pipeline::PipelineError;
use tracing::info;

use crate::error::CliError;
use crate::runner::CliRunner;

use super::empty_state;

/// Run the providers command.
pub fn run(runner: &CliRunner, snapshot: Option<&Path>) -> Result<(), CliError> {
    runner.log_startup("providers");

    let catalog = runner.load_catalog(snapshot)?;

    if catalog.providers.is_empty() {
        println!("{}", empty_state(PipelineError::NoProviders));
        return Ok(());
    }

    info!(providers = catalog.providers.len(), "Listing providers");

    for provider in &catalog.providers {
        println!(
            "  {:<14} {:<14} {}   {:>3} regions   fallback {}",
            provider.name,
            provider.display_name,
            provider.color,
            catalog.regions_of(&provider.name).len(),
            fallback_country(&provider.name),
        );
    }

    Ok(())
}
