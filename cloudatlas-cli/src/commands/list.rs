//! Grouped region list command.
//!
//! Prints one block per provider in the fixed display order, each split
//! into geographic sections with their localized labels.

use std::path::Path;

use cloudatlas::pipeline::build_list_view;
use tracing::info;

use crate::error::CliError;
use crate::runner::CliRunner;

use super::empty_state;

/// Run the list command.
pub fn run(runner: &CliRunner, snapshot: Option<&Path>) -> Result<(), CliError> {
    runner.log_startup("list");

    let catalog = runner.load_catalog(snapshot)?;

    let view = match build_list_view(&catalog) {
        Ok(view) => view,
        Err(e) => {
            println!("{}", empty_state(e));
            return Ok(());
        }
    };

    info!(columns = view.columns.len(), "Rendering region list");

    for column in &view.columns {
        println!(
            "{} ({} regions)",
            column.provider.display_name, column.region_count
        );

        if column.sections.is_empty() {
            println!("  (no regions)");
            println!();
            continue;
        }

        for section in &column.sections {
            println!("  {}", section.label);
            for region in &section.regions {
                println!(
                    "    {:<18} {} [{}]",
                    region.region_id, region.region_name, region.country_code
                );
            }
        }
        println!();
    }

    Ok(())
}
