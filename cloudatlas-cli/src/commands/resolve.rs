//! Topology id resolution command.
//!
//! Maps decimal numeric ISO 3166-1 ids, as used by map topology
//! datasets, to the alpha-2 codes the region data carries. Unknown ids
//! pass through unchanged, exactly as the map renderer sees them.

use cloudatlas::country;

use crate::error::CliError;
use crate::runner::CliRunner;

/// Run the resolve command.
pub fn run(runner: &CliRunner, ids: &[String]) -> Result<(), CliError> {
    runner.log_startup("resolve");

    for id in ids {
        let resolved = country::resolve(id);
        if resolved == id.as_str() {
            println!("  {}  (no mapping, passed through)", id);
        } else {
            println!("  {}  {}", id, resolved);
        }
    }

    Ok(())
}
