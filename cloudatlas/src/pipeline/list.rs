//! Grouped list view construction.
//!
//! One column per known provider in the fixed display order, each
//! column split into geographic group sections in canonical order.
//! The list always shows every provider's regions; the selection only
//! affects map coloring, never this view.

use tracing::debug;

use super::error::{ensure_loaded, PipelineError};
use crate::catalog::{Catalog, Provider, Region, PROVIDER_DISPLAY_ORDER};
use crate::geo::{self, GeographicGroup};
use std::collections::HashMap;

/// The grouped list view: provider columns in fixed display order.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    pub columns: Vec<ProviderColumn>,
}

/// One provider's column: its regions split into geographic sections.
///
/// A provider present in the catalog but without regions still gets a
/// column, with zero sections and a zero count.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderColumn {
    pub provider: Provider,
    pub sections: Vec<GroupSection>,
    pub region_count: usize,
}

/// One geographic section within a column. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSection {
    pub group: GeographicGroup,
    pub label: &'static str,
    pub regions: Vec<Region>,
}

/// Groups regions by provider id, preserving input order within each
/// provider.
pub fn group_by_provider<'a, I>(regions: I) -> HashMap<&'a str, Vec<&'a Region>>
where
    I: IntoIterator<Item = &'a Region>,
{
    let mut grouped: HashMap<&'a str, Vec<&'a Region>> = HashMap::new();
    for region in regions {
        grouped.entry(region.provider.as_str()).or_default().push(region);
    }
    grouped
}

/// Builds the grouped list view for a catalog.
///
/// Providers missing from the catalog's provider list are skipped
/// entirely, even if regions reference them; providers outside the
/// fixed display order never get a column.
///
/// # Errors
///
/// Returns [`PipelineError`] when the catalog has no regions or no
/// providers.
pub fn build_list_view(catalog: &Catalog) -> Result<ListView, PipelineError> {
    ensure_loaded(catalog)?;

    let by_provider = group_by_provider(&catalog.regions);
    let mut columns = Vec::new();

    for provider_id in PROVIDER_DISPLAY_ORDER {
        let Some(provider) = catalog.provider(provider_id) else {
            debug!(provider = provider_id, "Provider not in catalog, skipping column");
            continue;
        };

        let regions: &[&Region] = by_provider
            .get(provider_id)
            .map(Vec::as_slice)
            .unwrap_or_default();

        let grouped = geo::group_by_geography(regions.iter().copied());
        let sections = geo::ordered_groups_present(&grouped)
            .into_iter()
            .map(|group| GroupSection {
                group,
                label: group.label(),
                regions: grouped[&group].iter().map(|&r| r.clone()).collect(),
            })
            .collect();

        columns.push(ProviderColumn {
            provider: provider.clone(),
            sections,
            region_count: regions.len(),
        });
    }

    debug!(columns = columns.len(), "Built list view");
    Ok(ListView { columns })
}
