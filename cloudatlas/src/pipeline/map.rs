//! Country color map construction.
//!
//! The map renderer asks one question per country shape: "what color
//! is this country right now?". This module precomputes the answer for
//! every country that has at least one region from a selected provider;
//! everything else gets the no-service color.

use std::collections::HashMap;

use tracing::debug;

use super::error::{ensure_loaded, PipelineError};
use crate::catalog::{Catalog, Region};
use crate::color::{resolve_color, Color, ResolverDefaults};
use crate::country;
use crate::selection::Selection;

/// Resolved per-country colors for the current selection.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryColorMap {
    colors: HashMap<String, Color>,
    no_service: Color,
}

impl CountryColorMap {
    /// The color for an alpha-2 country code.
    ///
    /// Countries with no selected provider coverage get the no-service
    /// color, so this is total over all inputs.
    pub fn color_for(&self, country_code: &str) -> &Color {
        self.colors.get(country_code).unwrap_or(&self.no_service)
    }

    /// The color for a numeric topology id, as carried by map shape
    /// data. Unresolvable ids match no country and therefore get the
    /// no-service color.
    pub fn color_for_topology_id(&self, numeric_id: &str) -> &Color {
        self.color_for(country::resolve(numeric_id))
    }

    /// The no-service color countries outside the map fall back to.
    pub fn no_service(&self) -> &Color {
        &self.no_service
    }

    /// The countries that resolved to a service color, in arbitrary
    /// order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Color)> {
        self.colors.iter().map(|(code, color)| (code.as_str(), color))
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Groups regions by country, keeping only selected providers.
///
/// Each country's provider list is de-duplicated while preserving the
/// order providers were first encountered in the region input. That
/// order is load-bearing: it decides the winner for multi-provider
/// countries without linode.
pub fn group_by_country<'a, I>(regions: I, selection: &Selection) -> HashMap<String, Vec<String>>
where
    I: IntoIterator<Item = &'a Region>,
{
    let mut grouped: HashMap<String, Vec<String>> = HashMap::new();
    for region in regions {
        if !selection.contains(&region.provider) {
            continue;
        }
        let providers = grouped.entry(region.country_code.clone()).or_default();
        if !providers.contains(&region.provider) {
            providers.push(region.provider.clone());
        }
    }
    grouped
}

/// Builds the country color map for a catalog and selection.
///
/// # Arguments
///
/// * `catalog` - The loaded provider/region snapshot
/// * `selection` - Currently enabled providers
/// * `defaults` - Theme defaults, see [`ResolverDefaults`]
///
/// # Errors
///
/// Returns [`PipelineError`] when the catalog has no regions or no
/// providers. An empty selection is not an error: every country simply
/// resolves to no-service.
pub fn build_country_colors(
    catalog: &Catalog,
    selection: &Selection,
    defaults: &ResolverDefaults,
) -> Result<CountryColorMap, PipelineError> {
    ensure_loaded(catalog)?;

    let palette = catalog.palette();
    let colors = group_by_country(&catalog.regions, selection)
        .into_iter()
        .map(|(country, providers)| {
            let color = resolve_color(&providers, selection.ids(), &palette, defaults);
            (country, color)
        })
        .collect::<HashMap<_, _>>();

    debug!(
        countries = colors.len(),
        selected = selection.len(),
        "Built country color map"
    );
    Ok(CountryColorMap {
        colors,
        no_service: defaults.no_service.clone(),
    })
}
