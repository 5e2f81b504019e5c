//! The render plan: everything a renderer needs for one frame.

use crate::catalog::{Catalog, Statistics};
use crate::color::ResolverDefaults;
use crate::pipeline::{build_country_colors, build_list_view, CountryColorMap, ListView, PipelineError};
use crate::selection::Selection;

/// A complete, self-contained rendering input derived from one
/// (catalog, selection) pair.
///
/// Plans are immutable once built. A selection change produces a whole
/// new plan; renderers never patch an old one.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    /// The selection this plan was built for.
    pub selection: Selection,
    /// Grouped list view, independent of the selection.
    pub list: ListView,
    /// Per-country map colors for the selection.
    pub map: CountryColorMap,
    /// Catalog aggregates for the status line.
    pub stats: Statistics,
}

impl RenderPlan {
    /// Builds a plan from a catalog and selection.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError`] when the catalog has no regions or no
    /// providers.
    pub fn build(
        catalog: &Catalog,
        selection: &Selection,
        defaults: &ResolverDefaults,
    ) -> Result<Self, PipelineError> {
        Ok(Self {
            selection: selection.clone(),
            list: build_list_view(catalog)?,
            map: build_country_colors(catalog, selection, defaults)?,
            stats: Statistics::collect(catalog),
        })
    }
}
