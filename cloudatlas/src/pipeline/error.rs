//! Pipeline error types.

use std::fmt;

use crate::catalog::Catalog;

/// Errors from building a view out of a catalog.
///
/// Empty inputs are an error, not an empty view: rendering must be able
/// to tell "nothing loaded" from "loaded, zero matches". Both variants
/// carry no payload; the catalog itself is the context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineError {
    /// The catalog contains no regions.
    NoRegions,
    /// The catalog contains no providers.
    NoProviders,
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::NoRegions => write!(f, "No region data loaded"),
            PipelineError::NoProviders => write!(f, "No provider data loaded"),
        }
    }
}

impl std::error::Error for PipelineError {}

/// Checks that a catalog has data to build views from.
///
/// Regions are checked first, matching the order the rendering layer
/// reports the two conditions in.
pub(super) fn ensure_loaded(catalog: &Catalog) -> Result<(), PipelineError> {
    if catalog.regions.is_empty() {
        return Err(PipelineError::NoRegions);
    }
    if catalog.providers.is_empty() {
        return Err(PipelineError::NoProviders);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Provider, Region};

    #[test]
    fn test_empty_regions_reported_before_empty_providers() {
        let empty = Catalog::new(Vec::new(), Vec::new());
        assert_eq!(ensure_loaded(&empty), Err(PipelineError::NoRegions));

        let no_regions = Catalog::new(
            vec![Provider::new("linode", "Linode", "#3498db")],
            Vec::new(),
        );
        assert_eq!(ensure_loaded(&no_regions), Err(PipelineError::NoRegions));

        let no_providers = Catalog::new(
            Vec::new(),
            vec![Region::new("us-east", "linode", "US", "Newark, NJ")],
        );
        assert_eq!(ensure_loaded(&no_providers), Err(PipelineError::NoProviders));
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(PipelineError::NoRegions.to_string(), "No region data loaded");
        assert_eq!(
            PipelineError::NoProviders.to_string(),
            "No provider data loaded"
        );
    }
}
