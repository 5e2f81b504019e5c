//! Record types for the provider/region catalog.
//!
//! These are pure data types. A [`Catalog`] is an immutable snapshot of
//! everything the pipeline consumes: load (or refresh) it once, then
//! derive groupings and colors from it as often as the selection changes.

use crate::color::{Color, Palette};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A cloud vendor in the provider catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    /// Stable identifier, e.g. `linode`.
    pub name: String,
    /// Human-readable name shown in list headers.
    pub display_name: String,
    /// Display color for this provider's regions.
    pub color: Color,
}

impl Provider {
    /// Creates a provider record.
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        color: impl Into<Color>,
    ) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            color: color.into(),
        }
    }
}

/// A single data-center region operated by a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Provider-scoped region identifier, e.g. `us-east` or `cn-hangzhou`.
    pub region_id: String,
    /// Identifier of the provider operating this region.
    pub provider: String,
    /// ISO 3166-1 alpha-2 country code as reported by the provider mapping.
    pub country_code: String,
    /// Human-readable location name.
    pub region_name: String,
    /// Optional upstream continent hint. Carried through snapshots but
    /// never consulted for classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continent: Option<String>,
}

impl Region {
    /// Creates a region record without a continent hint.
    pub fn new(
        region_id: impl Into<String>,
        provider: impl Into<String>,
        country_code: impl Into<String>,
        region_name: impl Into<String>,
    ) -> Self {
        Self {
            region_id: region_id.into(),
            provider: provider.into(),
            country_code: country_code.into(),
            region_name: region_name.into(),
            continent: None,
        }
    }
}

/// An immutable snapshot of providers and regions loaded together.
///
/// All pipeline output is derived fresh from a catalog plus a selection;
/// nothing in a catalog is ever mutated in place. Refreshing data means
/// building a new catalog and handing it to the pipeline again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Known providers, in display order.
    pub providers: Vec<Provider>,
    /// All regions across providers, in collection order.
    pub regions: Vec<Region>,
    /// When this snapshot was produced.
    pub generated_at: DateTime<Utc>,
}

impl Catalog {
    /// Creates a catalog snapshot stamped with the current time.
    pub fn new(providers: Vec<Provider>, regions: Vec<Region>) -> Self {
        Self {
            providers,
            regions,
            generated_at: Utc::now(),
        }
    }

    /// Looks up a provider record by identifier.
    pub fn provider(&self, name: &str) -> Option<&Provider> {
        self.providers.iter().find(|p| p.name == name)
    }

    /// Returns the regions belonging to one provider, in catalog order.
    pub fn regions_of(&self, provider: &str) -> Vec<&Region> {
        self.regions
            .iter()
            .filter(|r| r.provider == provider)
            .collect()
    }

    /// Derives the provider palette from the catalog colors.
    pub fn palette(&self) -> Palette {
        Palette::from_pairs(
            self.providers
                .iter()
                .map(|p| (p.name.clone(), p.color.clone())),
        )
    }
}
