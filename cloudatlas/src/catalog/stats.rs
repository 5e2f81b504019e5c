//! Aggregate statistics over a catalog snapshot.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::types::Catalog;
use crate::geo::{self, GeographicGroup};

/// Region totals broken down by provider and geographic group.
///
/// Derived afresh from a catalog; never stored in the snapshot itself.
/// Breakdown rows keep catalog provider order and canonical group order
/// respectively, and omit providers/groups with no regions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_regions: usize,
    pub total_countries: usize,
    pub total_providers: usize,
    pub regions_by_provider: Vec<BreakdownRow>,
    pub regions_by_group: Vec<BreakdownRow>,
}

/// One row of a statistics breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownRow {
    pub key: String,
    pub count: usize,
}

impl BreakdownRow {
    fn new(key: impl Into<String>, count: usize) -> Self {
        Self {
            key: key.into(),
            count,
        }
    }
}

impl Statistics {
    /// Computes statistics for a catalog.
    pub fn collect(catalog: &Catalog) -> Self {
        let countries: HashSet<&str> = catalog
            .regions
            .iter()
            .map(|region| region.country_code.as_str())
            .collect();

        let regions_by_provider = catalog
            .providers
            .iter()
            .map(|provider| {
                BreakdownRow::new(
                    provider.name.clone(),
                    catalog.regions_of(&provider.name).len(),
                )
            })
            .filter(|row| row.count > 0)
            .collect();

        let grouped = geo::group_by_geography(&catalog.regions);
        let regions_by_group = GeographicGroup::DISPLAY_ORDER
            .iter()
            .filter_map(|group| {
                grouped
                    .get(group)
                    .map(|regions| BreakdownRow::new(group.identifier(), regions.len()))
            })
            .collect();

        Self {
            total_regions: catalog.regions.len(),
            total_countries: countries.len(),
            total_providers: catalog.providers.len(),
            regions_by_provider,
            regions_by_group,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{builtin_catalog, Catalog, Provider, Region};

    #[test]
    fn test_builtin_catalog_totals() {
        let stats = Statistics::collect(&builtin_catalog());

        assert_eq!(stats.total_regions, 91);
        assert_eq!(stats.total_providers, 4);
        // Distinct countries across all four region tables.
        assert_eq!(stats.total_countries, 24);
    }

    #[test]
    fn test_provider_breakdown_keeps_catalog_order() {
        let stats = Statistics::collect(&builtin_catalog());
        let keys: Vec<&str> = stats
            .regions_by_provider
            .iter()
            .map(|row| row.key.as_str())
            .collect();
        assert_eq!(keys, ["linode", "digitalocean", "aliyun", "tencent"]);

        let linode = &stats.regions_by_provider[0];
        assert_eq!(linode.count, 31);
    }

    #[test]
    fn test_group_breakdown_in_canonical_order_without_empties() {
        let catalog = Catalog::new(
            vec![Provider::new("linode", "Linode", "#3498db")],
            vec![
                Region::new("us-east", "linode", "US", "Newark, NJ"),
                Region::new("eu-west", "linode", "GB", "London, UK"),
                Region::new("us-sea", "linode", "US", "Seattle, WA"),
            ],
        );
        let stats = Statistics::collect(&catalog);

        let rows: Vec<(&str, usize)> = stats
            .regions_by_group
            .iter()
            .map(|row| (row.key.as_str(), row.count))
            .collect();
        assert_eq!(rows, [("north-america", 2), ("europe", 1)]);
    }

    #[test]
    fn test_empty_catalog_yields_zeroes() {
        let stats = Statistics::collect(&Catalog::new(Vec::new(), Vec::new()));

        assert_eq!(stats.total_regions, 0);
        assert_eq!(stats.total_countries, 0);
        assert_eq!(stats.total_providers, 0);
        assert!(stats.regions_by_provider.is_empty());
        assert!(stats.regions_by_group.is_empty());
    }

    #[test]
    fn test_providers_without_regions_are_omitted() {
        let catalog = Catalog::new(
            vec![
                Provider::new("linode", "Linode", "#3498db"),
                Provider::new("vultr", "Vultr", "#123456"),
            ],
            vec![Region::new("us-east", "linode", "US", "Newark, NJ")],
        );
        let stats = Statistics::collect(&catalog);

        assert_eq!(stats.total_providers, 2);
        assert_eq!(stats.regions_by_provider.len(), 1);
        assert_eq!(stats.regions_by_provider[0].key, "linode");
    }
}
