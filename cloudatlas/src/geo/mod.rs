//! Region classification into geographic groups.
//!
//! Classification drives the grouped list view only. Map coloring is
//! purely per-country and never consults a region's group.
//!
//! The rule, applied uniformly everywhere a region is grouped:
//!
//! 1. A region whose country code is `CN`, or whose region id starts
//!    with `cn-`, is China. The prefix check catches providers that
//!    report a non-CN country for mainland-adjacent ids (aliyun's
//!    `cn-hongkong` carries country `HK`).
//! 2. Otherwise the country→group table decides.
//! 3. Countries absent from the table fall back to
//!    [`GeographicGroup::Others`].

mod types;

pub use types::GeographicGroup;

use crate::catalog::Region;
use std::collections::HashMap;
use tracing::trace;

/// Region id prefix that forces classification as China.
const CHINA_ID_PREFIX: &str = "cn-";

/// Country → group table for the six-group taxonomy.
const COUNTRY_TO_GROUP: &[(&str, GeographicGroup)] = &[
    // North America
    ("US", GeographicGroup::NorthAmerica),
    ("CA", GeographicGroup::NorthAmerica),
    ("MX", GeographicGroup::NorthAmerica),
    // South America
    ("BR", GeographicGroup::SouthAmerica),
    ("AR", GeographicGroup::SouthAmerica),
    ("CL", GeographicGroup::SouthAmerica),
    ("CO", GeographicGroup::SouthAmerica),
    ("PE", GeographicGroup::SouthAmerica),
    ("UY", GeographicGroup::SouthAmerica),
    ("VE", GeographicGroup::SouthAmerica),
    ("EC", GeographicGroup::SouthAmerica),
    ("PY", GeographicGroup::SouthAmerica),
    // Europe
    ("DE", GeographicGroup::Europe),
    ("GB", GeographicGroup::Europe),
    ("FR", GeographicGroup::Europe),
    ("IT", GeographicGroup::Europe),
    ("ES", GeographicGroup::Europe),
    ("NL", GeographicGroup::Europe),
    ("SE", GeographicGroup::Europe),
    ("FI", GeographicGroup::Europe),
    ("IE", GeographicGroup::Europe),
    ("PL", GeographicGroup::Europe),
    ("CZ", GeographicGroup::Europe),
    ("AT", GeographicGroup::Europe),
    ("BE", GeographicGroup::Europe),
    ("CH", GeographicGroup::Europe),
    ("DK", GeographicGroup::Europe),
    ("NO", GeographicGroup::Europe),
    ("PT", GeographicGroup::Europe),
    ("GR", GeographicGroup::Europe),
    // Asia-Pacific (excluding mainland China)
    ("JP", GeographicGroup::AsiaPacific),
    ("KR", GeographicGroup::AsiaPacific),
    ("SG", GeographicGroup::AsiaPacific),
    ("AU", GeographicGroup::AsiaPacific),
    ("IN", GeographicGroup::AsiaPacific),
    ("ID", GeographicGroup::AsiaPacific),
    ("MY", GeographicGroup::AsiaPacific),
    ("TH", GeographicGroup::AsiaPacific),
    ("PH", GeographicGroup::AsiaPacific),
    ("AE", GeographicGroup::AsiaPacific),
    ("HK", GeographicGroup::AsiaPacific),
    ("NZ", GeographicGroup::AsiaPacific),
    ("VN", GeographicGroup::AsiaPacific),
    ("BD", GeographicGroup::AsiaPacific),
    ("LK", GeographicGroup::AsiaPacific),
    // China
    ("CN", GeographicGroup::China),
];

fn group_for_country(country_code: &str) -> Option<GeographicGroup> {
    COUNTRY_TO_GROUP
        .iter()
        .find(|(code, _)| *code == country_code)
        .map(|(_, group)| *group)
}

/// Classifies a region into its geographic group.
///
/// Total over all inputs; unrecognized countries classify as
/// [`GeographicGroup::Others`].
pub fn classify(region: &Region) -> GeographicGroup {
    let group = if region.country_code == "CN" || region.region_id.starts_with(CHINA_ID_PREFIX) {
        GeographicGroup::China
    } else {
        group_for_country(&region.country_code).unwrap_or(GeographicGroup::Others)
    };

    trace!(
        region_id = %region.region_id,
        country = %region.country_code,
        group = %group,
        "Classified region"
    );
    group
}

/// Groups regions by geographic group.
///
/// Within each group, regions keep their input order; nothing is
/// re-sorted. Every input region lands in exactly one group.
pub fn group_by_geography<'a, I>(regions: I) -> HashMap<GeographicGroup, Vec<&'a Region>>
where
    I: IntoIterator<Item = &'a Region>,
{
    let mut grouped: HashMap<GeographicGroup, Vec<&'a Region>> = HashMap::new();
    for region in regions {
        grouped.entry(classify(region)).or_default().push(region);
    }
    grouped
}

/// Filters the canonical display order down to groups that actually
/// have members, preserving canonical order.
///
/// Used so that empty groups never render.
pub fn ordered_groups_present(
    grouped: &HashMap<GeographicGroup, Vec<&Region>>,
) -> Vec<GeographicGroup> {
    GeographicGroup::DISPLAY_ORDER
        .into_iter()
        .filter(|group| grouped.get(group).is_some_and(|regions| !regions.is_empty()))
        .collect()
}

/// Returns the localized label for a group identifier.
///
/// Total over all inputs: an unknown identifier is returned unchanged,
/// so rendering can never fail on a group it does not know.
pub fn group_name(identifier: &str) -> &str {
    GeographicGroup::DISPLAY_ORDER
        .iter()
        .find(|group| group.identifier() == identifier)
        .map(|group| group.label())
        .unwrap_or(identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(id: &str, provider: &str, country: &str) -> Region {
        Region::new(id, provider, country, id.to_uppercase())
    }

    #[test]
    fn test_classify_by_country_table() {
        assert_eq!(
            classify(&region("us-east", "linode", "US")),
            GeographicGroup::NorthAmerica
        );
        assert_eq!(
            classify(&region("br-gru", "linode", "BR")),
            GeographicGroup::SouthAmerica
        );
        assert_eq!(
            classify(&region("fra1", "digitalocean", "DE")),
            GeographicGroup::Europe
        );
        assert_eq!(
            classify(&region("ap-tokyo", "tencent", "JP")),
            GeographicGroup::AsiaPacific
        );
    }

    #[test]
    fn test_classify_cn_country_is_china() {
        assert_eq!(
            classify(&region("ap-beijing", "tencent", "CN")),
            GeographicGroup::China
        );
    }

    #[test]
    fn test_classify_cn_prefix_overrides_country_table() {
        // aliyun reports Hong Kong for cn-hongkong; the id prefix wins
        // over the HK → asia-pacific table entry.
        assert_eq!(
            classify(&region("cn-hongkong", "aliyun", "HK")),
            GeographicGroup::China
        );
        // A plain HK region without the prefix stays in asia-pacific.
        assert_eq!(
            classify(&region("hk-hkg", "linode", "HK")),
            GeographicGroup::AsiaPacific
        );
    }

    #[test]
    fn test_classify_unknown_country_falls_back_to_others() {
        assert_eq!(
            classify(&region("eu-moscow", "tencent", "RU")),
            GeographicGroup::Others
        );
        assert_eq!(
            classify(&region("x", "linode", "")),
            GeographicGroup::Others
        );
        assert_eq!(
            classify(&region("y", "linode", "ZZ")),
            GeographicGroup::Others
        );
    }

    #[test]
    fn test_group_by_geography_preserves_input_order_within_groups() {
        let regions = vec![
            region("us-east", "linode", "US"),
            region("jp-osa", "linode", "JP"),
            region("us-sea", "linode", "US"),
            region("ca-central", "linode", "CA"),
        ];

        let grouped = group_by_geography(&regions);
        let north_america: Vec<&str> = grouped[&GeographicGroup::NorthAmerica]
            .iter()
            .map(|r| r.region_id.as_str())
            .collect();

        assert_eq!(north_america, vec!["us-east", "us-sea", "ca-central"]);
    }

    #[test]
    fn test_group_by_geography_partitions_every_region_exactly_once() {
        let regions = vec![
            region("us-east", "linode", "US"),
            region("cn-beijing", "aliyun", "CN"),
            region("eu-moscow", "tencent", "RU"),
            region("fra1", "digitalocean", "DE"),
        ];

        let grouped = group_by_geography(&regions);
        let total: usize = grouped.values().map(Vec::len).sum();
        assert_eq!(total, regions.len());
    }

    #[test]
    fn test_ordered_groups_present_is_subsequence_of_canonical_order() {
        let regions = vec![
            region("eu-moscow", "tencent", "RU"),
            region("us-east", "linode", "US"),
            region("cn-beijing", "aliyun", "CN"),
        ];

        let grouped = group_by_geography(&regions);
        let present = ordered_groups_present(&grouped);

        assert_eq!(
            present,
            vec![
                GeographicGroup::NorthAmerica,
                GeographicGroup::China,
                GeographicGroup::Others,
            ]
        );
    }

    #[test]
    fn test_ordered_groups_present_skips_empty_groups() {
        let grouped = group_by_geography(&[]);
        assert!(ordered_groups_present(&grouped).is_empty());
    }

    #[test]
    fn test_grouping_is_idempotent() {
        let regions = vec![
            region("us-east", "linode", "US"),
            region("cn-beijing", "aliyun", "CN"),
            region("sgp1", "digitalocean", "SG"),
        ];

        let first = group_by_geography(&regions);
        let second = group_by_geography(&regions);
        assert_eq!(
            ordered_groups_present(&first),
            ordered_groups_present(&second)
        );
        for group in ordered_groups_present(&first) {
            let a: Vec<&str> = first[&group].iter().map(|r| r.region_id.as_str()).collect();
            let b: Vec<&str> = second[&group]
                .iter()
                .map(|r| r.region_id.as_str())
                .collect();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_group_name_known_and_unknown() {
        assert_eq!(group_name("north-america"), "🇺🇸 北美");
        assert_eq!(group_name("china"), "🇨🇳 中国");
        assert_eq!(group_name("atlantis"), "atlantis");
        assert_eq!(group_name(""), "");
    }
}
