//! The geographic group enumeration and its display metadata.

use std::fmt;

/// A coarse continent-like bucket used for list display ordering.
///
/// This is a closed set: anything that does not classify into one of
/// the five named groups lands in [`GeographicGroup::Others`]. Mainland
/// China is deliberately split out of Asia-Pacific and rendered as its
/// own group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeographicGroup {
    NorthAmerica,
    SouthAmerica,
    Europe,
    AsiaPacific,
    China,
    Others,
}

impl GeographicGroup {
    /// Canonical display order for group sections.
    ///
    /// Rendering filters this order down to non-empty groups; it never
    /// re-sorts.
    pub const DISPLAY_ORDER: [GeographicGroup; 6] = [
        GeographicGroup::NorthAmerica,
        GeographicGroup::SouthAmerica,
        GeographicGroup::Europe,
        GeographicGroup::AsiaPacific,
        GeographicGroup::China,
        GeographicGroup::Others,
    ];

    /// Stable identifier, e.g. `north-america`.
    pub fn identifier(&self) -> &'static str {
        match self {
            GeographicGroup::NorthAmerica => "north-america",
            GeographicGroup::SouthAmerica => "south-america",
            GeographicGroup::Europe => "europe",
            GeographicGroup::AsiaPacific => "asia-pacific",
            GeographicGroup::China => "china",
            GeographicGroup::Others => "others",
        }
    }

    /// Localized display label shown as a section heading.
    pub fn label(&self) -> &'static str {
        match self {
            GeographicGroup::NorthAmerica => "🇺🇸 北美",
            GeographicGroup::SouthAmerica => "🇧🇷 南美",
            GeographicGroup::Europe => "🇪🇺 欧洲",
            GeographicGroup::AsiaPacific => "🌏 亚太地区",
            GeographicGroup::China => "🇨🇳 中国",
            GeographicGroup::Others => "🌐 其他地区",
        }
    }
}

impl fmt::Display for GeographicGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_order_covers_every_group_once() {
        let order = GeographicGroup::DISPLAY_ORDER;
        assert_eq!(order.len(), 6);
        for (i, group) in order.iter().enumerate() {
            assert!(!order[i + 1..].contains(group), "{group} repeats");
        }
    }

    #[test]
    fn test_identifiers_are_stable() {
        assert_eq!(GeographicGroup::NorthAmerica.identifier(), "north-america");
        assert_eq!(GeographicGroup::AsiaPacific.identifier(), "asia-pacific");
        assert_eq!(GeographicGroup::Others.identifier(), "others");
    }

    #[test]
    fn test_labels_are_localized() {
        assert_eq!(GeographicGroup::China.label(), "🇨🇳 中国");
        assert_eq!(GeographicGroup::Others.label(), "🌐 其他地区");
    }
}
