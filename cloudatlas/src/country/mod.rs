//! Country code resolution for world topology feature ids.
//!
//! The world map dataset identifies countries by decimal numeric-ISO
//! strings (`"840"` for the United States); region records identify
//! countries by alpha-2 codes (`"US"`). [`resolve`] bridges the two so
//! map features can be matched against per-country color records.
//!
//! Resolution is total: an id with no table entry is returned unchanged.
//! Such a value can never equal any region's country code, so downstream
//! color lookup lands on the "no service" default. Callers must not
//! treat an unresolved return as an error.

mod table;

use table::TOPOLOGY_IDS;

/// Looks up the alpha-2 code for a numeric topology id.
///
/// Matching is exact: no case folding, no leading-zero normalization
/// (`"76"` does not match the table's `"076"`). Where the upstream data
/// repeats an id, the later entry wins.
pub fn lookup(numeric_id: &str) -> Option<&'static str> {
    TOPOLOGY_IDS
        .iter()
        .rfind(|(id, _)| *id == numeric_id)
        .map(|(_, alpha2)| *alpha2)
}

/// Resolves a numeric topology id to an alpha-2 country code, returning
/// the input unchanged when the id is not in the table.
///
/// # Example
///
/// ```
/// use cloudatlas::country::resolve;
///
/// assert_eq!(resolve("840"), "US");
/// assert_eq!(resolve("999"), "999");
/// ```
pub fn resolve(numeric_id: &str) -> &str {
    lookup(numeric_id).unwrap_or(numeric_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_major_countries() {
        assert_eq!(resolve("840"), "US");
        assert_eq!(resolve("156"), "CN");
        assert_eq!(resolve("276"), "DE");
        assert_eq!(resolve("076"), "BR");
        assert_eq!(resolve("392"), "JP");
    }

    #[test]
    fn test_resolve_unknown_id_returns_input_unchanged() {
        assert_eq!(resolve("999"), "999");
        assert_eq!(resolve(""), "");
        assert_eq!(resolve("US"), "US");
    }

    #[test]
    fn test_resolve_requires_exact_key_format() {
        // Brazil is keyed "076"; the unpadded form is not recognized.
        assert_eq!(lookup("076"), Some("BR"));
        assert_eq!(lookup("76"), None);
        assert_eq!(resolve("76"), "76");
    }

    #[test]
    fn test_duplicate_id_takes_later_entry() {
        // 818 appears twice in the upstream data; both entries agree,
        // and the later one is the one served.
        assert_eq!(lookup("818"), Some("EG"));
        let positions: Vec<usize> = super::table::TOPOLOGY_IDS
            .iter()
            .enumerate()
            .filter(|(_, (id, _))| *id == "818")
            .map(|(i, _)| i)
            .collect();
        assert_eq!(positions.len(), 2);
    }

    #[test]
    fn test_table_resolves_every_entry() {
        for (id, alpha2) in super::table::TOPOLOGY_IDS {
            assert_eq!(resolve(id), *alpha2);
        }
    }
}
