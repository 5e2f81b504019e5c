//! Country color resolution under multi-provider overlap.
//!
//! This is the single place where "several providers serve this
//! country" collapses to one display color. The precedence, first
//! match wins:
//!
//! 1. Intersect the country's providers with the current selection,
//!    preserving the country list's encounter order.
//! 2. Empty intersection → the call site's `no_service` color.
//! 3. More than one member including `linode` → the `multi_linode`
//!    highlight.
//! 4. Exactly one member → its palette color, or `fallback` when the
//!    palette has no entry.
//! 5. More than one member without `linode` → the first-encountered
//!    member's palette color, or `fallback`.
//!
//! The tie-break in rule 5 is deliberately "first encountered", not
//! alphabetical: callers must preserve provider insertion order when
//! building the active list.

use super::types::{Color, Palette};
use crate::catalog::LINODE;

/// Map-theme color for countries with no active provider (dark map fill).
pub const MAP_NO_SERVICE_COLOR: &str = "#4a5568";
/// List-theme color for countries with no active provider.
pub const LIST_NO_SERVICE_COLOR: &str = "#ffffff";
/// List-theme color for an active provider missing from the palette.
pub const LIST_FALLBACK_COLOR: &str = "#cccccc";
/// Highlight for multi-provider overlap that includes linode.
pub const MULTI_LINODE_COLOR: &str = "#e74c3c";

/// Per-call-site default colors for [`resolve_color`].
///
/// The map and the list/legend use different defaults; both are plain
/// data so call sites (and user configuration) can substitute their own.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverDefaults {
    /// Returned when no selected provider serves the country.
    pub no_service: Color,
    /// Returned for multi-provider overlap including linode.
    pub multi_linode: Color,
    /// Returned when the winning provider has no palette entry.
    pub fallback: Color,
}

impl ResolverDefaults {
    /// Defaults for the dark world map. No-service countries keep the
    /// base map fill, as does a palette miss.
    pub fn map_theme() -> Self {
        Self {
            no_service: Color::new(MAP_NO_SERVICE_COLOR),
            multi_linode: Color::new(MULTI_LINODE_COLOR),
            fallback: Color::new(MAP_NO_SERVICE_COLOR),
        }
    }

    /// Defaults for the grouped list and legend.
    pub fn list_theme() -> Self {
        Self {
            no_service: Color::new(LIST_NO_SERVICE_COLOR),
            multi_linode: Color::new(MULTI_LINODE_COLOR),
            fallback: Color::new(LIST_FALLBACK_COLOR),
        }
    }
}

/// Resolves the display color for one country.
///
/// # Arguments
///
/// * `active_providers` - Providers with at least one region in the
///   country, in encounter order
/// * `selected_providers` - The user's current provider selection
/// * `palette` - Provider display colors
/// * `defaults` - Call-site default colors
///
/// # Returns
///
/// The resolved color. Pure and total: no input combination fails.
pub fn resolve_color(
    active_providers: &[String],
    selected_providers: &[String],
    palette: &Palette,
    defaults: &ResolverDefaults,
) -> Color {
    let active: Vec<&str> = active_providers
        .iter()
        .filter(|provider| selected_providers.iter().any(|s| s == *provider))
        .map(String::as_str)
        .collect();

    if active.is_empty() {
        return defaults.no_service.clone();
    }

    if active.len() > 1 && active.contains(&LINODE) {
        return defaults.multi_linode.clone();
    }

    // Single member, or several without linode: the first-encountered
    // active provider's palette entry wins.
    palette
        .color_of(active[0])
        .cloned()
        .unwrap_or_else(|| defaults.fallback.clone())
}
