//! Color model and provider color resolution
//!
//! Provides the `Color` value type, the provider `Palette`, and the
//! resolver that collapses multi-provider coverage of a country into
//! the single color the map or list displays.

mod resolver;
mod types;

pub use resolver::{
    resolve_color, ResolverDefaults, LIST_FALLBACK_COLOR, LIST_NO_SERVICE_COLOR,
    MAP_NO_SERVICE_COLOR, MULTI_LINODE_COLOR,
};
pub use types::{Color, Palette};
