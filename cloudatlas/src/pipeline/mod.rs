//! Grouping pipeline
//!
//! Pure, synchronous view construction from (catalog × selection):
//!
//! - the grouped list view: regions by provider, each provider's
//!   regions split into canonical geographic sections
//! - the country color map: regions by country, collapsed to one
//!   display color per country for the current selection
//!
//! Both are rebuilt wholesale on every selection change; nothing in
//! here caches or mutates. I/O never happens here, and empty catalogs
//! are a typed error so rendering can tell "nothing loaded" from
//! "loaded, zero matches".

mod error;
mod list;
mod map;

pub use error::PipelineError;
pub use list::{build_list_view, group_by_provider, GroupSection, ListView, ProviderColumn};
pub use map::{build_country_colors, group_by_country, CountryColorMap};
