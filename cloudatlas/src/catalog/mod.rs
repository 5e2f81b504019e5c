//! Provider and region catalog
//!
//! The catalog is the immutable data snapshot everything else derives
//! from: the known cloud providers, their data-center regions, and the
//! country each region sits in. It is either built from the built-in
//! tables or loaded from a JSON snapshot file, and replaced wholesale
//! on refresh rather than mutated.

mod builtin;
mod snapshot;
mod stats;
mod types;

pub use builtin::{
    builtin_catalog, builtin_region, country_of, fallback_country, ALIYUN, DIGITALOCEAN, LINODE,
    PROVIDER_DISPLAY_ORDER, TENCENT,
};
pub use snapshot::SnapshotError;
pub use stats::{BreakdownRow, Statistics};
pub use types::{Catalog, Provider, Region};
