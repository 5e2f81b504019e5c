//! cloudatlas - Cloud provider region atlas and map coloring
//!
//! This library turns cloud-provider region catalogs into render-ready
//! views: a grouped region list per provider and a per-country color
//! map for a world map, recomputed per selection change.
//!
//! # High-Level API
//!
//! For most use cases, build a [`view::RenderPlan`] directly, or run a
//! [`view::ViewEngine`] when selections change over time:
//!
//! ```ignore
//! use cloudatlas::catalog::builtin_catalog;
//! use cloudatlas::color::ResolverDefaults;
//! use cloudatlas::selection::Selection;
//! use cloudatlas::view::RenderPlan;
//!
//! let catalog = builtin_catalog();
//! let plan = RenderPlan::build(
//!     &catalog,
//!     &Selection::default(),
//!     &ResolverDefaults::map_theme(),
//! )?;
//!
//! for column in &plan.list.columns {
//!     println!("{}: {} regions", column.provider.display_name, column.region_count);
//! }
//! ```

pub mod catalog;
pub mod color;
pub mod config;
pub mod country;
pub mod geo;
pub mod logging;
pub mod pipeline;
pub mod selection;
pub mod view;

/// Version of the cloudatlas library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
