//! Data-driven upgrade content and loaders.
//!
//! This crate houses the built-in upgrade catalog and provides a RON loader
//! for custom catalogs. Content is consumed by the runtime when building its
//! upgrade registry and never appears in raid state.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{UpgradeCatalog, builtin_catalog};

#[cfg(feature = "loaders")]
pub use loaders::CatalogLoader;
