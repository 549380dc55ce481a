//! Core crate exports for filtering and sorting `folio` catalogs.
//!
//! The root module re-exports the engine entry points and the record types so
//! that embedders can evaluate criteria without digging through the module
//! hierarchy.

pub mod app_dirs;
pub mod catalog;
pub mod logging;
pub mod search;
pub mod types;

pub use catalog::{Catalog, CatalogError, CatalogKind};
pub use search::{evaluate, evaluate_by, evaluate_owned, matches};
pub use types::{BlogPost, CategoryFilter, Criteria, ParseSortKeyError, Project, Record, SortKey};
