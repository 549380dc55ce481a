//! Immutable record catalogs seeded once at startup.

pub mod builtin;
mod error;
mod loader;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::search;
use crate::types::{Criteria, Record};

pub use error::CatalogError;
pub use loader::load_json;

/// The built-in catalogs a run can operate on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
	#[default]
	Projects,
	Posts,
}

impl CatalogKind {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Projects => "projects",
			Self::Posts => "posts",
		}
	}

	/// Parse a kind identifier as written in configuration files.
	#[must_use]
	pub fn from_id(id: &str) -> Option<Self> {
		match id {
			"projects" => Some(Self::Projects),
			"posts" => Some(Self::Posts),
			_ => None,
		}
	}
}

impl fmt::Display for CatalogKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A fixed, shared list of records. Cloning is cheap and never copies records.
#[derive(Debug)]
pub struct Catalog<R> {
	records: Arc<[R]>,
}

impl<R> Clone for Catalog<R> {
	fn clone(&self) -> Self {
		Self {
			records: Arc::clone(&self.records),
		}
	}
}

impl<R: Record> Catalog<R> {
	#[must_use]
	pub fn new(records: Vec<R>) -> Self {
		Self {
			records: records.into(),
		}
	}

	#[must_use]
	pub fn records(&self) -> &[R] {
		&self.records
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.records.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Run the filter engine over this catalog.
	#[must_use]
	pub fn evaluate(&self, criteria: &Criteria) -> Vec<&R> {
		search::evaluate(&self.records, criteria)
	}

	/// Distinct categories in order of first appearance, for building a
	/// category selector.
	#[must_use]
	pub fn categories(&self) -> Vec<&str> {
		let mut seen: Vec<&str> = Vec::new();
		for record in self.records.iter() {
			let category = record.category();
			if !seen.contains(&category) {
				seen.push(category);
			}
		}
		seen
	}

	/// Categories carried by records but missing from `offered`, in order of
	/// first appearance.
	#[must_use]
	pub fn categories_outside(&self, offered: &[&str]) -> Vec<&str> {
		self.categories()
			.into_iter()
			.filter(|category| !offered.contains(category))
			.collect()
	}

	/// Return true when at least one record carries `category`.
	#[must_use]
	pub fn knows_category(&self, category: &str) -> bool {
		self.records.iter().any(|record| record.category() == category)
	}
}

impl<R: Record> From<Vec<R>> for Catalog<R> {
	fn from(records: Vec<R>) -> Self {
		Self::new(records)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::Project;

	fn catalog() -> Catalog<Project> {
		Catalog::new(vec![
			Project::new("A", "", "frontend", "2022-01-01"),
			Project::new("B", "", "backend", "2022-01-02"),
			Project::new("C", "", "frontend", "2022-01-03"),
		])
	}

	#[test]
	fn categories_follow_first_appearance() {
		assert_eq!(catalog().categories(), vec!["frontend", "backend"]);
	}

	#[test]
	fn categories_outside_lists_unoffered_ones() {
		let catalog = catalog();
		assert_eq!(catalog.categories_outside(&["frontend"]), vec!["backend"]);
		assert!(catalog.categories_outside(&["backend", "frontend"]).is_empty());
	}

	#[test]
	fn clones_share_records() {
		let catalog = catalog();
		let copy = catalog.clone();
		assert!(std::ptr::eq(catalog.records(), copy.records()));
		assert!(copy.knows_category("backend"));
		assert!(!copy.knows_category("Backend"));
	}

	#[test]
	fn kind_identifiers_round_trip() {
		for kind in [CatalogKind::Projects, CatalogKind::Posts] {
			assert_eq!(CatalogKind::from_id(kind.as_str()), Some(kind));
		}
		assert_eq!(CatalogKind::from_id("blog"), None);
	}
}
