use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Record;
use crate::search::{collate, date};

/// Wildcard category value meaning "no category constraint".
pub const ALL_CATEGORIES: &str = "all";

/// User-controlled filter and sort parameters for one evaluation.
///
/// The default value is the "clear filters" state: empty query, every
/// category, catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Criteria {
	pub query: String,
	pub category: CategoryFilter,
	pub sort: Option<SortKey>,
}

impl Criteria {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the free-text query.
	#[must_use]
	pub fn with_query(mut self, query: impl Into<String>) -> Self {
		self.query = query.into();
		self
	}

	/// Set the category filter from its string form (`"all"` is the wildcard).
	#[must_use]
	pub fn with_category(mut self, category: impl AsRef<str>) -> Self {
		self.category = CategoryFilter::from(category.as_ref());
		self
	}

	#[must_use]
	pub fn with_sort(mut self, sort: Option<SortKey>) -> Self {
		self.sort = sort;
		self
	}

	/// Return true when evaluation would hand back the catalog untouched.
	#[must_use]
	pub fn is_unconstrained(&self) -> bool {
		self.query.is_empty() && self.category.is_all() && self.sort.is_none()
	}
}

/// Category selector: either the `all` wildcard or one exact category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
	#[default]
	All,
	Only(String),
}

impl CategoryFilter {
	#[must_use]
	pub fn is_all(&self) -> bool {
		matches!(self, Self::All)
	}

	/// Exact, case-sensitive comparison against a record category.
	#[must_use]
	pub fn accepts(&self, category: &str) -> bool {
		match self {
			Self::All => true,
			Self::Only(selected) => selected == category,
		}
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		match self {
			Self::All => ALL_CATEGORIES,
			Self::Only(selected) => selected,
		}
	}
}

impl From<&str> for CategoryFilter {
	fn from(value: &str) -> Self {
		if value == ALL_CATEGORIES {
			Self::All
		} else {
			Self::Only(value.to_string())
		}
	}
}

impl From<String> for CategoryFilter {
	fn from(value: String) -> Self {
		if value == ALL_CATEGORIES {
			Self::All
		} else {
			Self::Only(value)
		}
	}
}

impl From<CategoryFilter> for String {
	fn from(value: CategoryFilter) -> Self {
		match value {
			CategoryFilter::All => ALL_CATEGORIES.to_string(),
			CategoryFilter::Only(selected) => selected,
		}
	}
}

impl fmt::Display for CategoryFilter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Fixed set of orderings a catalog can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
	#[serde(rename = "newest")]
	Newest,
	#[serde(rename = "oldest")]
	Oldest,
	#[serde(rename = "a-z")]
	TitleAscending,
	#[serde(rename = "z-a")]
	TitleDescending,
}

impl SortKey {
	pub const ALL: [SortKey; 4] = [
		SortKey::Newest,
		SortKey::Oldest,
		SortKey::TitleAscending,
		SortKey::TitleDescending,
	];

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Newest => "newest",
			Self::Oldest => "oldest",
			Self::TitleAscending => "a-z",
			Self::TitleDescending => "z-a",
		}
	}

	/// Comparator for this ordering. Equal records compare as
	/// [`Ordering::Equal`] so a stable sort keeps catalog order.
	pub fn compare<R: Record + ?Sized>(self, a: &R, b: &R) -> Ordering {
		match self {
			Self::Newest => date::timestamp(b.date()).cmp(&date::timestamp(a.date())),
			Self::Oldest => date::timestamp(a.date()).cmp(&date::timestamp(b.date())),
			Self::TitleAscending => collate::compare(a.title(), b.title()),
			Self::TitleDescending => collate::compare(b.title(), a.title()),
		}
	}
}

impl fmt::Display for SortKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown sort key '{value}' (expected one of: newest, oldest, a-z, z-a)")]
pub struct ParseSortKeyError {
	pub value: String,
}

impl FromStr for SortKey {
	type Err = ParseSortKeyError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		SortKey::ALL
			.into_iter()
			.find(|key| key.as_str() == value)
			.ok_or_else(|| ParseSortKeyError {
				value: value.to_string(),
			})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::Project;

	#[test]
	fn all_is_the_only_wildcard() {
		assert!(CategoryFilter::from("all").is_all());
		assert_eq!(
			CategoryFilter::from("All"),
			CategoryFilter::Only("All".to_string())
		);
		assert!(!CategoryFilter::from("frontend").accepts("Frontend"));
	}

	#[test]
	fn sort_keys_parse_from_their_labels() {
		for key in SortKey::ALL {
			assert_eq!(key.as_str().parse::<SortKey>(), Ok(key));
		}
		let err = "latest".parse::<SortKey>().unwrap_err();
		assert!(err.to_string().contains("latest"));
	}

	#[test]
	fn criteria_deserialize_with_string_category() {
		let criteria: Criteria =
			serde_json::from_str(r#"{"query":"react","category":"frontend","sort":"z-a"}"#)
				.expect("parse");
		assert_eq!(criteria.category, CategoryFilter::Only("frontend".into()));
		assert_eq!(criteria.sort, Some(SortKey::TitleDescending));

		let empty: Criteria = serde_json::from_str("{}").expect("parse");
		assert!(empty.is_unconstrained());
	}

	#[test]
	fn newest_orders_later_dates_first() {
		let old = Project::new("Old", "", "backend", "2021-01-01");
		let new = Project::new("New", "", "backend", "2023-01-01");
		assert_eq!(SortKey::Newest.compare(&new, &old), Ordering::Less);
		assert_eq!(SortKey::Oldest.compare(&new, &old), Ordering::Greater);
	}
}
