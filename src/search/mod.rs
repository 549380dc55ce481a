//! The catalog filter engine.
//!
//! Every entry point is a pure function of `(catalog, criteria)`: the catalog
//! is only borrowed, results come back as references in display order, and
//! nothing is cached between calls.

pub mod collate;
pub mod date;

use std::cmp::{Ordering, Reverse};

use tracing::trace;

use crate::types::{CategoryFilter, Criteria, Record, SortKey};

/// Filter `catalog` by `criteria` and order the survivors by its sort key.
///
/// Without a sort key the catalog order is preserved. Sorting is stable, so
/// records comparing equal keep their catalog order.
pub fn evaluate<'a, R: Record>(catalog: &'a [R], criteria: &Criteria) -> Vec<&'a R> {
	let mut results = filter(catalog, criteria);
	if let Some(key) = criteria.sort {
		sort_results(&mut results, key);
	}
	trace!(
		total = catalog.len(),
		matched = results.len(),
		query = %criteria.query,
		category = %criteria.category,
		"evaluated catalog"
	);
	results
}

/// Filter `catalog` by `criteria` and stable-sort with a caller supplied
/// comparator. The sort key carried by `criteria` is ignored.
pub fn evaluate_by<'a, R, F>(catalog: &'a [R], criteria: &Criteria, mut compare: F) -> Vec<&'a R>
where
	R: Record,
	F: FnMut(&R, &R) -> Ordering,
{
	let mut results = filter(catalog, criteria);
	results.sort_by(|a, b| compare(*a, *b));
	results
}

/// Same as [`evaluate`] but clones the results.
pub fn evaluate_owned<R: Record + Clone>(catalog: &[R], criteria: &Criteria) -> Vec<R> {
	evaluate(catalog, criteria).into_iter().cloned().collect()
}

/// Return true when `record` passes both the search and the category filter.
pub fn matches<R: Record + ?Sized>(record: &R, criteria: &Criteria) -> bool {
	let needle = criteria.query.to_lowercase();
	matches_lowered(record, &needle, &criteria.category)
}

fn filter<'a, R: Record>(catalog: &'a [R], criteria: &Criteria) -> Vec<&'a R> {
	let needle = criteria.query.to_lowercase();
	catalog
		.iter()
		.filter(|record| matches_lowered(*record, &needle, &criteria.category))
		.collect()
}

fn matches_lowered<R: Record + ?Sized>(record: &R, needle: &str, category: &CategoryFilter) -> bool {
	category.accepts(record.category()) && matches_query(record, needle)
}

fn matches_query<R: Record + ?Sized>(record: &R, needle: &str) -> bool {
	if needle.is_empty() {
		return true;
	}
	contains_folded(record.title(), needle)
		|| contains_folded(record.description(), needle)
		|| record.tags().iter().any(|tag| contains_folded(tag, needle))
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
	haystack.to_lowercase().contains(needle)
}

/// Sort keys are computed once per record; `sort_by_cached_key` is stable.
fn sort_results<R: Record>(results: &mut [&R], key: SortKey) {
	match key {
		SortKey::Newest => results.sort_by_cached_key(|record| Reverse(date::timestamp(record.date()))),
		SortKey::Oldest => results.sort_by_cached_key(|record| date::timestamp(record.date())),
		SortKey::TitleAscending => {
			results.sort_by_cached_key(|record| collate::CollationKey::new(record.title()));
		}
		SortKey::TitleDescending => {
			results.sort_by_cached_key(|record| Reverse(collate::CollationKey::new(record.title())));
		}
	}
}
