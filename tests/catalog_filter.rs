use std::collections::HashSet;

use folio::catalog::builtin;
use folio::search::{collate, date};
use folio::{Criteria, Project, Record, SortKey, evaluate};

fn titles<R: Record>(records: &[&R]) -> Vec<String> {
	records.iter().map(|record| record.title().to_string()).collect()
}

fn two_projects() -> Vec<Project> {
	vec![
		Project::new("Blog CMS", "Markdown blogging", "backend", "2022-09-05").with_tags(["Node.js"]),
		Project::new("Weather Dashboard", "Forecast charts", "frontend", "2022-11-20")
			.with_tags(["API"]),
	]
}

fn every_criteria() -> Vec<Criteria> {
	let mut all = Vec::new();
	for query in ["", "react", "API", "dash", "zzz"] {
		for category in ["all", "frontend", "backend", "fullstack", "Web Development"] {
			for sort in [None]
				.into_iter()
				.chain(SortKey::ALL.into_iter().map(Some))
			{
				all.push(
					Criteria::new()
						.with_query(query)
						.with_category(category)
						.with_sort(sort),
				);
			}
		}
	}
	all
}

#[test]
fn unconstrained_criteria_return_catalog_unchanged() {
	let catalog = builtin::projects();
	let results = evaluate(catalog.records(), &Criteria::new());
	let expected: Vec<&Project> = catalog.records().iter().collect();
	assert_eq!(results, expected);
}

#[test]
fn reapplying_criteria_changes_nothing() {
	let catalog = builtin::projects();
	for criteria in every_criteria() {
		let once = evaluate(catalog.records(), &criteria);
		let twice = evaluate(&once, &criteria);
		let twice: Vec<&Project> = twice.into_iter().copied().collect();
		assert_eq!(once, twice, "criteria {criteria:?}");
	}
}

#[test]
fn categories_partition_the_catalog() {
	let catalog = builtin::projects();
	let mut seen = HashSet::new();
	let mut count = 0;
	for category in catalog.categories() {
		let criteria = Criteria::new().with_category(category);
		for record in evaluate(catalog.records(), &criteria) {
			assert_eq!(record.category, category);
			assert!(seen.insert(record.title.clone()), "{} listed twice", record.title);
			count += 1;
		}
	}
	assert_eq!(count, catalog.len());
}

#[test]
fn title_sorts_are_monotonic() {
	let catalog = builtin::projects();
	let ascending = evaluate(
		catalog.records(),
		&Criteria::new().with_sort(Some(SortKey::TitleAscending)),
	);
	assert!(
		ascending
			.windows(2)
			.all(|pair| collate::compare(&pair[0].title, &pair[1].title).is_le())
	);

	let descending = evaluate(
		catalog.records(),
		&Criteria::new().with_sort(Some(SortKey::TitleDescending)),
	);
	assert!(
		descending
			.windows(2)
			.all(|pair| collate::compare(&pair[0].title, &pair[1].title).is_ge())
	);
}

#[test]
fn date_sorts_are_monotonic() {
	let catalog = builtin::posts();
	let newest = evaluate(
		catalog.records(),
		&Criteria::new().with_sort(Some(SortKey::Newest)),
	);
	assert!(
		newest
			.windows(2)
			.all(|pair| date::timestamp(&pair[0].date) >= date::timestamp(&pair[1].date))
	);

	let oldest = evaluate(
		catalog.records(),
		&Criteria::new().with_sort(Some(SortKey::Oldest)),
	);
	assert!(
		oldest
			.windows(2)
			.all(|pair| date::timestamp(&pair[0].date) <= date::timestamp(&pair[1].date))
	);
}

#[test]
fn query_case_does_not_matter() {
	let catalog = builtin::projects();
	let upper = evaluate(catalog.records(), &Criteria::new().with_query("REACT"));
	let lower = evaluate(catalog.records(), &Criteria::new().with_query("react"));
	assert!(!lower.is_empty());
	assert_eq!(upper, lower);
}

#[test]
fn newest_orders_example_catalog() {
	let catalog = two_projects();
	let criteria = Criteria::new()
		.with_category("all")
		.with_sort(Some(SortKey::Newest));
	assert_eq!(
		titles(&evaluate(&catalog, &criteria)),
		vec!["Weather Dashboard", "Blog CMS"]
	);
}

#[test]
fn node_query_matches_tag() {
	let catalog = two_projects();
	let criteria = Criteria::new().with_query("node").with_category("all");
	assert_eq!(titles(&evaluate(&catalog, &criteria)), vec!["Blog CMS"]);
}

#[test]
fn absent_category_matches_nothing() {
	let catalog = two_projects();
	let criteria = Criteria::new().with_category("fullstack");
	assert!(evaluate(&catalog, &criteria).is_empty());
}

#[test]
fn blog_search_covers_excerpts() {
	let catalog = builtin::posts();
	let criteria = Criteria::new().with_query("styling workflow");
	assert_eq!(
		titles(&evaluate(catalog.records(), &criteria)),
		vec!["Modern CSS Techniques"]
	);
}

#[test]
fn evaluation_does_not_mutate_catalog() {
	let catalog = builtin::projects();
	let before: Vec<Project> = catalog.records().to_vec();
	for criteria in every_criteria() {
		let _ = evaluate(catalog.records(), &criteria);
	}
	assert_eq!(catalog.records(), before.as_slice());
}
