use anyhow::Result;
use folio::catalog::{builtin, load_json};
use folio::{BlogPost, Catalog, CatalogKind, CategoryFilter, Criteria, Project, Record};
use serde_json::Value;
use tracing::{info, warn};

use crate::settings::ResolvedConfig;

/// The catalog selected for this run, seeded once.
enum LoadedCatalog {
	Projects(Catalog<Project>),
	Posts(Catalog<BlogPost>),
}

impl LoadedCatalog {
	fn load(config: &ResolvedConfig) -> Result<Self> {
		let catalog = match (config.kind, &config.file) {
			(CatalogKind::Projects, None) => Self::Projects(builtin::projects()),
			(CatalogKind::Posts, None) => Self::Posts(builtin::posts()),
			(CatalogKind::Projects, Some(path)) => Self::Projects(load_json(path)?),
			(CatalogKind::Posts, Some(path)) => Self::Posts(load_json(path)?),
		};
		info!(kind = %config.kind, records = catalog.len(), "catalog ready");

		if config.file.is_none() {
			let unoffered = catalog.unoffered_categories();
			if !unoffered.is_empty() {
				warn!(?unoffered, "records carry categories the selector does not offer");
			}
		}
		Ok(catalog)
	}

	/// Categories present in a built-in catalog but absent from its selector list.
	fn unoffered_categories(&self) -> Vec<String> {
		let unoffered = match self {
			Self::Projects(catalog) => catalog.categories_outside(&builtin::PROJECT_CATEGORIES),
			Self::Posts(catalog) => catalog.categories_outside(&builtin::POST_CATEGORIES),
		};
		unoffered.into_iter().map(str::to_string).collect()
	}

	fn len(&self) -> usize {
		match self {
			Self::Projects(catalog) => catalog.len(),
			Self::Posts(catalog) => catalog.len(),
		}
	}

	fn categories(&self) -> Vec<String> {
		let categories = match self {
			Self::Projects(catalog) => catalog.categories(),
			Self::Posts(catalog) => catalog.categories(),
		};
		categories.into_iter().map(str::to_string).collect()
	}

	fn knows_category(&self, category: &str) -> bool {
		match self {
			Self::Projects(catalog) => catalog.knows_category(category),
			Self::Posts(catalog) => catalog.knows_category(category),
		}
	}
}

/// Records that survived filtering, in display order.
#[derive(Debug, Clone)]
pub(crate) enum SearchResults {
	Projects(Vec<Project>),
	Posts(Vec<BlogPost>),
}

/// One line of the plain-text table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResultRow {
	pub(crate) title: String,
	pub(crate) category: String,
	pub(crate) date: String,
	pub(crate) tags: String,
}

impl ResultRow {
	fn from_record<R: Record>(record: &R) -> Self {
		Self {
			title: record.title().to_string(),
			category: record.category().to_string(),
			date: record.date().to_string(),
			tags: record.tags().join(", "),
		}
	}
}

impl SearchResults {
	pub(crate) fn len(&self) -> usize {
		match self {
			Self::Projects(records) => records.len(),
			Self::Posts(records) => records.len(),
		}
	}

	pub(crate) fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub(crate) fn rows(&self) -> Vec<ResultRow> {
		match self {
			Self::Projects(records) => records.iter().map(ResultRow::from_record).collect(),
			Self::Posts(records) => records.iter().map(ResultRow::from_record).collect(),
		}
	}

	pub(crate) fn to_json(&self) -> serde_json::Result<Value> {
		match self {
			Self::Projects(records) => serde_json::to_value(records),
			Self::Posts(records) => serde_json::to_value(records),
		}
	}
}

/// Captures the outcome of one evaluation.
#[derive(Debug, Clone)]
pub(crate) struct SearchOutcome {
	pub(crate) kind: CatalogKind,
	pub(crate) criteria: Criteria,
	pub(crate) total: usize,
	pub(crate) results: SearchResults,
}

/// Coordinates loading the catalog and evaluating the configured criteria.
pub(crate) struct SearchWorkflow {
	kind: CatalogKind,
	catalog: LoadedCatalog,
	criteria: Criteria,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: &ResolvedConfig) -> Result<Self> {
		let catalog = LoadedCatalog::load(config)?;
		Ok(Self {
			kind: config.kind,
			catalog,
			criteria: config.criteria.clone(),
		})
	}

	/// Category selector values: `all` followed by the catalog's categories.
	pub(crate) fn categories(&self) -> Vec<String> {
		let mut values = vec![CategoryFilter::All.to_string()];
		values.extend(self.catalog.categories());
		values
	}

	pub(crate) fn run(&self) -> SearchOutcome {
		if let CategoryFilter::Only(category) = &self.criteria.category
			&& !self.catalog.knows_category(category)
		{
			warn!(
				%category,
				known = ?self.catalog.categories(),
				"category matches no record in the {} catalog",
				self.kind
			);
		}

		let results = match &self.catalog {
			LoadedCatalog::Projects(catalog) => SearchResults::Projects(
				catalog.evaluate(&self.criteria).into_iter().cloned().collect(),
			),
			LoadedCatalog::Posts(catalog) => SearchResults::Posts(
				catalog.evaluate(&self.criteria).into_iter().cloned().collect(),
			),
		};

		info!(matched = results.len(), total = self.catalog.len(), "search complete");

		SearchOutcome {
			kind: self.kind,
			criteria: self.criteria.clone(),
			total: self.catalog.len(),
			results,
		}
	}
}
