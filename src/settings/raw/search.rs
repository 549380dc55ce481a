use folio::{CatalogKind, Criteria, SortKey};
use serde::Deserialize;

use super::super::resolved::{ConfigError, ConfigSources, SEARCH_SORT};
use crate::cli::{CliArgs, NO_SORT};

/// Initial criteria as read from disk. Values are kept as strings until
/// resolution so that errors can name where they came from.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) query: Option<String>,
	pub(super) category: Option<String>,
	pub(super) sort: Option<String>,
}

impl SearchSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(query) = cli.query.clone() {
			self.query = Some(query);
		}
		if let Some(category) = cli.category.clone() {
			self.category = Some(category);
		}
		if let Some(sort) = cli.sort {
			self.sort = Some(sort.as_str().to_string());
		}
	}

	pub(super) fn resolve(
		self,
		kind: CatalogKind,
		sources: &ConfigSources,
	) -> Result<Criteria, ConfigError> {
		let sort = match self.sort {
			None => default_sort(kind),
			Some(value) if value.trim() == NO_SORT => None,
			Some(value) => Some(value.trim().parse::<SortKey>().map_err(|err| {
				ConfigError::invalid(
					SEARCH_SORT.key,
					value.clone(),
					sources.source_for(&SEARCH_SORT),
					err.to_string(),
				)
			})?),
		};

		let mut criteria = Criteria::new()
			.with_query(self.query.unwrap_or_default())
			.with_sort(sort);
		if let Some(category) = self.category {
			criteria = criteria.with_category(category);
		}
		Ok(criteria)
	}
}

/// Projects open sorted newest first; posts keep their catalog order.
pub(super) fn default_sort(kind: CatalogKind) -> Option<SortKey> {
	match kind {
		CatalogKind::Projects => Some(SortKey::Newest),
		CatalogKind::Posts => None,
	}
}
