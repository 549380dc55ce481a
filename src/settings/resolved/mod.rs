use std::path::PathBuf;

use folio::{CatalogKind, Criteria};

use crate::cli::OutputFormat;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{
	CATALOG_FILE, CATALOG_KIND, ConfigSources, OUTPUT_FORMAT, SEARCH_CATEGORY, SEARCH_SORT,
	Setting, SettingSource,
};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub(crate) struct ResolvedConfig {
	pub(crate) kind: CatalogKind,
	pub(crate) file: Option<PathBuf>,
	pub(crate) criteria: Criteria,
	pub(crate) output: OutputFormat,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub(crate) fn print_summary(&self) {
		summary::print_summary(self);
	}
}
