use super::{CATALOG_FILE, ConfigError, ConfigSources, ResolvedConfig, SEARCH_CATEGORY};

pub(super) fn validate(config: &ResolvedConfig, sources: &ConfigSources) -> Result<(), ConfigError> {
	if let Some(file) = &config.file
		&& !file.is_file()
	{
		return Err(ConfigError::invalid(
			CATALOG_FILE.key,
			file.display().to_string(),
			sources.source_for(&CATALOG_FILE),
			"catalog file does not exist",
		));
	}

	if config.criteria.category.as_str().trim().is_empty() {
		return Err(ConfigError::invalid(
			SEARCH_CATEGORY.key,
			config.criteria.category.as_str(),
			sources.source_for(&SEARCH_CATEGORY),
			"must name a category or \"all\"",
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use folio::{CatalogKind, Criteria};

	use super::super::SettingSource;
	use super::*;
	use crate::cli::OutputFormat;

	fn config(criteria: Criteria, file: Option<PathBuf>) -> ResolvedConfig {
		ResolvedConfig {
			kind: CatalogKind::Projects,
			file,
			criteria,
			output: OutputFormat::Plain,
		}
	}

	#[test]
	fn validation_rejects_missing_catalog_file() {
		let dir = tempfile::tempdir().expect("tempdir");
		let config = config(Criteria::new(), Some(dir.path().join("nope.json")));
		let sources = ConfigSources::from_entries([Some((
			CATALOG_FILE.key,
			SettingSource::CliFlag(CATALOG_FILE.flag),
		))]);

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "catalog.file");
		let message = err.to_string();
		assert!(message.contains("nope.json"));
		assert!(message.contains("CLI flag"));
	}

	#[test]
	fn validation_rejects_blank_category() {
		let config = config(Criteria::new().with_category("  "), None);
		let sources = ConfigSources::from_entries([Some((
			SEARCH_CATEGORY.key,
			SettingSource::Environment(SEARCH_CATEGORY.env),
		))]);

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "search.category");
		assert!(err.to_string().contains("environment variable"));
	}

	#[test]
	fn validation_accepts_defaults() {
		let config = config(Criteria::new(), None);
		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}
}
