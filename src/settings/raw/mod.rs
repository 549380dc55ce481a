use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::{CliArgs, OutputFormat};

use super::resolved::{ConfigError, ConfigSources, ResolvedConfig, Setting, SettingSource};
use super::resolved::{CATALOG_FILE, CATALOG_KIND, OUTPUT_FORMAT, SEARCH_CATEGORY, SEARCH_SORT};

mod catalog;
mod search;

use catalog::CatalogSection;
use search::SearchSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	catalog: CatalogSection,
	search: SearchSection,
	output: OutputSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct OutputSection {
	format: Option<String>,
}

impl OutputSection {
	fn resolve(self, sources: &ConfigSources) -> Result<OutputFormat, ConfigError> {
		let Some(value) = self.format else {
			return Ok(OutputFormat::default());
		};
		OutputFormat::from_id(&value).ok_or_else(|| {
			ConfigError::invalid(
				OUTPUT_FORMAT.key,
				value,
				sources.source_for(&OUTPUT_FORMAT),
				"expected plain or json",
			)
		})
	}
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.catalog.apply_cli_overrides(cli);
		self.search.apply_cli_overrides(cli);
		if let Some(format) = cli.output {
			self.output.format = Some(format.as_str().to_string());
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources::from_entries([
			detect_source(cli.kind.is_some(), self.catalog.kind.is_some(), &CATALOG_KIND),
			detect_source(cli.file.is_some(), self.catalog.file.is_some(), &CATALOG_FILE),
			detect_source(
				cli.category.is_some(),
				self.search.category.is_some(),
				&SEARCH_CATEGORY,
			),
			detect_source(cli.sort.is_some(), self.search.sort.is_some(), &SEARCH_SORT),
			detect_source(cli.output.is_some(), self.output.format.is_some(), &OUTPUT_FORMAT),
		]);

		let (kind, file) = self.catalog.resolve(&sources).map_err(Error::new)?;
		let criteria = self.search.resolve(kind, &sources).map_err(Error::new)?;
		let output = self.output.resolve(&sources).map_err(Error::new)?;

		let config = ResolvedConfig {
			kind,
			file,
			criteria,
			output,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	setting: &Setting,
) -> Option<(&'static str, SettingSource)> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some((setting.key, SettingSource::CliFlag(setting.flag)));
	}

	if env::var_os(setting.env).is_some() {
		return Some((setting.key, SettingSource::Environment(setting.env)));
	}

	Some((setting.key, SettingSource::ConfigKey(setting.key)))
}
