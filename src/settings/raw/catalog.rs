use std::path::PathBuf;

use folio::CatalogKind;
use serde::Deserialize;

use super::super::resolved::{CATALOG_KIND, ConfigError, ConfigSources};
use super::super::util::absolutize;
use crate::cli::CliArgs;

/// Catalog selection as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct CatalogSection {
	pub(super) kind: Option<String>,
	pub(super) file: Option<PathBuf>,
}

impl CatalogSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(kind) = cli.kind {
			self.kind = Some(kind.as_str().to_string());
		}
		if let Some(file) = cli.file.clone() {
			self.file = Some(file);
		}
	}

	pub(super) fn resolve(
		self,
		sources: &ConfigSources,
	) -> Result<(CatalogKind, Option<PathBuf>), ConfigError> {
		let kind = match self.kind {
			None => CatalogKind::default(),
			Some(value) => CatalogKind::from_id(value.trim()).ok_or_else(|| {
				ConfigError::invalid(
					CATALOG_KIND.key,
					value,
					sources.source_for(&CATALOG_KIND),
					"expected projects or posts",
				)
			})?,
		};

		Ok((kind, self.file.map(absolutize)))
	}
}
