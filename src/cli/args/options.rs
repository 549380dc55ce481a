use clap::ValueEnum;
use folio::{CatalogKind, SortKey};

/// Catalogs selectable from the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum KindArg {
	Projects,
	#[value(alias = "blog")]
	Posts,
}

impl KindArg {
	/// Return the identifier consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		CatalogKind::from(self).as_str()
	}
}

impl From<KindArg> for CatalogKind {
	fn from(value: KindArg) -> Self {
		match value {
			KindArg::Projects => CatalogKind::Projects,
			KindArg::Posts => CatalogKind::Posts,
		}
	}
}

/// Sort orders accepted via the command line. `none` keeps catalog order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum SortArg {
	Newest,
	Oldest,
	#[value(name = "a-z")]
	TitleAscending,
	#[value(name = "z-a")]
	TitleDescending,
	#[value(name = "none")]
	Unsorted,
}

impl SortArg {
	pub(crate) fn as_str(self) -> &'static str {
		match self.key() {
			Some(key) => key.as_str(),
			None => NO_SORT,
		}
	}

	pub(crate) fn key(self) -> Option<SortKey> {
		match self {
			SortArg::Newest => Some(SortKey::Newest),
			SortArg::Oldest => Some(SortKey::Oldest),
			SortArg::TitleAscending => Some(SortKey::TitleAscending),
			SortArg::TitleDescending => Some(SortKey::TitleDescending),
			SortArg::Unsorted => None,
		}
	}
}

/// Configuration value that disables sorting.
pub(crate) const NO_SORT: &str = "none";

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	#[default]
	Plain,
	Json,
}

impl OutputFormat {
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			OutputFormat::Plain => "plain",
			OutputFormat::Json => "json",
		}
	}

	/// Parse a format identifier as written in configuration files.
	pub(crate) fn from_id(id: &str) -> Option<Self> {
		<Self as ValueEnum>::from_str(id, true).ok()
	}
}
