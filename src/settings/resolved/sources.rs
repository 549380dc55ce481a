use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where a configurable value can come from.
#[derive(Debug)]
pub(crate) struct Setting {
	pub(crate) key: &'static str,
	pub(crate) env: &'static str,
	pub(crate) flag: &'static str,
}

pub(crate) const CATALOG_KIND: Setting = Setting {
	key: "catalog.kind",
	env: "FOLIO__CATALOG__KIND",
	flag: "KIND",
};

pub(crate) const CATALOG_FILE: Setting = Setting {
	key: "catalog.file",
	env: "FOLIO__CATALOG__FILE",
	flag: "--file",
};

pub(crate) const SEARCH_CATEGORY: Setting = Setting {
	key: "search.category",
	env: "FOLIO__SEARCH__CATEGORY",
	flag: "--category",
};

pub(crate) const SEARCH_SORT: Setting = Setting {
	key: "search.sort",
	env: "FOLIO__SEARCH__SORT",
	flag: "--sort",
};

pub(crate) const OUTPUT_FORMAT: Setting = Setting {
	key: "output.format",
	env: "FOLIO__OUTPUT__FORMAT",
	flag: "--output",
};

/// The detected origin of every explicitly provided setting.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	entries: Vec<(&'static str, SettingSource)>,
}

impl ConfigSources {
	pub(crate) fn from_entries<I>(entries: I) -> Self
	where
		I: IntoIterator<Item = Option<(&'static str, SettingSource)>>,
	{
		Self {
			entries: entries.into_iter().flatten().collect(),
		}
	}

	/// Origin of `setting`, assuming a config key when nothing was recorded.
	pub(crate) fn source_for(&self, setting: &Setting) -> SettingSource {
		self.entries
			.iter()
			.find(|(key, _)| *key == setting.key)
			.map(|(_, source)| source.clone())
			.unwrap_or(SettingSource::ConfigKey(setting.key))
	}
}
