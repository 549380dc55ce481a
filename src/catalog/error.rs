use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a catalog from disk.
#[derive(Debug, Error)]
pub enum CatalogError {
	/// The catalog file could not be read.
	#[error("failed to read catalog {}", path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The catalog file is not a JSON array of records.
	#[error("failed to parse catalog {}", path.display())]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
}

impl CatalogError {
	#[must_use]
	pub fn path(&self) -> &std::path::Path {
		match self {
			Self::Read { path, .. } | Self::Parse { path, .. } => path,
		}
	}
}
