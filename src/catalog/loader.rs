use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use super::{Catalog, CatalogError};
use crate::types::Record;

/// Load a catalog from a JSON file containing an array of records.
///
/// # Errors
///
/// Returns [`CatalogError::Read`] when the file cannot be read and
/// [`CatalogError::Parse`] when its contents do not deserialize into `R`.
pub fn load_json<R>(path: impl AsRef<Path>) -> Result<Catalog<R>, CatalogError>
where
	R: Record + DeserializeOwned,
{
	let path = path.as_ref();
	let contents = fs::read_to_string(path).map_err(|source| CatalogError::Read {
		path: path.to_path_buf(),
		source,
	})?;
	let records: Vec<R> = serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
		path: path.to_path_buf(),
		source,
	})?;
	debug!(path = %path.display(), records = records.len(), "loaded catalog file");
	Ok(Catalog::new(records))
}
