use std::env;
use std::path::PathBuf;

/// Anchor a relative path at the current working directory.
pub(super) fn absolutize(path: PathBuf) -> PathBuf {
	if path.is_absolute() {
		return path;
	}
	match env::current_dir() {
		Ok(current) => current.join(path),
		Err(_) => path,
	}
}
