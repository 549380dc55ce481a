//! Log setup for the `folio` binary.
//!
//! Logs go to stderr so that plain and JSON output on stdout stay clean.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `folio=debug`.
pub const LOG_ENV: &str = "FOLIO_LOG";

/// Map the number of `-v` flags to a level. Warnings are always shown.
#[must_use]
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
	match verbosity {
		0 => LevelFilter::WARN,
		1 => LevelFilter::INFO,
		2 => LevelFilter::DEBUG,
		_ => LevelFilter::TRACE,
	}
}

/// Install the global subscriber. `FOLIO_LOG` wins over `verbosity` when set.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn initialize(verbosity: u8) {
	let filter = EnvFilter::builder()
		.with_default_directive(level_for_verbosity(verbosity).into())
		.with_env_var(LOG_ENV)
		.from_env_lossy();

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verbosity_raises_level() {
		assert_eq!(level_for_verbosity(0), LevelFilter::WARN);
		assert_eq!(level_for_verbosity(2), LevelFilter::DEBUG);
		assert_eq!(level_for_verbosity(9), LevelFilter::TRACE);
	}

	#[test]
	fn initialize_twice_does_not_panic() {
		initialize(0);
		initialize(3);
	}
}
