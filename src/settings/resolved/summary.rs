use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	print!("{}", render_summary(config));
}

fn render_summary(config: &ResolvedConfig) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	let _ = writeln!(out, "  Catalog: {}", config.kind);
	match &config.file {
		Some(path) => {
			let _ = writeln!(out, "  Catalog file: {}", path.display());
		}
		None => {
			let _ = writeln!(out, "  Catalog file: (built-in)");
		}
	}
	if config.criteria.query.is_empty() {
		let _ = writeln!(out, "  Query: (none)");
	} else {
		let _ = writeln!(out, "  Query: {}", config.criteria.query);
	}
	let _ = writeln!(out, "  Category: {}", config.criteria.category);
	let _ = writeln!(
		out,
		"  Sort: {}",
		config
			.criteria
			.sort
			.map(|key| key.as_str())
			.unwrap_or("(catalog order)")
	);
	let _ = writeln!(out, "  Output: {}", config.output.as_str());
	out
}
