use std::fmt::Write;

use anyhow::Result;
use serde_json::json;
use unicode_width::UnicodeWidthStr;

use crate::workflow::{ResultRow, SearchOutcome};

const HEADERS: [&str; 4] = ["TITLE", "CATEGORY", "DATE", "TAGS"];
const COLUMN_GAP: &str = "  ";

/// Print a plain-text table of the search outcome.
pub(crate) fn print_plain(outcome: &SearchOutcome) {
	print!("{}", format_outcome_plain(outcome));
}

/// Render the outcome as a width-aligned table followed by a result count.
pub(crate) fn format_outcome_plain(outcome: &SearchOutcome) -> String {
	let mut out = String::new();

	if outcome.results.is_empty() {
		let _ = writeln!(out, "No results found");
		let _ = writeln!(out, "Try adjusting your search or filter criteria");
		return out;
	}

	let rows = outcome.results.rows();
	let widths = column_widths(&rows);

	write_line(&mut out, &HEADERS, &widths);
	for row in &rows {
		let cells = [
			row.title.as_str(),
			row.category.as_str(),
			row.date.as_str(),
			row.tags.as_str(),
		];
		write_line(&mut out, &cells, &widths);
	}

	let _ = writeln!(out);
	let _ = writeln!(
		out,
		"{} of {} {}",
		rows.len(),
		outcome.total,
		outcome.kind
	);
	out
}

fn column_widths(rows: &[ResultRow]) -> [usize; 4] {
	let mut widths = HEADERS.map(|header| header.width());
	for row in rows {
		let cells = [&row.title, &row.category, &row.date, &row.tags];
		for (width, cell) in widths.iter_mut().zip(cells) {
			*width = (*width).max(cell.width());
		}
	}
	widths
}

fn write_line(out: &mut String, cells: &[&str; 4], widths: &[usize; 4]) {
	let last = cells.len() - 1;
	for (index, (cell, width)) in cells.iter().zip(widths).enumerate() {
		if index == last {
			out.push_str(cell);
		} else {
			out.push_str(cell);
			out.push_str(&" ".repeat(width.saturating_sub(cell.width())));
			out.push_str(COLUMN_GAP);
		}
	}
	out.push('\n');
}

/// Format the search outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	let results = outcome.results.to_json()?;
	let payload = json!({
		"kind": outcome.kind,
		"criteria": outcome.criteria,
		"count": outcome.results.len(),
		"total": outcome.total,
		"results": results,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the search outcome.
pub(crate) fn print_json(outcome: &SearchOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use folio::{CatalogKind, Criteria, Project, SortKey};
	use serde_json::Value;

	use super::*;
	use crate::workflow::SearchResults;

	fn outcome(results: Vec<Project>) -> SearchOutcome {
		SearchOutcome {
			kind: CatalogKind::Projects,
			criteria: Criteria::new()
				.with_query("dash")
				.with_sort(Some(SortKey::Newest)),
			total: 12,
			results: SearchResults::Projects(results),
		}
	}

	#[test]
	fn json_format_includes_criteria_and_records() {
		let project = Project::new("Weather Dashboard", "Charts", "frontend", "2022-11-20")
			.with_tags(["API"]);
		let json = format_outcome_json(&outcome(vec![project])).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");

		assert_eq!(value["kind"], "projects");
		assert_eq!(value["criteria"]["category"], "all");
		assert_eq!(value["criteria"]["sort"], "newest");
		assert_eq!(value["count"], 1);
		assert_eq!(value["total"], 12);
		assert_eq!(value["results"][0]["title"], "Weather Dashboard");
	}

	#[test]
	fn plain_format_aligns_columns() {
		let projects = vec![
			Project::new("Weather Dashboard", "", "frontend", "2022-11-20").with_tags(["API"]),
			Project::new("Blog CMS", "", "backend", "2022-09-05").with_tags(["Node.js", "Express"]),
		];
		let text = format_outcome_plain(&outcome(projects));
		let lines: Vec<&str> = text.lines().collect();

		assert_eq!(lines[0], "TITLE              CATEGORY  DATE        TAGS");
		assert_eq!(lines[1], "Weather Dashboard  frontend  2022-11-20  API");
		assert_eq!(lines[2], "Blog CMS           backend   2022-09-05  Node.js, Express");
		assert_eq!(lines[4], "2 of 12 projects");
	}

	#[test]
	fn empty_outcome_prints_hint() {
		let text = format_outcome_plain(&outcome(Vec::new()));
		assert!(text.starts_with("No results found"));
		assert!(text.contains("Try adjusting your search or filter criteria"));
	}
}
