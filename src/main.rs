mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use folio::logging;
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	logging::initialize(cli.verbose);

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let workflow = SearchWorkflow::from_config(&resolved)?;

	if cli.list_categories {
		for category in workflow.categories() {
			println!("{category}");
		}
		return Ok(());
	}

	run_search(resolved.output, &workflow)
}

/// Evaluate the configured criteria and print the results in the chosen format.
fn run_search(format: OutputFormat, workflow: &SearchWorkflow) -> Result<()> {
	let outcome = workflow.run();

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
