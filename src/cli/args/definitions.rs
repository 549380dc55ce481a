use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{KindArg, OutputFormat, SortArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `folio` binary.
#[derive(Parser, Debug)]
#[command(
	name = "folio",
	version,
	long_version = long_version(),
	about = "Search, filter and sort portfolio projects and blog posts",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		value_enum,
		value_name = "KIND",
		help = "Catalog to search (default: projects)"
	)]
	pub(crate) kind: Option<KindArg>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "FOLIO_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'f',
		long = "file",
		value_name = "PATH",
		help = "Load the catalog from a JSON file (default: built-in data)"
	)]
	pub(crate) file: Option<PathBuf>,
	#[arg(
		short = 'q',
		long,
		value_name = "TEXT",
		help = "Match titles, descriptions and tags case-insensitively (default: empty)"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		short = 'k',
		long,
		value_name = "NAME",
		help = "Only keep records in this category, or \"all\" (default: all)"
	)]
	pub(crate) category: Option<String>,
	#[arg(
		short = 's',
		long,
		value_enum,
		help = "Order results (default: newest for projects, none for posts)"
	)]
	pub(crate) sort: Option<SortArg>,
	#[arg(
		short = 'L',
		long = "list-categories",
		help = "List the categories of the selected catalog and exit (default: disabled)"
	)]
	pub(crate) list_categories: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		help = "Choose how to print the results (default: plain)"
	)]
	pub(crate) output: Option<OutputFormat>,
	#[arg(
		short = 'v',
		long = "verbose",
		action = ArgAction::Count,
		help = "Increase log verbosity, repeat for more (default: warnings only)"
	)]
	pub(crate) verbose: u8,
}
