use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};
use facet_range_core::RangeFilter;

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `facet-range` binary.
#[derive(Parser, Debug)]
#[command(
	name = "facet-range",
	version,
	long_version = long_version(),
	about = "Narrow a JSON dataset with range-slider facets in the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		value_name = "DATASET",
		help = "JSON dataset with facets and documents (default: data.path from configuration)"
	)]
	pub(crate) dataset: Option<PathBuf>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "FACET_RANGE_CONFIG",
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
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'd',
		long = "debounce-ms",
		value_name = "MS",
		help = "Quiet period before a slider commits its range (default: 400)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		short = 'f',
		long = "filter",
		value_name = "ID=MIN..MAX",
		action = ArgAction::Append,
		help = "Initial selection for a facet, repeatable (default: none)"
	)]
	pub(crate) filters: Vec<RangeFilter>,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		long = "log-file",
		value_name = "PATH",
		help = "Write logs to this file (default: facet-range.log in the cache directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
}
