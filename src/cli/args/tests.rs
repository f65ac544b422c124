use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser};
use facet_range_core::RangeFilter;

use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["facet-range"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.dataset.is_none());
	assert!(parsed.filters.is_empty());
}

#[test]
fn filters_and_overrides_are_parsed() {
	let parsed = CliArgs::try_parse_from([
		"facet-range",
		"books.json",
		"--filter",
		"rating=20..60",
		"-f",
		"price=0..35",
		"--debounce-ms",
		"250",
		"--output",
		"json",
	])
	.expect("parses");

	assert_eq!(parsed.dataset, Some(PathBuf::from("books.json")));
	assert_eq!(
		parsed.filters,
		[
			RangeFilter::new("rating", 20, 60),
			RangeFilter::new("price", 0, 35),
		]
	);
	assert_eq!(parsed.debounce_ms, Some(250));
	assert_eq!(parsed.output, OutputFormat::Json);
}

#[test]
fn malformed_filters_are_rejected() {
	for bad in ["rating", "rating=20", "rating=a..b", "rating=60..20", "=1..2"] {
		let result = CliArgs::try_parse_from(["facet-range", "--filter", bad]);
		assert!(result.is_err(), "accepted {bad}");
	}
}
