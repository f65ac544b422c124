use std::path::PathBuf;
use std::time::Duration;

use facet_range_core::RangeFilter;
use facet_range_tui::AppOptions;
use log::LevelFilter;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub dataset: PathBuf,
	pub debounce: Duration,
	pub theme: Option<String>,
	pub title: String,
	pub step: i64,
	pub large_step: i64,
	pub hit_limit: usize,
	pub initial_filters: Vec<RangeFilter>,
	pub log_file: Option<PathBuf>,
	pub log_level: Option<LevelFilter>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}

	/// Session options for the terminal application.
	pub fn app_options(&self) -> AppOptions {
		AppOptions {
			debounce: self.debounce,
			step: self.step,
			large_step: self.large_step,
			hit_limit: self.hit_limit,
			title: self.title.clone(),
			initial_filters: self.initial_filters.clone(),
		}
	}
}
