use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Error, Result, bail};
use facet_range_core::app_dirs;
use log::LevelFilter;
use serde::Deserialize;

use super::resolved::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};
use crate::cli::CliArgs;

const DEFAULT_DEBOUNCE_MS: u64 = 400;
const DEFAULT_STEP: i64 = 1;
const DEFAULT_LARGE_STEP: i64 = 10;
const DEFAULT_HIT_LIMIT: usize = 50;
const LOG_FILE_NAME: &str = "facet-range.log";

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	data: DataSection,
	search: SearchSection,
	ui: UiSection,
	log: LogSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct DataSection {
	path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SearchSection {
	debounce_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	title: Option<String>,
	step: Option<i64>,
	large_step: Option<i64>,
	hit_limit: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LogSection {
	file: Option<PathBuf>,
	level: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.dataset.clone() {
			self.data.path = Some(path);
		}
		if let Some(debounce_ms) = cli.debounce_ms {
			self.search.debounce_ms = Some(debounce_ms);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(file) = cli.log_file.clone() {
			self.log.file = Some(file);
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			debounce_ms: detect_source(
				cli.debounce_ms.is_some(),
				self.search.debounce_ms.is_some(),
				"FACET_RANGE__SEARCH__DEBOUNCE_MS",
				"--debounce-ms",
				"search.debounce_ms",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"FACET_RANGE__UI__THEME",
				"--theme",
				"ui.theme",
			),
			step: detect_source(
				false,
				self.ui.step.is_some(),
				"FACET_RANGE__UI__STEP",
				"",
				"ui.step",
			),
			large_step: detect_source(
				false,
				self.ui.large_step.is_some(),
				"FACET_RANGE__UI__LARGE_STEP",
				"",
				"ui.large_step",
			),
			log_level: detect_source(
				false,
				self.log.level.is_some(),
				"FACET_RANGE__LOG__LEVEL",
				"",
				"log.level",
			),
		};

		let Some(dataset) = self.data.path else {
			bail!("no dataset given; pass a DATASET path or set data.path in the configuration");
		};

		let log_level = self
			.log
			.level
			.map(|level| {
				level.trim().parse::<LevelFilter>().map_err(|_| {
					ConfigError::invalid(
						"log.level",
						level.clone(),
						sources.source_for_log_level(),
						"expected one of off, error, warn, info, debug, trace",
					)
				})
			})
			.transpose()?;

		let title = self.ui.title.unwrap_or_else(|| default_title_for(&dataset));
		let log_file = self
			.log
			.file
			.or_else(|| app_dirs::get_cache_dir().ok().map(|dir| dir.join(LOG_FILE_NAME)));

		let config = ResolvedConfig {
			dataset,
			debounce: Duration::from_millis(self.search.debounce_ms.unwrap_or(DEFAULT_DEBOUNCE_MS)),
			theme: self.ui.theme,
			title,
			step: self.ui.step.unwrap_or(DEFAULT_STEP),
			large_step: self.ui.large_step.unwrap_or(DEFAULT_LARGE_STEP),
			hit_limit: self.ui.hit_limit.unwrap_or(DEFAULT_HIT_LIMIT),
			initial_filters: cli.filters.clone(),
			log_file,
			log_level,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

/// Title bar text derived from the dataset file name.
fn default_title_for(dataset: &Path) -> String {
	dataset
		.file_name()
		.map_or_else(|| dataset.display().to_string(), |name| name.to_string_lossy().into_owned())
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
