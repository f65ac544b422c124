use std::time::Duration;

use facet_range_core::{RANGE_MAX, RANGE_MIN};

use super::{ConfigError, ConfigSources, ResolvedConfig};

const MAX_DEBOUNCE: Duration = Duration::from_secs(60);

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.debounce > MAX_DEBOUNCE {
		return Err(ConfigError::invalid(
			"search.debounce_ms",
			config.debounce.as_millis().to_string(),
			sources.source_for_debounce(),
			"must not exceed 60000",
		));
	}

	let domain = RANGE_MAX - RANGE_MIN;
	if !(1..=domain).contains(&config.step) {
		return Err(ConfigError::invalid(
			"ui.step",
			config.step.to_string(),
			sources.source_for_step(),
			format!("must be between 1 and {domain}"),
		));
	}
	if !(1..=domain).contains(&config.large_step) {
		return Err(ConfigError::invalid(
			"ui.large_step",
			config.large_step.to_string(),
			sources.source_for_large_step(),
			format!("must be between 1 and {domain}"),
		));
	}

	if let Some(theme) = &config.theme
		&& facet_range_tui::style::by_name(theme).is_none()
	{
		return Err(ConfigError::invalid(
			"ui.theme",
			theme.clone(),
			sources.source_for_theme(),
			format!(
				"unknown theme; available: {}",
				facet_range_tui::style::names().join(", ")
			),
		));
	}

	Ok(())
}
