use anyhow::{Context, Result};
use facet_range_core::{FilterOutcome, SearchIndex};
use facet_range_tui::{AppOptions, Theme, style};

use crate::settings::ResolvedConfig;

/// Coordinates loading the dataset and running the interactive session.
pub(crate) struct FilterWorkflow {
	index: SearchIndex,
	options: AppOptions,
	theme: Theme,
}

impl FilterWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let index = SearchIndex::from_path(&config.dataset)
			.with_context(|| format!("failed to load dataset {}", config.dataset.display()))?;
		log::info!(
			"loaded {} documents and {} facets from {}",
			index.document_count(),
			index.facet_specs().len(),
			config.dataset.display()
		);

		let theme = match config.theme.as_deref() {
			Some(name) => style::by_name(name)
				.with_context(|| format!("unknown theme '{name}'"))?,
			None => style::default_theme(),
		};

		Ok(Self {
			options: config.app_options(),
			index,
			theme,
		})
	}

	pub(crate) fn run(self) -> Result<FilterOutcome> {
		facet_range_tui::run(self.index, self.options, self.theme)
	}
}
