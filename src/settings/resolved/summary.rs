use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	print!("{}", format_summary(config));
}

fn format_summary(config: &ResolvedConfig) -> String {
	let mut lines = vec![
		"Effective configuration:".to_string(),
		format!("  Dataset: {}", config.dataset.display()),
		format!("  Title: {}", config.title),
		format!("  Debounce: {} ms", config.debounce.as_millis()),
		format!(
			"  UI theme: {}",
			config.theme.as_deref().unwrap_or("(use the default)")
		),
		format!("  Step: {} (large: {})", config.step, config.large_step),
		format!("  Hit limit: {}", config.hit_limit),
	];
	for filter in &config.initial_filters {
		lines.push(format!(
			"  Initial filter: {}={}..{}",
			filter.id, filter.min, filter.max
		));
	}
	lines.push(match &config.log_file {
		Some(path) => format!("  Log file: {}", path.display()),
		None => "  Log file: (disabled)".to_string(),
	});
	if let Some(level) = config.log_level {
		lines.push(format!("  Log level: {level}"));
	}

	let mut summary = lines.join("\n");
	summary.push('\n');
	summary
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;
	use std::time::Duration;

	use facet_range_core::RangeFilter;
	use log::LevelFilter;

	use super::*;

	#[test]
	fn summary_lists_effective_values() {
		let config = ResolvedConfig {
			dataset: PathBuf::from("/data/books.json"),
			debounce: Duration::from_millis(250),
			theme: Some("paper".into()),
			title: "books.json".into(),
			step: 2,
			large_step: 20,
			hit_limit: 5,
			initial_filters: vec![RangeFilter::new("rating", 20, 60)],
			log_file: None,
			log_level: Some(LevelFilter::Debug),
		};

		insta::assert_snapshot!(format_summary(&config), @r"
		Effective configuration:
		  Dataset: /data/books.json
		  Title: books.json
		  Debounce: 250 ms
		  UI theme: paper
		  Step: 2 (large: 20)
		  Hit limit: 5
		  Initial filter: rating=20..60
		  Log file: (disabled)
		  Log level: DEBUG
		");
	}
}
