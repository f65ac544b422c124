//! Route `log` records to a file while the terminal belongs to the UI.

use std::fs::{self, OpenOptions};
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Install the global logger writing to `file`.
///
/// `RUST_LOG` takes precedence over the configured `level`. Without a file the
/// logger stays uninstalled and records are discarded.
pub fn initialize(file: Option<&Path>, level: Option<LevelFilter>) -> Result<()> {
	let Some(path) = file else {
		return Ok(());
	};
	if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	let sink = OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	let default_level = level.unwrap_or(LevelFilter::Info).to_string().to_lowercase();
	Builder::from_env(Env::default().default_filter_or(default_level))
		.format_timestamp_millis()
		.target(Target::Pipe(Box::new(sink)))
		.try_init()
		.context("failed to install logger")?;

	log::debug!("logging to {}", path.display());
	Ok(())
}
