//! Error types surfaced by the core crate.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to resolve a platform directory.
#[derive(Debug, Error)]
pub enum DirsError {
	#[error("unable to determine project directories for facet-range")]
	Unavailable,
}

/// Problems encountered while loading or validating a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
	#[error("failed to read dataset {path}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("failed to parse dataset JSON")]
	Json(#[from] serde_json::Error),
	#[error("facet id must not be empty (facet labelled '{label}')")]
	EmptyFacetId { label: String },
	#[error("facet id '{0}' is declared more than once")]
	DuplicateFacet(String),
	#[error("facet '{id}' has interval {interval}; expected a positive bucket width")]
	InvalidInterval { id: String, interval: i64 },
}

/// Problems parsing a `ID=MIN..MAX` range filter argument.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterParseError {
	#[error("expected ID=MIN..MAX, missing '=' in '{0}'")]
	MissingEquals(String),
	#[error("filter id is empty in '{0}'")]
	EmptyId(String),
	#[error("expected MIN..MAX, missing '..' in '{0}'")]
	MissingRange(String),
	#[error("'{0}' is not an integer bound")]
	InvalidBound(String),
	#[error("range {min}..{max} is inverted")]
	Inverted { min: i64, max: i64 },
}
