//! Local search backend: dataset evaluation, the worker thread and the
//! client that widgets commit filters to.

mod client;
mod index;
pub mod runtime;

use serde::Serialize;

pub use client::SearchClient;
pub use index::{Document, FacetSpec, Hit, SearchIndex, SearchResults};

use crate::filter::RangeFilter;

/// Result of an interactive session, reported once the UI exits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOutcome {
	/// Whether the user confirmed the filters rather than cancelling.
	pub accepted: bool,
	/// Hits matching the committed filters at exit time.
	pub total_hits: usize,
	pub filters: Vec<RangeFilter>,
}
