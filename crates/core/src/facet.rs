//! Facet data handed to widgets after each search.

use serde::{Deserialize, Serialize};

/// Display tag of facets rendered as dual-handle range sliders.
pub const RANGE_SLIDER_DISPLAY: &str = "RangeSlider";

/// One bucket of a facet: a label encoding an integer and its hit count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
	pub label: String,
	#[serde(default)]
	pub count: u64,
}

impl Entry {
	pub fn new(label: impl Into<String>, count: u64) -> Self {
		Self {
			label: label.into(),
			count,
		}
	}
}

/// A filterable search attribute together with its current buckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facet {
	pub id: String,
	pub label: String,
	/// Buckets in ascending key order. Absent in the input means no buckets.
	#[serde(default)]
	pub entries: Vec<Entry>,
	/// Name of the widget kind that renders this facet.
	#[serde(default = "default_display")]
	pub display: String,
}

fn default_display() -> String {
	RANGE_SLIDER_DISPLAY.to_string()
}

impl Facet {
	/// Create a range-slider facet without any buckets.
	pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			entries: Vec::new(),
			display: default_display(),
		}
	}

	#[must_use]
	pub fn with_entries(mut self, entries: impl IntoIterator<Item = Entry>) -> Self {
		self.entries = entries.into_iter().collect();
		self
	}

	/// Whether the facet should be rendered as a range slider.
	#[must_use]
	pub fn is_range_slider(&self) -> bool {
		self.display == RANGE_SLIDER_DISPLAY
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_entries_and_display_default() {
		let facet: Facet = serde_json::from_str(r#"{"id":"rating","label":"Rating"}"#).expect("parse");
		assert!(facet.entries.is_empty());
		assert!(facet.is_range_slider());
	}
}
