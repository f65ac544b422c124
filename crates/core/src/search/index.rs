//! In-memory documents and the range/histogram evaluation run by the worker.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::{fs, io};

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::DatasetError;
use crate::facet::{Entry, Facet, RANGE_SLIDER_DISPLAY};
use crate::filter::RangeFilter;
use crate::range::{RANGE_MAX, RANGE_MIN};

/// A single JSON object from the dataset.
pub type Document = Map<String, Value>;

const DEFAULT_TITLE_FIELD: &str = "title";
const DEFAULT_INTERVAL: i64 = 10;

/// Declaration of a numeric facet over a document field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FacetSpec {
	pub id: String,
	pub label: String,
	/// Document field holding the value; defaults to the facet id.
	#[serde(default)]
	pub field: Option<String>,
	/// Histogram bucket width.
	#[serde(default = "default_interval")]
	pub interval: i64,
	#[serde(default = "default_display")]
	pub display: String,
}

fn default_interval() -> i64 {
	DEFAULT_INTERVAL
}

fn default_display() -> String {
	RANGE_SLIDER_DISPLAY.to_string()
}

impl FacetSpec {
	pub fn new(id: impl Into<String>, label: impl Into<String>, interval: i64) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			field: None,
			interval,
			display: default_display(),
		}
	}

	#[must_use]
	pub fn field(&self) -> &str {
		self.field.as_deref().unwrap_or(&self.id)
	}

	/// The facet as widgets see it before any search has run.
	#[must_use]
	pub fn to_facet(&self) -> Facet {
		Facet {
			id: self.id.clone(),
			label: self.label.clone(),
			entries: Vec::new(),
			display: self.display.clone(),
		}
	}
}

#[derive(Debug, Deserialize)]
struct DatasetFile {
	#[serde(default = "default_title_field")]
	title_field: String,
	facets: Vec<FacetSpec>,
	#[serde(default)]
	documents: Vec<Document>,
}

fn default_title_field() -> String {
	DEFAULT_TITLE_FIELD.to_string()
}

/// One matching document as shown in the result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
	pub title: String,
}

/// Everything a search produces: hits and refreshed facets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResults {
	pub total: usize,
	/// First hits up to the requested limit, in dataset order.
	pub hits: Vec<Hit>,
	pub facets: Vec<Facet>,
}

/// Documents plus the facets declared over them.
#[derive(Debug, Clone)]
pub struct SearchIndex {
	title_field: String,
	facets: Vec<FacetSpec>,
	documents: Vec<Document>,
}

impl SearchIndex {
	/// Build an index, validating the facet declarations.
	pub fn new(
		title_field: impl Into<String>,
		facets: Vec<FacetSpec>,
		documents: Vec<Document>,
	) -> Result<Self, DatasetError> {
		let mut seen = HashSet::new();
		for spec in &facets {
			if spec.id.trim().is_empty() {
				return Err(DatasetError::EmptyFacetId {
					label: spec.label.clone(),
				});
			}
			if !seen.insert(spec.id.as_str()) {
				return Err(DatasetError::DuplicateFacet(spec.id.clone()));
			}
			if spec.interval <= 0 {
				return Err(DatasetError::InvalidInterval {
					id: spec.id.clone(),
					interval: spec.interval,
				});
			}
		}

		Ok(Self {
			title_field: title_field.into(),
			facets,
			documents,
		})
	}

	pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
		let file = fs::File::open(path).map_err(|source| DatasetError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_reader(io::BufReader::new(file))
	}

	pub fn from_reader(reader: impl io::Read) -> Result<Self, DatasetError> {
		let file: DatasetFile = serde_json::from_reader(reader)?;
		Self::new(file.title_field, file.facets, file.documents)
	}

	#[must_use]
	pub fn facet_specs(&self) -> &[FacetSpec] {
		&self.facets
	}

	#[must_use]
	pub fn document_count(&self) -> usize {
		self.documents.len()
	}

	/// Run `filters` against every document.
	///
	/// Facet entries are computed over the documents matching every filter
	/// except the facet's own, so a slider keeps showing where values exist
	/// outside its current selection.
	#[must_use]
	pub fn execute(&self, filters: &[RangeFilter], hit_limit: usize) -> SearchResults {
		let bound: Vec<(&RangeFilter, &str)> = filters
			.iter()
			.filter_map(|filter| {
				let Some(spec) = self.facets.iter().find(|spec| spec.id == filter.id) else {
					log::debug!("ignoring filter for unknown facet '{}'", filter.id);
					return None;
				};
				Some((filter, spec.field()))
			})
			.collect();

		let mut total = 0;
		let mut hits = Vec::new();
		for (index, document) in self.documents.iter().enumerate() {
			if matches_all(document, &bound, None) {
				total += 1;
				if hits.len() < hit_limit {
					hits.push(Hit {
						title: self.title_of(document, index),
					});
				}
			}
		}

		let facets = self
			.facets
			.iter()
			.map(|spec| {
				let entries = self.histogram(spec, &bound);
				spec.to_facet().with_entries(entries)
			})
			.collect();

		SearchResults {
			total,
			hits,
			facets,
		}
	}

	fn histogram(&self, spec: &FacetSpec, bound: &[(&RangeFilter, &str)]) -> Vec<Entry> {
		let mut buckets: BTreeMap<i64, u64> = (RANGE_MIN..=RANGE_MAX)
			.step_by(spec.interval as usize)
			.map(|key| (key, 0))
			.collect();

		for document in &self.documents {
			if !matches_all(document, bound, Some(&spec.id)) {
				continue;
			}
			let Some(value) = numeric_value(document, spec.field()) else {
				continue;
			};
			let Some(key) = bucket_key(value, spec.interval) else {
				log::debug!("skipping {value} for facet {}: bucket out of range", spec.id);
				continue;
			};
			*buckets.entry(key).or_default() += 1;
		}

		buckets
			.into_iter()
			.map(|(key, count)| Entry::new(key.to_string(), count))
			.collect()
	}

	fn title_of(&self, document: &Document, index: usize) -> String {
		match document.get(&self.title_field) {
			Some(Value::String(title)) => title.clone(),
			Some(Value::Null) | None => format!("#{}", index + 1),
			Some(other) => other.to_string(),
		}
	}
}

/// Lower bound of the bucket holding `value`, or `None` when it does not fit in `i64`.
fn bucket_key(value: f64, interval: i64) -> Option<i64> {
	let quotient = (value / interval as f64).floor();
	if !(i64::MIN as f64..i64::MAX as f64).contains(&quotient) {
		return None;
	}
	(quotient as i64).checked_mul(interval)
}

fn matches_all(document: &Document, bound: &[(&RangeFilter, &str)], skip: Option<&str>) -> bool {
	bound
		.iter()
		.filter(|(filter, _)| Some(filter.id.as_str()) != skip)
		.all(|(filter, field)| numeric_value(document, field).is_some_and(|v| filter.contains(v)))
}

/// Numeric value of `field`, accepting JSON numbers and numeric strings.
fn numeric_value(document: &Document, field: &str) -> Option<f64> {
	let value = match document.get(field)? {
		Value::Number(number) => number.as_f64(),
		Value::String(text) => text.trim().parse::<f64>().ok(),
		_ => None,
	};
	value.filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use serde_json::json;

	use super::*;

	fn doc(value: Value) -> Document {
		match value {
			Value::Object(map) => map,
			_ => unreachable!("test documents are objects"),
		}
	}

	fn sample_index() -> SearchIndex {
		SearchIndex::new(
			"title",
			vec![
				FacetSpec::new("rating", "Rating", 25),
				FacetSpec {
					field: Some("stock_level".into()),
					..FacetSpec::new("stock", "Stock", 50)
				},
			],
			vec![
				doc(json!({"title": "alpha", "rating": 10, "stock_level": 5})),
				doc(json!({"title": "beta", "rating": 30, "stock_level": 80})),
				doc(json!({"title": "gamma", "rating": "55", "stock_level": 60})),
				doc(json!({"title": "delta", "rating": 95})),
			],
		)
		.expect("valid index")
	}

	fn counts(facet: &Facet) -> Vec<(&str, u64)> {
		facet
			.entries
			.iter()
			.map(|entry| (entry.label.as_str(), entry.count))
			.collect()
	}

	#[test]
	fn unfiltered_search_buckets_every_document() {
		let results = sample_index().execute(&[], 10);
		assert_eq!(results.total, 4);
		assert_eq!(
			results
				.hits
				.iter()
				.map(|hit| hit.title.as_str())
				.collect::<Vec<_>>(),
			["alpha", "beta", "gamma", "delta"]
		);
		assert_eq!(
			counts(&results.facets[0]),
			[("0", 1), ("25", 1), ("50", 1), ("75", 1), ("100", 0)]
		);
		assert_eq!(counts(&results.facets[1]), [("0", 1), ("50", 2), ("100", 0)]);
	}

	#[test]
	fn filters_restrict_hits_and_other_facets_only() {
		let filters = [RangeFilter::new("rating", 20, 60)];
		let results = sample_index().execute(&filters, 10);
		assert_eq!(results.total, 2);
		// The rating facet ignores its own filter.
		assert_eq!(
			counts(&results.facets[0]),
			[("0", 1), ("25", 1), ("50", 1), ("75", 1), ("100", 0)]
		);
		assert_eq!(counts(&results.facets[1]), [("0", 0), ("50", 2), ("100", 0)]);
	}

	#[test]
	fn documents_missing_a_filtered_field_are_excluded() {
		let filters = [RangeFilter::new("stock", 0, 100)];
		let results = sample_index().execute(&filters, 10);
		assert_eq!(results.total, 3);
		assert!(results.hits.iter().all(|hit| hit.title != "delta"));
	}

	#[test]
	fn hit_limit_caps_listed_hits_not_total() {
		let results = sample_index().execute(&[], 1);
		assert_eq!(results.total, 4);
		assert_eq!(results.hits.len(), 1);
	}

	#[test]
	fn unknown_filters_are_ignored() {
		let filters = [RangeFilter::new("missing", 0, 1)];
		assert_eq!(sample_index().execute(&filters, 10).total, 4);
	}

	#[test]
	fn out_of_domain_values_get_their_own_buckets() {
		let index = SearchIndex::new(
			"title",
			vec![FacetSpec::new("year", "Year", 50)],
			vec![doc(json!({"year": -3})), doc(json!({"year": 240}))],
		)
		.expect("valid index");
		let results = index.execute(&[], 0);
		assert_eq!(
			counts(&results.facets[0]),
			[("-50", 1), ("0", 0), ("50", 0), ("100", 0), ("200", 1)]
		);
	}

	#[test]
	fn huge_values_are_left_out_of_histograms() {
		let index = SearchIndex::new(
			"title",
			vec![FacetSpec::new("rating", "Rating", 10)],
			vec![
				doc(json!({"rating": 1e19})),
				doc(json!({"rating": -1e19})),
				doc(json!({"rating": 42})),
			],
		)
		.expect("valid index");
		let results = index.execute(&[], 10);
		assert_eq!(results.total, 3);
		let facet = &results.facets[0];
		assert_eq!(facet.entries.len(), 11);
		assert!(
			facet
				.entries
				.iter()
				.all(|entry| entry.count == u64::from(entry.label == "40"))
		);
	}

	#[test]
	fn validation_rejects_bad_facets() {
		let duplicate = SearchIndex::new(
			"title",
			vec![FacetSpec::new("a", "A", 10), FacetSpec::new("a", "B", 10)],
			Vec::new(),
		);
		assert!(matches!(duplicate, Err(DatasetError::DuplicateFacet(id)) if id == "a"));

		let interval = SearchIndex::new("title", vec![FacetSpec::new("a", "A", 0)], Vec::new());
		assert!(matches!(
			interval,
			Err(DatasetError::InvalidInterval { interval: 0, .. })
		));

		let empty = SearchIndex::new("title", vec![FacetSpec::new(" ", "A", 1)], Vec::new());
		assert!(matches!(empty, Err(DatasetError::EmptyFacetId { .. })));
	}

	#[test]
	fn loads_dataset_file() {
		let mut file = tempfile::NamedTempFile::new().expect("temp file");
		write!(
			file,
			r#"{{
				"title_field": "name",
				"facets": [{{"id": "rating", "label": "Rating"}}],
				"documents": [{{"name": "only", "rating": 42}}]
			}}"#
		)
		.expect("write dataset");

		let index = SearchIndex::from_path(file.path()).expect("load");
		assert_eq!(index.document_count(), 1);
		assert_eq!(index.facet_specs()[0].interval, 10);
		let results = index.execute(&[], 5);
		assert_eq!(results.hits[0].title, "only");
		assert!(results.facets[0].is_range_slider());
	}

	#[test]
	fn missing_dataset_reports_path() {
		let err = SearchIndex::from_path(Path::new("/definitely/not/here.json")).unwrap_err();
		assert!(matches!(err, DatasetError::Io { .. }));
	}
}
