//! Committed range filters and the search-orchestration seam widgets talk to.

use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::mpsc::{self, Receiver, Sender};

use serde::{Deserialize, Serialize};

use crate::error::FilterParseError;

/// Committed `[min, max]` selection for one facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeFilter {
	pub id: String,
	pub min: i64,
	pub max: i64,
}

impl RangeFilter {
	pub fn new(id: impl Into<String>, min: i64, max: i64) -> Self {
		Self {
			id: id.into(),
			min,
			max,
		}
	}

	/// Inclusive containment test against a document value.
	#[must_use]
	pub fn contains(&self, value: f64) -> bool {
		self.min as f64 <= value && value <= self.max as f64
	}
}

impl FromStr for RangeFilter {
	type Err = FilterParseError;

	/// Parse `ID=MIN..MAX`.
	fn from_str(input: &str) -> Result<Self, Self::Err> {
		let (id, range) = input
			.split_once('=')
			.ok_or_else(|| FilterParseError::MissingEquals(input.to_string()))?;
		let id = id.trim();
		if id.is_empty() {
			return Err(FilterParseError::EmptyId(input.to_string()));
		}
		let (min, max) = range
			.split_once("..")
			.ok_or_else(|| FilterParseError::MissingRange(range.to_string()))?;
		let min = parse_bound(min)?;
		let max = parse_bound(max)?;
		if min > max {
			return Err(FilterParseError::Inverted { min, max });
		}
		Ok(Self::new(id, min, max))
	}
}

fn parse_bound(raw: &str) -> Result<i64, FilterParseError> {
	let trimmed = raw.trim();
	trimmed
		.parse()
		.map_err(|_| FilterParseError::InvalidBound(trimmed.to_string()))
}

/// A change to the selection of one facet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
	Set(RangeFilter),
	Cleared,
}

/// Receiving end of the selection changes for one facet id.
#[derive(Debug)]
pub struct FilterSubscription {
	id: String,
	rx: Receiver<FilterChange>,
}

impl FilterSubscription {
	#[must_use]
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Drain pending notifications and return the most recent one.
	#[must_use]
	pub fn latest(&self) -> Option<FilterChange> {
		self.rx.try_iter().last()
	}
}

/// The operations a facet widget needs from whatever orchestrates search.
pub trait SearchManager {
	/// Current committed selection for `id`, if any.
	fn filter_by_id(&self, id: &str) -> Option<RangeFilter>;

	/// Commit a new selection.
	fn set_filter(&mut self, filter: RangeFilter);

	/// Re-run the current query. Results arrive asynchronously.
	fn search(&mut self);

	/// Observe future selection changes for `id`.
	fn subscribe(&mut self, id: &str) -> FilterSubscription;
}

/// Filters keyed by facet id, with change notifications per id.
#[derive(Debug, Default)]
pub struct FilterStore {
	filters: BTreeMap<String, RangeFilter>,
	subscribers: Vec<(String, Sender<FilterChange>)>,
}

impl FilterStore {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn get(&self, id: &str) -> Option<&RangeFilter> {
		self.filters.get(id)
	}

	/// Store `filter`, notifying subscribers when the value changed.
	pub fn set(&mut self, filter: RangeFilter) -> bool {
		if self.filters.get(&filter.id) == Some(&filter) {
			return false;
		}
		self.notify(&filter.id, FilterChange::Set(filter.clone()));
		self.filters.insert(filter.id.clone(), filter);
		true
	}

	/// Remove the filter for `id`, notifying subscribers when one existed.
	pub fn remove(&mut self, id: &str) -> Option<RangeFilter> {
		let removed = self.filters.remove(id)?;
		self.notify(id, FilterChange::Cleared);
		Some(removed)
	}

	pub fn clear(&mut self) {
		let ids: Vec<String> = self.filters.keys().cloned().collect();
		for id in ids {
			self.remove(&id);
		}
	}

	/// All filters ordered by id.
	pub fn iter(&self) -> impl Iterator<Item = &RangeFilter> {
		self.filters.values()
	}

	#[must_use]
	pub fn snapshot(&self) -> Vec<RangeFilter> {
		self.iter().cloned().collect()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.filters.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.filters.is_empty()
	}

	pub fn subscribe(&mut self, id: &str) -> FilterSubscription {
		let (tx, rx) = mpsc::channel();
		self.subscribers.push((id.to_string(), tx));
		FilterSubscription {
			id: id.to_string(),
			rx,
		}
	}

	#[must_use]
	pub fn subscriber_count(&self) -> usize {
		self.subscribers.len()
	}

	fn notify(&mut self, id: &str, change: FilterChange) {
		self.subscribers.retain(|(subscribed, tx)| {
			if subscribed != id {
				return true;
			}
			tx.send(change.clone()).is_ok()
		});
	}
}
