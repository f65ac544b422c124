//! The search-orchestration object widgets commit filters to.
//!
//! [`SearchClient`] owns the committed filters and forwards searches to the
//! background worker, keeping only the response to the newest query.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::{Duration, Instant};

use super::runtime::{self, SearchCommand, SearchResponse};
use super::{SearchIndex, SearchResults};
use crate::facet::Facet;
use crate::filter::{FilterStore, FilterSubscription, RangeFilter, SearchManager};

/// Filter store plus the channels to the search worker.
pub struct SearchClient {
	filters: FilterStore,
	facets: Vec<Facet>,
	document_count: usize,
	hit_limit: usize,
	tx: Sender<SearchCommand>,
	rx: Receiver<SearchResponse>,
	latest_query_id: Arc<AtomicU64>,
	next_query_id: u64,
	in_flight: Option<u64>,
	results: Option<SearchResults>,
}

impl SearchClient {
	/// Move `index` onto a worker thread and return a client for it.
	pub fn spawn(index: SearchIndex, hit_limit: usize) -> Self {
		let facets = index.facet_specs().iter().map(|spec| spec.to_facet()).collect();
		let document_count = index.document_count();
		let (tx, rx, latest_query_id) = runtime::spawn(index);
		Self {
			filters: FilterStore::new(),
			facets,
			document_count,
			hit_limit,
			tx,
			rx,
			latest_query_id,
			next_query_id: 0,
			in_flight: None,
			results: None,
		}
	}

	/// Facets from the latest response, or the declared facets before any
	/// search completed.
	#[must_use]
	pub fn facets(&self) -> &[Facet] {
		self.results
			.as_ref()
			.map_or(self.facets.as_slice(), |results| results.facets.as_slice())
	}

	#[must_use]
	pub fn results(&self) -> Option<&SearchResults> {
		self.results.as_ref()
	}

	#[must_use]
	pub fn document_count(&self) -> usize {
		self.document_count
	}

	#[must_use]
	pub fn filters(&self) -> &FilterStore {
		&self.filters
	}

	/// Remove the filter for `id`. Does not re-run the search.
	pub fn remove_filter(&mut self, id: &str) -> Option<RangeFilter> {
		self.filters.remove(id)
	}

	/// Whether a query is still waiting for its response.
	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.in_flight.is_some()
	}

	/// Drain responses from the worker. Returns `true` when the newest query
	/// was answered.
	pub fn pump(&mut self) -> bool {
		let mut applied = false;
		loop {
			match self.rx.try_recv() {
				Ok(response) => applied |= self.apply(response),
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => {
					if self.in_flight.take().is_some() {
						log::warn!("search worker disconnected with a query in flight");
					}
					break;
				}
			}
		}
		applied
	}

	/// Block until the in-flight query is answered or `timeout` elapses.
	pub fn wait_for_results(&mut self, timeout: Duration) -> bool {
		let deadline = Instant::now() + timeout;
		while self.in_flight.is_some() {
			let remaining = deadline.saturating_duration_since(Instant::now());
			match self.rx.recv_timeout(remaining) {
				Ok(response) => {
					self.apply(response);
				}
				Err(RecvTimeoutError::Timeout) => return false,
				Err(RecvTimeoutError::Disconnected) => {
					self.in_flight = None;
					return false;
				}
			}
		}
		true
	}

	/// Ask the worker to stop. Further searches are dropped.
	pub fn shutdown(&self) {
		let _ = self.tx.send(SearchCommand::Shutdown);
	}

	fn apply(&mut self, response: SearchResponse) -> bool {
		if self.in_flight != Some(response.id) {
			log::trace!("discarding superseded response {}", response.id);
			return false;
		}
		self.in_flight = None;
		self.results = Some(response.results);
		true
	}
}

impl SearchManager for SearchClient {
	fn filter_by_id(&self, id: &str) -> Option<RangeFilter> {
		self.filters.get(id).cloned()
	}

	fn set_filter(&mut self, filter: RangeFilter) {
		log::debug!("filter {} set to {}..{}", filter.id, filter.min, filter.max);
		self.filters.set(filter);
	}

	fn search(&mut self) {
		self.next_query_id = self.next_query_id.saturating_add(1);
		let id = self.next_query_id;
		self.latest_query_id.store(id, Ordering::Release);
		let command = SearchCommand::Query {
			id,
			filters: self.filters.snapshot(),
			hit_limit: self.hit_limit,
		};
		if self.tx.send(command).is_ok() {
			self.in_flight = Some(id);
		} else {
			log::warn!("search worker is gone; query {id} dropped");
		}
	}

	fn subscribe(&mut self, id: &str) -> FilterSubscription {
		self.filters.subscribe(id)
	}
}

impl Drop for SearchClient {
	fn drop(&mut self) {
		self.shutdown();
	}
}
