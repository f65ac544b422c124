//! Background search worker thread and command infrastructure.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use super::{SearchIndex, SearchResults};
use crate::filter::RangeFilter;

/// Commands understood by the background search worker.
#[derive(Debug)]
pub enum SearchCommand {
	/// Evaluate the filters against the index.
	Query {
		/// Identifier that allows the UI to correlate responses with the originating query.
		id: u64,
		filters: Vec<RangeFilter>,
		/// Maximum number of hits to return in the listing.
		hit_limit: usize,
	},
	/// Stop the background worker thread.
	Shutdown,
}

/// Results for one query, tagged with its id.
#[derive(Debug, Clone)]
pub struct SearchResponse {
	pub id: u64,
	pub results: SearchResults,
}

/// Launches the background search worker thread and returns communication channels.
pub fn spawn(
	index: SearchIndex,
) -> (
	Sender<SearchCommand>,
	Receiver<SearchResponse>,
	Arc<AtomicU64>,
) {
	let (command_tx, command_rx) = mpsc::channel();
	let (result_tx, result_rx) = mpsc::channel();
	let latest_query_id = Arc::new(AtomicU64::new(0));
	let thread_latest = Arc::clone(&latest_query_id);

	thread::spawn(move || worker_loop(&index, command_rx, result_tx, thread_latest));

	(command_tx, result_rx, latest_query_id)
}

fn worker_loop(
	index: &SearchIndex,
	command_rx: Receiver<SearchCommand>,
	result_tx: Sender<SearchResponse>,
	latest_query_id: Arc<AtomicU64>,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(index, &result_tx, &latest_query_id, command) {
			break;
		}
	}
	log::debug!("search worker stopped");
}

fn handle_command(
	index: &SearchIndex,
	result_tx: &Sender<SearchResponse>,
	latest_query_id: &AtomicU64,
	command: SearchCommand,
) -> bool {
	match command {
		SearchCommand::Query {
			id,
			filters,
			hit_limit,
		} => {
			if id < latest_query_id.load(Ordering::Acquire) {
				log::trace!("skipping stale query {id}");
				return true;
			}
			let results = index.execute(&filters, hit_limit);
			log::debug!(
				"query {id} matched {} documents with {} filters",
				results.total,
				filters.len()
			);
			result_tx.send(SearchResponse { id, results }).is_ok()
		}
		SearchCommand::Shutdown => false,
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use super::*;
	use crate::search::FacetSpec;

	fn empty_index() -> SearchIndex {
		SearchIndex::new("title", vec![FacetSpec::new("rating", "Rating", 10)], Vec::new())
			.expect("valid index")
	}

	#[test]
	fn stale_queries_are_skipped() {
		let index = empty_index();
		let (result_tx, result_rx) = mpsc::channel();
		let latest = AtomicU64::new(2);

		let stale = SearchCommand::Query {
			id: 1,
			filters: Vec::new(),
			hit_limit: 10,
		};
		assert!(handle_command(&index, &result_tx, &latest, stale));
		assert!(result_rx.try_recv().is_err());

		let current = SearchCommand::Query {
			id: 2,
			filters: Vec::new(),
			hit_limit: 10,
		};
		assert!(handle_command(&index, &result_tx, &latest, current));
		assert_eq!(result_rx.try_recv().expect("response").id, 2);
	}

	#[test]
	fn worker_answers_and_shuts_down() {
		let (tx, rx, latest) = spawn(empty_index());
		latest.store(1, Ordering::Release);
		tx.send(SearchCommand::Query {
			id: 1,
			filters: Vec::new(),
			hit_limit: 10,
		})
		.expect("send query");

		let response = rx
			.recv_timeout(Duration::from_secs(5))
			.expect("worker response");
		assert_eq!(response.id, 1);
		assert_eq!(response.results.facets.len(), 1);

		tx.send(SearchCommand::Shutdown).expect("send shutdown");
		assert!(rx.recv_timeout(Duration::from_secs(5)).is_err());
	}
}
