//! Core state container for the terminal application.
//!
//! [`App`] owns the search client, the commit scheduler shared by every
//! slider, and one [`RangeSliderFacet`] per range facet in the dataset.

use std::time::{Duration, Instant};

use facet_range_core::{
	FilterOutcome, RangeFilter, Scheduler, SearchClient, SearchIndex, SearchManager,
};
use throbber_widgets_tui::ThrobberState;

use crate::components::{CommitAction, DEFAULT_DEBOUNCE, RangeSliderFacet};
use crate::style::Theme;

/// How long accepting waits for the final search before reporting.
const ACCEPT_TIMEOUT: Duration = Duration::from_secs(5);

/// Knobs for one interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppOptions {
	/// Quiet period before a slider commits.
	pub debounce: Duration,
	/// Arrow-key step.
	pub step: i64,
	/// Step with Shift held.
	pub large_step: i64,
	/// Number of hits listed below the sliders.
	pub hit_limit: usize,
	/// Shown in the title bar.
	pub title: String,
	/// Selections applied before the first search.
	pub initial_filters: Vec<RangeFilter>,
}

impl Default for AppOptions {
	fn default() -> Self {
		Self {
			debounce: DEFAULT_DEBOUNCE,
			step: 1,
			large_step: 10,
			hit_limit: 50,
			title: "facet-range".to_string(),
			initial_filters: Vec::new(),
		}
	}
}

/// Aggregate state shared across the terminal UI.
pub struct App {
	pub(crate) client: SearchClient,
	pub(crate) commits: Scheduler<CommitAction>,
	pub(crate) sliders: Vec<RangeSliderFacet>,
	pub(crate) focused: usize,
	pub(crate) options: AppOptions,
	pub(crate) theme: Theme,
	pub(crate) throbber_state: ThrobberState,
}

impl App {
	/// Start the search worker, apply initial filters, mount the sliders and
	/// issue the first search.
	pub fn new(index: SearchIndex, options: AppOptions) -> Self {
		let mut client = SearchClient::spawn(index, options.hit_limit);

		for filter in &options.initial_filters {
			if client.facets().iter().any(|facet| facet.id == filter.id) {
				client.set_filter(filter.clone());
			} else {
				log::warn!("no facet '{}' for initial filter; skipping", filter.id);
			}
		}

		let commits = Scheduler::new();
		let facets = client.facets().to_vec();
		let mut sliders = Vec::with_capacity(facets.len());
		for facet in facets {
			if !facet.is_range_slider() {
				log::warn!(
					"facet '{}' uses display '{}'; only {} is supported",
					facet.id,
					facet.display,
					RangeSliderFacet::DISPLAY
				);
				continue;
			}
			sliders.push(RangeSliderFacet::mount(
				facet,
				true,
				&mut client,
				commits.clone(),
				options.debounce,
			));
		}

		client.search();

		Self {
			client,
			commits,
			sliders,
			focused: 0,
			options,
			theme: Theme::default(),
			throbber_state: ThrobberState::default(),
		}
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	/// Advance one frame: fire due commits, take in search responses and
	/// let sliders pick up selection changes.
	pub fn tick(&mut self, now: Instant) {
		for action in self.commits.fire_due(now) {
			action.apply(&mut self.client);
		}
		if self.client.pump() {
			self.refresh_facets();
		}
		let loading = self.client.is_loading();
		for slider in &mut self.sliders {
			slider.set_loading(loading);
			slider.sync();
		}
	}

	/// Hand the latest facet data to the matching sliders.
	pub(crate) fn refresh_facets(&mut self) {
		let loading = self.client.is_loading();
		for facet in self.client.facets() {
			if let Some(slider) = self
				.sliders
				.iter_mut()
				.find(|slider| slider.id() == facet.id)
			{
				slider.update(facet.clone(), loading);
			}
		}
	}

	/// Commit pending changes immediately and wait for the final search.
	pub fn accept(&mut self) -> FilterOutcome {
		for action in self.commits.fire_all() {
			action.apply(&mut self.client);
		}
		if self.client.is_loading() && !self.client.wait_for_results(ACCEPT_TIMEOUT) {
			log::warn!("final search did not finish within {ACCEPT_TIMEOUT:?}");
		}
		self.refresh_facets();
		self.outcome(true)
	}

	/// Drop pending changes without committing them.
	pub fn cancel(&mut self) -> FilterOutcome {
		let mut discarded = 0;
		for slider in &mut self.sliders {
			if slider.cancel_pending() {
				discarded += 1;
			}
		}
		if discarded > 0 {
			log::debug!("discarded {discarded} pending commits");
		}
		self.outcome(false)
	}

	/// Committed filters and the hit count of the latest results.
	#[must_use]
	pub fn outcome(&self, accepted: bool) -> FilterOutcome {
		FilterOutcome {
			accepted,
			total_hits: self.client.results().map_or(0, |results| results.total),
			filters: self.client.filters().snapshot(),
		}
	}

	#[must_use]
	pub fn sliders(&self) -> &[RangeSliderFacet] {
		&self.sliders
	}

	#[must_use]
	pub fn focused(&self) -> Option<&RangeSliderFacet> {
		self.sliders.get(self.focused)
	}

	#[must_use]
	pub fn client(&self) -> &SearchClient {
		&self.client
	}

	pub(crate) fn focused_mut(&mut self) -> Option<&mut RangeSliderFacet> {
		self.sliders.get_mut(self.focused)
	}

	pub(crate) fn focus_next(&mut self) {
		if !self.sliders.is_empty() {
			self.focused = (self.focused + 1) % self.sliders.len();
		}
	}

	pub(crate) fn focus_prev(&mut self) {
		if !self.sliders.is_empty() {
			self.focused = (self.focused + self.sliders.len() - 1) % self.sliders.len();
		}
	}
}
