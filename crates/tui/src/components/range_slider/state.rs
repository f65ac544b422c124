//! State of one range-slider facet: local handle positions, the debounced
//! commit and the subscription that keeps it in step with the filter store.

use std::time::{Duration, Instant};

use facet_range_core::{
	Debounced, Deferred, DualRange, Facet, FilterChange, FilterSubscription, Handle, LevelRange,
	LevelZone, RANGE_MAX, RANGE_MIN, RANGE_SLIDER_DISPLAY, RangeFilter, Scheduler, SearchManager,
	compute_levels, level_zones,
};
use ratatui::layout::Rect;

use crate::components::point_in_rect;

/// Debounced callback a slider leaves on the UI scheduler.
pub type CommitAction = Deferred<dyn SearchManager>;

/// Default quiet period before a drag is committed.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(400);

/// Whether the handles mirror the store or are waiting to be committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderPhase {
	/// Local range matches the last known selection.
	Synced,
	/// A commit is scheduled and has not fired yet.
	Dragging,
}

/// A dual-handle slider bound to one facet.
///
/// Input updates the handles immediately and (re)schedules a commit on the
/// shared scheduler; the commit writes the range to the [`SearchManager`] and
/// triggers a search. Dropping the slider cancels any pending commit.
pub struct RangeSliderFacet {
	facet: Facet,
	loading: bool,
	value: DualRange,
	active: Handle,
	dragging: Option<Handle>,
	commit: Debounced<CommitAction>,
	subscription: FilterSubscription,
	pub(crate) track_area: Option<Rect>,
}

impl RangeSliderFacet {
	/// Display tag this widget renders.
	pub const DISPLAY: &'static str = RANGE_SLIDER_DISPLAY;

	/// Create the slider, reading the current selection for its facet and
	/// subscribing to later changes.
	pub fn mount(
		facet: Facet,
		loading: bool,
		manager: &mut dyn SearchManager,
		scheduler: Scheduler<CommitAction>,
		delay: Duration,
	) -> Self {
		let value = manager
			.filter_by_id(&facet.id)
			.map_or(DualRange::FULL, |selection| {
				DualRange::new(selection.min, selection.max)
			});
		let subscription = manager.subscribe(&facet.id);
		log::debug!(
			"mounted slider '{}' at {}..{}",
			facet.id,
			value.low(),
			value.high()
		);

		Self {
			facet,
			loading,
			value,
			active: Handle::Low,
			dragging: None,
			commit: Debounced::new(scheduler, delay),
			subscription,
			track_area: None,
		}
	}

	/// Replace the facet data after a search. Facets for other ids are ignored.
	pub fn update(&mut self, facet: Facet, loading: bool) {
		if facet.id != self.facet.id {
			log::warn!(
				"slider '{}' ignored data for facet '{}'",
				self.facet.id,
				facet.id
			);
			return;
		}
		self.facet = facet;
		self.loading = loading;
	}

	pub fn set_loading(&mut self, loading: bool) {
		self.loading = loading;
	}

	/// Apply the newest selection change, if any. Cleared selections leave the
	/// handles where they are. Returns whether the handles were overwritten.
	pub fn sync(&mut self) -> bool {
		match self.subscription.latest() {
			Some(FilterChange::Set(selection)) => {
				self.value = DualRange::new(selection.min, selection.max);
				true
			}
			Some(FilterChange::Cleared) | None => false,
		}
	}

	/// Move the handles to `value` now and commit it once input is quiet.
	pub fn change(&mut self, value: DualRange, now: Instant) {
		self.value = value;
		let id = self.facet.id.clone();
		let action = CommitAction::new(move |manager| {
			log::debug!("committing {id} = {}..{}", value.low(), value.high());
			manager.set_filter(RangeFilter::new(id, value.low(), value.high()));
			manager.search();
		});
		self.commit.call(action, now);
	}

	/// Shift the active handle by `delta`.
	pub fn nudge(&mut self, delta: i64, now: Instant) {
		let value = self.value.nudged(self.active, delta);
		if value != self.value {
			self.change(value, now);
		}
	}

	/// Place the active handle at `target`.
	pub fn jump(&mut self, target: i64, now: Instant) {
		let value = self.value.with_handle(self.active, target);
		if value != self.value {
			self.change(value, now);
		}
	}

	pub fn toggle_handle(&mut self) {
		self.active = self.active.toggled();
	}

	/// Start a pointer drag if `(column, row)` lies on the track. The nearest
	/// handle jumps to the pointer and becomes active.
	pub fn press(&mut self, column: u16, row: u16, now: Instant) -> bool {
		let Some(area) = self.track_area else {
			return false;
		};
		if !point_in_rect(column, row, area) {
			return false;
		}
		let target = value_at_column(area, column);
		let handle = self.value.nearest_handle(target);
		self.active = handle;
		self.dragging = Some(handle);
		let value = self.value.with_handle(handle, target);
		if value != self.value {
			self.change(value, now);
		}
		true
	}

	/// Continue a drag started by [`press`](Self::press).
	pub fn drag(&mut self, column: u16, now: Instant) -> bool {
		let (Some(handle), Some(area)) = (self.dragging, self.track_area) else {
			return false;
		};
		let value = self.value.with_handle(handle, value_at_column(area, column));
		if value != self.value {
			self.change(value, now);
		}
		true
	}

	pub fn release(&mut self) {
		self.dragging = None;
	}

	/// Discard the pending commit, returning whether one was waiting.
	pub fn cancel_pending(&mut self) -> bool {
		self.commit.cancel()
	}

	#[must_use]
	pub fn id(&self) -> &str {
		&self.facet.id
	}

	#[must_use]
	pub fn facet(&self) -> &Facet {
		&self.facet
	}

	#[must_use]
	pub fn value(&self) -> DualRange {
		self.value
	}

	#[must_use]
	pub fn active_handle(&self) -> Handle {
		self.active
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.loading
	}

	#[must_use]
	pub fn is_dragging(&self) -> bool {
		self.dragging.is_some()
	}

	#[must_use]
	pub fn phase(&self) -> SliderPhase {
		if self.commit.is_pending() {
			SliderPhase::Dragging
		} else {
			SliderPhase::Synced
		}
	}

	/// Span of bucket labels with hits, recomputed from the current entries.
	#[must_use]
	pub fn levels(&self) -> LevelRange {
		compute_levels(&self.facet.entries)
	}

	#[must_use]
	pub fn zones(&self) -> [LevelZone; 3] {
		level_zones(self.levels())
	}
}

impl Drop for RangeSliderFacet {
	fn drop(&mut self) {
		if self.commit.cancel() {
			log::debug!("slider '{}' dropped a pending commit", self.facet.id);
		}
	}
}

/// Slider value under `column` of a track drawn in `area`.
pub(crate) fn value_at_column(area: Rect, column: u16) -> i64 {
	let span = i64::from(area.width.saturating_sub(1));
	if span == 0 {
		return RANGE_MIN;
	}
	let offset = i64::from(column.saturating_sub(area.x)).min(span);
	let domain = RANGE_MAX - RANGE_MIN;
	RANGE_MIN + (offset * domain + span / 2) / span
}

/// Column offset (from the track start) that shows `value`.
pub(crate) fn column_for_value(width: u16, value: i64) -> u16 {
	let span = i64::from(width.saturating_sub(1));
	let domain = RANGE_MAX - RANGE_MIN;
	let offset = (value.clamp(RANGE_MIN, RANGE_MAX) - RANGE_MIN) * span;
	u16::try_from((offset + domain / 2) / domain).unwrap_or(u16::MAX)
}
