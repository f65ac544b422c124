//! UI building blocks shared across rendering and state modules.

/// Matching documents below the sliders.
pub mod hits;
/// Dual-handle range slider facet.
pub mod range_slider;
/// Title row with the search summary.
pub mod status;

use ratatui::layout::Rect;

pub use hits::render_hits;
pub use range_slider::{
	CommitAction, DEFAULT_DEBOUNCE, RangeSliderFacet, SLIDER_HEIGHT, SliderPhase,
	render_range_slider,
};
pub use status::{StatusLine, render_status};

/// Check if a point (column, row) is inside a rectangle.
#[must_use]
pub fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	if area.width == 0 || area.height == 0 {
		return false;
	}
	let inside_x = column >= area.x && column < area.x.saturating_add(area.width);
	let inside_y = row >= area.y && row < area.y.saturating_add(area.height);
	inside_x && inside_y
}
