//! Dual-handle slider bound to one numeric facet.

mod render;
mod state;

pub use render::{SLIDER_HEIGHT, render_range_slider};
pub use state::{CommitAction, DEFAULT_DEBOUNCE, RangeSliderFacet, SliderPhase};
