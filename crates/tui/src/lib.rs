//! Interactive terminal UI for `facet-range`.
//!
//! This crate contains the range-slider widget, the application state that
//! wires sliders to a search client, the event loop, and the themes used to
//! draw it all.

mod app;
pub mod components;
mod runtime;
pub mod style;

#[cfg(test)]
mod snapshot_tests;

pub use app::{App, AppOptions};
pub use components::{RangeSliderFacet, SliderPhase};
pub use runtime::run;
pub use style::{Theme, builtin_themes, default_theme};
