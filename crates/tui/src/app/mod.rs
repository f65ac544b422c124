//! Application state and behavior for the interactive facet view.
//!
//! The [`App`] type aggregates the search client, the sliders and rendering.
//! Supporting modules split input handling and drawing into focused pieces.

mod actions;
mod render;
mod state;

pub use state::{App, AppOptions};
