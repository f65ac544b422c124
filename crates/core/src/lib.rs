//! Core building blocks of `facet-range`.
//!
//! Everything here is independent of the terminal: the level calculation
//! behind slider coloring, the clamped value pair a slider edits, the
//! single-threaded debounce timers, committed filters with change
//! subscriptions, and the in-memory search backend.

pub mod app_dirs;
pub mod debounce;
pub mod error;
pub mod facet;
pub mod filter;
pub mod levels;
pub mod range;
pub mod search;

pub use crate::debounce::{Debounced, Deferred, Scheduler, TimerHandle};
pub use crate::error::{DatasetError, DirsError, FilterParseError};
pub use crate::facet::{Entry, Facet, RANGE_SLIDER_DISPLAY};
pub use crate::filter::{FilterChange, FilterStore, FilterSubscription, RangeFilter, SearchManager};
pub use crate::levels::{LevelRange, LevelZone, ZoneTone, compute_levels, level_zones};
pub use crate::range::{DualRange, Handle, RANGE_MAX, RANGE_MIN};
pub use crate::search::{FilterOutcome, SearchClient, SearchIndex, SearchResults};
