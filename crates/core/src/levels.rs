//! Derive slider zones from the buckets of a facet.
//!
//! The span of bucket labels that still carry hits becomes the "primary" zone
//! of the slider track; everything outside it is rendered with the warning
//! tone so users can see where a range would select nothing.

use crate::facet::Entry;
use crate::range::{RANGE_MAX, RANGE_MIN};

/// Span of labels with a non-zero count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LevelRange {
	pub min: i64,
	pub max: i64,
}

/// Emphasis applied to a zone of the slider track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneTone {
	Primary,
	Warning,
}

/// One colored section of the slider track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelZone {
	pub min: i64,
	pub max: i64,
	pub tone: ZoneTone,
}

impl LevelZone {
	#[must_use]
	pub fn contains(&self, value: i64) -> bool {
		self.min <= value && value <= self.max
	}
}

/// Compute the span of labels whose entries have hits.
///
/// Entries with a zero count are ignored, as are labels without a leading
/// integer. When nothing survives the result is `{min: 0, max: 0}`.
#[must_use]
pub fn compute_levels(entries: &[Entry]) -> LevelRange {
	let mut values = entries
		.iter()
		.filter(|entry| entry.count > 0)
		.filter_map(|entry| parse_leading_int(&entry.label));

	let Some(first) = values.next() else {
		return LevelRange::default();
	};

	values.fold(
		LevelRange {
			min: first,
			max: first,
		},
		|range, value| LevelRange {
			min: range.min.min(value),
			max: range.max.max(value),
		},
	)
}

/// Split `[0, 100]` into the three zones around `range`.
///
/// Bounds are clamped into the slider domain so the zones stay contiguous and
/// ascending even when labels fall outside it.
#[must_use]
pub fn level_zones(range: LevelRange) -> [LevelZone; 3] {
	let min = range.min.clamp(RANGE_MIN, RANGE_MAX);
	let max = range.max.clamp(min, RANGE_MAX);
	[
		LevelZone {
			min: RANGE_MIN,
			max: min,
			tone: ZoneTone::Warning,
		},
		LevelZone {
			min,
			max,
			tone: ZoneTone::Primary,
		},
		LevelZone {
			min: max,
			max: RANGE_MAX,
			tone: ZoneTone::Warning,
		},
	]
}

/// Tone of the track at `value`: primary inside the level span, warning outside.
#[must_use]
pub fn zone_tone_at(range: LevelRange, value: i64) -> ZoneTone {
	if range.min <= value && value <= range.max {
		ZoneTone::Primary
	} else {
		ZoneTone::Warning
	}
}

/// Parse the leading integer of `label`, ignoring any trailing text.
///
/// Leading whitespace and a single sign are accepted. Returns `None` when no
/// digit follows; values outside `i64` saturate.
#[must_use]
pub fn parse_leading_int(label: &str) -> Option<i64> {
	let trimmed = label.trim_start();
	let (negative, digits) = match trimmed.as_bytes().first() {
		Some(b'-') => (true, &trimmed[1..]),
		Some(b'+') => (false, &trimmed[1..]),
		_ => (false, trimmed),
	};

	let mut seen_digit = false;
	let mut value: i64 = 0;
	for byte in digits.bytes() {
		if !byte.is_ascii_digit() {
			break;
		}
		seen_digit = true;
		let digit = i64::from(byte - b'0');
		value = if negative {
			value.saturating_mul(10).saturating_sub(digit)
		} else {
			value.saturating_mul(10).saturating_add(digit)
		};
	}

	seen_digit.then_some(value)
}
