//! The two-handle value pair shown by a slider.

use serde::{Deserialize, Serialize};

/// Lower bound of every slider.
pub const RANGE_MIN: i64 = 0;
/// Upper bound of every slider.
pub const RANGE_MAX: i64 = 100;

/// Which of the two handles an input applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Handle {
	#[default]
	Low,
	High,
}

impl Handle {
	#[must_use]
	pub fn toggled(self) -> Self {
		match self {
			Handle::Low => Handle::High,
			Handle::High => Handle::Low,
		}
	}
}

/// Ordered `[low, high]` pair kept inside `[RANGE_MIN, RANGE_MAX]`.
///
/// Every constructor clamps into the domain and orders the pair, so a
/// `DualRange` always satisfies `RANGE_MIN <= low <= high <= RANGE_MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[i64; 2]", into = "[i64; 2]")]
pub struct DualRange {
	low: i64,
	high: i64,
}

impl Default for DualRange {
	fn default() -> Self {
		Self::FULL
	}
}

impl From<[i64; 2]> for DualRange {
	fn from([low, high]: [i64; 2]) -> Self {
		Self::new(low, high)
	}
}

impl From<DualRange> for [i64; 2] {
	fn from(range: DualRange) -> Self {
		[range.low, range.high]
	}
}

impl DualRange {
	/// The whole slider domain.
	pub const FULL: Self = Self {
		low: RANGE_MIN,
		high: RANGE_MAX,
	};

	#[must_use]
	pub fn new(a: i64, b: i64) -> Self {
		let a = a.clamp(RANGE_MIN, RANGE_MAX);
		let b = b.clamp(RANGE_MIN, RANGE_MAX);
		Self {
			low: a.min(b),
			high: a.max(b),
		}
	}

	#[must_use]
	pub fn low(&self) -> i64 {
		self.low
	}

	#[must_use]
	pub fn high(&self) -> i64 {
		self.high
	}

	#[must_use]
	pub fn get(&self, handle: Handle) -> i64 {
		match handle {
			Handle::Low => self.low,
			Handle::High => self.high,
		}
	}

	/// Move one handle to `value`, stopping at the other handle.
	#[must_use]
	pub fn with_handle(self, handle: Handle, value: i64) -> Self {
		match handle {
			Handle::Low => Self {
				low: value.clamp(RANGE_MIN, self.high),
				high: self.high,
			},
			Handle::High => Self {
				low: self.low,
				high: value.clamp(self.low, RANGE_MAX),
			},
		}
	}

	/// Shift one handle by `delta`, stopping at the other handle.
	#[must_use]
	pub fn nudged(self, handle: Handle, delta: i64) -> Self {
		let current = self.get(handle);
		self.with_handle(handle, current.saturating_add(delta))
	}

	/// Handle closest to `value`; ties go to the handle that can still move
	/// towards `value`.
	#[must_use]
	pub fn nearest_handle(&self, value: i64) -> Handle {
		let to_low = (value - self.low).abs();
		let to_high = (value - self.high).abs();
		if to_low < to_high {
			Handle::Low
		} else if to_high < to_low {
			Handle::High
		} else if value > self.high {
			Handle::High
		} else {
			Handle::Low
		}
	}
}
