//! Single-threaded timers and the debounced callbacks built on them.
//!
//! The UI thread owns a [`Scheduler`] and asks it for due payloads once per
//! frame. Widgets hold [`TimerHandle`]s; dropping a handle removes its timer,
//! so a widget that goes away can never have its callback fire afterwards.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

type DeferredHandler<T> = Box<dyn for<'target> FnOnce(&'target mut T)>;

/// Callback queued on a scheduler, applied to a target once it fires.
pub struct Deferred<T: ?Sized> {
	handler: DeferredHandler<T>,
}

impl<T: ?Sized> Deferred<T> {
	pub fn new(handler: impl for<'target> FnOnce(&'target mut T) + 'static) -> Self {
		Self {
			handler: Box::new(handler),
		}
	}

	pub fn apply(self, target: &mut T) {
		(self.handler)(target);
	}
}

impl<T: ?Sized> fmt::Debug for Deferred<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Deferred(..)")
	}
}

struct Timer<T> {
	deadline: Instant,
	payload: T,
}

struct Queue<T> {
	next_id: u64,
	timers: BTreeMap<u64, Timer<T>>,
}

/// Timer queue polled from the UI loop.
///
/// Cloning yields another handle to the same queue.
pub struct Scheduler<T> {
	queue: Rc<RefCell<Queue<T>>>,
}

impl<T> Clone for Scheduler<T> {
	fn clone(&self) -> Self {
		Self {
			queue: Rc::clone(&self.queue),
		}
	}
}

impl<T> Default for Scheduler<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> Scheduler<T> {
	#[must_use]
	pub fn new() -> Self {
		Self {
			queue: Rc::new(RefCell::new(Queue {
				next_id: 0,
				timers: BTreeMap::new(),
			})),
		}
	}

	/// Queue `payload` to fire at `deadline`.
	///
	/// The timer lives as long as the returned handle.
	#[must_use = "dropping the handle cancels the timer"]
	pub fn schedule(&self, deadline: Instant, payload: T) -> TimerHandle<T> {
		let mut queue = self.queue.borrow_mut();
		queue.next_id += 1;
		let id = queue.next_id;
		queue.timers.insert(id, Timer { deadline, payload });
		TimerHandle {
			id,
			queue: Rc::downgrade(&self.queue),
		}
	}

	/// Remove and return every payload whose deadline is at or before `now`,
	/// ordered by deadline and then by scheduling order.
	pub fn fire_due(&self, now: Instant) -> Vec<T> {
		let mut queue = self.queue.borrow_mut();
		let mut due: Vec<(Instant, u64)> = queue
			.timers
			.iter()
			.filter(|(_, timer)| timer.deadline <= now)
			.map(|(id, timer)| (timer.deadline, *id))
			.collect();
		due.sort_unstable();

		due.into_iter()
			.filter_map(|(_, id)| queue.timers.remove(&id))
			.map(|timer| timer.payload)
			.collect()
	}

	/// Remove and return every payload regardless of deadline, in firing order.
	pub fn fire_all(&self) -> Vec<T> {
		let mut queue = self.queue.borrow_mut();
		let mut timers: Vec<(u64, Timer<T>)> =
			std::mem::take(&mut queue.timers).into_iter().collect();
		timers.sort_by_key(|(id, timer)| (timer.deadline, *id));
		timers.into_iter().map(|(_, timer)| timer.payload).collect()
	}

	/// Earliest pending deadline.
	#[must_use]
	pub fn next_deadline(&self) -> Option<Instant> {
		self.queue
			.borrow()
			.timers
			.values()
			.map(|timer| timer.deadline)
			.min()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.queue.borrow().timers.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// Ownership of one queued timer. Dropping it cancels the timer.
pub struct TimerHandle<T> {
	id: u64,
	queue: Weak<RefCell<Queue<T>>>,
}

impl<T> TimerHandle<T> {
	/// Whether the timer is still waiting to fire.
	#[must_use]
	pub fn is_pending(&self) -> bool {
		self.queue
			.upgrade()
			.is_some_and(|queue| queue.borrow().timers.contains_key(&self.id))
	}

	/// Remove the timer, returning whether it was still pending.
	pub fn cancel(&self) -> bool {
		let Some(queue) = self.queue.upgrade() else {
			return false;
		};
		let Ok(mut queue) = queue.try_borrow_mut() else {
			log::warn!("timer {} left queued: scheduler is borrowed", self.id);
			return false;
		};
		queue.timers.remove(&self.id).is_some()
	}
}

impl<T> Drop for TimerHandle<T> {
	fn drop(&mut self) {
		self.cancel();
	}
}

impl<T> fmt::Debug for TimerHandle<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TimerHandle")
			.field("id", &self.id)
			.field("pending", &self.is_pending())
			.finish()
	}
}

/// A callback that only fires once calls have been quiet for `delay`.
pub struct Debounced<T> {
	scheduler: Scheduler<T>,
	delay: Duration,
	pending: Option<TimerHandle<T>>,
}

impl<T> Debounced<T> {
	#[must_use]
	pub fn new(scheduler: Scheduler<T>, delay: Duration) -> Self {
		Self {
			scheduler,
			delay,
			pending: None,
		}
	}

	/// Schedule `payload` for `now + delay`, replacing any pending payload.
	pub fn call(&mut self, payload: T, now: Instant) {
		self.pending = None;
		self.pending = Some(self.scheduler.schedule(now + self.delay, payload));
	}

	/// Drop the pending payload, returning whether one was waiting.
	pub fn cancel(&mut self) -> bool {
		self.pending.take().is_some_and(|handle| handle.cancel())
	}

	#[must_use]
	pub fn is_pending(&self) -> bool {
		self.pending.as_ref().is_some_and(TimerHandle::is_pending)
	}

	#[must_use]
	pub fn delay(&self) -> Duration {
		self.delay
	}
}
