//! Debounce timers
//!
//! The hover session never sleeps or registers callbacks. It asks a
//! [`Scheduler`] for a handle and the host reports due handles back through
//! `take_due`, so tests can drive time with [`VirtualScheduler`].

use std::time::{Duration, Instant};

/// Identifies one scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

pub trait Scheduler {
    /// Schedule a timer firing after `delay`
    fn schedule(&mut self, delay: Duration) -> TimerHandle;

    /// Cancel a timer; unknown or already fired handles are ignored
    fn cancel(&mut self, handle: TimerHandle);

    /// Remove and return every timer whose deadline has passed, earliest first
    fn take_due(&mut self) -> Vec<TimerHandle>;

    /// Time until the earliest pending timer is due
    fn next_due_in(&self) -> Option<Duration>;
}

/// Pending deadlines shared by both schedulers
#[derive(Debug)]
struct TimerQueue<T> {
    next_id: u64,
    pending: Vec<(TimerHandle, T)>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            pending: Vec::new(),
        }
    }
}

impl<T: Copy + Ord> TimerQueue<T> {
    fn push(&mut self, deadline: T) -> TimerHandle {
        self.next_id = self.next_id.wrapping_add(1);
        let handle = TimerHandle(self.next_id);
        self.pending.push((handle, deadline));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|(h, _)| *h != handle);
    }

    fn take_due(&mut self, now: T) -> Vec<TimerHandle> {
        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|(_, deadline)| *deadline <= now);
        self.pending = rest;
        due.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.0.cmp(&b.0.0)));
        due.into_iter().map(|(handle, _)| handle).collect()
    }

    fn earliest(&self) -> Option<T> {
        self.pending.iter().map(|(_, deadline)| *deadline).min()
    }

    fn len(&self) -> usize {
        self.pending.len()
    }
}

/// Scheduler on a virtual clock that only moves when told to
#[derive(Debug, Default)]
pub struct VirtualScheduler {
    now: Duration,
    queue: TimerQueue<Duration>,
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }
}

impl Scheduler for VirtualScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerHandle {
        self.queue.push(self.now + delay)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.queue.cancel(handle);
    }

    fn take_due(&mut self) -> Vec<TimerHandle> {
        self.queue.take_due(self.now)
    }

    fn next_due_in(&self) -> Option<Duration> {
        self.queue
            .earliest()
            .map(|deadline| deadline.saturating_sub(self.now))
    }
}

/// Scheduler on the wall clock, polled by the host event loop
#[derive(Debug, Default)]
pub struct InstantScheduler {
    queue: TimerQueue<Instant>,
}

impl InstantScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for InstantScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerHandle {
        self.queue.push(Instant::now() + delay)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.queue.cancel(handle);
    }

    fn take_due(&mut self) -> Vec<TimerHandle> {
        self.queue.take_due(Instant::now())
    }

    fn next_due_in(&self) -> Option<Duration> {
        self.queue
            .earliest()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod scheduler_tests;
