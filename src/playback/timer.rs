//! Host timer facility
//!
//! The playback controller only ever asks for "call me back after N
//! milliseconds" and cancels what it asked for. Callbacks are delivered by
//! polling [`Timer::fired`], which fits the TUI's poll loop and lets tests
//! drive time by hand with [`ManualTimer`].

use std::time::{Duration, Instant};

/// Identifies one scheduled callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

pub trait Timer {
    /// Request a callback once `delay` has elapsed
    fn schedule(&mut self, delay: Duration) -> TimerHandle;

    /// Drop a scheduled callback. Unknown or already fired handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);

    /// Remove and return every callback whose deadline has passed, earliest first
    fn fired(&mut self) -> Vec<TimerHandle>;

    /// Number of callbacks still waiting
    fn pending(&self) -> usize;
}

/// Drain every entry of `pending` due at `now`, ordered by deadline
fn drain_due<D: Ord + Copy>(pending: &mut Vec<(TimerHandle, D)>, now: D) -> Vec<TimerHandle> {
    let mut due: Vec<(TimerHandle, D)> = Vec::new();
    pending.retain(|&(handle, deadline)| {
        if deadline <= now {
            due.push((handle, deadline));
            false
        } else {
            true
        }
    });
    due.sort_by_key(|&(handle, deadline)| (deadline, handle.0));
    due.into_iter().map(|(handle, _)| handle).collect()
}

/// Wall-clock timer backed by [`Instant`] deadlines
#[derive(Debug, Default)]
pub struct WallTimer {
    next_id: u64,
    pending: Vec<(TimerHandle, Instant)>,
}

impl WallTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time until the earliest deadline, if any (used as the poll timeout)
    pub fn next_deadline_in(&self) -> Option<Duration> {
        let now = Instant::now();
        self.pending
            .iter()
            .map(|&(_, deadline)| deadline.saturating_duration_since(now))
            .min()
    }
}

impl Timer for WallTimer {
    fn schedule(&mut self, delay: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending.push((handle, Instant::now() + delay));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|&(h, _)| h != handle);
    }

    fn fired(&mut self) -> Vec<TimerHandle> {
        drain_due(&mut self.pending, Instant::now())
    }

    fn pending(&self) -> usize {
        self.pending.len()
    }
}

/// Virtual clock timer; time only moves when [`ManualTimer::advance`] is called
#[derive(Debug, Default)]
pub struct ManualTimer {
    now: Duration,
    next_id: u64,
    pending: Vec<(TimerHandle, Duration)>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }
}

impl Timer for ManualTimer {
    fn schedule(&mut self, delay: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending.push((handle, self.now + delay));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|&(h, _)| h != handle);
    }

    fn fired(&mut self) -> Vec<TimerHandle> {
        drain_due(&mut self.pending, self.now)
    }

    fn pending(&self) -> usize {
        self.pending.len()
    }
}
