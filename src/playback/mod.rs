//! Playback controller
//!
//! [`Playback`] owns the current [`Trace`] and drives an index into it,
//! either on demand ([`Playback::step`]) or from timer ticks while playing.
//!
//! # State machine
//!
//! ```text
//!            play            pause
//!   Idle ──────────▶ Playing ──────▶ Paused
//!                     │  ▲ play        │
//!                     │  └─────────────┘
//!                     │ tick at last index
//!                     ▼
//!                  Finished
//! ```
//!
//! `reset` and `replace_trace` return to `Idle` at index 0 from any state.
//!
//! # Timer ownership
//!
//! At most one tick is outstanding at a time and its handle is kept in
//! `pending`. Every transition away from `Playing` cancels it before the
//! state changes, and [`Playback::on_tick`] ignores any handle that is not
//! the pending one, so a tick scheduled for a discarded trace can never
//! move the index of its replacement.

pub mod timer;

use crate::trace::{Step, Trace};
use std::time::Duration;
use timer::{Timer, TimerHandle};
use tracing::{debug, trace};

/// Playback mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Idle,
    Playing,
    Paused,
    Finished,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Idle => "IDLE",
            Mode::Playing => "PLAYING",
            Mode::Paused => "PAUSED",
            Mode::Finished => "FINISHED",
        }
    }
}

/// Drives `current_index` over a trace
#[derive(Debug)]
pub struct Playback<T: Timer> {
    trace: Trace,
    current_index: usize,
    mode: Mode,
    tick_interval: Duration,
    timer: T,
    pending: Option<TimerHandle>,
}

impl<T: Timer> Playback<T> {
    pub fn new(trace: Trace, tick_interval: Duration, timer: T) -> Self {
        Playback {
            trace,
            current_index: 0,
            mode: Mode::Idle,
            tick_interval,
            timer,
            pending: None,
        }
    }

    // ========== Commands ==========

    /// Start or resume automatic advance. No-op while playing or finished.
    pub fn play(&mut self) {
        match self.mode {
            Mode::Idle | Mode::Paused => {
                self.set_mode(Mode::Playing);
                self.schedule_tick();
            }
            Mode::Playing | Mode::Finished => {}
        }
    }

    /// Suspend automatic advance, keeping the index. No-op unless playing.
    pub fn pause(&mut self) {
        if self.mode == Mode::Playing {
            self.cancel_pending();
            self.set_mode(Mode::Paused);
        }
    }

    /// Advance one step on demand.
    ///
    /// Stepping while playing pauses first. At the last index the index
    /// stays put and the mode becomes `Finished`. Returns whether the index
    /// moved.
    pub fn step(&mut self) -> bool {
        self.pause();

        let last = self.last_index();
        if self.current_index < last {
            self.current_index += 1;
            trace!(index = self.current_index, "stepped forward");
            true
        } else {
            self.set_mode(Mode::Finished);
            false
        }
    }

    /// Move back one step. Leaves `Finished` for `Paused`; no-op at index 0.
    pub fn step_back(&mut self) -> bool {
        self.pause();

        if self.current_index == 0 {
            return false;
        }
        self.current_index -= 1;
        if self.mode == Mode::Finished {
            self.set_mode(Mode::Paused);
        }
        trace!(index = self.current_index, "stepped backward");
        true
    }

    /// Seek to the last step and finish
    pub fn jump_to_end(&mut self) {
        self.cancel_pending();
        self.current_index = self.last_index();
        self.set_mode(Mode::Finished);
    }

    /// Back to `Idle` at index 0 from any state
    pub fn reset(&mut self) {
        self.cancel_pending();
        self.current_index = 0;
        self.set_mode(Mode::Idle);
    }

    /// Install a freshly produced trace. Any outstanding tick is cancelled
    /// before the old trace is dropped.
    pub fn replace_trace(&mut self, trace: Trace) {
        self.cancel_pending();
        debug!(
            algorithm = ?trace.algorithm(),
            steps = trace.len(),
            "replacing trace"
        );
        self.trace = trace;
        self.current_index = 0;
        self.set_mode(Mode::Idle);
    }

    pub fn set_tick_interval(&mut self, interval: Duration) {
        self.tick_interval = interval;
        if self.mode == Mode::Playing {
            self.schedule_tick();
        }
    }

    // ========== Timer plumbing ==========

    /// Handle a timer callback. Returns whether the tick was applied.
    pub fn on_tick(&mut self, handle: TimerHandle) -> bool {
        if self.pending != Some(handle) {
            trace!(?handle, "ignoring stale tick");
            return false;
        }
        self.pending = None;

        if self.mode != Mode::Playing {
            return false;
        }
        if self.current_index < self.last_index() {
            self.current_index += 1;
            self.schedule_tick();
        } else {
            self.set_mode(Mode::Finished);
        }
        true
    }

    /// Deliver every fired timer callback. Returns how many ticks applied.
    pub fn pump(&mut self) -> usize {
        let fired = self.timer.fired();
        fired.into_iter().filter(|&handle| self.on_tick(handle)).count()
    }

    fn schedule_tick(&mut self) {
        self.cancel_pending();
        self.pending = Some(self.timer.schedule(self.tick_interval));
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.timer.cancel(handle);
        }
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            debug!(from = ?self.mode, to = ?mode, index = self.current_index, "playback transition");
            self.mode = mode;
        }
    }

    fn last_index(&self) -> usize {
        // Producers never build an empty trace; reaching zero here is a bug
        self.trace
            .len()
            .checked_sub(1)
            .expect("playback requires a non-empty trace")
    }

    // ========== Getter methods for UI ==========

    pub fn len(&self) -> usize {
        self.trace.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_step(&self) -> &Step {
        // current_index stays within [0, len - 1] by construction
        &self.trace.steps()[self.current_index]
    }

    /// The step after the current one, if any
    pub fn upcoming_step(&self) -> Option<&Step> {
        self.trace.step_at(self.current_index + 1).ok()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn is_at_start(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.current_index + 1 >= self.trace.len()
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }
}
