//! # Introduction
//!
//! traceplay runs a small algorithm once over a given input, recording an
//! immutable snapshot ([`trace::Step`]) after every meaningful operation.
//! The resulting [`trace::Trace`] is then played back forward, backward or on
//! a timer through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input text → Validation → Producer → Trace → Playback → TUI
//! ```
//!
//! 1. [`producer::input`] — parses and validates user input.
//! 2. [`producer`] — bubble sort, linear search and recursive factorial,
//!    each emitting its complete step list up front.
//! 3. [`trace`] — the read-only, randomly accessible step store.
//! 4. [`playback`] — the idle/playing/paused/finished state machine and the
//!    timer facility it schedules ticks on.
//! 5. [`challenge`] — optional "predict the next comparison" quiz.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use traceplay::producer::{build_trace, Algorithm, Limits, TraceRequest};
//!
//! let request = TraceRequest::new(Algorithm::BubbleSort, vec![5, 3, 1]);
//! let trace = build_trace(&request, &Limits::default()).unwrap();
//! assert_eq!(trace.last().sequence, vec![1, 3, 5]);
//! ```

pub mod challenge;
pub mod config;
pub mod errors;
pub mod logging;
pub mod playback;
pub mod producer;
pub mod trace;
pub mod ui;
