//! Step producers
//!
//! Each producer takes a validated input and runs its algorithm to
//! completion once, recording a [`Step`] for every meaningful operation.
//! The result is wrapped in a [`Trace`] so playback can seek freely without
//! re-running anything.
//!
//! - [`sort`]: bubble sort with early exit
//! - [`search`]: linear scan for a target
//! - [`recursion`]: recursive factorial with call-stack frames
//! - [`input`]: parsing and validation of user input
//!
//! [`Step`]: crate::trace::Step

pub mod input;
pub mod recursion;
pub mod search;
pub mod sort;

use crate::errors::{Result, TraceError};
use crate::trace::Trace;
use std::fmt;
use tracing::debug;

pub use input::Limits;

/// Largest `n` whose factorial fits in an `i64`
pub const MAX_FACTORIAL_I64: i64 = 20;

/// The algorithms a trace can be produced for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Algorithm {
    BubbleSort,
    LinearSearch,
    Factorial,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::BubbleSort,
        Algorithm::LinearSearch,
        Algorithm::Factorial,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "Bubble Sort",
            Algorithm::LinearSearch => "Linear Search",
            Algorithm::Factorial => "Factorial (recursion)",
        }
    }

    /// Cycle forward through [`Algorithm::ALL`]
    pub fn next(self) -> Self {
        match self {
            Algorithm::BubbleSort => Algorithm::LinearSearch,
            Algorithm::LinearSearch => Algorithm::Factorial,
            Algorithm::Factorial => Algorithm::BubbleSort,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Algorithm::BubbleSort => Algorithm::Factorial,
            Algorithm::LinearSearch => Algorithm::BubbleSort,
            Algorithm::Factorial => Algorithm::LinearSearch,
        }
    }

    pub fn needs_target(self) -> bool {
        matches!(self, Algorithm::LinearSearch)
    }

    /// Factorial takes a single argument instead of a list of values
    pub fn uses_sequence(self) -> bool {
        !matches!(self, Algorithm::Factorial)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A request to (re)build a trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRequest {
    pub algorithm: Algorithm,
    pub input: Vec<i64>,
    pub target: Option<i64>,
}

impl TraceRequest {
    pub fn new(algorithm: Algorithm, input: Vec<i64>) -> Self {
        TraceRequest {
            algorithm,
            input,
            target: None,
        }
    }

    pub fn with_target(mut self, target: i64) -> Self {
        self.target = Some(target);
        self
    }
}

/// Validate `request` and produce its complete trace.
///
/// Nothing is recorded unless every precondition holds, so callers never
/// see a partial trace. The input vector is only read.
pub fn build_trace(request: &TraceRequest, limits: &Limits) -> Result<Trace> {
    let steps = match request.algorithm {
        Algorithm::BubbleSort => {
            limits.check_len(request.input.len())?;
            sort::bubble_sort(&request.input)
        }
        Algorithm::LinearSearch => {
            limits.check_len(request.input.len())?;
            let target = request
                .target
                .ok_or_else(|| TraceError::invalid("target", "linear search needs a target value"))?;
            search::linear_search(&request.input, target)
        }
        Algorithm::Factorial => {
            let n = factorial_argument(&request.input, limits)?;
            recursion::factorial(n)
        }
    };

    debug!(
        algorithm = ?request.algorithm,
        input_len = request.input.len(),
        steps = steps.len(),
        "built trace"
    );
    Ok(Trace::new(request.algorithm, steps))
}

fn factorial_argument(input: &[i64], limits: &Limits) -> Result<i64> {
    let n = match input {
        [n] => *n,
        [] => return Err(TraceError::invalid("argument", "factorial needs a value for n")),
        _ => {
            return Err(TraceError::invalid(
                "argument",
                format!("factorial takes one value, got {}", input.len()),
            ))
        }
    };
    let max = limits.max_factorial.min(MAX_FACTORIAL_I64);
    if !(0..=max).contains(&n) {
        return Err(TraceError::invalid(
            "argument",
            format!("n must be between 0 and {}, got {}", max, n),
        ));
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_cycle() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.next().prev(), algorithm);
        }
        assert_eq!(Algorithm::Factorial.next(), Algorithm::BubbleSort);
    }

    #[test]
    fn test_search_without_target_is_invalid() {
        let request = TraceRequest::new(Algorithm::LinearSearch, vec![1, 2]);
        let err = build_trace(&request, &Limits::default()).unwrap_err();
        assert!(matches!(err, TraceError::InvalidInput { field: "target", .. }));
    }

    #[test]
    fn test_too_many_values_is_invalid() {
        let limits = Limits {
            max_len: 3,
            ..Limits::default()
        };
        let request = TraceRequest::new(Algorithm::BubbleSort, vec![4, 3, 2, 1]);
        assert!(build_trace(&request, &limits).is_err());
    }

    #[test]
    fn test_factorial_argument_bounds() {
        let limits = Limits::default();
        for bad in [vec![], vec![-1], vec![13], vec![2, 3]] {
            let request = TraceRequest::new(Algorithm::Factorial, bad.clone());
            assert!(build_trace(&request, &limits).is_err(), "accepted {:?}", bad);
        }
        let request = TraceRequest::new(Algorithm::Factorial, vec![12]);
        assert!(build_trace(&request, &limits).is_ok());
    }

    #[test]
    fn test_factorial_limit_is_capped_at_i64_range() {
        let limits = Limits {
            max_factorial: 100,
            ..Limits::default()
        };
        let request = TraceRequest::new(Algorithm::Factorial, vec![21]);
        assert!(build_trace(&request, &limits).is_err());
        let request = TraceRequest::new(Algorithm::Factorial, vec![20]);
        assert!(build_trace(&request, &limits).is_ok());
    }
}
