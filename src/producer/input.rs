//! Parsing and validation of user supplied input
//!
//! All checks run before a producer is invoked. A value that fails here is
//! reported as [`TraceError::InvalidInput`] and no trace is built.

use crate::errors::{Result, TraceError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Size limits that keep a trace small enough to visualize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum number of values in a sequence
    pub max_len: usize,
    /// Largest accepted factorial argument
    pub max_factorial: i64,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_len: 50,
            max_factorial: 12,
        }
    }
}

impl Limits {
    pub fn check_len(&self, len: usize) -> Result<()> {
        if len > self.max_len {
            return Err(TraceError::invalid(
                "input",
                format!("at most {} values are supported, got {}", self.max_len, len),
            ));
        }
        Ok(())
    }
}

/// Parse comma and/or whitespace separated integers.
///
/// Blank text is an empty sequence.
pub fn parse_sequence(text: &str) -> Result<Vec<i64>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<i64>().map_err(|_| {
                TraceError::invalid("input", format!("'{}' is not a whole number", token))
            })
        })
        .collect()
}

pub fn parse_target(text: &str) -> Result<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TraceError::invalid("target", "a target value is required"));
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| TraceError::invalid("target", format!("'{}' is not a whole number", trimmed)))
}

/// Generate `size` values in `1..=99` from a fixed seed.
pub fn random_sequence(size: usize, seed: u64, limits: &Limits) -> Result<Vec<i64>> {
    if size == 0 {
        return Err(TraceError::invalid("size", "size must be at least 1"));
    }
    if size > limits.max_len {
        return Err(TraceError::invalid(
            "size",
            format!("size must be at most {}, got {}", limits.max_len, size),
        ));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    Ok((0..size).map(|_| rng.random_range(1..=99)).collect())
}
