//! "Predict the next comparison" quiz overlay
//!
//! The viewer selects the indices they expect the next step to compare and
//! submits the guess. Only the upcoming step's `compared` set is read; the
//! trace and playback state are never touched. A guess scores only when it
//! matches that set exactly.

use crate::trace::Step;
use rustc_hash::FxHashSet;

/// Outcome of one submitted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect { expected: Vec<usize> },
    /// The next step compares nothing (or there is no next step)
    NothingToPredict,
}

#[derive(Debug, Default, Clone)]
pub struct Challenge {
    guess: FxHashSet<usize>,
    correct: u32,
    incorrect: u32,
    last_verdict: Option<Verdict>,
}

impl Challenge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `index` to the guess, or remove it if already selected
    pub fn toggle(&mut self, index: usize) {
        if !self.guess.remove(&index) {
            self.guess.insert(index);
        }
    }

    pub fn clear(&mut self) {
        self.guess.clear();
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.guess.contains(&index)
    }

    pub fn guess_sorted(&self) -> Vec<usize> {
        let mut v: Vec<usize> = self.guess.iter().copied().collect();
        v.sort_unstable();
        v
    }

    /// Score the current guess against `upcoming`, then clear it.
    pub fn submit(&mut self, upcoming: Option<&Step>) -> Verdict {
        let verdict = match upcoming.and_then(|s| s.compared.as_ref()) {
            None => Verdict::NothingToPredict,
            Some(expected) => {
                let expected_set: FxHashSet<usize> = expected.iter().copied().collect();
                if expected_set == self.guess {
                    self.correct += 1;
                    Verdict::Correct
                } else {
                    self.incorrect += 1;
                    let mut expected = expected.clone();
                    expected.sort_unstable();
                    Verdict::Incorrect { expected }
                }
            }
        };
        self.guess.clear();
        self.last_verdict = Some(verdict.clone());
        verdict
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn incorrect(&self) -> u32 {
        self.incorrect
    }

    pub fn last_verdict(&self) -> Option<&Verdict> {
        self.last_verdict.as_ref()
    }

    /// Share of scored guesses that were correct, in percent
    pub fn accuracy(&self) -> Option<u32> {
        let total = self.correct + self.incorrect;
        (total > 0).then(|| self.correct * 100 / total)
    }

    /// Zero the score and forget the guess (used when the trace is replaced)
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
