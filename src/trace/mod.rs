// Step snapshots and the materialized trace they live in

use crate::errors::{Result, TraceError};
use crate::producer::Algorithm;
use rustc_hash::FxHashSet;

/// What kind of operation a step records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    Start,
    Compare,
    AboutToSwap,
    Swapped,
    PassComplete,
    Found,
    NotFound,
    Call,
    Return,
    Done,
}

impl StepKind {
    /// Whether this step ends the trace
    pub fn is_terminal(self) -> bool {
        matches!(self, StepKind::Done | StepKind::Found | StepKind::NotFound)
    }
}

/// One frame of a recorded call stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallFrame {
    /// Unique within one trace, allocated in call order starting at 1
    pub id: u32,
    pub argument: i64,
    /// Filled in once the frame has computed its value
    pub result: Option<i64>,
}

/// Snapshot of algorithm state at one discrete point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub kind: StepKind,
    pub sequence: Vec<i64>,
    pub highlighted: FxHashSet<usize>,
    pub resolved: FxHashSet<usize>,
    pub compared: Option<Vec<usize>>,
    pub frames: Vec<CallFrame>,
    pub narration: String,
}

impl Step {
    pub(crate) fn new(kind: StepKind, sequence: &[i64], narration: impl Into<String>) -> Self {
        Step {
            kind,
            sequence: sequence.to_vec(),
            highlighted: FxHashSet::default(),
            resolved: FxHashSet::default(),
            compared: None,
            frames: Vec::new(),
            narration: narration.into(),
        }
    }

    pub(crate) fn highlight(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.highlighted.extend(indices);
        self
    }

    pub(crate) fn resolve(mut self, resolved: &FxHashSet<usize>) -> Self {
        self.resolved.clone_from(resolved);
        self
    }

    /// Mark the indices compared in this step; they are highlighted too
    pub(crate) fn compare(mut self, indices: Vec<usize>) -> Self {
        self.highlighted.extend(indices.iter().copied());
        self.compared = Some(indices);
        self
    }

    pub(crate) fn with_frames(mut self, frames: &[CallFrame]) -> Self {
        self.frames = frames.to_vec();
        self
    }

    /// Estimate the memory usage of this step in bytes
    pub fn estimated_size(&self) -> usize {
        // Rough: element payloads only, sets assumed one word per entry
        let word = std::mem::size_of::<usize>();
        self.sequence.len() * std::mem::size_of::<i64>()
            + (self.highlighted.len() + self.resolved.len()) * word
            + self.compared.as_ref().map_or(0, |c| c.len() * word)
            + self.frames.len() * std::mem::size_of::<CallFrame>()
            + self.narration.len()
    }

    /// Highlighted indices in ascending order
    pub fn highlighted_sorted(&self) -> Vec<usize> {
        sorted(&self.highlighted)
    }

    /// Resolved indices in ascending order
    pub fn resolved_sorted(&self) -> Vec<usize> {
        sorted(&self.resolved)
    }
}

fn sorted(set: &FxHashSet<usize>) -> Vec<usize> {
    let mut v: Vec<usize> = set.iter().copied().collect();
    v.sort_unstable();
    v
}

/// Ordered, immutable, non-empty sequence of steps for one algorithm run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    algorithm: Algorithm,
    steps: Vec<Step>,
}

impl Trace {
    /// Wrap produced steps. Producers always emit at least a start step, so
    /// an empty vector here is a bug in the caller.
    pub(crate) fn new(algorithm: Algorithm, steps: Vec<Step>) -> Self {
        assert!(!steps.is_empty(), "a trace always holds at least one step");
        Trace { algorithm, steps }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Total step count, always at least 1
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; kept for API symmetry with collections
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Get a step by index
    pub fn step_at(&self, index: usize) -> Result<&Step> {
        self.steps.get(index).ok_or(TraceError::IndexOutOfRange {
            index,
            len: self.steps.len(),
        })
    }

    pub fn first(&self) -> &Step {
        &self.steps[0]
    }

    pub fn last(&self) -> &Step {
        &self.steps[self.steps.len() - 1]
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Narration of every step in order, one line per step
    pub fn narration(&self) -> String {
        self.steps
            .iter()
            .map(|s| s.narration.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Narration lines for steps `0..=index` (what the viewer has seen so far)
    pub fn narration_until(&self, index: usize) -> Vec<&str> {
        self.steps
            .iter()
            .take(index.saturating_add(1))
            .map(|s| s.narration.as_str())
            .collect()
    }

    /// Estimate the memory held by all steps in bytes
    pub fn estimated_size(&self) -> usize {
        self.steps.iter().map(Step::estimated_size).sum()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(kind: StepKind, narration: &str) -> Step {
        Step::new(kind, &[3, 1], narration)
    }

    #[test]
    fn test_step_at_bounds() {
        let trace = Trace::new(
            Algorithm::BubbleSort,
            vec![step(StepKind::Start, "start"), step(StepKind::Done, "done")],
        );
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.step_at(1).unwrap().kind, StepKind::Done);
        assert_eq!(
            trace.step_at(2),
            Err(TraceError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_narration_joins_in_order() {
        let trace = Trace::new(
            Algorithm::LinearSearch,
            vec![
                step(StepKind::Start, "one"),
                step(StepKind::Compare, "two"),
                step(StepKind::NotFound, "three"),
            ],
        );
        assert_eq!(trace.narration(), "one\ntwo\nthree");
        assert_eq!(trace.narration_until(1), vec!["one", "two"]);
        assert_eq!(trace.narration_until(usize::MAX).len(), 3);
    }

    #[test]
    #[should_panic(expected = "at least one step")]
    fn test_empty_trace_is_rejected() {
        let _ = Trace::new(Algorithm::BubbleSort, Vec::new());
    }

    #[test]
    fn test_sorted_views() {
        let resolved: FxHashSet<usize> = [2, 0].into_iter().collect();
        let s = step(StepKind::Compare, "x")
            .highlight([4, 1])
            .compare(vec![3])
            .resolve(&resolved);
        assert_eq!(s.highlighted_sorted(), vec![1, 3, 4]);
        assert_eq!(s.resolved_sorted(), vec![0, 2]);
        assert_eq!(s.compared, Some(vec![3]));
        assert!(s.estimated_size() > 0);
    }
}
