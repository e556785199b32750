//! Bubble sort trace
//!
//! Adjacent pairs are compared left to right; an out-of-order pair is
//! recorded as two steps (about to swap, swapped) so it can be stepped
//! through one half at a time. Each pass fixes the largest remaining value
//! at the end of the unsorted prefix. A pass without swaps ends the sort.

use crate::trace::{Step, StepKind};
use rustc_hash::FxHashSet;

pub fn bubble_sort(input: &[i64]) -> Vec<Step> {
    let mut values = input.to_vec();
    let n = values.len();
    let mut resolved: FxHashSet<usize> = FxHashSet::default();
    let mut steps = vec![Step::new(
        StepKind::Start,
        &values,
        format!("Start bubble sort on {} values: {:?}", n, values),
    )];

    let mut swaps = 0usize;
    let mut passes = 0usize;

    for pass in 0..n.saturating_sub(1) {
        passes += 1;
        let end = n - 1 - pass;
        let mut swapped = false;

        for j in 0..end {
            let (left, right) = (values[j], values[j + 1]);
            let verdict = if left > right {
                "out of order"
            } else {
                "in order"
            };
            steps.push(
                Step::new(
                    StepKind::Compare,
                    &values,
                    format!(
                        "Pass {}: compare {} (index {}) with {} (index {}): {}",
                        pass + 1,
                        left,
                        j,
                        right,
                        j + 1,
                        verdict
                    ),
                )
                .compare(vec![j, j + 1])
                .resolve(&resolved),
            );

            if left > right {
                steps.push(
                    Step::new(
                        StepKind::AboutToSwap,
                        &values,
                        format!("{} > {}, swap indices {} and {}", left, right, j, j + 1),
                    )
                    .highlight([j, j + 1])
                    .resolve(&resolved),
                );
                values.swap(j, j + 1);
                swaps += 1;
                swapped = true;
                steps.push(
                    Step::new(
                        StepKind::Swapped,
                        &values,
                        format!("Swapped: {:?}", values),
                    )
                    .highlight([j, j + 1])
                    .resolve(&resolved),
                );
            }
        }

        resolved.insert(end);
        if !swapped {
            resolved.extend(0..end);
            steps.push(
                Step::new(
                    StepKind::PassComplete,
                    &values,
                    format!("Pass {} made no swaps, so the values are sorted", pass + 1),
                )
                .resolve(&resolved),
            );
            break;
        }
        steps.push(
            Step::new(
                StepKind::PassComplete,
                &values,
                format!(
                    "Pass {} complete: {} is in its final position at index {}",
                    pass + 1,
                    values[end],
                    end
                ),
            )
            .highlight([end])
            .resolve(&resolved),
        );
    }

    resolved.extend(0..n);
    steps.push(
        Step::new(
            StepKind::Done,
            &values,
            format!(
                "Done: sorted {:?} in {} passes with {} swaps",
                values, passes, swaps
            ),
        )
        .resolve(&resolved),
    );
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(steps: &[Step]) -> Vec<StepKind> {
        steps.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn test_sorts_three_values() {
        let steps = bubble_sort(&[5, 3, 1]);
        let last = steps.last().unwrap();
        assert_eq!(last.kind, StepKind::Done);
        assert_eq!(last.sequence, vec![1, 3, 5]);
        assert_eq!(last.resolved_sorted(), vec![0, 1, 2]);
    }

    #[test]
    fn test_swap_is_split_in_two_steps() {
        let steps = bubble_sort(&[2, 1]);
        assert_eq!(
            kinds(&steps),
            vec![
                StepKind::Start,
                StepKind::Compare,
                StepKind::AboutToSwap,
                StepKind::Swapped,
                StepKind::PassComplete,
                StepKind::Done,
            ]
        );
        assert_eq!(steps[2].sequence, vec![2, 1]);
        assert_eq!(steps[3].sequence, vec![1, 2]);
    }

    #[test]
    fn test_sorted_input_exits_after_one_pass() {
        let steps = bubble_sort(&[1, 2, 3, 4]);
        let compares = steps.iter().filter(|s| s.kind == StepKind::Compare).count();
        assert_eq!(compares, 3);
        assert!(steps.iter().all(|s| s.kind != StepKind::Swapped));
        assert!(steps[steps.len() - 2].narration.contains("no swaps"));
    }

    #[test]
    fn test_empty_and_single_inputs() {
        let steps = bubble_sort(&[]);
        assert_eq!(kinds(&steps), vec![StepKind::Start, StepKind::Done]);
        assert!(steps[1].resolved.is_empty());

        let steps = bubble_sort(&[7]);
        assert_eq!(kinds(&steps), vec![StepKind::Start, StepKind::Done]);
        assert_eq!(steps[1].resolved_sorted(), vec![0]);
    }

    #[test]
    fn test_compare_steps_carry_the_pair() {
        let steps = bubble_sort(&[3, 2, 1]);
        for step in steps.iter().filter(|s| s.kind == StepKind::Compare) {
            let pair = step.compared.as_ref().unwrap();
            assert_eq!(pair.len(), 2);
            assert_eq!(pair[0] + 1, pair[1]);
        }
        assert!(steps
            .iter()
            .filter(|s| s.kind != StepKind::Compare)
            .all(|s| s.compared.is_none()));
    }

    #[test]
    fn test_resolved_grows_from_the_tail() {
        let steps = bubble_sort(&[4, 3, 2, 1]);
        let pass_ends: Vec<Vec<usize>> = steps
            .iter()
            .filter(|s| s.kind == StepKind::PassComplete)
            .map(|s| s.resolved_sorted())
            .collect();
        assert_eq!(pass_ends, vec![vec![3], vec![2, 3], vec![1, 2, 3]]);
    }
}
