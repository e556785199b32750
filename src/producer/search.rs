//! Linear search trace

use crate::trace::{Step, StepKind};
use rustc_hash::FxHashSet;

/// Scan `input` left to right for `target`, stopping at the first match.
pub fn linear_search(input: &[i64], target: i64) -> Vec<Step> {
    let mut steps = vec![Step::new(
        StepKind::Start,
        input,
        format!("Start linear search for {} in {} values", target, input.len()),
    )];

    for (i, &value) in input.iter().enumerate() {
        let relation = if value == target { "==" } else { "!=" };
        steps.push(
            Step::new(
                StepKind::Compare,
                input,
                format!("Check index {}: {} {} {}", i, value, relation, target),
            )
            .compare(vec![i]),
        );

        if value == target {
            let found: FxHashSet<usize> = [i].into_iter().collect();
            steps.push(
                Step::new(
                    StepKind::Found,
                    input,
                    format!("Target {} found at index {}", target, i),
                )
                .highlight([i])
                .resolve(&found),
            );
            return steps;
        }
    }

    steps.push(Step::new(
        StepKind::NotFound,
        input,
        format!(
            "Target {} not found after checking {} values",
            target,
            input.len()
        ),
    ));
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_in_the_middle() {
        let steps = linear_search(&[4, 8, 2], 8);
        assert_eq!(steps.len(), 4);
        let last = steps.last().unwrap();
        assert_eq!(last.kind, StepKind::Found);
        assert_eq!(last.resolved_sorted(), vec![1]);
        assert!(last.narration.contains("found at index 1"));
    }

    #[test]
    fn test_stops_at_first_match() {
        let steps = linear_search(&[7, 7, 7], 7);
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[2].resolved_sorted(), vec![0]);
    }

    #[test]
    fn test_not_found() {
        let steps = linear_search(&[1, 2, 3], 9);
        assert_eq!(steps.len(), 5);
        let last = steps.last().unwrap();
        assert_eq!(last.kind, StepKind::NotFound);
        assert!(last.resolved.is_empty());
        assert!(last.narration.contains("not found"));
    }

    #[test]
    fn test_empty_input() {
        let steps = linear_search(&[], 1);
        let kinds: Vec<StepKind> = steps.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![StepKind::Start, StepKind::NotFound]);
        assert!(steps[1].resolved.is_empty());
    }

    #[test]
    fn test_compare_steps_inspect_one_index() {
        let steps = linear_search(&[5, 6, 7], 7);
        let inspected: Vec<Vec<usize>> = steps.iter().filter_map(|s| s.compared.clone()).collect();
        assert_eq!(inspected, vec![vec![0], vec![1], vec![2]]);
    }
}
