//! Recursive factorial trace
//!
//! The recursion is simulated with an explicit frame stack so every call
//! and every return becomes its own step. Frame ids come from a counter
//! local to one invocation, so two traces never share ids.

use crate::trace::{CallFrame, Step, StepKind};
use rustc_hash::FxHashSet;

/// Record the calls and returns of `factorial(n)`. `n` must be in
/// `0..=20`; callers validate it first.
pub fn factorial(n: i64) -> Vec<Step> {
    let mut steps = vec![Step::new(
        StepKind::Start,
        &[],
        format!("Start computing {}! recursively", n),
    )];
    let mut stack: Vec<CallFrame> = Vec::new();
    let mut next_id: u32 = 1;

    let mut k = n;
    loop {
        stack.push(CallFrame {
            id: next_id,
            argument: k,
            result: None,
        });
        next_id += 1;

        let narration = if k <= 1 {
            format!("Call factorial({}): base case reached", k)
        } else {
            format!("Call factorial({}): needs factorial({})", k, k - 1)
        };
        steps.push(frame_step(StepKind::Call, &stack, narration));

        if k <= 1 {
            break;
        }
        k -= 1;
    }

    let mut returned: i64 = 1;
    while let Some(top) = stack.last_mut() {
        let narration = if top.argument <= 1 {
            returned = 1;
            format!("factorial({}) returns 1", top.argument)
        } else {
            let value = top.argument * returned;
            let text = format!(
                "factorial({}) returns {} × {} = {}",
                top.argument, top.argument, returned, value
            );
            returned = value;
            text
        };
        top.result = Some(returned);
        steps.push(frame_step(StepKind::Return, &stack, narration));
        stack.pop();
    }

    steps.push(Step::new(
        StepKind::Done,
        &[],
        format!("Done: {}! = {}", n, returned),
    ));
    steps
}

/// Step showing the whole stack; the top frame is highlighted and frames
/// that already hold a result are resolved.
fn frame_step(kind: StepKind, stack: &[CallFrame], narration: String) -> Step {
    let arguments: Vec<i64> = stack.iter().map(|f| f.argument).collect();
    let resolved: FxHashSet<usize> = stack
        .iter()
        .enumerate()
        .filter(|(_, f)| f.result.is_some())
        .map(|(i, _)| i)
        .collect();
    Step::new(kind, &arguments, narration)
        .highlight([stack.len() - 1])
        .resolve(&resolved)
        .with_frames(stack)
}
