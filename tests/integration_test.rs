// Integration tests for trace production and playback

use std::time::Duration;

use traceplay::errors::TraceError;
use traceplay::playback::timer::{ManualTimer, Timer};
use traceplay::playback::{Mode, Playback};
use traceplay::producer::input::parse_sequence;
use traceplay::producer::{build_trace, Algorithm, Limits, TraceRequest};
use traceplay::trace::{StepKind, Trace};

const TICK: Duration = Duration::from_millis(250);

fn build(algorithm: Algorithm, input: Vec<i64>, target: Option<i64>) -> Trace {
    let mut request = TraceRequest::new(algorithm, input);
    if let Some(target) = target {
        request = request.with_target(target);
    }
    build_trace(&request, &Limits::default()).expect("trace should build")
}

#[test]
fn test_sort_three_values() {
    let trace = build(Algorithm::BubbleSort, vec![5, 3, 1], None);

    let last = trace.last();
    assert_eq!(last.sequence, vec![1, 3, 5]);
    assert_eq!(last.resolved_sorted(), vec![0, 1, 2]);
    assert_eq!(trace.first().kind, StepKind::Start);
    assert_eq!(trace.first().sequence, vec![5, 3, 1]);
}

#[test]
fn test_empty_input_has_two_steps() {
    for (algorithm, target) in [
        (Algorithm::BubbleSort, None),
        (Algorithm::LinearSearch, Some(3)),
    ] {
        let trace = build(algorithm, vec![], target);
        assert_eq!(trace.len(), 2, "{:?}", algorithm);
        assert!(trace.last().resolved.is_empty());
        assert!(trace.iter().all(|s| s.compared.is_none()));
    }
}

#[test]
fn test_linear_search_found() {
    let trace = build(Algorithm::LinearSearch, vec![4, 8, 2], Some(8));

    let last = trace.last();
    assert_eq!(last.kind, StepKind::Found);
    assert_eq!(last.resolved_sorted(), vec![1]);
    assert!(last.narration.contains("found at index 1"));
}

#[test]
fn test_linear_search_not_found() {
    let trace = build(Algorithm::LinearSearch, vec![1, 2, 3], Some(9));

    let last = trace.last();
    assert_eq!(last.kind, StepKind::NotFound);
    assert!(last.resolved.is_empty());
    assert!(last.narration.contains("not found"));
}

#[test]
fn test_play_then_immediate_pause() {
    let trace = build(Algorithm::BubbleSort, vec![3, 2, 1], None);
    let mut playback = Playback::new(trace, TICK, ManualTimer::new());

    playback.play();
    playback.pause();

    assert_eq!(playback.current_index(), 0);
    assert_eq!(playback.mode(), Mode::Paused);
}

#[test]
fn test_replacing_trace_cancels_pending_tick() {
    let trace = build(Algorithm::BubbleSort, vec![6, 5, 4, 3], None);
    let mut playback = Playback::new(trace, TICK, ManualTimer::new());

    playback.play();
    playback.timer_mut().advance(TICK);
    assert_eq!(playback.pump(), 1);
    assert_eq!(playback.current_index(), 1);

    // a tick is outstanding at this point
    assert_eq!(playback.timer().pending(), 1);
    playback.replace_trace(build(Algorithm::LinearSearch, vec![1, 2], Some(2)));
    assert_eq!(playback.timer().pending(), 0);

    playback.timer_mut().advance(TICK * 4);
    assert_eq!(playback.pump(), 0);
    assert_eq!(playback.current_index(), 0);
    assert_eq!(playback.mode(), Mode::Idle);
}

#[test]
fn test_full_playback_reaches_sorted_state() {
    let trace = build(Algorithm::BubbleSort, vec![9, 4, 7, 1], None);
    let len = trace.len();
    let mut playback = Playback::new(trace, TICK, ManualTimer::new());

    playback.play();
    let mut ticks = 0;
    while playback.mode() == Mode::Playing {
        playback.timer_mut().advance(TICK);
        ticks += playback.pump();
    }

    // one tick per step after the first, plus the finishing tick
    assert_eq!(ticks, len);
    assert_eq!(playback.mode(), Mode::Finished);
    assert_eq!(playback.current_step().sequence, vec![1, 4, 7, 9]);
}

#[test]
fn test_no_aliasing_with_caller_input() {
    let mut input = vec![3, 1, 2];
    let request = TraceRequest::new(Algorithm::BubbleSort, input.clone());
    let trace = build_trace(&request, &Limits::default()).unwrap();
    let snapshot: Vec<Vec<i64>> = trace.iter().map(|s| s.sequence.clone()).collect();

    input[0] = 100;
    input.push(7);
    drop(request);

    let after: Vec<Vec<i64>> = trace.iter().map(|s| s.sequence.clone()).collect();
    assert_eq!(snapshot, after);
    assert_eq!(trace.first().sequence, vec![3, 1, 2]);
}

#[test]
fn test_invalid_input_builds_nothing() {
    let err = parse_sequence("4, 8, eight").unwrap_err();
    assert!(matches!(err, TraceError::InvalidInput { .. }));

    let request = TraceRequest::new(Algorithm::Factorial, vec![99]);
    let err = build_trace(&request, &Limits::default()).unwrap_err();
    assert!(err.is_user_facing());
}

#[test]
fn test_factorial_trace_narrates_calls_and_returns() {
    let trace = build(Algorithm::Factorial, vec![3], None);
    let narration = trace.narration();

    assert!(narration.contains("Call factorial(3)"));
    assert!(narration.contains("Call factorial(1): base case reached"));
    assert!(narration.contains("factorial(3) returns 3 × 2 = 6"));
    assert!(narration.ends_with("Done: 3! = 6"));
    assert_eq!(trace.algorithm(), Algorithm::Factorial);
}

#[test]
fn test_step_at_out_of_range() {
    let trace = build(Algorithm::BubbleSort, vec![1, 2], None);
    let len = trace.len();
    assert!(trace.step_at(len - 1).is_ok());
    assert_eq!(
        trace.step_at(len),
        Err(TraceError::IndexOutOfRange { index: len, len })
    );
}
