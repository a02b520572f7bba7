//! Call-count gates shared across threads.
//!
//! Every thread calls the same wrapper; the gates must keep their
//! exactly-once and exactly-(n - 1) guarantees regardless of interleaving.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use fntools::prelude::*;
use rstest::rstest;

const THREADS: usize = 8;
const CALLS_PER_THREAD: usize = 50;

fn counting() -> (Arc<AtomicUsize>, Function) {
    let calls = Arc::new(AtomicUsize::new(0));
    let function = {
        let calls = Arc::clone(&calls);
        Function::opaque(move |_| {
            let call = calls.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(Value::Integer(i64::try_from(call).unwrap_or(i64::MAX)))
        })
    };
    (calls, function)
}

fn hammer(wrapper: &Function) -> Vec<Value> {
    thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    (0..CALLS_PER_THREAD)
                        .map(|_| wrapper.call(arguments![]).expect("call succeeds"))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|handle| handle.join().expect("Thread panicked"))
            .collect()
    })
}

// =============================================================================
// Gates
// =============================================================================

#[rstest]
fn test_once_runs_target_exactly_once_across_threads() {
    let (calls, function) = counting();
    let results = hammer(&once(&function));

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(results.iter().all(|result| *result == Value::Integer(1)));
}

#[rstest]
#[case(2)]
#[case(10)]
#[case(100)]
fn test_before_runs_target_threshold_minus_one_times(#[case] threshold: usize) {
    let (calls, function) = counting();
    let results = hammer(&before(threshold, &function));

    assert_eq!(calls.load(Ordering::SeqCst), threshold - 1);
    let cached = Value::Integer(i64::try_from(threshold - 1).unwrap());
    let cached_count = results.iter().filter(|result| **result == cached).count();
    assert_eq!(cached_count, THREADS * CALLS_PER_THREAD - (threshold - 1) + 1);
}

#[rstest]
#[case(1)]
#[case(25)]
#[case(THREADS * CALLS_PER_THREAD + 1)]
fn test_after_skips_exactly_threshold_minus_one_calls(#[case] threshold: usize) {
    let (calls, function) = counting();
    let results = hammer(&after(threshold, &function));

    let total = THREADS * CALLS_PER_THREAD;
    let expected_runs = total.saturating_sub(threshold - 1);
    assert_eq!(calls.load(Ordering::SeqCst), expected_runs);
    assert_eq!(results.iter().filter(|result| result.is_unit()).count(), total - expected_runs);
}

#[rstest]
fn test_curried_function_shared_between_threads() {
    let list = Function::opaque(|arguments| Ok(Value::List(arguments.into_vec())));
    let curried = curry_with_arity(&list, 2, Vec::new());
    let partial = curried.call(arguments!["shared"]).unwrap();
    let partial = partial.as_function().unwrap();

    thread::scope(|scope| {
        for index in 0..THREADS {
            let partial = partial.clone();
            scope.spawn(move || {
                let index = i64::try_from(index).unwrap();
                assert_eq!(
                    partial.call(arguments![index]),
                    Ok(Value::from(vec![Value::from("shared"), Value::Integer(index)]))
                );
            });
        }
    });
}
