//! Integration tests for the combinator library.
//!
//! Targets are declared with `function!` so that the combinators needing a
//! declared arity (`curry`, `rest`, `over_args`) can inspect them.

#![cfg(feature = "derive")]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use fntools::prelude::*;
use rstest::rstest;

fn sum3() -> Function {
    function!(|a: i64, b: i64, c: i64| a + b + c)
}

/// Non-commutative, so argument order shows in the result.
fn digits3() -> Function {
    function!(|a: i64, b: i64, c: i64| a * 100 + b * 10 + c)
}

fn counting(result: impl Into<Value>) -> (Arc<AtomicUsize>, Function) {
    let calls = Arc::new(AtomicUsize::new(0));
    let result = result.into();
    let function = {
        let calls = Arc::clone(&calls);
        Function::opaque(move |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(result.clone())
        })
    };
    (calls, function)
}

fn call_in_groups(function: &Function, groups: &[&[i64]]) -> Value {
    groups.iter().fold(Value::Function(function.clone()), |current, group| {
        let arguments: Arguments = group.iter().copied().map(Value::from).collect();
        current
            .as_function()
            .expect("every intermediate step is a function")
            .call(arguments)
            .expect("call succeeds")
    })
}

// =============================================================================
// Call-count gates
// =============================================================================

#[rstest]
fn test_after_skips_until_threshold() {
    let (calls, function) = counting(1);
    let gated = after(2, &function);

    assert_eq!(gated.call(arguments![]), Ok(Value::Unit));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(gated.call(arguments![]), Ok(Value::Integer(1)));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    gated.call(arguments![]).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[rstest]
fn test_before_caches_second_result() {
    let counter = Arc::new(AtomicUsize::new(0));
    let next = {
        let counter = Arc::clone(&counter);
        function!(move || counter.fetch_add(1, Ordering::SeqCst) as i64 + 1)
    };
    let limited = before(3, &next);

    let results: Vec<_> = (0..4).map(|_| limited.call(arguments![]).unwrap()).collect();
    assert_eq!(
        results,
        vec![
            Value::Integer(1),
            Value::Integer(2),
            Value::Integer(2),
            Value::Integer(2),
        ]
    );
    assert_eq!(counter.load(Ordering::SeqCst), 2);
}

#[rstest]
fn test_once_invokes_exactly_once() {
    let (calls, function) = counting("first");
    let single = once(&function);

    for _ in 0..3 {
        assert_eq!(single.call(arguments![]), Ok(Value::from("first")));
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Argument shaping
// =============================================================================

#[rstest]
fn test_ary_passes_first_arguments() {
    let list = function!(|#[variadic] values: Vec<Value>| values);
    assert_eq!(
        ary(&list, 3).call(arguments![1, 2, 3, 4, 5]),
        Ok(Value::from(vec![1, 2, 3]))
    );
}

#[rstest]
fn test_unary_leaves_default_in_place() {
    let describe = function!(|a: i64, #[default(())] b: Option<i64>| format!("a: {a}, b: {b:?}"));

    assert_eq!(describe.call(arguments![1, 2]), Ok(Value::from("a: 1, b: Some(2)")));
    assert_eq!(unary(&describe).call(arguments![1, 2]), Ok(Value::from("a: 1, b: None")));
}

#[rstest]
fn test_rest_packs_trailing_arguments() {
    let total = function!(|a: i64, b: i64, others: Vec<i64>| a + b + others.iter().sum::<i64>());
    let packed = rest(&total).unwrap();

    assert_eq!(packed.call(arguments![1, 2, 3, 4]), Ok(Value::Integer(10)));
    assert_eq!(packed.call(arguments![1, 2]), Ok(Value::Integer(3)));
}

#[rstest]
fn test_spread_unpacks_single_list() {
    assert_eq!(spread(&sum3()).call(arguments![vec![1, 2, 3]]), Ok(Value::Integer(6)));
}

#[rstest]
#[case(vec![])]
#[case(vec![1])]
#[case(vec![1, 2, 3, 4])]
fn test_spread_undoes_rest(#[case] values: Vec<i64>) {
    let list = Function::opaque(|arguments| Ok(Value::List(arguments.into_vec())));
    let arguments: Arguments = values.iter().copied().map(Value::from).collect();

    let packed_then_spread = rest_from(&spread(&list), 0);
    assert_eq!(packed_then_spread.call(arguments.clone()), list.call(arguments));

    let total = function!(|values: Vec<i64>| values.iter().sum::<i64>());
    let round_trip = spread(&rest_from(&total, 0));
    assert_eq!(
        round_trip.call(arguments![values.clone()]),
        total.call(arguments![values])
    );
}

#[rstest]
fn test_rearg_selects_by_position() {
    let rearranged = rearg(&digits3(), vec![2, 0, 1]);
    assert_eq!(rearranged.call(arguments![1, 2, 3]), Ok(Value::Integer(312)));
}

#[rstest]
fn test_over_args_transforms_each_position() {
    let add = function!(|a: i64, b: i64| a + b);
    let double = function!(|x: i64| x * 2);
    let triple = function!(|x: i64| x * 3);

    let transformed = over_args(&add, vec![double.clone(), triple]).unwrap();
    assert_eq!(transformed.call(arguments![1, 2]), Ok(Value::Integer(8)));

    assert_eq!(
        over_args(&add, vec![double]).unwrap_err(),
        FunctionError::ArityMismatch {
            function: None,
            expected: 2,
            actual: 1,
        }
    );
}

#[rstest]
fn test_flip_reverses_arguments() {
    assert_eq!(flip(&digits3()).call(arguments![1, 2, 3]), Ok(Value::Integer(321)));
}

// =============================================================================
// Currying
// =============================================================================

#[rstest]
#[case(&[&[1_i64] as &[i64], &[2], &[3]])]
#[case(&[&[1_i64, 2] as &[i64], &[3]])]
#[case(&[&[1_i64] as &[i64], &[2, 3]])]
#[case(&[&[1_i64, 2, 3] as &[i64]])]
#[case(&[&[] as &[i64], &[1], &[], &[2, 3]])]
fn test_curry_every_partition_matches_direct_call(#[case] groups: &[&[i64]]) {
    let curried = curry(&digits3(), Vec::new()).unwrap();
    assert_eq!(call_in_groups(&curried, groups), Value::Integer(123));
}

#[rstest]
#[case(&[&[3_i64] as &[i64], &[2], &[1]])]
#[case(&[&[3_i64, 2] as &[i64], &[1]])]
#[case(&[&[3_i64, 2, 1] as &[i64]])]
fn test_curry_right_reverses_collected_arguments(#[case] groups: &[&[i64]]) {
    let curried = curry_right(&digits3(), Vec::new()).unwrap();
    assert_eq!(call_in_groups(&curried, groups), Value::Integer(123));
}

#[rstest]
fn test_curry_with_preset_and_surplus() {
    let curried = curry(&sum3(), vec![Value::from(1)]).unwrap();
    assert_eq!(curried.call(arguments![2, 3, 100]), Ok(Value::Integer(6)));
}

#[rstest]
fn test_curry_opaque_needs_explicit_arity() {
    let (_, opaque) = counting(0);
    assert!(matches!(
        curry(&opaque, Vec::new()),
        Err(FunctionError::UnsupportedSignature { .. })
    ));

    let curried = curry_with_arity(&opaque, 2, Vec::new());
    assert!(curried.call(arguments![1]).unwrap().as_function().is_some());
    assert_eq!(curried.call(arguments![1, 2]), Ok(Value::Integer(0)));
}

// =============================================================================
// Application
// =============================================================================

#[rstest]
fn test_partial_and_partial_right() {
    let digits = digits3();
    assert_eq!(
        partial(&digits, vec![1.into(), 2.into()]).call(arguments![3]),
        Ok(Value::Integer(123))
    );
    assert_eq!(
        partial_right(&digits, vec![2.into(), 3.into()]).call(arguments![1]),
        Ok(Value::Integer(123))
    );
}

#[rstest]
fn test_wrap_passes_value_first() {
    let add = function!(|a: i64, b: i64| a + b);
    let add_then_increment =
        function!(|inner: Function, a: i64, b: i64| -> Result<i64, FunctionError> {
            Ok(i64::from_value(inner.call(arguments![a, b])?)? + 1)
        });

    let wrapped = wrap(add, &add_then_increment);
    assert_eq!(wrapped.call(arguments![1, 2]), Ok(Value::Integer(4)));
}

#[rstest]
fn test_bind_gives_receiver_access() {
    let (calls, notify) = counting(());
    let instance = Object::new();
    instance.set("func", notify);

    let call_member = function!(|receiver: Object| receiver.call_method("func", arguments![]));
    let bound = bind(&call_member, instance, Vec::new());

    bound.call(arguments![]).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[rstest]
fn test_attach_installs_member() {
    let constant_reply = function!(|_receiver: Object| "test-return-value");
    let instance = Object::new();

    let method = attach(&constant_reply, &instance, Some("fn_test_name")).unwrap();

    assert!(instance.contains("fn_test_name"));
    assert_eq!(method.call(arguments![]), Ok(Value::from("test-return-value")));
    assert_eq!(
        instance.call_method("fn_test_name", arguments![]),
        constant_reply.call(arguments![instance.clone()])
    );
}

#[rstest]
fn test_attached_method_reads_receiver_state() {
    let instance = Object::new();
    instance.set("balance", 100);
    let deposit = function!(|receiver: Object, amount: i64| -> Result<i64, FunctionError> {
        let balance = i64::from_value(receiver.get("balance").unwrap_or_default())? + amount;
        receiver.set("balance", balance);
        Ok(balance)
    });

    attach(&deposit, &instance, Some("deposit")).unwrap();

    assert_eq!(instance.call_method("deposit", arguments![50]), Ok(Value::Integer(150)));
    assert_eq!(instance.get("balance"), Some(Value::Integer(150)));
}

#[rstest]
fn test_negate_inverts_result() {
    let add = function!(|a: i64, b: i64| a + b);
    assert_eq!(negate(&add).call(arguments![1, 2]), Ok(Value::Bool(false)));
    assert_eq!(negate(&add).call(arguments![1, -1]), Ok(Value::Bool(true)));
}

#[rstest]
fn test_constructing_combinators_never_calls_target() {
    let (calls, function) = counting(0);

    let _ = (
        after(1, &function),
        before(5, &function),
        once(&function),
        ary(&function, 1),
        rest_from(&function, 0),
        spread(&function),
        curry_with_arity(&function, 2, vec![Value::from(1)]),
        rearg(&function, vec![0]),
        negate(&function),
        partial(&function, Vec::new()),
        wrap(1, &function),
        flip(&function),
    );

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[rstest]
fn test_target_errors_propagate_through_wrappers() {
    let failing = Function::named("failing", |_| Err(FunctionError::raised("boom")));
    let expected = Err(FunctionError::raised("boom"));

    assert_eq!(ary(&failing, 1).call(arguments![1]), expected);
    assert_eq!(partial(&failing, Vec::new()).call(arguments![]), expected);
    assert_eq!(once(&failing).call(arguments![]), expected);
    assert_eq!(flip(&failing).call(arguments![]), expected);
}
