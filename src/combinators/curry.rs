//! Progressive argument accumulation: [`curry`] and [`curry_right`].
//!
//! A curried function collects arguments across calls. While fewer than
//! `arity` arguments have been collected, each call returns a new curried
//! function (as [`Value::Function`]) holding everything collected so far;
//! the call that reaches `arity` invokes the target with exactly `arity`
//! arguments, ignoring any surplus.
//!
//! Accumulation is cumulative and persistent: a partially applied curried
//! function can be called many times, and every call starts from the same
//! collected prefix.
//!
//! # Arity
//!
//! [`curry`] and [`curry_right`] read the arity from the target's signature.
//! For opaque functions, supply it with [`curry_with_arity`] /
//! [`curry_right_with_arity`].
//!
//! # Examples
//!
//! ```rust
//! use fntools::arguments;
//! use fntools::combinators::curry_with_arity;
//! use fntools::function::Function;
//! use fntools::value::Value;
//!
//! let list = Function::opaque(|arguments| Ok(Value::List(arguments.into_vec())));
//! let curried = curry_with_arity(&list, 3, Vec::new());
//!
//! let step = curried.call(arguments![1]).unwrap();
//! let step = step.as_function().unwrap().call(arguments![2]).unwrap();
//! let done = step.as_function().unwrap().call(arguments![3, 4]).unwrap();
//!
//! assert_eq!(done, Value::from(vec![1, 2, 3]));
//! ```

use crate::error::FunctionError;
use crate::function::{Arguments, Function, Parameter, Signature, declared_arity};
use crate::value::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
}

/// Curries `function` over its declared arity, with `preset` arguments
/// collected before the first call.
///
/// # Errors
///
/// Returns [`FunctionError::UnsupportedSignature`] if `function` is opaque.
pub fn curry(function: &Function, preset: Vec<Value>) -> Result<Function, FunctionError> {
    let arity = declared_arity(function)?;
    Ok(curry_with_arity(function, arity, preset))
}

/// Curries `function` over an explicit `arity`.
pub fn curry_with_arity(function: &Function, arity: usize, preset: Vec<Value>) -> Function {
    curried(function, arity, preset.into_iter().collect(), Direction::Left)
}

/// Like [`curry`], but the target receives the collected arguments in reverse
/// order: the first argument supplied becomes the last parameter.
///
/// # Errors
///
/// Returns [`FunctionError::UnsupportedSignature`] if `function` is opaque.
pub fn curry_right(function: &Function, preset: Vec<Value>) -> Result<Function, FunctionError> {
    let arity = declared_arity(function)?;
    Ok(curry_right_with_arity(function, arity, preset))
}

/// Like [`curry_with_arity`], but reversing the collected arguments.
pub fn curry_right_with_arity(function: &Function, arity: usize, preset: Vec<Value>) -> Function {
    curried(function, arity, preset.into_iter().collect(), Direction::Right)
}

fn curried(
    target: &Function,
    arity: usize,
    collected: Arguments,
    direction: Direction,
) -> Function {
    let signature = remaining_signature(target, arity, collected.len(), direction);
    let name = target.name().map(str::to_owned);
    let target = target.clone();

    Function::from_raw(name, Some(signature), move |arguments| {
        let mut accumulated = collected.clone();
        accumulated.extend(arguments);

        if accumulated.len() < arity {
            return Ok(Value::Function(curried(
                &target,
                arity,
                accumulated,
                direction,
            )));
        }

        accumulated.truncate(arity);
        if direction == Direction::Right {
            accumulated.reverse();
        }
        tracing::trace!(arity, function = target.name(), ?direction, "curried call complete");
        target.call(accumulated)
    })
}

/// Describes the parameters a curried function still expects.
///
/// Uses the target's parameter names when its signature covers `arity`, and
/// positional placeholders otherwise. Defaults are not carried over: a curried
/// function waits for every parameter.
fn remaining_signature(
    target: &Function,
    arity: usize,
    collected: usize,
    direction: Direction,
) -> Signature {
    let remaining = arity.saturating_sub(collected);
    let declared = target
        .signature()
        .map(Signature::parameters)
        .filter(|parameters| parameters.len() >= arity);

    let names: Vec<String> = match (declared, direction) {
        (Some(parameters), Direction::Left) => parameters[collected.min(arity)..arity]
            .iter()
            .map(|parameter| parameter.name().to_owned())
            .collect(),
        (Some(parameters), Direction::Right) => parameters[..remaining]
            .iter()
            .rev()
            .map(|parameter| parameter.name().to_owned())
            .collect(),
        (None, _) => (0..remaining).map(|index| format!("argument_{index}")).collect(),
    };

    Signature::new(names.into_iter().map(Parameter::positional).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arguments;
    use crate::function::parameters;
    use rstest::rstest;

    fn triple() -> Function {
        Function::builder()
            .name("triple")
            .parameter("a")
            .parameter("b")
            .parameter_with_default("c", 0)
            .build(|bound| Ok(Value::List(bound)))
    }

    fn step(value: &Value, arguments: Arguments) -> Value {
        value
            .as_function()
            .expect("curried step returns a function")
            .call(arguments)
            .expect("curried step succeeds")
    }

    #[rstest]
    fn test_defaulted_parameter_still_counts() {
        let curried = curry(&triple(), Vec::new()).unwrap();
        let partial = curried.call(arguments![1, 2]).unwrap();

        assert!(partial.as_function().is_some());
        assert_eq!(step(&partial, arguments![3]), Value::from(vec![1, 2, 3]));
    }

    #[rstest]
    fn test_preset_counts_toward_arity() {
        let curried = curry(&triple(), vec![Value::from(1), Value::from(2)]).unwrap();
        assert_eq!(curried.call(arguments![3]), Ok(Value::from(vec![1, 2, 3])));
    }

    #[rstest]
    fn test_preset_beyond_arity_waits_for_a_call() {
        let curried = curry(&triple(), vec![1.into(), 2.into(), 3.into(), 4.into()]).unwrap();
        assert_eq!(curried.call(arguments![]), Ok(Value::from(vec![1, 2, 3])));
    }

    #[rstest]
    fn test_empty_call_returns_equivalent_curried_function() {
        let curried = curry(&triple(), Vec::new()).unwrap();
        let same = curried.call(arguments![]).unwrap();
        assert_eq!(step(&same, arguments![1, 2, 3]), Value::from(vec![1, 2, 3]));
    }

    #[rstest]
    fn test_partial_application_is_reusable() {
        let curried = curry(&triple(), Vec::new()).unwrap();
        let with_one = curried.call(arguments![1]).unwrap();

        assert_eq!(step(&with_one, arguments![2, 3]), Value::from(vec![1, 2, 3]));
        assert_eq!(step(&with_one, arguments![5, 6]), Value::from(vec![1, 5, 6]));
    }

    #[rstest]
    fn test_curry_right_stays_right_curried() {
        let curried = curry_right(&triple(), Vec::new()).unwrap();
        let after_one = curried.call(arguments![3]).unwrap();
        let after_two = step(&after_one, arguments![2]);

        assert_eq!(step(&after_two, arguments![1]), Value::from(vec![1, 2, 3]));
    }

    #[rstest]
    fn test_zero_arity_calls_immediately() {
        let list = Function::opaque(|arguments| Ok(Value::List(arguments.into_vec())));
        assert_eq!(
            curry_with_arity(&list, 0, Vec::new()).call(arguments![9]),
            Ok(Value::List(Vec::new()))
        );
    }

    #[rstest]
    fn test_curried_signature_lists_remaining_parameters() {
        let curried = curry(&triple(), vec![Value::from(1)]).unwrap();
        let names: Vec<_> = parameters(&curried)
            .unwrap()
            .iter()
            .map(Parameter::name)
            .collect();
        assert_eq!(names, vec!["b", "c"]);
        assert_eq!(curried.name(), Some("triple"));

        let right = curry_right(&triple(), vec![Value::from(3)]).unwrap();
        let names: Vec<_> = parameters(&right).unwrap().iter().map(Parameter::name).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[rstest]
    fn test_opaque_target_gets_placeholder_names() {
        let list = Function::opaque(|arguments| Ok(Value::List(arguments.into_vec())));
        let curried = curry_with_arity(&list, 2, Vec::new());
        assert_eq!(declared_arity(&curried), Ok(2));
        assert!(curry(&list, Vec::new()).is_err());
    }

    #[rstest]
    fn test_target_errors_propagate() {
        let failing = Function::builder()
            .parameter("a")
            .build(|_| Err(FunctionError::raised("nope")));
        let curried = curry(&failing, Vec::new()).unwrap();
        assert_eq!(curried.call(arguments![1]), Err(FunctionError::raised("nope")));
    }
}
