//! Combinators that reshape the argument list before calling the target.
//!
//! - [`ary`] / [`unary`]: truncate
//! - [`rest`] / [`rest_from`]: pack the tail into a list
//! - [`spread`]: unpack a single list argument
//! - [`rearg`]: pick arguments by position
//! - [`flip`]: reverse
//! - [`over_args`]: transform each argument

use smallvec::SmallVec;

use crate::error::FunctionError;
use crate::function::{Arguments, Function, declared_arity};
use crate::value::Value;

/// Creates a function that calls `function` with at most the first `arity` arguments.
///
/// # Examples
///
/// ```rust
/// use fntools::arguments;
/// use fntools::combinators::ary;
/// use fntools::function::Function;
/// use fntools::value::Value;
///
/// let count = Function::opaque(|arguments| Ok(Value::Integer(arguments.len() as i64)));
/// assert_eq!(ary(&count, 2).call(arguments![1, 2, 3, 4]), Ok(Value::Integer(2)));
/// ```
pub fn ary(function: &Function, arity: usize) -> Function {
    let target = function.clone();
    function.wrapper(move |mut arguments| {
        arguments.truncate(arity);
        target.call(arguments)
    })
}

/// Creates a function that calls `function` with only its first argument.
///
/// Equivalent to `ary(function, 1)`.
pub fn unary(function: &Function) -> Function {
    ary(function, 1)
}

/// Creates a function that packs every argument from position `start` on
/// into one trailing list argument.
///
/// A call with fewer than `start` arguments passes them all through followed
/// by an empty list.
pub fn rest_from(function: &Function, start: usize) -> Function {
    let target = function.clone();
    function.wrapper(move |mut arguments| {
        let tail: Vec<Value> = if arguments.len() > start {
            arguments.drain(start..).collect()
        } else {
            Vec::new()
        };
        arguments.push(Value::List(tail));
        target.call(arguments)
    })
}

/// Creates a function that packs the arguments beyond the target's last
/// declared parameter into a list passed as that parameter.
///
/// The split index is the declared arity minus one (zero for a function
/// declaring no parameters). Use [`rest_from`] to choose it explicitly, or
/// for opaque functions.
///
/// # Errors
///
/// Returns [`FunctionError::UnsupportedSignature`] if `function` is opaque.
///
/// # Examples
///
/// ```rust
/// use fntools::arguments;
/// use fntools::combinators::rest;
/// use fntools::function::Function;
/// use fntools::value::{FromValue, Value};
///
/// let total = Function::builder()
///     .parameter("first")
///     .parameter("second")
///     .parameter("others")
///     .build(|bound| {
///         let mut bound = bound.into_iter();
///         let first = i64::from_value(bound.next().unwrap_or_default())?;
///         let second = i64::from_value(bound.next().unwrap_or_default())?;
///         let others = Vec::<i64>::from_value(bound.next().unwrap_or_default())?;
///         Ok(Value::Integer(first + second + others.iter().sum::<i64>()))
///     });
///
/// let packed = rest(&total).unwrap();
/// assert_eq!(packed.call(arguments![1, 2, 3, 4]), Ok(Value::Integer(10)));
/// ```
pub fn rest(function: &Function) -> Result<Function, FunctionError> {
    let start = declared_arity(function)?.saturating_sub(1);
    Ok(rest_from(function, start))
}

/// Creates a function taking a single list and calling `function` with its
/// elements as positional arguments.
///
/// The inverse of [`rest`]'s tail packing.
///
/// # Errors
///
/// Calls to the returned function fail with
/// - [`FunctionError::MissingArgument`] when called without arguments
/// - [`FunctionError::TooManyArguments`] when called with more than one
/// - [`FunctionError::TypeMismatch`] when the argument is not a list
pub fn spread(function: &Function) -> Function {
    let target = function.clone();
    let name = function.name().map(str::to_owned);

    function.wrapper(move |arguments| {
        if arguments.len() > 1 {
            return Err(FunctionError::TooManyArguments {
                function: name.clone(),
                expected: 1,
                actual: arguments.len(),
            });
        }

        match arguments.into_iter().next() {
            Some(Value::List(values)) => target.call(values),
            Some(other) => Err(FunctionError::TypeMismatch {
                expected: "list",
                actual: other.kind(),
            }),
            None => Err(FunctionError::MissingArgument {
                function: name.clone(),
                parameter: "arguments".to_owned(),
            }),
        }
    })
}

/// Creates a function that calls `function` with arguments picked by position.
///
/// The i-th argument passed to `function` is the call's argument at
/// `indices[i]`; the number of indices is the effective arity. Positions may
/// repeat or be skipped.
///
/// # Errors
///
/// Calls to the returned function fail with [`FunctionError::IndexOutOfRange`]
/// when an index is not below the number of supplied arguments.
///
/// # Examples
///
/// ```rust
/// use fntools::arguments;
/// use fntools::combinators::rearg;
/// use fntools::function::Function;
/// use fntools::value::Value;
///
/// let list = Function::opaque(|arguments| Ok(Value::List(arguments.into_vec())));
/// let reordered = rearg(&list, vec![2, 0, 1]);
///
/// assert_eq!(reordered.call(arguments!["a", "b", "c"]), Ok(Value::from(vec!["c", "a", "b"])));
/// ```
pub fn rearg(function: &Function, indices: Vec<usize>) -> Function {
    let target = function.clone();
    function.wrapper(move |arguments| {
        let reordered = indices
            .iter()
            .map(|&index| {
                arguments
                    .get(index)
                    .cloned()
                    .ok_or(FunctionError::IndexOutOfRange {
                        index,
                        length: arguments.len(),
                    })
            })
            .collect::<Result<Arguments, _>>()?;
        target.call(reordered)
    })
}

/// Creates a function that calls `function` with its arguments reversed.
pub fn flip(function: &Function) -> Function {
    let target = function.clone();
    function.wrapper(move |mut arguments| {
        arguments.reverse();
        target.call(arguments)
    })
}

/// Creates a function that passes each argument through the transform at the same position.
///
/// The number of transforms must equal the target's declared arity. Pairing
/// is positional: surplus call arguments beyond the transform list are
/// dropped, and a short call transforms only the arguments it supplies.
///
/// # Errors
///
/// - [`FunctionError::UnsupportedSignature`] if `function` is opaque
/// - [`FunctionError::ArityMismatch`] if `transforms.len()` differs from the declared arity
///
/// # Examples
///
/// ```rust
/// use fntools::arguments;
/// use fntools::combinators::over_args;
/// use fntools::function::Function;
/// use fntools::value::{FromValue, Value};
///
/// let add = Function::builder()
///     .parameter("left")
///     .parameter("right")
///     .build(|bound| {
///         let mut bound = bound.into_iter();
///         let left = i64::from_value(bound.next().unwrap_or_default())?;
///         let right = i64::from_value(bound.next().unwrap_or_default())?;
///         Ok(Value::Integer(left + right))
///     });
/// let scale = |factor: i64| {
///     Function::opaque(move |arguments| match arguments.first() {
///         Some(Value::Integer(value)) => Ok(Value::Integer(value * factor)),
///         _ => Ok(Value::Unit),
///     })
/// };
///
/// let scaled = over_args(&add, vec![scale(2), scale(3)]).unwrap();
/// assert_eq!(scaled.call(arguments![1, 2]), Ok(Value::Integer(8)));
///
/// assert!(over_args(&add, vec![scale(2)]).is_err());
/// ```
pub fn over_args(
    function: &Function,
    transforms: Vec<Function>,
) -> Result<Function, FunctionError> {
    let arity = declared_arity(function)?;
    if transforms.len() != arity {
        tracing::debug!(
            function = function.name(),
            arity,
            transforms = transforms.len(),
            "rejected argument transforms"
        );
        return Err(FunctionError::ArityMismatch {
            function: function.name().map(str::to_owned),
            expected: arity,
            actual: transforms.len(),
        });
    }

    let target = function.clone();
    Ok(function.wrapper(move |arguments| {
        let transformed = transforms
            .iter()
            .zip(arguments)
            .map(|(transform, argument)| {
                let mut single = SmallVec::new();
                single.push(argument);
                transform.call(single)
            })
            .collect::<Result<Arguments, _>>()?;
        target.call(transformed)
    }))
}
