//! Left-to-right function composition.
//!
//! Two forms are provided:
//!
//! - [`pipe`] / [`flow`] compose dynamic [`Function`]s; each stage receives
//!   the previous stage's result as its only argument
//! - [`pipe!`](crate::pipe!) / [`flow!`](crate::flow!) compose plain Rust
//!   functions with their static types
//!
//! # Laws
//!
//! - `flow(x, fs) == pipe(fs)(x)`
//! - `pipe([])` is the identity
//! - `pipe([f, g, h])(x) == h(g(f(x)))`
//!
//! # Examples
//!
//! ```rust
//! use fntools::arguments;
//! use fntools::compose::{flow, pipe};
//! use fntools::function::Function;
//! use fntools::value::{FromValue, Value};
//!
//! let increment = Function::opaque(|arguments| {
//!     let value = i64::from_value(arguments.into_iter().next().unwrap_or_default())?;
//!     Ok(Value::Integer(value + 1))
//! });
//!
//! let add_three = pipe([increment.clone(), increment.clone(), increment.clone()]);
//! assert_eq!(add_three.call(arguments![1]), Ok(Value::Integer(4)));
//! assert_eq!(flow(1, &[increment.clone(), increment]), Ok(Value::Integer(3)));
//! ```

mod pipe_macro;

use crate::error::FunctionError;
use crate::function::{Arguments, Function, Parameter, Signature};
use crate::value::Value;

/// Composes `functions` left to right into a function of one argument.
///
/// The returned function declares a single parameter, so calling it with no
/// argument or more than one fails while binding. An empty sequence yields
/// the identity.
pub fn pipe(functions: impl IntoIterator<Item = Function>) -> Function {
    let stages: Vec<Function> = functions.into_iter().collect();
    let signature = Signature::new(vec![Parameter::positional("value")]);

    Function::from_signature(Some("pipe".to_owned()), signature, move |bound| {
        let input = bound.into_iter().next().unwrap_or_default();
        run(input, &stages)
    })
}

/// Threads `value` through `functions` left to right and returns the result.
///
/// # Errors
///
/// Returns the first error raised by a stage; later stages are not called.
pub fn flow(value: impl Into<Value>, functions: &[Function]) -> Result<Value, FunctionError> {
    run(value.into(), functions)
}

fn run(input: Value, stages: &[Function]) -> Result<Value, FunctionError> {
    stages.iter().try_fold(input, |value, stage| {
        let mut arguments = Arguments::new();
        arguments.push(value);
        stage.call(arguments)
    })
}
