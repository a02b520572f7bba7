//! # fntools
//!
//! Higher-order function combinators over a dynamically typed function value.
//!
//! ## Overview
//!
//! fntools adapts the calling convention of existing functions without
//! modifying them: gating by call count, reshaping and transforming
//! arguments, partial application, currying, and composition.
//!
//! - **Values**: [`Value`], the uniform argument and result type, and
//!   [`Object`], a shared member table
//! - **Functions**: [`Function`], a shared callable that may declare a
//!   [`Signature`](function::Signature)
//! - **Combinators**: [`after`](combinators::after), [`curry`](combinators::curry),
//!   [`over_args`](combinators::over_args) and the rest of [`combinators`]
//! - **Composition**: [`pipe`](compose::pipe) / [`flow`](compose::flow) and
//!   their typed macro forms [`pipe!`] / [`flow!`]
//!
//! ## Feature Flags
//!
//! - `derive` (default): the signature-capturing macros `function!` and
//!   `#[signature]`
//!
//! ## Example
//!
//! ```rust
//! use fntools::prelude::*;
//!
//! let volume = Function::builder()
//!     .name("volume")
//!     .parameter("width")
//!     .parameter("height")
//!     .parameter("depth")
//!     .build(|bound| {
//!         let product = bound
//!             .into_iter()
//!             .map(i64::from_value)
//!             .product::<Result<i64, _>>()?;
//!         Ok(Value::Integer(product))
//!     });
//!
//! let curried = curry(&volume, Vec::new())?;
//! let partial = curried.call(arguments![2, 3])?;
//! let result = partial.as_function().unwrap().call(arguments![4])?;
//!
//! assert_eq!(result, Value::Integer(24));
//! # Ok::<(), FunctionError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

// Lets the derive macros' `::fntools::..` paths resolve inside this crate's own tests.
extern crate self as fntools;

/// Prelude module for convenient imports.
///
/// Re-exports the value model, functions, every combinator, and the
/// composition helpers.
///
/// # Usage
///
/// ```rust
/// use fntools::prelude::*;
/// ```
pub mod prelude {
    pub use crate::arguments;
    pub use crate::combinators::*;
    pub use crate::compose::{flow, pipe};
    pub use crate::error::FunctionError;
    pub use crate::function::{
        Arguments, CallResult, Function, Parameter, ParameterKind, Signature, declared_arity,
        parameters,
    };
    pub use crate::value::{FromValue, IntoCallResult, Object, Value};

    #[cfg(feature = "derive")]
    pub use fntools_derive::{function, signature};
}

pub mod combinators;
pub mod compose;
pub mod error;
pub mod function;
pub mod value;

pub use error::FunctionError;
pub use function::Function;
pub use value::{Object, Value};

#[cfg(feature = "derive")]
pub use fntools_derive::{function, signature};
