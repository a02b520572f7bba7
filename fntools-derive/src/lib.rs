//! Signature-capturing macros for fntools.
//!
//! fntools combinators such as `curry`, `rest` and `over_args` need to know
//! how many parameters a function declares. Rust erases that information from
//! closure and `fn` types, so these macros read it from the source at compile
//! time and attach it to the resulting `fntools::function::Function`.
//!
//! # Available Macros
//!
//! - [`function!`]: Wraps a closure, capturing its parameter list
//! - [`macro@signature`]: Attribute for `fn` items, generating a `{name}_function()` constructor
//!
//! # Parameter Markers
//!
//! - `#[default(expr)]`: the parameter takes `expr` when the caller omits it
//! - `#[variadic]`: the parameter collects every remaining argument as a list
//!
//! A parameter declared after the `#[variadic]` one can only ever take its
//! default, so it must carry a `#[default]`; otherwise expansion fails.
//!
//! # Example
//!
//! ```rust,ignore
//! use fntools::prelude::*;
//!
//! let add = function!(|first: i64, #[default(10)] second: i64| first + second);
//!
//! assert_eq!(declared_arity(&add)?, 2);
//! assert_eq!(add.call(arguments![1])?, Value::Integer(11));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod function;
mod parameters;

use proc_macro::TokenStream;

/// Converts a closure into a `fntools::function::Function` with a declared signature.
///
/// Typed parameters are converted from `Value` with `FromValue`; untyped
/// parameters receive the `Value` itself. The closure may return any type
/// implementing `IntoCallResult`, including `Result<T, FunctionError>`.
///
/// # Usage
///
/// ```rust,ignore
/// use fntools::prelude::*;
///
/// let volume = function!(|width: i64, height: i64, depth: i64| width * height * depth);
/// assert_eq!(volume.call(arguments![2, 3, 4])?, Value::Integer(24));
/// ```
///
/// # Defaults and variadics
///
/// ```rust,ignore
/// use fntools::prelude::*;
///
/// let describe = function!(|first: i64, #[default("none")] second: String| {
///     format!("first: {first}, second: {second}")
/// });
/// assert_eq!(describe.call(arguments![1])?, Value::from("first: 1, second: none"));
///
/// let total = function!(|#[variadic] values: Vec<i64>| values.iter().sum::<i64>());
/// assert_eq!(total.call(arguments![1, 2, 3])?, Value::Integer(6));
/// ```
///
/// # Type constraints
///
/// The closure must be `Fn + Send + Sync + 'static`; capture owned data with
/// `move` when it refers to its environment.
#[proc_macro]
pub fn function(input: TokenStream) -> TokenStream {
    function::expand_closure(input.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Captures the signature of a free `fn` item.
///
/// The function is emitted unchanged (minus the parameter markers) and a
/// sibling constructor `{name}_function()` returns a named
/// `fntools::function::Function` calling it.
///
/// # Usage
///
/// ```rust,ignore
/// use fntools::prelude::*;
///
/// #[signature]
/// fn greet(name: String, #[default("Hello")] greeting: String) -> String {
///     format!("{greeting}, {name}!")
/// }
///
/// let greet = greet_function();
/// assert_eq!(greet.name(), Some("greet"));
/// assert_eq!(greet.call(arguments!["Ada"])?, Value::from("Hello, Ada!"));
/// ```
///
/// # Restrictions
///
/// Generic, `async`, and receiver-taking functions are rejected.
#[proc_macro_attribute]
pub fn signature(attribute: TokenStream, item: TokenStream) -> TokenStream {
    function::expand_item(attribute.into(), item.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
