//! Typed left-to-right composition of plain Rust functions.
//!
//! These macros work on ordinary closures and `fn` items rather than
//! dynamic [`Function`](crate::function::Function)s, so they keep the
//! static types of each stage.

/// Composes functions left to right into a reusable closure.
///
/// `pipe!(f, g, h)` is `move |input| h(g(f(input)))`.
///
/// # Examples
///
/// ```rust
/// use fntools::pipe;
///
/// fn parse(text: &str) -> i64 { text.parse().unwrap_or_default() }
/// fn double(value: i64) -> i64 { value * 2 }
///
/// let parse_and_double = pipe!(parse, double, |value: i64| value + 1);
/// assert_eq!(parse_and_double("20"), 41);
/// assert_eq!(parse_and_double("x"), 1);
/// ```
#[macro_export]
macro_rules! pipe {
    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $second_function:expr $(,)?) => {{
        let first = $first_function;
        let second = $second_function;
        move |input| second(first(input))
    }};

    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let remaining = $crate::pipe!($($remaining_functions),+);
        move |input| remaining(first(input))
    }};
}

/// Threads a value through functions left to right, eagerly.
///
/// `flow!(x, f, g)` is `g(f(x))`; `flow!(x)` is `x`.
///
/// # Examples
///
/// ```rust
/// use fntools::flow;
///
/// let words = flow!("a b c", str::split_whitespace, Iterator::count);
/// assert_eq!(words, 3);
/// ```
#[macro_export]
macro_rules! flow {
    ($value:expr $(,)?) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::flow!($function($value), $($remaining_functions),+)
    };
}
