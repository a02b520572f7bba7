//! Call-count gates: [`after`], [`before`], and [`once`].
//!
//! Each gate owns a private counter that starts at zero when the wrapper is
//! created and is incremented on every call to that wrapper. Two wrappers
//! around the same target never share a counter.
//!
//! # Thread Safety
//!
//! The returned functions may be called from several threads at once:
//!
//! - [`after`] uses an atomic counter, so exactly the calls numbered `n` and
//!   above reach the target
//! - [`before`] holds a reentrant lock while the target runs, so the target
//!   runs exactly `n - 1` times in total; other threads wait for the result
//!
//! A target that calls its own `before` wrapper on the same thread does not
//! deadlock: the nested call is counted like any other call.

use std::cell::RefCell;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::ReentrantMutex;

use crate::function::{Arguments, CallResult, Function};
use crate::value::Value;

/// Creates a function that calls `function` only once it has been called `threshold` or more times.
///
/// Calls numbered `1..threshold` return [`Value::Unit`] without touching the
/// target; call `threshold` and every later call pass their own arguments to
/// `function` and return its result. A threshold of `0` or `1` opens the gate
/// immediately.
///
/// # Examples
///
/// ```rust
/// use fntools::arguments;
/// use fntools::combinators::after;
/// use fntools::function::Function;
/// use fntools::value::Value;
///
/// let done = Function::opaque(|_| Ok(Value::from("done")));
/// let on_third = after(3, &done);
///
/// assert_eq!(on_third.call(arguments![]), Ok(Value::Unit));
/// assert_eq!(on_third.call(arguments![]), Ok(Value::Unit));
/// assert_eq!(on_third.call(arguments![]), Ok(Value::from("done")));
/// assert_eq!(on_third.call(arguments![]), Ok(Value::from("done")));
/// ```
pub fn after(threshold: usize, function: &Function) -> Function {
    let target = function.clone();
    let count = AtomicUsize::new(0);

    function.wrapper(move |arguments| {
        let call = count
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                Some(current.saturating_add(1))
            })
            .map_or_else(|current| current, |previous| previous.saturating_add(1));

        if call < threshold {
            return Ok(Value::Unit);
        }
        if call == threshold {
            tracing::trace!(threshold, function = target.name(), "after gate opened");
        }
        target.call(arguments)
    })
}

#[derive(Default)]
struct BeforeState {
    count: usize,
    last_result: Value,
}

/// Creates a function that calls `function` while it has been called fewer than `threshold` times.
///
/// Calls numbered `1..threshold` invoke `function`, cache its result, and
/// return it. From call `threshold` on, the cached result of the last
/// successful invocation is returned without calling `function`
/// ([`Value::Unit`] if it never ran).
///
/// If the target fails, the error propagates, the call still counts, and the
/// cache keeps its previous value.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicI64, Ordering};
///
/// use fntools::arguments;
/// use fntools::combinators::before;
/// use fntools::function::Function;
/// use fntools::value::Value;
///
/// let counter = Arc::new(AtomicI64::new(0));
/// let next = {
///     let counter = Arc::clone(&counter);
///     Function::opaque(move |_| Ok(Value::Integer(counter.fetch_add(1, Ordering::SeqCst) + 1)))
/// };
/// let limited = before(3, &next);
///
/// assert_eq!(limited.call(arguments![]), Ok(Value::Integer(1)));
/// assert_eq!(limited.call(arguments![]), Ok(Value::Integer(2)));
/// assert_eq!(limited.call(arguments![]), Ok(Value::Integer(2)));
/// assert_eq!(limited.call(arguments![]), Ok(Value::Integer(2)));
/// assert_eq!(counter.load(Ordering::SeqCst), 2);
/// ```
pub fn before(threshold: usize, function: &Function) -> Function {
    let target = function.clone();
    let state = ReentrantMutex::new(RefCell::new(BeforeState::default()));

    function.wrapper(move |arguments| call_before(&state, threshold, &target, arguments))
}

fn call_before(
    state: &ReentrantMutex<RefCell<BeforeState>>,
    threshold: usize,
    target: &Function,
    arguments: Arguments,
) -> CallResult {
    let guard = state.lock();

    let call = {
        let mut state = guard.borrow_mut();
        state.count = state.count.saturating_add(1);
        if state.count >= threshold {
            if state.count == threshold {
                tracing::trace!(threshold, function = target.name(), "before gate closed");
            }
            return Ok(state.last_result.clone());
        }
        state.count
    };

    let result = target.call(arguments)?;
    tracing::trace!(call, function = target.name(), "before gate cached result");
    guard.borrow_mut().last_result = result.clone();
    Ok(result)
}

/// Creates a function that calls `function` on its first call only.
///
/// Every later call returns the first call's result. Equivalent to
/// `before(2, function)`.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// use fntools::arguments;
/// use fntools::combinators::once;
/// use fntools::function::Function;
/// use fntools::value::Value;
///
/// let runs = Arc::new(AtomicUsize::new(0));
/// let initialize = {
///     let runs = Arc::clone(&runs);
///     Function::opaque(move |_| {
///         runs.fetch_add(1, Ordering::SeqCst);
///         Ok(Value::from("ready"))
///     })
/// };
/// let initialize_once = once(&initialize);
///
/// for _ in 0..5 {
///     assert_eq!(initialize_once.call(arguments![]), Ok(Value::from("ready")));
/// }
/// assert_eq!(runs.load(Ordering::SeqCst), 1);
/// ```
pub fn once(function: &Function) -> Function {
    before(2, function)
}
