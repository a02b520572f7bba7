//! Partial application, receivers, and result adaptation.

use crate::error::FunctionError;
use crate::function::{Arguments, Function};
use crate::value::{Object, Value};

fn prepend(preset: &[Value], arguments: Arguments) -> Arguments {
    preset.iter().cloned().chain(arguments).collect()
}

/// Creates a function that calls `function` with `preset` followed by the call's arguments.
///
/// When `function` has a signature, the result declares the parameters
/// `preset` leaves unfilled, so it can be curried or inspected further.
///
/// # Examples
///
/// ```rust
/// use fntools::arguments;
/// use fntools::combinators::partial;
/// use fntools::function::Function;
/// use fntools::value::Value;
///
/// let list = Function::opaque(|arguments| Ok(Value::List(arguments.into_vec())));
/// let greet = partial(&list, vec![Value::from("hello")]);
///
/// assert_eq!(greet.call(arguments!["world"]), Ok(Value::from(vec!["hello", "world"])));
/// ```
pub fn partial(function: &Function, preset: Vec<Value>) -> Function {
    let remaining = function
        .signature()
        .map(|signature| signature.without_leading(preset.len()));
    let target = function.clone();
    function.reshaped(remaining, move |arguments| target.call(prepend(&preset, arguments)))
}

/// Creates a function that calls `function` with the call's arguments followed by `preset`.
///
/// Without a variadic, the result declares all but the last `preset.len()`
/// parameters of `function`.
pub fn partial_right(function: &Function, preset: Vec<Value>) -> Function {
    let remaining = function
        .signature()
        .map(|signature| signature.without_trailing(preset.len()));
    let target = function.clone();
    function.reshaped(remaining, move |mut arguments| {
        arguments.extend(preset.iter().cloned());
        target.call(arguments)
    })
}

/// Creates a function that calls `function` with `value` as its first argument.
///
/// Typically `function` is a wrapper receiving the wrapped function first:
///
/// ```rust
/// use fntools::arguments;
/// use fntools::combinators::wrap;
/// use fntools::function::Function;
/// use fntools::value::{FromValue, Value};
///
/// let add = Function::opaque(|arguments| {
///     let sum = arguments.iter().filter_map(|value| i64::from_value(value.clone()).ok()).sum();
///     Ok(Value::Integer(sum))
/// });
/// let add_one_after = Function::opaque(|arguments| {
///     let mut arguments = arguments.into_iter();
///     let inner = Function::from_value(arguments.next().unwrap_or_default())?;
///     let result = i64::from_value(inner.call(arguments.collect::<Vec<_>>())?)?;
///     Ok(Value::Integer(result + 1))
/// });
///
/// let wrapped = wrap(add, &add_one_after);
/// assert_eq!(wrapped.call(arguments![1, 2]), Ok(Value::Integer(4)));
/// ```
pub fn wrap(value: impl Into<Value>, function: &Function) -> Function {
    partial(function, vec![value.into()])
}

/// Creates a function that calls `function` with `instance`, then `preset`,
/// then the call's arguments.
///
/// The receiver is passed explicitly as the first argument; `function` reads
/// the instance's state through it.
pub fn bind(function: &Function, instance: impl Into<Value>, preset: Vec<Value>) -> Function {
    let mut leading = Vec::with_capacity(preset.len() + 1);
    leading.push(instance.into());
    leading.extend(preset);
    partial(function, leading)
}

/// Installs `function` on `object` as a method bound to it.
///
/// The member is stored under `name`, or under `function`'s own name when
/// `name` is `None`. The installed method and the returned function are the
/// same: calling it passes the object as the first argument, followed by
/// the call's arguments.
///
/// The method refers to its object weakly; once every handle to the object
/// is dropped, calling the returned function fails with
/// [`FunctionError::DetachedReceiver`].
///
/// # Errors
///
/// Returns [`FunctionError::AnonymousFunction`] if `name` is `None` and
/// `function` has no name.
///
/// # Examples
///
/// ```rust
/// use fntools::arguments;
/// use fntools::combinators::attach;
/// use fntools::function::Function;
/// use fntools::value::{FromValue, Object, Value};
///
/// let balance = Function::named("balance", |arguments| {
///     let account = Object::from_value(arguments.into_iter().next().unwrap_or_default())?;
///     Ok(account.get("balance").unwrap_or_default())
/// });
///
/// let account = Object::new();
/// account.set("balance", 100);
/// attach(&balance, &account, None).unwrap();
///
/// assert_eq!(account.call_method("balance", arguments![]), Ok(Value::Integer(100)));
/// ```
pub fn attach(
    function: &Function,
    object: &Object,
    name: Option<&str>,
) -> Result<Function, FunctionError> {
    let member = name
        .or_else(|| function.name())
        .ok_or(FunctionError::AnonymousFunction)?
        .to_owned();

    let target = function.clone();
    let receiver = object.downgrade();
    let method = {
        let member = member.clone();
        Function::named(member.clone(), move |arguments| {
            let instance = receiver.upgrade().ok_or_else(|| FunctionError::DetachedReceiver {
                member: member.clone(),
            })?;
            let mut bound = Arguments::with_capacity(arguments.len() + 1);
            bound.push(Value::Object(instance));
            bound.extend(arguments);
            target.call(bound)
        })
    };

    tracing::trace!(member = %member, "attached method");
    object.set(member, method.clone());
    Ok(method)
}

/// Creates a function returning the logical negation of `function`'s result.
///
/// The result is [`Value::Bool`]; truthiness follows [`Value::is_truthy`].
pub fn negate(function: &Function) -> Function {
    let target = function.clone();
    function.wrapper(move |arguments| {
        let result = target.call(arguments)?;
        Ok(Value::Bool(!result.is_truthy()))
    })
}

/// A function returning its first argument, or [`Value::Unit`] without one.
pub fn identity() -> Function {
    Function::named("identity", |arguments| {
        Ok(arguments.into_iter().next().unwrap_or_default())
    })
}

/// A function ignoring its arguments and returning a clone of `value`.
pub fn constant(value: impl Into<Value>) -> Function {
    let value = value.into();
    Function::named("constant", move |_| Ok(value.clone()))
}
