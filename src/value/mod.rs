//! The uniform argument type of dynamic functions.
//!
//! Every [`Function`] receives its arguments as an ordered sequence of
//! [`Value`]s and returns a single [`Value`]. Working over one uniform type is
//! what lets combinators slice, reorder, pack, and unpack arguments without
//! knowing the target's parameter types.
//!
//! - [`Value`]: unit, booleans, numbers, strings, lists, functions, objects
//! - [`Object`]: a shared, string-keyed member table (see [`object`])
//! - [`FromValue`] / [`IntoCallResult`]: conversions used by typed targets
//!
//! # Examples
//!
//! ```rust
//! use fntools::value::Value;
//!
//! let list = Value::from(vec![1, 2, 3]);
//! assert_eq!(list.kind(), "list");
//! assert!(list.is_truthy());
//! assert!(!Value::Unit.is_truthy());
//! ```

mod convert;
pub mod object;

pub use convert::{FromValue, IntoCallResult};
pub use object::{Object, WeakObject};

use crate::function::Function;

/// A dynamically typed value passed to and returned from a [`Function`].
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// The absence of a value. Gated combinators return it for skipped calls.
    #[default]
    Unit,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// An owned string.
    String(String),
    /// An ordered sequence of values.
    List(Vec<Self>),
    /// A callable.
    Function(Function),
    /// A shared object with a mutable member table.
    Object(Object),
}

impl Value {
    /// Returns the name of this value's variant, as used in error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Bool(_) => "bool",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Function(_) => "function",
            Self::Object(_) => "object",
        }
    }

    /// Coerces the value to a boolean.
    ///
    /// Unit, `false`, zero, the empty string, and the empty list are falsy;
    /// everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Unit => false,
            Self::Bool(value) => *value,
            Self::Integer(value) => *value != 0,
            Self::Float(value) => *value != 0.0,
            Self::String(value) => !value.is_empty(),
            Self::List(values) => !values.is_empty(),
            Self::Function(_) | Self::Object(_) => true,
        }
    }

    /// Returns `true` for [`Value::Unit`].
    pub const fn is_unit(&self) -> bool {
        matches!(self, Self::Unit)
    }

    /// Returns the function held by this value, if any.
    pub const fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Returns the elements of a list value, if this is a list.
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(values) => Some(values),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Unit, Self::Unit) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Integer(left), Self::Integer(right)) => left == right,
            (Self::Float(left), Self::Float(right)) => left == right,
            (Self::String(left), Self::String(right)) => left == right,
            (Self::List(left), Self::List(right)) => left == right,
            (Self::Function(left), Self::Function(right)) => left.ptr_eq(right),
            (Self::Object(left), Self::Object(right)) => left.ptr_eq(right),
            _ => false,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unit => write!(formatter, "()"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Integer(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value}"),
            Self::String(value) => write!(formatter, "{value}"),
            Self::List(values) => {
                write!(formatter, "[")?;
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{value}")?;
                }
                write!(formatter, "]")
            }
            Self::Function(function) => {
                write!(formatter, "<function {}>", function.name().unwrap_or("<anonymous>"))
            }
            Self::Object(_) => write!(formatter, "<object>"),
        }
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Unit
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Self::Object(object)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unit, Into::into)
    }
}

impl<T: Into<Self>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self::List(iterator.into_iter().map(Into::into).collect())
    }
}

static_assertions::assert_impl_all!(Value: Send, Sync);
