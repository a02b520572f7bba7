//! Conversions between [`Value`] and the Rust types typed targets work with.
//!
//! The signature-capturing macros convert each bound argument with
//! [`FromValue`] and the target's return value with [`IntoCallResult`].

use super::{Object, Value};
use crate::error::FunctionError;
use crate::function::Function;

/// Fallible conversion out of a [`Value`].
pub trait FromValue: Sized {
    /// Converts `value`, failing with [`FunctionError::TypeMismatch`] when the
    /// variant does not fit.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionError::TypeMismatch`] if the value has the wrong kind.
    fn from_value(value: Value) -> Result<Self, FunctionError>;
}

const fn mismatch(expected: &'static str, value: &Value) -> FunctionError {
    FunctionError::TypeMismatch {
        expected,
        actual: value.kind(),
    }
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self, FunctionError> {
        Ok(value)
    }
}

impl FromValue for () {
    fn from_value(value: Value) -> Result<Self, FunctionError> {
        match value {
            Value::Unit => Ok(()),
            other => Err(mismatch("unit", &other)),
        }
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, FunctionError> {
        match value {
            Value::Bool(value) => Ok(value),
            other => Err(mismatch("bool", &other)),
        }
    }
}

impl FromValue for i64 {
    fn from_value(value: Value) -> Result<Self, FunctionError> {
        match value {
            Value::Integer(value) => Ok(value),
            other => Err(mismatch("integer", &other)),
        }
    }
}

impl FromValue for i32 {
    fn from_value(value: Value) -> Result<Self, FunctionError> {
        match value {
            Value::Integer(value) => Self::try_from(value).map_err(|_| FunctionError::TypeMismatch {
                expected: "32-bit integer",
                actual: "out-of-range integer",
            }),
            other => Err(mismatch("integer", &other)),
        }
    }
}

impl FromValue for usize {
    fn from_value(value: Value) -> Result<Self, FunctionError> {
        match value {
            Value::Integer(value) => Self::try_from(value).map_err(|_| FunctionError::TypeMismatch {
                expected: "non-negative integer",
                actual: "negative integer",
            }),
            other => Err(mismatch("integer", &other)),
        }
    }
}

impl FromValue for f64 {
    #[allow(clippy::cast_precision_loss)]
    fn from_value(value: Value) -> Result<Self, FunctionError> {
        match value {
            Value::Float(value) => Ok(value),
            Value::Integer(value) => Ok(value as Self),
            other => Err(mismatch("float", &other)),
        }
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, FunctionError> {
        match value {
            Value::String(value) => Ok(value),
            other => Err(mismatch("string", &other)),
        }
    }
}

impl FromValue for Function {
    fn from_value(value: Value) -> Result<Self, FunctionError> {
        match value {
            Value::Function(function) => Ok(function),
            other => Err(FunctionError::NotCallable {
                actual: other.kind(),
            }),
        }
    }
}

impl FromValue for Object {
    fn from_value(value: Value) -> Result<Self, FunctionError> {
        match value {
            Value::Object(object) => Ok(object),
            other => Err(mismatch("object", &other)),
        }
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value) -> Result<Self, FunctionError> {
        match value {
            Value::List(values) => values.into_iter().map(T::from_value).collect(),
            other => Err(mismatch("list", &other)),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self, FunctionError> {
        match value {
            Value::Unit => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

/// Converts a target's return value into the result of a call.
///
/// Plain values become `Ok(Value)`; `Result<T, FunctionError>` passes its
/// error through untouched, so fallible targets propagate their failures.
pub trait IntoCallResult {
    /// Performs the conversion.
    ///
    /// # Errors
    ///
    /// Returns the error carried by a `Result` return value.
    fn into_call_result(self) -> Result<Value, FunctionError>;
}

macro_rules! impl_into_call_result {
    ($($source:ty),* $(,)?) => {
        $(
            impl IntoCallResult for $source {
                fn into_call_result(self) -> Result<Value, FunctionError> {
                    Ok(Value::from(self))
                }
            }
        )*
    };
}

impl_into_call_result!(Value, (), bool, i64, i32, u32, f64, &str, String, Function, Object);

impl<T: Into<Value>> IntoCallResult for Vec<T> {
    fn into_call_result(self) -> Result<Value, FunctionError> {
        Ok(Value::from(self))
    }
}

impl<T: Into<Value>> IntoCallResult for Option<T> {
    fn into_call_result(self) -> Result<Value, FunctionError> {
        Ok(Value::from(self))
    }
}

impl<T: Into<Value>> IntoCallResult for Result<T, FunctionError> {
    fn into_call_result(self) -> Result<Value, FunctionError> {
        self.map(Into::into)
    }
}
