//! Dynamic functions over [`Value`] arguments.
//!
//! A [`Function`] is a shared, thread-safe callable taking an ordered
//! sequence of [`Value`]s. It optionally carries a name and a [`Signature`];
//! a function without a signature is *opaque* and cannot be inspected.
//!
//! # Creating functions
//!
//! - [`function!`](crate::function!) / [`#[signature]`](crate::signature): capture
//!   the parameter list of a closure or `fn` at compile time (feature `derive`)
//! - [`Function::builder`]: declare name, parameters, and defaults explicitly
//! - [`Function::opaque`] / [`Function::named`]: wrap a raw body with no signature
//!
//! # Examples
//!
//! ```rust
//! use fntools::arguments;
//! use fntools::function::Function;
//! use fntools::value::Value;
//!
//! let add = Function::builder()
//!     .name("add")
//!     .parameter("first")
//!     .parameter_with_default("second", 1)
//!     .build(|bound| match bound.as_slice() {
//!         [Value::Integer(first), Value::Integer(second)] => Ok(Value::Integer(first + second)),
//!         _ => Ok(Value::Unit),
//!     });
//!
//! assert_eq!(add.call(arguments![2, 3]), Ok(Value::Integer(5)));
//! assert_eq!(add.call(arguments![2]), Ok(Value::Integer(3)));
//! ```

mod signature;

pub use signature::{Parameter, ParameterKind, Signature, declared_arity, parameters};

use std::sync::Arc;

use smallvec::SmallVec;

use crate::error::FunctionError;
use crate::value::Value;

/// The positional arguments of one call.
pub type Arguments = SmallVec<[Value; 4]>;

/// Result of calling a [`Function`].
pub type CallResult = Result<Value, FunctionError>;

type RawBody = dyn Fn(Arguments) -> CallResult + Send + Sync;
type BoundBody = dyn Fn(Vec<Value>) -> CallResult + Send + Sync;

enum Body {
    /// Receives the call's arguments as they are.
    Raw {
        signature: Option<Signature>,
        body: Box<RawBody>,
    },
    /// Receives one value per parameter, after [`Signature::bind`].
    Bound {
        signature: Signature,
        body: Box<BoundBody>,
    },
}

struct Inner {
    name: Option<String>,
    body: Body,
}

/// A shared, thread-safe callable over [`Value`] arguments.
///
/// Cloning is cheap and shares the underlying callable; equality between
/// functions (through [`Value`]) is identity.
#[derive(Clone)]
pub struct Function {
    inner: Arc<Inner>,
}

impl Function {
    /// Creates an anonymous function without a signature.
    pub fn opaque<F>(body: F) -> Self
    where
        F: Fn(Arguments) -> CallResult + Send + Sync + 'static,
    {
        Self::from_raw(None, None, body)
    }

    /// Creates a named function without a signature.
    pub fn named<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(Arguments) -> CallResult + Send + Sync + 'static,
    {
        Self::from_raw(Some(name.into()), None, body)
    }

    /// Creates a function whose body receives arguments already bound to
    /// `signature` (defaults filled, variadics packed).
    ///
    /// This is the constructor the signature-capturing macros expand to.
    pub fn from_signature<F>(name: Option<String>, signature: Signature, body: F) -> Self
    where
        F: Fn(Vec<Value>) -> CallResult + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(Inner {
                name,
                body: Body::Bound {
                    signature,
                    body: Box::new(body),
                },
            }),
        }
    }

    /// Creates a function with a raw body and an optional descriptive
    /// signature. Combinators use this for the wrappers they return.
    pub(crate) fn from_raw<F>(name: Option<String>, signature: Option<Signature>, body: F) -> Self
    where
        F: Fn(Arguments) -> CallResult + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(Inner {
                name,
                body: Body::Raw {
                    signature,
                    body: Box::new(body),
                },
            }),
        }
    }

    /// Creates a wrapper around `self` that keeps its name but is opaque.
    pub(crate) fn wrapper<F>(&self, body: F) -> Self
    where
        F: Fn(Arguments) -> CallResult + Send + Sync + 'static,
    {
        Self::from_raw(self.inner.name.clone(), None, body)
    }

    /// Like [`wrapper`](Self::wrapper), but describing the wrapper with `signature`.
    pub(crate) fn reshaped<F>(&self, signature: Option<Signature>, body: F) -> Self
    where
        F: Fn(Arguments) -> CallResult + Send + Sync + 'static,
    {
        Self::from_raw(self.inner.name.clone(), signature, body)
    }

    /// Starts declaring a function with an explicit signature.
    pub fn builder() -> FunctionBuilder {
        FunctionBuilder::default()
    }

    /// The function's name, if it has one.
    pub fn name(&self) -> Option<&str> {
        self.inner.name.as_deref()
    }

    /// The function's signature, or `None` for opaque functions.
    pub fn signature(&self) -> Option<&Signature> {
        match &self.inner.body {
            Body::Raw { signature, .. } => signature.as_ref(),
            Body::Bound { signature, .. } => Some(signature),
        }
    }

    /// Calls the function.
    ///
    /// # Errors
    ///
    /// Returns binding errors for functions with a bound signature, and any
    /// error raised by the function body.
    pub fn call(&self, arguments: impl Into<Arguments>) -> CallResult {
        match &self.inner.body {
            Body::Raw { body, .. } => body(arguments.into()),
            Body::Bound { signature, body } => {
                body(signature.bind(self.name(), arguments.into())?)
            }
        }
    }

    /// Returns `true` if both handles share the same callable.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for Function {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Function")
            .field("name", &self.name())
            .field("signature", &self.signature())
            .finish()
    }
}

static_assertions::assert_impl_all!(Function: Send, Sync, Clone);

/// Declares a [`Function`] with an explicit signature.
///
/// Parameters are added in declaration order. The body passed to
/// [`build`](FunctionBuilder::build) receives one value per parameter.
#[derive(Debug, Default)]
pub struct FunctionBuilder {
    name: Option<String>,
    parameters: Vec<Parameter>,
}

impl FunctionBuilder {
    /// Sets the function's name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds a required positional parameter.
    #[must_use]
    pub fn parameter(mut self, name: impl Into<String>) -> Self {
        self.parameters.push(Parameter::positional(name));
        self
    }

    /// Adds a positional parameter with a default value.
    #[must_use]
    pub fn parameter_with_default(
        mut self,
        name: impl Into<String>,
        default: impl Into<Value>,
    ) -> Self {
        self.parameters.push(Parameter::with_default(name, default));
        self
    }

    /// Adds a variadic collector.
    #[must_use]
    pub fn variadic(mut self, name: impl Into<String>) -> Self {
        self.parameters.push(Parameter::variadic(name));
        self
    }

    /// Finishes the declaration.
    pub fn build<F>(self, body: F) -> Function
    where
        F: Fn(Vec<Value>) -> CallResult + Send + Sync + 'static,
    {
        Function::from_signature(self.name, Signature::new(self.parameters), body)
    }
}

/// Builds [`Arguments`] from expressions convertible into [`Value`].
///
/// # Examples
///
/// ```rust
/// use fntools::arguments;
/// use fntools::value::Value;
///
/// let arguments = arguments![1, "two", 3.0];
/// assert_eq!(arguments.len(), 3);
/// assert_eq!(arguments[1], Value::from("two"));
/// ```
#[macro_export]
macro_rules! arguments {
    () => {
        $crate::function::Arguments::new()
    };
    ($($argument:expr),+ $(,)?) => {{
        let mut arguments = $crate::function::Arguments::new();
        $(arguments.push($crate::value::Value::from($argument));)+
        arguments
    }};
}
