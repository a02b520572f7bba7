//! Parameter descriptors and the arity inspector.
//!
//! A [`Signature`] lists a function's declared parameters in order. It is
//! attached to a [`Function`] by the signature-capturing macros, by
//! [`FunctionBuilder`](super::FunctionBuilder), or by combinators that know
//! the shape of what they return (curried functions).
//!
//! Declared arity is the number of descriptors; a variadic collector counts
//! as exactly one slot.
//!
//! # Binding
//!
//! [`Signature::bind`] turns a call's positional arguments into exactly one
//! value per parameter:
//!
//! - positional parameters before the first variadic take arguments in order,
//!   falling back to their default when the call runs out
//! - the variadic parameter collects every remaining argument as a list
//! - parameters after the variadic can only take their default
//! - surplus arguments without a variadic are an error

use super::{Arguments, Function};
use crate::error::FunctionError;
use crate::value::Value;

/// How a parameter receives its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    /// Takes one positional argument.
    Positional,
    /// Collects all remaining positional arguments into a list.
    Variadic,
}

/// Describes one declared parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    name: String,
    kind: ParameterKind,
    default: Option<Value>,
}

impl Parameter {
    /// A required positional parameter.
    pub fn positional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParameterKind::Positional,
            default: None,
        }
    }

    /// A positional parameter that takes `default` when the caller omits it.
    pub fn with_default(name: impl Into<String>, default: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            kind: ParameterKind::Positional,
            default: Some(default.into()),
        }
    }

    /// A variadic collector.
    pub fn variadic(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParameterKind::Variadic,
            default: None,
        }
    }

    /// The declared name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How the parameter receives its argument.
    pub const fn kind(&self) -> ParameterKind {
        self.kind
    }

    /// Returns `true` if the parameter collects the remaining arguments.
    pub fn is_variadic(&self) -> bool {
        self.kind == ParameterKind::Variadic
    }

    /// Returns `true` if the parameter declares a default value.
    pub const fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// The declared default value.
    pub const fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}

/// The ordered parameter list of a function.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Signature {
    parameters: Vec<Parameter>,
}

impl Signature {
    /// Creates a signature from parameters in declaration order.
    pub const fn new(parameters: Vec<Parameter>) -> Self {
        Self { parameters }
    }

    /// The parameters in declaration order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// The declared arity.
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// The parameters left after `count` leading arguments are applied.
    ///
    /// Leading positional parameters are consumed first; a variadic and
    /// everything after it are kept, since the variadic still collects.
    pub fn without_leading(&self, count: usize) -> Self {
        let consumed = count.min(self.positional_capacity());
        Self::new(self.parameters[consumed..].to_vec())
    }

    /// The parameters left after `count` trailing arguments are applied.
    ///
    /// A variadic signature is returned unchanged: trailing arguments land
    /// in the collector and fix no parameter.
    pub fn without_trailing(&self, count: usize) -> Self {
        if self.parameters.iter().any(Parameter::is_variadic) {
            return self.clone();
        }
        let kept = self.parameters.len().saturating_sub(count);
        Self::new(self.parameters[..kept].to_vec())
    }

    /// Number of parameters that can be filled positionally when there are
    /// no surplus arguments to collect.
    fn positional_capacity(&self) -> usize {
        self.parameters
            .iter()
            .take_while(|parameter| !parameter.is_variadic())
            .count()
    }

    /// Binds a call's arguments to the parameters.
    ///
    /// `function` is only used to label errors.
    ///
    /// # Errors
    ///
    /// - [`FunctionError::MissingArgument`] if a parameter without default is left unfilled
    /// - [`FunctionError::TooManyArguments`] if arguments remain and there is no variadic
    pub fn bind(
        &self,
        function: Option<&str>,
        arguments: Arguments,
    ) -> Result<Vec<Value>, FunctionError> {
        let supplied = arguments.len();
        let mut remaining = arguments.into_iter();
        let mut bound = Vec::with_capacity(self.parameters.len());
        let mut collected = false;

        for parameter in &self.parameters {
            match parameter.kind {
                ParameterKind::Variadic if !collected => {
                    collected = true;
                    bound.push(Value::List(remaining.by_ref().collect()));
                }
                ParameterKind::Variadic => bound.push(Value::List(Vec::new())),
                ParameterKind::Positional => {
                    let argument = if collected { None } else { remaining.next() };
                    let value = argument
                        .or_else(|| parameter.default.clone())
                        .ok_or_else(|| FunctionError::MissingArgument {
                            function: function.map(str::to_owned),
                            parameter: parameter.name.clone(),
                        })?;
                    bound.push(value);
                }
            }
        }

        if remaining.len() > 0 {
            return Err(FunctionError::TooManyArguments {
                function: function.map(str::to_owned),
                expected: self.positional_capacity(),
                actual: supplied,
            });
        }

        Ok(bound)
    }
}

/// Returns the declared parameters of `function`.
///
/// # Errors
///
/// Returns [`FunctionError::UnsupportedSignature`] for opaque functions,
/// which were created without a signature.
///
/// # Examples
///
/// ```rust
/// use fntools::function::{Function, parameters};
/// use fntools::value::Value;
///
/// let scale = Function::builder()
///     .name("scale")
///     .parameter("value")
///     .parameter_with_default("factor", 2)
///     .build(|bound| Ok(bound.into_iter().next().unwrap_or_default()));
///
/// let declared = parameters(&scale).unwrap();
/// assert_eq!(declared.len(), 2);
/// assert!(!declared[0].has_default());
/// assert_eq!(declared[1].default(), Some(&Value::Integer(2)));
/// ```
pub fn parameters(function: &Function) -> Result<&[Parameter], FunctionError> {
    function
        .signature()
        .map(Signature::parameters)
        .ok_or_else(|| FunctionError::UnsupportedSignature {
            function: function.name().map(str::to_owned),
        })
}

/// Returns the number of declared parameters of `function`.
///
/// # Errors
///
/// Returns [`FunctionError::UnsupportedSignature`] for opaque functions.
pub fn declared_arity(function: &Function) -> Result<usize, FunctionError> {
    parameters(function).map(<[Parameter]>::len)
}
