//! Error type shared by every dynamic function and combinator.
//!
//! Combinators never recover from errors: a failure raised while binding
//! arguments, converting values, or inside a target function propagates to
//! the caller unchanged.

/// Represents errors raised while building or calling a [`Function`](crate::function::Function).
///
/// # Examples
///
/// ```rust
/// use fntools::error::FunctionError;
///
/// let error = FunctionError::ArityMismatch {
///     function: Some("add".to_string()),
///     expected: 2,
///     actual: 3,
/// };
/// assert_eq!(
///     format!("{error}"),
///     "add: expected 2 argument transforms for the declared arity, got 3"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionError {
    /// `over_args` received a transform list whose length differs from the declared arity.
    ArityMismatch {
        /// Name of the target function, if it has one.
        function: Option<String>,
        /// Declared arity of the target.
        expected: usize,
        /// Number of transforms supplied.
        actual: usize,
    },
    /// The function carries no signature, so its parameters cannot be inspected.
    UnsupportedSignature {
        /// Name of the function, if it has one.
        function: Option<String>,
    },
    /// A required parameter received no argument and has no default.
    MissingArgument {
        /// Name of the function, if it has one.
        function: Option<String>,
        /// Name of the unfilled parameter.
        parameter: String,
    },
    /// More arguments were supplied than the signature can accept.
    TooManyArguments {
        /// Name of the function, if it has one.
        function: Option<String>,
        /// Maximum number of arguments accepted.
        expected: usize,
        /// Number of arguments supplied.
        actual: usize,
    },
    /// A value could not be converted into the requested type.
    TypeMismatch {
        /// The requested type.
        expected: &'static str,
        /// The kind of value actually received.
        actual: &'static str,
    },
    /// `rearg` referred to an argument position that the call did not supply.
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// Number of arguments supplied.
        length: usize,
    },
    /// `attach` needs a member name, but the function is anonymous.
    AnonymousFunction,
    /// An attached method was called after its object was dropped.
    DetachedReceiver {
        /// The member name the method was installed under.
        member: String,
    },
    /// `Object::call_method` found no member with the given name.
    MemberNotFound {
        /// The requested member name.
        member: String,
    },
    /// A value that is not a function was used as one.
    NotCallable {
        /// The kind of value found.
        actual: &'static str,
    },
    /// Failure raised by a target function itself.
    Raised {
        /// Human-readable description of the failure.
        message: String,
    },
}

impl FunctionError {
    /// Creates a [`FunctionError::Raised`] from any message.
    ///
    /// Target functions use this to signal their own failures.
    pub fn raised(message: impl Into<String>) -> Self {
        Self::Raised {
            message: message.into(),
        }
    }
}

fn function_label(function: Option<&String>) -> &str {
    function.map_or("<anonymous>", String::as_str)
}

impl std::fmt::Display for FunctionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ArityMismatch {
                function,
                expected,
                actual,
            } => write!(
                formatter,
                "{}: expected {expected} argument transforms for the declared arity, got {actual}",
                function_label(function.as_ref())
            ),
            Self::UnsupportedSignature { function } => write!(
                formatter,
                "{}: function has no declared signature to inspect",
                function_label(function.as_ref())
            ),
            Self::MissingArgument {
                function,
                parameter,
            } => write!(
                formatter,
                "{}: missing required argument `{parameter}`",
                function_label(function.as_ref())
            ),
            Self::TooManyArguments {
                function,
                expected,
                actual,
            } => write!(
                formatter,
                "{}: takes at most {expected} arguments but {actual} were given",
                function_label(function.as_ref())
            ),
            Self::TypeMismatch { expected, actual } => {
                write!(formatter, "expected {expected}, found {actual}")
            }
            Self::IndexOutOfRange { index, length } => write!(
                formatter,
                "argument index {index} is out of range for {length} arguments"
            ),
            Self::AnonymousFunction => write!(
                formatter,
                "cannot attach an anonymous function without an explicit member name"
            ),
            Self::DetachedReceiver { member } => write!(
                formatter,
                "method `{member}` was called after its object was dropped"
            ),
            Self::MemberNotFound { member } => {
                write!(formatter, "object has no member `{member}`")
            }
            Self::NotCallable { actual } => write!(formatter, "{actual} is not callable"),
            Self::Raised { message } => write!(formatter, "{message}"),
        }
    }
}

impl std::error::Error for FunctionError {}
