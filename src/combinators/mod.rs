//! Higher-order combinators over [`Function`](crate::function::Function).
//!
//! Every combinator takes the target by reference and returns a new
//! function; the target is never called at construction time, and each
//! returned function owns its own configuration and call state.
//!
//! # Overview
//!
//! | Group | Combinators |
//! |---|---|
//! | Call-count gates | [`after`], [`before`], [`once`] |
//! | Argument shaping | [`ary`], [`unary`], [`rest`], [`rest_from`], [`spread`], [`rearg`], [`flip`], [`over_args`] |
//! | Currying | [`curry`], [`curry_right`], [`curry_with_arity`], [`curry_right_with_arity`] |
//! | Application | [`partial`], [`partial_right`], [`wrap`], [`bind`], [`attach`] |
//! | Results | [`negate`], [`identity`], [`constant`] |
//!
//! Combinators that need the target's declared arity ([`curry`],
//! [`curry_right`], [`rest`], [`over_args`]) return
//! [`FunctionError::UnsupportedSignature`](crate::error::FunctionError::UnsupportedSignature)
//! for opaque functions. The `_with_arity` / `_from` variants take the arity
//! explicitly instead.
//!
//! Wrappers keep the target's name, so errors raised while binding arguments
//! still point at the function the caller knows.

mod application;
mod arguments;
mod curry;
mod gate;

pub use application::{attach, bind, constant, identity, negate, partial, partial_right, wrap};
pub use arguments::{ary, flip, over_args, rearg, rest, rest_from, spread, unary};
pub use curry::{curry, curry_right, curry_right_with_arity, curry_with_arity};
pub use gate::{after, before, once};
