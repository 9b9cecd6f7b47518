//! Error types.
//!
//! Every operation that runs caller-supplied code returns
//! [`Completion`](crate::dispatch::Completion), a `Result` whose error side
//! is [`InvocationError`]. Errors raised by a callable travel back to the
//! caller untouched; only [`attempt`](crate::attempt) turns them into values.

use std::rc::Rc;

use crate::value::{Failure, Value};

/// The ways an invocation can fail.
///
/// # Examples
///
/// ```rust
/// use fastfn::InvocationError;
/// use fastfn::value::Value;
///
/// let error = InvocationError::throw("raw string");
/// assert_eq!(error.to_string(), "uncaught raw string");
///
/// let failure = error.into_failure();
/// assert_eq!(failure.as_failure().unwrap().message(), "raw string");
/// ```
#[derive(Debug, Clone, thiserror::Error)]
pub enum InvocationError {
    /// A callable failed, signalling an arbitrary value.
    #[error("uncaught {0}")]
    Thrown(Value),
    /// `reduce` was asked to fold an empty sequence without an initial value.
    #[error("reduce of empty sequence with no initial value")]
    EmptyReduction,
}

impl InvocationError {
    /// Fails with `value`. This is how a callable throws.
    pub fn throw(value: impl Into<Value>) -> Self {
        Self::Thrown(value.into())
    }

    /// Converts the error into a `Value::Failure`.
    ///
    /// A thrown `Failure` comes back as the very same reference. Any other
    /// thrown value is wrapped into a new failure whose message is the value's
    /// string form. `EmptyReduction` becomes a `TypeError`.
    pub fn into_failure(self) -> Value {
        match self {
            Self::Thrown(Value::Failure(failure)) => Value::Failure(failure),
            Self::Thrown(other) => Value::failure(other.to_string()),
            Self::EmptyReduction => {
                Value::Failure(Rc::new(Failure::type_error(Self::EmptyReduction.to_string())))
            }
        }
    }
}
