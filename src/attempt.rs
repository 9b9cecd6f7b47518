//! Safe invocation.

use crate::dispatch::Function;
use crate::value::Value;

/// Calls `function` with no arguments and an `Undefined` receiver, turning a
/// failure into a value.
///
/// On success the result is returned unchanged. On failure the error is
/// converted with [`InvocationError::into_failure`]: a thrown
/// [`Failure`](crate::value::Failure) comes back as the same reference, any
/// other thrown value is wrapped into a new failure.
///
/// A function that *returns* a failure is indistinguishable from one that
/// throws it.
///
/// [`InvocationError::into_failure`]: crate::InvocationError::into_failure
///
/// # Examples
///
/// ```rust
/// use fastfn::attempt;
/// use fastfn::InvocationError;
/// use fastfn::dispatch::Function;
/// use fastfn::value::Value;
///
/// let fine = Function::new("fine", |_, _| Ok(Value::from(123)));
/// assert_eq!(attempt(&fine), Value::from(123));
///
/// let raw = Function::new("raw", |_, _| Err(InvocationError::throw("raw string")));
/// let failure = attempt(&raw);
/// assert_eq!(failure.as_failure().unwrap().message(), "raw string");
/// ```
pub fn attempt(function: &Function) -> Value {
    match function.call0(&Value::Undefined) {
        Ok(value) => value,
        Err(error) => {
            tracing::debug!(function = function.name(), %error, "captured failure");
            error.into_failure()
        }
    }
}
