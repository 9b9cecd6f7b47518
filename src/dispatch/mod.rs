//! Arity-specialized invocation.
//!
//! Calling a function never goes through a general "collect every argument
//! into a list, then spread it" step when the argument count is small. The
//! count is classified once per call into the closed [`Args`] type:
//!
//! | Arguments                   | Variant                  | Container built |
//! |-----------------------------|--------------------------|-----------------|
//! | 0 ..= [`SPECIALIZED_ARITY`] | `Zero` .. `Four`         | none            |
//! | more, already a slice       | `Overflow(Borrowed)`     | none            |
//! | more, assembled by `splice` | `Overflow(Owned)`        | one `Vec`       |
//!
//! Whichever variant carries them, a callee observes the same arguments in
//! the same order; only the cost differs.
//!
//! # Entry points
//!
//! - [`Function::call0`] .. [`Function::call4`]: call sites that know their
//!   argument count statically.
//! - [`apply`]: call sites holding an argument slice.
//! - [`splice`]: prepends fixed arguments to the ones a caller supplied, the
//!   shape every bound or partially applied function needs.
//!
//! # Examples
//!
//! ```rust
//! use fastfn::dispatch::{Function, apply};
//! use fastfn::value::Value;
//!
//! let count = Function::new("count", |_, arguments| Ok(Value::from(arguments.len())));
//! let values: Vec<Value> = (0..7).map(Value::from).collect();
//!
//! assert_eq!(apply(&count, &Value::Undefined, &values[..2]).unwrap(), Value::from(2));
//! assert_eq!(apply(&count, &Value::Undefined, &values).unwrap(), Value::from(7));
//! ```

mod args;
mod function;

pub use args::{Args, Iter, SPECIALIZED_ARITY};
pub use function::Function;

use std::borrow::Cow;

use crate::error::InvocationError;
use crate::value::Value;

/// The outcome of invoking a [`Function`].
pub type Completion = Result<Value, InvocationError>;

/// Calls `function` with `receiver` and `arguments`.
///
/// # Errors
///
/// Returns whatever `function` fails with.
#[inline]
pub fn apply(function: &Function, receiver: &Value, arguments: &[Value]) -> Completion {
    function.call(receiver, &Args::from_slice(arguments))
}

/// Returns the arguments `prefix ++ trailing`.
///
/// When the combined count fits [`SPECIALIZED_ARITY`] the result only holds
/// references into the two inputs. Past the bound a single vector is
/// materialized.
pub fn splice<'a>(prefix: &'a [Value], trailing: &'a Args<'_>) -> Args<'a> {
    if prefix.is_empty() {
        return trailing.reborrow();
    }
    let total = prefix.len() + trailing.len();
    args::specialize(prefix.iter().chain(trailing.iter()), total).unwrap_or_else(|| {
        tracing::trace!(arity = total, "materializing overflow arguments");
        Args::Overflow(Cow::Owned(
            prefix.iter().chain(trailing.iter()).cloned().collect(),
        ))
    })
}
