//! Receiver binding and partial application.
//!
//! This module provides three ways of deriving a new [`Function`] from an
//! existing one:
//!
//! - [`bind`]: fixes the receiver and a prefix of arguments.
//! - [`partial`]: fixes a prefix of arguments and forwards whatever receiver
//!   the derived function is called with.
//! - [`partial_constructor`]: fixes a prefix of constructor arguments; the
//!   derived function always constructs.
//!
//! The derived functions splice the fixed prefix in front of the call-site
//! arguments with [`splice`], so a call whose combined argument count fits
//! the specialized bound never allocates.
//!
//! # Laws
//!
//! - `bind(f, c, pre).call(_, args) == f.call(c, pre ++ args)`
//! - `partial(f, pre).call(r, args) == f.call(r, pre ++ args)`
//! - `partial_constructor(F, pre).call(_, args) == F.construct(pre ++ args)`
//!
//! # Examples
//!
//! ```rust
//! use fastfn::binder::{bind, partial};
//! use fastfn::dispatch::Function;
//! use fastfn::object;
//! use fastfn::value::Value;
//!
//! let add_seed = Function::new("add_seed", |receiver, arguments| {
//!     let seed = receiver.get("seed").as_number().unwrap_or(0.0);
//!     let sum: f64 = arguments.iter().filter_map(Value::as_number).sum();
//!     Ok(Value::from(sum + seed))
//! });
//! let context = Value::from(object! { "seed" => 100 });
//!
//! let bound = bind(&add_seed, context.clone(), &[Value::from(1), Value::from(2)]);
//! assert_eq!(bound.call1(&Value::Undefined, &Value::from(3)).unwrap(), Value::from(106));
//!
//! let applied = partial(&add_seed, &[Value::from(1), Value::from(2)]);
//! assert_eq!(applied.call1(&context, &Value::from(3)).unwrap(), Value::from(106));
//! ```

use crate::dispatch::{Function, splice};
use crate::value::Value;

/// Returns a function that calls `function` with `context` as receiver and
/// `bound_arguments` in front of its own arguments.
///
/// The receiver the returned function is called with is ignored.
pub fn bind(function: &Function, context: Value, bound_arguments: &[Value]) -> Function {
    let target = function.clone();
    let prefix: Box<[Value]> = bound_arguments.into();
    Function::new(format!("bound {}", function.name()), move |_receiver, arguments| {
        target.call(&context, &splice(&prefix, arguments))
    })
}

/// Returns a function that calls `function` with `bound_arguments` in front
/// of its own arguments, forwarding the receiver it is called with.
///
/// Attach the result to an object and call it as a method: the object
/// becomes the receiver `function` sees.
pub fn partial(function: &Function, bound_arguments: &[Value]) -> Function {
    let target = function.clone();
    let prefix: Box<[Value]> = bound_arguments.into();
    Function::new(format!("partial {}", function.name()), move |receiver, arguments| {
        target.call(receiver, &splice(&prefix, arguments))
    })
}

/// Returns a constructor that creates instances of `function` with
/// `bound_arguments` in front of its own arguments.
///
/// Construction is the only thing the returned function does: constructing
/// it and calling it (with any receiver) both yield
/// `function.construct(bound_arguments ++ arguments)`. The instances are
/// linked to `function.prototype()`, so they satisfy
/// [`Value::instance_of`] for `function` and reach its prototype methods.
pub fn partial_constructor(function: &Function, bound_arguments: &[Value]) -> Function {
    let target = function.clone();
    let prefix: Box<[Value]> = bound_arguments.into();
    Function::constructor_alias(
        format!("partial {}", function.name()),
        function.prototype().clone(),
        move |arguments| {
            tracing::trace!(
                constructor = target.name(),
                bound = prefix.len(),
                supplied = arguments.len(),
                "constructing through partial constructor"
            );
            target.construct(&splice(&prefix, arguments))
        },
    )
}
