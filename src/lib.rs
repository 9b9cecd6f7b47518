//! # fastfn
//!
//! Arity-specialized higher-order function utilities over a dynamic value
//! model.
//!
//! ## Overview
//!
//! Every utility here dispatches on the number of arguments it passes, or on
//! the shape of its input, instead of going through one generic code path:
//!
//! - **Dispatch**: [`Args`](dispatch::Args) carries 0 to 4 arguments as plain
//!   references and only falls back to a slice past that bound
//! - **Binding**: [`bind`], [`partial`], [`partial_constructor`]
//! - **Iteration**: [`map`], [`reduce`], [`for_each`], [`index_of`],
//!   [`last_index_of`], [`concat`]
//! - **Cloning**: [`clone`], [`clone_array`], [`clone_object`]
//! - **Safe invocation**: [`attempt`]
//!
//! ## Feature Flags
//!
//! - `binder`: `bind`, `partial`, `partial_constructor`
//! - `iteration`: `map`, `reduce`, `for_each`, `index_of`, `concat`, ...
//! - `cloning`: `clone`, `clone_array`, `clone_object`
//! - `serde`: `Serialize` for [`Value`](value::Value)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fastfn::prelude::*;
//!
//! let add = Function::new("add", |receiver, arguments| {
//!     let seed = receiver.get("seed").as_number().unwrap_or(0.0);
//!     let sum: f64 = arguments.iter().filter_map(Value::as_number).sum();
//!     Ok(Value::from(sum + seed))
//! });
//! let context = Value::from(object! { "seed" => 100 });
//!
//! let bound = bind(&add, context, &[Value::from(1), Value::from(2)]);
//! assert_eq!(bound.call1(&Value::Undefined, &Value::from(3)).unwrap(), Value::from(106));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the value model, the dispatcher and every enabled utility.
///
/// # Usage
///
/// ```rust
/// use fastfn::prelude::*;
/// ```
pub mod prelude {
    pub use crate::attempt::attempt;
    pub use crate::dispatch::{Args, Completion, Function, apply};
    pub use crate::error::InvocationError;
    pub use crate::value::{Array, ArrayLike, Failure, Object, Value};
    pub use crate::{array, object};

    #[cfg(feature = "binder")]
    pub use crate::binder::*;

    #[cfg(feature = "iteration")]
    pub use crate::iteration::*;

    #[cfg(feature = "cloning")]
    pub use crate::cloning::*;
}

mod attempt;
pub mod dispatch;
mod error;
pub mod value;

#[cfg(feature = "binder")]
pub mod binder;

#[cfg(feature = "iteration")]
pub mod iteration;

#[cfg(feature = "cloning")]
pub mod cloning;

pub use attempt::attempt;
pub use dispatch::apply;
pub use error::InvocationError;

#[cfg(feature = "binder")]
pub use binder::{bind, partial, partial_constructor};

#[cfg(feature = "iteration")]
pub use iteration::{
    concat, for_each, index_of, index_of_from, last_index_of, last_index_of_from, map, reduce,
};

#[cfg(feature = "cloning")]
pub use cloning::{clone, clone_array, clone_object};
