//! Structural classification of values.
//!
//! [`classify`] sorts a value into one of three shapes by inspecting what it
//! exposes, not what it nominally is:
//!
//! | Value                                      | Shape      |
//! |--------------------------------------------|------------|
//! | `Array`                                    | `Sequence` |
//! | `Object` with a valid numeric `length`     | `Sequence` |
//! | any other `Object`                         | `Mapping`  |
//! | primitives, `Function`, `Failure`          | `Opaque`   |
//!
//! Anything with a length and indexed access is a sequence, which is how a
//! captured argument list ([`Args`](crate::dispatch::Args)) or a
//! `{ length: 2, "0": .., "1": .. }` object gets treated like an array.

use super::{Array, Object, Value};

/// Read access to something with a length and 0-based indexed elements.
pub trait ArrayLike {
    /// The number of elements.
    fn length(&self) -> usize;

    /// The element at `index`. Holes and out-of-range positions read as
    /// `Undefined`.
    fn item(&self, index: usize) -> Value;
}

impl ArrayLike for Array {
    fn length(&self) -> usize {
        self.len()
    }

    fn item(&self, index: usize) -> Value {
        self.get(index).unwrap_or_default()
    }
}

impl ArrayLike for Object {
    fn length(&self) -> usize {
        self.array_length().unwrap_or(0)
    }

    fn item(&self, index: usize) -> Value {
        self.get(&index.to_string())
    }
}

impl ArrayLike for [Value] {
    fn length(&self) -> usize {
        self.len()
    }

    fn item(&self, index: usize) -> Value {
        self.get(index).cloned().unwrap_or_default()
    }
}

impl ArrayLike for Vec<Value> {
    fn length(&self) -> usize {
        self.len()
    }

    fn item(&self, index: usize) -> Value {
        self.as_slice().item(index)
    }
}

/// The shape of a value, borrowing the view each shape is handled through.
#[derive(Clone, Copy)]
pub enum Shape<'a> {
    /// Has a length and indexed access.
    Sequence(&'a dyn ArrayLike),
    /// A mapping of own entries.
    Mapping(&'a Object),
    /// Neither: primitives, functions and failures.
    Opaque,
}

impl Shape<'_> {
    /// Returns `true` for [`Shape::Sequence`].
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    /// Returns `true` for [`Shape::Mapping`].
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Self::Mapping(_))
    }
}

/// Classifies `value` by structure.
pub fn classify(value: &Value) -> Shape<'_> {
    match value {
        Value::Array(array) => Shape::Sequence(array),
        Value::Object(object) if object.array_length().is_some() => Shape::Sequence(object),
        Value::Object(object) => Shape::Mapping(object),
        _ => Shape::Opaque,
    }
}
