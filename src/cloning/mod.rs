//! Shallow cloning.
//!
//! [`clone`] classifies its input with [`classify`] and hands sequences to
//! [`clone_array`] and mappings to [`clone_object`]; everything else comes
//! back as is. Copies are one level deep: the new container holds the very
//! same element references as the original.
//!
//! # Examples
//!
//! ```rust
//! use fastfn::array;
//! use fastfn::cloning::clone;
//! use fastfn::value::Value;
//!
//! let original = Value::from(array![1, array![2]]);
//! let copy = clone(&original);
//!
//! assert_eq!(copy, original);
//! assert!(!copy.strict_equals(&original));
//! assert!(copy.as_array().unwrap().get(1).unwrap()
//!     .strict_equals(&original.as_array().unwrap().get(1).unwrap()));
//! ```

use crate::value::{Array, ArrayLike, Object, Shape, Value, classify};

/// Returns a shallow copy of arrays, array-like objects and mappings, and
/// `value` itself for anything else.
///
/// Array-like objects come back as arrays.
pub fn clone(value: &Value) -> Value {
    match classify(value) {
        Shape::Sequence(sequence) => Value::Array(clone_array(sequence)),
        Shape::Mapping(mapping) => Value::Object(clone_object(mapping)),
        Shape::Opaque => value.clone(),
    }
}

/// Returns a new array holding the elements of `sequence`.
///
/// Accepts anything [`ArrayLike`]: arrays, argument lists, array-like
/// objects and slices.
pub fn clone_array<A: ArrayLike + ?Sized>(sequence: &A) -> Array {
    (0..sequence.length()).map(|index| sequence.item(index)).collect()
}

/// Returns a new plain mapping holding exactly the own entries of `mapping`,
/// in the same order. Entries reachable only through the prototype chain are
/// not copied, and the copy has no prototype.
pub fn clone_object(mapping: &Object) -> Object {
    Object::from_entries(mapping.own_entries())
}
