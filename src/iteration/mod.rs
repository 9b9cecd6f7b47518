//! Iteration over ordered sequences.
//!
//! - [`map`], [`for_each`]: visit every index in ascending order, calling
//!   `function(element, index, sequence)`.
//! - [`reduce`]: left fold calling `function(accumulator, element, index,
//!   sequence)`.
//! - [`index_of`], [`last_index_of`] (and their `_from` variants): linear
//!   scans using [`Value::strict_equals`].
//! - [`concat`]: appends items, flattening arrays one level.
//!
//! The callbacks are invoked through the specialized
//! [`Function::call3`]/[`Function::call4`] entry points: the argument count is
//! fixed per operation, so no argument container is built per element.
//!
//! The length of the sequence is read once, before the first callback runs.
//! Callbacks may mutate the sequence; positions that disappear read as
//! `Undefined` and appended elements are not visited.
//!
//! # Examples
//!
//! ```rust
//! use fastfn::array;
//! use fastfn::dispatch::Function;
//! use fastfn::iteration::{map, reduce};
//! use fastfn::value::Value;
//!
//! let square = Function::new("square", |_, arguments| {
//!     let item = arguments.arg(0).as_number().unwrap_or(f64::NAN);
//!     Ok(Value::from(item * item))
//! });
//! let add = Function::new("add", |_, arguments| {
//!     let sum = arguments.arg(0).as_number().unwrap_or(f64::NAN)
//!         + arguments.arg(1).as_number().unwrap_or(f64::NAN);
//!     Ok(Value::from(sum))
//! });
//!
//! let input = array![1, 2, 3, 4, 5];
//! assert_eq!(map(&input, &square, None).unwrap(), array![1, 4, 9, 16, 25]);
//! assert_eq!(reduce(&input, &add, None, None).unwrap(), Value::from(15));
//! ```

use crate::dispatch::{Completion, Function};
use crate::error::InvocationError;
use crate::value::{Array, ArrayLike, Value};

/// Returns a new array holding `function(sequence[i], i, sequence)` for every
/// index, called with `context` as receiver (`Undefined` when `None`).
///
/// # Errors
///
/// Stops at and returns the first failure of `function`.
pub fn map(sequence: &Array, function: &Function, context: Option<&Value>) -> Result<Array, InvocationError> {
    let undefined = Value::Undefined;
    let receiver = context.unwrap_or(&undefined);
    let length = sequence.len();
    let subject = Value::Array(sequence.clone());
    let mut results = Vec::with_capacity(length);
    for index in 0..length {
        let item = sequence.item(index);
        results.push(function.call3(receiver, &item, &Value::from(index), &subject)?);
    }
    Ok(Array::from(results))
}

/// Folds `sequence` from the left.
///
/// `function(accumulator, sequence[i], i, sequence)` is called with `context`
/// as receiver, and its result becomes the next accumulator. Without
/// `initial` the fold starts from `sequence[0]` at index 1.
///
/// # Errors
///
/// Returns [`InvocationError::EmptyReduction`] when `sequence` is empty and
/// `initial` is `None`, otherwise the first failure of `function`.
pub fn reduce(
    sequence: &Array,
    function: &Function,
    initial: Option<Value>,
    context: Option<&Value>,
) -> Completion {
    let undefined = Value::Undefined;
    let receiver = context.unwrap_or(&undefined);
    let length = sequence.len();
    let (mut accumulator, start) = match initial {
        Some(initial) => (initial, 0),
        None if length > 0 => (sequence.item(0), 1),
        None => return Err(InvocationError::EmptyReduction),
    };
    let subject = Value::Array(sequence.clone());
    for index in start..length {
        let item = sequence.item(index);
        accumulator = function.call4(receiver, &accumulator, &item, &Value::from(index), &subject)?;
    }
    Ok(accumulator)
}

/// Calls `function(sequence[i], i, sequence)` for every index, with `context`
/// as receiver.
///
/// # Errors
///
/// Stops at and returns the first failure of `function`.
pub fn for_each(sequence: &Array, function: &Function, context: Option<&Value>) -> Result<(), InvocationError> {
    let undefined = Value::Undefined;
    let receiver = context.unwrap_or(&undefined);
    let length = sequence.len();
    let subject = Value::Array(sequence.clone());
    for index in 0..length {
        let item = sequence.item(index);
        function.call3(receiver, &item, &Value::from(index), &subject)?;
    }
    Ok(())
}

/// Returns the first index whose element strictly equals `value`.
pub fn index_of<A: ArrayLike + ?Sized>(sequence: &A, value: &Value) -> Option<usize> {
    (0..sequence.length()).find(|&index| sequence.item(index).strict_equals(value))
}

/// Returns the last index whose element strictly equals `value`.
pub fn last_index_of<A: ArrayLike + ?Sized>(sequence: &A, value: &Value) -> Option<usize> {
    (0..sequence.length())
        .rev()
        .find(|&index| sequence.item(index).strict_equals(value))
}

/// [`index_of`] starting the forward scan at `from_index`.
///
/// A negative `from_index` counts from the end; one still before the start
/// scans everything.
pub fn index_of_from<A: ArrayLike + ?Sized>(sequence: &A, value: &Value, from_index: isize) -> Option<usize> {
    let length = sequence.length();
    let start = if from_index >= 0 {
        from_index.unsigned_abs()
    } else {
        length.saturating_sub(from_index.unsigned_abs())
    };
    (start..length).find(|&index| sequence.item(index).strict_equals(value))
}

/// [`last_index_of`] starting the backward scan at `from_index`.
///
/// A `from_index` past the end scans everything; a negative one counts from
/// the end, and one before the start finds nothing.
pub fn last_index_of_from<A: ArrayLike + ?Sized>(
    sequence: &A,
    value: &Value,
    from_index: isize,
) -> Option<usize> {
    let length = sequence.length();
    let end = if from_index >= 0 {
        from_index.unsigned_abs().checked_add(1)?.min(length)
    } else {
        length.checked_sub(from_index.unsigned_abs() - 1)?
    };
    (0..end)
        .rev()
        .find(|&index| sequence.item(index).strict_equals(value))
}

/// Returns a new array with the elements of `sequence` followed by `items`.
///
/// An item that is an array contributes its elements; any other item,
/// array-like objects included, is appended as is.
pub fn concat(sequence: &Array, items: &[Value]) -> Array {
    let mut elements = sequence.to_vec();
    for item in items {
        match item {
            Value::Array(nested) => elements.extend(nested.to_vec()),
            other => elements.push(other.clone()),
        }
    }
    Array::from(elements)
}
