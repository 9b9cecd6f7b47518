//! Shared ordered sequences.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::Value;

/// A shared, mutable, 0-indexed sequence of [`Value`]s.
///
/// Cloning an `Array` clones the handle, not the elements. Elements are
/// heterogeneous. Every accessor takes a short borrow and releases it before
/// returning, so a callback invoked during iteration may freely mutate the
/// array it is iterating over.
///
/// # Examples
///
/// ```rust
/// use fastfn::value::{Array, Value};
///
/// let array = Array::from_iter([1, 2]);
/// let alias = array.clone();
/// alias.push(3);
///
/// assert_eq!(array.len(), 3);
/// assert!(array.ptr_eq(&alias));
/// ```
#[derive(Clone, Default)]
pub struct Array(Rc<RefCell<Vec<Value>>>);

impl Array {
    /// Creates an empty array.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty array with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from(Vec::with_capacity(capacity))
    }

    /// Returns the current number of elements.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Returns `true` when the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Returns the element at `index`, or `None` when out of bounds.
    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.borrow().get(index).cloned()
    }

    /// Writes `value` at `index`, padding with `Undefined` when `index` is
    /// past the end.
    pub fn set(&self, index: usize, value: impl Into<Value>) {
        let mut elements = self.0.borrow_mut();
        if index >= elements.len() {
            elements.resize(index + 1, Value::Undefined);
        }
        elements[index] = value.into();
    }

    /// Appends `value` to the end.
    pub fn push(&self, value: impl Into<Value>) {
        self.0.borrow_mut().push(value.into());
    }

    /// Returns a snapshot of the elements.
    pub fn to_vec(&self) -> Vec<Value> {
        self.0.borrow().clone()
    }

    /// Returns `true` when both handles refer to the same storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Vec<Value>> for Array {
    fn from(elements: Vec<Value>) -> Self {
        Self(Rc::new(RefCell::new(elements)))
    }
}

impl<T: Into<Value>> FromIterator<T> for Array {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().map(Into::into).collect::<Vec<_>>())
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.0.borrow() == *other.0.borrow()
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.0.borrow().iter()).finish()
    }
}
