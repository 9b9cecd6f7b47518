//! Mappings with an optional prototype link.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::Value;

/// A shared key/value mapping.
///
/// An object owns its entries (kept in insertion order) and may be linked to
/// a prototype object. Lookups through [`Object::get`] fall back along the
/// prototype chain; everything prefixed with `own` only ever looks at the
/// object itself. An object created with [`Object::new`] has no prototype and
/// is a *plain mapping*.
#[derive(Clone, Default)]
pub struct Object(Rc<ObjectData>);

#[derive(Default)]
struct ObjectData {
    prototype: Option<Object>,
    entries: RefCell<Vec<(Rc<str>, Value)>>,
}

impl Object {
    /// Creates a plain mapping with no entries and no prototype.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty object linked to `prototype`.
    pub fn with_prototype(prototype: Self) -> Self {
        Self(Rc::new(ObjectData {
            prototype: Some(prototype),
            entries: RefCell::default(),
        }))
    }

    /// Creates a plain mapping from `entries`. A repeated key keeps the
    /// position of its first occurrence and the value of its last.
    pub fn from_entries<K, I>(entries: I) -> Self
    where
        K: Into<Rc<str>>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let object = Self::new();
        for (key, value) in entries {
            object.set(key, value);
        }
        object
    }

    /// Returns the prototype, if any.
    pub fn prototype(&self) -> Option<&Self> {
        self.0.prototype.as_ref()
    }

    /// Reads `key` from the object or, failing that, from its prototype
    /// chain. Missing keys read as `Undefined`.
    pub fn get(&self, key: &str) -> Value {
        let mut current = Some(self);
        while let Some(object) = current {
            if let Some(value) = object.get_own(key) {
                return value;
            }
            current = object.prototype();
        }
        Value::Undefined
    }

    /// Reads an own entry.
    pub fn get_own(&self, key: &str) -> Option<Value> {
        self.0
            .entries
            .borrow()
            .iter()
            .find(|(candidate, _)| &**candidate == key)
            .map(|(_, value)| value.clone())
    }

    /// Returns `true` when `key` is an own entry.
    pub fn has_own(&self, key: &str) -> bool {
        self.0
            .entries
            .borrow()
            .iter()
            .any(|(candidate, _)| &**candidate == key)
    }

    /// Writes an own entry, replacing the value of an existing key in place.
    pub fn set(&self, key: impl Into<Rc<str>>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        let mut entries = self.0.entries.borrow_mut();
        match entries.iter_mut().find(|(candidate, _)| *candidate == key) {
            Some((_, slot)) => *slot = value,
            None => entries.push((key, value)),
        }
    }

    /// Returns the own keys in insertion order.
    pub fn own_keys(&self) -> Vec<Rc<str>> {
        self.0
            .entries
            .borrow()
            .iter()
            .map(|(key, _)| Rc::clone(key))
            .collect()
    }

    /// Returns a snapshot of the own entries in insertion order.
    pub fn own_entries(&self) -> Vec<(Rc<str>, Value)> {
        self.0.entries.borrow().clone()
    }

    /// Returns the number of own entries.
    pub fn len(&self) -> usize {
        self.0.entries.borrow().len()
    }

    /// Returns `true` when there are no own entries.
    pub fn is_empty(&self) -> bool {
        self.0.entries.borrow().is_empty()
    }

    /// Returns `true` when `prototype` appears anywhere on this object's
    /// prototype chain (the object itself excluded).
    pub fn inherits_from(&self, prototype: &Self) -> bool {
        let mut current = self.prototype();
        while let Some(object) = current {
            if object.ptr_eq(prototype) {
                return true;
            }
            current = object.prototype();
        }
        false
    }

    /// Returns `true` when both handles refer to the same object.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Returns the `length` property when it is a valid array length, which
    /// is what makes an object array-like.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn array_length(&self) -> Option<usize> {
        match self.get("length") {
            Value::Number(length)
                if length >= 0.0 && length.fract() == 0.0 && length <= f64::from(u32::MAX) =>
            {
                Some(length as usize)
            }
            _ => None,
        }
    }
}

/// Structural equality over own entries, ignoring order and prototypes.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        let entries = self.0.entries.borrow();
        entries.len() == other.len()
            && entries
                .iter()
                .all(|(key, value)| other.get_own(key).is_some_and(|theirs| theirs == *value))
    }
}

impl<K: Into<Rc<str>>> FromIterator<(K, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_map()
            .entries(self.0.entries.borrow().iter().map(|(key, value)| (key, value)))
            .finish()
    }
}
