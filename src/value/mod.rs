//! The dynamic value model every operation works on.
//!
//! [`Value`] is a closed enum over the primitive kinds (`undefined`, `null`,
//! booleans, numbers, strings) and the reference kinds ([`Array`],
//! [`Object`], [`Function`], [`Failure`]). Reference kinds are cheap,
//! reference-counted handles: cloning a `Value` never copies the underlying
//! storage, which is what makes shallow copies and reference identity
//! observable.
//!
//! # Equality
//!
//! Two notions of equality are provided:
//!
//! - [`PartialEq`] is *structural*: arrays compare element-wise, objects by
//!   their own entries. This is what tests usually want.
//! - [`Value::strict_equals`] is *identity*: reference kinds are equal only
//!   when they are the same handle, numbers follow IEEE comparison.
//!
//! # Examples
//!
//! ```rust
//! use fastfn::value::{Array, Value};
//!
//! let first = Value::from(Array::from_iter([1, 2, 3]));
//! let second = Value::from(Array::from_iter([1, 2, 3]));
//!
//! assert_eq!(first, second);
//! assert!(!first.strict_equals(&second));
//! assert!(first.strict_equals(&first.clone()));
//! ```

mod array;
mod failure;
mod object;
pub mod shape;

#[cfg(feature = "serde")]
mod serialize;

pub use array::Array;
pub use failure::Failure;
pub use object::Object;
pub use shape::{ArrayLike, Shape, classify};

use std::fmt;
use std::rc::Rc;

use crate::dispatch::{Completion, Function, apply};
use crate::error::InvocationError;

/// A dynamically typed value.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// The absent value. Missing arguments read as `Undefined`.
    #[default]
    Undefined,
    /// The explicit empty value.
    Null,
    /// A boolean.
    Boolean(bool),
    /// A double precision number.
    Number(f64),
    /// An immutable string.
    String(Rc<str>),
    /// A shared ordered sequence.
    Array(Array),
    /// A shared mapping with an optional prototype.
    Object(Object),
    /// A callable.
    Function(Function),
    /// A structured failure object.
    Failure(Rc<Failure>),
}

impl Value {
    /// Creates a `Failure` value with the default `"Error"` name.
    pub fn failure(message: impl Into<Rc<str>>) -> Self {
        Self::Failure(Rc::new(Failure::new(message)))
    }

    /// Returns `true` for `Undefined`.
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns `true` for `Undefined` and `Null`.
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Returns the number, if this is a `Number`.
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the boolean, if this is a `Boolean`.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(boolean) => Some(*boolean),
            _ => None,
        }
    }

    /// Returns the string slice, if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(string) => Some(&**string),
            _ => None,
        }
    }

    /// Returns the array handle, if this is an `Array`.
    pub const fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Returns the object handle, if this is an `Object`.
    pub const fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the function handle, if this is a `Function`.
    pub const fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Returns the failure, if this is a `Failure`.
    pub fn as_failure(&self) -> Option<&Failure> {
        match self {
            Self::Failure(failure) => Some(&**failure),
            _ => None,
        }
    }

    /// Strict equality.
    ///
    /// Numbers compare with IEEE semantics (`NaN` is never equal to itself,
    /// `0.0` equals `-0.0`), strings by content, and reference kinds by
    /// identity.
    pub fn strict_equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Boolean(left), Self::Boolean(right)) => left == right,
            #[allow(clippy::float_cmp)]
            (Self::Number(left), Self::Number(right)) => left == right,
            (Self::String(left), Self::String(right)) => left == right,
            (Self::Array(left), Self::Array(right)) => left.ptr_eq(right),
            (Self::Object(left), Self::Object(right)) => left.ptr_eq(right),
            (Self::Function(left), Self::Function(right)) => left.ptr_eq(right),
            (Self::Failure(left), Self::Failure(right)) => Rc::ptr_eq(left, right),
            _ => false,
        }
    }

    /// Reads a property.
    ///
    /// Objects resolve through their prototype chain. Every other kind has no
    /// properties and yields `Undefined`.
    pub fn get(&self, key: &str) -> Self {
        match self {
            Self::Object(object) => object.get(key),
            _ => Self::Undefined,
        }
    }

    /// Returns `true` when this is an object whose prototype chain contains
    /// `constructor.prototype()`.
    pub fn instance_of(&self, constructor: &Function) -> bool {
        match self {
            Self::Object(object) => object.inherits_from(constructor.prototype()),
            _ => false,
        }
    }

    /// Looks up `key` and invokes it with `self` as the receiver.
    ///
    /// # Errors
    ///
    /// Fails with a thrown `TypeError` when the property is not a function,
    /// and otherwise propagates whatever the method fails with.
    pub fn call_method(&self, key: &str, arguments: &[Self]) -> Completion {
        match self.get(key) {
            Self::Function(method) => apply(&method, self, arguments),
            _ => Err(InvocationError::throw(Failure::type_error(format!(
                "{key} is not a function"
            )))),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Array(left), Self::Array(right)) => left == right,
            (Self::Object(left), Self::Object(right)) => left == right,
            (Self::Failure(left), Self::Failure(right)) => left == right,
            _ => self.strict_equals(other),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => formatter.write_str("undefined"),
            Self::Null => formatter.write_str("null"),
            Self::Boolean(boolean) => write!(formatter, "{boolean}"),
            Self::Number(number) => format_number(*number, formatter),
            Self::String(string) => formatter.write_str(string),
            Self::Array(array) => {
                for (index, element) in array.to_vec().iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(",")?;
                    }
                    if !element.is_nullish() {
                        write!(formatter, "{element}")?;
                    }
                }
                Ok(())
            }
            Self::Object(_) => formatter.write_str("[object Object]"),
            Self::Function(function) => write!(formatter, "function {}()", function.name()),
            Self::Failure(failure) => write!(formatter, "{failure}"),
        }
    }
}

fn format_number(number: f64, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
    if number.is_nan() {
        formatter.write_str("NaN")
    } else if number.is_infinite() {
        formatter.write_str(if number > 0.0 { "Infinity" } else { "-Infinity" })
    } else if number == 0.0 {
        formatter.write_str("0")
    } else if number.fract() == 0.0 {
        write!(formatter, "{number:.0}")
    } else {
        write!(formatter, "{number}")
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<usize> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(Rc::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(Rc::from(value))
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Self::Array(value)
    }
}

impl From<Vec<Self>> for Value {
    fn from(value: Vec<Self>) -> Self {
        Self::Array(Array::from(value))
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Self::Object(value)
    }
}

impl From<Function> for Value {
    fn from(value: Function) -> Self {
        Self::Function(value)
    }
}

impl From<Failure> for Value {
    fn from(value: Failure) -> Self {
        Self::Failure(Rc::new(value))
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Undefined, Into::into)
    }
}

// =============================================================================
// Construction macros
// =============================================================================

/// Builds an [`Array`] from a list of expressions convertible into
/// [`Value`].
///
/// ```rust
/// use fastfn::array;
///
/// let values = array![1, "two", 3.0];
/// assert_eq!(values.len(), 3);
/// ```
#[macro_export]
macro_rules! array {
    ($($element:expr),* $(,)?) => {
        $crate::value::Array::from(
            ::std::vec![$($crate::value::Value::from($element)),*]
        )
    };
}

/// Builds a plain [`Object`] from `key => value` pairs.
///
/// ```rust
/// use fastfn::object;
///
/// let point = object! { "x" => 1, "y" => 2 };
/// assert_eq!(point.get("y").as_number(), Some(2.0));
/// ```
#[macro_export]
macro_rules! object {
    () => {
        $crate::value::Object::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::value::Object::from_entries(
            ::std::vec![$(($key, $crate::value::Value::from($value))),*]
        )
    };
}

static_assertions::assert_impl_all!(Value: Clone, fmt::Debug, fmt::Display, Default);
static_assertions::assert_not_impl_any!(Value: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::from(1), Value::from(1.0), true)]
    #[case(Value::from(0.0), Value::from(-0.0), true)]
    #[case(Value::from(f64::NAN), Value::from(f64::NAN), false)]
    #[case(Value::from("a"), Value::from("a"), true)]
    #[case(Value::from(1), Value::from("1"), false)]
    #[case(Value::Undefined, Value::Null, false)]
    #[case(Value::Null, Value::Null, true)]
    fn test_strict_equals_on_primitives(
        #[case] left: Value,
        #[case] right: Value,
        #[case] expected: bool,
    ) {
        assert_eq!(left.strict_equals(&right), expected);
    }

    #[rstest]
    fn test_strict_equals_on_references_uses_identity() {
        let array = Value::from(crate::array![1, 2]);
        let twin = Value::from(crate::array![1, 2]);

        assert!(array.strict_equals(&array.clone()));
        assert!(!array.strict_equals(&twin));
        assert_eq!(array, twin);
    }

    #[rstest]
    #[case(Value::Undefined, "undefined")]
    #[case(Value::from(42), "42")]
    #[case(Value::from(-0.0), "0")]
    #[case(Value::from(1.5), "1.5")]
    #[case(Value::from(f64::NAN), "NaN")]
    #[case(Value::from(f64::NEG_INFINITY), "-Infinity")]
    #[case(Value::from("hello"), "hello")]
    #[case(Value::from(crate::array![1, Value::Null, "x"]), "1,,x")]
    #[case(Value::from(crate::object! { "a" => 1 }), "[object Object]")]
    fn test_display(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    fn test_get_on_primitive_is_undefined() {
        assert!(Value::from(3).get("length").is_undefined());
    }

    #[rstest]
    fn test_call_method_on_missing_key_throws_type_error() {
        let target = Value::from(Object::new());

        let error = target.call_method("missing", &[]).unwrap_err();

        let failure = error.into_failure();
        let failure = failure.as_failure().unwrap();
        assert_eq!(failure.name(), "TypeError");
        assert_eq!(failure.message(), "missing is not a function");
    }

    #[rstest]
    fn test_option_conversion() {
        assert!(Value::from(None::<i32>).is_undefined());
        assert_eq!(Value::from(Some(2)).as_number(), Some(2.0));
    }
}
