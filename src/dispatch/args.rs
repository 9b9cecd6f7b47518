//! The closed argument-count variant type.

use std::borrow::Cow;

use crate::value::{ArrayLike, Value};

/// The largest argument count carried without building a container.
pub const SPECIALIZED_ARITY: usize = 4;

/// Arguments passed to a [`Function`](super::Function).
///
/// Counts `0..=SPECIALIZED_ARITY` each get their own variant holding plain
/// references, so the common low-arity call builds nothing. Larger counts
/// fall back to [`Args::Overflow`], which carries a slice (borrowed when the
/// caller already had one, owned when it had to be assembled).
///
/// A callee reads its arguments positionally through [`Args::get`] or
/// [`Args::arg`] and never needs to know which variant it was handed.
///
/// # Examples
///
/// ```rust
/// use fastfn::dispatch::Args;
/// use fastfn::value::Value;
///
/// let values = [Value::from(1), Value::from(2)];
/// let arguments = Args::from_slice(&values);
///
/// assert!(matches!(arguments, Args::Two(_, _)));
/// assert_eq!(arguments.arg(1).as_number(), Some(2.0));
/// assert!(arguments.arg(5).is_undefined());
/// ```
#[derive(Clone, Debug)]
pub enum Args<'a> {
    /// No arguments.
    Zero,
    /// One argument.
    One(&'a Value),
    /// Two arguments.
    Two(&'a Value, &'a Value),
    /// Three arguments.
    Three(&'a Value, &'a Value, &'a Value),
    /// Four arguments.
    Four(&'a Value, &'a Value, &'a Value, &'a Value),
    /// More than [`SPECIALIZED_ARITY`] arguments.
    Overflow(Cow<'a, [Value]>),
}

impl<'a> Args<'a> {
    /// Selects the variant matching `values.len()`.
    ///
    /// Never allocates: slices longer than the bound are borrowed into
    /// [`Args::Overflow`].
    pub fn from_slice(values: &'a [Value]) -> Self {
        specialize(values.iter(), values.len()).unwrap_or(Self::Overflow(Cow::Borrowed(values)))
    }
}

impl Args<'_> {
    /// The number of arguments.
    pub fn len(&self) -> usize {
        match self {
            Self::Zero => 0,
            Self::One(..) => 1,
            Self::Two(..) => 2,
            Self::Three(..) => 3,
            Self::Four(..) => 4,
            Self::Overflow(values) => values.len(),
        }
    }

    /// Returns `true` when there are no arguments.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` unless this is [`Args::Overflow`].
    pub const fn is_specialized(&self) -> bool {
        !matches!(self, Self::Overflow(_))
    }

    /// The argument at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Value> {
        let value: &Value = match (self, index) {
            (
                Self::One(first)
                | Self::Two(first, _)
                | Self::Three(first, _, _)
                | Self::Four(first, _, _, _),
                0,
            ) => first,
            (Self::Two(_, second) | Self::Three(_, second, _) | Self::Four(_, second, _, _), 1) => {
                second
            }
            (Self::Three(_, _, third) | Self::Four(_, _, third, _), 2) => third,
            (Self::Four(_, _, _, fourth), 3) => fourth,
            (Self::Overflow(values), _) => return values.get(index),
            _ => return None,
        };
        Some(value)
    }

    /// The argument at `index`, reading missing positions as `Undefined`.
    pub fn arg(&self, index: usize) -> Value {
        self.get(index).cloned().unwrap_or_default()
    }

    /// Iterates over the arguments in order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            arguments: self,
            index: 0,
        }
    }

    /// Copies the arguments into a vector.
    pub fn to_vec(&self) -> Vec<Value> {
        self.iter().cloned().collect()
    }

    /// Borrows these arguments again without copying an owned overflow
    /// slice.
    pub fn reborrow(&self) -> Args<'_> {
        match self {
            Self::Zero => Args::Zero,
            Self::One(first) => Args::One(first),
            Self::Two(first, second) => Args::Two(first, second),
            Self::Three(first, second, third) => Args::Three(first, second, third),
            Self::Four(first, second, third, fourth) => Args::Four(first, second, third, fourth),
            Self::Overflow(values) => Args::Overflow(Cow::Borrowed(&**values)),
        }
    }
}

/// Selects a specialized variant for an iterator yielding exactly `total`
/// values, or `None` when `total` exceeds [`SPECIALIZED_ARITY`].
pub(super) fn specialize<'a>(
    mut values: impl Iterator<Item = &'a Value>,
    total: usize,
) -> Option<Args<'a>> {
    let arguments = match total {
        0 => Args::Zero,
        1 => Args::One(values.next()?),
        2 => Args::Two(values.next()?, values.next()?),
        3 => Args::Three(values.next()?, values.next()?, values.next()?),
        4 => Args::Four(
            values.next()?,
            values.next()?,
            values.next()?,
            values.next()?,
        ),
        _ => return None,
    };
    Some(arguments)
}

impl ArrayLike for Args<'_> {
    fn length(&self) -> usize {
        self.len()
    }

    fn item(&self, index: usize) -> Value {
        self.arg(index)
    }
}

impl<'s> IntoIterator for &'s Args<'_> {
    type Item = &'s Value;
    type IntoIter = Iter<'s>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over [`Args`].
pub struct Iter<'s> {
    arguments: &'s Args<'s>,
    index: usize,
}

impl<'s> Iterator for Iter<'s> {
    type Item = &'s Value;

    fn next(&mut self) -> Option<Self::Item> {
        let arguments = self.arguments;
        let value = arguments.get(self.index)?;
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.arguments.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
