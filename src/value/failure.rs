//! Structured failure objects.

use std::fmt;
use std::rc::Rc;

/// A structured failure: a `name` classifying it and a human readable
/// `message`.
///
/// This is what [`attempt`](crate::attempt) hands back when the function it
/// guards fails, and what callables are encouraged to throw.
///
/// # Examples
///
/// ```rust
/// use fastfn::value::Failure;
///
/// let failure = Failure::new("foo");
/// assert_eq!(failure.name(), "Error");
/// assert_eq!(failure.to_string(), "Error: foo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    name: Rc<str>,
    message: Rc<str>,
}

impl Failure {
    /// Creates a failure named `"Error"`.
    pub fn new(message: impl Into<Rc<str>>) -> Self {
        Self::with_name("Error", message)
    }

    /// Creates a failure named `"TypeError"`.
    pub fn type_error(message: impl Into<Rc<str>>) -> Self {
        Self::with_name("TypeError", message)
    }

    /// Creates a failure with an arbitrary name.
    pub fn with_name(name: impl Into<Rc<str>>, message: impl Into<Rc<str>>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }

    /// The failure's classification.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The failure's message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            formatter.write_str(&self.name)
        } else {
            write!(formatter, "{}: {}", self.name, self.message)
        }
    }
}

impl std::error::Error for Failure {}
