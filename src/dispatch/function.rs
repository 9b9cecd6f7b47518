//! Callables.

use std::fmt;
use std::rc::Rc;

use super::{Args, Completion};
use crate::value::{Object, Value};

type CallBody = dyn Fn(&Value, &Args<'_>) -> Completion;
type ConstructBody = dyn Fn(&Args<'_>) -> Completion;

/// A callable value.
///
/// A function has two entry points:
///
/// - [`Function::call`] runs the body with an explicit receiver (the value the
///   body sees as its "self").
/// - [`Function::construct`] creates a new object linked to the function's
///   [`prototype`](Function::prototype) and runs the body with that object as
///   receiver.
///
/// Functions are reference-counted handles; cloning one is cheap and keeps
/// its identity.
///
/// # Examples
///
/// ```rust
/// use fastfn::dispatch::{Args, Function};
/// use fastfn::value::Value;
///
/// let add = Function::new("add", |_receiver, arguments| {
///     let sum: f64 = arguments.iter().filter_map(Value::as_number).sum();
///     Ok(Value::from(sum))
/// });
///
/// let result = add.call2(&Value::Undefined, &Value::from(1), &Value::from(2)).unwrap();
/// assert_eq!(result.as_number(), Some(3.0));
/// ```
#[derive(Clone)]
pub struct Function(Rc<FunctionData>);

struct FunctionData {
    name: Rc<str>,
    prototype: Object,
    call: Box<CallBody>,
    construct: Option<Rc<ConstructBody>>,
}

impl Function {
    /// Creates a function from a body taking the receiver and the arguments.
    ///
    /// The function gets a fresh, empty prototype object.
    pub fn new<F>(name: impl Into<Rc<str>>, body: F) -> Self
    where
        F: Fn(&Value, &Args<'_>) -> Completion + 'static,
    {
        Self(Rc::new(FunctionData {
            name: name.into(),
            prototype: Object::new(),
            call: Box::new(body),
            construct: None,
        }))
    }

    /// Creates a function whose only behaviour is construction.
    ///
    /// Both [`Function::construct`] and [`Function::call`] run `construct`;
    /// a call ignores its receiver.
    pub(crate) fn constructor_alias<F>(name: impl Into<Rc<str>>, prototype: Object, construct: F) -> Self
    where
        F: Fn(&Args<'_>) -> Completion + 'static,
    {
        let construct: Rc<ConstructBody> = Rc::new(construct);
        let delegate = Rc::clone(&construct);
        Self(Rc::new(FunctionData {
            name: name.into(),
            prototype,
            call: Box::new(move |_receiver: &Value, arguments: &Args<'_>| delegate(arguments)),
            construct: Some(construct),
        }))
    }

    /// The function's name.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// The object that instances created by [`Function::construct`] are
    /// linked to. Methods placed here are reachable from every instance.
    pub fn prototype(&self) -> &Object {
        &self.0.prototype
    }

    /// Runs the body with `receiver` and `arguments`.
    ///
    /// # Errors
    ///
    /// Returns whatever the body fails with.
    #[inline]
    pub fn call(&self, receiver: &Value, arguments: &Args<'_>) -> Completion {
        (self.0.call)(receiver, arguments)
    }

    /// Creates an instance.
    ///
    /// A new object linked to [`Function::prototype`] is passed to the body
    /// as receiver. If the body returns an object-like value (object, array,
    /// function or failure) that value is the result, otherwise the new
    /// object is.
    ///
    /// # Errors
    ///
    /// Returns whatever the body fails with.
    pub fn construct(&self, arguments: &Args<'_>) -> Completion {
        if let Some(construct) = &self.0.construct {
            return construct(arguments);
        }
        let instance = Value::Object(Object::with_prototype(self.0.prototype.clone()));
        let result = self.call(&instance, arguments)?;
        Ok(match result {
            Value::Object(_) | Value::Array(_) | Value::Function(_) | Value::Failure(_) => result,
            _ => instance,
        })
    }

    /// Returns `true` when both handles refer to the same function.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Generates the `callN` entry points, one per specialized arity.
macro_rules! specialized_calls {
    ($($arity:literal => $variant:ident $(($($parameter:ident),+))?;)+) => {
        paste::paste! {
            impl Function {
                $(
                    #[doc = concat!(
                        "Calls the function with exactly ",
                        stringify!($arity),
                        " argument(s) on the specialized path.\n\n",
                        "# Errors\n\n",
                        "Returns whatever the body fails with."
                    )]
                    #[inline]
                    pub fn [<call $arity>](
                        &self,
                        receiver: &Value
                        $($(, $parameter: &Value)+)?
                    ) -> Completion {
                        self.call(receiver, &Args::$variant $(($($parameter),+))?)
                    }
                )+
            }
        }
    };
}

specialized_calls! {
    0 => Zero;
    1 => One(first);
    2 => Two(first, second);
    3 => Three(first, second, third);
    4 => Four(first, second, third, fourth);
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Function").field(&self.0.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn point() -> Function {
        Function::new("Point", |receiver, arguments| {
            if let Value::Object(instance) = receiver {
                instance.set("x", arguments.arg(0));
                instance.set("y", arguments.arg(1));
            }
            Ok(Value::Undefined)
        })
    }

    #[rstest]
    fn test_construct_links_prototype() {
        let constructor = point();
        constructor
            .prototype()
            .set("kind", Value::from("point"));

        let instance = constructor
            .construct(&Args::Two(&Value::from(1), &Value::from(2)))
            .unwrap();

        assert!(instance.instance_of(&constructor));
        assert_eq!(instance.get("x").as_number(), Some(1.0));
        assert_eq!(instance.get("kind").as_str(), Some("point"));
        assert!(!instance.as_object().unwrap().has_own("kind"));
    }

    #[rstest]
    fn test_construct_prefers_returned_object() {
        let replacement = Object::new();
        let returned = replacement.clone();
        let constructor = Function::new("Factory", move |_, _| Ok(Value::from(returned.clone())));

        let instance = constructor.construct(&Args::Zero).unwrap();

        assert!(instance.as_object().unwrap().ptr_eq(&replacement));
        assert!(!instance.instance_of(&constructor));
    }

    #[rstest]
    fn test_construct_ignores_returned_primitive() {
        let constructor = Function::new("Primitive", |_, _| Ok(Value::from(7)));

        let instance = constructor.construct(&Args::Zero).unwrap();

        assert!(instance.instance_of(&constructor));
    }

    #[rstest]
    fn test_specialized_calls_match_generic_call() {
        let count = Function::new("count", |_, arguments| Ok(Value::from(arguments.len())));
        let value = Value::Undefined;
        let receiver = Value::Null;

        assert_eq!(count.call0(&receiver).unwrap(), Value::from(0));
        assert_eq!(count.call1(&receiver, &value).unwrap(), Value::from(1));
        assert_eq!(count.call2(&receiver, &value, &value).unwrap(), Value::from(2));
        assert_eq!(count.call3(&receiver, &value, &value, &value).unwrap(), Value::from(3));
        assert_eq!(
            count.call4(&receiver, &value, &value, &value, &value).unwrap(),
            Value::from(4)
        );
    }

    #[rstest]
    fn test_receiver_is_passed_through() {
        let identity = Function::new("self", |receiver, _| Ok(receiver.clone()));
        let receiver = Value::from(Object::new());

        let result = identity.call0(&receiver).unwrap();

        assert!(result.strict_equals(&receiver));
    }

    #[rstest]
    fn test_debug_shows_name() {
        assert_eq!(format!("{:?}", point()), "Function(\"Point\")");
    }
}
