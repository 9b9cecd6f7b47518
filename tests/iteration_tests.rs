#![cfg(feature = "iteration")]
//! Unit tests for map, reduce, for_each, index_of, last_index_of and concat.

use fastfn::dispatch::Function;
use fastfn::value::{Array, Value};
use fastfn::{
    InvocationError, array, concat, for_each, index_of, last_index_of, map, object, reduce,
};
use rstest::{fixture, rstest};
use std::cell::Cell;
use std::rc::Rc;

fn number(value: &Value) -> f64 {
    value.as_number().unwrap_or(f64::NAN)
}

#[fixture]
fn input() -> Array {
    array![1, 2, 3, 4, 5]
}

/// `function (last, item) { return last + item; }`
#[fixture]
fn add() -> Function {
    Function::new("add", |_, arguments| {
        Ok(Value::from(number(&arguments.arg(0)) + number(&arguments.arg(1))))
    })
}

/// Returns its receiver so a test can check which context it ran with.
fn receiver_probe(seen: Rc<Cell<bool>>, expected: Value) -> Function {
    Function::new("probe", move |receiver, _| {
        seen.set(receiver.strict_equals(&expected));
        Ok(Value::Undefined)
    })
}

// =============================================================================
// concat
// =============================================================================

#[rstest]
fn test_concat_array_of_items() {
    let result = concat(&array![1, 2, 3], &[Value::from(array![4, 5, 6])]);
    assert_eq!(result, array![1, 2, 3, 4, 5, 6]);
}

#[rstest]
fn test_concat_list_of_items() {
    let result = concat(&array![1, 2, 3], &[Value::from(4), Value::from(5), Value::from(6)]);
    assert_eq!(result, array![1, 2, 3, 4, 5, 6]);
}

#[rstest]
fn test_concat_mixed_array_and_list() {
    let result = concat(&array![1, 2, 3], &[Value::from(array![4, 5]), Value::from(6)]);
    assert_eq!(result, array![1, 2, 3, 4, 5, 6]);
}

#[rstest]
fn test_concat_shares_element_references() {
    let nested = Value::from(object! { "a" => 1 });
    let result = concat(&Array::new(), &[Value::from(array![nested.clone()])]);

    assert!(result.get(0).unwrap().strict_equals(&nested));
}

// =============================================================================
// map
// =============================================================================

#[rstest]
fn test_map_over_items(input: Array) {
    let square = Function::new("square", |_, arguments| {
        let item = number(&arguments.arg(0));
        Ok(Value::from(item * item))
    });

    let result = map(&input, &square, None).unwrap();

    assert_eq!(result, array![1, 4, 9, 16, 25]);
    assert_eq!(input, array![1, 2, 3, 4, 5]);
}

#[rstest]
fn test_map_takes_context() {
    let seen = Rc::new(Cell::new(false));
    let context = Value::from(object! { "name" => "fast" });
    let probe = receiver_probe(Rc::clone(&seen), context.clone());

    map(&array![1], &probe, Some(&context)).unwrap();

    assert!(seen.get());
}

#[rstest]
fn test_map_without_context_uses_undefined() {
    let seen = Rc::new(Cell::new(false));
    let probe = receiver_probe(Rc::clone(&seen), Value::Undefined);

    map(&array![1], &probe, None).unwrap();

    assert!(seen.get());
}

#[rstest]
fn test_map_propagates_failure() {
    let failing = Function::new("failing", |_, arguments| {
        if arguments.arg(1) == Value::from(2) {
            Err(InvocationError::throw("at two"))
        } else {
            Ok(arguments.arg(0))
        }
    });

    let error = map(&array![1, 2, 3], &failing, None).unwrap_err();

    assert_eq!(error.to_string(), "uncaught at two");
}

// =============================================================================
// reduce
// =============================================================================

#[rstest]
fn test_reduce_with_initial_value(input: Array, add: Function) {
    let result = reduce(&input, &add, Some(Value::from(0)), None).unwrap();
    assert_eq!(result, Value::from(15));
}

#[rstest]
fn test_reduce_takes_context() {
    let seen = Rc::new(Cell::new(false));
    let context = Value::from(object! { "name" => "fast" });
    let probe = receiver_probe(Rc::clone(&seen), context.clone());

    reduce(&array![1], &probe, Some(Value::from(object! {})), Some(&context)).unwrap();

    assert!(seen.get());
}

#[rstest]
fn test_reduce_uses_first_item_without_initial_value(input: Array, add: Function) {
    let result = reduce(&input, &add, None, None).unwrap();
    assert_eq!(result, Value::from(15));
}

#[rstest]
fn test_reduce_passes_index_and_sequence(input: Array) {
    let check = Function::new("check", |_, arguments| {
        let index = number(&arguments.arg(2));
        let sequence = arguments.arg(3);
        let item = sequence.as_array().and_then(|array| array.get(index as usize));
        assert_eq!(item, Some(arguments.arg(1)));
        Ok(Value::from(number(&arguments.arg(0)) + index))
    });

    let result = reduce(&input, &check, Some(Value::from(0)), None).unwrap();

    assert_eq!(result, Value::from(10));
}

#[rstest]
fn test_reduce_empty_without_initial_value_fails(add: Function) {
    let error = reduce(&Array::new(), &add, None, None).unwrap_err();
    assert!(matches!(error, InvocationError::EmptyReduction));
}

// =============================================================================
// for_each
// =============================================================================

#[rstest]
fn test_for_each_over_items(input: Array) {
    let total = Rc::new(Cell::new(0.0));
    let sink = Rc::clone(&total);
    let accumulate = Function::new("accumulate", move |_, arguments| {
        sink.set(sink.get() + number(&arguments.arg(0)));
        Ok(Value::Undefined)
    });

    for_each(&input, &accumulate, None).unwrap();

    assert!((total.get() - 15.0).abs() < f64::EPSILON);
}

#[rstest]
fn test_for_each_takes_context() {
    let seen = Rc::new(Cell::new(false));
    let context = Value::from(object! { "name" => "fast" });
    let probe = receiver_probe(Rc::clone(&seen), context.clone());

    for_each(&array![1], &probe, Some(&context)).unwrap();

    assert!(seen.get());
}

#[rstest]
fn test_for_each_on_empty_never_calls() {
    let failing = Function::new("failing", |_, _| Err(InvocationError::throw("called")));
    assert!(for_each(&Array::new(), &failing, None).is_ok());
}

// =============================================================================
// index_of / last_index_of
// =============================================================================

#[rstest]
#[case(1, Some(0))]
#[case(5, Some(4))]
#[case(1000, None)]
fn test_index_of(input: Array, #[case] target: i32, #[case] expected: Option<usize>) {
    assert_eq!(index_of(&input, &Value::from(target)), expected);
}

#[rstest]
#[case(1, Some(5))]
#[case(5, Some(4))]
#[case(1000, None)]
fn test_last_index_of(#[case] target: i32, #[case] expected: Option<usize>) {
    let input = array![1, 2, 3, 4, 5, 1];
    assert_eq!(last_index_of(&input, &Value::from(target)), expected);
}

#[rstest]
fn test_index_of_does_not_coerce() {
    let input = array!["1", 1];
    assert_eq!(index_of(&input, &Value::from(1)), Some(1));
    assert_eq!(index_of(&input, &Value::from("1")), Some(0));
}

#[rstest]
fn test_index_of_on_slice() {
    let values = vec![Value::Null, Value::Undefined, Value::Null];
    assert_eq!(index_of(values.as_slice(), &Value::Undefined), Some(1));
    assert_eq!(last_index_of(values.as_slice(), &Value::Null), Some(2));
}
