//! Behavioural tests for `Optional<T>`.
//!
//! Covers construction, the extraction family and its error kinds, and the
//! laziness guarantees of the closure-taking combinators.

use rstest::rstest;
use std::cell::Cell;
use vessel::error::{ContainerError, EmptyValueError};
use vessel::option::Optional;

// =============================================================================
// Construction and Variant Checking
// =============================================================================

#[rstest]
fn present_holds_its_value() {
    let option = Optional::Present(1);
    assert!(option.is_present());
    assert!(!option.is_absent());
    assert_eq!(option.unwrap(), 1);
}

#[rstest]
fn absent_holds_nothing() {
    let option: Optional<i32> = Optional::Absent;
    assert!(!option.is_present());
    assert!(option.is_absent());
    assert_eq!(option.peek(), None);
}

#[rstest]
#[case(Optional::Present(4), true, true)]
#[case(Optional::Present(3), false, false)]
#[case(Optional::Absent, false, true)]
fn predicate_checks(
    #[case] option: Optional<i32>,
    #[case] expected_present_and: bool,
    #[case] expected_absent_or: bool,
) {
    let even = |x: &i32| x % 2 == 0;
    assert_eq!(option.is_present_and(even), expected_present_and);
    assert_eq!(option.is_absent_or(even), expected_absent_or);
}

// =============================================================================
// Extraction
// =============================================================================

#[rstest]
#[should_panic(expected = "called `Optional::unwrap()` on an `Absent` value")]
fn unwrap_absent_panics() {
    Optional::<String>::Absent.unwrap();
}

#[rstest]
fn try_unwrap_absent_is_empty_value_error() {
    let result = Optional::<i32>::Absent.try_unwrap();
    assert_eq!(
        result,
        Err(EmptyValueError {
            container: "Optional",
            operation: "unwrap",
            found: "Absent",
        })
    );
}

#[rstest]
fn expect_and_unwrap_errors_are_distinguishable() {
    let empty: ContainerError = Optional::<i32>::Absent.try_unwrap().unwrap_err().into();
    let expectation: ContainerError = Optional::<i32>::Absent
        .try_expect("config loaded")
        .unwrap_err()
        .into();
    assert!(matches!(empty, ContainerError::EmptyValue(_)));
    assert!(matches!(expectation, ContainerError::Expectation(_)));
    assert_eq!(expectation.to_string(), "config loaded");
}

#[rstest]
#[should_panic(expected = "the answer must be known")]
fn expect_absent_panics_with_caller_message() {
    Optional::<i32>::Absent.expect("the answer must be known");
}

#[rstest]
fn expect_present_returns_value() {
    assert_eq!(Optional::Present(42).expect("unused"), 42);
}

#[derive(Debug, PartialEq, Eq)]
struct LookupError {
    key: &'static str,
}

#[rstest]
fn unwrap_or_throw_returns_caller_error_verbatim() {
    let result = Optional::<i32>::Absent.unwrap_or_throw(LookupError { key: "port" });
    assert_eq!(result, Err(LookupError { key: "port" }));
}

#[rstest]
fn unwrap_or_throw_present_ignores_error() {
    let result = Optional::Present(8080).unwrap_or_throw(LookupError { key: "port" });
    assert_eq!(result, Ok(8080));
}

#[rstest]
fn unwrap_or_throw_with_builds_error_only_when_absent() {
    let calls = Cell::new(0);
    let build = || {
        calls.set(calls.get() + 1);
        LookupError { key: "host" }
    };

    assert_eq!(Optional::Present(1).unwrap_or_throw_with(build), Ok(1));
    assert_eq!(calls.get(), 0);

    assert_eq!(
        Optional::<i32>::Absent.unwrap_or_throw_with(build),
        Err(LookupError { key: "host" })
    );
    assert_eq!(calls.get(), 1);
}

#[rstest]
#[case(Optional::Present(1), 1)]
#[case(Optional::Absent, 0)]
fn unwrap_or_returns_default_only_when_absent(
    #[case] option: Optional<i32>,
    #[case] expected: i32,
) {
    assert_eq!(option.unwrap_or(0), expected);
}

#[rstest]
fn unwrap_or_else_calls_thunk_when_absent() {
    let calls = Cell::new(0);
    let value = Optional::<i32>::Absent.unwrap_or_else(|| {
        calls.set(calls.get() + 1);
        7
    });
    assert_eq!(value, 7);
    assert_eq!(calls.get(), 1);
}

// =============================================================================
// Mapping
// =============================================================================

#[rstest]
fn map_present_applies_function() {
    assert_eq!(Optional::Present("abc").map(str::len), Optional::Present(3));
}

#[rstest]
fn map_absent_never_calls_function() {
    let result = Optional::<i32>::Absent.map(|_| -> i32 { unreachable!() });
    assert_eq!(result, Optional::Absent);
}

#[rstest]
#[case(Optional::Present(2), 20)]
#[case(Optional::Absent, -1)]
fn map_or_and_map_or_else_agree(#[case] option: Optional<i32>, #[case] expected: i32) {
    assert_eq!(option.map_or(-1, |x| x * 10), expected);
    assert_eq!(option.map_or_else(|| -1, |x| x * 10), expected);
}

#[rstest]
fn map_or_else_calls_exactly_one_closure() {
    let defaults = Cell::new(0);
    let mapped = Cell::new(0);
    let _ = Optional::Present(1).map_or_else(
        || defaults.set(defaults.get() + 1),
        |_| mapped.set(mapped.get() + 1),
    );
    assert_eq!((defaults.get(), mapped.get()), (0, 1));
}

// =============================================================================
// Chaining
// =============================================================================

#[rstest]
#[case(Optional::Present(1), Optional::Present("b"), Optional::Present("b"))]
#[case(Optional::Present(1), Optional::Absent, Optional::Absent)]
#[case(Optional::Absent, Optional::Present("b"), Optional::Absent)]
fn and_returns_other_only_when_present(
    #[case] option: Optional<i32>,
    #[case] other: Optional<&str>,
    #[case] expected: Optional<&str>,
) {
    assert_eq!(option.and(other), expected);
}

#[rstest]
fn and_then_short_circuits_on_absent() {
    let calls = Cell::new(0);
    let result = Optional::<i32>::Absent.and_then(|x| {
        calls.set(calls.get() + 1);
        Optional::Present(x)
    });
    assert_eq!(result, Optional::Absent);
    assert_eq!(calls.get(), 0);
}

#[rstest]
#[case(Optional::Present(1), Optional::Present(2), Optional::Present(1))]
#[case(Optional::Present(1), Optional::Absent, Optional::Present(1))]
#[case(Optional::Absent, Optional::Present(2), Optional::Present(2))]
#[case(Optional::Absent, Optional::Absent, Optional::Absent)]
fn or_prefers_receiver(
    #[case] option: Optional<i32>,
    #[case] other: Optional<i32>,
    #[case] expected: Optional<i32>,
) {
    assert_eq!(option.or(other), expected);
    assert_eq!(option.or_else(|| other), expected);
}

#[rstest]
fn or_else_is_lazy_when_present() {
    let result = Optional::Present(1).or_else(|| unreachable!("receiver is present"));
    assert_eq!(result, Optional::Present(1));
}

#[rstest]
#[case(Optional::Present(1), Optional::Absent, Optional::Present(1))]
#[case(Optional::Absent, Optional::Present(2), Optional::Present(2))]
#[case(Optional::Present(1), Optional::Present(2), Optional::Absent)]
#[case(Optional::Absent, Optional::Absent, Optional::Absent)]
fn xor_truth_table(
    #[case] option: Optional<i32>,
    #[case] other: Optional<i32>,
    #[case] expected: Optional<i32>,
) {
    assert_eq!(option.xor(other), expected);
}

#[rstest]
#[case(Optional::Present(4), Optional::Present(4))]
#[case(Optional::Present(5), Optional::Absent)]
#[case(Optional::Absent, Optional::Absent)]
fn filter_keeps_matching_values(#[case] option: Optional<i32>, #[case] expected: Optional<i32>) {
    assert_eq!(option.filter(|x| x % 2 == 0), expected);
}

#[rstest]
fn combinators_do_not_touch_the_receiver() {
    let original = Optional::Present(String::from("kept"));
    let lengths = original.as_ref().map(String::len);
    let upper = original.clone().map(|text| text.to_uppercase());
    assert_eq!(lengths, Optional::Present(4));
    assert_eq!(upper, Optional::Present(String::from("KEPT")));
    assert_eq!(original, Optional::Present(String::from("kept")));
}

// =============================================================================
// Conversion and Display
// =============================================================================

#[rstest]
fn flatten_removes_one_level() {
    assert_eq!(Optional::Present(Optional::Present(1)).flatten(), Optional::Present(1));
    assert_eq!(Optional::Present(Optional::<i32>::Absent).flatten(), Optional::Absent);
    assert_eq!(Optional::<Optional<i32>>::Absent.flatten(), Optional::Absent);
}

#[rstest]
#[case(Optional::Present("text"), "Present(text)")]
#[case(Optional::Absent, "Absent")]
fn display_matches_variant(#[case] option: Optional<&str>, #[case] expected: &str) {
    assert_eq!(format!("{option}"), expected);
}

#[rstest]
fn nested_absent_is_a_legitimate_payload() {
    let nested: Optional<Optional<i32>> = Optional::Present(Optional::Absent);
    assert!(nested.is_present());
    assert_eq!(nested.unwrap(), Optional::Absent);
}
