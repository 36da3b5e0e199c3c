//! Integration tests for composition, argument collection and spreading.

use std::cell::RefCell;

use pointfree::compose;
use pointfree::prelude::*;
use rstest::rstest;

fn increment(value: i32) -> i32 {
    value + 1
}

fn double(value: i32) -> i32 {
    value * 2
}

fn sum(values: Vec<i32>) -> i32 {
    values.iter().sum()
}

// =============================================================================
// compose
// =============================================================================

#[rstest]
fn compose_applies_inner_first() {
    assert_eq!(compose(increment, double).invoke((5,)), 11);
    assert_eq!(compose(double, increment).invoke((5,)), 12);
}

#[rstest]
fn compose_passes_the_whole_argument_list_to_inner() {
    let describe = compose(
        |total: i32| format!("total={total}"),
        |lhs: i32, middle: i32, rhs: i32| lhs + middle + rhs,
    );

    assert_eq!(describe.invoke((1, 2, 3)), "total=6");
}

#[rstest]
fn compose_runs_each_function_once_in_order() {
    let calls = RefCell::new(Vec::new());
    let outer = |value: i32| {
        calls.borrow_mut().push("outer");
        value
    };
    let inner = |value: i32| {
        calls.borrow_mut().push("inner");
        value
    };

    compose(outer, inner).invoke((0,));

    assert_eq!(calls.into_inner(), vec!["inner", "outer"]);
}

#[rstest]
fn compose_macro_chains_right_to_left() {
    let pipeline = compose!(increment, double, |text: &str| text.len() as i32);

    assert_eq!(pipeline.invoke(("four",)), 9);
}

#[rstest]
fn compose_forwards_receiver_to_both_sides() {
    let shift = receiving(|offset: &i32, value: i32| value + *offset);
    let scale = receiving(|factor: &i32, value: i32| value * *factor);

    assert_eq!(compose(shift, scale).call_with(&10, (2,)), 30);
}

// =============================================================================
// collect / spread
// =============================================================================

#[rstest]
fn collect_gathers_positional_arguments() {
    let total = collect(sum);

    assert_eq!(total.invoke((1, 2, 3, 4)), 10);
    assert_eq!(total.invoke([5]), 5);
}

#[rstest]
fn collect_of_argv_echoes_arguments() {
    assert_eq!(collect(argv::<Vec<char>>).invoke(('x', 'y')), vec!['x', 'y']);
}

#[rstest]
fn spread_unpacks_a_single_tuple_argument() {
    let spread_subtract = spread(|lhs: i32, rhs: i32| lhs - rhs);

    assert_eq!(spread_subtract.invoke(((10, 4),)), 6);
}

#[rstest]
fn spread_and_collect_cancel_out() {
    let round_trip = spread(collect(sum));

    assert_eq!(round_trip.invoke(((1, 2, 3),)), 6);
    assert_eq!(round_trip.invoke((vec![7, 8],)), 15);
}

#[rstest]
fn spread_over_sequence_of_pairs() {
    let pairs = Sequence::from(vec![(1, 2), (3, 4)]);

    let products = map(spread(|lhs: i32, rhs: i32| lhs * rhs), &pairs);

    assert_eq!(products.into_present(), vec![2, 12]);
}

// =============================================================================
// negate
// =============================================================================

#[rstest]
#[case(0, true)]
#[case(5, false)]
fn negate_inverts_truthiness_of_results(#[case] input: i32, #[case] expected: bool) {
    let is_zero = negate(|value: i32| value);

    assert_eq!(is_zero.invoke((input,)), expected);
}

#[rstest]
fn negate_of_negate_restores_the_predicate() {
    let is_even = |value: i32| value % 2 == 0;
    let still_even = negate(negate(is_even));

    for value in -4..4 {
        assert_eq!(still_even.invoke((value,)), is_even(value));
    }
}

#[rstest]
fn negate_handles_multiple_arguments() {
    let differ = negate(|lhs: &str, rhs: &str| lhs == rhs);

    assert!(differ.invoke(("a", "b")));
    assert!(!differ.invoke(("a", "a")));
}
