//! Receiver forwarding through nested combinators.
//!
//! Every wrapping combinator hands the receiver it was invoked with to the
//! callables it wraps. `method` is the one exception: it substitutes its
//! owner.

use pointfree::prelude::*;
use rstest::{fixture, rstest};

#[derive(Debug)]
struct Units {
    suffix: &'static str,
}

#[fixture]
fn metres() -> Units {
    Units { suffix: "m" }
}

fn label() -> Receiving<impl Fn(&Units, i32) -> String + Copy> {
    receiving(|units: &Units, amount: i32| format!("{amount}{}", units.suffix))
}

#[rstest]
fn bind1st_forwards(metres: Units) {
    let add = receiving(|units: &Units, lhs: i32, rhs: i32| format!("{}{}", lhs + rhs, units.suffix));

    assert_eq!(bind1st(add, 2).call_with(&metres, (3,)), "5m");
}

#[rstest]
fn bind2nd_forwards(metres: Units) {
    let span = receiving(|units: &Units, from: i32, to: i32| format!("{}{}", to - from, units.suffix));

    assert_eq!(bind2nd(span, 10).call_with(&metres, (4,)), "6m");
}

#[rstest]
fn bind_forwards_to_binders_and_function(metres: Units) {
    let suffix_length = receiving(|units: &Units, _: i32| units.suffix.len() as i32);
    let doubled = bind(label(), (compose(|length: i32| length * 2, suffix_length),));

    assert_eq!(doubled.call_with(&metres, (99,)), "2m");
}

#[rstest]
fn compose_and_spread_forward(metres: Units) {
    let pipeline = compose(|text: String| text.to_uppercase(), spread(label()));

    assert_eq!(pipeline.call_with(&metres, ((7,),)), "7M");
}

#[rstest]
fn traversal_forwards(metres: Units) {
    let lengths = Sequence::from_slots(vec![Some(1), None, Some(3)]);

    let labels = map_compact_with(&metres, label(), &lengths);

    assert_eq!(labels, vec!["1m", "3m"]);
}

#[rstest]
fn method_overrides_the_forwarded_receiver(metres: Units) {
    let feet = Units { suffix: "ft" };
    let in_feet = method(feet, label());

    assert_eq!(in_feet.call_with(&metres, (12,)), "12ft");
    assert_eq!(
        compose(itself::<String>, in_feet).call_with(&metres, (1,)),
        "1ft"
    );
}
