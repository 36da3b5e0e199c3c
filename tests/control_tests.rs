//! Integration tests for `while_`.

use std::cell::{Cell, RefCell};

use pointfree::prelude::*;
use rstest::rstest;

#[rstest]
#[case(0)]
#[case(1)]
#[case(17)]
fn while_runs_body_until_condition_fails(#[case] limit: u32) {
    let counter = Cell::new(0_u32);

    while_(
        || counter.get() < limit,
        || counter.set(counter.get() + 1),
    );

    assert_eq!(counter.get(), limit);
}

#[rstest]
fn while_with_false_condition_never_runs_body() {
    let ran = Cell::new(false);

    while_(false_(), || ran.set(true));

    assert!(!ran.get());
}

#[rstest]
fn while_checks_condition_before_every_iteration() {
    let trace = RefCell::new(Vec::new());
    let remaining = Cell::new(2);

    while_(
        || {
            trace.borrow_mut().push("check");
            remaining.get()
        },
        || {
            trace.borrow_mut().push("body");
            remaining.set(remaining.get() - 1);
        },
    );

    assert_eq!(
        trace.into_inner(),
        vec!["check", "body", "check", "body", "check"]
    );
}

#[rstest]
fn while_accepts_numeric_conditions() {
    let queue = RefCell::new(vec!['a', 'b', 'c']);
    let drained = RefCell::new(String::new());

    while_(
        || queue.borrow().len(),
        || {
            if let Some(letter) = queue.borrow_mut().pop() {
                drained.borrow_mut().push(letter);
            }
        },
    );

    assert_eq!(drained.into_inner(), "cba");
}

#[rstest]
fn while_drives_a_pushing_method() {
    let numbers = shared(list());
    let append = push(&numbers);
    let length = || numbers.borrow().len();

    while_(compose(|length: usize| length < 3, length), || {
        let next = length();
        append.invoke((next,));
    });

    assert_eq!(*numbers.borrow(), Sequence::from(vec![0, 1, 2]));
}

#[rstest]
fn while_with_forwards_receiver() {
    let countdown = Cell::new(4_i32);

    while_with(
        &countdown,
        receiving(|countdown: &Cell<i32>| countdown.get()),
        receiving(|countdown: &Cell<i32>| countdown.set(countdown.get() - 1)),
    );

    assert_eq!(countdown.get(), 0);
}
