//! Integration tests for sparse sequences and their traversal.
//!
//! The central rule: holes are never visited. `for_` and `map` call their
//! callback once per present element, in ascending index order, and `map`
//! leaves a hole wherever the input had one.

use std::cell::{Cell, RefCell};

use pointfree::prelude::*;
use rstest::{fixture, rstest};

#[fixture]
fn sparse() -> Sequence<i32> {
    Sequence::from_slots(vec![None, Some(10), None, None, Some(40), Some(50)])
}

// =============================================================================
// Sequence
// =============================================================================

#[rstest]
fn lengths_count_slots_and_elements_separately(sparse: Sequence<i32>) {
    assert_eq!(sparse.len(), 6);
    assert_eq!(sparse.present_len(), 3);
    assert_eq!(sparse.hole_indices(), vec![0, 2, 3]);
}

#[rstest]
fn remove_leaves_a_hole_in_place(mut sparse: Sequence<i32>) {
    assert_eq!(sparse.remove(4), Some(40));
    assert_eq!(sparse.remove(4), None);
    assert_eq!(sparse.len(), 6);
    assert_eq!(sparse.get(5), Some(&50));
}

#[rstest]
fn list_starts_empty() {
    let empty: Sequence<String> = list();

    assert!(empty.is_empty());
    assert_eq!(empty, Sequence::default());
}

#[rstest]
fn push_hole_extends_without_an_element() {
    let mut sequence = Sequence::from(vec!['a']);

    assert_eq!(sequence.push_hole(), 2);
    assert_eq!(sequence.push('c'), 3);
    assert_eq!(sequence.into_slots(), vec![Some('a'), None, Some('c')]);
}

#[rstest]
fn collects_and_extends_from_iterators() {
    let mut sequence: Sequence<u32> = (1..=3).collect();
    sequence.extend([4, 5]);

    assert_eq!(sequence, Sequence::from([1, 2, 3, 4, 5]));
}

#[rstest]
fn sequences_are_truthy_even_when_empty() {
    assert!(truthy(list::<u8>()));
}

// =============================================================================
// for_
// =============================================================================

#[rstest]
fn for_visits_present_elements_in_order(sparse: Sequence<i32>) {
    let visited = RefCell::new(Vec::new());

    for_(&sparse, |element: i32, index: usize| {
        visited.borrow_mut().push((index, element));
    });

    assert_eq!(visited.into_inner(), vec![(1, 10), (4, 40), (5, 50)]);
}

#[rstest]
fn for_on_all_holes_never_calls(#[values(0, 1, 5)] length: usize) {
    let calls = Cell::new(0);

    for_(&Sequence::<i32>::holes(length), |_: i32| calls.set(calls.get() + 1));

    assert_eq!(calls.get(), 0);
}

#[rstest]
fn for_accepts_element_only_callbacks(sparse: Sequence<i32>) {
    let total = Cell::new(0);

    for_(&sparse, |element: i32| total.set(total.get() + element));

    assert_eq!(total.get(), 100);
}

#[rstest]
fn for_hands_over_the_traversed_sequence(sparse: Sequence<i32>) {
    let neighbours = RefCell::new(Vec::new());

    for_(&sparse, |_: i32, index: usize, whole: &Sequence<i32>| {
        neighbours
            .borrow_mut()
            .push(whole.contains_index(index + 1));
    });

    assert_eq!(neighbours.into_inner(), vec![false, true, false]);
}

#[rstest]
fn for_with_forwards_receiver(sparse: Sequence<i32>) {
    let sink = RefCell::new(Vec::new());

    for_with(
        &sink,
        &sparse,
        receiving(|sink: &RefCell<Vec<i32>>, element: i32| sink.borrow_mut().push(element)),
    );

    assert_eq!(sink.into_inner(), vec![10, 40, 50]);
}

// =============================================================================
// map
// =============================================================================

#[rstest]
fn map_keeps_holes_and_length(sparse: Sequence<i32>) {
    let halved = map(|element: i32| element / 2, &sparse);

    assert_eq!(halved.len(), sparse.len());
    assert_eq!(halved.hole_indices(), sparse.hole_indices());
    assert_eq!(
        halved.slots(),
        &[None, Some(5), None, None, Some(20), Some(25)]
    );
}

#[rstest]
fn map_passes_indices_of_present_elements(sparse: Sequence<i32>) {
    let indices = map(|_: i32, index: usize| index, &sparse);

    assert_eq!(indices.into_present(), vec![1, 4, 5]);
}

#[rstest]
fn map_invokes_callback_once_per_element(sparse: Sequence<i32>) {
    let calls = Cell::new(0);

    map(
        |element: i32| {
            calls.set(calls.get() + 1);
            element
        },
        &sparse,
    );

    assert_eq!(calls.get(), sparse.present_len());
}

#[rstest]
fn map_leaves_input_untouched(sparse: Sequence<i32>) {
    let before = sparse.clone();

    let _ = map(|element: i32| element + 1, &sparse);

    assert_eq!(sparse, before);
}

#[rstest]
fn map_can_change_element_type(sparse: Sequence<i32>) {
    let labels = map(|element: i32| format!("#{element}"), &sparse);

    assert_eq!(labels.get(4).map(String::as_str), Some("#40"));
    assert!(!labels.contains_index(0));
}

#[rstest]
fn map_compact_drops_holes(sparse: Sequence<i32>) {
    assert_eq!(map_compact(|element: i32| element, &sparse), vec![10, 40, 50]);
}

#[rstest]
fn map_compact_of_empty_is_empty() {
    assert!(map_compact(|element: i32| element, &list()).is_empty());
}

#[rstest]
fn map_with_constant_callable_fills_present_slots(sparse: Sequence<i32>) {
    let flags = map_with(&(), receiving(|_: &(), _: i32| true), &sparse);

    assert_eq!(flags.present_len(), 3);
    assert!(flags.iter().all(|(_, flag)| *flag));
}
