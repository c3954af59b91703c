//! Unit tests for the routing operators.

use rstest::{fixture, rstest};
use test_helpers::batch::{error_messages, mixed_batch_with};

use super::{for_failures, for_successes, try_for_failures, try_for_successes};

type Batch = Vec<Result<usize, String>>;

#[fixture]
fn five_and_two() -> Batch {
    mixed_batch_with(5, 2, |msg| msg)
}

#[rstest]
fn routes_every_success_in_order(five_and_two: Batch) {
    let mut values = Vec::new();
    for_successes(&five_and_two, |v| values.push(*v));
    assert_eq!(values, [0, 1, 2, 3, 4]);
}

#[rstest]
fn routes_every_failure_in_order(five_and_two: Batch) {
    let mut messages = Vec::new();
    for_failures(&five_and_two, |e| messages.push(e.clone()));
    assert_eq!(messages, error_messages(2));
}

#[rstest]
#[case(0, 0)]
#[case(3, 0)]
#[case(0, 3)]
#[case(5, 4)]
fn handler_counts_match_variant_counts(#[case] successes: usize, #[case] failures: usize) {
    let batch: Batch = mixed_batch_with(successes, failures, |msg| msg);
    let mut success_calls = 0;
    let mut failure_calls = 0;
    let routed = for_successes(&batch, |_| success_calls += 1);
    for_failures(routed, |_| failure_calls += 1);
    assert_eq!(success_calls, successes);
    assert_eq!(failure_calls, failures);
}

#[rstest]
fn returns_the_very_same_sequence(five_and_two: Batch) {
    let routed = for_successes(five_and_two.as_slice(), |_| {});
    let routed = for_failures(routed, |_| {});
    assert!(std::ptr::eq(routed, five_and_two.as_slice()));
}

#[rstest]
fn accepts_slice_iterators(five_and_two: Batch) {
    let mut values = Vec::new();
    let rest = for_successes(five_and_two.iter().skip(3), |v| values.push(*v));
    assert_eq!(values, [3, 4]);
    assert_eq!(rest.count(), 4);
}

#[rstest]
fn try_routing_stops_at_first_handler_error(five_and_two: Batch) {
    let mut visited = Vec::new();
    let result = try_for_successes(&five_and_two, |v| {
        visited.push(*v);
        if *v == 2 { Err("stop") } else { Ok(()) }
    });
    assert_eq!(result, Err("stop"));
    assert_eq!(visited, [0, 1, 2]);
}

#[rstest]
fn try_routing_hands_back_sequence_when_handlers_succeed(five_and_two: Batch) {
    let mut messages = Vec::new();
    let result = try_for_failures(&five_and_two, |e| {
        messages.push(e.clone());
        Ok::<(), String>(())
    });
    let Ok(routed) = result else {
        panic!("handler never failed");
    };
    assert_eq!(routed.len(), 7);
    assert_eq!(messages, error_messages(2));
}

#[rstest]
fn try_failure_routing_propagates_handler_error_unwrapped(five_and_two: Batch) {
    let result = try_for_failures(&five_and_two, |e| Err(format!("handler saw {e}")));
    assert_eq!(result.err().as_deref(), Some("handler saw Error 0"));
}

#[test]
fn interleaved_batch_is_routed_in_input_order() {
    let batch: Batch = vec![
        Err("first".into()),
        Ok(10),
        Err("second".into()),
        Ok(20),
        Err("third".into()),
    ];
    let mut visits = Vec::new();
    let routed = for_failures(&batch, |e| visits.push(format!("err {e}")));
    for_successes(routed, |v| visits.push(format!("ok {v}")));
    assert_eq!(
        visits,
        ["err first", "err second", "err third", "ok 10", "ok 20"]
    );
}
