//! Fluent chaining through `Outcomes` and `OutcomesExt`.

use std::cell::Cell;

use anyhow::{Result, anyhow, ensure};
use fluent_results::{BatchError, Outcomes, OutcomesExt};
use rstest::{fixture, rstest};
use test_helpers::batch::{error_messages, lazy_batch_with, mixed_batch_with};
use test_helpers::recorder::CallLog;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Visit {
    Success(usize),
    Failure(String),
}

#[fixture]
fn five_and_four() -> Outcomes<usize, BatchError> {
    mixed_batch_with(5, 4, BatchError::message).into()
}

#[rstest]
fn successes_and_failures_are_handled_separately(five_and_four: Outcomes<usize, BatchError>) {
    let mut successes = 0;
    let mut failures = 0;
    let outcomes = five_and_four
        .for_each_success(|_| successes += 1)
        .for_each_failure(|_| failures += 1);
    assert_eq!(successes, 5);
    assert_eq!(failures, 4);
    assert_eq!(outcomes.len(), 9);
}

#[rstest]
fn each_router_makes_its_own_ordered_pass(five_and_four: Outcomes<usize, BatchError>) {
    let log = CallLog::default();
    let outcomes = five_and_four
        .for_each_failure(|e| log.record(Visit::Failure(e.to_string())))
        .for_each_success(|v| log.record(Visit::Success(*v)));
    let expected: Vec<Visit> = error_messages(4)
        .into_iter()
        .map(Visit::Failure)
        .chain((0..5).map(Visit::Success))
        .collect();
    assert_eq!(log.calls(), expected);
    assert_eq!(outcomes.success_count(), 5);
    assert_eq!(outcomes.failure_count(), 4);
}

#[rstest]
fn routing_then_catch_reports_every_failure(
    five_and_four: Outcomes<usize, BatchError>,
) -> Result<()> {
    let reported = Cell::new(0);
    let err = five_and_four
        .for_each_success(|_| {})
        .catch(|errors| {
            reported.set(errors.len());
            Ok(())
        })
        .err()
        .ok_or_else(|| anyhow!("expected failure"))?;
    ensure!(reported.get() == 4);
    ensure!(err.aggregated().map(fluent_results::AggregatedErrors::len) == Some(4));
    Ok(())
}

#[test]
fn lazy_sources_are_produced_once() -> Result<()> {
    let produced = Cell::new(0);
    let source = lazy_batch_with(3, 2, BatchError::message).inspect(|_| {
        produced.set(produced.get() + 1);
    });
    let mut seen = 0;
    let result = source
        .into_outcomes()
        .for_each_success(|_| seen += 1)
        .for_each_failure(|_| seen += 1)
        .then(|_| Ok(()));
    ensure!(produced.get() == 5, "source produced {} items", produced.get());
    ensure!(seen == 5);
    ensure!(result.is_err());
    Ok(())
}

#[test]
fn ext_shortcuts_run_straight_off_an_iterator() -> Result<()> {
    let doubled = (1..=3_usize)
        .map(|v| Ok::<_, BatchError>(v * 2))
        .then_all(|values| ensure_len(values, 3))?;
    ensure!(doubled == [2, 4, 6]);

    let errors = mixed_batch_with(1, 2, |msg| msg)
        .collect_all()
        .err()
        .ok_or_else(|| anyhow!("expected failure"))?;
    ensure!(errors.into_vec() == error_messages(2));
    Ok(())
}

#[test]
fn try_routing_surfaces_handler_error_to_caller() {
    let outcomes: Outcomes<usize, BatchError> =
        mixed_batch_with(3, 0, BatchError::message).into();
    let result = outcomes.try_for_each_success(|v| {
        if *v == 1 {
            Err(format!("rejected {v}"))
        } else {
            Ok(())
        }
    });
    assert_eq!(result.err().as_deref(), Some("rejected 1"));
}

fn ensure_len(values: &[usize], expected: usize) -> Result<(), BatchError> {
    if values.len() == expected {
        Ok(())
    } else {
        Err(BatchError::message(format!(
            "expected {expected} values, got {}",
            values.len()
        )))
    }
}
