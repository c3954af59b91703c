//! Behavioural properties of the routing and aggregation operators over
//! batches of `s` successes followed by `f` failures.

use anyhow::{Result, anyhow, ensure};
use fluent_results::{BatchError, catch, for_failures, for_successes, then};
use rstest::rstest;
use test_helpers::batch::{error_messages, mixed_batch_with};
use test_helpers::recorder::CallLog;

type Batch = Vec<Result<usize, BatchError>>;

fn batch(successes: usize, failures: usize) -> Batch {
    mixed_batch_with(successes, failures, BatchError::message)
}

fn aggregate_messages(err: &BatchError) -> Result<Vec<String>> {
    let agg = err
        .aggregated()
        .ok_or_else(|| anyhow!("expected aggregate error, got {err}"))?;
    Ok(agg.iter().map(ToString::to_string).collect())
}

#[rstest]
#[case::all_successes(5, 0)]
#[case::mixed(5, 2)]
#[case::mostly_failures(1, 4)]
#[case::empty(0, 0)]
fn routing_visits_each_variant_exactly_once(
    #[case] successes: usize,
    #[case] failures: usize,
) -> Result<()> {
    let outcomes = batch(successes, failures);
    let values = CallLog::default();
    let errors = CallLog::default();
    let routed = for_successes(&outcomes, |v| values.record(*v));
    for_failures(routed, |e| errors.record(e.to_string()));
    ensure!(
        values.calls() == (0..successes).collect::<Vec<_>>(),
        "success handler saw {:?}",
        values.calls()
    );
    ensure!(
        errors.calls() == error_messages(failures),
        "failure handler saw {:?}",
        errors.calls()
    );
    Ok(())
}

#[rstest]
#[case::five(5)]
#[case::empty(0)]
fn then_continues_with_every_value(#[case] successes: usize) -> Result<()> {
    let actions = CallLog::default();
    let values = then(batch(successes, 0), |values| {
        actions.record(values.to_vec());
        Ok(())
    })?;
    let expected: Vec<usize> = (0..successes).collect();
    ensure!(values == expected, "returned {values:?}");
    ensure!(actions.take() == [expected], "action must run exactly once");
    Ok(())
}

#[rstest]
#[case::two_failures(5, 2)]
#[case::only_failures(0, 3)]
fn then_aggregates_failures_without_running_action(
    #[case] successes: usize,
    #[case] failures: usize,
) -> Result<()> {
    let actions = CallLog::<()>::default();
    let result = then(batch(successes, failures), |_| {
        actions.record(());
        Ok(())
    });
    let err = result.err().ok_or_else(|| anyhow!("expected failure"))?;
    ensure!(actions.count() == 0, "action ran despite item failures");
    ensure!(aggregate_messages(&err)? == error_messages(failures));
    Ok(())
}

#[test]
fn catch_reports_failures_once_and_keeps_them() -> Result<()> {
    let reports = CallLog::default();
    let result = catch(batch(5, 2), |errors| {
        reports.record(errors.iter().map(ToString::to_string).collect::<Vec<_>>());
        Ok(())
    });
    let err = result.err().ok_or_else(|| anyhow!("catch recovered"))?;
    ensure!(reports.take() == [error_messages(2)], "handler not run once");
    ensure!(aggregate_messages(&err)? == error_messages(2));
    Ok(())
}

#[test]
fn catch_handler_failure_replaces_item_failures() -> Result<()> {
    let result = catch(batch(5, 2), |_| Err(BatchError::message("Error X")));
    let err = result.err().ok_or_else(|| anyhow!("expected failure"))?;
    ensure!(err.to_string() == "Error X", "unexpected error {err}");
    ensure!(err.aggregated().is_none(), "handler error was aggregated");
    Ok(())
}

#[rstest]
#[case::five(5)]
#[case::empty(0)]
fn catch_returns_all_values_without_failures(#[case] successes: usize) -> Result<()> {
    let reports = CallLog::<usize>::default();
    let values = catch(batch(successes, 0), |errors| {
        reports.record(errors.len());
        Ok(())
    })?;
    ensure!(values == (0..successes).collect::<Vec<_>>());
    ensure!(reports.count() == 0, "handler ran without failures");
    Ok(())
}
