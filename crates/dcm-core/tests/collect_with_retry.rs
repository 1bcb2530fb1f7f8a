//! The composed pattern: a retrying producer behind the cache.

use std::io;

use dcm_core::artifact::{Artifact, Table};
use dcm_core::cache::{self, LoadOutcome};
use dcm_core::retry::{run_with_retry, FetchError, RetryError, RetryPolicy};

fn day_totals() -> Table {
    Table::from_rows(
        vec!["a".to_string(), "b".to_string()],
        vec![vec!["1".to_string(), "2".to_string()]],
    )
    .unwrap()
}

#[test]
fn flaky_source_is_collected_once_then_served_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let key = dir.path().join("day_totals.csv");
    let policy = RetryPolicy::immediate(3).unwrap();

    let mut remote_calls = 0u32;
    let loaded = cache::load(Some(key.as_path()), || {
        run_with_retry(&policy, || {
            remote_calls += 1;
            if remote_calls < 3 {
                Err(FetchError::transient(io::Error::new(
                    io::ErrorKind::TimedOut,
                    "query timed out",
                )))
            } else {
                Ok(Artifact::Table(day_totals()))
            }
        })
    })
    .unwrap();

    assert_eq!(remote_calls, 3);
    assert_eq!(
        loaded.outcome,
        LoadOutcome::Miss {
            text_fallback: false
        }
    );

    // Second run never reaches the remote at all.
    let again = cache::load(Some(key.as_path()), || {
        run_with_retry(&policy, || -> Result<Artifact, FetchError> {
            remote_calls += 1;
            Err(FetchError::transient(io::Error::other("must not be called")))
        })
    })
    .unwrap();
    assert_eq!(remote_calls, 3);
    assert_eq!(again.outcome, LoadOutcome::Hit);
    assert_eq!(again.artifact, Artifact::Table(day_totals()));
}

#[test]
fn exhausted_retries_surface_as_a_producer_error_and_cache_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let key = dir.path().join("day_totals.csv");
    let policy = RetryPolicy::immediate(2).unwrap();

    let err = cache::load(Some(key.as_path()), || {
        run_with_retry(&policy, || -> Result<Artifact, FetchError> {
            Err(FetchError::transient(io::Error::new(
                io::ErrorKind::ConnectionReset,
                "connection reset by peer",
            )))
        })
    })
    .unwrap_err();

    match err {
        cache::LoadError::Produce(RetryError::Exhausted { attempts, .. }) => {
            assert_eq!(attempts, 2)
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!cache::exists(&key));
}
