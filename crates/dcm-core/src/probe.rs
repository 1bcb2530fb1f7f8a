//! Availability polling: ask a source whether data has landed yet.
//!
//! Upstream tables fill on their own schedule; a collection run that
//! starts too early reads a half-loaded day. The probe is a cheap caller
//! query that answers "is it all there?" and this module repeats it until
//! the answer is yes or the attempt budget runs out.

use thiserror::Error;

use crate::retry::{FetchError, RetryPolicy};

#[derive(Debug, Error)]
pub enum ProbeError {
    /// The probe query itself failed; surfaced immediately.
    #[error("probe failed: {0}")]
    Probe(#[source] FetchError),
    /// Every attempt saw the source still not ready.
    #[error("source not ready after {attempts} attempts")]
    Unavailable { attempts: u32 },
}

/// Poll `probe` until it reports ready, up to the policy's attempt budget,
/// sleeping the policy delay between rounds. Returns the 1-based attempt
/// on which the source became ready.
///
/// "Not ready" consumes an attempt; a probe error does not get retried
/// here. If the probe itself is flaky, wrap it in
/// [`run_with_retry`](crate::retry::run_with_retry) first.
pub fn wait_until_ready<F>(policy: &RetryPolicy, mut probe: F) -> Result<u32, ProbeError>
where
    F: FnMut() -> Result<bool, FetchError>,
{
    for attempt in 1..=policy.max_attempts() {
        match probe() {
            Err(err) => return Err(ProbeError::Probe(err)),
            Ok(true) => {
                tracing::info!(attempt, "source ready");
                return Ok(attempt);
            }
            Ok(false) => {
                tracing::info!(attempt, "data not ready yet");
                if attempt < policy.max_attempts() {
                    std::thread::sleep(policy.delay());
                }
            }
        }
    }
    Err(ProbeError::Unavailable {
        attempts: policy.max_attempts(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn ready_on_later_attempt_reports_which_one() {
        let policy = RetryPolicy::immediate(5).unwrap();
        let mut calls = 0u32;
        let attempt = wait_until_ready(&policy, || {
            calls += 1;
            Ok(calls >= 2)
        })
        .unwrap();
        assert_eq!(attempt, 2);
        assert_eq!(calls, 2);
    }

    #[test]
    fn never_ready_exhausts_the_budget() {
        let policy = RetryPolicy::immediate(3).unwrap();
        let mut calls = 0u32;
        let err = wait_until_ready(&policy, || {
            calls += 1;
            Ok(false)
        })
        .unwrap_err();
        assert_eq!(calls, 3);
        assert!(matches!(err, ProbeError::Unavailable { attempts: 3 }));
    }

    #[test]
    fn probe_error_propagates_immediately() {
        let policy = RetryPolicy::immediate(5).unwrap();
        let mut calls = 0u32;
        let err = wait_until_ready(&policy, || {
            calls += 1;
            Err(FetchError::transient(io::Error::new(
                io::ErrorKind::TimedOut,
                "read timed out",
            )))
        })
        .unwrap_err();
        assert_eq!(calls, 1);
        assert!(matches!(err, ProbeError::Probe(_)));
    }
}
