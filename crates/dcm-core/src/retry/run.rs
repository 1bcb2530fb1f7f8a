//! Retry loop: run a collection closure until success or the policy says stop.

use super::error::{FetchError, RetryError};
use super::policy::{ErrorKind, RetryDecision, RetryPolicy};

/// Runs `op` until it succeeds or the policy says to stop. Each failed
/// attempt is logged with its index; transient failures sleep the policy
/// delay before the next try. The first success returns immediately.
pub fn run_with_retry<T, F>(policy: &RetryPolicy, mut op: F) -> Result<T, RetryError>
where
    F: FnMut() -> Result<T, FetchError>,
{
    let mut attempt = 1u32;
    loop {
        match op() {
            Ok(value) => return Ok(value),
            Err(err) => {
                tracing::warn!(attempt, error = %err, "fetch attempt failed");
                match policy.decide(attempt, err.kind()) {
                    RetryDecision::NoRetry => {
                        return Err(match err.kind() {
                            ErrorKind::Permanent => RetryError::Fatal {
                                attempt,
                                source: err,
                            },
                            ErrorKind::Transient => RetryError::Exhausted {
                                attempts: attempt,
                                last: err,
                            },
                        });
                    }
                    RetryDecision::RetryAfter(delay) => {
                        std::thread::sleep(delay);
                        attempt += 1;
                    }
                }
            }
        }
    }
}
