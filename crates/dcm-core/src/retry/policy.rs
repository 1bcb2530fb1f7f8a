use std::time::Duration;

use thiserror::Error;

/// High-level classification of a failed attempt for retry purposes.
///
/// Callers assign the class when they build a [`FetchError`]; the policy
/// only ever sees the class, never the driver-specific cause.
///
/// [`FetchError`]: super::FetchError
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Timeout / connection-reset class failure, expected to pass on retry.
    Transient,
    /// Failure retrying cannot fix (malformed query, missing table).
    Permanent,
}

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Do not retry this error.
    NoRetry,
    /// Retry after the given delay.
    RetryAfter(Duration),
}

/// A policy must allow at least one attempt.
#[derive(Debug, Error)]
#[error("retry policy needs at least one attempt")]
pub struct InvalidPolicy;

/// Attempt-bounded retry with a fixed inter-attempt delay.
///
/// The delay is flat, not exponential: the collection jobs this serves
/// sleep a constant pause between tries.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        // Five tries, five minutes apart: the cadence the nightly
        // collection jobs have always run with.
        Self {
            max_attempts: 5,
            delay: Duration::from_secs(300),
        }
    }
}

impl RetryPolicy {
    /// `max_attempts` counts the first attempt; zero is rejected.
    pub fn new(max_attempts: u32, delay: Duration) -> Result<Self, InvalidPolicy> {
        if max_attempts == 0 {
            return Err(InvalidPolicy);
        }
        Ok(Self {
            max_attempts,
            delay,
        })
    }

    /// Policy with no pause between attempts. Tests and tight local loops.
    pub fn immediate(max_attempts: u32) -> Result<Self, InvalidPolicy> {
        Self::new(max_attempts, Duration::ZERO)
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Decide what to do after a failed attempt.
    ///
    /// `attempt` is 1-based (1 = first attempt). Returns
    /// [`RetryDecision::NoRetry`] once the budget is spent or the error
    /// class is not worth retrying.
    pub fn decide(&self, attempt: u32, kind: ErrorKind) -> RetryDecision {
        if attempt >= self.max_attempts {
            return RetryDecision::NoRetry;
        }
        match kind {
            ErrorKind::Permanent => RetryDecision::NoRetry,
            ErrorKind::Transient => RetryDecision::RetryAfter(self.delay),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_attempts_rejected() {
        assert!(RetryPolicy::new(0, Duration::ZERO).is_err());
        assert!(RetryPolicy::immediate(0).is_err());
    }

    #[test]
    fn no_retry_for_permanent() {
        let p = RetryPolicy::default();
        assert_eq!(p.decide(1, ErrorKind::Permanent), RetryDecision::NoRetry);
    }

    #[test]
    fn transient_gets_the_fixed_delay() {
        let p = RetryPolicy::new(3, Duration::from_secs(7)).unwrap();
        assert_eq!(
            p.decide(1, ErrorKind::Transient),
            RetryDecision::RetryAfter(Duration::from_secs(7))
        );
        assert_eq!(
            p.decide(2, ErrorKind::Transient),
            RetryDecision::RetryAfter(Duration::from_secs(7))
        );
    }

    #[test]
    fn respects_max_attempts() {
        let p = RetryPolicy::immediate(3).unwrap();
        assert!(matches!(
            p.decide(2, ErrorKind::Transient),
            RetryDecision::RetryAfter(_)
        ));
        assert_eq!(p.decide(3, ErrorKind::Transient), RetryDecision::NoRetry);
    }
}
