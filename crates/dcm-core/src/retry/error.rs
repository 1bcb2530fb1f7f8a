//! Typed failures for remote collection attempts.

use thiserror::Error;

use super::policy::ErrorKind;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// One attempt's failure, classified at construction by whoever owns the
/// driver error. The retry loop only looks at the class.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Expected to pass on retry (timeout, connection reset, throttling).
    #[error("transient fetch failure: {0}")]
    Transient(#[source] BoxError),
    /// Retrying cannot fix this (malformed query, permission denied).
    #[error("permanent fetch failure: {0}")]
    Permanent(#[source] BoxError),
}

impl FetchError {
    pub fn transient(cause: impl Into<BoxError>) -> Self {
        FetchError::Transient(cause.into())
    }

    pub fn permanent(cause: impl Into<BoxError>) -> Self {
        FetchError::Permanent(cause.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::Transient(_) => ErrorKind::Transient,
            FetchError::Permanent(_) => ErrorKind::Permanent,
        }
    }
}

/// Terminal outcome of a retry loop that never produced a success.
///
/// Exhaustion always carries the last underlying failure; a run that gave
/// up is never reported as an empty result.
#[derive(Debug, Error)]
pub enum RetryError {
    /// Every attempt failed transiently.
    #[error("gave up after {attempts} attempts: {last}")]
    Exhausted {
        attempts: u32,
        #[source]
        last: FetchError,
    },
    /// A permanent failure stopped the loop early.
    #[error("aborted on attempt {attempt}: {source}")]
    Fatal {
        attempt: u32,
        #[source]
        source: FetchError,
    },
}
