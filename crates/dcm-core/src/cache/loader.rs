//! Disk-or-compute decision: the memoizing front door over the store.

use std::path::Path;

use thiserror::Error;

use super::store::{self, CacheError};
use crate::artifact::Artifact;

/// How a [`load`] call obtained its artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No key was given; the producer ran and nothing touched disk.
    Bypass,
    /// The artifact was already on disk; the producer never ran.
    Hit,
    /// The producer ran and its result was written through.
    /// `text_fallback` is set when the result was not tabular and was
    /// stored as raw text.
    Miss { text_fallback: bool },
}

/// An artifact plus how it was obtained.
#[derive(Debug)]
pub struct Loaded {
    pub artifact: Artifact,
    pub outcome: LoadOutcome,
}

/// A load failed: either the producer did, or the disk did.
#[derive(Debug, Error)]
pub enum LoadError<E> {
    #[error("producer failed")]
    Produce(#[source] E),
    #[error(transparent)]
    Cache(#[from] CacheError),
}

/// Return the artifact for `key`, running `producer` at most once.
///
/// No key (or an empty one) bypasses the cache entirely: the producer
/// runs and disk is never touched. With a key, a present artifact is
/// returned as stored (stale entries are refreshed only by deleting the
/// file) and a missing one is produced, persisted, and returned.
///
/// A non-tabular result on a miss is stored as raw text. That fallback is
/// deliberate and logged, not a coercion: the artifact comes back exactly
/// as produced, and the outcome records that it happened.
pub fn load<E, F>(key: Option<&Path>, mut producer: F) -> Result<Loaded, LoadError<E>>
where
    F: FnMut() -> Result<Artifact, E>,
{
    let path = match key {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => {
            let artifact = producer().map_err(LoadError::Produce)?;
            return Ok(Loaded {
                artifact,
                outcome: LoadOutcome::Bypass,
            });
        }
    };

    if store::exists(path) {
        let artifact = store::read(path)?;
        tracing::debug!(path = %path.display(), "cache hit");
        return Ok(Loaded {
            artifact,
            outcome: LoadOutcome::Hit,
        });
    }

    let artifact = producer().map_err(LoadError::Produce)?;
    let text_fallback = !artifact.is_table();
    if text_fallback {
        tracing::warn!(path = %path.display(), "non-tabular result, storing raw text");
    }
    store::write(path, &artifact)?;
    tracing::debug!(path = %path.display(), "cache miss, wrote through");
    Ok(Loaded {
        artifact,
        outcome: LoadOutcome::Miss { text_fallback },
    })
}
