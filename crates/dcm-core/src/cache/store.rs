//! On-disk artifact store: CSV bodies for tables, raw bytes for text.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::artifact::{Artifact, Table};

/// Failure reading or writing an on-disk artifact.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("read artifact {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("write artifact {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("encode artifact {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("persist artifact {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },
}

/// True when an artifact is already present at `path`.
pub fn exists(path: &Path) -> bool {
    path.is_file()
}

/// Make sure `dir` and its parents exist. Already-present directories are
/// success, not an error.
pub fn ensure_dir(dir: &Path) -> Result<(), CacheError> {
    fs::create_dir_all(dir).map_err(|source| CacheError::Write {
        path: dir.to_path_buf(),
        source,
    })
}

/// Read the artifact stored at `path`.
///
/// The payload kind is recovered from shape: a strictly rectangular CSV
/// body decodes as a table, anything else comes back as raw text. A
/// comma-free body is indistinguishable from a single-column table and
/// decodes as the latter (see [`Table::read_csv`]).
pub fn read(path: &Path) -> Result<Artifact, CacheError> {
    let body = fs::read_to_string(path).map_err(|source| CacheError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    match Table::read_csv(body.as_bytes()) {
        Ok(table) => Ok(Artifact::Table(table)),
        Err(_) => Ok(Artifact::Text(body)),
    }
}

/// Write `artifact` at `path`, creating parent directories as needed.
///
/// The payload lands in a unique temp file next to the destination and is
/// renamed into place, so a concurrent reader never sees a partial
/// artifact. Racing writers on the same key are last-writer-wins at the
/// rename.
pub fn write(path: &Path, artifact: &Artifact) -> Result<(), CacheError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    ensure_dir(&dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(&dir).map_err(|source| CacheError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    match artifact {
        Artifact::Table(table) => {
            table
                .write_csv(&mut tmp)
                .map_err(|source| CacheError::Encode {
                    path: path.to_path_buf(),
                    source,
                })?;
        }
        Artifact::Text(text) => {
            tmp.write_all(text.as_bytes())
                .map_err(|source| CacheError::Write {
                    path: path.to_path_buf(),
                    source,
                })?;
        }
    }
    tmp.persist(path).map_err(|source| CacheError::Persist {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Remove the artifact at `path`. Returns whether anything was deleted;
/// a missing artifact is not an error.
pub fn remove(path: &Path) -> Result<bool, CacheError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(CacheError::Write {
            path: path.to_path_buf(),
            source,
        }),
    }
}
