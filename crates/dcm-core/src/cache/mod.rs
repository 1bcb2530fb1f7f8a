//! CSV-backed on-disk memoization of collection results.
//!
//! A load call is a pure function of the key and current disk state: no
//! key means always produce, a present artifact is returned as-is, a
//! missing one is produced once and written through. Entries never expire
//! on their own; invalidation is deleting the file (`dcm clear`).

mod loader;
mod store;

pub use loader::{load, LoadError, LoadOutcome, Loaded};
pub use store::{ensure_dir, exists, read, remove, write, CacheError};
