//! `dcm clear` – external cache invalidation: delete the artifact.

use anyhow::Result;
use dcm_core::cache;
use dcm_core::config::DcmConfig;
use std::path::Path;

pub fn run_clear(cfg: &DcmConfig, key: &Path) -> Result<()> {
    let path = cfg.cache_key(key);
    if cache::remove(&path)? {
        tracing::info!(path = %path.display(), "artifact cleared");
        println!("cleared {}", path.display());
    } else {
        println!("nothing to clear at {}", path.display());
    }
    Ok(())
}
