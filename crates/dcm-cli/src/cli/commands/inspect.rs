//! `dcm inspect` – report an artifact's presence and shape.

use anyhow::Result;
use dcm_core::artifact::Artifact;
use dcm_core::cache;
use dcm_core::config::DcmConfig;
use std::path::Path;

pub fn run_inspect(cfg: &DcmConfig, key: &Path) -> Result<()> {
    let path = cfg.cache_key(key);
    if !cache::exists(&path) {
        println!("absent  {}", path.display());
        return Ok(());
    }
    match cache::read(&path)? {
        Artifact::Table(t) => println!(
            "table   {}  {} cols x {} rows",
            path.display(),
            t.width(),
            t.row_count()
        ),
        Artifact::Text(s) => println!("text    {}  {} bytes", path.display(), s.len()),
    }
    Ok(())
}
