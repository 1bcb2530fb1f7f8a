//! `dcm render` – assemble a query from a template file and print it.

use anyhow::{anyhow, Context, Result};
use dcm_core::query::QueryTemplate;
use std::path::Path;

pub fn run_render(template_path: &Path, sets: &[String]) -> Result<()> {
    let text = std::fs::read_to_string(template_path)
        .with_context(|| format!("read template: {}", template_path.display()))?;
    let template = QueryTemplate::new(text);

    let mut replacements = Vec::with_capacity(sets.len());
    for set in sets {
        let (tag, value) = set
            .split_once('=')
            .ok_or_else(|| anyhow!("expected TAG=VALUE, got {set:?}"))?;
        replacements.push((tag, value));
    }

    println!("{}", template.render(&replacements));
    Ok(())
}
