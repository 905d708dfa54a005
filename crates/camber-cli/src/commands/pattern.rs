//! Pattern command: ad-hoc pattern search over a dumped image.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use camber::{Pattern, find_all};

pub fn run(image_path: &Path, pattern_text: &str) -> Result<()> {
    let pattern = Pattern::parse(pattern_text)?;
    let data = fs::read(image_path)
        .with_context(|| format!("reading image {}", image_path.display()))?;

    let matches = find_all(&data, &pattern);
    if matches.is_empty() {
        println!("no matches for {pattern}");
        return Ok(());
    }

    for position in &matches {
        println!("  {:#010X}", position);
    }
    println!("{} match(es) for {pattern}", matches.len());

    Ok(())
}
