//! Scan command: resolve a signature table against a dumped image.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use camber::offset::{self, OffsetDump, format_offset};
use camber::{ModuleImage, PhysicsField, SignatureSet};
use owo_colors::OwoColorize;
use strum::IntoEnumIterator;
use tracing::info;

pub fn run(
    image_path: &Path,
    signatures: Option<&Path>,
    build: &str,
    dump: Option<&Path>,
) -> Result<()> {
    let data = fs::read(image_path)
        .with_context(|| format!("reading image {}", image_path.display()))?;

    let set = match signatures {
        Some(path) => offset::load_signatures(path)
            .with_context(|| format!("loading signatures {}", path.display()))?,
        None => SignatureSet::builtin(),
    };

    info!(
        "resolving {} signature entries against {} bytes (table build {})",
        set.entries.len(),
        data.len(),
        set.build
    );

    let image = ModuleImage::from_slice(0, &data);
    let offsets = offset::resolve(&image, &set);

    for field in PhysicsField::iter() {
        match offsets.get(field) {
            Some(value) => {
                println!("  {:<28} {}", field.to_string(), format_offset(value).green());
            }
            None => println!("  {:<28} {}", field.to_string(), "unresolved".red()),
        }
    }
    println!();
    println!(
        "{} of {} fields resolved",
        offsets.resolved_count(),
        PhysicsField::iter().count()
    );

    if let Some(path) = dump {
        OffsetDump::from_offsets(build, &offsets)
            .save(path)
            .with_context(|| format!("writing dump {}", path.display()))?;
        println!("dump written to {}", path.display());
    }

    if offsets.is_empty() {
        bail!("no signature resolved against this image");
    }

    Ok(())
}
