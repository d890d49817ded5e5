use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use rayon::prelude::*;

use crate::catalog::{finalize, Catalog, Entity, EntityManager};
use crate::error::Result;
use crate::extractor::{FileWalker, Parser as SourceParser};
use crate::languages::LanguageRegistry;
use crate::syntax::lower_file;

#[derive(Parser)]
#[command(name = "kotlin-catalog")]
#[command(about = "Extract a structural entity catalog from Kotlin sources")]
#[command(version)]
#[command(after_long_help = r#"
EXAMPLES:
    # Catalog the current directory into catalog.json
    kotlin-catalog

    # Catalog a project into a chosen output file
    kotlin-catalog ./my-project -o entities.json
"#)]
pub struct Cli {
    /// Root directory to scan for Kotlin sources
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output file for the entity catalog
    #[arg(short, long, default_value = "catalog.json")]
    pub output: PathBuf,
}

pub fn extract(path: &Path, output: &Path) -> Result<()> {
    let registry = LanguageRegistry::new();
    let walker = FileWalker::new(registry);

    let files = walker.walk(path)?;
    tracing::info!("found {} Kotlin files under {}", files.len(), path.display());

    // Per-file traversal is independent; merge in walk order so first-seen
    // deduplication stays deterministic.
    let per_file: Vec<Vec<Entity>> = files
        .par_iter()
        .map(|file| {
            let registry = LanguageRegistry::new();
            let parser = SourceParser::new(registry);
            match parser.parse_file(file) {
                Ok(parsed) => {
                    if parsed.root_node().has_error() {
                        tracing::warn!(
                            "syntax errors in {}, some declarations may be missing",
                            file.display()
                        );
                    }
                    let source_file = lower_file(&parsed);
                    let mut manager = EntityManager::new();
                    manager.collect_file(&source_file);
                    manager.into_entities()
                }
                Err(e) => {
                    tracing::warn!("skipping {}: {}", file.display(), e);
                    Vec::new()
                }
            }
        })
        .collect();

    let entities: Vec<Entity> = per_file.into_iter().flatten().collect();
    let catalog = finalize(entities);
    tracing::info!("catalog holds {} entities", catalog.len());

    write_catalog(&catalog, output)?;
    tracing::info!("catalog written to {}", output.display());

    Ok(())
}

/// Write the catalog through a sibling temp file so a failed run never
/// leaves a truncated artifact behind.
fn write_catalog(catalog: &Catalog, output: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog)?;
    let tmp = output.with_extension("tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, output)?;
    Ok(())
}
