// src/batch.rs
use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::catalog::{image_path, MealEntry, MEALS};
use crate::config::GeneratorConfig;
use crate::error::{GenError, Result};
use crate::prompt::rule;
use crate::synth::{load_face, synthesize};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub created: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

pub fn run_batch(config: &GeneratorConfig) -> Result<BatchSummary> {
    run_batch_with(MEALS, config)
}

/// Generate a placeholder for every entry whose file is not on disk yet.
///
/// The first failure stops the batch; files written before it stay in place.
pub fn run_batch_with(entries: &[MealEntry], config: &GeneratorConfig) -> Result<BatchSummary> {
    info!("🍽️  Meal Image Generator");
    info!("{}", rule());

    ensure_output_dir(config)?;
    let face = load_face(config);

    let mut summary = BatchSummary::default();
    for (i, meal) in entries.iter().enumerate() {
        info!("{}/{}: Generating {}...", i + 1, entries.len(), meal.name);

        let path = image_path(&config.output_dir, meal.name);
        if path.exists() {
            info!("   ✓ Already exists: {}", path.display());
            summary.skipped.push(path);
            continue;
        }

        synthesize(&path, meal.name, &face, config)?;
        info!("   ✓ Created: {}", path.display());
        summary.created.push(path);
    }

    info!(
        created = summary.created.len(),
        skipped = summary.skipped.len(),
        "✅ All meal images generated!"
    );
    Ok(summary)
}

fn ensure_output_dir(config: &GeneratorConfig) -> Result<()> {
    fs::create_dir_all(&config.output_dir).map_err(|source| GenError::CreateDir {
        path: config.output_dir.clone(),
        source,
    })
}
