use std::io;

use anyhow::{Context, Result};
use meal_placeholders::{prompt, run_batch, GeneratorConfig, MEALS};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let config = GeneratorConfig::default();
    run_batch(&config).context("generating meal images")?;

    println!();
    prompt::write_report(io::stdout().lock(), MEALS).context("writing prompt report")?;
    Ok(())
}
