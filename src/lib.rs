// src/lib.rs
pub mod batch;
pub mod bitmap_font;
pub mod catalog;
pub mod config;
pub mod error;
pub mod font;
pub mod pattern;
pub mod prompt;
pub mod synth;
pub mod utils;

pub use batch::{run_batch, run_batch_with, BatchSummary};
pub use catalog::{image_path, slug, MealEntry, MEALS};
pub use config::GeneratorConfig;
pub use error::{GenError, Result};
