// src/config.rs
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_DIR: &str = "images";
pub const DEFAULT_FONT_PATH: &str = "/System/Library/Fonts/Arial.ttf";

/// Compiled-in generator settings. Nothing here is read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub output_dir: PathBuf,
    pub width: u32,
    pub height: u32,
    pub font_path: PathBuf,
    pub font_size: f32,
    /// Integer pixel scale applied to the built-in 5x7 glyphs.
    pub fallback_scale: u32,
    pub jpeg_quality: u8,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            width: 1920,
            height: 1080,
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            font_size: 80.0,
            fallback_scale: 8,
            jpeg_quality: 95,
        }
    }
}

impl GeneratorConfig {
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_path = path.into();
        self
    }
}
