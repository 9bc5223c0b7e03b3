// src/synth.rs
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, RgbImage};
use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::error::{GenError, Result};
use crate::font::Face;
use crate::pattern::generate_wood_background;
use crate::utils::*;

pub const SHADOW_OFFSET: i32 = 3;
pub const BORDER_WIDTH: u32 = 3;

/// Draw the placeholder for `meal_name`: wood background, shadowed centred text, border.
pub fn render_placeholder(meal_name: &str, face: &Face, width: u32, height: u32) -> RgbImage {
    let mut img = generate_wood_background(width, height);

    let bbox = face.measure(meal_name);
    let x = centered_origin(width, bbox.width());
    let y = centered_origin(height, bbox.height());
    debug!(meal = meal_name, x, y, w = bbox.width(), h = bbox.height(), "text layout");

    face.draw(&mut img, x + SHADOW_OFFSET, y + SHADOW_OFFSET, DARK_BROWN, meal_name);
    face.draw(&mut img, x, y, WHITE, meal_name);

    draw_border(&mut img, BORDER_WIDTH, DARK_BROWN);
    img
}

pub fn load_face(config: &GeneratorConfig) -> Face {
    Face::load_or_fallback(&config.font_path, config.font_size, config.fallback_scale)
}

/// Render and save one placeholder JPEG. The caller checks that `path` does not exist yet.
pub fn synthesize(path: &Path, meal_name: &str, face: &Face, config: &GeneratorConfig) -> Result<()> {
    let img = render_placeholder(meal_name, face, config.width, config.height);
    save_jpeg(&img, path, config.jpeg_quality)?;
    info!("   📸 Placeholder created for {meal_name}");
    Ok(())
}

/// Encode next to `path` and rename into place, so `path` only ever holds a complete file.
///
/// Errors name `path`; the `.part` file is an implementation detail.
pub fn save_jpeg(img: &RgbImage, path: &Path, quality: u8) -> Result<()> {
    let tmp = partial_path(path);
    debug!(tmp = %tmp.display(), "encoding");
    let result = write_jpeg(img, &tmp, path, quality).and_then(|()| {
        fs::rename(&tmp, path).map_err(|source| GenError::Io {
            path: path.to_path_buf(),
            source,
        })
    });
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn write_jpeg(img: &RgbImage, tmp: &Path, target: &Path, quality: u8) -> Result<()> {
    let io_err = |source| GenError::Io {
        path: target.to_path_buf(),
        source,
    };
    let file = File::create(tmp).map_err(io_err)?;
    let mut out = BufWriter::new(file);

    let mut enc = JpegEncoder::new_with_quality(&mut out, quality);
    enc.encode(img.as_raw(), img.width(), img.height(), ColorType::Rgb8)
        .map_err(|source| GenError::Encode {
            path: target.to_path_buf(),
            source,
        })?;

    out.flush().map_err(io_err)?;
    Ok(())
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    path.with_file_name(name)
}
