// src/font.rs
use std::io;
use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use rusttype::{point, Font, PositionedGlyph, Scale};
use thiserror::Error;
use tracing::{debug, warn};

use crate::bitmap_font::{self, GLYPH_HEIGHT, GLYPH_SPACING, GLYPH_WIDTH};
use crate::utils::blend_at;

#[derive(Debug, Error)]
pub enum FontError {
    #[error("cannot read font {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} is not a usable TrueType font", path.display())]
    Parse { path: PathBuf },
}

/// Ink bounds of a piece of text laid out at origin (0, 0), in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBox {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

pub enum Face {
    TrueType { font: Font<'static>, scale: Scale },
    /// Built-in 5x7 glyphs, each source pixel drawn as a `scale` x `scale` block.
    Bitmap { scale: u32 },
}

impl Face {
    pub fn load(path: &Path, size: f32) -> Result<Self, FontError> {
        let data = std::fs::read(path).map_err(|source| FontError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let font = Font::try_from_vec(data).ok_or_else(|| FontError::Parse {
            path: path.to_path_buf(),
        })?;
        Ok(Face::TrueType {
            font,
            scale: Scale::uniform(size),
        })
    }

    /// A missing or broken font is not an error: the bitmap face takes over.
    pub fn load_or_fallback(path: &Path, size: f32, fallback_scale: u32) -> Self {
        match Self::load(path, size) {
            Ok(face) => {
                debug!(font = %path.display(), size, "loaded TrueType face");
                face
            }
            Err(err) => {
                warn!(error = %err, "falling back to built-in bitmap font");
                Face::bitmap(fallback_scale)
            }
        }
    }

    pub fn bitmap(scale: u32) -> Self {
        Face::Bitmap {
            scale: scale.max(1),
        }
    }

    pub fn is_bitmap(&self) -> bool {
        matches!(self, Face::Bitmap { .. })
    }

    /// Bounding box of `text` drawn with its top-left at (0, 0).
    pub fn measure(&self, text: &str) -> TextBox {
        match self {
            Face::TrueType { font, scale } => {
                let mut bounds: Option<TextBox> = None;
                for g in layout(font, *scale, text, 0, 0) {
                    let Some(bb) = g.pixel_bounding_box() else {
                        continue;
                    };
                    bounds = Some(match bounds {
                        None => TextBox {
                            left: bb.min.x,
                            top: bb.min.y,
                            right: bb.max.x,
                            bottom: bb.max.y,
                        },
                        Some(b) => TextBox {
                            left: b.left.min(bb.min.x),
                            top: b.top.min(bb.min.y),
                            right: b.right.max(bb.max.x),
                            bottom: b.bottom.max(bb.max.y),
                        },
                    });
                }
                bounds.unwrap_or_default()
            }
            Face::Bitmap { scale } => {
                let n = text.chars().count() as u32;
                if n == 0 {
                    return TextBox::default();
                }
                let advance = GLYPH_WIDTH + GLYPH_SPACING;
                TextBox {
                    left: 0,
                    top: 0,
                    right: ((n * advance - GLYPH_SPACING) * scale) as i32,
                    bottom: (GLYPH_HEIGHT * scale) as i32,
                }
            }
        }
    }

    /// Draw `text` with its layout origin at (`x`, `y`). Off-canvas pixels are dropped.
    pub fn draw(&self, img: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, text: &str) {
        match self {
            Face::TrueType { font, scale } => {
                for g in layout(font, *scale, text, x, y) {
                    let Some(bb) = g.pixel_bounding_box() else {
                        continue;
                    };
                    g.draw(|gx, gy, v| {
                        blend_at(img, bb.min.x + gx as i32, bb.min.y + gy as i32, color, v);
                    });
                }
            }
            Face::Bitmap { scale } => {
                let s = *scale as i32;
                let advance = (GLYPH_WIDTH + GLYPH_SPACING) as i32;
                for (i, ch) in text.chars().enumerate() {
                    let cell_x = x + i as i32 * advance * s;
                    for col in 0..GLYPH_WIDTH {
                        for row in 0..GLYPH_HEIGHT {
                            if !bitmap_font::is_lit(ch, col, row) {
                                continue;
                            }
                            let px = cell_x + col as i32 * s;
                            let py = y + row as i32 * s;
                            for dy in 0..s {
                                for dx in 0..s {
                                    blend_at(img, px + dx, py + dy, color, 1.0);
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn layout<'a>(
    font: &'a Font<'static>,
    scale: Scale,
    text: &'a str,
    x: i32,
    y: i32,
) -> impl Iterator<Item = PositionedGlyph<'static>> + 'a {
    let ascent = font.v_metrics(scale).ascent;
    font.layout(text, scale, point(x as f32, y as f32 + ascent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{SADDLE_BROWN, WHITE};

    const SYSTEM_FONTS: &[&str] = &[
        "/System/Library/Fonts/Arial.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
    ];

    #[test]
    fn missing_font_falls_back_to_bitmap() {
        let face = Face::load_or_fallback(Path::new("/no/such/font.ttf"), 80.0, 8);
        assert!(face.is_bitmap());
    }

    #[test]
    fn garbage_font_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"definitely not a font").unwrap();
        assert!(matches!(Face::load(&path, 80.0), Err(FontError::Parse { .. })));
        assert!(Face::load_or_fallback(&path, 80.0, 2).is_bitmap());
    }

    #[test]
    fn bitmap_measure_scales_glyph_cells() {
        let face = Face::bitmap(8);
        let b = face.measure("Beef");
        assert_eq!(b.left, 0);
        assert_eq!(b.width(), (4 * 6 - 1) * 8);
        assert_eq!(b.height(), 7 * 8);
        assert_eq!(face.measure(""), TextBox::default());
    }

    #[test]
    fn bitmap_draw_stays_inside_measured_box() {
        let face = Face::bitmap(2);
        let mut img = RgbImage::from_pixel(80, 30, SADDLE_BROWN);
        face.draw(&mut img, 5, 5, WHITE, "HI");
        let b = face.measure("HI");
        let mut lit = 0;
        for (x, y, p) in img.enumerate_pixels() {
            if *p == WHITE {
                lit += 1;
                let (x, y) = (x as i32 - 5, y as i32 - 5);
                assert!(x >= b.left && x < b.right && y >= b.top && y < b.bottom);
            }
        }
        assert!(lit > 0);
    }

    #[test]
    fn drawing_far_off_canvas_is_harmless() {
        let face = Face::bitmap(8);
        let mut img = RgbImage::from_pixel(16, 16, SADDLE_BROWN);
        face.draw(&mut img, -5000, -5000, WHITE, "Overflow");
        face.draw(&mut img, 5000, 5000, WHITE, "Overflow");
        assert!(img.pixels().all(|p| *p == SADDLE_BROWN));
    }

    #[test]
    fn truetype_measure_when_available() {
        let Some(path) = SYSTEM_FONTS.iter().map(Path::new).find(|p| p.exists()) else {
            return;
        };
        let face = Face::load(path, 80.0).unwrap();
        let wide = face.measure("Spaghetti Bolognese");
        let narrow = face.measure("Pie");
        assert!(wide.width() > narrow.width());
        assert!(wide.height() > 0);
        assert_eq!(face.measure("   "), TextBox::default());
    }
}
