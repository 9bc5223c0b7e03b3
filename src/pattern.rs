// src/pattern.rs
use crate::utils::*;
use image::{ImageBuffer, Rgb, RgbImage};
use ndarray::{Array3, Zip};

/// Every third scanline is a grain line.
pub const GRAIN_STEP: usize = 3;
/// Every 20th scanline starts a darker band.
pub const BAND_STEP: usize = 20;
pub const BAND_HEIGHT: usize = 2;

/// Colour of scanline `y` in the wood texture.
///
/// Dark bands are drawn last in the layered picture, so they win over the grain.
#[inline(always)]
pub fn scanline_color(y: usize) -> Rgb<u8> {
    if y % BAND_STEP < BAND_HEIGHT {
        DARK_BROWN
    } else if y % (GRAIN_STEP * 2) == 0 {
        SIENNA
    } else {
        SADDLE_BROWN
    }
}

/// Build the wood grid as `(height, width, channel)`, filled in parallel.
pub fn wood_grid(width: u32, height: u32) -> Array3<u8> {
    let mut grid = Array3::<u8>::zeros((height as usize, width as usize, 3));
    Zip::indexed(&mut grid).par_for_each(|(y, _x, c), v| {
        *v = scanline_color(y).0[c];
    });
    grid
}

pub fn generate_wood_background(width: u32, height: u32) -> RgbImage {
    let grid = wood_grid(width, height);

    let mut img = ImageBuffer::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let (x, y) = (x as usize, y as usize);
        *pixel = Rgb([grid[[y, x, 0]], grid[[y, x, 1]], grid[[y, x, 2]]]);
    }
    img
}
