// src/utils.rs
use image::{Rgb, RgbImage};

pub const SADDLE_BROWN: Rgb<u8> = Rgb([0x8B, 0x45, 0x13]);
pub const SIENNA: Rgb<u8> = Rgb([0xA0, 0x52, 0x2D]);
pub const DARK_BROWN: Rgb<u8> = Rgb([0x65, 0x43, 0x21]);
pub const WHITE: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);

/// Mix `color` over `dst` with `coverage` in 0..=1.
#[inline(always)]
pub fn blend(dst: &mut Rgb<u8>, color: Rgb<u8>, coverage: f32) {
    let a = coverage.clamp(0.0, 1.0);
    let inv = 1.0 - a;
    for c in 0..3 {
        dst.0[c] = (color.0[c] as f32 * a + dst.0[c] as f32 * inv).round() as u8;
    }
}

/// Blend one pixel at signed coordinates, ignoring anything off-canvas.
#[inline(always)]
pub fn blend_at(img: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, coverage: f32) {
    if x < 0 || y < 0 || coverage <= 0.0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x >= img.width() || y >= img.height() {
        return;
    }
    blend(img.get_pixel_mut(x, y), color, coverage);
}

/// Fill `[x0, x1) x [y0, y1)`, clipped to the image.
pub fn fill_rect(img: &mut RgbImage, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgb<u8>) {
    let x1 = x1.min(img.width());
    let y1 = y1.min(img.height());
    for y in y0..y1 {
        for x in x0..x1 {
            img.put_pixel(x, y, color);
        }
    }
}

/// Outline drawn inward from the image edges.
pub fn draw_border(img: &mut RgbImage, thickness: u32, color: Rgb<u8>) {
    let (w, h) = img.dimensions();
    let t = thickness.min(w).min(h);
    fill_rect(img, 0, 0, w, t, color);
    fill_rect(img, 0, h - t, w, h, color);
    fill_rect(img, 0, 0, t, h, color);
    fill_rect(img, w - t, 0, w, h, color);
}

/// Python-style floor division for centering offsets.
#[inline(always)]
pub fn centered_origin(canvas: u32, extent: i32) -> i32 {
    (canvas as i32 - extent).div_euclid(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_endpoints() {
        let mut px = SADDLE_BROWN;
        blend(&mut px, WHITE, 0.0);
        assert_eq!(px, SADDLE_BROWN);
        blend(&mut px, WHITE, 1.0);
        assert_eq!(px, WHITE);
    }

    #[test]
    fn blend_at_clips_out_of_bounds() {
        let mut img = RgbImage::from_pixel(4, 4, SADDLE_BROWN);
        blend_at(&mut img, -1, 2, WHITE, 1.0);
        blend_at(&mut img, 2, 4, WHITE, 1.0);
        blend_at(&mut img, 3, 3, WHITE, 1.0);
        assert_eq!(*img.get_pixel(3, 3), WHITE);
        assert_eq!(img.pixels().filter(|p| **p == WHITE).count(), 1);
    }

    #[test]
    fn border_covers_edges_only() {
        let mut img = RgbImage::from_pixel(20, 10, SADDLE_BROWN);
        draw_border(&mut img, 3, DARK_BROWN);
        for x in 0..20 {
            for y in 0..3 {
                assert_eq!(*img.get_pixel(x, y), DARK_BROWN);
                assert_eq!(*img.get_pixel(x, 9 - y), DARK_BROWN);
            }
        }
        assert_eq!(*img.get_pixel(3, 3), SADDLE_BROWN);
        assert_eq!(*img.get_pixel(16, 6), SADDLE_BROWN);
    }

    #[test]
    fn centered_origin_floors_negatives() {
        assert_eq!(centered_origin(1920, 100), 910);
        assert_eq!(centered_origin(1080, 81), 499);
        assert_eq!(centered_origin(100, 103), -2);
    }
}
