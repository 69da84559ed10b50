//! RGBA image buffer shared by the compositing pass.

use crate::color::Color;

/// A 2D RGBA image, row-major, origin top-left.
#[derive(Debug, Clone)]
pub struct Image {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (RGBA, row-major).
    pub data: Vec<Color>,
}

impl Image {
    /// Create a new image filled with a color.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Create a new image filled with the base color, opaque black.
    pub fn new_base(width: u32, height: u32) -> Self {
        Self::new(width, height, Color::black())
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Color {
        let idx = y as usize * self.width as usize + x as usize;
        self.data[idx]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let idx = y as usize * self.width as usize + x as usize;
        self.data[idx] = color;
    }

    /// Set a pixel with toroidal wrapping; the canvas has no edges.
    #[inline]
    pub fn set_wrapped(&mut self, x: i64, y: i64, color: Color) {
        let wx = sane_mod(x, self.width as i64) as u32;
        let wy = sane_mod(y, self.height as i64) as u32;
        self.set(wx, wy, color);
    }

    /// Flatten to 8-bit RGBA, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() * 4);
        for color in &self.data {
            out.extend_from_slice(&color.to_rgba8());
        }
        out
    }
}

/// Modulo that stays in `[0, m)` for negative operands.
#[inline]
pub fn sane_mod(v: i64, m: i64) -> i64 {
    ((v % m) + m) % m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sane_mod_wraps_negatives() {
        assert_eq!(sane_mod(-1, 10), 9);
        assert_eq!(sane_mod(-10, 10), 0);
        assert_eq!(sane_mod(-11, 10), 9);
    }

    #[test]
    fn sane_mod_stays_in_range() {
        for v in -50..50 {
            for m in 1..8 {
                let r = sane_mod(v, m);
                assert!((0..m).contains(&r), "sane_mod({}, {}) = {}", v, m, r);
            }
        }
    }

    #[test]
    fn new_base_is_opaque_black() {
        let img = Image::new_base(4, 3);
        assert_eq!(img.data.len(), 12);
        assert_eq!(img.get(3, 2), Color::black());
        assert_eq!(img.get(0, 0).a, 1.0);
    }

    #[test]
    fn set_wrapped_goes_around_both_axes() {
        let mut img = Image::new_base(8, 8);
        let c = Color::rgb(1.0, 0.5, 0.0);
        img.set_wrapped(-1, 9, c);
        assert_eq!(img.get(7, 1), c);
    }

    #[test]
    fn rgba8_layout_is_row_major() {
        let mut img = Image::new_base(2, 1);
        img.set(1, 0, Color::white());
        assert_eq!(
            img.to_rgba8(),
            vec![0, 0, 0, 255, 255, 255, 255, 255]
        );
    }
}
