//! Fixed-size RGBA pixel grid.
//!
//! Reads are public so hosts can paint or inspect the surface. Writes are
//! crate-private: only [`crate::engine::CanvasEngine`] mutates pixels, through
//! the rasterisers in [`crate::raster`].

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use crate::color::Rgba;
use crate::geom::Point;

/// A `width × height` grid of RGBA cells stored row-major, 4 bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Surface {
    /// Create a surface filled with `color`.
    #[must_use]
    pub fn new(width: u32, height: u32, color: Rgba) -> Self {
        let count = width as usize * height as usize;
        let mut pixels = Vec::with_capacity(count * 4);
        for _ in 0..count {
            pixels.extend_from_slice(&[color.r, color.g, color.b, color.a]);
        }
        Self { width, height, pixels }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// The colour at `(x, y)`, or `None` outside the surface.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        let i = self.index(x, y)?;
        Some(Rgba { r: self.pixels[i], g: self.pixels[i + 1], b: self.pixels[i + 2], a: self.pixels[i + 3] })
    }

    /// Count of pixels whose RGB channels equal `color`.
    #[cfg(test)]
    pub(crate) fn count_rgb(&self, color: Rgba) -> usize {
        self.pixels
            .chunks_exact(4)
            .filter(|px| px[0] == color.r && px[1] == color.g && px[2] == color.b)
            .count()
    }

    /// Integer cell containing `point`, or `None` when it lies outside.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn cell_at(&self, point: Point) -> Option<(u32, u32)> {
        if !point.is_finite() {
            return None;
        }
        let x = point.x.floor();
        let y = point.y.floor();
        if x < 0.0 || y < 0.0 || x >= f64::from(self.width) || y >= f64::from(self.height) {
            return None;
        }
        Some((x as u32, y as u32))
    }

    pub(crate) fn set(&mut self, x: u32, y: u32, color: Rgba) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i..i + 4].copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }

    /// Overwrite colour channels, keeping the cell's alpha.
    pub(crate) fn set_rgb(&mut self, x: u32, y: u32, color: Rgba) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i..i + 3].copy_from_slice(&[color.r, color.g, color.b]);
        }
    }

    pub(crate) fn fill_all(&mut self, color: Rgba) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }
}
