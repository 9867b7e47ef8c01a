//! Stroke and flood-fill rasterisation.
//!
//! Both rasterisers are pure functions of the surface and their inputs: no
//! anti-aliasing, no randomness, so every replica that applies the same
//! operations in the same order ends up with the same bytes.

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;

use crate::color::Rgba;
use crate::consts::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};
use crate::geom::{Point, distance_to_segment};
use crate::surface::Surface;

/// Clamp a requested stroke width into the supported range.
///
/// Non-finite widths fall back to the minimum.
#[must_use]
pub fn clamp_width(width: f64) -> f64 {
    if width.is_finite() { width.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE) } else { MIN_BRUSH_SIZE }
}

/// Paint a round-capped segment: every cell whose centre lies within
/// `width / 2` of the segment is set to `color`. Returns cells written.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn stroke_segment(surface: &mut Surface, from: Point, to: Point, color: Rgba, width: f64) -> usize {
    if !from.is_finite() || !to.is_finite() {
        return 0;
    }
    let radius = clamp_width(width) / 2.0;
    let max_x = f64::from(surface.width()) - 1.0;
    let max_y = f64::from(surface.height()) - 1.0;
    let x0 = (from.x.min(to.x) - radius).floor().max(0.0);
    let x1 = (from.x.max(to.x) + radius).ceil().min(max_x);
    let y0 = (from.y.min(to.y) - radius).floor().max(0.0);
    let y1 = (from.y.max(to.y) + radius).ceil().min(max_y);
    if x0 > x1 || y0 > y1 {
        return 0;
    }

    let mut written = 0;
    for y in (y0 as u32)..=(y1 as u32) {
        for x in (x0 as u32)..=(x1 as u32) {
            let centre = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            if distance_to_segment(centre, from, to) <= radius {
                surface.set(x, y, color);
                written += 1;
            }
        }
    }
    written
}

/// Whether filling at `seed` with `color` would change any cell.
pub(crate) fn fill_changes(surface: &Surface, seed: Point, color: Rgba) -> bool {
    surface
        .cell_at(seed)
        .and_then(|(x, y)| surface.pixel(x, y))
        .is_some_and(|target| !target.same_rgb(color))
}

/// 4-connected flood fill from `seed`: every cell reachable through
/// neighbours whose RGB equals the seed cell's RGB is set to `color`'s RGB.
/// Alpha is neither compared nor written.
///
/// Uses an explicit stack; the surface is large enough that recursion would
/// overflow. Returns cells written (zero when the seed already matches).
pub(crate) fn flood_fill(surface: &mut Surface, seed: Point, color: Rgba) -> usize {
    let Some((sx, sy)) = surface.cell_at(seed) else {
        return 0;
    };
    let Some(target) = surface.pixel(sx, sy) else {
        return 0;
    };
    if target.same_rgb(color) {
        return 0;
    }

    let (width, height) = (surface.width(), surface.height());
    let mut frontier = vec![(sx, sy)];
    let mut written = 0;
    while let Some((x, y)) = frontier.pop() {
        if !surface.pixel(x, y).is_some_and(|current| current.same_rgb(target)) {
            continue;
        }
        surface.set_rgb(x, y, color);
        written += 1;
        if x > 0 {
            frontier.push((x - 1, y));
        }
        if x + 1 < width {
            frontier.push((x + 1, y));
        }
        if y > 0 {
            frontier.push((x, y - 1));
        }
        if y + 1 < height {
            frontier.push((x, y + 1));
        }
    }
    written
}
