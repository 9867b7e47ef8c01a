//! Shared numeric constants for the canvas crate.

use crate::color::Rgba;

// ── Surface ─────────────────────────────────────────────────────

/// Surface width in pixels.
pub const SURFACE_WIDTH: u32 = 1200;

/// Surface height in pixels.
pub const SURFACE_HEIGHT: u32 = 800;

/// Colour of a fresh or cleared surface.
pub const BACKGROUND: Rgba = Rgba::WHITE;

// ── Brush ───────────────────────────────────────────────────────

/// Initial brush colour.
pub const DEFAULT_BRUSH_COLOR: Rgba = Rgba::BLACK;

/// Initial brush width in pixels.
pub const DEFAULT_BRUSH_SIZE: f64 = 5.0;

/// Thinnest allowed stroke.
pub const MIN_BRUSH_SIZE: f64 = 1.0;

/// Thickest allowed stroke.
pub const MAX_BRUSH_SIZE: f64 = 32.0;

// ── History ─────────────────────────────────────────────────────

/// Maximum number of undo snapshots kept; the oldest is dropped beyond this.
pub const HISTORY_CAPACITY: usize = 32;
