//! Canvas replication engine.
//!
//! [`CanvasEngine`] is the single owner of the raster surface and the undo
//! history. Nothing else mutates pixels: callers request one of four
//! operations ([`Op`]) through either the local path (the drawer's own input,
//! applied before it is sent) or the remote path (operations received from
//! the server, applied in arrival order).
//!
//! Both paths run the same rasterisers, so identical operation sequences give
//! byte-identical surfaces. They differ only in when an undo snapshot is
//! taken for a freehand gesture: locally at pointer-down via
//! [`CanvasEngine::begin_gesture`], remotely before the first segment of each
//! new remote gesture.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::color::Rgba;
use crate::consts::{BACKGROUND, HISTORY_CAPACITY, SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::geom::Point;
use crate::history::History;
use crate::raster;
use crate::surface::Surface;

/// One straight stroke segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub from: Point,
    pub to: Point,
    pub color: Rgba,
    pub width: f64,
    /// Drawer-local gesture number, when the sender provides one.
    pub gesture: Option<u64>,
}

/// A flood fill request.
#[derive(Debug, Clone, PartialEq)]
pub struct Fill {
    pub seed: Point,
    pub color: Rgba,
}

/// The four operations that may mutate the surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Stroke(Stroke),
    Fill(Fill),
    Undo,
    Clear,
}

/// Where the previous remote segment ended, used to spot gesture boundaries.
#[derive(Debug, Clone, Copy)]
struct RemoteTip {
    gesture: Option<u64>,
    to: Point,
}

pub struct CanvasEngine {
    surface: Surface,
    history: History,
    background: Rgba,
    remote_tip: Option<RemoteTip>,
    /// Snapshot evicted by the last `begin_gesture`; restored if that gesture is retracted.
    evicted: Option<Surface>,
}

impl Default for CanvasEngine {
    fn default() -> Self {
        Self::with_size(SURFACE_WIDTH, SURFACE_HEIGHT)
    }
}

impl CanvasEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine with a custom surface size and the default background.
    #[must_use]
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            surface: Surface::new(width, height, BACKGROUND),
            history: History::with_capacity(HISTORY_CAPACITY),
            background: BACKGROUND,
            remote_tip: None,
            evicted: None,
        }
    }

    // --- Queries ---

    /// Read-only view of the pixels.
    #[must_use]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Number of undo snapshots currently held.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.depth()
    }

    // --- Gesture snapshots ---

    /// Capture the undo snapshot for a freehand gesture that is about to start.
    pub fn begin_gesture(&mut self) {
        self.evicted = self.history.push(self.surface.clone());
    }

    /// Drop the snapshot taken by [`Self::begin_gesture`] for a gesture that
    /// ended without drawing anything. The surface is left untouched.
    pub fn retract_gesture(&mut self) {
        if self.history.pop().is_some() {
            if let Some(oldest) = self.evicted.take() {
                self.history.restore_oldest(oldest);
            }
        }
    }

    // --- Operations ---

    /// Rasterise one segment. Returns cells written.
    pub fn stroke(&mut self, stroke: &Stroke) -> usize {
        self.evicted = None;
        raster::stroke_segment(&mut self.surface, stroke.from, stroke.to, stroke.color, stroke.width)
    }

    /// Flood fill. A fill that changes anything pushes its own undo snapshot
    /// first, so one undo reverts exactly one fill. Returns cells written;
    /// zero means nothing was written and no snapshot was pushed.
    pub fn fill(&mut self, fill: &Fill) -> usize {
        self.remote_tip = None;
        self.evicted = None;
        if !raster::fill_changes(&self.surface, fill.seed, fill.color) {
            tracing::debug!(x = fill.seed.x, y = fill.seed.y, "fill is a no-op");
            return 0;
        }
        self.history.push(self.surface.clone());
        raster::flood_fill(&mut self.surface, fill.seed, fill.color)
    }

    /// Restore the most recent snapshot. Returns `false` when history is empty.
    pub fn undo(&mut self) -> bool {
        self.remote_tip = None;
        self.evicted = None;
        match self.history.pop() {
            Some(snapshot) => {
                self.surface = snapshot;
                true
            }
            None => {
                tracing::debug!("undo with empty history");
                false
            }
        }
    }

    /// Paint the whole surface with the background colour.
    ///
    /// Clear is not undoable: it pushes no snapshot and empties the history,
    /// so an undo after clear never brings back pre-clear content.
    pub fn clear(&mut self) {
        self.surface.fill_all(self.background);
        self.history.clear();
        self.remote_tip = None;
        self.evicted = None;
    }

    /// Start a fresh turn: background surface, empty history.
    pub fn reset(&mut self) {
        self.clear();
    }

    // --- Paths ---

    /// Apply an operation that originated on this client.
    ///
    /// Stroke snapshots are the caller's responsibility
    /// ([`Self::begin_gesture`] at pointer-down).
    pub fn apply_local(&mut self, op: &Op) {
        match op {
            Op::Stroke(stroke) => {
                self.stroke(stroke);
            }
            Op::Fill(fill) => {
                self.fill(fill);
            }
            Op::Undo => {
                self.undo();
            }
            Op::Clear => self.clear(),
        }
    }

    /// Apply an operation received from another participant.
    pub fn apply_remote(&mut self, op: &Op) {
        match op {
            Op::Stroke(stroke) => {
                if self.starts_remote_gesture(stroke) {
                    self.history.push(self.surface.clone());
                }
                self.stroke(stroke);
                self.remote_tip = Some(RemoteTip { gesture: stroke.gesture, to: stroke.to });
            }
            Op::Fill(_) | Op::Undo | Op::Clear => self.apply_local(op),
        }
    }

    /// A remote segment opens a new gesture when it carries a different
    /// gesture number than the last one, or, for senders that do not number
    /// gestures, when it does not continue from where the last one ended.
    fn starts_remote_gesture(&self, stroke: &Stroke) -> bool {
        match (self.remote_tip, stroke.gesture) {
            (None, _) => true,
            (Some(tip), Some(gesture)) => tip.gesture != Some(gesture),
            (Some(tip), None) => tip.gesture.is_some() || tip.to != stroke.from,
        }
    }
}
