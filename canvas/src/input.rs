//! Input model: tools, brush, and the permission-gated gesture state machine.
//!
//! [`InputAdapter`] turns raw pointer events into [`Op`]s. Every handler takes
//! the current drawing permission as a plain `bool` (the caller reads it from
//! the game state) and the engine to apply to. Operations are applied locally
//! first and then returned so the caller can broadcast them; the drawer never
//! waits on a round trip to see their own strokes.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::color::{ColorError, Rgba};
use crate::consts::{DEFAULT_BRUSH_COLOR, DEFAULT_BRUSH_SIZE};
use crate::engine::{CanvasEngine, Fill, Op, Stroke};
use crate::geom::Point;
use crate::raster::clamp_width;

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Freehand strokes (default).
    #[default]
    Pencil,
    /// Flood fill on click.
    Bucket,
}

/// Colour and width applied to new strokes and fills.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    pub color: Rgba,
    pub size: f64,
}

impl Default for Brush {
    fn default() -> Self {
        Self { color: DEFAULT_BRUSH_COLOR, size: DEFAULT_BRUSH_SIZE }
    }
}

/// Gesture being tracked between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A freehand stroke is in progress.
    Stroking {
        /// Position of the previous pointer event; the next segment starts here.
        last: Point,
        /// Number shared by every segment of this gesture.
        gesture: u64,
        /// Segments emitted so far.
        segments: usize,
    },
}

#[derive(Debug, Clone, Default)]
pub struct InputAdapter {
    tool: Tool,
    brush: Brush,
    state: InputState,
    last_gesture: u64,
}

impl InputAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Tool / brush ---

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    #[must_use]
    pub fn brush(&self) -> Brush {
        self.brush
    }

    /// Set the brush colour from a hex string.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError`] and leaves the brush unchanged for a bad colour.
    pub fn set_color(&mut self, hex: &str) -> Result<(), ColorError> {
        self.brush.color = Rgba::parse_hex(hex)?;
        Ok(())
    }

    /// Set the brush width, clamped to the supported range.
    pub fn set_size(&mut self, size: f64) {
        self.brush.size = clamp_width(size);
    }

    #[must_use]
    pub fn state(&self) -> InputState {
        self.state
    }

    #[must_use]
    pub fn is_gesture_active(&self) -> bool {
        matches!(self.state, InputState::Stroking { .. })
    }

    // --- Pointer events ---

    /// Begin a freehand gesture: snapshot for undo, remember the start point.
    pub fn on_pointer_down(&mut self, permitted: bool, canvas: &mut CanvasEngine, pt: Point) -> Vec<Op> {
        if !permitted || self.tool != Tool::Pencil || !pt.is_finite() {
            return Vec::new();
        }
        if self.is_gesture_active() {
            self.end_gesture(canvas);
        }
        canvas.begin_gesture();
        self.last_gesture += 1;
        self.state = InputState::Stroking { last: pt, gesture: self.last_gesture, segments: 0 };
        Vec::new()
    }

    /// Extend the active gesture by one segment ending at `pt`.
    pub fn on_pointer_move(&mut self, permitted: bool, canvas: &mut CanvasEngine, pt: Point) -> Vec<Op> {
        let InputState::Stroking { last, gesture, segments } = self.state else {
            return Vec::new();
        };
        if !permitted || self.tool != Tool::Pencil || !pt.is_finite() {
            return Vec::new();
        }
        let op = Op::Stroke(Stroke {
            from: last,
            to: pt,
            color: self.brush.color,
            width: self.brush.size,
            gesture: Some(gesture),
        });
        canvas.apply_local(&op);
        self.state = InputState::Stroking { last: pt, gesture, segments: segments + 1 };
        vec![op]
    }

    /// End the active gesture. Emits nothing.
    pub fn on_pointer_up(&mut self, canvas: &mut CanvasEngine) -> Vec<Op> {
        self.end_gesture(canvas);
        Vec::new()
    }

    /// Leaving the surface ends the gesture exactly like pointer-up.
    pub fn on_pointer_leave(&mut self, canvas: &mut CanvasEngine) -> Vec<Op> {
        self.on_pointer_up(canvas)
    }

    /// Click with the bucket tool: fill locally, then emit. A gesture still
    /// open from before the tool switch is ended first.
    pub fn on_click(&mut self, permitted: bool, canvas: &mut CanvasEngine, pt: Point) -> Vec<Op> {
        if !permitted || self.tool != Tool::Bucket || !pt.is_finite() {
            return Vec::new();
        }
        self.end_gesture(canvas);
        let fill = Fill { seed: pt, color: self.brush.color };
        if canvas.fill(&fill) == 0 {
            return Vec::new();
        }
        vec![Op::Fill(fill)]
    }

    // --- Explicit controls ---

    /// Undo locally, then emit. Nothing is emitted when there was nothing to undo.
    pub fn undo(&mut self, permitted: bool, canvas: &mut CanvasEngine) -> Vec<Op> {
        if !permitted {
            return Vec::new();
        }
        self.end_gesture(canvas);
        if canvas.undo() { vec![Op::Undo] } else { Vec::new() }
    }

    /// Clear locally, then emit.
    pub fn clear(&mut self, permitted: bool, canvas: &mut CanvasEngine) -> Vec<Op> {
        if !permitted {
            return Vec::new();
        }
        self.state = InputState::Idle;
        canvas.clear();
        vec![Op::Clear]
    }

    /// Abandon any gesture, e.g. when drawing permission is revoked.
    pub fn cancel(&mut self, canvas: &mut CanvasEngine) {
        self.end_gesture(canvas);
    }

    fn end_gesture(&mut self, canvas: &mut CanvasEngine) {
        if let InputState::Stroking { segments: 0, .. } = self.state {
            canvas.retract_gesture();
        }
        self.state = InputState::Idle;
    }
}
