#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};

fn canvas() -> CanvasEngine {
    CanvasEngine::with_size(64, 48)
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// Tool / brush
// =============================================================

#[test]
fn tool_default_is_pencil() {
    assert_eq!(Tool::default(), Tool::Pencil);
    assert_eq!(InputAdapter::new().tool(), Tool::Pencil);
}

#[test]
fn brush_defaults_to_black_size_five() {
    let brush = InputAdapter::new().brush();
    assert_eq!(brush.color, Rgba::BLACK);
    assert_eq!(brush.size, 5.0);
}

#[test]
fn set_color_rejects_bad_hex_and_keeps_previous() {
    let mut input = InputAdapter::new();
    input.set_color("#ff0000").expect("valid colour");
    assert!(input.set_color("red").is_err());
    assert_eq!(input.brush().color, Rgba::opaque(0xff, 0, 0));
}

#[test]
fn set_size_is_clamped() {
    let mut input = InputAdapter::new();
    input.set_size(0.0);
    assert_eq!(input.brush().size, MIN_BRUSH_SIZE);
    input.set_size(99.0);
    assert_eq!(input.brush().size, MAX_BRUSH_SIZE);
}

// =============================================================
// Gestures
// =============================================================

#[test]
fn one_gesture_pushes_one_snapshot_and_emits_segments_in_order() {
    let mut engine = canvas();
    let mut input = InputAdapter::new();

    assert!(input.on_pointer_down(true, &mut engine, pt(5.0, 5.0)).is_empty());
    assert_eq!(engine.history_len(), 1);
    let first = input.on_pointer_move(true, &mut engine, pt(10.0, 5.0));
    let second = input.on_pointer_move(true, &mut engine, pt(15.0, 8.0));
    assert!(input.on_pointer_up(&mut engine).is_empty());

    assert_eq!(engine.history_len(), 1);
    let ops: Vec<Op> = first.into_iter().chain(second).collect();
    assert_eq!(ops.len(), 2);
    let Op::Stroke(a) = &ops[0] else { panic!("expected stroke") };
    let Op::Stroke(b) = &ops[1] else { panic!("expected stroke") };
    assert_eq!((a.from, a.to), (pt(5.0, 5.0), pt(10.0, 5.0)));
    assert_eq!((b.from, b.to), (pt(10.0, 5.0), pt(15.0, 8.0)));
    assert_eq!(a.gesture, b.gesture);
    assert_eq!(input.state(), InputState::Idle);
}

#[test]
fn segments_are_applied_locally_before_emission() {
    let mut engine = canvas();
    let mut input = InputAdapter::new();
    input.on_pointer_down(true, &mut engine, pt(5.0, 5.0));
    input.on_pointer_move(true, &mut engine, pt(30.0, 5.0));
    assert_eq!(engine.surface().pixel(20, 5), Some(Rgba::BLACK));
}

#[test]
fn each_gesture_gets_a_new_number() {
    let mut engine = canvas();
    let mut input = InputAdapter::new();
    let mut gestures = Vec::new();
    for _ in 0..2 {
        input.on_pointer_down(true, &mut engine, pt(1.0, 1.0));
        for op in input.on_pointer_move(true, &mut engine, pt(9.0, 9.0)) {
            if let Op::Stroke(stroke) = op {
                gestures.push(stroke.gesture);
            }
        }
        input.on_pointer_up(&mut engine);
    }
    assert_eq!(gestures.len(), 2);
    assert_ne!(gestures[0], gestures[1]);
}

#[test]
fn pointer_down_without_permission_does_nothing() {
    let mut engine = canvas();
    let mut input = InputAdapter::new();
    input.on_pointer_down(false, &mut engine, pt(5.0, 5.0));
    assert!(!input.is_gesture_active());
    assert!(input.on_pointer_move(false, &mut engine, pt(9.0, 9.0)).is_empty());
    assert_eq!(engine.history_len(), 0);
    assert_eq!(engine.surface(), canvas().surface());
}

#[test]
fn move_without_gesture_emits_nothing() {
    let mut engine = canvas();
    let mut input = InputAdapter::new();
    assert!(input.on_pointer_move(true, &mut engine, pt(9.0, 9.0)).is_empty());
}

#[test]
fn move_after_permission_revoked_emits_nothing() {
    let mut engine = canvas();
    let mut input = InputAdapter::new();
    input.on_pointer_down(true, &mut engine, pt(5.0, 5.0));
    assert!(input.on_pointer_move(false, &mut engine, pt(9.0, 9.0)).is_empty());
}

#[test]
fn pointer_leave_ends_gesture() {
    let mut engine = canvas();
    let mut input = InputAdapter::new();
    input.on_pointer_down(true, &mut engine, pt(5.0, 5.0));
    input.on_pointer_move(true, &mut engine, pt(9.0, 9.0));
    assert!(input.on_pointer_leave(&mut engine).is_empty());
    assert!(!input.is_gesture_active());
    assert!(input.on_pointer_move(true, &mut engine, pt(20.0, 20.0)).is_empty());
    assert_eq!(engine.history_len(), 1);
}

#[test]
fn empty_gesture_retracts_its_snapshot() {
    let mut engine = canvas();
    let mut input = InputAdapter::new();
    input.on_pointer_down(true, &mut engine, pt(5.0, 5.0));
    assert_eq!(engine.history_len(), 1);
    input.on_pointer_up(&mut engine);
    assert_eq!(engine.history_len(), 0);
}

#[test]
fn pointer_down_with_bucket_does_not_start_gesture() {
    let mut engine = canvas();
    let mut input = InputAdapter::new();
    input.set_tool(Tool::Bucket);
    input.on_pointer_down(true, &mut engine, pt(5.0, 5.0));
    assert!(!input.is_gesture_active());
    assert_eq!(engine.history_len(), 0);
}

// =============================================================
// Fill
// =============================================================

#[test]
fn bucket_click_fills_then_emits() {
    let mut engine = canvas();
    let mut input = InputAdapter::new();
    input.set_tool(Tool::Bucket);
    let ops = input.on_click(true, &mut engine, pt(3.0, 4.0));
    assert_eq!(ops, vec![Op::Fill(Fill { seed: pt(3.0, 4.0), color: Rgba::BLACK })]);
    assert_eq!(engine.surface().count_rgb(Rgba::BLACK), 64 * 48);
}

#[test]
fn bucket_click_ends_open_gesture_before_filling() {
    let mut engine = canvas();
    let mut input = InputAdapter::new();
    input.on_pointer_down(true, &mut engine, pt(3.0, 4.0));
    assert_eq!(engine.history_len(), 1);

    input.set_tool(Tool::Bucket);
    let ops = input.on_click(true, &mut engine, pt(30.0, 30.0));
    assert_eq!(ops.len(), 1);
    assert!(!input.is_gesture_active());
    assert_eq!(engine.history_len(), 1);

    assert!(input.on_pointer_up(&mut engine).is_empty());
    assert_eq!(engine.history_len(), 1);
}

#[test]
fn bucket_click_on_matching_color_emits_nothing() {
    let mut engine = canvas();
    let mut input = InputAdapter::new();
    input.set_tool(Tool::Bucket);
    input.set_color("#ffffff").expect("valid colour");
    assert!(input.on_click(true, &mut engine, pt(3.0, 4.0)).is_empty());
}

#[test]
fn click_with_pencil_or_without_permission_emits_nothing() {
    let mut engine = canvas();
    let mut input = InputAdapter::new();
    assert!(input.on_click(true, &mut engine, pt(3.0, 4.0)).is_empty());
    input.set_tool(Tool::Bucket);
    assert!(input.on_click(false, &mut engine, pt(3.0, 4.0)).is_empty());
    assert_eq!(engine.surface(), canvas().surface());
}

// =============================================================
// Undo / clear
// =============================================================

#[test]
fn undo_applies_locally_then_emits() {
    let mut engine = canvas();
    let mut input = InputAdapter::new();
    input.on_pointer_down(true, &mut engine, pt(5.0, 5.0));
    input.on_pointer_move(true, &mut engine, pt(30.0, 5.0));
    input.on_pointer_up(&mut engine);

    assert_eq!(input.undo(true, &mut engine), vec![Op::Undo]);
    assert_eq!(engine.surface(), canvas().surface());
}

#[test]
fn undo_with_empty_history_emits_nothing() {
    let mut engine = canvas();
    let mut input = InputAdapter::new();
    assert!(input.undo(true, &mut engine).is_empty());
}

#[test]
fn undo_and_clear_require_permission() {
    let mut engine = canvas();
    let mut input = InputAdapter::new();
    input.on_pointer_down(true, &mut engine, pt(5.0, 5.0));
    input.on_pointer_move(true, &mut engine, pt(30.0, 5.0));
    input.on_pointer_up(&mut engine);
    let drawn = engine.surface().clone();

    assert!(input.undo(false, &mut engine).is_empty());
    assert!(input.clear(false, &mut engine).is_empty());
    assert_eq!(engine.surface(), &drawn);
    assert_eq!(engine.history_len(), 1);
}

#[test]
fn clear_applies_locally_then_emits() {
    let mut engine = canvas();
    let mut input = InputAdapter::new();
    input.set_tool(Tool::Bucket);
    input.on_click(true, &mut engine, pt(3.0, 4.0));
    assert_eq!(input.clear(true, &mut engine), vec![Op::Clear]);
    assert_eq!(engine.surface(), canvas().surface());
    assert_eq!(engine.history_len(), 0);
}

#[test]
fn cancel_abandons_gesture() {
    let mut engine = canvas();
    let mut input = InputAdapter::new();
    input.on_pointer_down(true, &mut engine, pt(5.0, 5.0));
    input.cancel(&mut engine);
    assert!(!input.is_gesture_active());
    assert_eq!(engine.history_len(), 0);
}
