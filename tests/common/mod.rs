// Shared helpers for the viewer integration tests

#![allow(dead_code)]

use simd_viewer::register::RegisterValue;
use simd_viewer::viewer::{Canvas, LayoutMetrics, MouseButton, Paint, Point, Rect, TextAlign};

/// One call made against the canvas
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Fill(Rect, Paint),
    Outline(Rect, Paint),
    Text(Point, String, TextAlign),
}

/// Canvas that records every draw call; one unit per character
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
    pub pointer: Point,
    pub primary: bool,
    pub secondary: bool,
}

impl RecordingCanvas {
    /// A canvas with the pointer parked outside every row
    pub fn new() -> Self {
        Self::pointing_at(Point::new(-100, -100))
    }

    pub fn pointing_at(pointer: Point) -> Self {
        RecordingCanvas {
            pointer,
            ..Default::default()
        }
    }

    pub fn fills(&self, paint: Paint) -> Vec<Rect> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Fill(rect, p) if *p == paint => Some(*rect),
                _ => None,
            })
            .collect()
    }

    pub fn outlines(&self, paint: Paint) -> Vec<Rect> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Outline(rect, p) if *p == paint => Some(*rect),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text(_, text, _) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn draw_filled_box(&mut self, rect: Rect, paint: Paint) {
        self.calls.push(DrawCall::Fill(rect, paint));
    }

    fn draw_box_outline(&mut self, rect: Rect, paint: Paint) {
        self.calls.push(DrawCall::Outline(rect, paint));
    }

    fn draw_text(&mut self, anchor: Point, text: &str, align: TextAlign) {
        let call = DrawCall::Text(anchor, text.to_string(), align);
        self.calls.push(call);
    }

    fn measure_text(&self, text: &str) -> (i32, i32) {
        (text.chars().count() as i32, 1)
    }

    fn pointer_position(&self) -> Point {
        self.pointer
    }

    fn pointer_button_pressed(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Primary => self.primary,
            MouseButton::Secondary => self.secondary,
        }
    }
}

/// Box of lane `index` of `value` drawn on row `row`
pub fn lane_rect(metrics: &LayoutMetrics, row: usize, value: &RegisterValue, index: usize) -> Rect {
    let lane_bytes = value.kind().byte_width();
    let column = value.lane_count() - 1 - index;
    let origin = metrics
        .row_origin(row)
        .offset(metrics.stride(lane_bytes) * column as i32, 0);
    metrics.byte_box(origin, lane_bytes)
}

/// A point inside `rect`
pub fn inside(rect: Rect) -> Point {
    Point::new(rect.x + rect.width / 2, rect.y + rect.height / 2)
}
