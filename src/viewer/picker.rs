//! Highlight granularity and the strip used to pick it
//!
//! The picker is a full-width strip with nested sub-boxes starting at its
//! left edge, one per supported width (1, 2, 4, ... 32 bytes). The smallest
//! sub-box containing the pointer is previewed; a primary click commits it,
//! a secondary click switches grouping off. It has its own hit test and never
//! touches the lane hover state.

use super::canvas::{Canvas, MouseButton, Paint, Point, TextAlign};
use super::layout::LayoutMetrics;
use super::render::fit_text;
use crate::register::LaneKind;
use log::debug;
use std::fmt;
use std::str::FromStr;

/// Widths offered by the picker, in bytes
pub const PICKER_WIDTHS: [usize; 6] = [1, 2, 4, 8, 16, 32];

/// Byte width used to group lanes visually; zero means off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Granularity(usize);

impl Granularity {
    pub const OFF: Granularity = Granularity(0);

    /// Accepts 0 or one of [`PICKER_WIDTHS`]
    pub fn from_bytes(bytes: usize) -> Option<Self> {
        if bytes == 0 || PICKER_WIDTHS.contains(&bytes) {
            Some(Granularity(bytes))
        } else {
            None
        }
    }

    pub fn from_lane_kind(kind: LaneKind) -> Self {
        Granularity(kind.byte_width())
    }

    pub fn bytes(self) -> usize {
        self.0
    }

    pub fn is_off(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_off() {
            f.write_str("off")
        } else {
            write!(f, "{} bytes", self.0)
        }
    }
}

impl FromStr for Granularity {
    type Err = String;

    /// Parse a byte count such as `4`; `0` means off
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes: usize = s
            .trim()
            .parse()
            .map_err(|e| format!("invalid byte count '{}': {}", s, e))?;
        Granularity::from_bytes(bytes)
            .ok_or_else(|| format!("{} bytes is not one of 0, 1, 2, 4, 8, 16, 32", bytes))
    }
}

/// Draw the picker row and apply any click to `granularity`
pub fn draw_picker<C: Canvas + ?Sized>(
    canvas: &mut C,
    metrics: &LayoutMetrics,
    origin: Point,
    granularity: &mut Granularity,
) {
    let strip = metrics.byte_box(origin, 32);
    canvas.draw_filled_box(strip, Paint::Picker);

    let pointer = canvas.pointer_position();
    let hovered = PICKER_WIDTHS
        .iter()
        .copied()
        .find(|&width| metrics.byte_box(origin, width).contains(pointer));

    if let Some(width) = hovered {
        let preview = metrics.byte_box(origin, width);
        canvas.draw_filled_box(preview, Paint::PickerPreview);
        canvas.draw_box_outline(preview, Paint::PickerPreview);

        let label = fit_text(canvas, &format!("Register {} bits", width * 8), strip.width);
        let (_, text_height) = canvas.measure_text(&label);
        canvas.draw_text(
            Point::new(
                strip.x + strip.width / 2,
                strip.y + (strip.height - text_height) / 2,
            ),
            &label,
            TextAlign::Center,
        );

        if canvas.pointer_button_pressed(MouseButton::Primary) {
            set(granularity, Granularity(width));
        }
        if canvas.pointer_button_pressed(MouseButton::Secondary) {
            set(granularity, Granularity::OFF);
        }
        return;
    }

    for &width in &PICKER_WIDTHS[..PICKER_WIDTHS.len() - 1] {
        canvas.draw_filled_box(metrics.byte_box(origin, width), Paint::PickerOverlay);
    }

    if !granularity.is_off() {
        canvas.draw_box_outline(
            metrics.byte_box(origin, granularity.bytes()),
            Paint::PickerSelection,
        );
    }
}

fn set(granularity: &mut Granularity, to: Granularity) {
    if *granularity != to {
        debug!("highlight granularity {} -> {}", granularity, to);
    }
    *granularity = to;
}
