//! Drawing for register and operation rows

use super::canvas::{Canvas, Paint, Point, Rect, TextAlign};
use super::flags::RenderFlags;
use super::hover::HoverState;
use super::layout::LayoutMetrics;
use super::oracle::LaneAddress;
use super::picker::Granularity;
use crate::register::{RegisterSize, RegisterValue};

/// Shorten `text` with a trailing ellipsis until it fits in `max_width`
pub fn fit_text<C: Canvas + ?Sized>(canvas: &C, text: &str, max_width: i32) -> String {
    if canvas.measure_text(text).0 <= max_width {
        return text.to_string();
    }

    let mut chars: Vec<char> = text.chars().collect();
    while !chars.is_empty() {
        chars.pop();
        let candidate: String = chars.iter().chain(std::iter::once(&'…')).collect();
        if canvas.measure_text(&candidate).0 <= max_width {
            return candidate;
        }
    }
    String::new()
}

/// Draw one register row, most significant lane on the left.
///
/// Each lane box is checked against the previous frame's hover for
/// highlighting and against the pointer for this frame's hover.
pub fn draw_register_row<C: Canvas + ?Sized>(
    canvas: &mut C,
    metrics: &LayoutMetrics,
    origin: Point,
    value: &RegisterValue,
    flags: RenderFlags,
    granularity: Granularity,
    hover: &mut HoverState,
) {
    let register_bytes = value.size().bytes();
    let lane_bytes = value.kind().byte_width();
    let hex = flags.contains(RenderFlags::HEX);

    if flags.contains(RenderFlags::BORDERED) {
        let outline = metrics
            .byte_box(origin, register_bytes)
            .expand(metrics.border);
        canvas.draw_box_outline(outline, Paint::Border);
    }

    let pointer = canvas.pointer_position();
    let mut pos = origin;

    for index in value.display_order() {
        let address = LaneAddress::new(*value, index);
        let scalar = value.lane(index);
        let rect = metrics.byte_box(pos, lane_bytes);

        let paint = match scalar.intensity() {
            Some(level) if flags.contains(RenderFlags::VALUE_INTENSITY) => Paint::Intensity(level),
            _ if hover.is_linked(&address) => Paint::LaneHighlighted,
            _ => Paint::Lane,
        };
        canvas.draw_filled_box(rect, paint);

        let text = fit_text(
            canvas,
            &scalar.format(hex),
            rect.width - metrics.text_padding,
        );
        draw_text_right(canvas, rect, &text, metrics.text_padding);

        if rect.contains(pointer) {
            hover.record(address);
        }

        pos = pos.offset(metrics.stride(lane_bytes), 0);
    }

    if flags.contains(RenderFlags::GRANULARITY_OVERLAY) && !granularity.is_off() {
        draw_granularity_overlay(canvas, metrics, origin, value.size(), granularity);
    }
}

/// Tint every other group of `granularity` bytes, starting from the left edge
fn draw_granularity_overlay<C: Canvas + ?Sized>(
    canvas: &mut C,
    metrics: &LayoutMetrics,
    origin: Point,
    size: RegisterSize,
    granularity: Granularity,
) {
    // A group wider than the register covers the whole register
    let group_bytes = granularity.bytes().min(size.bytes());
    let groups = size.bytes() / group_bytes;

    let mut pos = origin;
    for group in 0..groups {
        if group % 2 == 0 {
            canvas.draw_filled_box(
                metrics.byte_box(pos, group_bytes),
                Paint::GranularityOverlay,
            );
        }
        pos = pos.offset(metrics.stride(group_bytes), 0);
    }
}

/// Draw an operation bar: a full-width box split at the operation's lane
/// width with the label centred on top
pub fn draw_operation_row<C: Canvas + ?Sized>(
    canvas: &mut C,
    metrics: &LayoutMetrics,
    origin: Point,
    label: &str,
    lane_bytes: usize,
    size: RegisterSize,
) {
    let bar = metrics.byte_box(origin, size.bytes());
    canvas.draw_filled_box(bar, Paint::Operation);

    let mut pos = origin;
    for _ in 0..size.bytes() / lane_bytes {
        canvas.draw_box_outline(metrics.byte_box(pos, lane_bytes), Paint::OperationDivider);
        pos = pos.offset(metrics.stride(lane_bytes), 0);
    }

    let text = fit_text(canvas, label, bar.width);
    let (_, text_height) = canvas.measure_text(&text);
    canvas.draw_text(
        Point::new(bar.x + bar.width / 2, bar.y + (bar.height - text_height) / 2),
        &text,
        TextAlign::Center,
    );
}

fn draw_text_right<C: Canvas + ?Sized>(canvas: &mut C, rect: Rect, text: &str, padding: i32) {
    let (_, text_height) = canvas.measure_text(text);
    canvas.draw_text(
        Point::new(
            rect.x + rect.width - padding,
            rect.y + (rect.height - text_height) / 2,
        ),
        text,
        TextAlign::Right,
    );
}
