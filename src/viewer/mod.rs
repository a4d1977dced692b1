//! Lane inspector: row stack, hover tracking and layout
//!
//! The [`Viewer`] is an immediate-mode display list. Each frame the host
//! pushes rows (registers, operation bars, spacers, the granularity picker),
//! then calls [`Viewer::flush`] to lay them out and draw them onto a
//! [`Canvas`]. Flushing also closes the frame:
//!
//! - the row stack is emptied
//! - flags set with the mode calls (`set_hex_mode`, ...) are cleared
//! - the lane hovered this frame becomes the lane highlighted next frame
//!
//! Default flags and the highlight granularity survive across frames.
//!
//! # Modules
//!
//! - [`canvas`]: the drawing/input trait implemented by the host
//! - [`layout`]: byte-cell geometry
//! - [`flags`]: per-row [`RenderFlags`]
//! - [`oracle`]: [`LaneAddress`] and the cross-row "same value" test
//! - [`hover`]: the double-buffered [`HoverState`]
//! - [`rows`]: [`DisplayRow`] and the [`RowStack`]
//! - [`picker`]: [`Granularity`] and its picker strip
//! - [`render`]: drawing for register and operation rows

pub mod canvas;
pub mod flags;
pub mod hover;
pub mod layout;
pub mod oracle;
pub mod picker;
pub mod render;
pub mod rows;

pub use canvas::{Canvas, MouseButton, Paint, Point, Rect, TextAlign};
pub use flags::RenderFlags;
pub use hover::HoverState;
pub use layout::LayoutMetrics;
pub use oracle::{same, LaneAddress};
pub use picker::{Granularity, PICKER_WIDTHS};
pub use rows::{DisplayRow, RowStack};

use crate::register::{LaneKind, RegisterSize, RegisterValue};
use log::trace;

/// Persistent viewer state owned by the host's frame loop
#[derive(Debug)]
pub struct Viewer {
    metrics: LayoutMetrics,
    default_flags: RenderFlags,
    pushed_flags: RenderFlags,
    hover: HoverState,
    granularity: Granularity,
    rows: RowStack,
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewer {
    /// Create a viewer with nothing hovered, grouping off and an empty stack
    pub fn new() -> Self {
        Self::with_metrics(LayoutMetrics::default())
    }

    pub fn with_metrics(metrics: LayoutMetrics) -> Self {
        Viewer {
            metrics,
            default_flags: RenderFlags::empty(),
            pushed_flags: RenderFlags::empty(),
            hover: HoverState::new(),
            granularity: Granularity::OFF,
            rows: RowStack::new(),
        }
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    // ------------------------------------------------------------------
    // Push

    /// Append a register row
    pub fn push_register(&mut self, value: RegisterValue) {
        let flags = self.effective_flags();
        self.rows.push(DisplayRow::Register { value, flags });
    }

    /// Append a register row with an outline around it
    pub fn push_register_bold(&mut self, value: RegisterValue) {
        let flags = self.effective_flags() | RenderFlags::BORDERED;
        self.rows.push(DisplayRow::Register { value, flags });
    }

    /// Append a 256-bit operation bar divided at `kind`'s lane width
    pub fn push_operation(&mut self, label: &str, kind: LaneKind) {
        self.push_operation_sized(label, kind, RegisterSize::Bits256);
    }

    pub fn push_operation_sized(&mut self, label: &str, kind: LaneKind, size: RegisterSize) {
        self.rows.push(DisplayRow::Operation {
            label: label.to_string(),
            lane_bytes: kind.byte_width(),
            size,
        });
    }

    /// Reserve one row of empty space
    pub fn push_spacer(&mut self) {
        self.rows.push(DisplayRow::Spacer);
    }

    /// Append the granularity picker; rows pushed after it this frame show
    /// the granularity overlay
    pub fn push_granularity_picker(&mut self) {
        self.pushed_flags.insert(RenderFlags::GRANULARITY_OVERLAY);
        self.rows.push(DisplayRow::GranularityPicker);
    }

    // ------------------------------------------------------------------
    // Flags for the rest of this frame

    pub fn set_hex_mode(&mut self) {
        self.pushed_flags.insert(RenderFlags::HEX);
    }

    pub fn set_decimal_mode(&mut self) {
        self.pushed_flags.remove(RenderFlags::HEX);
    }

    pub fn enable_granularity_overlay(&mut self) {
        self.pushed_flags.insert(RenderFlags::GRANULARITY_OVERLAY);
    }

    pub fn disable_granularity_overlay(&mut self) {
        self.pushed_flags.remove(RenderFlags::GRANULARITY_OVERLAY);
    }

    pub fn enable_value_intensity(&mut self) {
        self.pushed_flags.insert(RenderFlags::VALUE_INTENSITY);
    }

    pub fn disable_value_intensity(&mut self) {
        self.pushed_flags.remove(RenderFlags::VALUE_INTENSITY);
    }

    /// Drop every flag set since the last flush
    pub fn reset_flags(&mut self) {
        self.pushed_flags = RenderFlags::empty();
    }

    pub fn pushed_flags(&self) -> RenderFlags {
        self.pushed_flags
    }

    // ------------------------------------------------------------------
    // Sticky state

    /// Flags applied to every row of every frame
    pub fn set_default_flags(&mut self, flags: RenderFlags) {
        self.default_flags = flags;
    }

    pub fn default_flags(&self) -> RenderFlags {
        self.default_flags
    }

    /// Group lanes by `kind`'s width and turn the overlay on for the rest of
    /// this frame
    pub fn set_highlight_granularity(&mut self, kind: LaneKind) {
        self.granularity = Granularity::from_lane_kind(kind);
        self.enable_granularity_overlay();
    }

    /// Set the granularity without touching this frame's flags
    pub fn set_granularity(&mut self, granularity: Granularity) {
        self.granularity = granularity;
    }

    pub fn reset_highlight_granularity(&mut self) {
        self.granularity = Granularity::OFF;
        self.disable_granularity_overlay();
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Lane hovered during the previous frame, the one driving highlights
    pub fn hovered(&self) -> Option<&LaneAddress> {
        self.hover.last()
    }

    /// Rows pushed since the last flush
    pub fn rows(&self) -> &[DisplayRow] {
        self.rows.rows()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    // ------------------------------------------------------------------
    // Flush

    /// Lay out and draw every pushed row, then start a new frame
    pub fn flush<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        for (index, row) in self.rows.rows().iter().enumerate() {
            let origin = self.metrics.row_origin(index);
            match row {
                DisplayRow::Register { value, flags } => render::draw_register_row(
                    canvas,
                    &self.metrics,
                    origin,
                    value,
                    *flags,
                    self.granularity,
                    &mut self.hover,
                ),
                DisplayRow::Operation {
                    label,
                    lane_bytes,
                    size,
                } => render::draw_operation_row(
                    canvas,
                    &self.metrics,
                    origin,
                    label,
                    *lane_bytes,
                    *size,
                ),
                DisplayRow::Spacer => {}
                DisplayRow::GranularityPicker => {
                    picker::draw_picker(canvas, &self.metrics, origin, &mut self.granularity)
                }
            }
        }

        trace!(
            "flushed {} rows, hovering {:?}",
            self.rows.len(),
            self.hover.current().map(|a| a.describe(false))
        );

        self.rows.clear();
        self.pushed_flags = RenderFlags::empty();
        self.hover.advance();
    }

    fn effective_flags(&self) -> RenderFlags {
        self.default_flags | self.pushed_flags
    }
}
