//! Row and lane geometry
//!
//! All sizes are in canvas units. A "cell" is the horizontal footprint of one
//! register byte; a lane of `n` bytes spans `n` cells plus the `n - 1` gaps
//! between them, so lane boxes of different widths line up byte for byte
//! across rows.

use super::canvas::{Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMetrics {
    /// Width of one register byte
    pub cell_width: i32,
    /// Gap between adjacent byte cells
    pub spacing: i32,
    /// Height of every row's boxes
    pub row_height: i32,
    /// Vertical gap between rows
    pub row_gap: i32,
    /// Thickness of the outline around bordered rows
    pub border: i32,
    /// Top-left corner of row 0
    pub origin: Point,
    /// Space kept between lane text and the right edge of its box
    pub text_padding: i32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        LayoutMetrics {
            cell_width: 4,
            spacing: 1,
            row_height: 3,
            row_gap: 1,
            border: 1,
            origin: Point::new(2, 1),
            text_padding: 0,
        }
    }
}

impl LayoutMetrics {
    /// Width of a box covering `byte_count` cells
    pub fn box_width(&self, byte_count: usize) -> i32 {
        (self.cell_width + self.spacing) * byte_count as i32 - self.spacing
    }

    /// Horizontal distance from one `byte_count`-wide box to the next
    pub fn stride(&self, byte_count: usize) -> i32 {
        (self.cell_width + self.spacing) * byte_count as i32
    }

    /// Top-left corner of the row at `index` in the row stack
    pub fn row_origin(&self, index: usize) -> Point {
        let dy = (self.row_height + self.row_gap) * index as i32;
        self.origin.offset(0, dy)
    }

    /// Box spanning `byte_count` cells starting at `origin`
    pub fn byte_box(&self, origin: Point, byte_count: usize) -> Rect {
        Rect::at(origin, self.box_width(byte_count), self.row_height)
    }
}
