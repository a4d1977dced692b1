//! Drawing and pointer surface the viewer renders onto
//!
//! The viewer never talks to a terminal or window directly. Everything it
//! needs from the host is the [`Canvas`] trait: filled boxes, outlines, text,
//! text measurement, and the pointer. Coordinates are in host units (terminal
//! cells for the bundled backend) relative to the canvas origin.

/// A position on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Point {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// An axis-aligned box; `x + width` and `y + height` are exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn at(origin: Point, width: i32, height: i32) -> Self {
        Rect::new(origin.x, origin.y, width, height)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }

    /// Grow the box by `by` on every side
    pub fn expand(&self, by: i32) -> Self {
        Rect::new(
            self.x - by,
            self.y - by,
            self.width + by * 2,
            self.height + by * 2,
        )
    }
}

/// Semantic colours; the backend maps each onto its palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Lane,
    /// Lane whose value matches the lane hovered last frame
    LaneHighlighted,
    /// Grey level for value-intensity rows
    Intensity(u8),
    Border,
    Operation,
    OperationDivider,
    Picker,
    PickerOverlay,
    PickerPreview,
    PickerSelection,
    /// Translucent tint grouping lanes by the highlight granularity
    GranularityOverlay,
}

/// Where text sits relative to the anchor point passed to
/// [`Canvas::draw_text`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// Text starts at the anchor
    Left,
    /// Text is centred on the anchor
    Center,
    /// Text ends just before the anchor
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Primary,
    Secondary,
}

/// Rendering and input primitives supplied by the host
pub trait Canvas {
    fn draw_filled_box(&mut self, rect: Rect, paint: Paint);

    fn draw_box_outline(&mut self, rect: Rect, paint: Paint);

    fn draw_text(&mut self, anchor: Point, text: &str, align: TextAlign);

    /// Size of `text` as `(width, height)`
    fn measure_text(&self, text: &str) -> (i32, i32);

    fn pointer_position(&self) -> Point;

    /// Whether `button` went down since the previous frame
    fn pointer_button_pressed(&self, button: MouseButton) -> bool;
}
