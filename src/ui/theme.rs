use crate::viewer::Paint;
use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub current_line_bg: Color,
    pub text_dark: Color,  // Lane text on light boxes
    pub text_light: Color, // Lane text on dark boxes
    pub lane: Color,
    pub lane_highlighted: Color,
    pub register_border: Color,
    pub operation: Color,
    pub operation_divider: Color,
    pub picker: Color,
    pub picker_overlay: Color,
    pub picker_preview: Color,
    pub picker_selection: Color,
    pub granularity_overlay: Color,
}

/// A colour plus how opaque it is when laid over what is already drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub color: Color,
    pub alpha: u8,
}

impl Theme {
    pub fn swatch(&self, paint: Paint) -> Swatch {
        let (color, alpha) = match paint {
            Paint::Lane => (self.lane, 255),
            Paint::LaneHighlighted => (self.lane_highlighted, 255),
            Paint::Intensity(level) => (Color::Rgb(level, level, level), 255),
            Paint::Border => (self.register_border, 255),
            Paint::Operation => (self.operation, 200),
            Paint::OperationDivider => (self.operation_divider, 255),
            Paint::Picker => (self.picker, 255),
            Paint::PickerOverlay => (self.picker_overlay, 50),
            Paint::PickerPreview => (self.picker_preview, 90),
            Paint::PickerSelection => (self.picker_selection, 255),
            Paint::GranularityOverlay => (self.granularity_overlay, 60),
        };
        Swatch { color, alpha }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(0x50, 0x50, 0x50),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    current_line_bg: Color::Rgb(50, 50, 70),   // Status bar background
    text_dark: Color::Rgb(0x10, 0x10, 0x10),
    text_light: Color::Rgb(0xf0, 0xf0, 0xf0),
    lane: Color::Rgb(220, 200, 200),
    lane_highlighted: Color::Rgb(255, 230, 200),
    register_border: Color::Rgb(0x20, 0x20, 0x20),
    operation: Color::Rgb(230, 41, 55),
    operation_divider: Color::Rgb(0x70, 0x30, 0x30),
    picker: Color::Rgb(255, 161, 0),
    picker_overlay: Color::Rgb(50, 50, 50),
    picker_preview: Color::Rgb(20, 20, 20),
    picker_selection: Color::Rgb(245, 245, 245),
    granularity_overlay: Color::Rgb(255, 203, 0),
};
