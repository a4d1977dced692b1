//! Terminal implementation of the viewer's drawing surface
//!
//! Draws straight into a ratatui [`Buffer`], one canvas unit per terminal
//! cell, clipped to the viewer's area. Translucent paints are blended into
//! the background already in the cell instead of replacing it, so overlays
//! keep the lane text underneath readable.

use super::theme::{Swatch, DEFAULT_THEME};
use crate::viewer::{Canvas, MouseButton, Paint, Point, Rect, TextAlign};
use ratatui::{
    buffer::{Buffer, Cell},
    layout::{Position, Rect as Area},
    style::Color,
    text::Span,
};

/// Mouse state sampled by the event loop between frames
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerState {
    /// Absolute terminal position, `None` until the mouse first moves
    pub position: Option<(u16, u16)>,
    pub primary_pressed: bool,
    pub secondary_pressed: bool,
}

impl PointerState {
    pub fn move_to(&mut self, column: u16, row: u16) {
        self.position = Some((column, row));
    }

    /// Latch a button press until the next frame has been drawn
    pub fn press(&mut self, button: MouseButton) {
        match button {
            MouseButton::Primary => self.primary_pressed = true,
            MouseButton::Secondary => self.secondary_pressed = true,
        }
    }

    pub fn clear_presses(&mut self) {
        self.primary_pressed = false;
        self.secondary_pressed = false;
    }
}

pub struct TerminalCanvas<'a> {
    buf: &'a mut Buffer,
    area: Area,
    pointer: PointerState,
}

impl<'a> TerminalCanvas<'a> {
    pub fn new(buf: &'a mut Buffer, area: Area, pointer: PointerState) -> Self {
        TerminalCanvas { buf, area, pointer }
    }

    /// Cell at canvas coordinates, if it lies inside the area
    fn cell_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        if x < 0 || y < 0 || x >= self.area.width as i32 || y >= self.area.height as i32 {
            return None;
        }
        let position = Position::new(self.area.x + x as u16, self.area.y + y as u16);
        self.buf.cell_mut(position)
    }

    fn put_symbol(&mut self, x: i32, y: i32, symbol: &str, fg: Color) {
        if let Some(cell) = self.cell_mut(x, y) {
            cell.set_symbol(symbol);
            cell.set_fg(fg);
        }
    }
}

impl Canvas for TerminalCanvas<'_> {
    fn draw_filled_box(&mut self, rect: Rect, paint: Paint) {
        let swatch = DEFAULT_THEME.swatch(paint);
        for y in rect.y..rect.y + rect.height {
            for x in rect.x..rect.x + rect.width {
                if let Some(cell) = self.cell_mut(x, y) {
                    if swatch.alpha == 255 {
                        cell.set_char(' ');
                        cell.set_bg(swatch.color);
                    } else {
                        let bg = blend(cell.bg, swatch);
                        cell.set_bg(bg);
                    }
                }
            }
        }
    }

    fn draw_box_outline(&mut self, rect: Rect, paint: Paint) {
        if rect.width <= 0 || rect.height <= 0 {
            return;
        }
        let fg = DEFAULT_THEME.swatch(paint).color;
        let right = rect.x + rect.width - 1;
        let bottom = rect.y + rect.height - 1;

        if rect.height == 1 {
            for x in rect.x..=right {
                self.put_symbol(x, rect.y, "─", fg);
            }
            return;
        }
        if rect.width == 1 {
            for y in rect.y..=bottom {
                self.put_symbol(rect.x, y, "│", fg);
            }
            return;
        }

        for x in rect.x + 1..right {
            self.put_symbol(x, rect.y, "─", fg);
            self.put_symbol(x, bottom, "─", fg);
        }
        for y in rect.y + 1..bottom {
            self.put_symbol(rect.x, y, "│", fg);
            self.put_symbol(right, y, "│", fg);
        }
        self.put_symbol(rect.x, rect.y, "┌", fg);
        self.put_symbol(right, rect.y, "┐", fg);
        self.put_symbol(rect.x, bottom, "└", fg);
        self.put_symbol(right, bottom, "┘", fg);
    }

    fn draw_text(&mut self, anchor: Point, text: &str, align: TextAlign) {
        let (width, _) = self.measure_text(text);
        let mut x = match align {
            TextAlign::Left => anchor.x,
            TextAlign::Center => anchor.x - width / 2,
            TextAlign::Right => anchor.x - width,
        };

        for ch in text.chars() {
            let mut symbol = [0u8; 4];
            let symbol = ch.encode_utf8(&mut symbol);
            let char_width = Span::raw(&*symbol).width() as i32;
            if let Some(cell) = self.cell_mut(x, anchor.y) {
                let fg = text_color_for(cell.bg);
                cell.set_symbol(symbol);
                cell.set_fg(fg);
            }
            x += char_width.max(1);
        }
    }

    fn measure_text(&self, text: &str) -> (i32, i32) {
        (Span::raw(text).width() as i32, 1)
    }

    fn pointer_position(&self) -> Point {
        // Pointer outside the viewer area must not hit rows clipped at its edge
        match self.pointer.position {
            Some((column, row)) if self.area.contains(Position::new(column, row)) => Point::new(
                column as i32 - self.area.x as i32,
                row as i32 - self.area.y as i32,
            ),
            _ => Point::new(-1, -1),
        }
    }

    fn pointer_button_pressed(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Primary => self.pointer.primary_pressed,
            MouseButton::Secondary => self.pointer.secondary_pressed,
        }
    }
}

/// Lay `swatch` over `under` at the swatch's opacity
fn blend(under: Color, swatch: Swatch) -> Color {
    match (under, swatch.color) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => {
            let a = swatch.alpha as u16;
            let mix = |lo: u8, hi: u8| ((lo as u16 * (255 - a) + hi as u16 * a) / 255) as u8;
            Color::Rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
        }
        _ if swatch.alpha >= 128 => swatch.color,
        _ => under,
    }
}

/// Dark text on light backgrounds, light text on dark ones
fn text_color_for(bg: Color) -> Color {
    match bg {
        Color::Rgb(r, g, b) => {
            let luma = (r as u32 * 299 + g as u32 * 587 + b as u32 * 114) / 1000;
            if luma >= 128 {
                DEFAULT_THEME.text_dark
            } else {
                DEFAULT_THEME.text_light
            }
        }
        _ => DEFAULT_THEME.fg,
    }
}
