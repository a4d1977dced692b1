//! Main TUI application state and frame loop

use super::canvas::{PointerState, TerminalCanvas};
use super::status::{render_status_bar, StatusRenderData};
use super::theme::DEFAULT_THEME;
use crate::demo::Catalogue;
use crate::viewer::{MouseButton, RenderFlags, Viewer};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton as TermButton, MouseEvent,
    MouseEventKind,
};
use log::{info, warn};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// The main application state
pub struct App {
    /// Scenarios the user can cycle through
    pub catalogue: Catalogue,

    /// Index of the scenario drawn each frame
    pub current: usize,

    /// The lane inspector, alive for the whole session
    pub viewer: Viewer,

    /// Mouse position and button edges since the last frame
    pub pointer: PointerState,

    /// Time budget for one frame
    pub frame_interval: Duration,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports a failure
    pub status_is_error: bool,
}

impl App {
    pub fn new(catalogue: Catalogue, current: usize, viewer: Viewer, fps: u32) -> Self {
        let mut app = App {
            catalogue,
            current: 0,
            viewer,
            pointer: PointerState::default(),
            frame_interval: Duration::from_secs(1) / fps.max(1),
            should_quit: false,
            status_message: String::new(),
            status_is_error: false,
        };
        app.select(current);
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            let frame_start = Instant::now();
            terminal.draw(|f| self.render(f))?;

            // Presses are consumed by the frame that just drew
            self.pointer.clear_presses();

            if self.should_quit {
                break;
            }

            // Drain input until the next frame is due
            let deadline = frame_start + self.frame_interval;
            loop {
                let timeout = deadline.saturating_duration_since(Instant::now());
                if !event::poll(timeout)? {
                    break;
                }
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key_event(key)
                    }
                    Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                    _ => {}
                }
                if self.should_quit {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Render the UI: push the current scenario's rows and flush them
    fn render(&mut self, frame: &mut Frame) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        let viewer_area = main_chunks[0];
        let status_area = main_chunks[1];

        let scenario = self.catalogue.get(self.current).copied();

        let title = scenario
            .map(|s| format!(" {}: {} ", s.name, s.description))
            .unwrap_or_else(|| " (no scenario) ".to_string());
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(
                Style::default()
                    .fg(DEFAULT_THEME.border_focused)
                    .add_modifier(Modifier::BOLD),
            );
        let inner = block.inner(viewer_area);
        frame.render_widget(block, viewer_area);
        frame
            .buffer_mut()
            .set_style(inner, Style::default().bg(DEFAULT_THEME.bg));

        if let Some(scenario) = scenario {
            if let Err(e) = scenario.run(&mut self.viewer) {
                warn!("scenario {} failed: {}", scenario.name, e);
                self.status_message = format!("{}: {}", scenario.name, e);
                self.status_is_error = true;
            }
        }

        let mut canvas = TerminalCanvas::new(frame.buffer_mut(), inner, self.pointer);
        self.viewer.flush(&mut canvas);

        let hex_default = self.viewer.default_flags().contains(RenderFlags::HEX);
        render_status_bar(
            frame,
            status_area,
            StatusRenderData {
                scenario_index: self.current,
                scenario_count: self.catalogue.len(),
                message: &self.status_message,
                hovered: self.viewer.hovered().map(|a| a.describe(hex_default)),
                granularity: self.viewer.granularity().to_string(),
                hex_default,
                intensity_default: self
                    .viewer
                    .default_flags()
                    .contains(RenderFlags::VALUE_INTENSITY),
                is_error: self.status_is_error,
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::Right => {
                let next = (self.current + 1) % self.catalogue.len().max(1);
                self.select(next);
            }
            KeyCode::BackTab | KeyCode::Left => {
                let count = self.catalogue.len().max(1);
                let prev = (self.current + count - 1) % count;
                self.select(prev);
            }
            KeyCode::Char('x') | KeyCode::Char('X') => {
                let on = self.toggle_default(RenderFlags::HEX);
                self.status_message = if on {
                    "Default base: hexadecimal".to_string()
                } else {
                    "Default base: decimal".to_string()
                };
                self.status_is_error = false;
            }
            KeyCode::Char('i') | KeyCode::Char('I') => {
                let on = self.toggle_default(RenderFlags::VALUE_INTENSITY);
                self.status_message = format!(
                    "Value intensity {}",
                    if on { "enabled" } else { "disabled" }
                );
                self.status_is_error = false;
            }
            KeyCode::Char('0') => {
                self.viewer.reset_highlight_granularity();
                self.status_message = "Grouping off".to_string();
                self.status_is_error = false;
            }
            _ => {}
        }
    }

    /// Track the pointer and latch clicks for the next frame
    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.pointer.move_to(mouse.column, mouse.row);
            }
            MouseEventKind::Down(TermButton::Left) => {
                self.pointer.move_to(mouse.column, mouse.row);
                self.pointer.press(MouseButton::Primary);
            }
            MouseEventKind::Down(TermButton::Right) => {
                self.pointer.move_to(mouse.column, mouse.row);
                self.pointer.press(MouseButton::Secondary);
            }
            _ => {}
        }
    }

    fn select(&mut self, index: usize) {
        self.current = index;
        if let Some(scenario) = self.catalogue.get(index) {
            info!("showing scenario {}", scenario.name);
            self.status_message = scenario.name.to_string();
        } else {
            self.status_message = "No scenarios".to_string();
        }
        self.status_is_error = false;
    }

    /// Flip one default flag, returning whether it is now set
    fn toggle_default(&mut self, flag: RenderFlags) -> bool {
        let mut flags = self.viewer.default_flags();
        let on = !flags.contains(flag);
        if on {
            flags.insert(flag);
        } else {
            flags.remove(flag);
        }
        self.viewer.set_default_flags(flags);
        on
    }
}
