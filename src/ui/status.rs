//! Status bar rendering with keybindings and state indicators

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub scenario_index: usize,
    pub scenario_count: usize,
    pub message: &'a str,
    /// Description of the lane hovered last frame
    pub hovered: Option<String>,
    pub granularity: String,
    pub hex_default: bool,
    pub intensity_default: bool,
    pub is_error: bool,
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Left side: scenario position, message and hovered lane
    let badge_bg = if data.is_error {
        DEFAULT_THEME.error
    } else {
        DEFAULT_THEME.primary
    };

    let mut left_spans = vec![
        Span::styled(
            format!(" {}/{} ", data.scenario_index + 1, data.scenario_count),
            Style::default()
                .bg(badge_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", data.message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(if data.is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.fg
                }),
        ),
    ];

    if let Some(hovered) = data.hovered {
        left_spans.push(Span::styled(
            "│",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ));
        left_spans.push(Span::styled(
            format!(" {} ", hovered),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.secondary),
        ));
    }

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = vec![
        Span::styled(" ⇥/←/→ ", key_style),
        Span::styled(" scenario ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" x ", key_style),
        Span::styled(" hex ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" i ", key_style),
        Span::styled(" intensity ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" 0 ", key_style),
        Span::styled(" ungroup ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
        Span::styled("│", sep_style),
    ];

    right_spans.push(Span::styled(
        format!(" group: {} ", data.granularity),
        Style::default()
            .bg(DEFAULT_THEME.success)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    ));

    right_spans.push(Span::styled(
        if data.hex_default { " HEX " } else { " DEC " },
        Style::default()
            .bg(DEFAULT_THEME.secondary)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    ));

    if data.intensity_default {
        right_spans.push(Span::styled(
            " ▒ INTENSITY ",
            Style::default()
                .bg(DEFAULT_THEME.border_focused)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
