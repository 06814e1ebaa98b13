//! Status bar rendering with keybindings and position indicators

use crate::ui::theme::DEFAULT_THEME;
use crate::viewer::StepPosition;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Primary keys shown in the keybind strip
const KEYBINDS: &[(&str, &str)] = &[
    ("←/→", "step"),
    ("1-9", "jump"),
    ("↵/End", "last"),
    ("r", "reset"),
    ("⇥", "focus"),
    ("t", "tips"),
    ("v", "view"),
    ("⎵", "play"),
    ("q", "quit"),
];

/// Render the status bar at the bottom.
///
/// The first row carries the position, message and badge; the second row
/// lists the keybindings.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    position: StepPosition<'_>,
    is_playing: bool,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    // Split the top row into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(rows[0]);

    let step_text = format!(
        " Step {}/{} ",
        position.current_step + 1,
        position.total_steps
    );

    let left_spans = vec![
        Span::styled(
            step_text,
            Style::default()
                .bg(DEFAULT_THEME.primary)
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
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    let badge = if is_playing {
        Some((" ▶ PLAYING ", DEFAULT_THEME.secondary))
    } else if position.is_last() {
        Some((" END ", DEFAULT_THEME.error))
    } else if position.is_first() {
        Some((" START ", DEFAULT_THEME.success))
    } else {
        None
    };

    let badge_spans = badge
        .map(|(label, color)| {
            vec![Span::styled(
                label,
                Style::default()
                    .bg(color)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            )]
        })
        .unwrap_or_default();

    let right_paragraph = Paragraph::new(Line::from(badge_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);

    // Bottom row: keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let mut key_spans = Vec::with_capacity(KEYBINDS.len() * 4);
    for (i, (key, desc)) in KEYBINDS.iter().enumerate() {
        if i > 0 {
            key_spans.push(Span::styled("│", sep_style));
            key_spans.push(Span::styled(" ", desc_style));
        }
        key_spans.push(Span::styled(format!(" {} ", key), key_style));
        key_spans.push(Span::styled(format!(" {} ", desc), desc_style));
    }

    let keys_paragraph = Paragraph::new(Line::from(key_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Center);

    frame.render_widget(keys_paragraph, rows[1]);
}
