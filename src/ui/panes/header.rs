//! Pattern header: name, difficulty badge and description

use crate::catalog::PatternRecord;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

pub fn render_header(frame: &mut Frame, area: Rect, record: &PatternRecord) {
    let difficulty = record.difficulty();

    let title = Line::from(vec![
        Span::styled(
            record.name(),
            Style::default()
                .fg(DEFAULT_THEME.heading)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" {} ", difficulty),
            Style::default()
                .bg(DEFAULT_THEME.difficulty(difficulty))
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let description = Line::from(Span::styled(
        record.description(),
        Style::default().fg(DEFAULT_THEME.comment),
    ));

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::horizontal(1));

    let paragraph = Paragraph::new(vec![title, description])
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
