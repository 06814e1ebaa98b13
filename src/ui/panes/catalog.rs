//! Pattern list pane
//!
//! Lists every catalog entry in display order. The highlighted row follows
//! the arrow keys while the pane is focused; the row of the pattern being
//! viewed carries a marker.

use crate::catalog::PatternCatalog;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the catalog pane
pub fn render_catalog_pane(
    frame: &mut Frame,
    area: Rect,
    catalog: &PatternCatalog,
    active_id: &str,
    highlighted: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Patterns ")
        .borders(Borders::ALL)
        .border_style(border_style);

    // Two rows per entry: name line and summary line
    let visible_entries = (area.height.saturating_sub(2) as usize / 2).max(1);
    if highlighted < *scroll_offset {
        *scroll_offset = highlighted;
    } else if highlighted >= *scroll_offset + visible_entries {
        *scroll_offset = highlighted + 1 - visible_entries;
    }
    let total = catalog.len();
    if total > visible_entries {
        *scroll_offset = (*scroll_offset).min(total - visible_entries);
    } else {
        *scroll_offset = 0;
    }

    let items: Vec<ListItem> = catalog
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_entries)
        .map(|(idx, record)| {
            let is_active = record.id() == active_id;
            let marker = if is_active { "▸ " } else { "  " };
            let name_style = if is_active {
                Style::default()
                    .fg(DEFAULT_THEME.heading)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };

            let name_line = Line::from(vec![
                Span::styled(marker, Style::default().fg(DEFAULT_THEME.secondary)),
                Span::styled(record.name(), name_style),
                Span::raw(" "),
                Span::styled(
                    format!("[{}]", record.difficulty()),
                    Style::default().fg(DEFAULT_THEME.difficulty(record.difficulty())),
                ),
            ]);
            let summary_line = Line::from(Span::styled(
                format!("  {}", record.summary()),
                Style::default().fg(DEFAULT_THEME.comment),
            ));

            let item = ListItem::new(vec![name_line, summary_line]);
            if is_focused && idx == highlighted {
                item.style(Style::default().bg(DEFAULT_THEME.current_line_bg))
            } else {
                item
            }
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
