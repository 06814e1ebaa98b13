//! Instructions and tips pane
//!
//! Two tabs share this pane:
//!
//! - **Instructions**: the current step in full, followed by the numbered
//!   step list with the current step highlighted
//! - **Tips & Materials**: the materials line and the tip list
//!
//! The step list scrolls so the current step stays visible.

use crate::catalog::PatternRecord;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Tabs, Wrap},
    Frame,
};

/// Which tab the pane shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Instructions,
    TipsAndMaterials,
}

impl DetailTab {
    pub const TITLES: [&'static str; 2] = ["Instructions", "Tips & Materials"];

    pub fn toggle(self) -> Self {
        match self {
            DetailTab::Instructions => DetailTab::TipsAndMaterials,
            DetailTab::TipsAndMaterials => DetailTab::Instructions,
        }
    }

    pub fn index(self) -> usize {
        match self {
            DetailTab::Instructions => 0,
            DetailTab::TipsAndMaterials => 1,
        }
    }
}

/// Render the instructions / tips pane
pub fn render_steps_pane(
    frame: &mut Frame,
    area: Rect,
    record: &PatternRecord,
    current_step: usize,
    tab: DetailTab,
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
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let tabs = Tabs::new(DetailTab::TITLES.to_vec())
        .select(tab.index())
        .style(Style::default().fg(DEFAULT_THEME.comment))
        .highlight_style(
            Style::default()
                .fg(DEFAULT_THEME.heading)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, rows[0]);

    match tab {
        DetailTab::Instructions => {
            render_instructions(frame, rows[1], record, current_step, scroll_offset)
        }
        DetailTab::TipsAndMaterials => render_tips(frame, rows[1], record),
    }
}

fn render_instructions(
    frame: &mut Frame,
    area: Rect,
    record: &PatternRecord,
    current_step: usize,
    scroll_offset: &mut usize,
) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    let current = vec![
        Line::from(Span::styled(
            format!("Step {}", current_step + 1),
            Style::default()
                .fg(DEFAULT_THEME.heading)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            record.step(current_step).unwrap_or_default(),
            Style::default().fg(DEFAULT_THEME.fg),
        )),
    ];
    frame.render_widget(
        Paragraph::new(current).wrap(Wrap { trim: true }),
        sections[0],
    );

    let list_area = sections[1];
    let visible_height = list_area.height.max(1) as usize;
    let total = record.step_count();

    // Keep the current step inside the visible window
    if current_step < *scroll_offset {
        *scroll_offset = current_step;
    } else if current_step >= *scroll_offset + visible_height {
        *scroll_offset = current_step + 1 - visible_height;
    }
    if total > visible_height {
        *scroll_offset = (*scroll_offset).min(total - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let lines: Vec<Line> = record
        .steps()
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, step)| {
            let text = format!("{:>2}. {}", idx + 1, step);
            if idx == current_step {
                Line::from(Span::styled(
                    text,
                    Style::default()
                        .bg(DEFAULT_THEME.current_line_bg)
                        .fg(DEFAULT_THEME.primary)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    text,
                    Style::default().fg(DEFAULT_THEME.comment),
                ))
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), list_area);
}

fn render_tips(frame: &mut Frame, area: Rect, record: &PatternRecord) {
    let heading = Style::default()
        .fg(DEFAULT_THEME.heading)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled("Materials Needed", heading)),
        Line::from(Span::styled(
            record.materials(),
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        Line::from(""),
        Line::from(Span::styled("Helpful Tips", heading)),
    ];
    lines.extend(record.tips().iter().map(|tip| {
        Line::from(vec![
            Span::styled("• ", Style::default().fg(DEFAULT_THEME.primary)),
            Span::styled(tip.as_str(), Style::default().fg(DEFAULT_THEME.fg)),
        ])
    }));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}
