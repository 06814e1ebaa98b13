//! Preview pane: draws whatever the active scene renderer holds

use crate::render::{FoldKind, SceneRenderer};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Rectangle},
        Block, Borders, Paragraph,
    },
    Frame,
};

/// Render the preview pane
pub fn render_preview_pane(frame: &mut Frame, area: Rect, scene: &SceneRenderer) {
    let title = match scene {
        SceneRenderer::Model(_) => " 3D Model ",
        SceneRenderer::Diagram(_) => " Crease Diagram ",
        SceneRenderer::Blank(_) => " Preview ",
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    match scene {
        SceneRenderer::Model(model) => {
            let segments = model.wireframe();
            let canvas = Canvas::default()
                .block(block)
                .marker(Marker::Braille)
                .x_bounds([-1.0, 1.0])
                .y_bounds([-1.0, 1.0])
                .paint(move |ctx| {
                    for segment in &segments {
                        ctx.draw(&CanvasLine::new(
                            segment.from[0],
                            segment.from[1],
                            segment.to[0],
                            segment.to[1],
                            DEFAULT_THEME.sheet,
                        ));
                    }
                });
            frame.render_widget(canvas, area);
        }
        SceneRenderer::Diagram(diagram) => {
            let creases = diagram.creases();
            let canvas = Canvas::default()
                .block(block)
                .marker(Marker::Braille)
                .x_bounds([-0.05, 1.05])
                .y_bounds([-0.05, 1.05])
                .paint(|ctx| {
                    ctx.draw(&Rectangle {
                        x: 0.0,
                        y: 0.0,
                        width: 1.0,
                        height: 1.0,
                        color: DEFAULT_THEME.sheet,
                    });
                    ctx.layer();
                    for crease in creases {
                        let color = match crease.kind {
                            FoldKind::Mountain => DEFAULT_THEME.mountain,
                            FoldKind::Valley => DEFAULT_THEME.valley,
                        };
                        ctx.draw(&CanvasLine::new(
                            crease.from[0],
                            crease.from[1],
                            crease.to[0],
                            crease.to[1],
                            color,
                        ));
                    }
                });
            frame.render_widget(canvas, area);
        }
        SceneRenderer::Blank(_) => {
            let paragraph = Paragraph::new(Line::from("(preview disabled)"))
                .block(block)
                .alignment(Alignment::Center)
                .style(Style::default().fg(DEFAULT_THEME.comment));
            frame.render_widget(paragraph, area);
        }
    }
}
