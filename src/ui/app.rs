//! Main TUI application state and logic

use crate::render::SceneRenderer;
use crate::ui::panes::{self, DetailTab};
use crate::viewer::{StepPosition, StepViewer};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Catalog,
    Steps,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Catalog => FocusedPane::Steps,
            FocusedPane::Steps => FocusedPane::Catalog,
        }
    }
}

/// The main application state
pub struct App<'c> {
    /// Step cursor over the selected pattern, driving the preview
    pub viewer: StepViewer<'c, SceneRenderer>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Tab shown in the instructions pane
    pub detail_tab: DetailTab,

    /// Highlighted row in the catalog list
    pub catalog_highlight: usize,

    /// Per-pane scroll offsets
    pub catalog_scroll: usize,
    pub steps_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,

    /// Time of the previous animation tick
    last_frame: Instant,
}

impl<'c> App<'c> {
    /// Create a new app around a viewer
    pub fn new(viewer: StepViewer<'c, SceneRenderer>) -> Self {
        let catalog_highlight = viewer
            .catalog()
            .position(viewer.record().id())
            .unwrap_or(0);

        App {
            viewer,
            focused_pane: FocusedPane::Steps,
            detail_tab: DetailTab::Instructions,
            catalog_highlight,
            catalog_scroll: 0,
            steps_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
            last_frame: Instant::now(),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            let now = Instant::now();
            let dt = now.duration_since(self.last_frame).as_secs_f64();
            self.last_frame = now;
            self.viewer.renderer_mut().tick(dt);

            self.advance_playback(now);

            // Use poll with timeout so the preview keeps animating
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Take one auto-play step once a second has passed since the last one.
    ///
    /// Playback stops on the tick after reaching the last step.
    pub fn advance_playback(&mut self, now: Instant) {
        if !self.is_playing
            || now.saturating_duration_since(self.last_play_time) < Duration::from_secs(1)
        {
            return;
        }
        if self.viewer.position().is_last() {
            self.is_playing = false;
            self.status_message = "Playback complete".to_string();
        } else {
            self.viewer.next();
            self.status_message = "Playing...".to_string();
        }
        self.last_play_time = now;
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Header, three columns, status bar with keybind strip
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(40),
                Constraint::Percentage(35),
            ])
            .split(main_chunks[1]);

        let record = self.viewer.record();
        let position = self.viewer.position();

        panes::render_header(frame, main_chunks[0], record);

        panes::render_catalog_pane(
            frame,
            columns[0],
            self.viewer.catalog(),
            record.id(),
            self.catalog_highlight,
            self.focused_pane == FocusedPane::Catalog,
            &mut self.catalog_scroll,
        );

        panes::render_preview_pane(frame, columns[1], self.viewer.renderer());

        panes::render_steps_pane(
            frame,
            columns[2],
            record,
            position.current_step,
            self.detail_tab,
            self.focused_pane == FocusedPane::Steps,
            &mut self.steps_scroll,
        );

        panes::render_status_bar(
            frame,
            main_chunks[2],
            &self.status_message,
            position,
            self.is_playing,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys jump straight to a step
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let target = i64::from(c as u8 - b'1');
                let position = self.viewer.jump_to(target);
                self.status_message = format!("Jumped to step {}", position.current_step + 1);
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Char('t') | KeyCode::Char('T') => {
                self.detail_tab = self.detail_tab.toggle();
            }
            KeyCode::Char('v') | KeyCode::Char('V') => {
                self.cycle_preview();
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up | KeyCode::Char('k') => match self.focused_pane {
                FocusedPane::Catalog => {
                    self.catalog_highlight = self.catalog_highlight.saturating_sub(1);
                }
                FocusedPane::Steps => {
                    self.is_playing = false;
                    self.step_backward();
                }
            },
            KeyCode::Down | KeyCode::Char('j') => match self.focused_pane {
                FocusedPane::Catalog => {
                    let last = self.viewer.catalog().len().saturating_sub(1);
                    self.catalog_highlight = (self.catalog_highlight + 1).min(last);
                }
                FocusedPane::Steps => {
                    self.is_playing = false;
                    self.step_forward();
                }
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(Duration::from_secs(1))
                            .unwrap_or(Instant::now());
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                match self.focused_pane {
                    FocusedPane::Catalog => self.select_highlighted(),
                    FocusedPane::Steps => {
                        self.viewer.jump_to_last();
                        self.status_message = "Jumped to last step".to_string();
                    }
                }
            }
            KeyCode::End => {
                self.is_playing = false;
                self.viewer.jump_to_last();
                self.status_message = "Jumped to last step".to_string();
            }
            KeyCode::Backspace | KeyCode::Home | KeyCode::Char('r') => {
                self.is_playing = false;
                self.viewer.reset();
                self.status_message = "Back to step 1".to_string();
            }
            _ => {}
        }
    }

    /// Open the pattern under the catalog highlight
    fn select_highlighted(&mut self) {
        let Some(record) = self.viewer.catalog().get_index(self.catalog_highlight) else {
            return;
        };
        self.viewer.select(record.id());
        self.steps_scroll = 0;
        self.detail_tab = DetailTab::Instructions;
        self.status_message = format!("Opened {}", record.name());
        self.focused_pane = FocusedPane::Steps;
    }

    /// Swap the preview renderer and show the current step on it
    fn cycle_preview(&mut self) {
        let kind = self.viewer.renderer().kind().cycle();
        *self.viewer.renderer_mut() = SceneRenderer::from_kind(kind);
        let step = i64::try_from(self.viewer.current_step()).unwrap_or(i64::MAX);
        self.viewer.jump_to(step);
        self.status_message = format!("Preview: {}", kind.label());
    }

    fn step_forward(&mut self) {
        let before = self.viewer.current_step();
        let position = self.viewer.next();
        self.status_message =
            describe_move(before, position, "Stepped forward", "Already at the last step");
    }

    fn step_backward(&mut self) {
        let before = self.viewer.current_step();
        let position = self.viewer.previous();
        self.status_message =
            describe_move(before, position, "Stepped backward", "Already at the first step");
    }
}

fn describe_move(before: usize, after: StepPosition<'_>, moved: &str, stuck: &str) -> String {
    if after.current_step == before {
        stuck.to_string()
    } else {
        moved.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PatternCatalog;
    use crate::render::RendererKind;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App<'_>, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn screen_text(app: &mut App<'_>) -> String {
        screen_text_sized(app, 140, 40)
    }

    fn screen_text_sized(app: &mut App<'_>, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        terminal.draw(|f| app.render(f)).expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app<'c>(catalog: &'c PatternCatalog, id: &str) -> App<'c> {
        let viewer = StepViewer::new(
            catalog,
            SceneRenderer::from_kind(RendererKind::Diagram),
            id,
        );
        App::new(viewer)
    }

    #[test]
    fn test_arrow_keys_move_and_saturate() {
        let catalog = PatternCatalog::builtin().unwrap();
        let mut app = app(&catalog, "waterbomb");

        press(&mut app, KeyCode::Left);
        assert_eq!(app.viewer.current_step(), 0);
        assert_eq!(app.status_message, "Already at the first step");

        press(&mut app, KeyCode::Right);
        assert_eq!(app.viewer.current_step(), 1);
        assert_eq!(app.status_message, "Stepped forward");
    }

    #[test]
    fn test_number_key_is_clamped() {
        let catalog = PatternCatalog::builtin().unwrap();
        let mut app = app(&catalog, "waterbomb");
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.viewer.current_step(), 5);
        assert_eq!(app.status_message, "Jumped to step 6");
    }

    #[test]
    fn test_catalog_enter_selects_and_resets() {
        let catalog = PatternCatalog::builtin().unwrap();
        let mut app = app(&catalog, "triangle-grid");
        press(&mut app, KeyCode::Char('5'));

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Catalog);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.viewer.record().id(), "waterbomb");
        assert_eq!(app.viewer.current_step(), 0);
        assert_eq!(app.focused_pane, FocusedPane::Steps);
    }

    #[test]
    fn test_catalog_highlight_stays_in_range() {
        let catalog = PatternCatalog::builtin().unwrap();
        let mut app = app(&catalog, "twist");
        assert_eq!(app.catalog_highlight, 5);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.catalog_highlight, 5);
    }

    #[test]
    fn test_reset_and_end_keys() {
        let catalog = PatternCatalog::builtin().unwrap();
        let mut app = app(&catalog, "triangle-grid");
        press(&mut app, KeyCode::End);
        assert_eq!(app.viewer.current_step(), 7);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.viewer.current_step(), 0);
    }

    #[test]
    fn test_render_shows_pattern_and_position() {
        let catalog = PatternCatalog::builtin().unwrap();
        let mut app = app(&catalog, "triangle-grid");
        press(&mut app, KeyCode::Right);

        let text = screen_text(&mut app);
        assert!(text.contains("Triangle Grid"));
        assert!(text.contains("Step 2/8"));
        assert!(text.contains("Crease Diagram"));
    }

    #[test]
    fn test_tips_tab_renders_materials() {
        let catalog = PatternCatalog::builtin().unwrap();
        let mut app = app(&catalog, "miura-ori");
        press(&mut app, KeyCode::Char('t'));
        let text = screen_text(&mut app);
        assert!(text.contains("Materials Needed"));
    }

    #[test]
    fn test_playback_stops_after_last_step() {
        let catalog = PatternCatalog::builtin().unwrap();
        let mut app = app(&catalog, "waterbomb");
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.viewer.current_step(), 4);

        press(&mut app, KeyCode::Char(' '));
        assert!(app.is_playing);

        let start = Instant::now();
        app.advance_playback(start + Duration::from_secs(1));
        assert_eq!(app.viewer.current_step(), 5);
        assert!(app.is_playing);
        assert_eq!(app.status_message, "Playing...");

        // Less than a second since the last step
        app.advance_playback(start + Duration::from_millis(1500));
        assert!(app.is_playing);

        app.advance_playback(start + Duration::from_secs(2));
        assert!(!app.is_playing);
        assert_eq!(app.viewer.current_step(), 5);
        assert_eq!(app.status_message, "Playback complete");
    }

    #[test]
    fn test_play_at_last_step_stops_on_next_tick() {
        let catalog = PatternCatalog::builtin().unwrap();
        let mut app = app(&catalog, "twist");
        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.is_playing);

        app.advance_playback(Instant::now() + Duration::from_secs(1));
        assert!(!app.is_playing);
        assert_eq!(app.viewer.current_step(), 5);
        assert_eq!(app.status_message, "Playback complete");
    }

    #[test]
    fn test_paused_playback_does_not_advance() {
        let catalog = PatternCatalog::builtin().unwrap();
        let mut app = app(&catalog, "twist");
        app.advance_playback(Instant::now() + Duration::from_secs(5));
        assert_eq!(app.viewer.current_step(), 0);
    }

    #[test]
    fn test_catalog_scroll_resets_when_terminal_grows() {
        let catalog = PatternCatalog::builtin().unwrap();
        let mut app = app(&catalog, "twist");

        screen_text_sized(&mut app, 140, 12);
        assert!(app.catalog_scroll > 0);

        let text = screen_text_sized(&mut app, 140, 60);
        assert_eq!(app.catalog_scroll, 0);
        assert!(text.contains("Triangle Grid"));
    }

    #[test]
    fn test_view_key_cycles_preview_and_keeps_step() {
        let catalog = PatternCatalog::builtin().unwrap();
        let mut app = app(&catalog, "waterbomb");
        press(&mut app, KeyCode::Char('3'));

        press(&mut app, KeyCode::Char('v'));
        assert_eq!(app.viewer.renderer().kind(), RendererKind::None);
        assert_eq!(app.status_message, "Preview: no preview");

        press(&mut app, KeyCode::Char('v'));
        match app.viewer.renderer() {
            SceneRenderer::Model(model) => {
                assert_eq!(model.pattern_id(), Some("waterbomb"));
                assert_eq!(model.step(), 2);
            }
            other => panic!("unexpected renderer {:?}", other.kind()),
        }
        assert_eq!(app.viewer.current_step(), 2);
    }

    #[test]
    fn test_status_bar_lists_primary_keys() {
        let catalog = PatternCatalog::builtin().unwrap();
        let mut app = app(&catalog, "waterbomb");
        let text = screen_text(&mut app);
        for label in ["1-9", "jump", "last", "reset", "view", "play", "quit"] {
            assert!(text.contains(label), "missing {}", label);
        }
    }

    #[test]
    fn test_quit() {
        let catalog = PatternCatalog::builtin().unwrap();
        let mut app = app(&catalog, "miura-ori");
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
