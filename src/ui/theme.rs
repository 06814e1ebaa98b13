use crate::catalog::Difficulty;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub heading: Color,
    pub mountain: Color, // Mountain folds
    pub valley: Color,   // Valley folds
    pub sheet: Color,    // Paper outline
}

impl Theme {
    /// Badge color for a difficulty level
    pub fn difficulty(&self, difficulty: Difficulty) -> Color {
        match difficulty {
            Difficulty::Beginner => self.success,
            Difficulty::Intermediate => self.secondary,
            Difficulty::Advanced => self.error,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current step
    heading: Color::Rgb(249, 226, 175),        // Yellow for headings
    mountain: Color::Rgb(243, 139, 168),       // Pink-red for mountain folds
    valley: Color::Rgb(137, 180, 250),         // Blue for valley folds
    sheet: Color::Rgb(205, 214, 244),          // Paper white
};
