use ratatui::style::Color;

use crate::model::{TaskStatus, UiConfig};

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub dim: Color,
    /// Accent for the current tab, cursor details, and the add button
    pub accent: Color,
    /// Star color for favorites
    pub favorite: Color,
    /// Checkmark and text tint for completed tasks
    pub done: Color,
    /// Delete marker and error messages
    pub delete: Color,
    /// Input field chrome and placeholder
    pub field: Color,
    pub selection_bg: Color,
    pub selection_border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x17, 0x17, 0x17),
            text: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x5E, 0x5E, 0x5E),
            accent: Color::Rgb(0x06, 0xB6, 0xF5),
            favorite: Color::Rgb(0xFF, 0xD7, 0x00),
            done: Color::Rgb(0x00, 0xC8, 0x53),
            delete: Color::Rgb(0xFF, 0x00, 0x04),
            field: Color::Rgb(0x60, 0x60, 0x60),
            selection_bg: Color::Rgb(0x0B, 0x2E, 0x3C),
            selection_border: Color::Rgb(0x06, 0xB6, 0xF5),
        }
    }
}

/// Parse a hex color string like "#06B6F5" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        // Apply color overrides from [ui.colors]
        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "dim" => theme.dim = color,
                    "accent" => theme.accent = color,
                    "favorite" => theme.favorite = color,
                    "done" => theme.done = color,
                    "delete" => theme.delete = color,
                    "field" => theme.field = color,
                    "selection_bg" => theme.selection_bg = color,
                    "selection_border" => theme.selection_border = color,
                    _ => {}
                }
            }
        }

        theme
    }

    /// Text color for a task in a given status
    pub fn status_color(&self, status: TaskStatus) -> Color {
        match status {
            TaskStatus::Active => self.text,
            TaskStatus::Completed => self.done,
        }
    }
}
