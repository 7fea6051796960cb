use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub green: Color,
    pub red: Color,
    pub yellow: Color,
    pub selection_bg: Color,
    /// Per-category colors, keyed by category name
    pub category_colors: HashMap<String, Color>,
}

impl Default for Theme {
    fn default() -> Self {
        let mut category_colors = HashMap::new();
        category_colors.insert("Work".into(), Color::Rgb(0x61, 0xAF, 0xEF));
        category_colors.insert("Schools".into(), Color::Rgb(0xC6, 0x78, 0xDD));
        category_colors.insert("Home".into(), Color::Rgb(0x7E, 0xC6, 0x99));
        category_colors.insert("Gym".into(), Color::Rgb(0xE0, 0x6C, 0x75));
        category_colors.insert("Personal".into(), Color::Rgb(0xE5, 0xC0, 0x7B));

        Theme {
            background: Color::Rgb(0x14, 0x14, 0x1B),
            text: Color::Rgb(0xA8, 0xB0, 0xC0),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFF, 0x7A, 0xA2),
            dim: Color::Rgb(0x5C, 0x63, 0x70),
            green: Color::Rgb(0x7E, 0xC6, 0x99),
            red: Color::Rgb(0xE0, 0x6C, 0x75),
            yellow: Color::Rgb(0xE5, 0xC0, 0x7B),
            selection_bg: Color::Rgb(0x2A, 0x2F, 0x3A),
            category_colors,
        }
    }
}

/// Parse a hex color string like "#E06C75" into an RGB Color
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
    /// Create a theme from the UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        // Color overrides from [ui.colors]
        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "highlight" => theme.highlight = color,
                    "dim" => theme.dim = color,
                    "green" => theme.green = color,
                    "red" => theme.red = color,
                    "yellow" => theme.yellow = color,
                    "selection_bg" => theme.selection_bg = color,
                    _ => {}
                }
            }
        }

        // Per-category overrides from [ui.category_colors]
        for (name, value) in &ui.category_colors {
            if let Some(color) = parse_hex_color(value) {
                theme.category_colors.insert(name.clone(), color);
            }
        }

        theme
    }

    /// Resolve the display color for a category: an explicit hex color on
    /// the item wins, then the theme map, then the plain text color.
    pub fn category_color(&self, name: &str, explicit: Option<&str>) -> Color {
        if let Some(hex) = explicit
            && let Some(color) = parse_hex_color(hex)
        {
            return color;
        }
        self.category_colors
            .get(name)
            .copied()
            .unwrap_or(self.text)
    }
}
