use crossterm::style::{Color, Stylize};

use crate::model::config::ListConfig;

/// Resolved colors for the three row elements
#[derive(Debug, Clone)]
pub struct Theme {
    /// Application rows
    pub app: Option<Color>,
    /// Task rows
    pub task: Option<Color>,
    /// Dependency annotations
    pub dep: Option<Color>,
    /// When false, every helper returns the raw text
    pub color: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::from_config(&ListConfig::default())
    }
}

impl Theme {
    /// Resolve a theme from the configured color strings
    pub fn from_config(config: &ListConfig) -> Self {
        Theme {
            app: parse_color(&config.app_color),
            task: parse_color(&config.task_color),
            dep: parse_color(&config.dep_color),
            color: config.color,
        }
    }

    /// Theme with styling disabled (tests, piped output)
    pub fn plain() -> Self {
        Theme {
            app: None,
            task: None,
            dep: None,
            color: false,
        }
    }

    pub fn app_label(&self, text: &str) -> String {
        self.paint(text, self.app)
    }

    pub fn task_label(&self, text: &str) -> String {
        self.paint(text, self.task)
    }

    pub fn dep_note(&self, text: &str) -> String {
        self.paint(text, self.dep)
    }

    fn paint(&self, text: &str, color: Option<Color>) -> String {
        match color {
            Some(color) if self.color => text.with(color).to_string(),
            _ => text.to_string(),
        }
    }
}

/// Parse a configured color: `#RRGGBB` first, then a crossterm color name
/// (with the `gray` spelling normalized to the `grey` crossterm expects).
/// Unrecognized strings resolve to unstyled output rather than an error.
fn parse_color(name: &str) -> Option<Color> {
    if let Some(color) = parse_hex_color(name) {
        return Some(color);
    }
    let name = name.trim().to_ascii_lowercase().replace("gray", "grey");
    Color::try_from(name.as_str()).ok()
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb { r, g, b })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors() {
        assert_eq!(parse_color("cyan"), Some(Color::Cyan));
        assert_eq!(parse_color("green"), Some(Color::Green));
    }

    #[test]
    fn gray_spelling_is_normalized() {
        assert_eq!(parse_color("gray"), Some(Color::Grey));
        assert_eq!(parse_color("dark_gray"), Some(Color::DarkGrey));
    }

    #[test]
    fn hex_colors() {
        assert_eq!(
            parse_color("#FF4444"),
            Some(Color::Rgb {
                r: 0xFF,
                g: 0x44,
                b: 0x44
            })
        );
        assert_eq!(parse_color("#FF44"), None);
    }

    #[test]
    fn unknown_color_is_unstyled() {
        assert_eq!(parse_color("mauve-ish"), None);
    }

    #[test]
    fn plain_theme_passes_text_through() {
        let theme = Theme::plain();
        assert_eq!(theme.app_label("base"), "base");
        assert_eq!(theme.task_label("foo"), "foo");
    }

    #[test]
    fn colored_theme_emits_ansi() {
        let theme = Theme::default();
        assert!(theme.app_label("base").contains('\u{1b}'));
    }
}
