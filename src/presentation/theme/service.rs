use super::adapter::ColorConverter;
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

/// Styles derived from the configured accent color.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Configured accent.
    pub accent: Color,
    /// Copied codes, completed tasks and success alerts.
    pub success: Color,
    /// Highlighted list rows and key chips.
    pub selection_style: Style,
    /// Border of the focused slot.
    pub focus_style: Style,
    /// Disabled components.
    pub disabled_style: Style,
    /// Secondary text and idle borders.
    pub dimmed_style: Style,
    /// Regular text.
    pub base_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("Yellow", None)
    }
}

impl Theme {
    /// Parses color names or hex codes. Unknown values fall back to defaults.
    pub fn new(accent_color_str: &str, success_color_str: Option<&str>) -> Self {
        let accent = parse_color(accent_color_str);
        let success = success_color_str.map(parse_color);
        Self::from_color(accent, success)
    }

    /// Derives every style from `accent`.
    #[must_use]
    pub fn from_color(accent: Color, success_color: Option<Color>) -> Self {
        let accent_hsl = ColorConverter::to_hsl(accent);

        let mut selection_bg_hsl = accent_hsl;
        selection_bg_hsl.l = 0.2;
        selection_bg_hsl.s = 0.3;
        let selection_bg = ColorConverter::to_ratatui(selection_bg_hsl);

        let mut disabled_hsl = accent_hsl;
        disabled_hsl.l = 0.35;
        disabled_hsl.s = 0.05;
        let disabled_fg = ColorConverter::to_ratatui(disabled_hsl);

        Self {
            accent,
            success: success_color.unwrap_or(Color::Green),
            selection_style: Style::default().bg(selection_bg).fg(Color::White),
            focus_style: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            disabled_style: Style::default()
                .fg(disabled_fg)
                .add_modifier(Modifier::CROSSED_OUT),
            dimmed_style: Style::default().fg(Color::DarkGray),
            base_style: Style::default().fg(Color::Reset),
        }
    }
}

fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if s.starts_with('#')
        && let Some((r, g, b)) = parse_hex_color(s)
    {
        return Color::Rgb(r, g, b);
    }

    match s.to_lowercase().as_str() {
        "orange" => Color::Indexed(208),
        "teal" => Color::Indexed(30),
        _ => Color::Yellow,
    }
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let s = s.trim_start_matches('#');
    if !s.is_ascii() {
        return None;
    }

    let channel = |hex: &str| u8::from_str_radix(hex, 16).ok();
    match s.len() {
        6 => Some((channel(&s[0..2])?, channel(&s[2..4])?, channel(&s[4..6])?)),
        3 => {
            let short = |i: usize| channel(&s[i..=i]).map(|v| v * 17);
            Some((short(0)?, short(1)?, short(2)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Red", Color::Red ; "named")]
    #[test_case("blue", Color::Blue ; "lowercase")]
    #[test_case("#FF0000", Color::Rgb(255, 0, 0) ; "hex6")]
    #[test_case("#0f0", Color::Rgb(0, 255, 0) ; "hex3")]
    #[test_case("Orange", Color::Indexed(208) ; "orange")]
    #[test_case("Invalid", Color::Yellow ; "fallback")]
    fn test_parse_color(input: &str, expected: Color) {
        assert_eq!(parse_color(input), expected);
    }

    #[test]
    fn test_success_color_defaults_to_green() {
        assert_eq!(Theme::new("Cyan", None).success, Color::Green);
        assert_eq!(Theme::new("Cyan", Some("#00ff88")).success, Color::Rgb(0, 255, 136));
    }

    #[test]
    fn test_selection_background_is_derived_from_accent() {
        let theme = Theme::new("#ff0000", None);
        let Some(Color::Rgb(r, g, b)) = theme.selection_style.bg else {
            panic!("Expected RGB selection background");
        };
        assert!(r > g && r > b);
    }
}
