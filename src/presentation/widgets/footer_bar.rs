use crate::domain::keybinding::Keybind;
use crate::presentation::theme::Theme;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Which part of the app has the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusContext {
    /// Browsing the screen list.
    #[default]
    Catalog,
    /// Inside a demo screen.
    Gallery,
    /// Help overlay open.
    Help,
}

impl FocusContext {
    /// Badge text at the left of the footer.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Catalog => "CATALOG",
            Self::Gallery => "GALLERY",
            Self::Help => "HELP",
        }
    }
}

/// Styles for the footer bar.
pub struct FooterBarStyle {
    /// Whole-row fill.
    pub background: Style,
    /// Action label chips.
    pub label_style: Style,
    /// Key name chips.
    pub key_style: Style,
    /// Right-aligned hint.
    pub info: Style,
    /// Focus context badge.
    pub focus_indicator: Style,
}

impl FooterBarStyle {
    /// Colors derived from the theme accent.
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        use crate::presentation::theme::adapter::ColorConverter;

        let accent = theme.accent;
        let accent_hsl = ColorConverter::to_hsl(accent);

        let mut key_bg_hsl = accent_hsl;
        key_bg_hsl.l = 0.08;
        key_bg_hsl.s = 0.5;
        let key_bg = ColorConverter::to_ratatui(key_bg_hsl);

        Self {
            label_style: Style::default()
                .bg(accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default().bg(key_bg).fg(Color::White),
            focus_indicator: Style::default()
                .bg(key_bg)
                .fg(accent)
                .add_modifier(Modifier::BOLD),
            ..Self::default()
        }
    }
}

impl Default for FooterBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            label_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default().fg(Color::White).bg(Color::DarkGray),
            info: Style::default().fg(Color::DarkGray),
            focus_indicator: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Keybind chips with an optional right-aligned hint.
pub struct FooterBar<'a> {
    keybindings: &'a [Keybind],
    focus_context: Option<FocusContext>,
    right_info: Option<&'a str>,
    style: FooterBarStyle,
}

impl<'a> FooterBar<'a> {
    /// Creates the widget.
    #[must_use]
    pub fn new(keybindings: &'a [Keybind]) -> Self {
        Self {
            keybindings,
            focus_context: None,
            right_info: None,
            style: FooterBarStyle::default(),
        }
    }

    /// Shows `context` as a badge before the chips.
    #[must_use]
    pub fn focus_context(mut self, context: FocusContext) -> Self {
        self.focus_context = Some(context);
        self
    }

    /// Hint text at the right edge.
    #[must_use]
    pub const fn right_info(mut self, info: Option<&'a str>) -> Self {
        self.right_info = info;
        self
    }

    /// Overrides the default styles.
    #[must_use]
    pub const fn style(mut self, style: FooterBarStyle) -> Self {
        self.style = style;
        self
    }

    /// Short key name: `C-c`, `Esc`, `↑`.
    #[must_use]
    pub fn format_key(key: &crossterm::event::KeyEvent) -> String {
        let mut prefix = String::new();
        for (modifier, tag) in [
            (KeyModifiers::CONTROL, "C-"),
            (KeyModifiers::ALT, "A-"),
            (KeyModifiers::SHIFT, "S-"),
        ] {
            let shifted_char = modifier == KeyModifiers::SHIFT && matches!(key.code, KeyCode::Char(_));
            if key.modifiers.contains(modifier) && !shifted_char {
                prefix.push_str(tag);
            }
        }

        let name = match key.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Backspace => "Bksp".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        };
        prefix + &name
    }

    /// One chip per action: the first visible binding wins.
    fn chips(&self) -> Vec<&'a Keybind> {
        let mut seen = Vec::new();
        self.keybindings
            .iter()
            .filter(|binding| binding.visible_in_bar)
            .filter(|binding| {
                let fresh = !seen.contains(&binding.action);
                seen.push(binding.action);
                fresh
            })
            .collect()
    }

    fn left_line(&self) -> Line<'a> {
        let mut spans = Vec::new();
        if let Some(context) = self.focus_context {
            spans.push(Span::styled(
                format!(" {} ", context.display_name()),
                self.style.focus_indicator,
            ));
        }
        for binding in self.chips() {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(format!(" {} ", binding.label), self.style.label_style));
            spans.push(Span::styled(
                format!(" {} ", Self::format_key(&binding.key)),
                self.style.key_style,
            ));
        }
        Line::from(spans)
    }
}

impl Widget for FooterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let row = Rect { height: 1, ..area };
        buf.set_style(row, self.style.background);

        let info_width = self
            .right_info
            .map_or(0, |info| u16::try_from(info.width()).unwrap_or(u16::MAX));
        let [left, right] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(info_width)]).areas(row);

        Paragraph::new(self.left_line()).render(left, buf);
        if let Some(info) = self.right_info {
            Span::styled(info, self.style.info).render(right, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::keybinding::KeyMap;
    use crate::presentation::widgets::components::row_text;
    use crossterm::event::KeyEvent;

    #[test]
    fn test_only_visible_bindings_are_listed() {
        let keymap = KeyMap::default();
        let area = Rect::new(0, 0, 100, 1);
        let mut buf = Buffer::empty(area);

        FooterBar::new(keymap.bindings())
            .focus_context(FocusContext::Gallery)
            .render(area, &mut buf);

        let row = row_text(&buf, 0);
        assert!(row.starts_with(" GALLERY "));
        assert!(row.contains(" Quit  q "));
        assert!(row.contains(" Back  Esc "));
        assert!(!row.contains("Bksp"));
    }

    #[test]
    fn test_overridden_action_shows_once() {
        let mut overrides = std::collections::HashMap::new();
        overrides.insert("x".to_string(), crate::domain::keybinding::Action::Quit);
        let mut keymap_bindings = KeyMap::with_overrides(&overrides).bindings().to_vec();
        for binding in &mut keymap_bindings {
            binding.visible_in_bar = true;
        }
        let area = Rect::new(0, 0, 200, 1);
        let mut buf = Buffer::empty(area);

        FooterBar::new(&keymap_bindings).render(area, &mut buf);

        let row = row_text(&buf, 0);
        assert_eq!(row.matches(" Quit ").count(), 1);
        assert!(row.contains(" Quit  x "));
    }

    #[test]
    fn test_format_key() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(FooterBar::format_key(&ctrl_c), "C-c");
        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(FooterBar::format_key(&up), "↑");
        let shift_g = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert_eq!(FooterBar::format_key(&shift_g), "G");
        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(FooterBar::format_key(&space), "Space");
    }

    #[test]
    fn test_right_info_is_right_aligned() {
        let keymap = KeyMap::default();
        let area = Rect::new(0, 0, 120, 1);
        let mut buf = Buffer::empty(area);

        FooterBar::new(keymap.bindings())
            .right_info(Some("1-6 controls"))
            .render(area, &mut buf);

        assert!(row_text(&buf, 0).ends_with("1-6 controls"));
    }
}
