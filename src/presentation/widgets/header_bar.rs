use crate::presentation::theme::Theme;
use crate::presentation::theme::adapter::ColorConverter;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Styles for the header bar.
pub struct HeaderBarStyle {
    /// Whole-row fill.
    pub background: Style,
    /// App name badge.
    pub app_name: Style,
    /// Version badge.
    pub version: Style,
    /// Screen title.
    pub screen: Style,
}

impl HeaderBarStyle {
    /// Colors derived from the theme accent.
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        let mut version_bg_hsl = ColorConverter::to_hsl(theme.accent);
        version_bg_hsl.l = 0.08;
        version_bg_hsl.s = 0.5;
        let version_bg = ColorConverter::to_ratatui(version_bg_hsl);

        Self {
            app_name: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            version: Style::default().bg(version_bg).fg(Color::White),
            screen: Style::default()
                .bg(version_bg)
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
            ..Self::default()
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            app_name: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            version: Style::default().fg(Color::DarkGray),
            screen: Style::default().fg(Color::Yellow),
        }
    }
}

/// App name and version on the left, current screen on the right.
pub struct HeaderBar<'a> {
    app_name: &'a str,
    version: &'a str,
    screen: Option<&'a str>,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    /// Creates the widget.
    #[must_use]
    pub fn new(app_name: &'a str, version: &'a str) -> Self {
        Self {
            app_name,
            version,
            screen: None,
            style: HeaderBarStyle::default(),
        }
    }

    /// Title shown right-aligned, dropped when it does not fit.
    #[must_use]
    pub const fn screen(mut self, screen: &'a str) -> Self {
        self.screen = Some(screen);
        self
    }

    /// Overrides the default styles.
    #[must_use]
    pub const fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let name = format!(" {} ", self.app_name.to_uppercase());
        let version = format!(" v{} ", self.version);
        let left_width = u16::try_from(name.width() + 1 + version.width()).unwrap_or(u16::MAX);
        let left_line = Line::from(vec![
            Span::styled(name, self.style.app_name),
            Span::raw(" "),
            Span::styled(version, self.style.version),
        ]);
        let left_area = Rect::new(area.x, area.y, left_width.min(area.width), 1);
        Paragraph::new(left_line).render(left_area, buf);

        let Some(screen) = self.screen else {
            return;
        };
        let text = format!(" {screen} ");
        let screen_width = u16::try_from(text.width()).unwrap_or(u16::MAX);
        if screen_width < area.width.saturating_sub(left_width) {
            let right_area = Rect::new(area.right() - screen_width, area.y, screen_width, 1);
            Paragraph::new(Span::styled(text, self.style.screen)).render(right_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::widgets::components::row_text;

    #[test]
    fn test_header_shows_name_version_and_screen() {
        let area = Rect::new(0, 0, 50, 1);
        let mut buf = Buffer::empty(area);

        HeaderBar::new("mockgallery", "0.1.0")
            .screen("Wallet")
            .render(area, &mut buf);

        let row = row_text(&buf, 0);
        assert!(row.starts_with(" MOCKGALLERY   v0.1.0 "));
        assert!(row.ends_with("Wallet"));
    }

    #[test]
    fn test_screen_is_dropped_when_too_narrow() {
        let area = Rect::new(0, 0, 24, 1);
        let mut buf = Buffer::empty(area);

        HeaderBar::new("mockgallery", "0.1.0")
            .screen("Progress Check")
            .render(area, &mut buf);

        assert!(!row_text(&buf, 0).contains("Progress"));
    }
}
