use crossterm::event::KeyCode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Paragraph, Widget},
};

use crate::domain::entities::{ButtonData, ButtonStyle};
use crate::domain::{EventKind, InteractionEvent};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::ComponentView;

impl ComponentView for ButtonData {
    fn height(&self) -> u16 {
        1
    }

    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let (text, style) = match self.style {
            ButtonStyle::Solid => (
                format!("  {}  ", self.title),
                Style::default()
                    .bg(theme.accent)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            ButtonStyle::Bordered => (format!("[ {} ]", self.title), Style::default().fg(theme.accent)),
            ButtonStyle::Text => (
                self.title.clone(),
                Style::default().fg(theme.accent).add_modifier(Modifier::UNDERLINED),
            ),
        };
        let style = if self.is_enabled { style } else { theme.disabled_style };

        Paragraph::new(Span::styled(text, style)).render(area, buf);
    }

    fn interaction(&self, key: KeyCode) -> Option<InteractionEvent> {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => Some(InteractionEvent::new(EventKind::ActionRequested)),
            _ => None,
        }
    }

    fn summary(&self) -> Vec<String> {
        vec![
            format!("title: {}", self.title),
            format!("style: {:?}", self.style),
            format!("enabled: {}", self.is_enabled),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_button_uses_disabled_style() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        let theme = Theme::default();

        ButtonData::disabled_mock().render(area, &mut buf, &theme);

        assert_eq!(buf[(0, 0)].fg, theme.disabled_style.fg.unwrap());
    }
}
