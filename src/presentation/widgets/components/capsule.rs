use crossterm::event::KeyCode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::domain::InteractionEvent;
use crate::domain::entities::{CapsuleData, CapsuleStyle};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::ComponentView;

impl ComponentView for CapsuleData {
    fn height(&self) -> u16 {
        1
    }

    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let (text, mut style) = match self.style {
            CapsuleStyle::Filled => (
                format!(" {} ", self.text),
                Style::default().bg(theme.accent).fg(Color::Black),
            ),
            CapsuleStyle::Outlined => (format!("( {} )", self.text), Style::default().fg(theme.accent)),
            CapsuleStyle::Subtle => (format!(" {} ", self.text), theme.dimmed_style),
        };
        if self.is_selected {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }

        let marker = if self.is_selected { "● " } else { "○ " };
        Paragraph::new(Line::from(vec![
            Span::styled(marker, theme.focus_style),
            Span::styled(text, style),
        ]))
        .render(area, buf);
    }

    fn interaction(&self, key: KeyCode) -> Option<InteractionEvent> {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => Some(InteractionEvent::selection(0)),
            _ => None,
        }
    }

    fn summary(&self) -> Vec<String> {
        vec![
            format!("text: {}", self.text),
            format!("style: {:?}", self.style),
            format!("selected: {}", self.is_selected),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::widgets::components::row_text;

    #[test]
    fn test_outlined_capsule_is_bracketed() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);

        CapsuleData::outlined_mock().render(area, &mut buf, &Theme::default());

        assert_eq!(row_text(&buf, 0), "○ ( LIVE )");
    }
}
