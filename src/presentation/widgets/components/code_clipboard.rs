use crossterm::event::KeyCode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::domain::entities::{ClipboardState, CodeClipboardData};
use crate::domain::{EventKind, InteractionEvent};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::ComponentView;

impl ComponentView for CodeClipboardData {
    fn height(&self) -> u16 {
        2
    }

    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let (code_style, badge) = if !self.is_enabled {
            (theme.disabled_style, Span::styled("  ⧉ Copy", theme.disabled_style))
        } else {
            match self.state {
                ClipboardState::Default => (
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                    Span::styled("  ⧉ Copy", theme.focus_style),
                ),
                ClipboardState::Copied => (
                    Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
                    Span::styled(
                        "  ✓ Copied",
                        Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
                    ),
                ),
            }
        };

        let lines = vec![
            Line::from(Span::styled(self.label_text.as_str(), theme.dimmed_style)),
            Line::from(vec![
                Span::styled(format!(" {} ", self.code), code_style.add_modifier(Modifier::REVERSED)),
                badge,
            ]),
        ];
        Paragraph::new(lines).render(area, buf);
    }

    fn interaction(&self, key: KeyCode) -> Option<InteractionEvent> {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => Some(InteractionEvent::new(EventKind::CopyRequested)),
            _ => None,
        }
    }

    fn summary(&self) -> Vec<String> {
        vec![
            format!("state: {:?}", self.state),
            format!("code: {}", self.code),
            format!("label: {}", self.label_text),
            format!("enabled: {}", self.is_enabled),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::widgets::components::row_text;

    #[test]
    fn test_copied_chip_shows_confirmation() {
        let area = Rect::new(0, 0, 30, 2);
        let mut buf = Buffer::empty(area);

        CodeClipboardData::copied_mock().render(area, &mut buf, &Theme::default());

        assert!(row_text(&buf, 1).contains("✓ Copied"));
    }

    #[test]
    fn test_enter_requests_copy() {
        let data = CodeClipboardData::default_mock();

        assert_eq!(
            data.interaction(KeyCode::Enter).map(|e| e.kind),
            Some(EventKind::CopyRequested)
        );
        assert!(data.interaction(KeyCode::Left).is_none());
    }
}
