use crossterm::event::KeyCode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::domain::entities::{ProgressCheckData, ProgressStatus};
use crate::domain::{EventKind, InteractionEvent};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::ComponentView;

const BAR_WIDTH: usize = 24;

fn bar(ratio: f64) -> (String, String) {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((ratio.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    ("━".repeat(filled), "─".repeat(BAR_WIDTH - filled))
}

impl ComponentView for ProgressCheckData {
    fn height(&self) -> u16 {
        4
    }

    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let (check, check_style) = match self.status {
            ProgressStatus::Completed => ("✔", Style::default().fg(theme.success)),
            ProgressStatus::Incomplete { .. } => ("◐", theme.focus_style),
            ProgressStatus::Pending => ("○", theme.dimmed_style),
        };
        let (done, left) = bar(self.ratio());
        let fill_style = if self.status == ProgressStatus::Completed {
            Style::default().fg(theme.success)
        } else {
            Style::default().fg(theme.accent)
        };
        let progress = match self.status {
            ProgressStatus::Incomplete { completed, total } => format!(" {completed}/{total}"),
            other => format!(" {}", other.label()),
        };

        let lines = vec![
            Line::from(Span::styled(self.header_text.as_str(), theme.dimmed_style)),
            Line::from(vec![
                Span::styled(format!("{check} "), check_style),
                Span::styled(self.title.as_str(), Style::default().add_modifier(Modifier::BOLD)),
            ]),
            Line::from(vec![
                Span::styled(done, fill_style),
                Span::styled(left, theme.dimmed_style),
                Span::raw(progress),
            ]),
            Line::from(Span::styled(self.subtitle.as_str(), theme.dimmed_style)),
        ];

        let paragraph = Paragraph::new(lines);
        if self.is_enabled {
            paragraph.render(area, buf);
        } else {
            paragraph.style(theme.disabled_style).render(area, buf);
        }
    }

    fn interaction(&self, key: KeyCode) -> Option<InteractionEvent> {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Right => {
                Some(InteractionEvent::new(EventKind::Advance))
            }
            _ => None,
        }
    }

    fn summary(&self) -> Vec<String> {
        vec![
            format!("status: {}", self.status.label()),
            format!("progress: {:.0}%", self.ratio() * 100.0),
            format!("enabled: {}", self.is_enabled),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.0, 0 ; "empty")]
    #[test_case(0.5, 12 ; "half")]
    #[test_case(1.0, 24 ; "full")]
    #[test_case(1.5, 24 ; "clamped")]
    fn test_bar_fill(ratio: f64, filled: usize) {
        let (done, left) = bar(ratio);
        assert_eq!(done.chars().count(), filled);
        assert_eq!(done.chars().count() + left.chars().count(), BAR_WIDTH);
    }

    #[test]
    fn test_incomplete_shows_segments() {
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);
        let data = ProgressCheckData::pending_mock().with_status(ProgressStatus::Incomplete {
            completed: 1,
            total: 4,
        });

        data.render(area, &mut buf, &Theme::default());

        assert!(crate::presentation::widgets::components::row_text(&buf, 2).ends_with("1/4"));
    }
}
