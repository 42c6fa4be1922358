use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::application::services::ObservationLog;
use crate::presentation::theme::Theme;

/// "State Observation" panel: focused configuration plus recent events.
pub struct ObservationPanel<'a> {
    label: &'a str,
    summary: &'a [String],
    log: &'a ObservationLog,
    timestamp_format: &'a str,
    theme: &'a Theme,
}

impl<'a> ObservationPanel<'a> {
    /// Creates the widget.
    #[must_use]
    pub fn new(
        label: &'a str,
        summary: &'a [String],
        log: &'a ObservationLog,
        timestamp_format: &'a str,
        theme: &'a Theme,
    ) -> Self {
        Self {
            label,
            summary,
            log,
            timestamp_format,
            theme,
        }
    }
}

impl Widget for ObservationPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let heading = self.theme.focus_style.add_modifier(Modifier::UNDERLINED);
        let mut lines = vec![Line::from(Span::styled(self.label, heading))];
        lines.extend(self.summary.iter().map(|line| Line::from(format!("  {line}"))));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Recent events", heading)));

        if self.log.is_empty() {
            lines.push(Line::from(Span::styled("  none yet", self.theme.dimmed_style)));
        }
        lines.extend(self.log.recent().map(|observation| {
            Line::from(Span::styled(
                observation.render_line(self.timestamp_format),
                self.theme.dimmed_style,
            ))
        }));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.dimmed_style)
            .title(" State Observation ");

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::gallery::GalleryRegistry;
    use crate::application::router::RouteOutcome;
    use crate::domain::InteractionEvent;
    use crate::presentation::widgets::components::row_text;

    #[test]
    fn test_panel_lists_summary_and_events() {
        let mut registry: GalleryRegistry<u8, u8> = GalleryRegistry::new();
        let entry = registry.register_mock("Tabs", 0, |_| 0);
        let mut log = ObservationLog::new(4);
        log.record(entry, "Tabs", &InteractionEvent::selection(1), RouteOutcome::Updated);
        let summary = vec!["selected: 1 (Sports)".to_string()];
        let area = Rect::new(0, 0, 60, 8);
        let mut buf = Buffer::empty(area);

        ObservationPanel::new("Tabs", &summary, &log, "%H:%M", &Theme::default()).render(area, &mut buf);

        assert!(row_text(&buf, 2).contains("selected: 1 (Sports)"));
        assert!(row_text(&buf, 5).contains("Tabs · selection #1 → updated"));
    }
}
