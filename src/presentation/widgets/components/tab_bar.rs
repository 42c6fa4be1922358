use crossterm::event::KeyCode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Tabs, Widget},
};

use crate::domain::InteractionEvent;
use crate::domain::entities::TabBarData;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::ComponentView;

impl ComponentView for TabBarData {
    fn height(&self) -> u16 {
        1
    }

    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let titles = self.tabs.iter().map(|tab| {
            let mut spans = vec![Span::raw(tab.title.as_str())];
            if let Some(badge) = tab.badge {
                spans.push(Span::styled(format!(" {badge}"), theme.dimmed_style));
            }
            Line::from(spans)
        });

        Tabs::new(titles)
            .select(self.selected)
            .style(theme.base_style)
            .highlight_style(theme.selection_style)
            .divider("│")
            .render(area, buf);
    }

    fn interaction(&self, key: KeyCode) -> Option<InteractionEvent> {
        match key {
            KeyCode::Left => Some(InteractionEvent::selection(self.previous_index())),
            KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ') => {
                Some(InteractionEvent::selection(self.next_index()))
            }
            _ => None,
        }
    }

    fn summary(&self) -> Vec<String> {
        let selected = self
            .selected_tab()
            .map_or_else(|| "-".to_string(), |tab| tab.title.clone());
        vec![
            format!("tabs: {}", self.tabs.len()),
            format!("selected: {} ({selected})", self.selected),
        ]
    }
}
