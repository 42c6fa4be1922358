use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::domain::keybinding::Keybind;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::FooterBar;

const COMPONENT_KEYS: [(&str, &str); 3] = [
    ("Enter/Space", "Interact with the focused component"),
    ("←/→", "Move inside the focused component"),
    ("1-9, 0", "Run a state control"),
];

/// Full key reference, including bindings hidden from the footer.
pub struct HelpPopup<'a> {
    bindings: &'a [Keybind],
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    /// Creates the widget.
    #[must_use]
    pub fn new(bindings: &'a [Keybind], theme: &'a Theme) -> Self {
        Self { bindings, theme }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let key_style = self.theme.selection_style;
        let mut lines: Vec<Line> = self
            .bindings
            .iter()
            .map(|binding| {
                Line::from(vec![
                    Span::styled(format!(" {:>11} ", FooterBar::format_key(&binding.key)), key_style),
                    Span::raw(format!(" {}", binding.label)),
                ])
            })
            .collect();
        lines.push(Line::default());
        lines.extend(COMPONENT_KEYS.iter().map(|(key, what)| {
            Line::from(vec![
                Span::styled(format!(" {key:>11} "), key_style),
                Span::raw(format!(" {what}")),
            ])
        }));
        lines
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
        let [vertical] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        let [popup] = Layout::horizontal([Constraint::Length(56)])
            .flex(Flex::Center)
            .areas(vertical);

        Clear.render(popup, buf);
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(self.theme.focus_style)
                    .title(" Keys "),
            )
            .render(popup, buf);
    }
}
