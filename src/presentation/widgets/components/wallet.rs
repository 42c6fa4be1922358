use crossterm::event::KeyCode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::domain::entities::WalletData;
use crate::domain::{EventKind, InteractionEvent, Payload};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::ComponentView;

fn wallet_action(action: &str) -> InteractionEvent {
    InteractionEvent::new(EventKind::ActionRequested).with_payload(Payload::Text(action.to_string()))
}

impl ComponentView for WalletData {
    fn height(&self) -> u16 {
        3
    }

    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let mut balance = vec![
            Span::styled("Balance ", theme.dimmed_style),
            Span::styled(
                self.format_amount(self.balance),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ];
        if self.bonus_balance > 0.0 {
            balance.push(Span::styled("   Bonus ", theme.dimmed_style));
            balance.push(Span::styled(
                self.format_amount(self.bonus_balance),
                Style::default().fg(theme.success),
            ));
        }

        let button_style = if self.actions_enabled {
            Style::default().bg(theme.accent).fg(ratatui::style::Color::Black)
        } else {
            theme.disabled_style
        };

        let lines = vec![
            Line::from(Span::styled(self.title.as_str(), theme.focus_style)),
            Line::from(balance),
            Line::from(vec![
                Span::styled(" Deposit ", button_style),
                Span::raw("  "),
                Span::styled(" Withdraw ", button_style),
            ]),
        ];
        Paragraph::new(lines).render(area, buf);
    }

    fn interaction(&self, key: KeyCode) -> Option<InteractionEvent> {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Left => Some(wallet_action("deposit")),
            KeyCode::Right => Some(wallet_action("withdraw")),
            _ => None,
        }
    }

    fn summary(&self) -> Vec<String> {
        vec![
            format!("balance: {}", self.format_amount(self.balance)),
            format!("bonus: {}", self.format_amount(self.bonus_balance)),
            format!("total: {}", self.format_amount(self.total())),
            format!("actions: {}", if self.actions_enabled { "enabled" } else { "disabled" }),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::widgets::components::row_text;

    #[test]
    fn test_bonus_line_only_when_present() {
        let area = Rect::new(0, 0, 50, 3);
        let theme = Theme::default();

        let mut plain = Buffer::empty(area);
        WalletData::default_mock().render(area, &mut plain, &theme);
        assert!(!row_text(&plain, 1).contains("Bonus"));

        let mut bonus = Buffer::empty(area);
        WalletData::bonus_mock().render(area, &mut bonus, &theme);
        assert!(row_text(&bonus, 1).contains("Bonus"));
    }

    #[test]
    fn test_right_requests_withdraw() {
        let event = WalletData::default_mock().interaction(KeyCode::Right).unwrap();
        assert_eq!(event.payload, Payload::Text("withdraw".to_string()));
    }
}
