//! Screen list shown at startup.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, StatefulWidget},
};
use serde::Serialize;

use crate::presentation::theme::Theme;

/// Every demo screen, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScreenKind {
    /// Copyable booking codes.
    CodeClipboard,
    /// Wallet balances.
    Wallet,
    /// Tab bars and their variants.
    TabBar,
    /// Selectable pills.
    Capsules,
    /// Button styles.
    Buttons,
    /// Segmented progress tasks.
    ProgressCheck,
}

impl ScreenKind {
    /// Catalog order.
    pub const ALL: [Self; 6] = [
        Self::CodeClipboard,
        Self::Wallet,
        Self::TabBar,
        Self::Capsules,
        Self::Buttons,
        Self::ProgressCheck,
    ];

    /// Name accepted by `--screen`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CodeClipboard => "code-clipboard",
            Self::Wallet => "wallet",
            Self::TabBar => "tab-bar",
            Self::Capsules => "capsules",
            Self::Buttons => "buttons",
            Self::ProgressCheck => "progress-check",
        }
    }

    /// Heading for the catalog and header bar.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::CodeClipboard => "Code Clipboard",
            Self::Wallet => "Wallet",
            Self::TabBar => "Tab Bar",
            Self::Capsules => "Capsules",
            Self::Buttons => "Buttons",
            Self::ProgressCheck => "Progress Check",
        }
    }

    /// One-line summary shown above the gallery.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::CodeClipboard => {
                "Copyable booking codes. Copy writes to the system clipboard; disabled chips refuse."
            }
            Self::Wallet => "Balances with deposit and withdraw actions and a randomized balance.",
            Self::TabBar => "Tab selection with Left/Right. Variant controls swap the interactive bar.",
            Self::Capsules => "Filled, outlined and subtle pills. Enter toggles selection.",
            Self::Buttons => "Solid, bordered and text buttons. Disabled buttons ignore presses.",
            Self::ProgressCheck => "Segmented tasks that advance, complete and reset.",
        }
    }

    /// Looks a screen up by [`name`](Self::name), ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}

/// Catalog line printed by `--list`.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    /// `--screen` name.
    pub name: &'static str,
    /// Display title.
    pub title: &'static str,
    /// One-line summary.
    pub description: &'static str,
}

/// The whole catalog.
#[must_use]
pub fn catalog() -> Vec<CatalogEntry> {
    ScreenKind::ALL
        .into_iter()
        .map(|kind| CatalogEntry {
            name: kind.name(),
            title: kind.title(),
            description: kind.description(),
        })
        .collect()
}

/// Selectable list of demo screens.
#[derive(Debug, Default)]
pub struct CatalogScreen {
    state: ListState,
}

impl CatalogScreen {
    /// Selects the first screen.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ListState::default().with_selected(Some(0)),
        }
    }

    /// Currently highlighted screen.
    #[must_use]
    pub fn selected(&self) -> ScreenKind {
        let index = self.state.selected().unwrap_or(0).min(ScreenKind::ALL.len() - 1);
        ScreenKind::ALL[index]
    }

    /// Highlights `kind`.
    pub fn select(&mut self, kind: ScreenKind) {
        let index = ScreenKind::ALL.iter().position(|k| *k == kind);
        self.state.select(index);
    }

    /// Wraps to the first entry.
    pub fn select_next(&mut self) {
        let next = self.state.selected().map_or(0, |i| (i + 1).min(ScreenKind::ALL.len() - 1));
        self.state.select(Some(next));
    }

    /// Wraps to the last entry.
    pub fn select_previous(&mut self) {
        let previous = self.state.selected().map_or(0, |i| i.saturating_sub(1));
        self.state.select(Some(previous));
    }

    /// Highlights the first screen.
    pub fn select_first(&mut self) {
        self.state.select(Some(0));
    }

    /// Highlights the last screen.
    pub fn select_last(&mut self) {
        self.state.select(Some(ScreenKind::ALL.len() - 1));
    }

    /// Draws the list with the selection highlighted.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let items: Vec<ListItem> = ScreenKind::ALL
            .into_iter()
            .map(|kind| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        kind.title(),
                        theme.base_style.add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(format!("  {}", kind.description()), theme.dimmed_style)),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(theme.dimmed_style)
                    .title(" Components "),
            )
            .highlight_style(theme.selection_style)
            .highlight_symbol("▶ ");

        StatefulWidget::render(list, area, buf, &mut self.state);
    }
}
