//! Horizontal tab bar.

use crate::domain::errors::ConfigurationError;
use crate::domain::state::Configuration;

const COMPONENT: &str = "tab bar";

/// A single tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
    /// Stable identifier.
    pub id: String,
    /// Visible title.
    pub title: String,
    /// Optional counter badge.
    pub badge: Option<u32>,
}

impl TabItem {
    /// Tab without badge.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            badge: None,
        }
    }

    /// Returns a copy with a badge.
    #[must_use]
    pub fn with_badge(mut self, badge: u32) -> Self {
        self.badge = Some(badge);
        self
    }
}

/// Tab bar configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabBarData {
    /// Tabs, left to right.
    pub tabs: Vec<TabItem>,
    /// Index of the highlighted tab.
    pub selected: usize,
}

impl TabBarData {
    /// Creates a bar with the first tab selected.
    ///
    /// # Errors
    /// Returns `ConfigurationError` if `tabs` is empty or a title is blank.
    pub fn new(tabs: Vec<TabItem>) -> Result<Self, ConfigurationError> {
        let data = Self { tabs, selected: 0 };
        data.validate()?;
        Ok(data)
    }

    /// Sports/casino home tabs.
    #[must_use]
    pub fn default_mock() -> Self {
        Self {
            tabs: vec![
                TabItem::new("home", "Home"),
                TabItem::new("sports", "Sports"),
                TabItem::new("live", "Live"),
                TabItem::new("casino", "Casino"),
            ],
            selected: 0,
        }
    }

    /// Many tabs with badges.
    #[must_use]
    pub fn complex_mock() -> Self {
        Self {
            tabs: vec![
                TabItem::new("football", "Football").with_badge(128),
                TabItem::new("basketball", "Basketball").with_badge(42),
                TabItem::new("tennis", "Tennis").with_badge(17),
                TabItem::new("hockey", "Ice Hockey"),
                TabItem::new("esports", "eSports").with_badge(3),
                TabItem::new("mybets", "My Bets"),
            ],
            selected: 1,
        }
    }

    /// Two-tab switcher.
    #[must_use]
    pub fn compact_mock() -> Self {
        Self {
            tabs: vec![
                TabItem::new("prelive", "Pre-Live"),
                TabItem::new("inplay", "In-Play").with_badge(9),
            ],
            selected: 0,
        }
    }

    /// Returns a copy with `index` selected.
    #[must_use]
    pub fn select(mut self, index: usize) -> Self {
        self.selected = index;
        self
    }

    /// Index after the selected one, wrapping.
    #[must_use]
    pub fn next_index(&self) -> usize {
        (self.selected + 1) % self.tabs.len().max(1)
    }

    /// Index before the selected one, wrapping.
    #[must_use]
    pub fn previous_index(&self) -> usize {
        let len = self.tabs.len().max(1);
        (self.selected + len - 1) % len
    }

    /// The highlighted tab.
    #[must_use]
    pub fn selected_tab(&self) -> Option<&TabItem> {
        self.tabs.get(self.selected)
    }
}

/// Tab bar presets the interactive slot can switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabBarVariant {
    /// Four home tabs.
    Default,
    /// Six tabs with badges.
    Complex,
    /// Two tabs.
    Compact,
}

impl TabBarVariant {
    /// Every variant, in control order.
    pub const ALL: [Self; 3] = [Self::Default, Self::Complex, Self::Compact];

    /// Control caption.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Default => "Default Variant",
            Self::Complex => "Complex Variant",
            Self::Compact => "Compact Variant",
        }
    }

    /// Configuration shown for this variant.
    #[must_use]
    pub fn config(self) -> TabBarData {
        match self {
            Self::Default => TabBarData::default_mock(),
            Self::Complex => TabBarData::complex_mock(),
            Self::Compact => TabBarData::compact_mock(),
        }
    }
}

impl Configuration for TabBarData {
    fn validate(&self) -> Result<(), ConfigurationError> {
        if self.tabs.is_empty() {
            return Err(ConfigurationError::MissingField {
                component: COMPONENT,
                field: "tabs",
            });
        }
        for tab in &self.tabs {
            ConfigurationError::require_text(COMPONENT, "title", &tab.title)?;
        }
        if self.selected >= self.tabs.len() {
            return Err(ConfigurationError::IndexOutOfRange {
                component: COMPONENT,
                index: self.selected,
                len: self.tabs.len(),
            });
        }
        Ok(())
    }
}
