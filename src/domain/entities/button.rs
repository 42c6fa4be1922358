//! Call-to-action button.

use crate::domain::errors::ConfigurationError;
use crate::domain::state::Configuration;

const COMPONENT: &str = "button";

/// Button emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonStyle {
    /// Filled primary button.
    #[default]
    Solid,
    /// Outlined secondary button.
    Bordered,
    /// Borderless link-like button.
    Text,
}

/// Button configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonData {
    /// Caption.
    pub title: String,
    /// Emphasis.
    pub style: ButtonStyle,
    /// Disabled buttons ignore presses.
    pub is_enabled: bool,
}

impl ButtonData {
    /// Creates an enabled button.
    ///
    /// # Errors
    /// Returns `ConfigurationError` if `title` is blank.
    pub fn new(title: impl Into<String>, style: ButtonStyle) -> Result<Self, ConfigurationError> {
        let data = Self {
            title: title.into(),
            style,
            is_enabled: true,
        };
        data.validate()?;
        Ok(data)
    }

    fn preset(title: &str, style: ButtonStyle) -> Self {
        Self {
            title: title.to_string(),
            style,
            is_enabled: true,
        }
    }

    /// Primary action.
    #[must_use]
    pub fn solid_mock() -> Self {
        Self::preset("Place Bet", ButtonStyle::Solid)
    }

    /// Secondary action.
    #[must_use]
    pub fn bordered_mock() -> Self {
        Self::preset("Add to Betslip", ButtonStyle::Bordered)
    }

    /// Tertiary action.
    #[must_use]
    pub fn text_mock() -> Self {
        Self::preset("View Terms", ButtonStyle::Text)
    }

    /// Inactive primary action.
    #[must_use]
    pub fn disabled_mock() -> Self {
        Self {
            is_enabled: false,
            ..Self::preset("Cash Out", ButtonStyle::Solid)
        }
    }

    /// Returns a copy with the enabled flag flipped.
    #[must_use]
    pub fn toggled(mut self) -> Self {
        self.is_enabled = !self.is_enabled;
        self
    }
}

impl Configuration for ButtonData {
    fn validate(&self) -> Result<(), ConfigurationError> {
        ConfigurationError::require_text(COMPONENT, "title", &self.title)
    }
}
