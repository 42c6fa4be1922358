//! Pill-shaped label.

use crate::domain::errors::ConfigurationError;
use crate::domain::state::Configuration;

const COMPONENT: &str = "capsule";

/// Capsule look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapsuleStyle {
    /// Solid accent background.
    #[default]
    Filled,
    /// Accent border only.
    Outlined,
    /// Muted text.
    Subtle,
}

/// Capsule configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapsuleData {
    /// Text inside the pill.
    pub text: String,
    /// Visual style.
    pub style: CapsuleStyle,
    /// Highlighted.
    pub is_selected: bool,
}

impl CapsuleData {
    /// Creates an unselected capsule.
    ///
    /// # Errors
    /// Returns `ConfigurationError` if `text` is blank.
    pub fn new(text: impl Into<String>, style: CapsuleStyle) -> Result<Self, ConfigurationError> {
        let data = Self {
            text: text.into(),
            style,
            is_selected: false,
        };
        data.validate()?;
        Ok(data)
    }

    fn preset(text: &str, style: CapsuleStyle) -> Self {
        Self {
            text: text.to_string(),
            style,
            is_selected: false,
        }
    }

    /// Market name pill.
    #[must_use]
    pub fn filled_mock() -> Self {
        Self::preset("1X2", CapsuleStyle::Filled)
    }

    /// Live indicator.
    #[must_use]
    pub fn outlined_mock() -> Self {
        Self::preset("LIVE", CapsuleStyle::Outlined)
    }

    /// Low-emphasis tag.
    #[must_use]
    pub fn subtle_mock() -> Self {
        Self::preset("Over/Under 2.5", CapsuleStyle::Subtle)
    }

    /// Returns a copy with the selection flipped.
    #[must_use]
    pub fn toggled(mut self) -> Self {
        self.is_selected = !self.is_selected;
        self
    }
}

impl Configuration for CapsuleData {
    fn validate(&self) -> Result<(), ConfigurationError> {
        ConfigurationError::require_text(COMPONENT, "text", &self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let capsule = CapsuleData::filled_mock();
        assert!(capsule.clone().toggled().is_selected);
        assert!(!capsule.toggled().toggled().is_selected);
    }

    #[test]
    fn test_blank_text_rejected() {
        assert!(CapsuleData::new(" ", CapsuleStyle::Subtle).is_err());
    }
}
