//! Copyable code chip (booking codes, references).

use crate::domain::errors::ConfigurationError;
use crate::domain::state::Configuration;

const COMPONENT: &str = "code clipboard";

/// Codes offered by the "random code" control.
pub const SAMPLE_CODES: [&str; 5] = ["ABC123", "XYZ789", "DEF456", "GHI012", "JKL345"];

/// Label texts cycled by the "change label" control.
pub const LABEL_CYCLE: [&str; 4] = [
    "Copy Booking Code",
    "Copy Reference",
    "Copy Bet ID",
    "Copy Promo Code",
];

/// Whether the code was just copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipboardState {
    /// Idle.
    #[default]
    Default,
    /// Copy confirmed.
    Copied,
}

/// Code clipboard configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeClipboardData {
    /// Copy state.
    pub state: ClipboardState,
    /// Code written to the clipboard.
    pub code: String,
    /// Caption next to the code.
    pub label_text: String,
    /// Disabled chips ignore copy requests.
    pub is_enabled: bool,
}

impl CodeClipboardData {
    /// Creates an enabled, idle chip.
    ///
    /// # Errors
    /// Returns `ConfigurationError` if `code` or `label_text` is blank.
    pub fn new(
        code: impl Into<String>,
        label_text: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        let data = Self {
            state: ClipboardState::Default,
            code: code.into(),
            label_text: label_text.into(),
            is_enabled: true,
        };
        data.validate()?;
        Ok(data)
    }

    fn preset(code: &str, label_text: &str) -> Self {
        Self {
            state: ClipboardState::Default,
            code: code.to_string(),
            label_text: label_text.to_string(),
            is_enabled: true,
        }
    }

    /// Booking code in its idle state.
    #[must_use]
    pub fn default_mock() -> Self {
        Self::preset("ABCD1234", "Copy Booking Code")
    }

    /// Longer custom reference.
    #[must_use]
    pub fn custom_code_mock() -> Self {
        Self::preset("BETSSON2024", "Copy Reference")
    }

    /// Chip that was just copied.
    #[must_use]
    pub fn copied_mock() -> Self {
        Self::default_mock().with_state(ClipboardState::Copied)
    }

    /// Chip that cannot be copied.
    #[must_use]
    pub fn disabled_mock() -> Self {
        Self::default_mock().enabled(false)
    }

    /// Chip driven by the state controls.
    #[must_use]
    pub fn interactive_mock() -> Self {
        Self::preset("DEMO123", "Interactive Demo Code")
    }

    /// Returns a copy with `state`.
    #[must_use]
    pub fn with_state(mut self, state: ClipboardState) -> Self {
        self.state = state;
        self
    }

    /// Returns a copy with the enabled flag set.
    #[must_use]
    pub fn enabled(mut self, is_enabled: bool) -> Self {
        self.is_enabled = is_enabled;
        self
    }

    /// Returns a copy showing `code`, back in the idle state.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self.state = ClipboardState::Default;
        self
    }

    /// Label following the current one in [`LABEL_CYCLE`].
    #[must_use]
    pub fn next_label(&self) -> &'static str {
        let current = LABEL_CYCLE
            .iter()
            .position(|label| *label == self.label_text)
            .unwrap_or(0);
        LABEL_CYCLE[(current + 1) % LABEL_CYCLE.len()]
    }

    /// Whether the chip shows the copied confirmation.
    #[must_use]
    pub fn is_copied(&self) -> bool {
        self.state == ClipboardState::Copied
    }
}

impl Configuration for CodeClipboardData {
    fn validate(&self) -> Result<(), ConfigurationError> {
        ConfigurationError::require_text(COMPONENT, "code", &self.code)?;
        ConfigurationError::require_text(COMPONENT, "label_text", &self.label_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_blank_code() {
        assert!(matches!(
            CodeClipboardData::new("", "Copy"),
            Err(ConfigurationError::MissingField { field: "code", .. })
        ));
        assert!(CodeClipboardData::new("X1", "Copy").is_ok());
    }

    #[test]
    fn test_presets_are_valid() {
        for data in [
            CodeClipboardData::default_mock(),
            CodeClipboardData::custom_code_mock(),
            CodeClipboardData::copied_mock(),
            CodeClipboardData::disabled_mock(),
            CodeClipboardData::interactive_mock(),
        ] {
            assert!(data.validate().is_ok(), "{data:?}");
        }
    }

    #[test]
    fn test_next_label_cycles() {
        let data = CodeClipboardData::default_mock();
        assert_eq!(data.next_label(), "Copy Reference");

        let last = CodeClipboardData::preset("X", "Copy Promo Code");
        assert_eq!(last.next_label(), "Copy Booking Code");

        let unknown = CodeClipboardData::interactive_mock();
        assert_eq!(unknown.next_label(), "Copy Reference");
    }

    #[test]
    fn test_with_code_resets_copied_state() {
        let data = CodeClipboardData::copied_mock().with_code("NEW1");
        assert_eq!(data.code, "NEW1");
        assert!(!data.is_copied());
    }
}
