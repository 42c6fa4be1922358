//! Component configuration error types.

use thiserror::Error;

/// Configuration invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum ConfigurationError {
    #[error("{component}: required field `{field}` is empty")]
    MissingField {
        component: &'static str,
        field: &'static str,
    },

    #[error("{component}: index {index} out of range for {len} items")]
    IndexOutOfRange {
        component: &'static str,
        index: usize,
        len: usize,
    },

    #[error("{component}: {reason}")]
    Invalid {
        component: &'static str,
        reason: String,
    },
}

impl ConfigurationError {
    /// Creates an invalid-value error.
    #[must_use]
    pub fn invalid(component: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            component,
            reason: reason.into(),
        }
    }

    /// Fails with `MissingField` when `value` is blank.
    ///
    /// # Errors
    /// Returns `MissingField` if `value` is empty or whitespace.
    pub fn require_text(
        component: &'static str,
        field: &'static str,
        value: &str,
    ) -> Result<(), Self> {
        if value.trim().is_empty() {
            return Err(Self::MissingField { component, field });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text() {
        assert!(ConfigurationError::require_text("button", "title", "Bet").is_ok());
        assert_eq!(
            ConfigurationError::require_text("button", "title", "   "),
            Err(ConfigurationError::MissingField {
                component: "button",
                field: "title"
            })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigurationError::IndexOutOfRange {
            component: "tab bar",
            index: 4,
            len: 2,
        };
        assert_eq!(err.to_string(), "tab bar: index 4 out of range for 2 items");
        assert_eq!(
            ConfigurationError::invalid("wallet", "negative balance").to_string(),
            "wallet: negative balance"
        );
    }
}
