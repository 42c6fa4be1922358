//! Segmented progress card with a completion check.

use crate::domain::errors::ConfigurationError;
use crate::domain::state::Configuration;

const COMPONENT: &str = "progress check";

/// Progress of the tracked task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressStatus {
    /// Not started.
    Pending,
    /// Some segments done.
    Incomplete {
        /// Finished segments.
        completed: u32,
        /// All segments.
        total: u32,
    },
    /// Done.
    Completed,
}

impl ProgressStatus {
    /// Short label for the observation panel.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Incomplete { .. } => "Incomplete",
            Self::Completed => "Completed",
        }
    }
}

/// Progress check configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressCheckData {
    /// Task status.
    pub status: ProgressStatus,
    /// Small caption above the title.
    pub header_text: String,
    /// Card title.
    pub title: String,
    /// Explanation below the bar.
    pub subtitle: String,
    /// Disabled cards are greyed out.
    pub is_enabled: bool,
}

impl ProgressCheckData {
    /// Creates an enabled card.
    ///
    /// # Errors
    /// Returns `ConfigurationError` on blank text or inconsistent segments.
    pub fn new(
        status: ProgressStatus,
        header_text: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        let data = Self {
            status,
            header_text: header_text.into(),
            title: title.into(),
            subtitle: subtitle.into(),
            is_enabled: true,
        };
        data.validate()?;
        Ok(data)
    }

    /// Win boost that has not started.
    #[must_use]
    pub fn pending_mock() -> Self {
        Self {
            status: ProgressStatus::Pending,
            header_text: "Win Boost".to_string(),
            title: "Boost Your Winnings".to_string(),
            subtitle: "Add 3 more selections to unlock a 10% boost.".to_string(),
            is_enabled: true,
        }
    }

    /// Verification halfway done.
    #[must_use]
    pub fn kyc_mock() -> Self {
        Self {
            status: ProgressStatus::Incomplete {
                completed: 2,
                total: 4,
            },
            header_text: "Account Verification".to_string(),
            title: "Complete Your Profile".to_string(),
            subtitle: "2 of 4 verification steps completed. Upload documents to continue."
                .to_string(),
            is_enabled: true,
        }
    }

    /// Finished challenge.
    #[must_use]
    pub fn completed_mock() -> Self {
        Self {
            status: ProgressStatus::Completed,
            header_text: "Bonus Challenge".to_string(),
            title: "Welcome Bonus Unlocked".to_string(),
            subtitle: "Your bonus has been credited.".to_string(),
            is_enabled: true,
        }
    }

    /// Greyed out card.
    #[must_use]
    pub fn disabled_mock() -> Self {
        Self {
            is_enabled: false,
            ..Self::pending_mock()
        }
    }

    /// Returns a copy with `status`.
    #[must_use]
    pub fn with_status(mut self, status: ProgressStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns the status one segment further along.
    ///
    /// Pending starts a task of `default_total` segments. The last segment
    /// completes the task.
    #[must_use]
    pub fn advanced(&self, default_total: u32) -> ProgressStatus {
        match self.status {
            ProgressStatus::Pending if default_total <= 1 => ProgressStatus::Completed,
            ProgressStatus::Pending => ProgressStatus::Incomplete {
                completed: 1,
                total: default_total,
            },
            ProgressStatus::Incomplete { completed, total } if completed + 1 >= total => {
                ProgressStatus::Completed
            }
            ProgressStatus::Incomplete { completed, total } => ProgressStatus::Incomplete {
                completed: completed + 1,
                total,
            },
            ProgressStatus::Completed => ProgressStatus::Completed,
        }
    }

    /// Fraction of segments done, `0.0..=1.0`.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        match self.status {
            ProgressStatus::Pending => 0.0,
            ProgressStatus::Incomplete { completed, total } => {
                f64::from(completed) / f64::from(total.max(1))
            }
            ProgressStatus::Completed => 1.0,
        }
    }
}

impl Configuration for ProgressCheckData {
    fn validate(&self) -> Result<(), ConfigurationError> {
        ConfigurationError::require_text(COMPONENT, "header_text", &self.header_text)?;
        ConfigurationError::require_text(COMPONENT, "title", &self.title)?;
        if let ProgressStatus::Incomplete { completed, total } = self.status {
            if total == 0 {
                return Err(ConfigurationError::invalid(
                    COMPONENT,
                    "total segments must be positive",
                ));
            }
            if completed > total {
                return Err(ConfigurationError::invalid(
                    COMPONENT,
                    format!("{completed} completed segments exceed total of {total}"),
                ));
            }
        }
        Ok(())
    }
}
