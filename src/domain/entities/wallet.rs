//! Wallet balance widget.

use crate::domain::errors::ConfigurationError;
use crate::domain::state::Configuration;

const COMPONENT: &str = "wallet";

/// Bounds used by the "randomize balance" control.
pub const RANDOM_BALANCE_RANGE: (f64, f64) = (0.0, 5_000.0);

/// Wallet widget configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletData {
    /// Heading shown above the amounts.
    pub title: String,
    /// ISO currency code.
    pub currency: String,
    /// Withdrawable balance.
    pub balance: f64,
    /// Bonus money, not withdrawable.
    pub bonus_balance: f64,
    /// Deposit/withdraw buttons are active.
    pub actions_enabled: bool,
}

impl WalletData {
    /// Creates a wallet with no bonus and active buttons.
    ///
    /// # Errors
    /// Returns `ConfigurationError` on blank text or a negative balance.
    pub fn new(
        title: impl Into<String>,
        currency: impl Into<String>,
        balance: f64,
    ) -> Result<Self, ConfigurationError> {
        let data = Self {
            title: title.into(),
            currency: currency.into(),
            balance,
            bonus_balance: 0.0,
            actions_enabled: true,
        };
        data.validate()?;
        Ok(data)
    }

    /// Regular wallet.
    #[must_use]
    pub fn default_mock() -> Self {
        Self {
            title: "Wallet".to_string(),
            currency: "XAF".to_string(),
            balance: 2_500.0,
            bonus_balance: 0.0,
            actions_enabled: true,
        }
    }

    /// Wallet with bonus money.
    #[must_use]
    pub fn bonus_mock() -> Self {
        Self {
            title: "Wallet + Bonus".to_string(),
            bonus_balance: 350.0,
            ..Self::default_mock()
        }
    }

    /// Wallet with nothing in it.
    #[must_use]
    pub fn empty_mock() -> Self {
        Self {
            title: "Empty Wallet".to_string(),
            balance: 0.0,
            ..Self::default_mock()
        }
    }

    /// Wallet with inactive buttons.
    #[must_use]
    pub fn disabled_mock() -> Self {
        Self {
            title: "Locked Wallet".to_string(),
            actions_enabled: false,
            ..Self::default_mock()
        }
    }

    /// Returns a copy with `balance`.
    #[must_use]
    pub fn with_balance(mut self, balance: f64) -> Self {
        self.balance = balance;
        self
    }

    /// Balance plus bonus.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.balance + self.bonus_balance
    }

    /// Formats `amount` with the wallet's currency.
    #[must_use]
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{amount:.2} {}", self.currency)
    }
}

fn check_amount(field: &str, amount: f64) -> Result<(), ConfigurationError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(ConfigurationError::invalid(
            COMPONENT,
            format!("{field} must be a non-negative amount, got {amount}"),
        ));
    }
    Ok(())
}

impl Configuration for WalletData {
    fn validate(&self) -> Result<(), ConfigurationError> {
        ConfigurationError::require_text(COMPONENT, "title", &self.title)?;
        ConfigurationError::require_text(COMPONENT, "currency", &self.currency)?;
        check_amount("balance", self.balance)?;
        check_amount("bonus_balance", self.bonus_balance)
    }
}
