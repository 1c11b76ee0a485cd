// Error types for teller operations
//
// Everything the registry or an account can refuse is enumerated here.
// The CLI renders these as console messages and keeps the loop alive;
// none of them are fatal.

use thiserror::Error;

/// Result type alias for teller operations
pub type Result<T> = std::result::Result<T, TellerError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TellerError {
    /// Creation asked for a type label other than Savings/FDR/DPS.
    #[error("Invalid account type: {0}")]
    InvalidAccountType(String),

    /// Lookup by account number found nothing.
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// Withdrawal larger than the available balance.
    #[error("Insufficient funds: requested ${requested:.2}, available ${available:.2}")]
    InsufficientFunds { requested: f64, available: f64 },

    /// Fixed deposits refuse every withdrawal before maturity.
    #[error("Cannot withdraw from a fixed deposit before maturity")]
    EarlyWithdrawal,
}
