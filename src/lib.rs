// Teller - Core Library
// In-memory banking ledger demo: three deposit products, a registry that
// issues account numbers, and a menu loop on top.

pub mod account;
pub mod bank;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use account::{
    Account, AccountKind, InterestPosting, FIXED_DEPOSIT_RATE, RECURRING_DEPOSIT_RATE,
    SAVINGS_RATE,
};
pub use bank::Bank;
pub use error::{Result, TellerError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
