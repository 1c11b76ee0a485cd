// 💳 Account Entity - one customer, one deposit product
//
// An account is identified by its registry-issued number ("ACCT1001", ...)
// and carries one of three deposit products. The product decides the
// interest formula and the withdrawal policy; identity and balance handling
// are shared.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, TellerError};

// ============================================================================
// INTEREST RATES
// ============================================================================

/// Annual interest rate for savings accounts, in percent.
pub const SAVINGS_RATE: f64 = 4.5;

/// Annual interest rate for fixed deposits (FDR), in percent.
pub const FIXED_DEPOSIT_RATE: f64 = 7.0;

/// Annual interest rate for recurring deposits (DPS), in percent.
pub const RECURRING_DEPOSIT_RATE: f64 = 8.5;

// ============================================================================
// ACCOUNT KIND
// ============================================================================

/// The three deposit products on offer.
///
/// A closed set: interest and withdrawal rules dispatch on this enum, so
/// adding a product means adding a variant and the compiler walks every
/// match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AccountKind {
    /// Ordinary savings account, free withdrawals.
    Savings,

    /// Fixed deposit (FDR): funds locked until maturity, term in months.
    FixedDeposit { term_months: u32 },

    /// Recurring deposit (DPS): term in years, informational only.
    RecurringDeposit { term_years: u32 },
}

impl AccountKind {
    /// Build a kind from a CLI type label (`Savings` / `FDR` / `DPS`).
    ///
    /// `term` is months for `FDR`, years for `DPS`, ignored for `Savings`.
    pub fn from_label(label: &str, term: u32) -> Result<Self> {
        match label {
            "Savings" => Ok(AccountKind::Savings),
            "FDR" => Ok(AccountKind::FixedDeposit { term_months: term }),
            "DPS" => Ok(AccountKind::RecurringDeposit { term_years: term }),
            other => Err(TellerError::InvalidAccountType(other.to_string())),
        }
    }

    /// The product label, as shown in displays and accepted by the CLI.
    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Savings => "Savings",
            AccountKind::FixedDeposit { .. } => "FDR",
            AccountKind::RecurringDeposit { .. } => "DPS",
        }
    }

    /// Annual rate in percent for this product.
    pub fn rate(&self) -> f64 {
        match self {
            AccountKind::Savings => SAVINGS_RATE,
            AccountKind::FixedDeposit { .. } => FIXED_DEPOSIT_RATE,
            AccountKind::RecurringDeposit { .. } => RECURRING_DEPOSIT_RATE,
        }
    }
}

// ============================================================================
// INTEREST POSTING
// ============================================================================

/// What one interest run credited: the interest itself and the new total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestPosting {
    pub interest: f64,
    pub balance: f64,
}

// ============================================================================
// ACCOUNT ENTITY
// ============================================================================

/// A single customer account.
///
/// Name, number and kind are fixed at creation; only the balance moves,
/// and only through [`deposit`](Account::deposit),
/// [`withdraw`](Account::withdraw) and
/// [`post_interest`](Account::post_interest).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Owner's display name.
    pub name: String,

    /// Registry-issued account number ("ACCT1001", ...).
    pub number: String,

    /// The deposit product this account holds.
    pub kind: AccountKind,

    /// Current balance. Kept private so every mutation goes through the
    /// operations below.
    balance: f64,

    /// When the account was opened.
    pub opened_at: DateTime<Utc>,
}

impl Account {
    /// Open a new account with an opening balance.
    pub fn new(name: String, number: String, kind: AccountKind, opening_balance: f64) -> Self {
        Account {
            name,
            number,
            kind,
            balance: opening_balance,
            opened_at: Utc::now(),
        }
    }

    /// Current balance.
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Add `amount` to the balance. Returns the new balance.
    pub fn deposit(&mut self, amount: f64) -> f64 {
        self.balance += amount;
        self.balance
    }

    /// Take `amount` out of the account.
    ///
    /// Savings and DPS pay out whenever the balance covers the amount; FDR
    /// refuses every withdrawal before maturity. A refused withdrawal
    /// leaves the balance untouched.
    pub fn withdraw(&mut self, amount: f64) -> Result<f64> {
        if let AccountKind::FixedDeposit { .. } = self.kind {
            return Err(TellerError::EarlyWithdrawal);
        }
        if amount > self.balance {
            return Err(TellerError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(self.balance)
    }

    /// Credit one interest run to the account.
    ///
    /// - Savings: `balance * 4.5%` per run.
    /// - FDR: `balance * 7.0%` prorated by `term_months / 12`. Intended to
    ///   run once at maturity, but nothing tracks the "once" — a repeated
    ///   run credits again. Operator discipline required.
    /// - DPS: `balance * 8.5%` per run; the term plays no part.
    pub fn post_interest(&mut self) -> InterestPosting {
        let interest = match self.kind {
            AccountKind::Savings => self.balance * SAVINGS_RATE / 100.0,
            AccountKind::FixedDeposit { term_months } => {
                self.balance * FIXED_DEPOSIT_RATE / 100.0 * (f64::from(term_months) / 12.0)
            }
            AccountKind::RecurringDeposit { .. } => {
                self.balance * RECURRING_DEPOSIT_RATE / 100.0
            }
        };
        self.balance += interest;
        InterestPosting {
            interest,
            balance: self.balance,
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Account Number: {}", self.number)?;
        writeln!(f, "Balance: ${:.2}", self.balance)?;
        writeln!(f, "Type: {}", self.kind.label())?;
        match self.kind {
            AccountKind::Savings => {}
            AccountKind::FixedDeposit { term_months } => {
                writeln!(f, "Term: {} months", term_months)?;
            }
            AccountKind::RecurringDeposit { term_years } => {
                writeln!(f, "Term: {} years", term_years)?;
            }
        }
        writeln!(f, "Interest Rate: {}%", self.kind.rate())?;
        write!(f, "Opened: {}", self.opened_at.format("%Y-%m-%d %H:%M UTC"))
    }
}

// ============================================================================
// TESTS
// ============================================================================
