// 🏦 Bank Registry - owns every account, dispatches by account number
//
// Accounts only come to exist through the registry: it issues the
// sequential ACCT numbers, keeps the accounts in insertion order, and
// hands out references, never ownership. Nothing deletes an account; the
// registry lives as long as the process.

use crate::account::{Account, AccountKind, InterestPosting};
use crate::error::{Result, TellerError};

/// First account number issued by a fresh registry.
const FIRST_ACCOUNT_ID: u32 = 1001;

// ============================================================================
// BANK
// ============================================================================

/// In-memory registry of all accounts.
pub struct Bank {
    /// All accounts, in creation order.
    accounts: Vec<Account>,

    /// Seed for the next account number.
    next_id: u32,
}

impl Bank {
    /// Create an empty registry. Numbering starts at ACCT1001.
    pub fn new() -> Self {
        Bank {
            accounts: Vec::new(),
            next_id: FIRST_ACCOUNT_ID,
        }
    }

    /// Issue the next account number. Every call advances the sequence.
    fn next_account_number(&mut self) -> String {
        let number = format!("ACCT{}", self.next_id);
        self.next_id += 1;
        number
    }

    /// Open a new account and return a reference to it.
    ///
    /// `term` is months for `FDR`, years for `DPS`, ignored for `Savings`.
    /// The account number is drawn before the label is checked, so a
    /// rejected label still advances the sequence.
    pub fn create(
        &mut self,
        name: &str,
        opening_balance: f64,
        type_label: &str,
        term: u32,
    ) -> Result<&Account> {
        let number = self.next_account_number();
        let kind = AccountKind::from_label(type_label, term)?;

        let index = self.accounts.len();
        self.accounts
            .push(Account::new(name.to_string(), number, kind, opening_balance));
        Ok(&self.accounts[index])
    }

    /// Deposit into the account with the given number.
    /// Returns the new balance.
    pub fn deposit(&mut self, number: &str, amount: f64) -> Result<f64> {
        Ok(self.find_mut(number)?.deposit(amount))
    }

    /// Withdraw from the account with the given number.
    /// Returns the remaining balance.
    pub fn withdraw(&mut self, number: &str, amount: f64) -> Result<f64> {
        self.find_mut(number)?.withdraw(amount)
    }

    /// Run one interest credit on the account with the given number.
    pub fn post_interest(&mut self, number: &str) -> Result<InterestPosting> {
        Ok(self.find_mut(number)?.post_interest())
    }

    /// Look up an account by number.
    pub fn account(&self, number: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.number == number)
    }

    /// All accounts, in creation order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Whether the registry holds no accounts yet.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Number of open accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Pretty JSON snapshot of every account, in creation order.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.accounts)
    }

    // Linear scan; the registry stays demo-sized.
    fn find_mut(&mut self, number: &str) -> Result<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|a| a.number == number)
            .ok_or_else(|| TellerError::AccountNotFound(number.to_string()))
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
