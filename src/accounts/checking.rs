// 🧾 Checking Account - overdraft that shrinks with use
//
// The overdraft limit is a balance of its own: whatever part of a withdrawal
// the account balance cannot cover is taken out of the limit, and the limit
// is never replenished (not even by later deposits).

use super::{AccountCore, AccountError, BankAccount};
use crate::validation::{require_finite, require_range, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Highest overdraft limit any checking account may hold
pub const MAX_OVERDRAFT_LIMIT: f64 = 1000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCheckingAccount")]
pub struct CheckingAccount {
    core: AccountCore,

    /// Remaining overdraft capacity in [0, MAX_OVERDRAFT_LIMIT]
    overdraft_limit: f64,
}

#[derive(Deserialize)]
struct RawCheckingAccount {
    core: AccountCore,
    overdraft_limit: f64,
}

impl TryFrom<RawCheckingAccount> for CheckingAccount {
    type Error = ValidationError;

    fn try_from(raw: RawCheckingAccount) -> Result<Self, Self::Error> {
        Ok(CheckingAccount {
            core: raw.core,
            overdraft_limit: validate_overdraft_limit(raw.overdraft_limit)?,
        })
    }
}

fn validate_overdraft_limit(value: f64) -> Result<f64, ValidationError> {
    require_range("overdraft_limit", value, 0.0, MAX_OVERDRAFT_LIMIT)
}

impl CheckingAccount {
    pub fn new(
        owner_name: impl Into<String>,
        account_number: &str,
        balance: f64,
        overdraft_limit: f64,
    ) -> Result<Self, ValidationError> {
        Ok(CheckingAccount {
            core: AccountCore::new(owner_name, account_number, balance)?,
            overdraft_limit: validate_overdraft_limit(overdraft_limit)?,
        })
    }

    /// Open with the maximum overdraft limit
    pub fn with_default_limit(
        owner_name: impl Into<String>,
        account_number: &str,
        balance: f64,
    ) -> Result<Self, ValidationError> {
        Self::new(owner_name, account_number, balance, MAX_OVERDRAFT_LIMIT)
    }

    pub fn max_overdraft_limit() -> f64 {
        MAX_OVERDRAFT_LIMIT
    }

    pub fn overdraft_limit(&self) -> f64 {
        self.overdraft_limit
    }

    pub fn set_overdraft_limit(&mut self, overdraft_limit: f64) -> Result<(), ValidationError> {
        self.overdraft_limit = validate_overdraft_limit(overdraft_limit)?;
        Ok(())
    }
}

impl BankAccount for CheckingAccount {
    fn core(&self) -> &AccountCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AccountCore {
        &mut self.core
    }

    fn has_available_funds(&self, amount: f64) -> bool {
        let balance = self.core.balance();
        amount <= balance || amount - balance <= self.overdraft_limit
    }

    fn withdraw(&mut self, amount: f64) -> Result<(), AccountError> {
        let amount = require_finite("amount", amount)?;
        let balance = self.core.balance();

        // Compare the shortfall itself so the limit can never go below zero
        let shortfall = amount - balance;

        if amount <= balance {
            self.core.adjust_balance(-amount)?;
        } else if shortfall <= self.overdraft_limit {
            self.overdraft_limit -= shortfall;
            self.core.balance = 0.0;
            debug!(
                account = self.core.account_number(),
                shortfall,
                overdraft_limit = self.overdraft_limit,
                "overdraft drawn"
            );
        } else {
            warn!(
                account = self.core.account_number(),
                amount,
                balance,
                overdraft_limit = self.overdraft_limit,
                "overdraft limit exceeded"
            );
            return Err(AccountError::OverdraftExceeded);
        }

        debug!(
            account = self.core.account_number(),
            amount,
            balance = self.core.balance(),
            "withdraw"
        );
        Ok(())
    }

    fn describe(&self) -> String {
        format!(
            "{}\nOverdraft limit: {}",
            self.core.describe(),
            self.overdraft_limit
        )
    }
}

impl fmt::Display for CheckingAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(balance: f64, limit: f64) -> CheckingAccount {
        CheckingAccount::new("Lucas", "12344-X", balance, limit).unwrap()
    }

    #[test]
    fn test_withdraw_within_balance_keeps_limit() {
        let mut acc = account(500.0, 300.0);
        acc.withdraw(500.0).unwrap();
        assert_eq!(acc.balance(), 0.0);
        assert_eq!(acc.overdraft_limit(), 300.0);
    }

    #[test]
    fn test_withdraw_into_overdraft_consumes_limit() {
        let mut acc = account(500.0, 1000.0);
        acc.withdraw(900.0).unwrap();
        assert_eq!(acc.balance(), 0.0);
        assert_eq!(acc.overdraft_limit(), 600.0);
    }

    #[test]
    fn test_withdraw_exactly_balance_plus_limit() {
        let mut acc = account(200.0, 100.0);
        acc.withdraw(300.0).unwrap();
        assert_eq!(acc.balance(), 0.0);
        assert_eq!(acc.overdraft_limit(), 0.0);

        // Nothing left on either side
        assert_eq!(acc.withdraw(0.01), Err(AccountError::OverdraftExceeded));
    }

    #[test]
    fn test_withdraw_beyond_limit_leaves_state() {
        let mut acc = account(100.0, 50.0);
        assert_eq!(acc.withdraw(150.01), Err(AccountError::OverdraftExceeded));
        assert_eq!(acc.balance(), 100.0);
        assert_eq!(acc.overdraft_limit(), 50.0);
    }

    #[test]
    fn test_limit_not_replenished_by_deposit() {
        let mut acc = account(500.0, 1000.0);
        acc.withdraw(900.0).unwrap();
        acc.deposit(200.0).unwrap();

        assert_eq!(acc.balance(), 200.0);
        assert_eq!(acc.overdraft_limit(), 600.0);
        assert!(acc.has_available_funds(800.0));
        assert!(!acc.has_available_funds(800.01));
    }

    #[test]
    fn test_overdraft_limit_bounds() {
        let mut acc = account(0.0, 0.0);
        assert!(acc.set_overdraft_limit(1000.0).is_ok());
        assert!(acc.set_overdraft_limit(0.0).is_ok());
        assert!(acc.set_overdraft_limit(1000.01).is_err());
        assert!(acc.set_overdraft_limit(-1.0).is_err());
        assert_eq!(acc.overdraft_limit(), 0.0);

        assert!(CheckingAccount::new("Lucas", "12344-X", 0.0, 1000.01).is_err());
    }

    #[test]
    fn test_default_limit_is_maximum() {
        let acc = CheckingAccount::with_default_limit("Lucas", "12344-X", 10.0).unwrap();
        assert_eq!(acc.overdraft_limit(), CheckingAccount::max_overdraft_limit());
        assert_eq!(acc.overdraft_limit(), 1000.0);
    }

    #[test]
    fn test_describe_shows_limit() {
        let mut acc = account(500.0, 1000.0);
        acc.withdraw(900.0).unwrap();
        acc.deposit(200.0).unwrap();
        assert_eq!(
            acc.describe(),
            "Owner: Lucas\nAccount number: 12344-X\nBalance: 200\nOverdraft limit: 600"
        );
    }

    #[test]
    fn test_shortfall_larger_than_limit_at_large_balance() {
        // balance + limit rounds up to 1e16 + 2, but the shortfall of 2 exceeds 1.5
        let mut acc = account(1e16, 1.5);
        assert_eq!(acc.withdraw(1e16 + 2.0), Err(AccountError::OverdraftExceeded));
        assert_eq!(acc.balance(), 1e16);
        assert_eq!(acc.overdraft_limit(), 1.5);
        assert!(!acc.has_available_funds(1e16 + 2.0));
    }

    #[test]
    fn test_withdraw_rejects_non_finite_amount() {
        let mut acc = account(100.0, 50.0);
        for amount in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = acc.withdraw(amount).unwrap_err();
            assert!(matches!(err, AccountError::Validation(ValidationError::NotFinite { .. })));
        }
        assert_eq!(acc.balance(), 100.0);
        assert_eq!(acc.overdraft_limit(), 50.0);
    }

    #[test]
    fn test_withdraw_that_overflows_balance_is_rejected() {
        let mut acc = account(f64::MAX, 0.0);
        let err = acc.withdraw(-f64::MAX).unwrap_err();
        assert!(matches!(err, AccountError::Validation(ValidationError::NotFinite { .. })));
        assert_eq!(acc.balance(), f64::MAX);
    }
}
