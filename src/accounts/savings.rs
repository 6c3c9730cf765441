// 🐷 Savings Account - interest-bearing, no overdraft

use super::{withdraw_from_balance, AccountCore, AccountError, BankAccount};
use crate::validation::{require_rate, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSavingsAccount")]
pub struct SavingsAccount {
    core: AccountCore,

    /// Annual interest rate in [0, 1]
    interest_rate: f64,
}

#[derive(Deserialize)]
struct RawSavingsAccount {
    core: AccountCore,
    interest_rate: f64,
}

impl TryFrom<RawSavingsAccount> for SavingsAccount {
    type Error = ValidationError;

    fn try_from(raw: RawSavingsAccount) -> Result<Self, Self::Error> {
        Ok(SavingsAccount {
            core: raw.core,
            interest_rate: require_rate("interest_rate", raw.interest_rate)?,
        })
    }
}

impl SavingsAccount {
    pub fn new(
        owner_name: impl Into<String>,
        account_number: &str,
        balance: f64,
        interest_rate: f64,
    ) -> Result<Self, ValidationError> {
        Ok(SavingsAccount {
            core: AccountCore::new(owner_name, account_number, balance)?,
            interest_rate: require_rate("interest_rate", interest_rate)?,
        })
    }

    pub fn interest_rate(&self) -> f64 {
        self.interest_rate
    }

    pub fn set_interest_rate(&mut self, interest_rate: f64) -> Result<(), ValidationError> {
        self.interest_rate = require_rate("interest_rate", interest_rate)?;
        Ok(())
    }

    /// balance × interest rate, recomputed on every call
    pub fn annual_interest(&self) -> f64 {
        self.core.balance() * self.interest_rate
    }
}

impl BankAccount for SavingsAccount {
    fn core(&self) -> &AccountCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AccountCore {
        &mut self.core
    }

    fn has_available_funds(&self, amount: f64) -> bool {
        self.core.balance() >= amount
    }

    fn withdraw(&mut self, amount: f64) -> Result<(), AccountError> {
        withdraw_from_balance(self, amount)
    }

    fn describe(&self) -> String {
        format!(
            "{}\nAnnual interest: {}",
            self.core.describe(),
            self.annual_interest()
        )
    }
}

impl fmt::Display for SavingsAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposit_then_withdraw() {
        let mut account = SavingsAccount::new("Vinicius", "12345-6", 3.0, 0.5).unwrap();

        account.deposit(100.0).unwrap();
        assert_eq!(account.balance(), 103.0);

        account.withdraw(2.0).unwrap();
        assert_eq!(account.balance(), 101.0);
        assert_eq!(account.annual_interest(), 50.5);
    }

    #[test]
    fn test_withdraw_more_than_balance_is_denied() {
        let mut account = SavingsAccount::new("Vinicius", "12345-6", 50.0, 0.1).unwrap();

        assert_eq!(account.withdraw(50.01), Err(AccountError::DeniedWithdrawal));
        assert_eq!(account.balance(), 50.0);

        assert!(account.withdraw(50.0).is_ok());
        assert_eq!(account.balance(), 0.0);
    }

    #[test]
    fn test_interest_rate_bounds() {
        let mut account = SavingsAccount::new("Vinicius", "12345-6", 10.0, 0.0).unwrap();
        assert!(account.set_interest_rate(1.0).is_ok());
        assert!(account.set_interest_rate(-0.01).is_err());
        assert!(account.set_interest_rate(1.01).is_err());
        assert_eq!(account.interest_rate(), 1.0);

        assert!(SavingsAccount::new("Vinicius", "12345-6", 10.0, 1.5).is_err());
    }

    #[test]
    fn test_describe_includes_interest() {
        let account = SavingsAccount::new("Vinicius", "12345-6", 101.0, 0.5).unwrap();
        assert_eq!(
            account.describe(),
            "Owner: Vinicius\nAccount number: 12345-6\nBalance: 101\nAnnual interest: 50.5"
        );
    }
}
