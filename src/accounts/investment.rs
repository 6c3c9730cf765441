// 📈 Investment Account - yield-bearing, no overdraft

use super::{withdraw_from_balance, AccountCore, AccountError, BankAccount};
use crate::validation::{require_rate, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawInvestmentAccount")]
pub struct InvestmentAccount {
    core: AccountCore,

    /// Annual yield rate in [0, 1]
    yield_rate: f64,
}

#[derive(Deserialize)]
struct RawInvestmentAccount {
    core: AccountCore,
    yield_rate: f64,
}

impl TryFrom<RawInvestmentAccount> for InvestmentAccount {
    type Error = ValidationError;

    fn try_from(raw: RawInvestmentAccount) -> Result<Self, Self::Error> {
        Ok(InvestmentAccount {
            core: raw.core,
            yield_rate: require_rate("yield_rate", raw.yield_rate)?,
        })
    }
}

impl InvestmentAccount {
    pub fn new(
        owner_name: impl Into<String>,
        account_number: &str,
        balance: f64,
        yield_rate: f64,
    ) -> Result<Self, ValidationError> {
        Ok(InvestmentAccount {
            core: AccountCore::new(owner_name, account_number, balance)?,
            yield_rate: require_rate("yield_rate", yield_rate)?,
        })
    }

    pub fn yield_rate(&self) -> f64 {
        self.yield_rate
    }

    pub fn set_yield_rate(&mut self, yield_rate: f64) -> Result<(), ValidationError> {
        self.yield_rate = require_rate("yield_rate", yield_rate)?;
        Ok(())
    }

    pub fn annual_yield(&self) -> f64 {
        self.core.balance() * self.yield_rate
    }
}

impl BankAccount for InvestmentAccount {
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
        format!("{}\nAnnual yield: {}", self.core.describe(), self.annual_yield())
    }
}

impl fmt::Display for InvestmentAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
