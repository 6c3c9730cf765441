// 💳 Account Model - one shared core, three withdrawal policies
//
// Each account has:
// - An AccountCore (owner, validated account number, balance)
// - A variant-specific field (interest rate, overdraft limit, yield rate)
// - Its own withdrawal rule, behind the BankAccount trait
//
// Account is the tagged union used when variants are mixed in one collection.

pub mod checking;
pub mod investment;
pub mod savings;

pub use checking::{CheckingAccount, MAX_OVERDRAFT_LIMIT};
pub use investment::InvestmentAccount;
pub use savings::SavingsAccount;

use crate::validation::{require_finite, validate_account_number, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::debug;

// ============================================================================
// ACCOUNT ERROR
// ============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccountError {
    /// Savings/investment withdrawal larger than the balance
    #[error("Withdrawal denied: the amount must be less than or equal to the account balance.")]
    DeniedWithdrawal,

    /// Checking withdrawal larger than balance plus overdraft limit
    #[error("Overdraft limit exceeded: the amount must be less than or equal to the balance plus the overdraft limit.")]
    OverdraftExceeded,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// ============================================================================
// ACCOUNT CORE
// ============================================================================

/// Fields every account carries.
///
/// `account_number` is private so it can only change through
/// [`AccountCore::set_account_number`]. Deserialization goes through
/// [`AccountCore::new`] as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAccountCore")]
pub struct AccountCore {
    owner_name: String,
    account_number: String,
    balance: f64,
}

/// Unchecked wire shape of [`AccountCore`]
#[derive(Deserialize)]
struct RawAccountCore {
    owner_name: String,
    account_number: String,
    balance: f64,
}

impl TryFrom<RawAccountCore> for AccountCore {
    type Error = ValidationError;

    fn try_from(raw: RawAccountCore) -> Result<Self, Self::Error> {
        AccountCore::new(raw.owner_name, &raw.account_number, raw.balance)
    }
}

impl AccountCore {
    /// Validate and build the shared payload
    pub fn new(
        owner_name: impl Into<String>,
        account_number: &str,
        balance: f64,
    ) -> Result<Self, ValidationError> {
        Ok(AccountCore {
            owner_name: owner_name.into(),
            account_number: validate_account_number(account_number)?,
            balance: require_finite("balance", balance)?,
        })
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn set_owner_name(&mut self, owner_name: impl Into<String>) {
        self.owner_name = owner_name.into();
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn set_account_number(&mut self, account_number: &str) -> Result<(), ValidationError> {
        self.account_number = validate_account_number(account_number)?;
        Ok(())
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn set_balance(&mut self, balance: f64) -> Result<(), ValidationError> {
        self.balance = require_finite("balance", balance)?;
        Ok(())
    }

    /// Balance mutation used by deposit/withdraw once the amount is checked.
    /// A result that overflows to infinity is rejected and nothing changes.
    pub(crate) fn adjust_balance(&mut self, delta: f64) -> Result<(), ValidationError> {
        self.balance = require_finite("balance", self.balance + delta)?;
        Ok(())
    }

    /// First lines of every description
    pub fn describe(&self) -> String {
        format!(
            "Owner: {}\nAccount number: {}\nBalance: {}",
            self.owner_name, self.account_number, self.balance
        )
    }
}

// ============================================================================
// BANK ACCOUNT TRAIT
// ============================================================================

/// Capability set shared by every account variant
pub trait BankAccount {
    fn core(&self) -> &AccountCore;

    fn core_mut(&mut self) -> &mut AccountCore;

    /// Would a withdrawal of `amount` be covered?
    fn has_available_funds(&self, amount: f64) -> bool;

    /// Take `amount` out, following the variant's policy.
    /// On error nothing is mutated.
    fn withdraw(&mut self, amount: f64) -> Result<(), AccountError>;

    /// Multi-line human-readable summary
    fn describe(&self) -> String;

    fn balance(&self) -> f64 {
        self.core().balance()
    }

    /// Add `amount` to the balance. No upper bound.
    fn deposit(&mut self, amount: f64) -> Result<(), AccountError> {
        let amount = require_finite("amount", amount)?;
        let core = self.core_mut();
        core.adjust_balance(amount)?;
        debug!(
            account = core.account_number(),
            amount,
            balance = core.balance(),
            "deposit"
        );
        Ok(())
    }
}

/// Shared rule for savings and investment: the balance must cover the amount
pub(crate) fn withdraw_from_balance<A: BankAccount + ?Sized>(
    account: &mut A,
    amount: f64,
) -> Result<(), AccountError> {
    let amount = require_finite("amount", amount)?;
    if !account.has_available_funds(amount) {
        tracing::warn!(
            account = account.core().account_number(),
            amount,
            balance = account.balance(),
            "withdrawal denied"
        );
        return Err(AccountError::DeniedWithdrawal);
    }

    let core = account.core_mut();
    core.adjust_balance(-amount)?;
    debug!(
        account = core.account_number(),
        amount,
        balance = core.balance(),
        "withdraw"
    );
    Ok(())
}

// ============================================================================
// ACCOUNT (tagged union)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Account {
    Savings(SavingsAccount),
    Checking(CheckingAccount),
    Investment(InvestmentAccount),
}

impl Account {
    pub fn kind(&self) -> &'static str {
        match self {
            Account::Savings(_) => "Savings",
            Account::Checking(_) => "Checking",
            Account::Investment(_) => "Investment",
        }
    }

    fn inner(&self) -> &dyn BankAccount {
        match self {
            Account::Savings(a) => a,
            Account::Checking(a) => a,
            Account::Investment(a) => a,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn BankAccount {
        match self {
            Account::Savings(a) => a,
            Account::Checking(a) => a,
            Account::Investment(a) => a,
        }
    }
}

impl BankAccount for Account {
    fn core(&self) -> &AccountCore {
        self.inner().core()
    }

    fn core_mut(&mut self) -> &mut AccountCore {
        self.inner_mut().core_mut()
    }

    fn has_available_funds(&self, amount: f64) -> bool {
        self.inner().has_available_funds(amount)
    }

    fn withdraw(&mut self, amount: f64) -> Result<(), AccountError> {
        self.inner_mut().withdraw(amount)
    }

    fn describe(&self) -> String {
        self.inner().describe()
    }
}

impl From<SavingsAccount> for Account {
    fn from(account: SavingsAccount) -> Self {
        Account::Savings(account)
    }
}

impl From<CheckingAccount> for Account {
    fn from(account: CheckingAccount) -> Self {
        Account::Checking(account)
    }
}

impl From<InvestmentAccount> for Account {
    fn from(account: InvestmentAccount) -> Self {
        Account::Investment(account)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

// ============================================================================
// TESTS
// ============================================================================
