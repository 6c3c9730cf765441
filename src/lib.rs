// Bank & Payroll - Core Library
// Two independent object models: bank accounts and people/payroll

pub mod validation;
pub mod accounts;
pub mod people;

// Re-export commonly used types
pub use validation::ValidationError;
pub use accounts::{
    Account, AccountCore, AccountError, BankAccount,
    SavingsAccount, CheckingAccount, InvestmentAccount,
    MAX_OVERDRAFT_LIMIT,
};
pub use people::{
    Person, PersonDetails, Payee,
    Supplier, Employee, Administrator, Worker, Salesperson,
    Individual, Company,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
