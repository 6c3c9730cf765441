// 👥 People Model - contact details plus payroll derivations
//
// Each person has:
// - PersonDetails (name, address, phone)
// - Variant-specific fields (credit/debt, salary inputs, tax ids)
// - An optional salary, behind the Payee trait
//
// Employee variants embed an Employee instead of inheriting from it.
// Person is the tagged union used for mixed collections.

pub mod company;
pub mod employee;
pub mod individual;
pub mod supplier;

pub use company::Company;
pub use employee::{Administrator, Employee, Salesperson, Worker};
pub use individual::Individual;
pub use supplier::Supplier;

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// PERSON DETAILS
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonDetails {
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl PersonDetails {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        PersonDetails {
            name: name.into(),
            address: address.into(),
            phone: phone.into(),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }

    pub fn describe(&self) -> String {
        format!(
            "Name: {}\nAddress: {}\nPhone: {}",
            self.name, self.address, self.phone
        )
    }
}

// ============================================================================
// PAYEE TRAIT
// ============================================================================

/// Capability set shared by every person variant
pub trait Payee {
    fn details(&self) -> &PersonDetails;

    fn details_mut(&mut self) -> &mut PersonDetails;

    /// `None` for variants without a salary (suppliers, individuals, companies)
    fn compute_salary(&self) -> Option<f64>;

    fn describe(&self) -> String;

    fn name(&self) -> &str {
        &self.details().name
    }
}

// ============================================================================
// PERSON (tagged union)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Person {
    Supplier(Supplier),
    Employee(Employee),
    Administrator(Administrator),
    Worker(Worker),
    Salesperson(Salesperson),
    Individual(Individual),
    Company(Company),
}

impl Person {
    pub fn kind(&self) -> &'static str {
        match self {
            Person::Supplier(_) => "Supplier",
            Person::Employee(_) => "Employee",
            Person::Administrator(_) => "Administrator",
            Person::Worker(_) => "Worker",
            Person::Salesperson(_) => "Salesperson",
            Person::Individual(_) => "Individual",
            Person::Company(_) => "Company",
        }
    }

    /// Balance for the variants that track one (supplier, salesperson)
    pub fn obtain_balance(&self) -> Option<f64> {
        match self {
            Person::Supplier(p) => Some(p.obtain_balance()),
            Person::Salesperson(p) => Some(p.obtain_balance()),
            _ => None,
        }
    }

    fn inner(&self) -> &dyn Payee {
        match self {
            Person::Supplier(p) => p,
            Person::Employee(p) => p,
            Person::Administrator(p) => p,
            Person::Worker(p) => p,
            Person::Salesperson(p) => p,
            Person::Individual(p) => p,
            Person::Company(p) => p,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Payee {
        match self {
            Person::Supplier(p) => p,
            Person::Employee(p) => p,
            Person::Administrator(p) => p,
            Person::Worker(p) => p,
            Person::Salesperson(p) => p,
            Person::Individual(p) => p,
            Person::Company(p) => p,
        }
    }
}

impl Payee for Person {
    fn details(&self) -> &PersonDetails {
        self.inner().details()
    }

    fn details_mut(&mut self) -> &mut PersonDetails {
        self.inner_mut().details_mut()
    }

    fn compute_salary(&self) -> Option<f64> {
        self.inner().compute_salary()
    }

    fn describe(&self) -> String {
        self.inner().describe()
    }
}

macro_rules! person_conversions {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Person {
                fn from(value: $variant) -> Self {
                    Person::$variant(value)
                }
            }

            impl fmt::Display for $variant {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&Payee::describe(self))
                }
            }
        )*
    };
}

person_conversions!(
    Supplier,
    Employee,
    Administrator,
    Worker,
    Salesperson,
    Individual,
    Company,
);

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

// ============================================================================
// TESTS
// ============================================================================
