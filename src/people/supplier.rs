// 🚚 Supplier - tracks credit and debt, has no salary

use super::{Payee, PersonDetails};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub details: PersonDetails,
    pub credit_amount: f64,
    pub debt_amount: f64,
}

impl Supplier {
    pub fn new(details: PersonDetails, credit_amount: f64, debt_amount: f64) -> Self {
        Supplier {
            details,
            credit_amount,
            debt_amount,
        }
    }

    /// credit − debt
    pub fn obtain_balance(&self) -> f64 {
        self.credit_amount - self.debt_amount
    }
}

impl Payee for Supplier {
    fn details(&self) -> &PersonDetails {
        &self.details
    }

    fn details_mut(&mut self) -> &mut PersonDetails {
        &mut self.details
    }

    fn compute_salary(&self) -> Option<f64> {
        None
    }

    fn describe(&self) -> String {
        format!("{}\nBalance: {}", self.details.describe(), self.obtain_balance())
    }
}
