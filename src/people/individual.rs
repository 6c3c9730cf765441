// 🧍 Individual - natural person with tax id and age

use super::{Payee, PersonDetails};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    pub details: PersonDetails,
    pub tax_id: String,
    pub age: u32,
}

impl Individual {
    pub fn new(details: PersonDetails, tax_id: impl Into<String>, age: u32) -> Self {
        Individual {
            details,
            tax_id: tax_id.into(),
            age,
        }
    }

    pub fn set_tax_id(&mut self, tax_id: impl Into<String>) {
        self.tax_id = tax_id.into();
    }
}

impl Payee for Individual {
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
        format!(
            "{}\nTax ID: {}\nAge: {}",
            self.details.describe(),
            self.tax_id,
            self.age
        )
    }
}
