// 🏢 Company - legal entity with federal and state registrations

use super::{Payee, PersonDetails};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub details: PersonDetails,
    pub company_tax_id: String,
    pub state_registration: String,
}

impl Company {
    pub fn new(
        details: PersonDetails,
        company_tax_id: impl Into<String>,
        state_registration: impl Into<String>,
    ) -> Self {
        Company {
            details,
            company_tax_id: company_tax_id.into(),
            state_registration: state_registration.into(),
        }
    }

    pub fn set_company_tax_id(&mut self, company_tax_id: impl Into<String>) {
        self.company_tax_id = company_tax_id.into();
    }

    pub fn set_state_registration(&mut self, state_registration: impl Into<String>) {
        self.state_registration = state_registration.into();
    }
}

impl Payee for Company {
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
            "{}\nCompany tax ID: {}\nState registration: {}",
            self.details.describe(),
            self.company_tax_id,
            self.state_registration
        )
    }
}
