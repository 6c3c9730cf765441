// 💼 Employees - payroll variants built by composition
//
// Administrator, Worker and Salesperson each embed an Employee.
// Salary formulas:
// - Employee:      base − base × tax / 100
// - Administrator: Employee salary + cost allowance
// - Worker:        base + production × commission   (raw base, tax not applied)
// - Salesperson:   base + sales × commission        (raw base, tax not applied)

use super::{Payee, PersonDetails};
use serde::{Deserialize, Serialize};

// ============================================================================
// EMPLOYEE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub details: PersonDetails,
    pub sector_code: u32,
    pub base_salary: f64,

    /// Percentage, e.g. 10.0 for 10%
    pub tax_percent: f64,
}

impl Employee {
    pub fn new(details: PersonDetails, sector_code: u32, base_salary: f64, tax_percent: f64) -> Self {
        Employee {
            details,
            sector_code,
            base_salary,
            tax_percent,
        }
    }

    /// Base salary after tax
    pub fn net_salary(&self) -> f64 {
        self.base_salary - self.base_salary * (self.tax_percent / 100.0)
    }

    /// Employee block of a description, showing `salary` as the net salary
    /// so each variant reports its own figure.
    fn describe_with_salary(&self, salary: f64) -> String {
        format!(
            "{}\nSector code: {}\nBase salary: {}\nTax: {}%\nNet salary: {}",
            self.details.describe(),
            self.sector_code,
            self.base_salary,
            self.tax_percent,
            salary
        )
    }
}

impl Payee for Employee {
    fn details(&self) -> &PersonDetails {
        &self.details
    }

    fn details_mut(&mut self) -> &mut PersonDetails {
        &mut self.details
    }

    fn compute_salary(&self) -> Option<f64> {
        Some(self.net_salary())
    }

    fn describe(&self) -> String {
        self.describe_with_salary(self.net_salary())
    }
}

// ============================================================================
// ADMINISTRATOR
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Administrator {
    pub employee: Employee,
    pub cost_allowance: f64,
}

impl Administrator {
    pub fn new(employee: Employee, cost_allowance: f64) -> Self {
        Administrator {
            employee,
            cost_allowance,
        }
    }

    pub fn salary(&self) -> f64 {
        self.employee.net_salary() + self.cost_allowance
    }
}

impl Payee for Administrator {
    fn details(&self) -> &PersonDetails {
        &self.employee.details
    }

    fn details_mut(&mut self) -> &mut PersonDetails {
        &mut self.employee.details
    }

    fn compute_salary(&self) -> Option<f64> {
        Some(self.salary())
    }

    fn describe(&self) -> String {
        format!(
            "{}\nCost allowance: {:.2}",
            self.employee.describe_with_salary(self.salary()),
            self.cost_allowance
        )
    }
}

// ============================================================================
// WORKER
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    pub employee: Employee,
    pub production_value: f64,
    pub commission_rate: f64,
}

impl Worker {
    pub fn new(employee: Employee, production_value: f64, commission_rate: f64) -> Self {
        Worker {
            employee,
            production_value,
            commission_rate,
        }
    }

    pub fn salary(&self) -> f64 {
        self.employee.base_salary + self.production_value * self.commission_rate
    }
}

impl Payee for Worker {
    fn details(&self) -> &PersonDetails {
        &self.employee.details
    }

    fn details_mut(&mut self) -> &mut PersonDetails {
        &mut self.employee.details
    }

    fn compute_salary(&self) -> Option<f64> {
        Some(self.salary())
    }

    fn describe(&self) -> String {
        self.employee.describe_with_salary(self.salary())
    }
}

// ============================================================================
// SALESPERSON
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Salesperson {
    pub employee: Employee,
    pub sales_value: f64,
    pub commission_rate: f64,
}

impl Salesperson {
    pub fn new(employee: Employee, sales_value: f64, commission_rate: f64) -> Self {
        Salesperson {
            employee,
            sales_value,
            commission_rate,
        }
    }

    pub fn salary(&self) -> f64 {
        self.employee.base_salary + self.sales_value * self.commission_rate
    }

    /// Salespeople carry no balance
    pub fn obtain_balance(&self) -> f64 {
        0.0
    }
}

impl Payee for Salesperson {
    fn details(&self) -> &PersonDetails {
        &self.employee.details
    }

    fn details_mut(&mut self) -> &mut PersonDetails {
        &mut self.employee.details
    }

    fn compute_salary(&self) -> Option<f64> {
        Some(self.salary())
    }

    fn describe(&self) -> String {
        format!(
            "{}\nSales value: {}\nCommission: {}\nSalary: {}",
            self.employee.describe_with_salary(self.salary()),
            self.sales_value,
            self.commission_rate,
            self.salary()
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(base_salary: f64, tax_percent: f64) -> Employee {
        Employee::new(
            PersonDetails::new("Maria", "Rua D, 5", "555-0110"),
            7,
            base_salary,
            tax_percent,
        )
    }

    #[test]
    fn test_employee_net_salary() {
        assert_eq!(employee(1000.0, 10.0).compute_salary(), Some(900.0));
        assert_eq!(employee(1000.0, 0.0).compute_salary(), Some(1000.0));
        assert_eq!(employee(2000.0, 100.0).compute_salary(), Some(0.0));
    }

    #[test]
    fn test_administrator_adds_allowance_to_net_salary() {
        let admin = Administrator::new(employee(1000.0, 10.0), 250.0);
        assert_eq!(admin.compute_salary(), Some(1150.0));
    }

    #[test]
    fn test_worker_uses_raw_base_salary() {
        let worker = Worker::new(employee(1000.0, 10.0), 2000.0, 0.5);
        // tax is ignored: 1000 + 2000 × 0.5
        assert_eq!(worker.compute_salary(), Some(2000.0));
    }

    #[test]
    fn test_salesperson_salary_and_balance() {
        let mut seller = Salesperson::new(employee(1000.0, 25.0), 4000.0, 0.25);
        assert_eq!(seller.compute_salary(), Some(2000.0));
        assert_eq!(seller.obtain_balance(), 0.0);

        seller.sales_value = 0.0;
        assert_eq!(seller.compute_salary(), Some(1000.0));
        assert_eq!(seller.obtain_balance(), 0.0);
    }

    #[test]
    fn test_variants_report_their_own_salary() {
        let worker = Worker::new(employee(1000.0, 10.0), 2000.0, 0.5);
        assert!(worker.describe().ends_with("Net salary: 2000"));

        let admin = Administrator::new(employee(1000.0, 10.0), 250.0);
        let text = admin.describe();
        assert!(text.contains("Net salary: 1150"));
        assert!(text.ends_with("Cost allowance: 250.00"));
    }

    #[test]
    fn test_employee_describe_layout() {
        assert_eq!(
            employee(1000.0, 10.0).describe(),
            "Name: Maria\nAddress: Rua D, 5\nPhone: 555-0110\n\
             Sector code: 7\nBase salary: 1000\nTax: 10%\nNet salary: 900"
        );
    }

    #[test]
    fn test_details_reachable_through_embedded_employee() {
        let mut seller = Salesperson::new(employee(1000.0, 0.0), 0.0, 0.0);
        seller.details_mut().set_phone("555-0999");
        assert_eq!(seller.employee.details.phone, "555-0999");
        assert_eq!(seller.name(), "Maria");
    }
}
