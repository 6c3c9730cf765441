use anyhow::Result;
use std::env;
use tracing_subscriber::EnvFilter;

use bank_payroll::{
    Account, AccountError, BankAccount, CheckingAccount, Employee, InvestmentAccount, Payee,
    Person, PersonDetails, Salesperson, SavingsAccount, Supplier, Worker,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    run(args.get(1).map(String::as_str))
}

fn run(mode: Option<&str>) -> Result<()> {
    match mode {
        None | Some("bank") => run_bank(),
        Some("payroll") => run_payroll(),
        Some("json") => run_json()?,
        Some(other) => {
            anyhow::bail!("unknown mode: {other} (usage: bank-payroll [bank|payroll|json])")
        }
    }

    Ok(())
}

fn run_bank() {
    println!("🏦 Accounts");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // Stops at the first failure, like a single try block
    if let Err(e) = bank_scenario() {
        println!("{}", e);
    }
}

fn bank_scenario() -> Result<(), AccountError> {
    let mut checking = CheckingAccount::new("Lucas", "12344-X", 500.0, 1000.0)?;
    checking.withdraw(900.0)?;
    checking.deposit(200.0)?;
    println!("{}\n", checking);

    let mut savings = SavingsAccount::new("Vinicius", "12345-6", 3.0, 0.5)?;
    savings.deposit(100.0)?;
    savings.withdraw(2.0)?;
    println!("{}\n", savings);

    let mut investment = InvestmentAccount::new("Barbosa", "12345-9", 200.0, 0.75)?;
    investment.deposit(100.0)?;
    investment.withdraw(200.0)?;
    println!("{}", investment);

    Ok(())
}

fn demo_people() -> Vec<Person> {
    let supplier = Supplier::new(
        PersonDetails::new("João", "Rua das Flores, 30", "2000-1000"),
        1000.0,
        3000.0,
    );

    let maria = PersonDetails::new("Maria", "Av. Central, 25", "1800-5000");
    let worker = Worker::new(Employee::new(maria, 1209, 1800.0, 5.0), 12312.0, 0.05);

    let pedro = PersonDetails::new("Pedro", "Rua Nova, 35", "2200-6000");
    let salesperson = Salesperson::new(Employee::new(pedro, 4, 2200.0, 4.0), 6000.0, 0.04);

    vec![supplier.into(), worker.into(), salesperson.into()]
}

fn run_payroll() {
    println!("👥 Payroll");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    for person in demo_people() {
        match person.compute_salary() {
            Some(salary) => println!("{} ({}): salary {}", person.name(), person.kind(), salary),
            None => println!("{} ({}): no salary", person.name(), person.kind()),
        }
        if let Some(balance) = person.obtain_balance() {
            println!("   balance {}", balance);
        }
    }
}

fn run_json() -> Result<()> {
    let accounts: Vec<Account> = vec![
        CheckingAccount::new("Lucas", "12344-X", 500.0, 1000.0)?.into(),
        SavingsAccount::new("Vinicius", "12345-6", 3.0, 0.5)?.into(),
        InvestmentAccount::new("Barbosa", "12345-9", 200.0, 0.75)?.into(),
    ];

    let snapshot = serde_json::json!({
        "version": bank_payroll::VERSION,
        "accounts": accounts,
        "people": demo_people(),
    });
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
