use clap::Parser;
use engine::{
    CategorySet, ExpenseLedger, FileStore, InvestmentParameters, LoanParameters,
    RetirementParameters, SavingsInputs,
};

use crate::{
    cli::{Cli, Command, ExpenseCommand},
    error::Result,
    settings::Settings,
};

mod cli;
mod error;
mod report;
mod settings;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::new(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "fincalc={level},server={level},engine={level}",
            level = settings.app.level
        ))
        .with_writer(std::io::stderr)
        .init();

    let currency = settings.currency;

    match cli.command {
        Command::Loan(args) => {
            let schedule = engine::compute_schedule(&LoanParameters {
                principal: args.amount,
                annual_rate_percent: args.rate,
                term_years: args.years,
            })?;
            print!("{}", report::loan(&schedule, currency));
        }
        Command::Retirement(args) => {
            let projection = engine::retirement(&RetirementParameters {
                current_age: args.current_age,
                retirement_age: args.retirement_age,
                current_savings: args.savings,
                annual_contribution: args.contribution,
                expected_return_percent: args.rate,
            })?;
            print!("{}", report::growth(&projection.schedule, "Age", currency));
        }
        Command::Investment(args) => {
            let projection = engine::investment(&InvestmentParameters {
                initial_investment: args.initial,
                monthly_contribution: args.monthly,
                years: args.years,
                annual_return_percent: args.rate,
            })?;
            print!("{}", report::growth(&projection.schedule, "Year", currency));
        }
        Command::Expense(expense) => {
            let mut ledger = open_ledger(&settings, cli.ledger_dir.as_deref())?;
            match expense.command {
                ExpenseCommand::Add(args) => {
                    let amount = engine::parse_amount(&args.amount)?;
                    let record =
                        ledger.add_expense(&args.category, amount, args.description.as_deref())?;
                    println!("Added {} ({record})", record.id);
                }
                ExpenseCommand::Remove(args) => match ledger.remove_expense(&args.id) {
                    Some(record) => println!("Removed {} ({record})", record.id),
                    None => println!("No expense with id {}", args.id),
                },
                ExpenseCommand::List => {
                    print!(
                        "{}",
                        report::expenses(ledger.records(), ledger.total_expenses(), currency)
                    );
                }
                ExpenseCommand::Totals => {
                    print!(
                        "{}",
                        report::totals(
                            &ledger.category_totals(),
                            ledger.total_expenses(),
                            currency
                        )
                    );
                }
            }
        }
        Command::Savings(args) => {
            let ledger = open_ledger(&settings, cli.ledger_dir.as_deref())?;
            let inputs = SavingsInputs::parse(&args.income, &args.rate, &args.years);
            let projection = engine::savings_projection(&inputs, &ledger);
            print!("{}", report::savings(&projection, currency));
        }
        Command::Serve(args) => {
            let ledger = open_ledger(&settings, cli.ledger_dir.as_deref())?;
            let configured = settings.server.as_ref();
            let bind = args
                .bind
                .or_else(|| configured.and_then(|s| s.bind.clone()))
                .unwrap_or_else(|| "127.0.0.1".to_string());
            let port = args.port.or(configured.map(|s| s.port)).unwrap_or(3000);

            let listener = tokio::net::TcpListener::bind(format!("{bind}:{port}")).await?;
            server::run_with_listener(ledger, listener).await?;
        }
    }

    Ok(())
}

fn open_ledger(settings: &Settings, dir_override: Option<&str>) -> Result<ExpenseLedger> {
    let dir = dir_override.unwrap_or(&settings.ledger.dir);
    let categories = match &settings.ledger.categories {
        Some(names) => CategorySet::new(names.iter().cloned())?,
        None => CategorySet::default(),
    };
    tracing::info!("opening expense ledger in {dir}");
    Ok(ExpenseLedger::open(FileStore::new(dir), categories)?)
}
