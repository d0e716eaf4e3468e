use clap::{Args, Parser, Subcommand};

/// Defaults mirror the values pre-filled in the calculator forms.
#[derive(Parser, Debug)]
#[command(name = "fincalc")]
#[command(about = "Loan, retirement and investment calculators with an expense ledger")]
pub struct Cli {
    /// Optional config file path (TOML).
    #[arg(long, env = "FINCALC_CONFIG")]
    pub config: Option<String>,

    /// Override the directory holding the expense ledger.
    #[arg(long)]
    pub ledger_dir: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fixed-payment loan schedule.
    Loan(LoanArgs),
    /// Yearly contributions until retirement.
    Retirement(RetirementArgs),
    /// Monthly contributions with monthly compounding.
    Investment(InvestmentArgs),
    /// Manage the expense ledger.
    Expense(Expense),
    /// Future value of what is left after expenses.
    Savings(SavingsArgs),
    /// Run the HTTP API.
    Serve(ServeArgs),
}

#[derive(Args, Debug)]
pub struct LoanArgs {
    #[arg(long, default_value_t = 250_000.0)]
    pub amount: f64,
    /// Annual interest rate, in percent.
    #[arg(long, default_value_t = 4.5)]
    pub rate: f64,
    #[arg(long, default_value_t = 30)]
    pub years: u32,
}

#[derive(Args, Debug)]
pub struct RetirementArgs {
    #[arg(long, default_value_t = 30)]
    pub current_age: u32,
    #[arg(long, default_value_t = 65)]
    pub retirement_age: u32,
    #[arg(long, default_value_t = 50_000.0)]
    pub savings: f64,
    #[arg(long, default_value_t = 6_000.0)]
    pub contribution: f64,
    /// Expected annual return, in percent.
    #[arg(long, default_value_t = 7.0)]
    pub rate: f64,
}

#[derive(Args, Debug)]
pub struct InvestmentArgs {
    #[arg(long, default_value_t = 10_000.0)]
    pub initial: f64,
    #[arg(long, default_value_t = 500.0)]
    pub monthly: f64,
    #[arg(long, default_value_t = 20)]
    pub years: u32,
    /// Expected annual return, in percent.
    #[arg(long, default_value_t = 8.0)]
    pub rate: f64,
}

#[derive(Args, Debug)]
pub struct Expense {
    #[command(subcommand)]
    pub command: ExpenseCommand,
}

#[derive(Subcommand, Debug)]
pub enum ExpenseCommand {
    Add(ExpenseAddArgs),
    Remove(ExpenseRemoveArgs),
    List,
    Totals,
}

#[derive(Args, Debug)]
pub struct ExpenseAddArgs {
    #[arg(long)]
    pub category: String,
    /// Amount as typed, `.` or `,` as decimal separator.
    #[arg(long)]
    pub amount: String,
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Args, Debug)]
pub struct ExpenseRemoveArgs {
    pub id: String,
}

/// Values are read as typed; anything missing or unparseable yields 0.
#[derive(Args, Debug)]
pub struct SavingsArgs {
    #[arg(long, default_value = "")]
    pub income: String,
    #[arg(long, default_value = "")]
    pub rate: String,
    #[arg(long, default_value = "")]
    pub years: String,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    #[arg(long)]
    pub bind: Option<String>,
    #[arg(long)]
    pub port: Option<u16>,
}
