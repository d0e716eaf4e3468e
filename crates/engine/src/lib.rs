//! Financial projection engine.
//!
//! Pure calculators turning user parameters into numeric series:
//!
//! - [`compute_schedule`]: fixed-payment loan amortization, one entry per year.
//! - [`project`] / [`project_indexed`]: compound growth with periodic
//!   contributions, used by [`retirement`] (yearly, by age) and
//!   [`investment`] (monthly, sampled yearly).
//! - [`project_future_savings`]: monthly income minus ledger expenses,
//!   compounded as an annuity.
//!
//! plus the [`ExpenseLedger`], the only stateful piece, which persists its
//! records through a [`KeyValueStore`].
pub use amortization::{
    AmortizationSchedule, LoanParameters, MAX_TERM_YEARS, YearlyLoanEntry, compute_schedule,
    monthly_payment,
};
pub use categories::{CategorySet, DEFAULT_CATEGORIES};
pub use currency::Currency;
pub use entry::ExpenseRecord;
pub use error::EngineError;
pub use growth::{
    ContributionFrequency, GrowthParameters, GrowthSchedule, InvestmentParameters,
    InvestmentProjection, MAX_PERIODS, PeriodEntry, RetirementParameters, RetirementProjection,
    future_value_of_annuity_due, investment, project, project_indexed, retirement,
};
pub use ledger::{CategoryTotal, CategoryTotals, ExpenseLedger, LEDGER_KEY};
pub use money::parse_amount;
pub use savings::{
    SavingsInputs, SavingsProjection, project_future_savings, projection as savings_projection,
};
pub use storage::{FileStore, KeyValueStore, MemoryStore};

mod amortization;
mod categories;
mod currency;
mod entry;
mod error;
mod growth;
mod ledger;
mod money;
mod savings;
mod storage;
mod util;

pub type ResultEngine<T> = Result<T, EngineError>;
