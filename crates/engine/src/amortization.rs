//! Fixed-payment loan amortization.
//!
//! A loan of `principal` at a nominal annual rate is repaid in equal monthly
//! installments over `term_years`. Each installment first covers the interest
//! accrued on the remaining balance; the rest pays down principal.
//!
//! Let $r$ be the monthly rate and $n$ the number of months, the installment is
//! $P \cdot r (1+r)^n / ((1+r)^n - 1)$, or $P / n$ when the rate is zero.
//!
//! ** Examples
//!
//! ```rust
//! use engine::{LoanParameters, compute_schedule};
//!
//! let schedule = compute_schedule(&LoanParameters {
//!     principal: 250_000.0,
//!     annual_rate_percent: 4.5,
//!     term_years: 30,
//! })
//! .unwrap();
//! assert_eq!(format!("{:.2}", schedule.monthly_payment), "1266.71");
//! assert_eq!(schedule.entries.len(), 30);
//! ```
use serde::{Deserialize, Serialize};

use crate::{
    EngineError, ResultEngine,
    util::{ensure_non_negative, ensure_positive, whole_units},
};

/// Longest accepted loan term.
pub const MAX_TERM_YEARS: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub term_years: u32,
}

impl LoanParameters {
    #[must_use]
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0 / 12.0
    }

    #[must_use]
    pub fn total_months(&self) -> u32 {
        self.term_years.saturating_mul(12)
    }

    fn validate(&self) -> ResultEngine<()> {
        ensure_positive(self.principal, "principal")?;
        ensure_non_negative(self.annual_rate_percent, "annual rate")?;
        if self.term_years == 0 {
            return Err(EngineError::InvalidParameter(
                "loan term must be at least 1 year".to_string(),
            ));
        }
        if self.term_years > MAX_TERM_YEARS {
            return Err(EngineError::InvalidParameter(format!(
                "loan term must be at most {MAX_TERM_YEARS} years"
            )));
        }
        Ok(())
    }
}

/// Principal and interest paid during one loan year, rounded to whole units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct YearlyLoanEntry {
    /// 1-based loan year.
    pub year: u32,
    pub principal_paid: f64,
    pub interest_paid: f64,
    pub remaining_balance: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
    pub entries: Vec<YearlyLoanEntry>,
}

/// Level installment repaying `principal` over `months` at `monthly_rate`.
///
/// Written as $P r / (1 - (1+r)^{-n})$ with the denominator evaluated through
/// `ln_1p`/`exp_m1`, so it stays finite when $(1+r)^n$ overflows and tends to
/// $P / n$ for rates too small to change `1.0 + r`.
#[must_use]
pub fn monthly_payment(principal: f64, monthly_rate: f64, months: u32) -> f64 {
    if monthly_rate == 0.0 {
        return principal / f64::from(months);
    }
    let paid_off = -(-f64::from(months) * monthly_rate.ln_1p()).exp_m1();
    principal * monthly_rate / paid_off
}

/// Computes the yearly amortization schedule of a fixed-payment loan.
pub fn compute_schedule(params: &LoanParameters) -> ResultEngine<AmortizationSchedule> {
    params.validate()?;

    let rate = params.monthly_rate();
    let months = params.total_months();
    let payment = monthly_payment(params.principal, rate, months);
    let total_payment = payment * f64::from(months);

    let mut entries = Vec::with_capacity(params.term_years as usize);
    let mut balance = params.principal;
    let mut year_principal = 0.0;
    let mut year_interest = 0.0;

    for month in 1..=months {
        let interest = balance * rate;
        let principal = payment - interest;
        balance -= principal;
        year_principal += principal;
        year_interest += interest;

        if month % 12 == 0 || month == months {
            entries.push(YearlyLoanEntry {
                year: month.div_ceil(12),
                principal_paid: whole_units(year_principal),
                interest_paid: whole_units(year_interest),
                remaining_balance: whole_units(balance.max(0.0)),
            });
            year_principal = 0.0;
            year_interest = 0.0;
        }
    }

    tracing::debug!(
        "amortized {} over {months} months at {rate}: payment {payment}",
        params.principal
    );

    Ok(AmortizationSchedule {
        monthly_payment: payment,
        total_payment,
        total_interest: total_payment - params.principal,
        entries,
    })
}
