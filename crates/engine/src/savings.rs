//! Future savings from what is left of the monthly income once the ledger's
//! expenses are paid.
//!
//! Missing or unusable inputs are not errors here: the projection is simply
//! `0`, the same value shown while a form is still being filled in.
use serde::{Deserialize, Serialize};

use crate::{ExpenseLedger, growth::future_value_of_annuity_due};

/// Raw inputs of the savings projection; `None` means absent or unparseable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SavingsInputs {
    pub monthly_income: Option<f64>,
    pub annual_rate_percent: Option<f64>,
    pub years: Option<f64>,
}

impl SavingsInputs {
    /// Reads the three form fields, keeping only values that parse as finite
    /// numbers.
    #[must_use]
    pub fn parse(monthly_income: &str, annual_rate_percent: &str, years: &str) -> Self {
        Self {
            monthly_income: parse_number(monthly_income),
            annual_rate_percent: parse_number(annual_rate_percent),
            years: parse_number(years),
        }
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavingsProjection {
    /// Income left after expenses; `None` when the income is unknown.
    pub monthly_remaining: Option<f64>,
    pub future_value: f64,
}

/// Future value of saving the monthly remainder, or `0` when it cannot be
/// computed or nothing is left to save.
#[must_use]
pub fn project_future_savings(inputs: &SavingsInputs, ledger: &ExpenseLedger) -> f64 {
    projection(inputs, ledger).future_value
}

/// Same as [`project_future_savings`], also reporting the monthly remainder.
#[must_use]
pub fn projection(inputs: &SavingsInputs, ledger: &ExpenseLedger) -> SavingsProjection {
    let monthly_remaining = inputs
        .monthly_income
        .map(|income| income - ledger.total_expenses());
    SavingsProjection {
        monthly_remaining,
        future_value: future_value(monthly_remaining, inputs.annual_rate_percent, inputs.years),
    }
}

fn future_value(remaining: Option<f64>, rate_percent: Option<f64>, years: Option<f64>) -> f64 {
    let (Some(remaining), Some(rate_percent), Some(years)) = (remaining, rate_percent, years) else {
        return 0.0;
    };
    if remaining <= 0.0 || years < 0.0 || rate_percent / 100.0 / 12.0 <= -1.0 {
        return 0.0;
    }
    let value = future_value_of_annuity_due(remaining, rate_percent, years);
    if value.is_finite() { value } else { 0.0 }
}
