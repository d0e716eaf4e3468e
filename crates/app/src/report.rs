//! Plain-text rendering of engine results.
use engine::{
    AmortizationSchedule, CategoryTotals, Currency, ExpenseRecord, GrowthSchedule,
    SavingsProjection,
};

pub fn loan(schedule: &AmortizationSchedule, currency: Currency) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Monthly payment: {}\nTotal payment:   {}\nTotal interest:  {}\n\n",
        currency.format_cents(schedule.monthly_payment),
        currency.format_cents(schedule.total_payment),
        currency.format_cents(schedule.total_interest),
    ));
    out.push_str(&format!(
        "{:>5} {:>14} {:>14} {:>16}\n",
        "Year", "Principal", "Interest", "Balance"
    ));
    for entry in &schedule.entries {
        out.push_str(&format!(
            "{:>5} {:>14} {:>14} {:>16}\n",
            entry.year,
            currency.format_whole(entry.principal_paid),
            currency.format_whole(entry.interest_paid),
            currency.format_whole(entry.remaining_balance),
        ));
    }
    out
}

/// `label` names the index column (age or year).
pub fn growth(schedule: &GrowthSchedule, label: &str, currency: Currency) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Final balance:       {}\nTotal contributions: {}\nGrowth:              {}\n\n",
        currency.format_whole(schedule.final_balance),
        currency.format_whole(schedule.total_contributions),
        currency.format_whole(schedule.total_growth),
    ));
    out.push_str(&format!(
        "{label:>5} {:>16} {:>16} {:>16}\n",
        "Balance", "Contributions", "Growth"
    ));
    for entry in &schedule.entries {
        out.push_str(&format!(
            "{:>5} {:>16} {:>16} {:>16}\n",
            entry.index,
            currency.format_whole(entry.balance),
            currency.format_whole(entry.cumulative_contributions),
            currency.format_whole(entry.growth),
        ));
    }
    out
}

pub fn expenses(records: &[ExpenseRecord], total: f64, currency: Currency) -> String {
    if records.is_empty() {
        return "No expenses recorded.\n".to_string();
    }
    let mut out = String::new();
    for record in records {
        out.push_str(&format!(
            "{:<36} {:<15} {:>12}  {}\n",
            record.id,
            record.category,
            currency.format_cents(record.amount),
            record.description,
        ));
    }
    out.push_str(&format!("Total: {}\n", currency.format_cents(total)));
    out
}

pub fn totals(totals: &CategoryTotals, total: f64, currency: Currency) -> String {
    let mut out = String::new();
    for entry in totals.iter() {
        let share = if total > 0.0 { entry.amount / total * 100.0 } else { 0.0 };
        out.push_str(&format!(
            "{:<15} {:>12} {:>6.1}%\n",
            entry.category,
            currency.format_cents(entry.amount),
            share,
        ));
    }
    out.push_str(&format!("Total: {}\n", currency.format_cents(total)));
    out
}

pub fn savings(projection: &SavingsProjection, currency: Currency) -> String {
    let remaining = projection
        .monthly_remaining
        .map(|value| currency.format_cents(value))
        .unwrap_or_else(|| "-".to_string());
    format!(
        "Monthly remaining: {remaining}\nFuture savings:    {}\n",
        currency.format_cents(projection.future_value)
    )
}
