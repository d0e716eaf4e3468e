use serde::{Deserialize, Serialize};

pub mod loan {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct LoanRequest {
        pub principal: f64,
        pub annual_rate_percent: f64,
        pub term_years: u32,
    }
}

pub mod retirement {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct RetirementRequest {
        pub current_age: u32,
        pub retirement_age: u32,
        pub current_savings: f64,
        pub annual_contribution: f64,
        pub expected_return_percent: f64,
    }
}

pub mod investment {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct InvestmentRequest {
        pub initial_investment: f64,
        pub monthly_contribution: f64,
        pub years: u32,
        pub annual_return_percent: f64,
    }
}

pub mod expense {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseNew {
        pub category: String,
        pub amount: f64,
        /// Defaults to the category name when missing or blank.
        #[serde(default)]
        pub description: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseView {
        pub id: String,
        pub category: String,
        pub amount: f64,
        pub description: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseList {
        pub expenses: Vec<ExpenseView>,
        pub total: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryAmount {
        pub category: String,
        pub amount: f64,
    }

    /// Per-category sums in category order; categories without expenses are
    /// absent.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseTotals {
        pub categories: Vec<CategoryAmount>,
        pub total: f64,
    }
}

pub mod savings {
    use super::*;

    /// All fields are optional: a missing value makes the projection `0`.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct SavingsRequest {
        #[serde(default)]
        pub monthly_income: Option<f64>,
        #[serde(default)]
        pub annual_rate_percent: Option<f64>,
        #[serde(default)]
        pub years: Option<f64>,
    }
}
