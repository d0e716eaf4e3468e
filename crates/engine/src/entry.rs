//! The module contains the `ExpenseRecord` type, one line of the expense ledger.
use core::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single expense.
///
/// The serialized shape is the storage wire format:
/// `{"id": string, "category": string, "amount": number, "description": string}`.
/// Ids are opaque strings; records created by the ledger carry a UUID v4, but
/// any id found in storage is kept as is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: String,
    pub category: String,
    pub amount: f64,
    pub description: String,
}

impl ExpenseRecord {
    /// Builds a record with a fresh id. Validation is the ledger's job.
    pub(crate) fn new(category: String, amount: f64, description: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            category,
            amount,
            description,
        }
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {} {}", self.amount, self.category, self.description)
    }
}
