//! Closed set of expense categories.

use serde::{Deserialize, Serialize};

use crate::{EngineError, ResultEngine};

pub const DEFAULT_CATEGORIES: [&str; 12] = [
    "Housing",
    "Transportation",
    "Food",
    "Utilities",
    "Insurance",
    "Healthcare",
    "Entertainment",
    "Personal",
    "Education",
    "Debt",
    "Savings",
    "Other",
];

/// The categories an [`ExpenseLedger`] accepts, in display order.
///
/// Membership is an exact, case-sensitive match on the name.
///
/// [`ExpenseLedger`]: crate::ExpenseLedger
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct CategorySet {
    names: Vec<String>,
}

impl CategorySet {
    /// Builds a set from configuration. The list must be non-empty, without
    /// blank names and without duplicates.
    pub fn new<I, S>(names: I) -> ResultEngine<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if name.trim().is_empty() {
                return Err(EngineError::InvalidCategory(
                    "category names must not be blank".to_string(),
                ));
            }
            if out.contains(&name) {
                return Err(EngineError::InvalidCategory(format!(
                    "duplicate category: {name}"
                )));
            }
            out.push(name);
        }
        if out.is_empty() {
            return Err(EngineError::InvalidCategory(
                "category set must not be empty".to_string(),
            ));
        }
        Ok(Self { names: out })
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Position of `name` in display order.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns `Ok(())` if `name` belongs to the set.
    pub(crate) fn ensure_contains(&self, name: &str) -> ResultEngine<()> {
        if self.contains(name) {
            Ok(())
        } else {
            Err(EngineError::InvalidCategory(format!(
                "\"{name}\" is not one of: {}",
                self.names.join(", ")
            )))
        }
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self {
            names: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for CategorySet {
    type Error = EngineError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CategorySet> for Vec<String> {
    fn from(value: CategorySet) -> Self {
        value.names
    }
}
