//! The module contains the errors the engine can throw.
//!
//! The validation family is:
//!
//! - [`InvalidCategory`] thrown when an expense names a category outside the
//!   configured [`CategorySet`].
//! - [`InvalidAmount`] thrown when a monetary amount is missing, non-finite or
//!   out of range.
//! - [`InvalidParameter`] thrown when a calculator parameter is out of its
//!   domain (negative term, rate below -100%, ...).
//!
//! Everything else comes from the storage collaborator.
//!
//!  [`InvalidCategory`]: EngineError::InvalidCategory
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`InvalidParameter`]: EngineError::InvalidParameter
//!  [`CategorySet`]: super::categories::CategorySet
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid category: {0}")]
    InvalidCategory(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl EngineError {
    /// Returns `true` for errors caused by caller input rather than by the
    /// storage collaborator.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidCategory(_) | Self::InvalidAmount(_) | Self::InvalidParameter(_)
        )
    }
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidCategory(a), Self::InvalidCategory(b)) => a == b,
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::InvalidParameter(a), Self::InvalidParameter(b)) => a == b,
            (Self::Storage(a), Self::Storage(b)) => a == b,
            (Self::Io(a), Self::Io(b)) => a.kind() == b.kind(),
            (Self::Json(a), Self::Json(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_family() {
        assert!(EngineError::InvalidCategory("x".to_string()).is_validation());
        assert!(EngineError::InvalidAmount("x".to_string()).is_validation());
        assert!(EngineError::InvalidParameter("x".to_string()).is_validation());
        assert!(!EngineError::Storage("x".to_string()).is_validation());
    }
}
