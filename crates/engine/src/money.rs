//! Parsing of amounts typed by users.
//!
//! Calculators take plain `f64` values; this module is the gate between raw
//! form text and those values.
use crate::{EngineError, ResultEngine};

/// Parses a decimal string into a non-negative amount.
///
/// Accepts `.` or `,` as decimal separator and an optional leading `+`.
///
/// Validation rules:
/// - max 2 fractional digits (rejects `12.345`)
/// - rejects empty/invalid/negative strings
///
/// ```rust
/// use engine::parse_amount;
///
/// assert_eq!(parse_amount("10").unwrap(), 10.0);
/// assert_eq!(parse_amount("10,5").unwrap(), 10.5);
/// assert!(parse_amount("12.345").is_err());
/// ```
pub fn parse_amount(s: &str) -> ResultEngine<f64> {
    let empty = || EngineError::InvalidAmount("empty amount".to_string());
    let invalid = || EngineError::InvalidAmount(format!("invalid amount: {}", s.trim()));

    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(empty());
    }
    if trimmed.starts_with('-') {
        return Err(EngineError::InvalidAmount(
            "amount must not be negative".to_string(),
        ));
    }

    let rest = trimmed.strip_prefix('+').unwrap_or(trimmed).trim();
    if rest.is_empty() {
        return Err(empty());
    }

    let rest = rest.replace(',', ".");
    let mut parts = rest.split('.');
    let units = parts.next().ok_or_else(invalid)?;
    let fraction = parts.next();

    if parts.next().is_some() {
        return Err(invalid());
    }
    if units.is_empty() || !units.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    if let Some(frac) = fraction {
        if !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        if frac.len() > 2 {
            return Err(EngineError::InvalidAmount("too many decimals".to_string()));
        }
    }

    let value: f64 = rest.trim_end_matches('.').parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(EngineError::InvalidAmount("amount too large".to_string()));
    }
    Ok(value)
}
