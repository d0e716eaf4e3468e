use serde::{Deserialize, Serialize};

use crate::EngineError;

/// ISO-like currency code used when rendering projection results.
///
/// The engine computes in plain numbers; currency only matters at the
/// formatting step. Two renderings are offered, matching what the calculators
/// display:
/// - whole units for series and balances (`$304,869`)
/// - cents for payment figures (`$1,266.71`)
///
/// ```rust
/// use engine::Currency;
///
/// assert_eq!(Currency::Usd.format_whole(343_778.24), "$343,778");
/// assert_eq!(Currency::Usd.format_cents(1266.7133), "$1,266.71");
/// assert_eq!(Currency::Eur.format_cents(-10.5), "-10.50€");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Inr,
}

impl Currency {
    /// Canonical currency code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Inr => "INR",
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Inr => "₹",
        }
    }

    const fn symbol_is_prefix(self) -> bool {
        !matches!(self, Currency::Eur)
    }

    /// Formats `value` rounded to the nearest whole unit.
    #[must_use]
    pub fn format_whole(self, value: f64) -> String {
        let rounded = value.round();
        let digits = group_thousands(rounded.abs() as u64);
        self.decorate(rounded < 0.0, &digits)
    }

    /// Formats `value` rounded to the nearest cent.
    #[must_use]
    pub fn format_cents(self, value: f64) -> String {
        let cents = (value * 100.0).round();
        let abs = cents.abs() as u64;
        let digits = format!("{}.{:02}", group_thousands(abs / 100), abs % 100);
        self.decorate(cents < 0.0, &digits)
    }

    fn decorate(self, negative: bool, digits: &str) -> String {
        let sign = if negative { "-" } else { "" };
        if self.symbol_is_prefix() {
            format!("{sign}{}{digits}", self.symbol())
        } else {
            format!("{sign}{digits}{}", self.symbol())
        }
    }
}

fn group_thousands(value: u64) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<&str> for Currency {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "INR" => Ok(Currency::Inr),
            other => Err(EngineError::InvalidParameter(format!(
                "unsupported currency: {other}"
            ))),
        }
    }
}
