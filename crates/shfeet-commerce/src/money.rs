//! Money type for representing monetary values.
//!
//! Amounts are integers in the currency's minor unit (kobo for Naira), so
//! every total the storefront derives is exact.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    NGN,
    USD,
    GBP,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "NGN").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::NGN => "NGN",
            Currency::USD => "USD",
            Currency::GBP => "GBP",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "₦").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::NGN => "\u{20a6}",
            Currency::USD => "$",
            Currency::GBP => "\u{00a3}",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Number of minor units in one major unit.
    pub fn minor_per_major(&self) -> i64 {
        100
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "NGN" => Some(Currency::NGN),
            "USD" => Some(Currency::USD),
            "GBP" => Some(Currency::GBP),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit (kobo for NGN).
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from whole major units (e.g. Naira).
    ///
    /// ```
    /// use shfeet_commerce::money::{Money, Currency};
    /// let price = Money::from_major(5_000, Currency::NGN);
    /// assert_eq!(price.amount_minor, 500_000);
    /// ```
    pub fn from_major(amount: i64, currency: Currency) -> Self {
        Self::new(
            amount.saturating_mul(currency.minor_per_major()),
            currency,
        )
    }

    /// Shorthand for whole Naira.
    pub fn naira(amount: i64) -> Self {
        Self::from_major(amount, Currency::NGN)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_minor > 0
    }

    /// Whole major units, truncated toward zero.
    pub fn major_units(&self) -> i64 {
        self.amount_minor / self.currency.minor_per_major()
    }

    /// Format as a display string (e.g., "₦15,000" or "₦1,250.50").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format without the symbol, grouping thousands. Kobo are shown only
    /// when non-zero.
    pub fn display_amount(&self) -> String {
        let per_major = self.currency.minor_per_major();
        let sign = if self.amount_minor < 0 { "-" } else { "" };
        let abs = self.amount_minor.unsigned_abs();
        let major = abs / per_major as u64;
        let minor = abs % per_major as u64;

        let grouped = group_thousands(major);
        if minor == 0 {
            format!("{}{}", sign, grouped)
        } else {
            format!("{}{}.{:02}", sign, grouped, minor)
        }
    }

    /// Try to add another Money value, returning None on currency mismatch
    /// or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_minor
            .checked_add(other.amount_minor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Try to subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_minor
            .checked_sub(other.amount_minor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Multiply by a scalar, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_minor
            .checked_mul(factor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Whole-percent share of this amount, rounded toward zero to the minor
    /// unit.
    pub fn percentage(&self, percent: u8) -> Option<Money> {
        self.amount_minor
            .checked_mul(i64::from(percent))
            .map(|scaled| Money::new(scaled / 100, self.currency))
    }

    /// Sum an iterator of Money values. None if any value is in another
    /// currency or the sum overflows.
    pub fn try_sum<'a>(iter: impl IntoIterator<Item = &'a Money>, currency: Currency) -> Option<Money> {
        iter.into_iter()
            .try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Serde helpers for Naira amounts written as plain numbers in major units,
/// the way the storefront API and the saved cart expect them.
///
/// Use with `#[serde(with = "crate::money::naira")]`. Whole amounts are
/// written as integers (`5000`), amounts with kobo as decimals (`1250.5`).
pub mod naira {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{Currency, Money};

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        let per_major = money.currency.minor_per_major();
        if money.amount_minor % per_major == 0 {
            serializer.serialize_i64(money.amount_minor / per_major)
        } else {
            serializer.serialize_f64(money.amount_minor as f64 / per_major as f64)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        if !amount.is_finite() {
            return Err(serde::de::Error::custom("amount must be a finite number"));
        }
        let per_major = Currency::NGN.minor_per_major() as f64;
        Ok(Money::new((amount * per_major).round() as i64, Currency::NGN))
    }
}
