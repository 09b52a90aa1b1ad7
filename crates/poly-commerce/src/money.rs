//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Supported currencies. The Poly store trades in BRL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    BRL,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "BRL").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::BRL => "BRL",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "R$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::BRL => "R$",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "BRL" => Some(Currency::BRL),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }

    /// Decimal separator for display, per the currency's home locale.
    fn decimal_separator(&self) -> char {
        match self {
            Currency::BRL => ',',
            _ => '.',
        }
    }

    /// Thousands separator for display, per the currency's home locale.
    fn thousands_separator(&self) -> char {
        match self {
            Currency::BRL => '.',
            _ => ',',
        }
    }

    /// Whether a space sits between symbol and amount (e.g., "R$ 89,90").
    fn symbol_spaced(&self) -> bool {
        matches!(self, Currency::BRL)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (centavos for
/// BRL). This avoids floating-point precision issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., centavos).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use poly_commerce::money::{Currency, Money};
    /// let price = Money::from_decimal(89.90, Currency::BRL);
    /// assert_eq!(price.amount_cents, 8990);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        Self::new((amount * 100.0).round() as i64, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_cents > 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }

    /// Format as a display string in the currency's home locale
    /// (e.g., "R$ 1.234,56" for BRL, "$1,234.56" for USD).
    pub fn display(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        let units = group_thousands(abs / 100, self.currency.thousands_separator());
        let space = if self.currency.symbol_spaced() { " " } else { "" };
        format!(
            "{sign}{}{space}{units}{}{:02}",
            self.currency.symbol(),
            self.currency.decimal_separator(),
            abs % 100,
        )
    }

    /// Try to add another Money value.
    ///
    /// Returns `None` if currencies differ or the addition overflows.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let cents = self.amount_cents.checked_add(other.amount_cents)?;
        Some(Money::new(cents, self.currency))
    }

    /// Try to subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let cents = self.amount_cents.checked_sub(other.amount_cents)?;
        Some(Money::new(cents, self.currency))
    }

    /// Try to multiply by a scalar, returning `None` on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        let cents = self.amount_cents.checked_mul(factor)?;
        Some(Money::new(cents, self.currency))
    }

    /// Calculate a percentage of this amount, rounded to the nearest cent.
    pub fn percentage(&self, percent: f64) -> Money {
        let cents = (self.amount_cents as f64 * percent / 100.0).round() as i64;
        Money::new(cents, self.currency)
    }

    /// Sum an iterator of Money values.
    ///
    /// Returns `None` on currency mismatch or overflow.
    pub fn try_sum<'a>(
        mut iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }
}

/// Insert a thousands separator every three digits.
fn group_thousands(mut value: u64, separator: char) -> String {
    if value < 1000 {
        return value.to_string();
    }
    let mut groups = Vec::new();
    while value >= 1000 {
        groups.push(format!("{:03}", value % 1000));
        value /= 1000;
    }
    groups.push(value.to_string());
    groups.reverse();
    groups.join(&separator.to_string())
}

impl Add for Money {
    type Output = Money;

    /// # Panics
    /// Panics on currency mismatch or overflow. Use `try_add` in library code.
    fn add(self, other: Money) -> Money {
        self.try_add(&other).expect("currency mismatch in addition")
    }
}

impl Sub for Money {
    type Output = Money;

    /// # Panics
    /// Panics on currency mismatch or overflow. Use `try_subtract` in library code.
    fn sub(self, other: Money) -> Money {
        self.try_subtract(&other)
            .expect("currency mismatch in subtraction")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_cents() {
        let m = Money::new(8990, Currency::BRL);
        assert_eq!(m.amount_cents, 8990);
        assert_eq!(m.currency, Currency::BRL);
    }

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(89.90, Currency::BRL);
        assert_eq!(m.amount_cents, 8990);

        let m = Money::from_decimal(159.9, Currency::BRL);
        assert_eq!(m.amount_cents, 15990);
    }

    #[test]
    fn test_money_display_brl() {
        assert_eq!(Money::new(8990, Currency::BRL).display(), "R$ 89,90");
        assert_eq!(Money::new(123456, Currency::BRL).display(), "R$ 1.234,56");
        assert_eq!(Money::new(5, Currency::BRL).display(), "R$ 0,05");
        assert_eq!(Money::new(-1890, Currency::BRL).display(), "-R$ 18,90");
    }

    #[test]
    fn test_money_display_usd() {
        assert_eq!(Money::new(123456, Currency::USD).display(), "$1,234.56");
    }

    #[test]
    fn test_money_addition() {
        let a = Money::new(1000, Currency::BRL);
        let b = Money::new(500, Currency::BRL);
        assert_eq!((a + b).amount_cents, 1500);
    }

    #[test]
    fn test_money_try_add_mismatch() {
        let brl = Money::new(1000, Currency::BRL);
        let usd = Money::new(1000, Currency::USD);
        assert!(brl.try_add(&usd).is_none());
    }

    #[test]
    fn test_money_try_multiply_overflow() {
        let m = Money::new(i64::MAX, Currency::BRL);
        assert!(m.try_multiply(2).is_none());
    }

    #[test]
    fn test_money_percentage() {
        let m = Money::new(10000, Currency::BRL);
        assert_eq!(m.percentage(10.0).amount_cents, 1000);

        // Rounds to the nearest cent.
        let m = Money::new(999, Currency::BRL);
        assert_eq!(m.percentage(10.0).amount_cents, 100);
    }

    #[test]
    fn test_money_try_sum() {
        let values = [
            Money::new(1000, Currency::BRL),
            Money::new(2500, Currency::BRL),
        ];
        let total = Money::try_sum(values.iter(), Currency::BRL).unwrap();
        assert_eq!(total.amount_cents, 3500);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("BRL"), Some(Currency::BRL));
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
