//! Money type for representing monetary values.
//!
//! Amounts are stored in the smallest unit of the currency, which avoids
//! floating-point precision issues in the pricing pipeline. The storefront
//! backend prices everything in dong, so VND is the default.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    VND,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "VND").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::VND => "VND",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::VND => "\u{20ab}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::VND => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "VND" => Some(Currency::VND),
            "USD" => Some(Currency::USD),
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
///
/// Amounts are stored in the smallest currency unit (whole dong for VND,
/// cents for USD). All arithmetic is checked; nothing in the pricing
/// pipeline silently overflows or mixes currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value in minor units.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a VND amount.
    pub fn vnd(amount: i64) -> Self {
        Self::new(amount, Currency::VND)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Add another Money value, failing on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Result<Money, CommerceError> {
        self.check_currency(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(CommerceError::Overflow)?;
        Ok(Money::new(amount, self.currency))
    }

    /// Subtract another Money value, failing on currency mismatch or overflow.
    pub fn try_sub(&self, other: &Money) -> Result<Money, CommerceError> {
        self.check_currency(other)?;
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or(CommerceError::Overflow)?;
        Ok(Money::new(amount, self.currency))
    }

    /// Multiply by a scalar, failing on overflow.
    pub fn try_mul(&self, factor: i64) -> Result<Money, CommerceError> {
        let amount = self
            .amount
            .checked_mul(factor)
            .ok_or(CommerceError::Overflow)?;
        Ok(Money::new(amount, self.currency))
    }

    /// Sum an iterator of Money values in the given currency.
    pub fn try_sum<'a>(
        mut iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Result<Money, CommerceError> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }

    /// Cap this amount at a maximum (used for discounts against a subtotal).
    pub fn min(&self, other: &Money) -> Money {
        if self.amount <= other.amount {
            *self
        } else {
            *other
        }
    }

    /// Convert to a decimal value for display math only.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount as f64 / divisor as f64
    }

    /// Format as a display string (e.g., "250.000\u{20ab}" or "$49.99").
    /// Zero-decimal currencies put the symbol after the amount, decimal
    /// currencies before it.
    pub fn display(&self) -> String {
        if self.currency.decimal_places() == 0 {
            format!("{}{}", self.display_amount(), self.currency.symbol())
        } else {
            format!("{}{}", self.currency.symbol(), self.display_amount())
        }
    }

    /// Format the amount without symbol, grouped in thousands for
    /// zero-decimal currencies.
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places();
        if places == 0 {
            crate::format::group_thousands(self.amount)
        } else {
            format!("{:.places$}", self.to_decimal(), places = places as usize)
        }
    }

    fn check_currency(&self, other: &Money) -> Result<(), CommerceError> {
        if self.currency != other.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: other.currency.code().to_string(),
            });
        }
        Ok(())
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
    fn test_money_vnd() {
        let m = Money::vnd(25_000);
        assert_eq!(m.amount, 25_000);
        assert_eq!(m.currency, Currency::VND);
    }

    #[test]
    fn test_money_display_vnd() {
        let m = Money::vnd(250_000);
        assert_eq!(m.display(), "250.000\u{20ab}");

        let m = Money::vnd(999);
        assert_eq!(m.display(), "999\u{20ab}");
    }

    #[test]
    fn test_money_display_decimal_currency_symbol_first() {
        let m = Money::new(4999, Currency::USD);
        assert_eq!(m.display(), "$49.99");

        let m = Money::new(1050, Currency::EUR);
        assert_eq!(m.display(), "\u{20ac}10.50");
    }

    #[test]
    fn test_money_addition() {
        let a = Money::vnd(100_000);
        let b = Money::vnd(50_000);
        assert_eq!(a.try_add(&b).unwrap().amount, 150_000);
    }

    #[test]
    fn test_money_subtraction() {
        let a = Money::vnd(100_000);
        let b = Money::vnd(30_000);
        assert_eq!(a.try_sub(&b).unwrap().amount, 70_000);
    }

    #[test]
    fn test_money_multiply() {
        let m = Money::vnd(100_000);
        assert_eq!(m.try_mul(2).unwrap().amount, 200_000);
    }

    #[test]
    fn test_money_sum() {
        let items = vec![Money::vnd(200_000), Money::vnd(50_000)];
        let total = Money::try_sum(items.iter(), Currency::VND).unwrap();
        assert_eq!(total.amount, 250_000);
    }

    #[test]
    fn test_money_sum_empty() {
        let items: Vec<Money> = vec![];
        let total = Money::try_sum(items.iter(), Currency::VND).unwrap();
        assert!(total.is_zero());
    }

    #[test]
    fn test_money_currency_mismatch() {
        let vnd = Money::vnd(1000);
        let usd = Money::new(1000, Currency::USD);
        assert!(vnd.try_add(&usd).is_err());
    }

    #[test]
    fn test_money_overflow() {
        let m = Money::vnd(i64::MAX);
        assert!(m.try_add(&Money::vnd(1)).is_err());
        assert!(m.try_mul(2).is_err());
    }

    #[test]
    fn test_money_min() {
        let discount = Money::vnd(300_000);
        let subtotal = Money::vnd(250_000);
        assert_eq!(discount.min(&subtotal).amount, 250_000);
        assert_eq!(Money::vnd(20_000).min(&subtotal).amount, 20_000);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("vnd"), Some(Currency::VND));
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code("XXX"), None);
    }
}
