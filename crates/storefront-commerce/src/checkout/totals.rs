//! Order total computation.

use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Flat shipping fee in VND minor units, applied to every order.
///
/// Defined once; every view that shows a shipping line reads this constant.
pub const SHIPPING_FEE: i64 = 25_000;

/// Derived totals for a checkout submission or an order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    /// Cart subtotal before discounts.
    pub total_amount: Money,
    /// Discount deducted (never exceeds the subtotal).
    pub discount_amount: Money,
    /// Shipping fee.
    pub shipping_fee: Money,
    /// Amount to pay: subtotal - discount + shipping.
    pub final_amount: Money,
}

impl OrderTotals {
    /// Compute totals from a subtotal and a discount amount.
    ///
    /// The discount is capped at the subtotal so a bad server value can
    /// never drive the final amount below the shipping fee.
    pub fn compute(subtotal: Money, discount: Money) -> Result<Self, CommerceError> {
        let discount = discount.min(&subtotal);
        let shipping_fee = Money::new(SHIPPING_FEE, subtotal.currency);
        let final_amount = subtotal.try_sub(&discount)?.try_add(&shipping_fee)?;
        Ok(Self {
            total_amount: subtotal,
            discount_amount: discount,
            shipping_fee,
            final_amount,
        })
    }

    /// Compute totals with no discount applied.
    pub fn without_discount(subtotal: Money) -> Result<Self, CommerceError> {
        Self::compute(subtotal, Money::zero(subtotal.currency))
    }

    /// Verify the invariant `final == total - discount + shipping`.
    pub fn is_consistent(&self) -> bool {
        let expected = self
            .total_amount
            .try_sub(&self.discount_amount)
            .and_then(|m| m.try_add(&self.shipping_fee));
        matches!(expected, Ok(m) if m == self.final_amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_with_discount() {
        // Cart: 100_000 x 2 + 50_000 x 1 = 250_000
        let totals =
            OrderTotals::compute(Money::vnd(250_000), Money::vnd(20_000)).unwrap();
        assert_eq!(totals.total_amount.amount, 250_000);
        assert_eq!(totals.discount_amount.amount, 20_000);
        assert_eq!(totals.final_amount.amount, 255_000);
        assert!(totals.is_consistent());
    }

    #[test]
    fn test_totals_without_discount() {
        let totals = OrderTotals::without_discount(Money::vnd(250_000)).unwrap();
        assert_eq!(totals.final_amount.amount, 275_000);
    }

    #[test]
    fn test_empty_cart_totals() {
        let totals = OrderTotals::without_discount(Money::vnd(0)).unwrap();
        assert_eq!(totals.final_amount.amount, SHIPPING_FEE);
    }

    #[test]
    fn test_discount_capped_at_subtotal() {
        let totals =
            OrderTotals::compute(Money::vnd(100_000), Money::vnd(999_000)).unwrap();
        assert_eq!(totals.discount_amount.amount, 100_000);
        assert_eq!(totals.final_amount.amount, SHIPPING_FEE);
    }

    #[test]
    fn test_invariant_holds_for_range_of_discounts() {
        let subtotal = Money::vnd(250_000);
        for discount in [0, 1, 25_000, 249_999, 250_000] {
            let totals = OrderTotals::compute(subtotal, Money::vnd(discount)).unwrap();
            assert_eq!(
                totals.final_amount.amount,
                250_000 - discount + SHIPPING_FEE
            );
            assert!(totals.is_consistent());
        }
    }
}
