//! Checkout submission draft.

use crate::cart::Cart;
use crate::checkout::{Address, OrderTotals, PaymentMethod};
use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A discount the backend accepted for this checkout.
///
/// The amount is opaque: the backend validates the code and returns a
/// number. No client-side code validation or expiry logic exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppliedDiscount {
    /// The code the customer entered.
    pub code: String,
    /// Amount the backend deducts.
    pub amount: Money,
}

/// Everything the customer has selected on the checkout page, validated
/// locally before any order-creation request is dispatched.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutDraft {
    /// Cart snapshot being checked out.
    pub cart: Cart,
    /// Selected shipping address.
    pub shipping_address: Option<Address>,
    /// Selected payment method.
    pub payment_method: Option<PaymentMethod>,
    /// Applied discount, if any.
    pub discount: Option<AppliedDiscount>,
}

impl CheckoutDraft {
    /// Start a draft from the current cart.
    pub fn new(cart: Cart) -> Self {
        Self {
            cart,
            shipping_address: None,
            payment_method: None,
            discount: None,
        }
    }

    /// Select a shipping address.
    pub fn with_address(mut self, address: Address) -> Self {
        self.shipping_address = Some(address);
        self
    }

    /// Select a payment method.
    pub fn with_payment(mut self, method: PaymentMethod) -> Self {
        self.payment_method = Some(method);
        self
    }

    /// Attach a backend-accepted discount.
    pub fn with_discount(mut self, discount: AppliedDiscount) -> Self {
        self.discount = Some(discount);
        self
    }

    /// Presence checks run immediately before submission. A failure here
    /// means no network call is made.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        match &self.shipping_address {
            None => return Err(CommerceError::CheckoutIncomplete("shipping address".into())),
            Some(address) if !address.is_complete() => {
                return Err(CommerceError::CheckoutIncomplete("shipping address".into()))
            }
            Some(_) => {}
        }
        if self.payment_method.is_none() {
            return Err(CommerceError::CheckoutIncomplete("payment method".into()));
        }
        Ok(())
    }

    /// Derive the totals for this draft.
    pub fn totals(&self) -> Result<OrderTotals, CommerceError> {
        let subtotal = self.cart.subtotal()?;
        let discount = self
            .discount
            .as_ref()
            .map(|d| d.amount)
            .unwrap_or_else(|| Money::zero(subtotal.currency));
        OrderTotals::compute(subtotal, discount)
    }
}
