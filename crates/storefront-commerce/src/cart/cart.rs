//! Cart and cart item types.
//!
//! The latest server-returned cart is the single source of truth for
//! contents. The subtotal is never stored; it is derived from the items on
//! every read, so it cannot drift from what is displayed.

use crate::error::CommerceError;
use crate::ids::{CartId, CartItemId, ProductId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per cart item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 999;

/// A line in the cart: a product reference with quantity and a unit price
/// snapshotted at add time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Unique cart item identifier.
    pub id: CartItemId,
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub product_name: String,
    /// Quantity, at least 1.
    pub quantity: i64,
    /// Price at the time the item was added.
    pub unit_price: Money,
}

impl CartItem {
    /// Create a cart item, enforcing the quantity and price invariants.
    pub fn new(
        id: CartItemId,
        product_id: ProductId,
        product_name: impl Into<String>,
        quantity: i64,
        unit_price: Money,
    ) -> Result<Self, CommerceError> {
        if quantity < 1 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        if unit_price.is_negative() {
            return Err(CommerceError::NegativePrice(unit_price.amount));
        }
        Ok(Self {
            id,
            product_id,
            product_name: product_name.into(),
            quantity,
            unit_price,
        })
    }

    /// Line total: unit price times quantity.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.unit_price.try_mul(self.quantity)
    }
}

/// A shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Unique cart identifier.
    pub id: CartId,
    /// Items in the cart.
    #[serde(default)]
    pub items: Vec<CartItem>,
}

impl Default for Cart {
    /// An empty cart with no server-assigned id yet.
    fn default() -> Self {
        Self::empty(CartId::new(""))
    }
}

impl Cart {
    /// Create an empty cart.
    pub fn empty(id: CartId) -> Self {
        Self {
            id,
            items: Vec::new(),
        }
    }

    /// Derive the subtotal from the items: sum of unit price times quantity.
    ///
    /// An empty cart has a subtotal of zero.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        let currency = self
            .items
            .first()
            .map(|i| i.unit_price.currency)
            .unwrap_or(Currency::VND);
        self.items
            .iter()
            .try_fold(Money::zero(currency), |acc, item| {
                acc.try_add(&item.line_total()?)
            })
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get an item by ID.
    pub fn get_item(&self, id: &CartItemId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Insert or replace an item (matched by cart item ID).
    ///
    /// Applied only after the backend confirms the mutation.
    pub fn upsert_item(&mut self, item: CartItem) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            *existing = item;
        } else {
            self.items.push(item);
        }
    }

    /// Remove an item from the cart. Returns whether anything was removed.
    pub fn remove_item(&mut self, id: &CartItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != id);
        self.items.len() < len_before
    }

    /// Clear all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, quantity: i64, unit_price: i64) -> CartItem {
        CartItem::new(
            CartItemId::new(id),
            ProductId::new(format!("prod-{}", id)),
            "Test Product",
            quantity,
            Money::vnd(unit_price),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_cart_subtotal_is_zero() {
        let cart = Cart::empty(CartId::new("cart-1"));
        assert!(cart.is_empty());
        assert!(cart.subtotal().unwrap().is_zero());
    }

    #[test]
    fn test_subtotal_is_sum_of_line_totals() {
        let mut cart = Cart::empty(CartId::new("cart-1"));
        cart.upsert_item(item("a", 2, 100_000));
        cart.upsert_item(item("b", 1, 50_000));

        assert_eq!(cart.subtotal().unwrap().amount, 250_000);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_upsert_replaces_existing() {
        let mut cart = Cart::empty(CartId::new("cart-1"));
        cart.upsert_item(item("a", 2, 100_000));
        cart.upsert_item(item("a", 5, 100_000));

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.subtotal().unwrap().amount, 500_000);
    }

    #[test]
    fn test_remove_last_item_empties_cart() {
        let mut cart = Cart::empty(CartId::new("cart-1"));
        cart.upsert_item(item("a", 1, 100_000));

        assert!(cart.remove_item(&CartItemId::new("a")));
        assert!(cart.is_empty());
        assert!(cart.subtotal().unwrap().is_zero());
    }

    #[test]
    fn test_remove_missing_item() {
        let mut cart = Cart::empty(CartId::new("cart-1"));
        assert!(!cart.remove_item(&CartItemId::new("missing")));
    }

    #[test]
    fn test_invalid_quantity_rejected() {
        let result = CartItem::new(
            CartItemId::new("a"),
            ProductId::new("p"),
            "Test",
            0,
            Money::vnd(1000),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_price_rejected() {
        let result = CartItem::new(
            CartItemId::new("a"),
            ProductId::new("p"),
            "Test",
            1,
            Money::vnd(-1),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_quantity_limit() {
        let result = CartItem::new(
            CartItemId::new("a"),
            ProductId::new("p"),
            "Test",
            MAX_QUANTITY_PER_ITEM + 1,
            Money::vnd(1000),
        );
        assert!(result.is_err());
    }
}
