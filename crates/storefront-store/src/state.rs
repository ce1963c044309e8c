//! State snapshot types.

use storefront_api::Pagination;
use storefront_commerce::prelude::{AppliedDiscount, Cart, Order, Product};

/// Authentication slice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthSlice {
    /// Email of the signed-in user, if any.
    pub email: Option<String>,
}

impl AuthSlice {
    /// Whether a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.email.is_some()
    }
}

/// Cart slice.
///
/// The cart held here is whatever the server last returned; the subtotal is
/// always derived from the items, never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartSlice {
    pub cart: Cart,
    pub loading: bool,
    pub error: Option<String>,
}

/// Product listing slice.
///
/// `generation` orders overlapping searches: results tagged with an older
/// generation than the one recorded here are dropped by the reducer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductSlice {
    pub items: Vec<Product>,
    pub pagination: Option<Pagination>,
    pub generation: u64,
    pub loading: bool,
    pub error: Option<String>,
}

/// Order history slice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderSlice {
    pub orders: Vec<Order>,
    pub pagination: Option<Pagination>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Checkout slice: the applied discount and the in-flight order placement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckoutSlice {
    pub discount: Option<AppliedDiscount>,
    pub placing: bool,
    pub error: Option<String>,
}

/// The full application state snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub auth: AuthSlice,
    pub cart: CartSlice,
    pub products: ProductSlice,
    pub orders: OrderSlice,
    pub checkout: CheckoutSlice,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_empty() {
        let state = AppState::default();
        assert!(!state.auth.is_authenticated());
        assert!(state.cart.cart.is_empty());
        assert!(state.products.items.is_empty());
        assert_eq!(state.products.generation, 0);
        assert!(state.checkout.discount.is_none());
    }
}
