//! E-commerce domain types and pricing logic for the storefront client.
//!
//! This crate holds the pieces of the storefront that do not touch the
//! network:
//!
//! - **Money**: minor-unit amounts with checked arithmetic and display
//!   formatting
//! - **Catalog**: products, categories, brands as the backend serves them
//! - **Cart**: line items with snapshotted unit prices and derived subtotals
//! - **Checkout**: order totals, submission drafts, orders and their status
//! - **Search**: the query object a filter sidebar maps onto
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_commerce::prelude::*;
//!
//! let mut cart = Cart::empty(CartId::new("cart-1"));
//! cart.upsert_item(CartItem::new(
//!     CartItemId::new("li-1"),
//!     ProductId::new("prod-1"),
//!     "Mechanical keyboard",
//!     2,
//!     Money::vnd(100_000),
//! )?);
//!
//! let totals = OrderTotals::compute(cart.subtotal()?, Money::vnd(20_000))?;
//! println!("to pay: {}", totals.final_amount.display());
//! ```

pub mod error;
pub mod format;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Brand, Category, Product, ProductImage, ProductStatus};

    // Cart
    pub use crate::cart::{Cart, CartItem};

    // Checkout
    pub use crate::checkout::{
        Address, AppliedDiscount, CheckoutDraft, Order, OrderItem, OrderStatus, OrderTotals,
        PaymentMethod, SHIPPING_FEE,
    };

    // Search
    pub use crate::search::{ProductQuery, SortDirection, SortKey};
}
