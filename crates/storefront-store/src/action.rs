//! Actions accepted by the store.

use storefront_api::Pagination;
use storefront_commerce::prelude::{AppliedDiscount, Cart, Order, Product};

/// A state mutation, applied by the single writer in dispatch order.
#[derive(Debug, Clone)]
pub enum Action {
    /// A cart request went out.
    CartLoading,
    /// The server returned the authoritative cart.
    CartLoaded(Cart),
    /// A cart request failed.
    CartFailed(String),

    /// A product search went out under the given generation.
    SearchStarted { generation: u64 },
    /// A product search came back.
    SearchLoaded {
        generation: u64,
        products: Vec<Product>,
        pagination: Option<Pagination>,
    },
    /// A product search failed.
    SearchFailed { generation: u64, message: String },

    /// A discount code was accepted by the server.
    DiscountApplied(AppliedDiscount),
    /// The discount was removed (or checkout completed).
    DiscountCleared,
    /// Order placement started.
    PlacingOrder,
    /// Order placement finished, successfully or not.
    OrderPlaced,
    /// Order placement failed.
    CheckoutFailed(String),

    /// An order history request went out.
    OrdersLoading,
    /// The server returned a page of order history.
    OrdersLoaded {
        orders: Vec<Order>,
        pagination: Option<Pagination>,
    },
    /// A single order changed (status update, cancellation).
    OrderUpdated(Order),
    /// An order request failed.
    OrdersFailed(String),

    /// A user signed in.
    LoggedIn { email: String },
    /// The user signed out; all user-scoped slices are cleared.
    LoggedOut,
}
