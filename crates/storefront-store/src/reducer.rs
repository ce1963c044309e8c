//! The pure state transition function.

use crate::{Action, AppState};

/// Apply one action to the state.
///
/// This is the only code that mutates [`AppState`]. The store calls it from
/// a single writer task, so actions apply in dispatch order.
pub fn reduce(state: &mut AppState, action: Action) {
    match action {
        Action::CartLoading => {
            state.cart.loading = true;
            state.cart.error = None;
        }
        Action::CartLoaded(cart) => {
            state.cart.cart = cart;
            state.cart.loading = false;
            state.cart.error = None;
        }
        Action::CartFailed(message) => {
            state.cart.loading = false;
            state.cart.error = Some(message);
        }

        Action::SearchStarted { generation } => {
            if generation < state.products.generation {
                return;
            }
            state.products.generation = generation;
            state.products.loading = true;
            state.products.error = None;
        }
        Action::SearchLoaded {
            generation,
            products,
            pagination,
        } => {
            if generation < state.products.generation {
                tracing::warn!(
                    generation,
                    current = state.products.generation,
                    "dropping stale search results"
                );
                return;
            }
            state.products.generation = generation;
            state.products.items = products;
            state.products.pagination = pagination;
            state.products.loading = false;
            state.products.error = None;
        }
        Action::SearchFailed {
            generation,
            message,
        } => {
            if generation < state.products.generation {
                tracing::warn!(generation, "dropping stale search failure");
                return;
            }
            state.products.loading = false;
            state.products.error = Some(message);
        }

        Action::DiscountApplied(discount) => {
            state.checkout.discount = Some(discount);
            state.checkout.error = None;
        }
        Action::DiscountCleared => {
            state.checkout.discount = None;
        }
        Action::PlacingOrder => {
            state.checkout.placing = true;
            state.checkout.error = None;
        }
        Action::OrderPlaced => {
            state.checkout.placing = false;
            state.checkout.discount = None;
        }
        Action::CheckoutFailed(message) => {
            state.checkout.placing = false;
            state.checkout.error = Some(message);
        }

        Action::OrdersLoading => {
            state.orders.loading = true;
            state.orders.error = None;
        }
        Action::OrdersLoaded { orders, pagination } => {
            state.orders.orders = orders;
            state.orders.pagination = pagination;
            state.orders.loading = false;
            state.orders.error = None;
        }
        Action::OrderUpdated(order) => {
            if let Some(existing) = state.orders.orders.iter_mut().find(|o| o.id == order.id) {
                *existing = order;
            } else {
                state.orders.orders.insert(0, order);
            }
        }
        Action::OrdersFailed(message) => {
            state.orders.loading = false;
            state.orders.error = Some(message);
        }

        Action::LoggedIn { email } => {
            state.auth.email = Some(email);
        }
        Action::LoggedOut => {
            state.auth = Default::default();
            state.cart = Default::default();
            state.orders = Default::default();
            state.checkout = Default::default();
        }
    }
}
