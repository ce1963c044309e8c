//! Single-writer application state.
//!
//! All mutations flow through one channel into one writer task; readers get
//! cheap snapshots through a watch channel. There is exactly one place where
//! state changes, which keeps the cart and checkout slices consistent no
//! matter how many concurrent requests are in flight.

mod action;
mod debounce;
mod reducer;
mod state;
mod store;

pub use action::Action;
pub use debounce::{Debouncer, SEARCH_DEBOUNCE};
pub use reducer::reduce;
pub use state::{AppState, AuthSlice, CartSlice, CheckoutSlice, OrderSlice, ProductSlice};
pub use store::Store;
