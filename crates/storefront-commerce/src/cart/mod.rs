//! Cart types and subtotal derivation.

mod cart;

pub use cart::{Cart, CartItem, MAX_QUANTITY_PER_ITEM};
