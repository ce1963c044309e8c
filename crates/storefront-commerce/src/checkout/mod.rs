//! Checkout types: totals, submission draft, orders.

mod address;
mod draft;
mod order;
mod totals;

pub use address::Address;
pub use draft::{AppliedDiscount, CheckoutDraft};
pub use order::{Order, OrderItem, OrderStatus, PaymentMethod};
pub use totals::{OrderTotals, SHIPPING_FEE};
