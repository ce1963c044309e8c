//! Typed identifiers for backend entities.
//!
//! Every id is an opaque string issued by the backend; wrapping each kind
//! in its own newtype keeps a `ProductId` from being handed to an API that
//! wants a `BrandId`. Serialized transparently as the bare string.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

entity_id!(/// Catalog product id.
    ProductId);
entity_id!(/// Product category id.
    CategoryId);
entity_id!(/// Product brand id.
    BrandId);
entity_id!(/// Shopping cart id.
    CartId);
entity_id!(/// Line item within a cart.
    CartItemId);
entity_id!(/// Placed order id.
    OrderId);
entity_id!(/// Line item within an order.
    OrderItemId);
entity_id!(/// Account id.
    UserId);
entity_id!(/// Saved shipping address id.
    AddressId);
entity_id!(/// Discount code id (admin side).
    DiscountId);
entity_id!(/// Blog post id.
    PostId);
entity_id!(/// Product review id.
    ReviewId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trips_as_bare_string() {
        let id = CartId::new("cart-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"cart-1\"");
        let back: CartId = serde_json::from_str("\"cart-1\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_id_displays_inner_value() {
        let id = OrderId::new("ord-789");
        assert_eq!(id.to_string(), "ord-789");
        assert_eq!(id.as_str(), "ord-789");
    }
}
