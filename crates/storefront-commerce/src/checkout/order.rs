//! Order types.

use crate::checkout::{Address, OrderTotals};
use crate::error::CommerceError;
use crate::ids::{OrderId, OrderItemId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Order status, server-authoritative.
///
/// The client never validates transitions; it requests one and re-renders
/// from the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    /// Order placed, awaiting processing.
    #[default]
    Pending,
    /// Order confirmed and being prepared.
    Processing,
    /// Order handed to the carrier.
    Shipped,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Processing => "PROCESSING",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Parse a wire status string.
    pub fn parse(s: &str) -> Result<Self, CommerceError> {
        match s.to_uppercase().as_str() {
            "PENDING" => Ok(OrderStatus::Pending),
            "PROCESSING" => Ok(OrderStatus::Processing),
            "SHIPPED" => Ok(OrderStatus::Shipped),
            "DELIVERED" => Ok(OrderStatus::Delivered),
            "CANCELLED" => Ok(OrderStatus::Cancelled),
            _ => Err(CommerceError::UnknownValue {
                field: "order status",
                value: s.to_string(),
            }),
        }
    }

    /// All statuses, in display order (for the admin status picker).
    pub fn all() -> [OrderStatus; 5] {
        [
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ]
    }

    /// Check if the order reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

/// Payment method selected at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentMethod {
    /// Cash on delivery.
    Cod,
    /// External payment gateway (redirect flow).
    Gateway,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cod => "COD",
            PaymentMethod::Gateway => "GATEWAY",
        }
    }

    /// Parse a wire payment method string.
    pub fn parse(s: &str) -> Result<Self, CommerceError> {
        match s.to_uppercase().as_str() {
            "COD" => Ok(PaymentMethod::Cod),
            "GATEWAY" => Ok(PaymentMethod::Gateway),
            _ => Err(CommerceError::UnknownValue {
                field: "payment method",
                value: s.to_string(),
            }),
        }
    }
}

/// A line item in an order, snapshotted from the cart at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Unique order item identifier.
    pub id: OrderItemId,
    /// Product ID.
    pub product_id: ProductId,
    /// Product name at time of order.
    pub product_name: String,
    /// Quantity ordered.
    pub quantity: i64,
    /// Unit price at time of order.
    pub unit_price: Money,
}

impl OrderItem {
    /// Line total: unit price times quantity.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.unit_price.try_mul(self.quantity)
    }
}

/// An immutable snapshot of cart contents plus shipping and payment
/// metadata, created at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Items in the order.
    pub items: Vec<OrderItem>,
    /// Subtotal before discounts.
    pub total_amount: Money,
    /// Discount deducted.
    pub discount_amount: Money,
    /// Shipping fee charged.
    pub shipping_fee: Money,
    /// Amount to pay.
    pub final_amount: Money,
    /// Order status.
    pub status: OrderStatus,
    /// Payment method.
    pub payment_method: PaymentMethod,
    /// Shipping address snapshot.
    pub shipping_address: Address,
    /// Unix timestamp of creation.
    #[serde(default)]
    pub created_at: i64,
}

impl Order {
    /// Total item count.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Verify `final == total - discount + shipping` on a server-returned
    /// order. A failure here means the backend and client disagree on
    /// pricing and the order should not be rendered as-is.
    pub fn verify_totals(&self) -> Result<(), CommerceError> {
        let totals = OrderTotals {
            total_amount: self.total_amount,
            discount_amount: self.discount_amount,
            shipping_fee: self.shipping_fee,
            final_amount: self.final_amount,
        };
        if totals.is_consistent() {
            Ok(())
        } else {
            Err(CommerceError::InconsistentTotals(self.id.to_string()))
        }
    }
}
