//! Checkout: discount application and order placement.

use crate::ClientError;
use serde::{Deserialize, Serialize};
use storefront_api::ApiClient;
use storefront_commerce::prelude::{
    AppliedDiscount, Cart, CheckoutDraft, Order, PaymentMethod,
};
use storefront_store::{Action, Store};

#[derive(Serialize)]
struct DiscountBody<'a> {
    code: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlaceOrderBody<'a> {
    address_id: &'a str,
    payment_method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    discount_code: Option<&'a str>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaceOrderResponse {
    #[serde(flatten)]
    order: Order,
    /// Present only for gateway payments.
    #[serde(default)]
    payment_url: Option<String>,
}

/// What placing an order produced.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    /// Cash on delivery: the order is final, go to order history.
    Placed(Order),
    /// Gateway payment: send the customer to the payment page.
    RedirectToGateway { order: Order, payment_url: String },
}

/// Discount application and order placement against `/api/orders`.
#[derive(Clone)]
pub struct CheckoutService {
    api: ApiClient,
    store: Store,
}

impl CheckoutService {
    pub fn new(api: ApiClient, store: Store) -> Self {
        Self { api, store }
    }

    /// Ask the backend to validate a discount code.
    ///
    /// A blank code is a no-op: no request goes out and no discount is
    /// applied. The amount comes back from the server; the client never
    /// computes or second-guesses it.
    pub async fn apply_discount(
        &self,
        code: &str,
    ) -> Result<Option<AppliedDiscount>, ClientError> {
        let code = code.trim();
        if code.is_empty() {
            return Ok(None);
        }

        let discount: AppliedDiscount = self
            .api
            .post("/api/discounts/apply", &DiscountBody { code })
            .await?;
        self.store
            .dispatch(Action::DiscountApplied(discount.clone()));
        Ok(Some(discount))
    }

    /// Drop the applied discount.
    pub fn clear_discount(&self) {
        self.store.dispatch(Action::DiscountCleared);
    }

    /// Place an order from a validated draft.
    ///
    /// Local validation runs first; if the cart is empty or the address or
    /// payment method is missing, no request is made. On success the cart
    /// slice is reset for cash on delivery, or refreshed from the server for
    /// gateway payments (the order exists whether or not payment completes).
    pub async fn place_order(&self, draft: &CheckoutDraft) -> Result<CheckoutOutcome, ClientError> {
        draft.validate()?;
        let totals = draft.totals()?;
        tracing::debug!(
            final_amount = totals.final_amount.amount,
            "placing order"
        );

        // validate() guarantees both are present.
        let Some(address) = draft.shipping_address.as_ref() else {
            return Err(storefront_commerce::CommerceError::CheckoutIncomplete(
                "shipping address".into(),
            )
            .into());
        };
        let Some(payment) = draft.payment_method else {
            return Err(storefront_commerce::CommerceError::CheckoutIncomplete(
                "payment method".into(),
            )
            .into());
        };

        self.store.dispatch(Action::PlacingOrder);
        let body = PlaceOrderBody {
            address_id: address.id.as_str(),
            payment_method: payment.as_str(),
            discount_code: draft.discount.as_ref().map(|d| d.code.as_str()),
        };

        let response: PlaceOrderResponse = match self.api.post("/api/orders", &body).await {
            Ok(response) => response,
            Err(err) => {
                self.store
                    .dispatch(Action::CheckoutFailed(err.user_message()));
                return Err(err.into());
            }
        };

        let order = response.order;
        order.verify_totals()?;
        self.store.dispatch(Action::OrderPlaced);
        self.store.dispatch(Action::OrderUpdated(order.clone()));

        match payment {
            PaymentMethod::Cod => {
                // The server empties the cart when the order is final.
                self.store.dispatch(Action::CartLoaded(Cart::default()));
                Ok(CheckoutOutcome::Placed(order))
            }
            PaymentMethod::Gateway => {
                // The cart's fate depends on the payment flow; re-read it.
                self.refresh_cart().await;
                let payment_url = response.payment_url.ok_or_else(|| {
                    storefront_api::ApiError::Parse(
                        "missing payment url for gateway order".to_string(),
                    )
                })?;
                Ok(CheckoutOutcome::RedirectToGateway { order, payment_url })
            }
        }
    }

    async fn refresh_cart(&self) {
        match self.api.get::<Cart>("/api/cart").await {
            Ok(cart) => self.store.dispatch(Action::CartLoaded(cart)),
            Err(err) => {
                tracing::warn!(error = %err, "cart refresh after checkout failed");
                self.store.dispatch(Action::CartFailed(err.user_message()));
            }
        }
    }
}
