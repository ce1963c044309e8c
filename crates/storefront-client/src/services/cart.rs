//! Cart operations.
//!
//! Every mutation round-trips through the backend and the server-returned
//! cart replaces the slice verbatim. Nothing here updates optimistically and
//! nothing stores a subtotal.

use crate::ClientError;
use serde::Serialize;
use storefront_api::ApiClient;
use storefront_commerce::prelude::{Cart, CartItemId, ProductId};
use storefront_store::{Action, Store};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddItemBody<'a> {
    product_id: &'a str,
    quantity: i64,
}

#[derive(Serialize)]
struct QuantityBody {
    quantity: i64,
}

/// Cart mutations against `/api/cart`.
#[derive(Clone)]
pub struct CartService {
    api: ApiClient,
    store: Store,
}

impl CartService {
    pub fn new(api: ApiClient, store: Store) -> Self {
        Self { api, store }
    }

    /// Fetch the current cart.
    pub async fn fetch(&self) -> Result<Cart, ClientError> {
        self.store.dispatch(Action::CartLoading);
        self.publish(self.api.get("/api/cart").await).await
    }

    /// Add a product, returning the server's updated cart.
    pub async fn add_item(
        &self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<Cart, ClientError> {
        self.store.dispatch(Action::CartLoading);
        let body = AddItemBody {
            product_id: product_id.as_str(),
            quantity,
        };
        self.publish(self.api.post("/api/cart/items", &body).await)
            .await
    }

    /// Change an item's quantity.
    pub async fn update_quantity(
        &self,
        item_id: &CartItemId,
        quantity: i64,
    ) -> Result<Cart, ClientError> {
        self.store.dispatch(Action::CartLoading);
        let path = format!("/api/cart/items/{}", item_id.as_str());
        self.publish(self.api.put(&path, &QuantityBody { quantity }).await)
            .await
    }

    /// Remove an item, returning the server's updated cart.
    pub async fn remove_item(&self, item_id: &CartItemId) -> Result<Cart, ClientError> {
        self.store.dispatch(Action::CartLoading);
        let path = format!("/api/cart/items/{}", item_id.as_str());
        self.publish(self.api.delete_with_body(&path).await).await
    }

    /// Empty the cart.
    pub async fn clear(&self) -> Result<(), ClientError> {
        self.store.dispatch(Action::CartLoading);
        match self.api.delete("/api/cart").await {
            Ok(()) => {
                self.store.dispatch(Action::CartLoaded(Cart::default()));
                Ok(())
            }
            Err(err) => {
                self.store.dispatch(Action::CartFailed(err.user_message()));
                Err(err.into())
            }
        }
    }

    async fn publish(
        &self,
        result: Result<Cart, storefront_api::ApiError>,
    ) -> Result<Cart, ClientError> {
        match result {
            Ok(cart) => {
                self.store.dispatch(Action::CartLoaded(cart.clone()));
                Ok(cart)
            }
            Err(err) => {
                self.store.dispatch(Action::CartFailed(err.user_message()));
                Err(err.into())
            }
        }
    }
}
