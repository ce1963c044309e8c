//! Order history and status changes.

use crate::ClientError;
use serde::Serialize;
use storefront_api::{ApiClient, Pagination};
use storefront_commerce::prelude::{Order, OrderId, OrderStatus};
use storefront_store::{Action, Store};

#[derive(Serialize)]
struct StatusBody<'a> {
    status: &'a str,
}

/// Order history against `/api/orders`.
#[derive(Clone)]
pub struct OrderService {
    api: ApiClient,
    store: Store,
}

impl OrderService {
    pub fn new(api: ApiClient, store: Store) -> Self {
        Self { api, store }
    }

    /// Fetch a page of order history. `page` is 1-indexed.
    pub async fn history(
        &self,
        page: i64,
        size: i64,
    ) -> Result<(Vec<Order>, Option<Pagination>), ClientError> {
        self.store.dispatch(Action::OrdersLoading);
        let query = vec![
            ("page".to_string(), (page - 1).max(0).to_string()),
            ("size".to_string(), size.to_string()),
        ];
        match self.api.get_paginated("/api/orders", query).await {
            Ok((orders, pagination)) => {
                let orders: Vec<Order> = orders;
                self.store.dispatch(Action::OrdersLoaded {
                    orders: orders.clone(),
                    pagination,
                });
                Ok((orders, pagination))
            }
            Err(err) => {
                self.store
                    .dispatch(Action::OrdersFailed(err.user_message()));
                Err(err.into())
            }
        }
    }

    /// Fetch a single order.
    pub async fn detail(&self, id: &OrderId) -> Result<Order, ClientError> {
        let order: Order = self
            .api
            .get(&format!("/api/orders/{}", id.as_str()))
            .await?;
        order.verify_totals()?;
        Ok(order)
    }

    /// Request a status change (back-office).
    ///
    /// No transition rules run locally; the server decides and the returned
    /// order is whatever it settled on.
    pub async fn set_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, ClientError> {
        let path = format!("/api/admin/orders/{}/status", id.as_str());
        let order: Order = self
            .api
            .put(
                &path,
                &StatusBody {
                    status: status.as_str(),
                },
            )
            .await?;
        self.store.dispatch(Action::OrderUpdated(order.clone()));
        Ok(order)
    }

    /// Cancel an order as the customer.
    pub async fn cancel(&self, id: &OrderId) -> Result<Order, ClientError> {
        let path = format!("/api/orders/{}/cancel", id.as_str());
        let order: Order = self.api.put(&path, &serde_json::json!({})).await?;
        self.store.dispatch(Action::OrderUpdated(order.clone()));
        Ok(order)
    }
}
