//! Product reviews.

use crate::ClientError;
use serde::{Deserialize, Serialize};
use storefront_api::ApiClient;
use storefront_commerce::prelude::{ProductId, ReviewId};

/// A review as the backend returns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    #[serde(default)]
    pub author: Option<String>,
    /// 1 to 5 stars.
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub created_at: i64,
}

/// A review to submit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub product_id: ProductId,
    pub rating: u8,
    pub comment: String,
}

/// Reviews against `/api/reviews/add` and per-product listing.
#[derive(Clone)]
pub struct ReviewService {
    api: ApiClient,
}

impl ReviewService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Submit a review for a purchased product.
    pub async fn add_review(&self, review: &NewReview) -> Result<Review, ClientError> {
        let created = self.api.post("/api/reviews/add", review).await?;
        Ok(created)
    }

    /// List reviews for a product.
    pub async fn list_for_product(&self, id: &ProductId) -> Result<Vec<Review>, ClientError> {
        let reviews = self
            .api
            .get(&format!("/api/products/{}/reviews", id.as_str()))
            .await?;
        Ok(reviews)
    }
}
