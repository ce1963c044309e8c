//! Back-office CRUD and reporting.
//!
//! Everything here talks to `/api/admin/*`; the backend enforces the admin
//! role and rejects with 401/403, which surfaces like any other error.

use crate::ClientError;
use serde::{Deserialize, Serialize};
use storefront_api::{ApiClient, Pagination};
use storefront_commerce::prelude::{
    Brand, BrandId, Category, CategoryId, DiscountId, Money, Order, Product, ProductId,
    ProductStatus, UserId,
};

use super::account::UserProfile;

/// Fields for creating or updating a product.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    pub price: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub stock: i64,
    pub status: ProductStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<BrandId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub image_urls: Vec<String>,
}

/// Fields for creating or updating a category.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<CategoryId>,
}

/// Fields for creating or updating a brand.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

/// How a discount code computes its deduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DiscountRule {
    /// Fixed amount off the subtotal.
    Fixed,
    /// Percentage off the subtotal.
    Percent,
}

/// Fields for creating or updating a discount code.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountInput {
    pub code: String,
    pub rule: DiscountRule,
    /// Minor units for `Fixed`, whole percent for `Percent`.
    pub value: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
}

/// A discount code as stored (back-office view).
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiscountCode {
    pub id: DiscountId,
    pub code: String,
    pub rule: DiscountRule,
    pub value: i64,
    #[serde(default)]
    pub expires_at: Option<i64>,
}

/// Aggregated sales numbers for a period.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
    pub total_revenue: Money,
    pub order_count: i64,
    #[serde(default)]
    pub cancelled_count: i64,
}

/// Back-office operations against `/api/admin`.
#[derive(Clone)]
pub struct AdminService {
    api: ApiClient,
}

impl AdminService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    // Products

    pub async fn create_product(&self, input: &ProductInput) -> Result<Product, ClientError> {
        Ok(self.api.post("/api/admin/products", input).await?)
    }

    pub async fn update_product(
        &self,
        id: &ProductId,
        input: &ProductInput,
    ) -> Result<Product, ClientError> {
        let path = format!("/api/admin/products/{}", id.as_str());
        Ok(self.api.put(&path, input).await?)
    }

    pub async fn delete_product(&self, id: &ProductId) -> Result<(), ClientError> {
        let path = format!("/api/admin/products/{}", id.as_str());
        Ok(self.api.delete(&path).await?)
    }

    // Categories

    pub async fn create_category(&self, input: &CategoryInput) -> Result<Category, ClientError> {
        Ok(self.api.post("/api/admin/categories", input).await?)
    }

    pub async fn update_category(
        &self,
        id: &CategoryId,
        input: &CategoryInput,
    ) -> Result<Category, ClientError> {
        let path = format!("/api/admin/categories/{}", id.as_str());
        Ok(self.api.put(&path, input).await?)
    }

    pub async fn delete_category(&self, id: &CategoryId) -> Result<(), ClientError> {
        let path = format!("/api/admin/categories/{}", id.as_str());
        Ok(self.api.delete(&path).await?)
    }

    // Brands

    pub async fn create_brand(&self, input: &BrandInput) -> Result<Brand, ClientError> {
        Ok(self.api.post("/api/admin/brands", input).await?)
    }

    pub async fn update_brand(
        &self,
        id: &BrandId,
        input: &BrandInput,
    ) -> Result<Brand, ClientError> {
        let path = format!("/api/admin/brands/{}", id.as_str());
        Ok(self.api.put(&path, input).await?)
    }

    pub async fn delete_brand(&self, id: &BrandId) -> Result<(), ClientError> {
        let path = format!("/api/admin/brands/{}", id.as_str());
        Ok(self.api.delete(&path).await?)
    }

    // Discount codes

    pub async fn list_discounts(&self) -> Result<Vec<DiscountCode>, ClientError> {
        Ok(self.api.get("/api/admin/discounts").await?)
    }

    pub async fn create_discount(&self, input: &DiscountInput) -> Result<DiscountCode, ClientError> {
        Ok(self.api.post("/api/admin/discounts", input).await?)
    }

    pub async fn delete_discount(&self, id: &DiscountId) -> Result<(), ClientError> {
        let path = format!("/api/admin/discounts/{}", id.as_str());
        Ok(self.api.delete(&path).await?)
    }

    // Users

    pub async fn list_users(
        &self,
        page: i64,
        size: i64,
    ) -> Result<(Vec<UserProfile>, Option<Pagination>), ClientError> {
        let query = vec![
            ("page".to_string(), (page - 1).max(0).to_string()),
            ("size".to_string(), size.to_string()),
        ];
        Ok(self.api.get_paginated("/api/admin/users", query).await?)
    }

    pub async fn delete_user(&self, id: &UserId) -> Result<(), ClientError> {
        let path = format!("/api/admin/users/{}", id.as_str());
        Ok(self.api.delete(&path).await?)
    }

    // Orders and reporting

    /// All orders across customers, paginated.
    pub async fn list_orders(
        &self,
        page: i64,
        size: i64,
    ) -> Result<(Vec<Order>, Option<Pagination>), ClientError> {
        let query = vec![
            ("page".to_string(), (page - 1).max(0).to_string()),
            ("size".to_string(), size.to_string()),
        ];
        Ok(self.api.get_paginated("/api/admin/orders", query).await?)
    }

    /// Sales totals between two unix timestamps (inclusive).
    pub async fn sales_report(&self, from: i64, to: i64) -> Result<SalesReport, ClientError> {
        let query = vec![
            ("from".to_string(), from.to_string()),
            ("to".to_string(), to.to_string()),
        ];
        let (report, _) = self
            .api
            .get_paginated("/api/admin/reports/sales", query)
            .await?;
        Ok(report)
    }
}
