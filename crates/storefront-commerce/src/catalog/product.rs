//! Product types as served by the catalog endpoints.

use crate::ids::{BrandId, CategoryId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Product status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    #[default]
    Active,
    Inactive,
    OutOfStock,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "ACTIVE",
            ProductStatus::Inactive => "INACTIVE",
            ProductStatus::OutOfStock => "OUT_OF_STOCK",
        }
    }

    /// Whether the product can be added to a cart.
    pub fn is_purchasable(&self) -> bool {
        matches!(self, ProductStatus::Active)
    }
}

/// A catalog product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Long description (may contain markup from the editor).
    #[serde(default)]
    pub description: Option<String>,
    /// Current list price.
    pub price: Money,
    /// Stock on hand as reported by the backend.
    #[serde(default)]
    pub stock: i64,
    /// Product status.
    #[serde(default)]
    pub status: ProductStatus,
    /// Category this product belongs to.
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    /// Brand this product belongs to.
    #[serde(default)]
    pub brand_id: Option<BrandId>,
    /// Product images.
    #[serde(default)]
    pub images: Vec<ProductImage>,
    /// Average review rating, 0.0 when unreviewed.
    #[serde(default)]
    pub average_rating: f64,
    /// Unix timestamp of creation.
    #[serde(default)]
    pub created_at: i64,
}

impl Product {
    /// Get the primary image, falling back to the first.
    pub fn primary_image(&self) -> Option<&ProductImage> {
        self.images
            .iter()
            .find(|i| i.is_primary)
            .or_else(|| self.images.first())
    }

    /// Check if the product is in stock.
    pub fn in_stock(&self) -> bool {
        self.stock > 0 && self.status.is_purchasable()
    }
}

/// Product image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    /// Image URL (served from the uploads endpoint).
    pub url: String,
    /// Alt text.
    #[serde(default)]
    pub alt: String,
    /// Whether this is the primary image.
    #[serde(default)]
    pub is_primary: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn make_product() -> Product {
        Product {
            id: ProductId::new("prod-1"),
            name: "Test Product".to_string(),
            slug: "test-product".to_string(),
            description: None,
            price: Money::new(100_000, Currency::VND),
            stock: 3,
            status: ProductStatus::Active,
            category_id: None,
            brand_id: None,
            images: vec![
                ProductImage {
                    url: "/api/uploads/images/a.jpg".to_string(),
                    alt: String::new(),
                    is_primary: false,
                },
                ProductImage {
                    url: "/api/uploads/images/b.jpg".to_string(),
                    alt: String::new(),
                    is_primary: true,
                },
            ],
            average_rating: 0.0,
            created_at: 0,
        }
    }

    #[test]
    fn test_status_wire_names_match_as_str() {
        for status in [
            ProductStatus::Active,
            ProductStatus::Inactive,
            ProductStatus::OutOfStock,
        ] {
            let wire = serde_json::to_string(&status).unwrap();
            assert_eq!(wire, format!("\"{}\"", status.as_str()));
            let back: ProductStatus = serde_json::from_str(&wire).unwrap();
            assert_eq!(back, status);
        }
        let parsed: ProductStatus = serde_json::from_str("\"OUT_OF_STOCK\"").unwrap();
        assert_eq!(parsed, ProductStatus::OutOfStock);
    }

    #[test]
    fn test_primary_image() {
        let product = make_product();
        assert_eq!(
            product.primary_image().unwrap().url,
            "/api/uploads/images/b.jpg"
        );
    }

    #[test]
    fn test_primary_image_fallback() {
        let mut product = make_product();
        for img in &mut product.images {
            img.is_primary = false;
        }
        assert_eq!(
            product.primary_image().unwrap().url,
            "/api/uploads/images/a.jpg"
        );
    }

    #[test]
    fn test_in_stock() {
        let mut product = make_product();
        assert!(product.in_stock());

        product.stock = 0;
        assert!(!product.in_stock());

        product.stock = 3;
        product.status = ProductStatus::Inactive;
        assert!(!product.in_stock());
    }

    #[test]
    fn test_product_wire_format() {
        let json = r#"{
            "id": "prod-9",
            "name": "Keyboard",
            "slug": "keyboard",
            "price": {"amount": 450000, "currency": "VND"},
            "stock": 12,
            "status": "ACTIVE",
            "categoryId": "cat-1",
            "brandId": "brand-2",
            "averageRating": 4.5,
            "createdAt": 1700000000
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price.amount, 450_000);
        assert_eq!(product.category_id, Some(CategoryId::new("cat-1")));
        assert!(product.images.is_empty());
    }
}
