//! Catalog browsing: products, categories, brands.

use crate::ClientError;
use storefront_api::{ApiClient, Pagination};
use storefront_commerce::prelude::{Brand, Category, Product, ProductId, ProductQuery};
use storefront_store::{Action, Debouncer, Store, SEARCH_DEBOUNCE};

/// Read side of the catalog.
#[derive(Clone)]
pub struct CatalogService {
    api: ApiClient,
    store: Store,
}

impl CatalogService {
    pub fn new(api: ApiClient, store: Store) -> Self {
        Self { api, store }
    }

    /// Run a product search and publish the results.
    ///
    /// Each call takes a fresh generation; results from an older call that
    /// land later are dropped by the store, so the slice always reflects the
    /// latest query.
    pub async fn search_products(
        &self,
        query: &ProductQuery,
    ) -> Result<(Vec<Product>, Option<Pagination>), ClientError> {
        let generation = self.store.next_generation();
        self.store.dispatch(Action::SearchStarted { generation });

        match self
            .api
            .get_paginated::<Vec<Product>>("/api/products", query.to_query_pairs())
            .await
        {
            Ok((products, pagination)) => {
                self.store.dispatch(Action::SearchLoaded {
                    generation,
                    products: products.clone(),
                    pagination,
                });
                Ok((products, pagination))
            }
            Err(err) => {
                self.store.dispatch(Action::SearchFailed {
                    generation,
                    message: err.user_message(),
                });
                Err(err.into())
            }
        }
    }

    /// Debounced entry point for as-you-type search.
    ///
    /// Submitted queries are coalesced; only the latest one in a 300 ms
    /// quiet window hits the backend. Results and errors land in the
    /// product slice like any other search, so callers watch the store
    /// rather than awaiting a return value.
    pub fn live_search(&self) -> Debouncer<ProductQuery> {
        let service = self.clone();
        Debouncer::new(SEARCH_DEBOUNCE, move |query: ProductQuery| {
            let service = service.clone();
            async move {
                // Failures are published to the slice by search_products.
                let _ = service.search_products(&query).await;
            }
        })
    }

    /// Fetch a single product.
    pub async fn get_product(&self, id: &ProductId) -> Result<Product, ClientError> {
        let product = self
            .api
            .get(&format!("/api/products/{}", id.as_str()))
            .await?;
        Ok(product)
    }

    /// Fetch a single product by its URL slug.
    pub async fn get_product_by_slug(&self, slug: &str) -> Result<Product, ClientError> {
        let product = self.api.get(&format!("/api/products/slug/{slug}")).await?;
        Ok(product)
    }

    /// List all categories.
    pub async fn list_categories(&self) -> Result<Vec<Category>, ClientError> {
        let categories = self.api.get("/api/categories").await?;
        Ok(categories)
    }

    /// List all brands.
    pub async fn list_brands(&self) -> Result<Vec<Brand>, ClientError> {
        let brands = self.api.get("/api/brands").await?;
        Ok(brands)
    }
}
