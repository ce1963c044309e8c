//! Storefront services.
//!
//! Each service wraps the API client and the state store: fetch, decode the
//! envelope, dispatch the result as an action. On failure the slice's
//! `*Failed` action carries the backend-provided message so the surface can
//! show it, and the error is returned to the caller.

mod error;
mod services;

pub use error::ClientError;
pub use services::account::{AccountService, Credentials, Registration, UserProfile, UserRole};
pub use services::admin::{
    AdminService, BrandInput, CategoryInput, DiscountCode, DiscountInput, DiscountRule,
    ProductInput, SalesReport,
};
pub use services::blog::{BlogService, Post, PostInput};
pub use services::cart::CartService;
pub use services::catalog::CatalogService;
pub use services::checkout::{CheckoutOutcome, CheckoutService};
pub use services::orders::OrderService;
pub use services::reviews::{NewReview, Review, ReviewService};
pub use services::uploads::{UploadService, UploadedImage};

use storefront_api::{ApiClient, TokenStore};
use storefront_store::Store;

/// All services bundled over one client and one store.
#[derive(Clone)]
pub struct Storefront {
    pub catalog: CatalogService,
    pub cart: CartService,
    pub checkout: CheckoutService,
    pub orders: OrderService,
    pub account: AccountService,
    pub blog: BlogService,
    pub reviews: ReviewService,
    pub uploads: UploadService,
    pub admin: AdminService,
    store: Store,
    token: TokenStore,
}

impl Storefront {
    /// Build the service bundle over a client and a store.
    pub fn new(api: ApiClient, store: Store) -> Self {
        let token = api.token_store().clone();
        Self {
            catalog: CatalogService::new(api.clone(), store.clone()),
            cart: CartService::new(api.clone(), store.clone()),
            checkout: CheckoutService::new(api.clone(), store.clone()),
            orders: OrderService::new(api.clone(), store.clone()),
            account: AccountService::new(api.clone(), store.clone()),
            blog: BlogService::new(api.clone()),
            reviews: ReviewService::new(api.clone()),
            uploads: UploadService::new(api.clone()),
            admin: AdminService::new(api),
            store,
            token,
        }
    }

    /// The underlying state store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// The bearer-token store shared with the API client.
    pub fn token_store(&self) -> &TokenStore {
        &self.token
    }
}
