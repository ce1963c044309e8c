//! Authentication and profile.

use crate::ClientError;
use serde::{Deserialize, Serialize};
use storefront_api::ApiClient;
use storefront_commerce::prelude::{Address, UserId};
use storefront_store::{Action, Store};

/// Role attached to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    #[default]
    Customer,
    Admin,
}

/// Profile as the backend returns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: UserRole,
}

/// Login credentials.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration payload.
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
    user: UserProfile,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfileUpdate<'a> {
    name: &'a str,
}

/// Session management against `/api/auth`.
#[derive(Clone)]
pub struct AccountService {
    api: ApiClient,
    store: Store,
}

impl AccountService {
    pub fn new(api: ApiClient, store: Store) -> Self {
        Self { api, store }
    }

    /// Sign in, storing the bearer token for subsequent requests.
    pub async fn login(&self, credentials: &Credentials) -> Result<UserProfile, ClientError> {
        let response: LoginResponse = self.api.post("/api/auth/login", credentials).await?;
        self.api.token_store().set(response.token);
        self.store.dispatch(Action::LoggedIn {
            email: response.user.email.clone(),
        });
        Ok(response.user)
    }

    /// Sign out: drop the token and clear user-scoped state.
    ///
    /// Purely local; the bearer token simply stops being sent.
    pub fn logout(&self) {
        self.api.token_store().clear();
        self.store.dispatch(Action::LoggedOut);
    }

    /// Create an account. The caller logs in separately.
    pub async fn register(&self, registration: &Registration) -> Result<UserProfile, ClientError> {
        let user = self.api.post("/api/auth/register", registration).await?;
        Ok(user)
    }

    /// Fetch the signed-in user's profile.
    pub async fn profile(&self) -> Result<UserProfile, ClientError> {
        let user = self.api.get("/api/auth/me").await?;
        Ok(user)
    }

    /// Update the profile display name.
    pub async fn update_profile(&self, name: &str) -> Result<UserProfile, ClientError> {
        let user = self
            .api
            .put("/api/auth/me", &ProfileUpdate { name })
            .await?;
        Ok(user)
    }

    /// List the shipping addresses on the account.
    pub async fn addresses(&self) -> Result<Vec<Address>, ClientError> {
        let addresses = self.api.get("/api/auth/addresses").await?;
        Ok(addresses)
    }
}
